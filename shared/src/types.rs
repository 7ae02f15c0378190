use serde::{Deserialize, Serialize};

// ============================================================================
// FAQ Types
// ============================================================================

/// One FAQ entry: a question and its answer.
///
/// Items are identified by their position in the catalog; they carry no id
/// of their own and are never mutated after the catalog is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub title: String,
    pub text: String,
}

// ============================================================================
// Tests
// ============================================================================
