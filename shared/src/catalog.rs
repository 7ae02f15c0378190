use thiserror::Error;

use crate::types::FaqItem;

/// Error raised when an embedded FAQ catalog cannot be parsed.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a FAQ catalog from JSON: an array of `{ "title", "text" }` objects.
///
/// The order of the array is the display order of the panels.
pub fn parse_catalog(json: &str) -> Result<Vec<FaqItem>, CatalogError> {
    let items = serde_json::from_str(json)?;
    Ok(items)
}
