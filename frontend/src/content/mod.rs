use shared::FaqItem;

/// Load the FAQ catalog embedded at compile time.
///
/// A malformed catalog degrades to an empty list, which the page renders as
/// an empty state instead of faulting.
pub fn faq_items() -> Vec<FaqItem> {
    let json = include_str!("faqs.json");
    shared::parse_catalog(json).unwrap_or_default()
}
