pub mod catalog;
pub mod types;

pub use catalog::{parse_catalog, CatalogError};
pub use types::*;
