#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::core::CatalogItem;

pub const DEFAULT_SEARCH: &str = "The Great Gatsby";

/// Items used when no seed file is given.
pub fn sample_items() -> Vec<CatalogItem> {
    vec![
        CatalogItem::book("The Great Gatsby", "F. Scott Fitzgerald"),
        CatalogItem::magazine("National Geographic", "Various"),
        CatalogItem::cd("Abbey Road", "The Beatles"),
    ]
}
