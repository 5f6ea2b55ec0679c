pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use core::{catalog::Catalog, engine::CatalogEngine, manager::CatalogManager};
pub use domain::model::{CatalogItem, ItemKind, SearchReport};
pub use utils::error::{CatalogError, Result};
