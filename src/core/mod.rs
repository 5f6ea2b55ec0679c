pub mod catalog;
pub mod engine;
pub mod manager;

pub use crate::domain::model::{CatalogItem, ItemKind, SearchReport};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
