use crate::domain::model::CatalogItem;

/// Source of the items a run starts with and the operations it performs.
pub trait ConfigProvider {
    fn seed_items(&self) -> Vec<CatalogItem>;
    fn searches(&self) -> &[String];
    fn removals(&self) -> &[String];
}
