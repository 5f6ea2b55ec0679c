use crate::core::CatalogItem;

/// Ordered collection of catalog items. Insertion order is kept and duplicates
/// are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item` to the end of the catalog.
    pub fn add(&mut self, item: CatalogItem) {
        tracing::debug!("Adding item: {}", item);
        self.items.push(item);
    }

    /// Removes the first item equal to `item`. Returns false, leaving the
    /// catalog untouched, when there is no such item.
    pub fn remove(&mut self, item: &CatalogItem) -> bool {
        match self.items.iter().position(|existing| existing == item) {
            Some(index) => {
                self.items.remove(index);
                tracing::debug!("Removed item: {}", item);
                true
            }
            None => {
                tracing::debug!("No item to remove: {}", item);
                false
            }
        }
    }

    /// Every item whose title equals `title` ignoring ASCII case, in catalog order.
    pub fn search(&self, title: &str) -> Vec<CatalogItem> {
        self.items
            .iter()
            .filter(|item| item.matches_title(title))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogItem> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogItem;
    type IntoIter = std::slice::Iter<'a, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
