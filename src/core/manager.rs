use crate::core::catalog::Catalog;
use crate::core::CatalogItem;

/// Title-oriented facade over a [`Catalog`].
#[derive(Debug, Clone, Default)]
pub struct CatalogManager {
    catalog: Catalog,
}

impl CatalogManager {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn add_item(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        kind: impl Into<String>,
    ) {
        self.catalog.add(CatalogItem::new(title, author, kind));
    }

    /// Removes every item whose title matches `title`. Returns how many went.
    pub fn remove_item(&mut self, title: &str) -> usize {
        let matches = self.catalog.search(title);
        let mut removed = 0;
        for item in &matches {
            if self.catalog.remove(item) {
                removed += 1;
            }
        }
        tracing::debug!("Removed {} item(s) titled '{}'", removed, title);
        removed
    }

    pub fn search_item(&self, title: &str) -> Vec<CatalogItem> {
        self.catalog.search(title)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
