use serde::{Deserialize, Serialize};
use std::fmt;

/// Well-known kind labels. The set is open: any string is a valid kind.
pub struct ItemKind;

impl ItemKind {
    pub const BOOK: &'static str = "Book";
    pub const MAGAZINE: &'static str = "Magazine";
    pub const CD: &'static str = "CD";
}

/// One catalog entry. Equality is structural over title, author and kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogItem {
    title: String,
    author: String,
    kind: String,
}

impl CatalogItem {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            kind: kind.into(),
        }
    }

    pub fn book(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self::new(title, author, ItemKind::BOOK)
    }

    pub fn magazine(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self::new(title, author, ItemKind::MAGAZINE)
    }

    pub fn cd(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self::new(title, author, ItemKind::CD)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Exact title comparison, ignoring ASCII case only.
    pub fn matches_title(&self, query: &str) -> bool {
        self.title.eq_ignore_ascii_case(query)
    }
}

impl fmt::Display for CatalogItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, Type: {}",
            self.title, self.author, self.kind
        )
    }
}

/// Result of one title search, as produced by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    pub query: String,
    pub matches: Vec<CatalogItem>,
}
