use crate::core::manager::CatalogManager;
use crate::core::{ConfigProvider, Result, SearchReport};

/// Seeds a catalog from a config, applies its removals and runs its searches.
pub struct CatalogEngine<C: ConfigProvider> {
    config: C,
    manager: CatalogManager,
}

impl<C: ConfigProvider> CatalogEngine<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            manager: CatalogManager::default(),
        }
    }

    pub fn run(&mut self) -> Result<Vec<SearchReport>> {
        tracing::info!("Starting catalog run");
        self.manager = CatalogManager::default();

        // Seed
        for item in self.config.seed_items() {
            self.manager
                .add_item(item.title(), item.author(), item.kind());
        }
        tracing::info!("Seeded {} items", self.manager.catalog().len());

        // Remove
        for title in self.config.removals() {
            let removed = self.manager.remove_item(title);
            tracing::info!("Removed {} item(s) titled '{}'", removed, title);
        }

        // Search
        let reports: Vec<SearchReport> = self
            .config
            .searches()
            .iter()
            .map(|query| {
                let matches = self.manager.search_item(query);
                tracing::info!("Search '{}' found {} item(s)", query, matches.len());
                SearchReport {
                    query: query.clone(),
                    matches,
                }
            })
            .collect();

        Ok(reports)
    }

    pub fn manager(&self) -> &CatalogManager {
        &self.manager
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

/// One `Title: .., Author: .., Type: ..` line per match.
pub fn render_text(reports: &[SearchReport]) -> String {
    reports
        .iter()
        .flat_map(|report| report.matches.iter())
        .map(|item| format!("{}\n", item))
        .collect()
}

pub fn render_json(reports: &[SearchReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CatalogItem;

    struct StaticConfig {
        items: Vec<CatalogItem>,
        searches: Vec<String>,
        removals: Vec<String>,
    }

    impl ConfigProvider for StaticConfig {
        fn seed_items(&self) -> Vec<CatalogItem> {
            self.items.clone()
        }

        fn searches(&self) -> &[String] {
            &self.searches
        }

        fn removals(&self) -> &[String] {
            &self.removals
        }
    }

    #[test]
    fn test_removals_apply_before_searches() {
        let config = StaticConfig {
            items: vec![
                CatalogItem::book("Dune", "Frank Herbert"),
                CatalogItem::cd("Abbey Road", "The Beatles"),
            ],
            searches: vec!["dune".to_string(), "abbey road".to_string()],
            removals: vec!["Dune".to_string()],
        };

        let mut engine = CatalogEngine::new(config);
        let reports = engine.run().unwrap();

        assert_eq!(reports.len(), 2);
        assert!(reports[0].matches.is_empty());
        assert_eq!(reports[1].matches.len(), 1);
        assert_eq!(engine.manager().catalog().len(), 1);
    }

    #[test]
    fn test_run_twice_starts_fresh() {
        let config = StaticConfig {
            items: vec![CatalogItem::book("Dune", "Frank Herbert")],
            searches: vec![],
            removals: vec![],
        };

        let mut engine = CatalogEngine::new(config);
        engine.run().unwrap();
        engine.run().unwrap();
        assert_eq!(engine.manager().catalog().len(), 1);
    }

    #[test]
    fn test_render_text_and_json() {
        let reports = vec![SearchReport {
            query: "abbey road".to_string(),
            matches: vec![CatalogItem::cd("Abbey Road", "The Beatles")],
        }];

        assert_eq!(
            render_text(&reports),
            "Title: Abbey Road, Author: The Beatles, Type: CD\n"
        );

        let json: serde_json::Value = serde_json::from_str(&render_json(&reports).unwrap()).unwrap();
        assert_eq!(json[0]["query"], "abbey road");
        assert_eq!(json[0]["matches"][0]["kind"], "CD");
    }
}
