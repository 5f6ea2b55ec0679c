use crate::config::{sample_items, DEFAULT_SEARCH};
use crate::core::{CatalogItem, ConfigProvider};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "library-catalog")]
#[command(about = "Add, remove and search items in an in-memory library catalog")]
pub struct CliConfig {
    /// TOML file listing the items to start with
    #[arg(short, long)]
    pub config: Option<String>,

    /// Title to search for (repeatable)
    #[arg(short, long)]
    pub search: Vec<String>,

    /// Title to remove before searching (repeatable)
    #[arg(short, long)]
    pub remove: Vec<String>,

    /// Print search reports as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Falls back to the demo search when no `--search` was given.
    pub fn with_default_search(mut self) -> Self {
        if self.search.is_empty() {
            self.search.push(DEFAULT_SEARCH.to_string());
        }
        self
    }
}

impl ConfigProvider for CliConfig {
    fn seed_items(&self) -> Vec<CatalogItem> {
        sample_items()
    }

    fn searches(&self) -> &[String] {
        &self.search
    }

    fn removals(&self) -> &[String] {
        &self.remove
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repeated_flags() {
        let config = CliConfig::parse_from([
            "library-catalog",
            "-s",
            "Abbey Road",
            "--search",
            "Dune",
            "-r",
            "Dune",
            "--json",
        ]);

        assert_eq!(config.searches(), &["Abbey Road".to_string(), "Dune".to_string()]);
        assert_eq!(config.removals(), &["Dune".to_string()]);
        assert!(config.json);
        assert!(config.config.is_none());
    }

    #[test]
    fn test_default_search_and_sample_items() {
        let config = CliConfig::parse_from(["library-catalog"]).with_default_search();
        assert_eq!(config.searches(), &[DEFAULT_SEARCH.to_string()]);
        assert_eq!(config.seed_items().len(), 3);
    }

    #[test]
    fn test_explicit_search_keeps_its_value() {
        let config =
            CliConfig::parse_from(["library-catalog", "-s", "Abbey Road"]).with_default_search();
        assert_eq!(config.searches(), &["Abbey Road".to_string()]);
    }

    #[test]
    fn test_empty_config_path_rejected() {
        let config = CliConfig::parse_from(["library-catalog", "--config", ""]);
        assert!(config.validate().is_err());
    }
}
