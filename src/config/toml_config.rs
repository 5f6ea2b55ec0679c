use crate::core::{CatalogItem, ConfigProvider};
use crate::utils::error::{CatalogError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_required_field, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub catalog: Option<CatalogSection>,
    #[serde(default)]
    pub items: Vec<CatalogItem>,
    #[serde(default)]
    pub searches: Vec<String>,
    #[serde(default)]
    pub removals: Vec<String>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSection {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl TomlConfig {
    /// Load a seed file from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse a seed file after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    // Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        let catalog = validate_required_field("catalog", &self.catalog)?;
        validate_non_empty_string("catalog.name", &catalog.name)?;

        if let Some(logging) = &self.logging {
            if let Some(level) = &logging.level {
                validate_one_of("logging.level", level, &LOG_LEVELS)?;
            }
            if let Some(format) = &logging.format {
                validate_one_of("logging.format", format, &LOG_FORMATS)?;
            }
        }

        Ok(())
    }

    /// Adds searches and removals given on the command line after the file's own.
    pub fn apply_overrides(&mut self, searches: &[String], removals: &[String]) {
        self.searches.extend_from_slice(searches);
        self.removals.extend_from_slice(removals);
    }

    pub fn catalog_name(&self) -> &str {
        self.catalog.as_ref().map(|c| c.name.as_str()).unwrap_or("")
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or("info")
    }

    /// Level handed to the logger. `--verbose` raises anything quieter than debug.
    pub fn effective_level(&self, verbose: bool) -> String {
        let level = self.log_level().to_ascii_lowercase();
        if verbose && level != "trace" {
            "debug".to_string()
        } else {
            level
        }
    }

    pub fn log_format(&self) -> LogFormat {
        let json = self
            .logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .map(|f| f.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if json {
            LogFormat::Json
        } else {
            LogFormat::Compact
        }
    }
}

impl ConfigProvider for TomlConfig {
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

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
