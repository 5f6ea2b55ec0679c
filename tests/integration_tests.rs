use anyhow::Result;
use library_catalog::core::engine::render_json;
use library_catalog::utils::validation::Validate;
use library_catalog::{CatalogEngine, CatalogError, TomlConfig};
use tempfile::TempDir;

#[test]
fn test_end_to_end_with_seed_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("catalog.toml");

    std::fs::write(
        &config_path,
        r#"
searches = ["DUNE"]

[catalog]
name = "Branch library"

[[items]]
title = "Dune"
author = "Frank Herbert"
kind = "Book"

[[items]]
title = "Dune"
author = "Hans Zimmer"
kind = "CD"

[[items]]
title = "Wired"
author = "Various"
kind = "Magazine"
"#,
    )?;

    let mut config = TomlConfig::from_file(&config_path)?;
    config.validate()?;
    config.apply_overrides(&["wired".to_string()], &[]);

    let mut engine = CatalogEngine::new(config);
    let reports = engine.run()?;

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].matches.len(), 2);
    assert_eq!(reports[0].matches[0].author(), "Frank Herbert");
    assert_eq!(reports[0].matches[1].author(), "Hans Zimmer");
    assert_eq!(reports[1].matches.len(), 1);

    let json: serde_json::Value = serde_json::from_str(&render_json(&reports)?)?;
    assert_eq!(json[0]["query"], "DUNE");
    assert_eq!(json[0]["matches"][1]["kind"], "CD");
    assert_eq!(json[1]["matches"][0]["title"], "Wired");
    Ok(())
}

#[test]
fn test_missing_seed_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = TomlConfig::from_file(temp_dir.path().join("absent.toml")).unwrap_err();

    assert!(matches!(err, CatalogError::IoError(_)));
    assert_eq!(err.exit_code(), 3);
}

#[cfg(feature = "cli")]
mod cli_runs {
    use super::*;
    use clap::Parser;
    use library_catalog::core::engine::render_text;
    use library_catalog::CliConfig;

    #[test]
    fn test_cli_demo_run() -> Result<()> {
        let config = CliConfig::parse_from(["library-catalog"]).with_default_search();
        let mut engine = CatalogEngine::new(config);

        let reports = engine.run()?;

        assert_eq!(reports.len(), 1);
        assert_eq!(
            render_text(&reports),
            "Title: The Great Gatsby, Author: F. Scott Fitzgerald, Type: Book\n"
        );
        assert_eq!(engine.manager().catalog().len(), 3);
        Ok(())
    }

    #[test]
    fn test_cli_remove_then_search() -> Result<()> {
        let config = CliConfig::parse_from([
            "library-catalog",
            "--remove",
            "abbey road",
            "--search",
            "Abbey Road",
            "--search",
            "national geographic",
        ]);
        let mut engine = CatalogEngine::new(config);

        let reports = engine.run()?;

        assert!(reports[0].matches.is_empty());
        assert_eq!(reports[1].matches[0].kind(), "Magazine");
        assert_eq!(engine.manager().catalog().len(), 2);
        Ok(())
    }
}
