use clap::Parser;
use library_catalog::core::engine::{render_json, render_text};
use library_catalog::core::ConfigProvider;
use library_catalog::utils::logger::{self, LogFormat};
use library_catalog::utils::validation::Validate;
use library_catalog::{CatalogEngine, CatalogError, CliConfig, TomlConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if let Err(e) = cli.validate() {
        fail(&e);
    }

    let json_output = cli.json;

    match cli.config.clone() {
        Some(path) => {
            let mut config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(e.exit_code());
                }
            };

            if let Err(e) = config.validate() {
                fail(&e);
            }

            logger::init_logger(&config.effective_level(cli.verbose), config.log_format());
            tracing::info!("📁 Loaded catalog '{}' from {}", config.catalog_name(), path);

            config.apply_overrides(&cli.search, &cli.remove);
            run(CatalogEngine::new(config), json_output)
        }
        None => {
            logger::init_logger(logger::cli_level(cli.verbose), LogFormat::Compact);
            tracing::debug!("CLI config: {:?}", cli);
            run(CatalogEngine::new(cli.with_default_search()), json_output)
        }
    }
}

fn run<C: ConfigProvider>(mut engine: CatalogEngine<C>, json_output: bool) -> anyhow::Result<()> {
    if engine.config().searches().is_empty() {
        tracing::warn!("No searches configured; nothing to print");
    }

    let output = engine.run().and_then(|reports| {
        if json_output {
            render_json(&reports).map(|json| format!("{}\n", json))
        } else {
            Ok(render_text(&reports))
        }
    });

    match output {
        Ok(text) => {
            print!("{}", text);
            Ok(())
        }
        Err(e) => fail(&e),
    }
}

fn fail(e: &CatalogError) -> ! {
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
