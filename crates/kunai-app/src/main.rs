use std::process::ExitCode;

use clap::Parser;
use kunai_app::cli::{Cli, Commands};
use kunai_app::{logging, report};
use kunai_core::config::{ValidationConfig, load_config};
use kunai_rfc::rfc::ical::kind::{PropertyKind, entry};

fn main() -> anyhow::Result<ExitCode> {
    let filter_handle = logging::init();
    let cli = Cli::parse();

    let config = load_config()?;
    tracing::debug!(config = ?config, "Configuration loaded");

    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    logging::apply_level(&filter_handle, level);

    match cli.command {
        Commands::Check {
            property,
            value,
            lenient,
        } => {
            let policy = if lenient {
                ValidationConfig::lenient()
            } else {
                config.validation
            };
            let outcome = report::check(&property, value.as_deref(), policy);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}", report::render_check(&outcome));
            }
            if !outcome.valid {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Show { property } => {
            let kind = PropertyKind::parse(&property);
            if kind == PropertyKind::Unknown {
                tracing::info!(%property, "Not a registered property, showing extension rules");
            }
            let rules = entry(kind);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(rules)?);
            } else {
                println!("{}", report::render_entry(rules));
            }
        }
        Commands::Table => {
            if cli.json {
                println!("{}", report::table_json()?);
            } else {
                print!("{}", report::render_table());
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
