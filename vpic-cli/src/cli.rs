use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{CustomType, Text};
use vpic_core::{Config, ModelsRequest, VpicService, until_cancelled};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "vpic", version, about = "Vehicle lookups against the NHTSA vPIC API")]
pub struct Cli {
    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decode a 17-character VIN.
    Decode {
        vin: String,
    },

    /// List all vehicle makes.
    Makes {
        /// Only show makes containing this text (case-insensitive).
        #[arg(long)]
        filter: Option<String>,
    },

    /// List models for a make.
    Models {
        make: String,

        /// Restrict to a model year.
        #[arg(long)]
        year: Option<i32>,
    },

    /// Set the API base URL and request timeout.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;

        match self.command {
            Command::Configure => configure(&mut config),
            Command::Decode { vin } => {
                let service = VpicService::from_config(&config)?;
                let vehicle = until_cancelled(service.decode_vin(&vin), ctrl_c())
                    .await
                    .with_context(|| format!("Failed to decode VIN {vin}"))?;
                println!("{}", output::vehicle(&vehicle, self.json)?);
                Ok(())
            }
            Command::Makes { filter } => {
                let service = VpicService::from_config(&config)?;
                let makes = until_cancelled(service.list_makes(), ctrl_c())
                    .await
                    .context("Failed to list vehicle makes")?;
                let makes = output::filter_names(makes, filter.as_deref());
                println!("{}", output::names(&makes, self.json)?);
                Ok(())
            }
            Command::Models { make, year } => {
                let service = VpicService::from_config(&config)?;
                let request = ModelsRequest::new(make).with_year(year.unwrap_or(0));
                let models = until_cancelled(service.list_models(&request), ctrl_c())
                    .await
                    .with_context(|| format!("Failed to list models for {}", request.make))?;
                println!("{}", output::names(&models, self.json)?);
                Ok(())
            }
        }
    }
}

fn configure(config: &mut Config) -> anyhow::Result<()> {
    let base_url = Text::new("API base URL:").with_default(config.base_url()).prompt()?;
    config.set_base_url(base_url.trim())?;

    let timeout = CustomType::<u64>::new("Request timeout (seconds):")
        .with_default(config.timeout().as_secs())
        .with_error_message("Please enter a whole number of seconds")
        .prompt()?;
    config.set_timeout_secs(timeout)?;

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_models_with_year() {
        let cli = Cli::try_parse_from(["vpic", "models", "HONDA", "--year", "2015"]).expect("parse");
        match cli.command {
            Command::Models { make, year } => {
                assert_eq!(make, "HONDA");
                assert_eq!(year, Some(2015));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn json_flag_is_global() {
        let cli = Cli::try_parse_from(["vpic", "decode", "1G6AR5SX5F0123869", "--json"]).expect("parse");
        assert!(cli.json);
        assert!(matches!(cli.command, Command::Decode { .. }));
    }

    #[test]
    fn decode_requires_vin() {
        assert!(Cli::try_parse_from(["vpic", "decode"]).is_err());
    }
}
