use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Select, Text};
use weather_monitor_core::{
    Config, ProviderId, WeatherSearch, config::DEFAULT_API_URL,
    provider::default_provider_from_config,
};

use crate::render::{StderrNotifier, render_dashboard};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-monitor", version, about = "Current weather for any city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API endpoint and default provider.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, e.g. "São Paulo" or "London".
        city: String,

        /// Provider short name: "backend" or "open-meteo".
        #[arg(long)]
        provider: Option<String>,

        /// Base URL of the weather API; overrides the configured value.
        #[arg(long, env = "WEATHER_API_URL")]
        api_url: Option<String>,

        /// Print the labeled view as JSON instead of a dashboard.
        #[arg(long)]
        json: bool,
    },

    /// Print the config file location.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Configure => {
                configure()?;
                Ok(ExitCode::SUCCESS)
            }
            Command::Show { city, provider, api_url, json } => {
                let config = resolve_config(Config::load()?, provider.as_deref(), api_url)?;
                let shown = show(&config, &city, json).await?;
                Ok(if shown { ExitCode::SUCCESS } else { ExitCode::FAILURE })
            }
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

/// Apply command-line overrides on top of the stored configuration.
fn resolve_config(
    mut config: Config,
    provider: Option<&str>,
    api_url: Option<String>,
) -> anyhow::Result<Config> {
    if let Some(url) = api_url {
        config.api_url = Some(url);
    }
    if let Some(p) = provider {
        config.set_default_provider(ProviderId::try_from(p)?);
    }

    tracing::debug!(
        provider = %config.default_provider_id()?,
        api_url = config.api_url(),
        "resolved weather provider"
    );
    Ok(config)
}

/// Run one search and print the result. `false` when nothing was shown.
async fn show(config: &Config, city: &str, json: bool) -> anyhow::Result<bool> {
    let provider = default_provider_from_config(config)?;
    let mut search = WeatherSearch::new(provider, StderrNotifier);

    // The notifier already told the user what went wrong.
    let Ok(view) = search.submit(city).await else {
        return Ok(false);
    };

    if json {
        let out =
            serde_json::to_string_pretty(view).context("Failed to serialize weather view")?;
        println!("{out}");
    } else {
        print!("{}", render_dashboard(view));
    }
    Ok(true)
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let current = config.default_provider_id()?;
    let options = ProviderId::all().to_vec();
    let start = options.iter().position(|id| *id == current).unwrap_or(0);

    let provider = Select::new("Default provider:", options)
        .with_starting_cursor(start)
        .prompt()
        .context("Provider selection aborted")?;
    config.set_default_provider(provider);

    if provider == ProviderId::Backend {
        let url = Text::new("Weather API URL:")
            .with_default(config.api_url.as_deref().unwrap_or(DEFAULT_API_URL))
            .prompt()
            .context("API URL input aborted")?;
        config.api_url = Some(url.trim().to_string());
    }

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}
