//! Parkways CLI - reports over visitors, national parks and their trips

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::{completions, park, trip, visitor};
use config::Config;
use output::OutputFormat;
use parkways_core::{Catalog, Scenario};

#[derive(Parser)]
#[command(name = "parkways")]
#[command(author, version, about = "Explore visitors, national parks and the trips between them")]
pub struct Cli {
    /// Scenario file (JSON); the built-in demo scenario is used when omitted
    #[arg(short, long, env = "PARKWAYS_SCENARIO", global = true)]
    pub scenario: Option<PathBuf>,

    /// Config file (TOML)
    #[arg(short, long, env = "PARKWAYS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format: table, json (overrides the config file)
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List parks with visit statistics
    Parks,
    /// Show a park and its trips
    Park {
        /// Park name
        name: String,
    },
    /// List visitors and the parks they have been to
    Visitors,
    /// Show a visitor and their trips
    Visitor {
        /// Visitor name
        name: String,
    },
    /// List every trip in registration order
    Trips,
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Application context with the loaded catalog
pub struct AppContext {
    pub catalog: Catalog,
    pub format: OutputFormat,
}

impl AppContext {
    pub fn new(cli: &Cli, config: &Config) -> anyhow::Result<Self> {
        let scenario = match &cli.scenario {
            Some(path) => {
                tracing::debug!("Loading scenario from {:?}", path);
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read scenario {}", path.display()))?;
                Scenario::from_json_str(&content)
                    .with_context(|| format!("Invalid scenario {}", path.display()))?
            }
            None => {
                tracing::debug!("Using built-in demo scenario");
                Scenario::demo()
            }
        };

        let catalog = scenario.build().context("Failed to load scenario")?;
        let format = OutputFormat::from(cli.format.as_deref().unwrap_or(&config.format));

        Ok(Self { catalog, format })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => config.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting parkways CLI");

    if let Commands::Completions(args) = &cli.command {
        return completions::run(args);
    }

    let ctx = AppContext::new(&cli, &config)?;

    match &cli.command {
        Commands::Parks => park::run_list(&ctx)?,
        Commands::Park { name } => park::run_show(name, &ctx)?,
        Commands::Visitors => visitor::run_list(&ctx)?,
        Commands::Visitor { name } => visitor::run_show(name, &ctx)?,
        Commands::Trips => trip::run_list(&ctx)?,
        Commands::Completions(_) => {}
    }

    Ok(())
}
