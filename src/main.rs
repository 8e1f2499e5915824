//! Launch Dash server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! With no flags the dashboard reads `spacex_launch_dash.csv` from the
//! working directory and serves on `127.0.0.1:8050`.
//!
//! Environment variables (override the config file):
//! - `LAUNCH_DASH_DATA`: CSV path
//! - `LAUNCH_DASH_HOST` / `LAUNCH_DASH_PORT`: Bind address
//! - `LAUNCH_DASH_LOG_LEVEL`: Log level (default: info)
//! - `LAUNCH_DASH_LOG_FORMAT`: pretty or json
//! - `RUST_LOG`: Full tracing filter, wins over the log level

use clap::{Parser, Subcommand};
use launch_dash::api::{serve, AppState};
use launch_dash::config::{
    generate_default_config, CliOverrides, Config, LogFormat, LoggingConfig,
};
use launch_dash::data::load_csv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "launch-dash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive dashboard over a CSV of rocket launches")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Launch CSV file
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Host to bind to
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, global = true)]
    pub port: Option<u16>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the dashboard server (default)
    Serve,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(Commands::Config { output }) = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)?;
                println!("Config written to {}", path.display());
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let loaded = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    let mut config = loaded.config;
    config.apply_cli(&cli.overrides());

    init_tracing(&config.logging);

    tracing::info!("Starting Launch Dash v{}", env!("CARGO_PKG_VERSION"));
    for warning in &loaded.warnings {
        tracing::warn!("{}", warning);
    }
    tracing::info!("Config source: {}", loaded.source);
    tracing::info!("Data file: {:?}", config.data.path);

    let dataset = match load_csv(&config.data.path) {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!(path = ?config.data.path, error = %e, "Failed to load launch data");
            return Err(e.into());
        }
    };

    match dataset.payload_bounds() {
        Some(bounds) => tracing::info!(
            records = dataset.len(),
            payload_bounds = %bounds,
            "Loaded launch records"
        ),
        None => tracing::warn!("Launch data is empty, charts will have nothing to show"),
    }
    tracing::info!("Launch sites: {}", dataset.sites().join(", "));

    serve(AppState::new(dataset, config.server)).await?;

    tracing::info!("Launch Dash stopped");
    Ok(())
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            data: self.data.clone(),
            host: self.host.clone(),
            port: self.port,
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("launch_dash={},tower_http=info", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    match logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
