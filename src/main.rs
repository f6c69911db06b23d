use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use campwatch::config::Config;

mod commands;

#[derive(Parser)]
#[command(
    name = "campwatch",
    version,
    about = "Check campground reservation pages for open slots",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json); overrides the config file
    #[arg(long, global = true)]
    log_format: Option<String>,

    /// TOML config file; environment variables are used when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Host to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to bind
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check a campground page once and print the summary as JSON
    Check {
        /// Reservation calendar URL
        #[arg(short, long)]
        url: String,

        /// Comma-separated weekdays to keep, e.g. "Friday,Saturday"
        #[arg(short, long)]
        weekdays: Option<String>,

        /// Total number of attempts
        #[arg(short, long)]
        retries: Option<u32>,

        /// Seconds to wait between attempts
        #[arg(short, long)]
        delay: Option<u64>,

        /// Show the browser window
        #[arg(long, default_value = "false")]
        headed: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };
    config.validate().context("Invalid configuration")?;

    let log_format = cli
        .log_format
        .clone()
        .unwrap_or_else(|| config.logging.format.clone());
    setup_tracing(&log_format, &config.logging.level, cli.verbose)?;

    match cli.command {
        Commands::Serve { host, port } => {
            tracing::info!(host = ?host, port = ?port, "Starting serve command");
            commands::serve(config, host, port).await?;
        }

        Commands::Check {
            url,
            weekdays,
            retries,
            delay,
            headed,
        } => {
            let params = commands::CheckParams {
                url,
                weekdays,
                retries,
                delay,
                headed,
            };
            if !commands::check(config, params).await? {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn setup_tracing(format: &str, level: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("campwatch=debug,tower_http=debug,info")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .or_else(|_| tracing_subscriber::EnvFilter::try_new(format!("campwatch={level},warn")))
            .context("Invalid log level")?
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}
