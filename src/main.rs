//! Herald CLI
//!
//! Command-line interface for the homework review notification service.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use herald::Config;
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "herald")]
#[command(about = "Homework review notification service")]
#[command(version)]
struct Args {
    /// Log level
    #[arg(short, long, default_value = "debug")]
    log_level: Level,

    /// Path to the log file
    #[arg(long, default_value = "program.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_file = File::options()
        .create(true)
        .append(true)
        .open(&args.log_file)?;

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(args.log_level).into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(log_file)),
        )
        .init();

    tracing::debug!(
        "Parsed command line arguments: log_level={:?}, log_file={:?}",
        args.log_level,
        args.log_file
    );

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}. Startup aborted.", e);
            return Err(e.into());
        }
    };

    tracing::info!("Starting herald service");
    herald::run(config).await?;

    Ok(())
}
