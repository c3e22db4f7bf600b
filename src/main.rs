//! # Matrixtool - Matrix Operations Tool
//!
//! Add, subtract, multiply, transpose and take determinants of small
//! matrices typed or pasted as text, with CSV load/save.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the tool
//! cargo run
//!
//! # Run with debug logging
//! cargo run -- -vv
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use matrixtool_core::Config;
use matrixtool_ui::{Flags, run};

/// Matrixtool - matrix arithmetic on pasted text
#[derive(Parser, Debug)]
#[command(name = "matrixtool")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> tracing::Level {
    match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level(args.verbose),
        ))
        .init();

    tracing::info!("Starting Matrixtool v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load();

    run(Flags { config }).map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
