//! Demo driver for the remote/device bridge.
//!
//! Runs the fixed scenario from [`remote_bridge::demo`] and prints one line
//! per device notification on stdout. Diagnostics go to stderr through
//! `tracing`.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin bridge_demo
//!
//! # Show remote/device diagnostics
//! RUST_LOG=remote_bridge=trace cargo run --bin bridge_demo
//!
//! # With a JSON config file
//! cargo run --bin bridge_demo --features json -- bridge.json
//! ```

use remote_bridge::config::Config;
use remote_bridge::demo;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "remote_bridge=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_config()?;
    let report = demo::run_configured(&config);
    tracing::debug!(?report, "final device states");

    Ok(())
}

#[cfg(feature = "json")]
fn load_config() -> anyhow::Result<Config> {
    Config::from_args(std::env::args().skip(1))
}

#[cfg(not(feature = "json"))]
fn load_config() -> anyhow::Result<Config> {
    if std::env::args().len() > 1 {
        tracing::warn!("config file argument ignored, rebuild with the `json` feature");
    }
    Ok(Config::default())
}
