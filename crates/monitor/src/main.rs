//! System Monitor - simulated health check service
//!
//! Prints randomly generated CPU, memory and disk readings on a fixed
//! interval, optionally followed by a simulated predictive analysis.

use anyhow::Result;
use monitor_lib::{
    collector::RngSource,
    output::{Console, StdoutConsole},
    MonitorLoopBuilder, StructuredLogger,
};
use std::io::IsTerminal;
use tokio::sync::broadcast;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

const MONITOR_VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    let env_config = config::EnvConfig::load()?;
    let settings = env_config.settings();

    // Verbose profiles log at debug unless RUST_LOG says otherwise
    let default_level = if settings.run.verbose_logging {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(fmt::layer().json().with_writer(std::io::stderr))
        .init();

    let mut console = if std::io::stdout().is_terminal() {
        StdoutConsole::new()
    } else {
        StdoutConsole::plain()
    };
    console.write_lines(&settings.banner());

    let logger = StructuredLogger::new(settings.environment.as_str());
    logger.log_startup(MONITOR_VERSION, &settings);

    let source = match env_config.seed() {
        Some(seed) => {
            info!(seed, "Using seeded random source");
            RngSource::seeded(seed)
        }
        None => RngSource::from_entropy(),
    };

    let mut builder = MonitorLoopBuilder::new()
        .settings(settings)
        .source(source)
        .console(console);
    if let Some(max_checks) = env_config.max_checks() {
        builder = builder.max_checks(max_checks);
    }
    let monitor = builder.build()?;

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    let mut monitor_handle = tokio::spawn(monitor.run(shutdown_rx));

    let (stats, reason) = tokio::select! {
        result = &mut monitor_handle => (result?, "check limit reached"),
        signal = tokio::signal::ctrl_c() => {
            signal?;
            let _ = shutdown_tx.send(());
            (monitor_handle.await?, "SIGINT received")
        }
    };

    logger.log_shutdown(reason, &stats);
    info!("Shutting down");

    Ok(())
}
