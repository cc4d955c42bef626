//! Monitor loop
//!
//! Runs a health check immediately, then once per configured interval until
//! the shutdown channel fires or an optional check limit is reached.

use crate::collector::RandomSource;
use crate::config::MonitorSettings;
use crate::health::{CheckReport, HealthCheck};
use crate::models::HealthStatus;
use crate::observability::StructuredLogger;
use crate::output::Console;
use thiserror::Error;
use tokio::sync::broadcast;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

/// Errors raised while assembling a [`MonitorLoop`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("monitor settings are required")]
    MissingSettings,
    #[error("a random source is required")]
    MissingSource,
    #[error("a console is required")]
    MissingConsole,
    #[error("check limit must be at least 1")]
    ZeroCheckLimit,
    #[error("check interval must be non-zero")]
    ZeroInterval,
}

/// Counters accumulated over the lifetime of a loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    pub checks: u64,
    pub warnings: u64,
    pub predictions: u64,
    pub autoscale_events: u64,
}

impl LoopStats {
    fn record(&mut self, report: &CheckReport) {
        self.checks += 1;
        if report.status == HealthStatus::Warning {
            self.warnings += 1;
        }
        if report.prediction().is_some() {
            self.predictions += 1;
        }
        if report.autoscale() {
            self.autoscale_events += 1;
        }
    }
}

/// Periodic health check loop
pub struct MonitorLoop {
    check: HealthCheck,
    source: Box<dyn RandomSource>,
    console: Box<dyn Console>,
    logger: StructuredLogger,
    max_checks: Option<u64>,
    stats: LoopStats,
}

impl MonitorLoop {
    pub fn new(
        settings: MonitorSettings,
        source: Box<dyn RandomSource>,
        console: Box<dyn Console>,
    ) -> Self {
        let logger = StructuredLogger::new(settings.environment.as_str());
        Self {
            check: HealthCheck::new(settings),
            source,
            console,
            logger,
            max_checks: None,
            stats: LoopStats::default(),
        }
    }

    pub fn settings(&self) -> &MonitorSettings {
        self.check.settings()
    }

    pub fn stats(&self) -> LoopStats {
        self.stats
    }

    /// Run one health check, write its lines and record it
    pub fn tick(&mut self) -> CheckReport {
        let report = self.check.run(self.source.as_mut());
        self.console.write_lines(&report.lines);
        self.stats.record(&report);
        self.logger.log_report(self.stats.checks, &report);
        report
    }

    fn limit_reached(&self) -> bool {
        self.max_checks
            .is_some_and(|max_checks| self.stats.checks >= max_checks)
    }

    /// Run until shutdown or the check limit; returns the final counters
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) -> LoopStats {
        let period = self.settings().run.interval;
        info!(
            interval_ms = period.as_millis() as u64,
            max_checks = ?self.max_checks,
            "Starting monitor loop"
        );

        self.tick();
        if self.limit_reached() {
            info!(checks = self.stats.checks, "Check limit reached");
            return self.stats;
        }

        // First tick of a plain interval fires immediately; the check above already covered it
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let report = self.tick();
                    debug!(
                        checks = self.stats.checks,
                        status = %report.status,
                        "Check cycle complete"
                    );

                    if self.limit_reached() {
                        info!(checks = self.stats.checks, "Check limit reached");
                        break;
                    }
                }
                _ = shutdown.recv() => {
                    info!("Shutting down monitor loop");
                    break;
                }
            }
        }

        self.stats
    }
}

/// Builder for creating the monitor loop
#[derive(Default)]
pub struct MonitorLoopBuilder {
    settings: Option<MonitorSettings>,
    source: Option<Box<dyn RandomSource>>,
    console: Option<Box<dyn Console>>,
    max_checks: Option<u64>,
}

impl MonitorLoopBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(mut self, settings: MonitorSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Set the random source behind the simulated metrics
    pub fn source(mut self, source: impl RandomSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn console(mut self, console: impl Console + 'static) -> Self {
        self.console = Some(Box::new(console));
        self
    }

    /// Stop after this many checks
    pub fn max_checks(mut self, max_checks: u64) -> Self {
        self.max_checks = Some(max_checks);
        self
    }

    pub fn build(self) -> Result<MonitorLoop, BuildError> {
        let settings = self.settings.ok_or(BuildError::MissingSettings)?;
        let source = self.source.ok_or(BuildError::MissingSource)?;
        let console = self.console.ok_or(BuildError::MissingConsole)?;

        if settings.run.interval.is_zero() {
            return Err(BuildError::ZeroInterval);
        }
        if self.max_checks == Some(0) {
            return Err(BuildError::ZeroCheckLimit);
        }

        let mut monitor = MonitorLoop::new(settings, source, console);
        monitor.max_checks = self.max_checks;
        Ok(monitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::{RngSource, ScriptedSource};
    use crate::output::MemoryConsole;
    use std::time::Duration;

    fn production() -> MonitorSettings {
        MonitorSettings::select(Some("production"), None)
    }

    #[test]
    fn test_builder_requires_parts() {
        let err = MonitorLoopBuilder::new()
            .source(RngSource::seeded(1))
            .console(MemoryConsole::new())
            .build()
            .err();
        assert_eq!(err, Some(BuildError::MissingSettings));

        let err = MonitorLoopBuilder::new()
            .settings(production())
            .console(MemoryConsole::new())
            .build()
            .err();
        assert_eq!(err, Some(BuildError::MissingSource));

        let err = MonitorLoopBuilder::new()
            .settings(production())
            .source(RngSource::seeded(1))
            .build()
            .err();
        assert_eq!(err, Some(BuildError::MissingConsole));
    }

    #[test]
    fn test_builder_rejects_zero_limits() {
        let err = MonitorLoopBuilder::new()
            .settings(production())
            .source(RngSource::seeded(1))
            .console(MemoryConsole::new())
            .max_checks(0)
            .build()
            .err();
        assert_eq!(err, Some(BuildError::ZeroCheckLimit));

        let mut settings = production();
        settings.run.interval = Duration::ZERO;
        let err = MonitorLoopBuilder::new()
            .settings(settings)
            .source(RngSource::seeded(1))
            .console(MemoryConsole::new())
            .build()
            .err();
        assert_eq!(err, Some(BuildError::ZeroInterval));
    }

    #[test]
    fn test_tick_records_stats() {
        let console = MemoryConsole::new();
        let settings = MonitorSettings::select(Some("development"), Some("true"));
        let mut monitor = MonitorLoopBuilder::new()
            .settings(settings)
            .source(ScriptedSource::new([0.95, 0.5, 0.5, 0.5, 0.5, 0.5]))
            .console(console.clone())
            .build()
            .unwrap();

        let report = monitor.tick();

        assert_eq!(report.status, HealthStatus::Warning);
        assert_eq!(
            monitor.stats(),
            LoopStats {
                checks: 1,
                warnings: 1,
                predictions: 1,
                autoscale_events: 1,
            }
        );
        assert_eq!(console.lines(), report.lines);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_stops_at_check_limit() {
        let console = MemoryConsole::new();
        let monitor = MonitorLoopBuilder::new()
            .settings(production())
            .source(RngSource::seeded(5))
            .console(console.clone())
            .max_checks(3)
            .build()
            .unwrap();

        let (_tx, rx) = broadcast::channel(1);
        let stats = monitor.run(rx).await;

        assert_eq!(stats.checks, 3);
        let headers = console
            .text()
            .iter()
            .filter(|l| l.ends_with("Checking system health..."))
            .count();
        assert_eq!(headers, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_check_runs_immediately() {
        let console = MemoryConsole::new();
        let monitor = MonitorLoopBuilder::new()
            .settings(production())
            .source(RngSource::seeded(5))
            .console(console.clone())
            .build()
            .unwrap();

        let (tx, rx) = broadcast::channel(1);
        tx.send(()).unwrap();
        let stats = monitor.run(rx).await;

        assert_eq!(stats.checks, 1);
        assert!(!console.lines().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_stops_on_shutdown() {
        let console = MemoryConsole::new();
        let monitor = MonitorLoopBuilder::new()
            .settings(production())
            .source(RngSource::seeded(9))
            .console(console)
            .build()
            .unwrap();

        let (tx, rx) = broadcast::channel(1);
        let handle = tokio::spawn(monitor.run(rx));

        // Two full intervals after the immediate check
        tokio::time::sleep(Duration::from_millis(120_500)).await;
        tx.send(()).unwrap();

        let stats = handle.await.unwrap();
        assert_eq!(stats.checks, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_stops_when_sender_dropped() {
        let monitor = MonitorLoopBuilder::new()
            .settings(production())
            .source(RngSource::seeded(9))
            .console(MemoryConsole::new())
            .build()
            .unwrap();

        let (tx, rx) = broadcast::channel::<()>(1);
        drop(tx);

        let stats = monitor.run(rx).await;
        assert_eq!(stats.checks, 1);
    }
}
