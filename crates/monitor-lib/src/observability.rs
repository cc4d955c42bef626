//! Structured logging for monitor events
//!
//! Console lines are the user-facing output; these tracing events carry the
//! same facts as fields for log pipelines.

use crate::config::MonitorSettings;
use crate::health::CheckReport;
use crate::models::{HealthStatus, MetricSample, Prediction};
use crate::scheduler::LoopStats;
use tracing::{debug, info, warn};

/// Structured logger for monitor events
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    environment: String,
}

impl StructuredLogger {
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
        }
    }

    /// Log monitor startup
    pub fn log_startup(&self, version: &str, settings: &MonitorSettings) {
        info!(
            event = "monitor_started",
            environment = %self.environment,
            selector = %settings.selector,
            version = %version,
            ai_mode = settings.ai_mode,
            debug_mode = settings.run.debug_mode,
            interval_ms = settings.run.interval.as_millis() as u64,
            alert_threshold = settings.run.alert_threshold,
            "System monitor started"
        );
    }

    /// Log every fact a check produced
    pub fn log_report(&self, check_number: u64, report: &CheckReport) {
        self.log_check(check_number, &report.sample, report.status);
        if report.status == HealthStatus::Warning {
            self.log_high_cpu(report.sample.cpu);
        }
        if let Some(prediction) = report.prediction() {
            self.log_prediction(prediction);
            if report.autoscale() {
                self.log_autoscale(prediction.predicted_cpu);
            }
        }
    }

    pub fn log_check(&self, check_number: u64, sample: &MetricSample, status: HealthStatus) {
        debug!(
            event = "check_completed",
            environment = %self.environment,
            check = check_number,
            cpu = sample.cpu,
            memory = sample.memory,
            disk = sample.disk,
            status = %status,
            "Health check completed"
        );
    }

    pub fn log_high_cpu(&self, cpu: f64) {
        warn!(
            event = "high_cpu_detected",
            environment = %self.environment,
            cpu = cpu,
            "High CPU usage detected"
        );
    }

    pub fn log_prediction(&self, prediction: &Prediction) {
        debug!(
            event = "prediction_generated",
            environment = %self.environment,
            predicted_cpu = prediction.predicted_cpu,
            predicted_memory = prediction.predicted_memory,
            confidence = prediction.confidence,
            "Generated resource prediction"
        );
    }

    pub fn log_autoscale(&self, predicted_cpu: f64) {
        warn!(
            event = "autoscale_simulated",
            environment = %self.environment,
            predicted_cpu = predicted_cpu,
            "High CPU expected, auto-scaling simulated"
        );
    }

    /// Log monitor shutdown
    pub fn log_shutdown(&self, reason: &str, stats: &LoopStats) {
        info!(
            event = "monitor_shutdown",
            environment = %self.environment,
            reason = %reason,
            checks = stats.checks,
            warnings = stats.warnings,
            predictions = stats.predictions,
            autoscale_events = stats.autoscale_events,
            "System monitor shutting down"
        );
    }
}
