//! Simulated system health check
//!
//! One check draws a fresh [`MetricSample`], compares CPU against the alert
//! threshold and, in AI mode, appends a predictive annotation.

use crate::collector::{collect_sample, RandomSource};
use crate::config::{MonitorSettings, DEBUG_PORT};
use crate::models::{HealthStatus, MetricSample, Prediction};
use crate::output::{format_percent, Line};
use crate::predictor::{Annotation, PredictiveAnnotator};
use chrono::{DateTime, SecondsFormat, Utc};

/// Result of a single health check
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub timestamp: DateTime<Utc>,
    pub sample: MetricSample,
    pub status: HealthStatus,
    pub annotation: Option<Annotation>,
    /// Console lines in output order
    pub lines: Vec<Line>,
}

impl CheckReport {
    pub fn prediction(&self) -> Option<&Prediction> {
        self.annotation.as_ref().map(|a| &a.prediction)
    }

    /// Whether the annotation simulated an auto-scaling event
    pub fn autoscale(&self) -> bool {
        self.annotation.as_ref().is_some_and(|a| a.autoscale)
    }
}

/// Runs health checks against a fixed set of settings
#[derive(Debug)]
pub struct HealthCheck {
    settings: MonitorSettings,
    annotator: PredictiveAnnotator,
}

impl HealthCheck {
    pub fn new(settings: MonitorSettings) -> Self {
        let annotator = PredictiveAnnotator::new(settings.run.alert_threshold);
        Self {
            settings,
            annotator,
        }
    }

    /// Replace the default annotator
    pub fn with_annotator(mut self, annotator: PredictiveAnnotator) -> Self {
        self.annotator = annotator;
        self
    }

    pub fn settings(&self) -> &MonitorSettings {
        &self.settings
    }

    /// Run a check stamped with the current time
    pub fn run(&self, source: &mut dyn RandomSource) -> CheckReport {
        self.run_at(Utc::now(), source)
    }

    /// Run a check stamped with the given time
    pub fn run_at(&self, timestamp: DateTime<Utc>, source: &mut dyn RandomSource) -> CheckReport {
        let run = &self.settings.run;
        let stamp = timestamp.to_rfc3339_opts(SecondsFormat::Millis, true);
        let mut lines = Vec::with_capacity(12);

        if run.debug_mode {
            lines.push(Line::blank());
            lines.push(Line::heading(format!(
                "[{}] === DETAILED HEALTH CHECK ===",
                stamp
            )));
        } else {
            lines.push(Line::plain(format!("[{}] Checking system health...", stamp)));
        }

        let sample = collect_sample(source);

        lines.push(Line::check(format!(
            "CPU usage: {}%",
            format_percent(sample.cpu)
        )));
        lines.push(Line::check(format!(
            "Memory usage: {}%",
            format_percent(sample.memory)
        )));
        lines.push(Line::check(format!(
            "Disk space used: {}%",
            format_percent(sample.disk)
        )));

        if run.debug_mode {
            lines.push(Line::check("Hot reload: Active"));
            lines.push(Line::check(format!("Debug port: {}", DEBUG_PORT)));
        }

        let status = HealthStatus::from_cpu(sample.cpu, run.alert_threshold);
        if status == HealthStatus::Warning {
            lines.push(Line::alert("ALERT: High CPU usage detected"));
        }
        lines.push(Line::status(status));

        let annotation = if self.settings.ai_mode {
            let annotation = self.annotator.annotate(&sample, source);
            lines.extend(annotation.lines.iter().cloned());
            Some(annotation)
        } else {
            None
        };

        CheckReport {
            timestamp,
            sample,
            status,
            annotation,
            lines,
        }
    }
}
