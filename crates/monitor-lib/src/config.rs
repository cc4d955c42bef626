//! Run configuration selection
//!
//! The monitor runs under one of two fixed profiles. The profile is picked
//! once at startup from an environment selector string; anything that is not
//! a known selector silently falls back to production.

use crate::output::Line;
use std::time::Duration;

/// Selector used when none is supplied
pub const DEFAULT_ENVIRONMENT: &str = "production";

/// Port reported by the debug diagnostics
pub const DEBUG_PORT: u16 = 9229;

/// Deployment environment the monitor runs under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Development,
}

impl Environment {
    /// Look up a selector, falling back to production for unknown values
    pub fn from_selector(selector: &str) -> Self {
        match selector {
            "development" => Environment::Development,
            _ => Environment::Production,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Development => "development",
        }
    }

    /// The fixed run configuration for this environment
    pub fn run_config(&self) -> RunConfig {
        match self {
            Environment::Production => RunConfig {
                interval: Duration::from_millis(60_000),
                alert_threshold: 80.0,
                debug_mode: false,
                verbose_logging: false,
            },
            Environment::Development => RunConfig {
                interval: Duration::from_millis(5_000),
                alert_threshold: 90.0,
                debug_mode: true,
                verbose_logging: true,
            },
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operating parameters, fixed for the lifetime of the process
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Time between health checks
    pub interval: Duration,
    /// CPU percentage above which a check reports a warning
    pub alert_threshold: f64,
    /// Emit the detailed check block and debug diagnostics
    pub debug_mode: bool,
    /// Raise the default log level to debug
    pub verbose_logging: bool,
}

/// Interpret the AI mode toggle: only the exact string `true` enables it
pub fn parse_toggle(value: Option<&str>) -> bool {
    value == Some("true")
}

/// Everything selected at startup: environment, AI toggle and run config
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorSettings {
    /// Selector as supplied, echoed in the banner
    pub selector: String,
    pub environment: Environment,
    pub ai_mode: bool,
    pub run: RunConfig,
}

impl MonitorSettings {
    /// Select settings from the raw environment selector and toggle value
    pub fn select(selector: Option<&str>, ai_mode: Option<&str>) -> Self {
        let selector = selector.unwrap_or(DEFAULT_ENVIRONMENT);
        let environment = Environment::from_selector(selector);

        Self {
            selector: selector.to_string(),
            environment,
            ai_mode: parse_toggle(ai_mode),
            run: environment.run_config(),
        }
    }

    /// Startup banner, written once before the first check
    pub fn banner(&self) -> Vec<Line> {
        let rule = "=".repeat(33);
        vec![
            Line::heading(rule.clone()),
            Line::heading("DevOps Simulator - System Monitor"),
            Line::plain(format!("Environment: {}", self.selector)),
            Line::plain(format!("AI Mode: {}", enabled(self.ai_mode))),
            Line::plain(format!("Debug: {}", enabled(self.run.debug_mode))),
            Line::heading(rule),
            Line::plain(format!(
                "Monitoring every {}ms",
                self.run.interval.as_millis()
            )),
        ]
    }
}

fn enabled(flag: bool) -> &'static str {
    if flag {
        "ENABLED"
    } else {
        "DISABLED"
    }
}
