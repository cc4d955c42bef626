//! Monitor configuration read from the process environment

use anyhow::Result;
use monitor_lib::MonitorSettings;
use serde::Deserialize;
use tracing::warn;

/// Process variables the monitor reads, matched case-sensitively
pub const ENV_KEYS: [&str; 4] = ["NODE_ENV", "AI_MODE", "MONITOR_SEED", "MONITOR_MAX_CHECKS"];

/// Raw environment values, read once at startup
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvConfig {
    /// Environment selector: `production` or `development`
    #[serde(default, alias = "NODE_ENV")]
    pub node_env: Option<String>,

    /// AI mode toggle, enabled only by the exact string `true`
    #[serde(default, alias = "AI_MODE")]
    pub ai_mode: Option<String>,

    /// Seed for reproducible runs
    #[serde(default, alias = "MONITOR_SEED")]
    pub monitor_seed: Option<String>,

    /// Stop after this many checks
    #[serde(default, alias = "MONITOR_MAX_CHECKS")]
    pub monitor_max_checks: Option<String>,
}

impl EnvConfig {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self> {
        Self::from_vars(std::env::vars())
    }

    /// Build from name/value pairs, keeping only the exact-case [`ENV_KEYS`]
    fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Result<Self> {
        let map: config::Map<String, String> = vars
            .into_iter()
            .filter(|(key, _)| ENV_KEYS.contains(&key.as_str()))
            .collect();

        let config = config::Config::builder()
            .add_source(config::Environment::default().source(Some(map)))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    pub fn settings(&self) -> MonitorSettings {
        MonitorSettings::select(self.node_env.as_deref(), self.ai_mode.as_deref())
    }

    /// RNG seed; invalid values are ignored
    pub fn seed(&self) -> Option<u64> {
        parse_knob("MONITOR_SEED", self.monitor_seed.as_deref())
    }

    /// Check limit; invalid or zero values are ignored
    pub fn max_checks(&self) -> Option<u64> {
        match parse_knob("MONITOR_MAX_CHECKS", self.monitor_max_checks.as_deref()) {
            Some(0) => {
                warn!("MONITOR_MAX_CHECKS must be at least 1, running without a limit");
                None
            }
            limit => limit,
        }
    }
}

fn parse_knob(name: &str, value: Option<&str>) -> Option<u64> {
    let value = value?.trim();
    match value.parse::<u64>() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!(variable = %name, value = %value, error = %e, "Ignoring invalid value");
            None
        }
    }
}
