//! Library for the simulated system monitor
//!
//! This crate provides:
//! - Run configuration selection for production and development
//! - Simulated CPU, memory and disk readings behind a pluggable random source
//! - Periodic health checks with optional predictive annotation
//! - Console output and structured logging

pub mod collector;
pub mod config;
pub mod health;
pub mod models;
pub mod observability;
pub mod output;
pub mod predictor;
pub mod scheduler;

pub use config::{Environment, MonitorSettings, RunConfig};
pub use health::{CheckReport, HealthCheck};
pub use models::*;
pub use observability::StructuredLogger;
pub use scheduler::{BuildError, LoopStats, MonitorLoop, MonitorLoopBuilder};
