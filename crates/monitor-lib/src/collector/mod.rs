//! Simulated metrics collection
//!
//! No real system introspection happens here: every reading is drawn from a
//! [`RandomSource`], which tests replace with a scripted sequence.

mod source;

pub use source::{RandomSource, RngSource, ScriptedSource};

use crate::models::MetricSample;

/// Upper bound (exclusive) of every simulated percentage
pub const MAX_PERCENT: f64 = 100.0;

/// Draw one sample: cpu, memory and disk, in that order
pub fn collect_sample(source: &mut dyn RandomSource) -> MetricSample {
    let cpu = source.range(0.0, MAX_PERCENT);
    let memory = source.range(0.0, MAX_PERCENT);
    let disk = source.range(0.0, MAX_PERCENT);

    MetricSample { cpu, memory, disk }
}
