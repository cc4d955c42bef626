//! Random sources backing the simulated metrics

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Largest value a source may yield; keeps draws inside [0, 1)
const MAX_UNIT: f64 = 1.0 - f64::EPSILON;

/// Source of uniformly distributed values in [0, 1)
pub trait RandomSource: Send {
    fn next_unit(&mut self) -> f64;

    /// Uniform value in [low, high)
    fn range(&mut self, low: f64, high: f64) -> f64 {
        let value = low + self.next_unit() * (high - low);
        // Rounding can land exactly on `high` for draws just below 1.0
        if value < high || high <= low {
            value
        } else {
            next_below(high)
        }
    }
}

/// Largest float strictly less than `value`
fn next_below(value: f64) -> f64 {
    if value > 0.0 {
        f64::from_bits(value.to_bits() - 1)
    } else if value < 0.0 {
        f64::from_bits(value.to_bits() + 1)
    } else {
        -f64::from_bits(1)
    }
}

/// Pseudo-random source backed by the standard RNG
#[derive(Debug, Clone)]
pub struct RngSource {
    rng: StdRng,
}

impl RngSource {
    /// Source seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible source; the same seed yields the same sequence
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for RngSource {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed script of values, cycling when exhausted
///
/// Values are clamped into [0, 1). An empty script always yields 0.0.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    position: usize,
}

impl ScriptedSource {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|v| if v.is_nan() { 0.0 } else { v.clamp(0.0, MAX_UNIT) })
                .collect(),
            position: 0,
        }
    }

    /// Script expressed in percentages, e.g. `95.0` for a 95% CPU reading
    pub fn from_percentages(values: impl IntoIterator<Item = f64>) -> Self {
        Self::new(values.into_iter().map(|v| v / 100.0))
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}
