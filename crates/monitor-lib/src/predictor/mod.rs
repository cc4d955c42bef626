//! Predictive annotation ("AI mode")
//!
//! There is no model behind this: a prediction is the current reading plus a
//! random offset, with an independent random confidence.

mod annotator;

pub use annotator::{Annotation, PredictiveAnnotator};

use crate::collector::RandomSource;
use crate::models::{MetricSample, Prediction};

/// Upper bound (exclusive) of the offset added to each predicted value
pub const MAX_OFFSET: f64 = 10.0;

/// Confidence range, lower bound inclusive
pub const CONFIDENCE_RANGE: (f64, f64) = (70.0, 100.0);

/// Trait for prediction implementations
pub trait Predictor: Send + Sync {
    /// Generate a prediction from the current sample
    fn predict(&self, sample: &MetricSample, source: &mut dyn RandomSource) -> Prediction;
}

/// Predicts by adding a uniform offset in [0, 10) to cpu and memory
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomOffsetPredictor;

impl Predictor for RandomOffsetPredictor {
    fn predict(&self, sample: &MetricSample, source: &mut dyn RandomSource) -> Prediction {
        let predicted_cpu = sample.cpu + source.range(0.0, MAX_OFFSET);
        let predicted_memory = sample.memory + source.range(0.0, MAX_OFFSET);
        let confidence = source.range(CONFIDENCE_RANGE.0, CONFIDENCE_RANGE.1);

        Prediction {
            predicted_cpu,
            predicted_memory,
            confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::{RngSource, ScriptedSource};

    fn sample(cpu: f64, memory: f64) -> MetricSample {
        MetricSample {
            cpu,
            memory,
            disk: 10.0,
        }
    }

    #[test]
    fn test_offsets_follow_draw_order() {
        let mut source = ScriptedSource::new([0.5, 0.25, 0.5]);
        let prediction = RandomOffsetPredictor.predict(&sample(50.0, 40.0), &mut source);

        assert_eq!(prediction.predicted_cpu, 55.0);
        assert_eq!(prediction.predicted_memory, 42.5);
        assert_eq!(prediction.confidence, 85.0);
    }

    #[test]
    fn test_prediction_bounds() {
        let mut source = RngSource::seeded(11);
        let current = sample(30.0, 60.0);

        for _ in 0..5_000 {
            let prediction = RandomOffsetPredictor.predict(&current, &mut source);
            assert!(prediction.predicted_cpu >= 30.0 && prediction.predicted_cpu < 40.0);
            assert!(prediction.predicted_memory >= 60.0 && prediction.predicted_memory < 70.0);
            assert!(prediction.confidence >= 70.0 && prediction.confidence < 100.0);
        }
    }
}
