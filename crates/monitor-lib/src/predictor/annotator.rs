//! Console annotation of predictions

use super::{Predictor, RandomOffsetPredictor};
use crate::collector::RandomSource;
use crate::models::{MetricSample, Prediction};
use crate::output::{format_percent, Line};

/// Outcome of annotating one sample
#[derive(Debug, Clone)]
pub struct Annotation {
    pub prediction: Prediction,
    /// Predicted CPU exceeded the alert threshold
    pub autoscale: bool,
    pub lines: Vec<Line>,
}

/// Runs a predictor over the current sample and describes the result
pub struct PredictiveAnnotator {
    predictor: Box<dyn Predictor>,
    alert_threshold: f64,
}

impl PredictiveAnnotator {
    pub fn new(alert_threshold: f64) -> Self {
        Self::with_predictor(Box::new(RandomOffsetPredictor), alert_threshold)
    }

    pub fn with_predictor(predictor: Box<dyn Predictor>, alert_threshold: f64) -> Self {
        Self {
            predictor,
            alert_threshold,
        }
    }

    pub fn annotate(&self, sample: &MetricSample, source: &mut dyn RandomSource) -> Annotation {
        let prediction = self.predictor.predict(sample, source);
        let confidence = format_percent(prediction.confidence);

        let mut lines = vec![
            Line::blank(),
            Line::heading("🤖 AI Engine: Predictive Analysis Running..."),
            Line::prediction(format!(
                "Predicted CPU: {}% (confidence: {}%)",
                format_percent(prediction.predicted_cpu),
                confidence
            )),
            Line::prediction(format!(
                "Predicted Memory: {}% (confidence: {}%)",
                format_percent(prediction.predicted_memory),
                confidence
            )),
        ];

        let autoscale = prediction.cpu_exceeds(self.alert_threshold);
        if autoscale {
            lines.push(Line::critical(
                "Predictive Alert: High CPU expected soon - Auto-scaling simulated",
            ));
        }

        Annotation {
            prediction,
            autoscale,
            lines,
        }
    }
}

impl std::fmt::Debug for PredictiveAnnotator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictiveAnnotator")
            .field("alert_threshold", &self.alert_threshold)
            .finish_non_exhaustive()
    }
}
