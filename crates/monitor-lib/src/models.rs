//! Core data models for the system monitor

/// Round a percentage to the two decimals shown on the console
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Simulated point-in-time resource readings, each a percentage in [0, 100)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSample {
    pub cpu: f64,
    pub memory: f64,
    pub disk: f64,
}

/// Randomly perturbed forecast derived from a [`MetricSample`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub predicted_cpu: f64,
    pub predicted_memory: f64,
    pub confidence: f64,
}

impl Prediction {
    /// Compares the predicted CPU as printed (two decimals) against the threshold
    pub fn cpu_exceeds(&self, threshold: f64) -> bool {
        round2(self.predicted_cpu) > threshold
    }
}

/// Overall status reported at the end of a health check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Warning,
}

impl HealthStatus {
    pub fn from_cpu(cpu: f64, threshold: f64) -> Self {
        if cpu > threshold {
            HealthStatus::Warning
        } else {
            HealthStatus::Healthy
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthStatus::Healthy => write!(f, "HEALTHY"),
            HealthStatus::Warning => write!(f, "WARNING"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_boundary_is_strict() {
        assert_eq!(HealthStatus::from_cpu(80.0, 80.0), HealthStatus::Healthy);
        assert_eq!(HealthStatus::from_cpu(80.01, 80.0), HealthStatus::Warning);
        assert_eq!(HealthStatus::from_cpu(0.0, 80.0), HealthStatus::Healthy);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(HealthStatus::Healthy.to_string(), "HEALTHY");
        assert_eq!(HealthStatus::Warning.to_string(), "WARNING");
    }

    #[test]
    fn test_prediction_compares_rounded_value() {
        let prediction = Prediction {
            predicted_cpu: 80.004,
            predicted_memory: 10.0,
            confidence: 75.0,
        };
        // Printed as 80.00, which is not above 80
        assert!(!prediction.cpu_exceeds(80.0));

        let prediction = Prediction {
            predicted_cpu: 80.006,
            ..prediction
        };
        assert!(prediction.cpu_exceeds(80.0));
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(12.344), 12.34);
        assert_eq!(round2(12.346), 12.35);
        assert_eq!(round2(0.0), 0.0);
    }
}
