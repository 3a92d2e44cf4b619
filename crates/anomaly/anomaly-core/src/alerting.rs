//! Alerting over scored points.

use anomaly_spi::{Alert, AlertSeverity, Outcome, ScoredPoint};

/// Default score cutoff used when none is supplied.
pub const DEFAULT_SCORE_CUTOFF: f64 = 5.0;

/// Build an alert for an anomalous point.
///
/// Returns `None` for points the outcome does not flag. `cutoff`
/// classifies score outcomes; a score above twice the cutoff escalates
/// the alert to critical. Decision outcomes carry no score and alert at
/// warning severity.
pub fn create_alert(point: &ScoredPoint, cutoff: f64) -> Option<Alert> {
    if !point.outcome.is_anomalous(cutoff) {
        return None;
    }
    let (score, severity, message) = match point.outcome {
        Outcome::Decision(_) => (
            0.0,
            AlertSeverity::Warning,
            format!(
                "Anomaly detected at index {}: value={:.4}",
                point.index, point.value
            ),
        ),
        Outcome::Score(score) => {
            let severity = if score > 2.0 * cutoff {
                AlertSeverity::Critical
            } else {
                AlertSeverity::Warning
            };
            (
                score,
                severity,
                format!(
                    "Anomaly detected at index {}: value={:.4}, score={:.4}",
                    point.index, point.value, score
                ),
            )
        }
    };

    Some(Alert {
        timestamp: point.index,
        value: point.value,
        score,
        severity,
        message,
    })
}

/// Alert builder for custom alert creation.
#[derive(Debug, Clone)]
pub struct AlertBuilder {
    timestamp: u64,
    value: f64,
    score: f64,
    severity: Option<AlertSeverity>,
    message: Option<String>,
}

impl AlertBuilder {
    /// Create a new alert builder.
    pub fn new(timestamp: u64, value: f64, score: f64) -> Self {
        Self {
            timestamp,
            value,
            score,
            severity: None,
            message: None,
        }
    }

    /// Set custom severity.
    pub fn severity(mut self, severity: AlertSeverity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Set custom message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Build the alert.
    pub fn build(self) -> Alert {
        let severity = self.severity.unwrap_or_else(|| {
            if self.score.abs() > DEFAULT_SCORE_CUTOFF {
                AlertSeverity::Critical
            } else {
                AlertSeverity::Warning
            }
        });

        let message = self.message.unwrap_or_else(|| {
            format!(
                "Anomaly detected: value={:.4}, score={:.4}",
                self.value, self.score
            )
        });

        Alert {
            timestamp: self.timestamp,
            value: self.value,
            score: self.score,
            severity,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use anomaly_spi::Decision;

    use super::*;

    #[test]
    fn test_normal_points_produce_no_alert() {
        let point = ScoredPoint::new(3, 10.0, Outcome::Decision(Decision::Normal));
        assert!(create_alert(&point, 5.0).is_none());
        let scored = ScoredPoint::new(4, 10.0, Outcome::Score(2.0));
        assert!(create_alert(&scored, 5.0).is_none());
    }

    #[test]
    fn test_decision_anomaly_alerts_at_warning() {
        let point = ScoredPoint::new(7, 99.0, Outcome::Decision(Decision::Anomaly));
        let alert = create_alert(&point, 5.0).unwrap();
        assert_eq!(alert.timestamp, 7);
        assert_eq!(alert.value, 99.0);
        assert_eq!(alert.severity, AlertSeverity::Warning);
    }

    #[test]
    fn test_score_above_cutoff_alerts() {
        let point = ScoredPoint::new(1, 50.0, Outcome::Score(6.0));
        let alert = create_alert(&point, 5.0).unwrap();
        assert_eq!(alert.severity, AlertSeverity::Warning);
        assert_eq!(alert.score, 6.0);
    }

    #[test]
    fn test_score_above_twice_cutoff_is_critical() {
        let point = ScoredPoint::new(2, 80.0, Outcome::Score(11.0));
        let alert = create_alert(&point, 5.0).unwrap();
        assert_eq!(alert.severity, AlertSeverity::Critical);
    }

    #[test]
    fn test_builder_defaults() {
        let alert = AlertBuilder::new(9, 42.0, 6.5).build();
        assert_eq!(alert.timestamp, 9);
        assert_eq!(alert.severity, AlertSeverity::Critical);
        assert!(alert.message.contains("42.0000"));
    }

    #[test]
    fn test_builder_overrides() {
        let alert = AlertBuilder::new(0, 1.0, 0.5)
            .severity(AlertSeverity::Critical)
            .message("custom")
            .build();
        assert_eq!(alert.severity, AlertSeverity::Critical);
        assert_eq!(alert.message, "custom");
    }
}
