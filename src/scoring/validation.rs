use serde::Serialize;

use crate::domain::models::{Challenge, MetricValues, ValueType};

/// Outcome of the advisory pre-flight check. All problems are reported at
/// once so calling UI code can display the full list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Pre-flight check of raw metric values against the challenge definition.
///
/// Advisory only: `score_submission` does not consult this and will still
/// score invalid or missing data. Callers that want to reject bad input run
/// this first.
pub fn validate_metrics(challenge: &Challenge, values: &MetricValues) -> ValidationReport {
    let mut errors = Vec::new();

    for metric in &challenge.metrics {
        let value = values.get(&metric.id).copied();

        if metric.required && value.is_none() {
            errors.push(format!(
                "Missing value for required metric '{}'",
                metric.name
            ));
            continue;
        }

        let Some(value) = value else { continue };

        if metric.value_type != ValueType::Numeric && value < 0.0 {
            errors.push(format!(
                "Metric '{}' must not be negative (got {})",
                metric.name, value
            ));
        }

        if metric.value_type == ValueType::Percentage && value > 100.0 {
            errors.push(format!(
                "Metric '{}' is a percentage and must not exceed 100 (got {})",
                metric.name, value
            ));
        }
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Direction, Level, Metric};
    use std::collections::HashMap;

    fn metric(id: &str, required: bool, value_type: ValueType) -> Metric {
        Metric {
            id: id.to_string(),
            name: id.to_string(),
            unit: String::new(),
            required,
            value_type,
            direction: Direction::HigherIsBetter,
        }
    }

    fn challenge(metrics: Vec<Metric>) -> Challenge {
        Challenge {
            id: "c1".to_string(),
            title: "Challenge".to_string(),
            difficulty: "easy".to_string(),
            level: Level::Beginner,
            points: 50,
            metrics,
            thresholds: vec![],
        }
    }

    #[test]
    fn test_missing_required_metric_named_in_error() {
        let challenge = challenge(vec![
            metric("accuracy", true, ValueType::Count),
            metric("reps", false, ValueType::Count),
        ]);

        let report = validate_metrics(&challenge, &HashMap::new());

        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("accuracy"));
    }

    #[test]
    fn test_complete_in_range_input_is_valid() {
        let challenge = challenge(vec![
            metric("accuracy", true, ValueType::Count),
            metric("completion", false, ValueType::Percentage),
        ]);
        let values = HashMap::from([
            ("accuracy".to_string(), 8.0),
            ("completion".to_string(), 95.0),
        ]);

        let report = validate_metrics(&challenge, &values);

        assert!(report.is_valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_percentage_over_100_rejected() {
        let challenge = challenge(vec![metric("completion", true, ValueType::Percentage)]);
        let values = HashMap::from([("completion".to_string(), 120.0)]);

        let report = validate_metrics(&challenge, &values);

        assert!(!report.is_valid);
        assert!(report.errors[0].contains("exceed 100"));
    }

    #[test]
    fn test_negative_non_numeric_rejected() {
        let challenge = challenge(vec![metric("time", true, ValueType::Time)]);
        let values = HashMap::from([("time".to_string(), -3.0)]);

        let report = validate_metrics(&challenge, &values);

        assert!(!report.is_valid);
        assert!(report.errors[0].contains("negative"));
    }

    #[test]
    fn test_all_problems_reported_at_once() {
        let challenge = challenge(vec![
            metric("accuracy", true, ValueType::Count),
            metric("completion", true, ValueType::Percentage),
        ]);
        let values = HashMap::from([("completion".to_string(), 150.0)]);

        let report = validate_metrics(&challenge, &values);

        assert_eq!(report.errors.len(), 2);
    }
}
