use crate::config::ScoringSettings;
use crate::domain::models::{Challenge, MetricValues};

use super::metric::score_metric;
use super::types::{MetricScore, OverallScore, Rating};

/// Combine all metric scores of one submission into a weighted overall score.
///
/// Metrics without threshold bands at the challenge's level contribute
/// nothing and are reported in `skipped_metrics`. Required metrics weigh
/// double by default; the weights come from the injected settings.
pub fn score_submission(
    challenge: &Challenge,
    values: &MetricValues,
    settings: &ScoringSettings,
) -> OverallScore {
    let mut metric_scores = Vec::new();
    let mut skipped_metrics = Vec::new();
    let mut total_points = 0.0;
    let mut weight_sum = 0.0;

    for metric in &challenge.metrics {
        let Some(bands) = challenge.threshold_for(&metric.id) else {
            skipped_metrics.push(metric.id.clone());
            continue;
        };

        let value = values.get(&metric.id).copied();
        let result = score_metric(metric, value, bands, challenge.level);
        let weight = if metric.required {
            settings.required_weight
        } else {
            settings.optional_weight
        };

        total_points += result.points * weight;
        weight_sum += weight;
        metric_scores.push(MetricScore {
            metric_id: metric.id.clone(),
            result,
            weight,
        });
    }

    let average_score = if weight_sum > 0.0 {
        total_points / weight_sum
    } else {
        0.0
    };

    OverallScore {
        total_points,
        average_score,
        overall_rating: rating_for_average(average_score, settings),
        metric_scores,
        skipped_metrics,
    }
}

fn rating_for_average(average: f64, settings: &ScoringSettings) -> Rating {
    if average >= settings.overall_outstanding {
        Rating::Outstanding
    } else if average >= settings.overall_excellent {
        Rating::Excellent
    } else if average >= settings.overall_good {
        Rating::Good
    } else if average >= settings.overall_fair {
        Rating::Fair
    } else {
        Rating::Poor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{
        Direction, Level, Metric, Threshold, ThresholdBands, ValueType,
    };
    use std::collections::HashMap;

    fn metric(id: &str, required: bool) -> Metric {
        Metric {
            id: id.to_string(),
            name: id.to_string(),
            unit: "count".to_string(),
            required,
            value_type: ValueType::Count,
            direction: Direction::HigherIsBetter,
        }
    }

    fn threshold(metric_id: &str, fair: f64, good: f64, excellent: f64, outstanding: f64) -> Threshold {
        Threshold {
            metric_id: metric_id.to_string(),
            level: Level::Beginner,
            thresholds: ThresholdBands {
                fair,
                good,
                excellent,
                outstanding,
            },
        }
    }

    fn challenge(metrics: Vec<Metric>, thresholds: Vec<Threshold>) -> Challenge {
        Challenge {
            id: "passing-drill".to_string(),
            title: "Passing drill".to_string(),
            difficulty: "easy".to_string(),
            level: Level::Beginner,
            points: 100,
            metrics,
            thresholds,
        }
    }

    #[test]
    fn test_weighted_example() {
        // Required accuracy (weight 2) and optional reps (weight 1), both
        // landing on "excellent": 80*2 + 80*1 = 240, average 80.
        let challenge = challenge(
            vec![metric("accuracy", true), metric("reps", false)],
            vec![
                threshold("accuracy", 3.0, 5.0, 7.0, 9.0),
                threshold("reps", 40.0, 60.0, 80.0, 100.0),
            ],
        );
        let values = HashMap::from([
            ("accuracy".to_string(), 8.0),
            ("reps".to_string(), 90.0),
        ]);

        let score = score_submission(&challenge, &values, &ScoringSettings::default());

        assert_eq!(score.total_points, 240.0);
        assert_eq!(score.average_score, 80.0);
        assert_eq!(score.overall_rating, Rating::Excellent);
        assert_eq!(score.metric_scores.len(), 2);
        assert!(score.skipped_metrics.is_empty());
    }

    #[test]
    fn test_unthresholded_metric_is_skipped_and_reported() {
        let challenge = challenge(
            vec![metric("accuracy", true), metric("speed", false)],
            vec![threshold("accuracy", 3.0, 5.0, 7.0, 9.0)],
        );
        let values = HashMap::from([
            ("accuracy".to_string(), 8.0),
            ("speed".to_string(), 12.0),
        ]);

        let score = score_submission(&challenge, &values, &ScoringSettings::default());

        assert_eq!(score.skipped_metrics, vec!["speed".to_string()]);
        assert_eq!(score.metric_scores.len(), 1);
        // Only accuracy contributes: 80 * 2 / 2 = 80.
        assert_eq!(score.average_score, 80.0);
    }

    #[test]
    fn test_no_scorable_metrics_yields_zero() {
        let challenge = challenge(vec![metric("accuracy", true)], vec![]);
        let score = score_submission(&challenge, &HashMap::new(), &ScoringSettings::default());

        assert_eq!(score.total_points, 0.0);
        assert_eq!(score.average_score, 0.0);
        assert_eq!(score.overall_rating, Rating::Poor);
    }

    #[test]
    fn test_missing_value_scores_as_zero() {
        let challenge = challenge(
            vec![metric("accuracy", true)],
            vec![threshold("accuracy", 3.0, 5.0, 7.0, 9.0)],
        );
        let score = score_submission(&challenge, &HashMap::new(), &ScoringSettings::default());

        assert_eq!(score.average_score, 20.0);
        assert_eq!(score.overall_rating, Rating::Poor);
    }

    #[test]
    fn test_average_stays_in_bounds() {
        let challenge = challenge(
            vec![metric("a", true), metric("b", false), metric("c", false)],
            vec![
                threshold("a", 1.0, 2.0, 3.0, 4.0),
                threshold("b", 1.0, 2.0, 3.0, 4.0),
                threshold("c", 1.0, 2.0, 3.0, 4.0),
            ],
        );

        for raw in [-100.0, 0.0, 2.5, 1000.0] {
            let values = HashMap::from([
                ("a".to_string(), raw),
                ("b".to_string(), raw),
                ("c".to_string(), raw),
            ]);
            let score = score_submission(&challenge, &values, &ScoringSettings::default());
            assert!(
                (0.0..=100.0).contains(&score.average_score),
                "raw {raw} gave {}",
                score.average_score
            );
        }
    }

    #[test]
    fn test_overall_bands_differ_from_metric_bands() {
        // averageScore 90 is "outstanding" overall even though the metric
        // ladder hands out outstanding from its own cut points.
        let challenge = challenge(
            vec![metric("a", false), metric("b", false)],
            vec![
                threshold("a", 1.0, 2.0, 3.0, 4.0),
                threshold("b", 1.0, 2.0, 3.0, 4.0),
            ],
        );
        let values = HashMap::from([("a".to_string(), 10.0), ("b".to_string(), 3.5)]);

        let score = score_submission(&challenge, &values, &ScoringSettings::default());
        // (100 + 80) / 2 = 90 -> outstanding band starts exactly at 90.
        assert_eq!(score.average_score, 90.0);
        assert_eq!(score.overall_rating, Rating::Outstanding);
    }
}
