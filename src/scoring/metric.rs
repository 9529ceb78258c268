use crate::domain::models::{Direction, Level, Metric, ThresholdBands};

use super::types::{Rating, ScoreResult};

/// Rate one raw metric value against its threshold ladder.
///
/// The ladder is evaluated strictly from outstanding down; a missing value
/// scores as the worst possible input. No bounds checking happens here:
/// out-of-range values ride the same ladder, validation is a separate
/// advisory concern.
pub fn score_metric(
    metric: &Metric,
    value: Option<f64>,
    bands: &ThresholdBands,
    level: Level,
) -> ScoreResult {
    let value = value.unwrap_or(match metric.direction {
        Direction::HigherIsBetter => 0.0,
        Direction::LowerIsBetter => f64::INFINITY,
    });

    let reached = |cut: f64| match metric.direction {
        Direction::HigherIsBetter => value >= cut,
        Direction::LowerIsBetter => value <= cut,
    };

    let rating = if reached(bands.outstanding) {
        Rating::Outstanding
    } else if reached(bands.excellent) {
        Rating::Excellent
    } else if reached(bands.good) {
        Rating::Good
    } else if reached(bands.fair) {
        Rating::Fair
    } else {
        Rating::Poor
    };

    ScoreResult {
        rating,
        points: rating.points(),
        level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ValueType;

    fn metric(direction: Direction) -> Metric {
        Metric {
            id: "accuracy".to_string(),
            name: "Accurate passes".to_string(),
            unit: "count".to_string(),
            required: true,
            value_type: ValueType::Count,
            direction,
        }
    }

    fn bands() -> ThresholdBands {
        ThresholdBands {
            fair: 3.0,
            good: 5.0,
            excellent: 7.0,
            outstanding: 9.0,
        }
    }

    #[test]
    fn test_ladder_ratings() {
        let m = metric(Direction::HigherIsBetter);
        let b = bands();

        let cases = [
            (0.0, Rating::Poor),
            (2.9, Rating::Poor),
            (3.0, Rating::Fair),
            (5.0, Rating::Good),
            (8.0, Rating::Excellent),
            (9.0, Rating::Outstanding),
            (50.0, Rating::Outstanding), // out of range still rides the ladder
        ];
        for (value, expected) in cases {
            let result = score_metric(&m, Some(value), &b, Level::Beginner);
            assert_eq!(result.rating, expected, "value {value}");
            assert_eq!(result.points, expected.points());
        }
    }

    #[test]
    fn test_points_monotonic_in_value() {
        let m = metric(Direction::HigherIsBetter);
        let b = bands();

        let mut previous = 0.0;
        for i in 0..120 {
            let value = i as f64 * 0.1;
            let result = score_metric(&m, Some(value), &b, Level::Beginner);
            assert!(result.points >= previous, "dropped at value {value}");
            previous = result.points;
        }
    }

    #[test]
    fn test_missing_value_scores_worst() {
        let higher = metric(Direction::HigherIsBetter);
        let result = score_metric(&higher, None, &bands(), Level::Beginner);
        assert_eq!(result.rating, Rating::Poor);

        // For lower-is-better a missing value must not land on "outstanding".
        let lower = metric(Direction::LowerIsBetter);
        let time_bands = ThresholdBands {
            fair: 20.0,
            good: 15.0,
            excellent: 12.0,
            outstanding: 10.0,
        };
        let result = score_metric(&lower, None, &time_bands, Level::Beginner);
        assert_eq!(result.rating, Rating::Poor);
    }

    #[test]
    fn test_lower_is_better_inverts_ladder() {
        let m = metric(Direction::LowerIsBetter);
        let time_bands = ThresholdBands {
            fair: 20.0,
            good: 15.0,
            excellent: 12.0,
            outstanding: 10.0,
        };

        let cases = [
            (9.5, Rating::Outstanding),
            (11.0, Rating::Excellent),
            (14.0, Rating::Good),
            (19.0, Rating::Fair),
            (25.0, Rating::Poor),
        ];
        for (value, expected) in cases {
            let result = score_metric(&m, Some(value), &time_bands, Level::Beginner);
            assert_eq!(result.rating, expected, "value {value}");
        }
    }

    #[test]
    fn test_result_carries_level() {
        let m = metric(Direction::HigherIsBetter);
        let result = score_metric(&m, Some(6.0), &bands(), Level::Advanced);
        assert_eq!(result.level, Level::Advanced);
    }
}
