use serde::Serialize;

use crate::config::TrendSettings;
use crate::domain::models::Submission;
use crate::trend::{classify_trend, Trend};

/// Derived per-(player, challenge) statistics. A pure projection of the
/// submission set, recomputed on demand and never stored as truth.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerChallengeStats {
    pub best_score: f64,
    pub average_score: f64,
    pub total_attempts: usize,
    pub trend: Trend,
    pub last_submission: Option<Submission>,
}

impl PlayerChallengeStats {
    fn empty() -> Self {
        Self {
            best_score: 0.0,
            average_score: 0.0,
            total_attempts: 0,
            trend: Trend::Stable,
            last_submission: None,
        }
    }
}

/// Reduce one player's submissions for one challenge into best score,
/// rounded average, attempt count and score trajectory.
pub fn aggregate_challenge_stats(
    challenge_id: &str,
    submissions: &[Submission],
    settings: &TrendSettings,
) -> PlayerChallengeStats {
    let mut attempts: Vec<&Submission> = submissions
        .iter()
        .filter(|s| s.challenge_id == challenge_id)
        .collect();

    if attempts.is_empty() {
        return PlayerChallengeStats::empty();
    }

    attempts.sort_by_key(|s| s.submitted_at);

    let scores: Vec<f64> = attempts.iter().map(|s| s.total_score).collect();
    let best_score = scores.iter().copied().fold(f64::MIN, f64::max);
    let average_score = (scores.iter().sum::<f64>() / scores.len() as f64).round();

    PlayerChallengeStats {
        best_score,
        average_score,
        total_attempts: attempts.len(),
        trend: classify_trend(&scores, settings),
        last_submission: attempts.last().map(|s| (*s).clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::SubmissionStatus;
    use chrono::{Duration, TimeZone, Utc};
    use std::collections::HashMap;

    fn submission(challenge_id: &str, total_score: f64, day: i64) -> Submission {
        let base = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        Submission {
            id: format!("{challenge_id}-{day}"),
            player_id: "p1".to_string(),
            challenge_id: challenge_id.to_string(),
            metric_values: HashMap::new(),
            metric_scores: HashMap::new(),
            total_score,
            overall_rating: None,
            submitted_at: base + Duration::days(day),
            status: SubmissionStatus::Approved,
        }
    }

    #[test]
    fn test_no_submissions_yields_neutral_zeroes() {
        let stats = aggregate_challenge_stats("c1", &[], &TrendSettings::default());

        assert_eq!(stats.best_score, 0.0);
        assert_eq!(stats.average_score, 0.0);
        assert_eq!(stats.total_attempts, 0);
        assert_eq!(stats.trend, Trend::Stable);
        assert!(stats.last_submission.is_none());
    }

    #[test]
    fn test_aggregates_only_matching_challenge() {
        let submissions = vec![
            submission("c1", 50.0, 0),
            submission("c2", 99.0, 1),
            submission("c1", 70.0, 2),
        ];

        let stats = aggregate_challenge_stats("c1", &submissions, &TrendSettings::default());

        assert_eq!(stats.total_attempts, 2);
        assert_eq!(stats.best_score, 70.0);
        assert_eq!(stats.average_score, 60.0);
    }

    #[test]
    fn test_trend_and_last_follow_chronology() {
        // Deliberately out of order; the aggregator must sort by submission
        // time before classifying.
        let submissions = vec![
            submission("c1", 70.0, 4),
            submission("c1", 50.0, 0),
            submission("c1", 60.0, 2),
            submission("c1", 55.0, 1),
            submission("c1", 65.0, 3),
        ];

        let stats = aggregate_challenge_stats("c1", &submissions, &TrendSettings::default());

        assert_eq!(stats.trend, Trend::Improving);
        assert_eq!(stats.last_submission.unwrap().id, "c1-4");
    }

    #[test]
    fn test_average_is_rounded() {
        let submissions = vec![
            submission("c1", 50.0, 0),
            submission("c1", 51.0, 1),
            submission("c1", 51.0, 2),
        ];

        let stats = aggregate_challenge_stats("c1", &submissions, &TrendSettings::default());

        // mean = 50.666... -> 51
        assert_eq!(stats.average_score, 51.0);
    }
}
