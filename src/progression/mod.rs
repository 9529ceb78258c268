//! Level gate: decides whether a player's aggregated statistics unlock the
//! next difficulty level. The gate values themselves belong to the
//! progression-configuration collaborator and arrive as plain data.

use serde::Serialize;
use std::collections::HashSet;

use crate::config::ProgressionSettings;
use crate::domain::models::{Level, PlayerProgress, Submission, SubmissionStatus};

/// Gate values for unlocking one level.
#[derive(Debug, Clone)]
pub struct LevelCriteria {
    pub min_completed_challenges: usize,
    pub min_average_score: f64,
    pub min_progress_percentage: f64,
}

/// The statistics the gate predicate consumes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionStats {
    pub completed_challenges: usize,
    pub average_score: f64,
    pub progress_percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Eligibility {
    pub can_advance: bool,
    /// The level the player would step into. `None` when already at the top.
    pub next_level: Option<Level>,
}

impl ProgressionSettings {
    pub fn criteria_for(&self, level: Level) -> Option<&LevelCriteria> {
        match level {
            Level::Beginner => None,
            Level::Intermediate => Some(&self.intermediate),
            Level::Advanced => Some(&self.advanced),
        }
    }
}

/// Derive the gate's input statistics from a player's submissions and
/// progress record. A challenge counts as completed once it has at least one
/// approved submission.
pub fn progression_stats(
    submissions: &[Submission],
    total_challenges: usize,
) -> ProgressionStats {
    let completed: HashSet<&str> = submissions
        .iter()
        .filter(|s| s.status == SubmissionStatus::Approved)
        .map(|s| s.challenge_id.as_str())
        .collect();

    let scored: Vec<f64> = submissions
        .iter()
        .filter(|s| s.is_scored())
        .map(|s| s.total_score)
        .collect();
    let average_score = if scored.is_empty() {
        0.0
    } else {
        (scored.iter().sum::<f64>() / scored.len() as f64).round()
    };

    let progress_percentage = if total_challenges == 0 {
        0.0
    } else {
        completed.len() as f64 / total_challenges as f64 * 100.0
    };

    ProgressionStats {
        completed_challenges: completed.len(),
        average_score,
        progress_percentage,
    }
}

/// Evaluate the gate for the player's current level. Advancing is an
/// idempotent single-field update performed by the caller; historical scores
/// are never touched.
pub fn check_eligibility(
    progress: &PlayerProgress,
    stats: &ProgressionStats,
    settings: &ProgressionSettings,
) -> Eligibility {
    let Some(next) = progress.current_level.next() else {
        return Eligibility {
            can_advance: false,
            next_level: None,
        };
    };

    // Beginner has no gate, so the next level always has criteria here.
    let can_advance = match settings.criteria_for(next) {
        Some(criteria) => {
            stats.completed_challenges >= criteria.min_completed_challenges
                && stats.average_score >= criteria.min_average_score
                && stats.progress_percentage >= criteria.min_progress_percentage
        }
        None => false,
    };

    Eligibility {
        can_advance,
        next_level: Some(next),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use std::collections::HashMap;

    fn submission(challenge_id: &str, score: f64, approved: bool, day: i64) -> Submission {
        Submission {
            id: format!("{challenge_id}-{day}"),
            player_id: "p1".to_string(),
            challenge_id: challenge_id.to_string(),
            metric_values: HashMap::new(),
            metric_scores: HashMap::new(),
            total_score: score,
            overall_rating: Some(crate::scoring::Rating::Good),
            submitted_at: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap() + Duration::days(day),
            status: if approved {
                SubmissionStatus::Approved
            } else {
                SubmissionStatus::Pending
            },
        }
    }

    fn progress_at(level: Level) -> PlayerProgress {
        PlayerProgress {
            player_id: "p1".to_string(),
            completed_videos: vec![],
            completed_series: vec![],
            achievements: vec![],
            last_activity: None,
            current_level: level,
        }
    }

    #[test]
    fn test_stats_count_distinct_approved_challenges() {
        let submissions = vec![
            submission("c1", 70.0, true, 0),
            submission("c1", 80.0, true, 1), // same challenge, counts once
            submission("c2", 60.0, true, 2),
            submission("c3", 90.0, false, 3), // pending, not completed
        ];

        let stats = progression_stats(&submissions, 10);

        assert_eq!(stats.completed_challenges, 2);
        assert_eq!(stats.average_score, 75.0);
        assert_eq!(stats.progress_percentage, 20.0);
    }

    #[test]
    fn test_zero_challenges_stays_zero() {
        let stats = progression_stats(&[], 0);
        assert_eq!(stats.completed_challenges, 0);
        assert_eq!(stats.average_score, 0.0);
        assert_eq!(stats.progress_percentage, 0.0);
    }

    #[test]
    fn test_gate_passes_when_all_criteria_met() {
        let stats = ProgressionStats {
            completed_challenges: 5,
            average_score: 60.0,
            progress_percentage: 50.0,
        };

        let eligibility = check_eligibility(
            &progress_at(Level::Beginner),
            &stats,
            &ProgressionSettings::default(),
        );

        assert!(eligibility.can_advance);
        assert_eq!(eligibility.next_level, Some(Level::Intermediate));
    }

    #[test]
    fn test_gate_fails_on_any_short_criterion() {
        let stats = ProgressionStats {
            completed_challenges: 5,
            average_score: 59.0, // just under the default gate
            progress_percentage: 90.0,
        };

        let eligibility = check_eligibility(
            &progress_at(Level::Beginner),
            &stats,
            &ProgressionSettings::default(),
        );

        assert!(!eligibility.can_advance);
        assert_eq!(eligibility.next_level, Some(Level::Intermediate));
    }

    #[test]
    fn test_top_level_has_nowhere_to_go() {
        let stats = ProgressionStats {
            completed_challenges: 100,
            average_score: 100.0,
            progress_percentage: 100.0,
        };

        let eligibility = check_eligibility(
            &progress_at(Level::Advanced),
            &stats,
            &ProgressionSettings::default(),
        );

        assert!(!eligibility.can_advance);
        assert!(eligibility.next_level.is_none());
    }
}
