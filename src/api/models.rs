use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::{MetricValues, Submission};
use crate::ranking::PlayerRanking;
use crate::scoring::{OverallScore, ValidationReport};
use crate::stats::PlayerChallengeStats;
use crate::trend::Trend;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub items: Vec<PlayerRanking>,
    pub total: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionSummary {
    pub id: String,
    pub total_score: f64,
    pub overall_rating: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl From<&Submission> for SubmissionSummary {
    fn from(submission: &Submission) -> Self {
        Self {
            id: submission.id.clone(),
            total_score: submission.total_score,
            overall_rating: submission.overall_rating.map(|r| r.as_str().to_string()),
            submitted_at: submission.submitted_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeStatsResponse {
    pub best_score: f64,
    pub average_score: f64,
    pub total_attempts: usize,
    pub trend: Trend,
    pub last_submission: Option<SubmissionSummary>,
}

impl From<PlayerChallengeStats> for ChallengeStatsResponse {
    fn from(stats: PlayerChallengeStats) -> Self {
        Self {
            best_score: stats.best_score,
            average_score: stats.average_score,
            total_attempts: stats.total_attempts,
            trend: stats.trend,
            last_submission: stats.last_submission.as_ref().map(SubmissionSummary::from),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub challenge_id: String,
    pub metric_values: MetricValues,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub validation: ValidationReport,
    pub score: OverallScore,
}
