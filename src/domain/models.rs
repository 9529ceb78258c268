use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::scoring::{Rating, ScoreResult};

/// Raw metric values keyed by metric id, as submitted by the player.
pub type MetricValues = HashMap<String, f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    Numeric,
    Percentage,
    Time,
    Count,
}

/// Whether a larger raw value means a better performance.
/// Time-like metrics (sprint seconds, drill completion time) are the
/// lower-is-better case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    HigherIsBetter,
    LowerIsBetter,
}

/// One measurable quantity of a challenge (e.g. "accurate passes").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub required: bool,
    pub value_type: ValueType,
    #[serde(default)]
    pub direction: Direction,
}

/// Four ascending cut points for one metric at one difficulty level.
/// The fair <= good <= excellent <= outstanding ordering (inverted for
/// lower-is-better metrics) is the data owner's responsibility.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ThresholdBands {
    pub fair: f64,
    pub good: f64,
    pub excellent: f64,
    pub outstanding: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Threshold {
    pub metric_id: String,
    pub level: Level,
    pub thresholds: ThresholdBands,
}

/// Player difficulty level, also used as the leaderboard level label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "beginner" => Some(Level::Beginner),
            "intermediate" => Some(Level::Intermediate),
            "advanced" => Some(Level::Advanced),
            _ => None,
        }
    }

    /// The level above this one, if any.
    pub fn next(&self) -> Option<Self> {
        match self {
            Level::Beginner => Some(Level::Intermediate),
            Level::Intermediate => Some(Level::Advanced),
            Level::Advanced => None,
        }
    }
}

/// A defined task with its metric and threshold definitions. Immutable for
/// the lifetime of a submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub difficulty: String,
    pub level: Level,
    pub points: i64,
    pub metrics: Vec<Metric>,
    pub thresholds: Vec<Threshold>,
}

impl Challenge {
    /// Threshold bands for a metric at this challenge's level.
    pub fn threshold_for(&self, metric_id: &str) -> Option<&ThresholdBands> {
        self.thresholds
            .iter()
            .find(|t| t.metric_id == metric_id && t.level == self.level)
            .map(|t| &t.thresholds)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
    NeedsImprovement,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Approved => "approved",
            SubmissionStatus::Rejected => "rejected",
            SubmissionStatus::NeedsImprovement => "needs_improvement",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(SubmissionStatus::Pending),
            "approved" => Some(SubmissionStatus::Approved),
            "rejected" => Some(SubmissionStatus::Rejected),
            "needs_improvement" => Some(SubmissionStatus::NeedsImprovement),
            _ => None,
        }
    }
}

/// One recorded attempt at a challenge. Scores are computed once when the
/// attempt is recorded and never patched afterwards; a re-score is a new
/// submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub player_id: String,
    pub challenge_id: String,
    pub metric_values: MetricValues,
    #[serde(default)]
    pub metric_scores: HashMap<String, ScoreResult>,
    #[serde(default)]
    pub total_score: f64,
    #[serde(default)]
    pub overall_rating: Option<Rating>,
    pub submitted_at: DateTime<Utc>,
    pub status: SubmissionStatus,
}

impl Submission {
    pub fn is_scored(&self) -> bool {
        self.overall_rating.is_some()
    }
}

/// An admin-reviewed video submission. Approved videos carry the admin score
/// that feeds the ranking point model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub player_id: String,
    #[serde(default)]
    pub challenge_id: Option<String>,
    pub status: SubmissionStatus,
    #[serde(default)]
    pub admin_score: Option<f64>,
    pub uploaded_at: DateTime<Utc>,
}

impl Video {
    pub fn is_approved(&self) -> bool {
        self.status == SubmissionStatus::Approved
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Player,
    Scout,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Player => "player",
            Role::Scout => "scout",
            Role::Admin => "admin",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "player" => Some(Role::Player),
            "scout" => Some(Role::Scout),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub id: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub position: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub points: i64,
}

/// Per-player progress record from the persistence collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProgress {
    pub player_id: String,
    #[serde(default)]
    pub completed_videos: Vec<String>,
    #[serde(default)]
    pub completed_series: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub last_activity: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current_level: Level,
}

impl PlayerProgress {
    pub fn achievement_points(&self) -> i64 {
        self.achievements.iter().map(|a| a.points).sum()
    }
}
