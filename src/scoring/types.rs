use serde::{Deserialize, Serialize};

use crate::domain::models::Level;

/// Five-step qualitative rating assigned to a metric value or a whole
/// submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Poor,
    Fair,
    Good,
    Excellent,
    Outstanding,
}

impl Rating {
    /// Point value of the rating on the per-metric ladder.
    pub fn points(&self) -> f64 {
        match self {
            Rating::Poor => 20.0,
            Rating::Fair => 40.0,
            Rating::Good => 60.0,
            Rating::Excellent => 80.0,
            Rating::Outstanding => 100.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Poor => "poor",
            Rating::Fair => "fair",
            Rating::Good => "good",
            Rating::Excellent => "excellent",
            Rating::Outstanding => "outstanding",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "poor" => Some(Rating::Poor),
            "fair" => Some(Rating::Fair),
            "good" => Some(Rating::Good),
            "excellent" => Some(Rating::Excellent),
            "outstanding" => Some(Rating::Outstanding),
            _ => None,
        }
    }
}

/// Rated outcome for one metric value. Pure function of
/// (metric, value, threshold bands).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub rating: Rating,
    pub points: f64,
    pub level: Level,
}

/// One metric's contribution to an overall score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricScore {
    pub metric_id: String,
    pub result: ScoreResult,
    pub weight: f64,
}

/// Weighted overall score of one submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallScore {
    pub total_points: f64,
    pub average_score: f64,
    pub overall_rating: Rating,
    pub metric_scores: Vec<MetricScore>,
    /// Metrics defined on the challenge but lacking threshold bands at its
    /// level. They contribute nothing; callers decide whether to log them.
    pub skipped_metrics: Vec<String>,
}
