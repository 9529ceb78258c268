//! Point-model and gate constants, injected explicitly rather than read from
//! globals, so alternative rule sets can be exercised in tests.

use crate::progression::LevelCriteria;

#[derive(Debug, Clone)]
pub struct ScoringSettings {
    /// Weight of a metric flagged `required` in the overall score.
    pub required_weight: f64,
    /// Weight of an optional metric in the overall score.
    pub optional_weight: f64,
    // Overall-rating bands on the weighted average. Deliberately stricter
    // than the per-metric ladder; do not re-derive one from the other.
    pub overall_outstanding: f64,
    pub overall_excellent: f64,
    pub overall_good: f64,
    pub overall_fair: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            required_weight: 2.0,
            optional_weight: 1.0,
            overall_outstanding: 90.0,
            overall_excellent: 70.0,
            overall_good: 50.0,
            overall_fair: 30.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TrendSettings {
    /// How many most-recent scores the trend window covers.
    pub window: usize,
    /// Regression slope beyond which a trajectory counts as improving
    /// (or, negated, declining).
    pub slope_threshold: f64,
    /// Improvement score returned when there is not enough history.
    pub neutral_improvement: f64,
}

impl Default for TrendSettings {
    fn default() -> Self {
        Self {
            window: 5,
            slope_threshold: 2.0,
            neutral_improvement: 50.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RankingSettings {
    /// Base points per approved video submission.
    pub submission_base_points: f64,
    /// Multiplier on each approved submission's admin score.
    pub admin_score_factor: f64,
    /// Points per completed series.
    pub series_bonus: f64,
    /// Flat bonus for activity within the recency window.
    pub activity_bonus: f64,
    pub activity_window_days: i64,
    /// Consistency activity score loses this much per idle day.
    pub activity_decay_per_day: f64,
    // Level cut points. The same thresholds drive both the point multiplier
    // and the displayed level label, evaluated once.
    pub intermediate_series: usize,
    pub intermediate_videos: usize,
    pub intermediate_multiplier: f64,
    pub advanced_series: usize,
    pub advanced_videos: usize,
    pub advanced_multiplier: f64,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            submission_base_points: 10.0,
            admin_score_factor: 2.0,
            series_bonus: 50.0,
            activity_bonus: 20.0,
            activity_window_days: 7,
            activity_decay_per_day: 5.0,
            intermediate_series: 2,
            intermediate_videos: 10,
            intermediate_multiplier: 1.2,
            advanced_series: 5,
            advanced_videos: 20,
            advanced_multiplier: 1.5,
        }
    }
}

/// Gate criteria for unlocking each level. The real values are owned by the
/// progression-configuration collaborator; these defaults stand in for them.
#[derive(Debug, Clone)]
pub struct ProgressionSettings {
    pub intermediate: LevelCriteria,
    pub advanced: LevelCriteria,
}

impl Default for ProgressionSettings {
    fn default() -> Self {
        Self {
            intermediate: LevelCriteria {
                min_completed_challenges: 5,
                min_average_score: 60.0,
                min_progress_percentage: 50.0,
            },
            advanced: LevelCriteria {
                min_completed_challenges: 15,
                min_average_score: 75.0,
                min_progress_percentage: 80.0,
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub scoring: ScoringSettings,
    pub trend: TrendSettings,
    pub ranking: RankingSettings,
    pub progression: ProgressionSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
