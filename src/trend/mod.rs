//! Two related but deliberately separate trend computations: a textual
//! trajectory classifier for per-challenge statistics and a bounded numeric
//! improvement score for the ranking point model. Keep them distinct.

use serde::{Deserialize, Serialize};

use crate::config::TrendSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Stable,
    Declining,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Improving => "improving",
            Trend::Stable => "stable",
            Trend::Declining => "declining",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "improving" => Some(Trend::Improving),
            "stable" => Some(Trend::Stable),
            "declining" => Some(Trend::Declining),
            _ => None,
        }
    }
}

/// Classify a chronological score sequence via the least-squares slope of
/// its most recent window. Fewer than 2 points is `Stable`.
pub fn classify_trend(scores: &[f64], settings: &TrendSettings) -> Trend {
    if scores.len() < 2 {
        return Trend::Stable;
    }

    let recent = &scores[scores.len().saturating_sub(settings.window)..];
    let n = recent.len() as f64;

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for (i, &score) in recent.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += score;
        sum_xy += x * score;
        sum_xx += x * x;
    }

    // x is a dense 0..n-1 sequence, so the denominator only degenerates for
    // n = 1, which the length check above already excludes. Guard anyway.
    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator.abs() < f64::EPSILON {
        return Trend::Stable;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    if slope > settings.slope_threshold {
        Trend::Improving
    } else if slope < -settings.slope_threshold {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

/// Bounded 0..100 improvement score: mean of the most recent window against
/// the mean of everything before it, centred on the neutral value. Too
/// little history (or a zero older mean) stays neutral.
pub fn improvement_score(scores: &[f64], settings: &TrendSettings) -> f64 {
    if scores.len() < 2 {
        return settings.neutral_improvement;
    }

    let split = scores.len().saturating_sub(settings.window);
    if split == 0 {
        return settings.neutral_improvement;
    }

    let older_avg = mean(&scores[..split]);
    let recent_avg = mean(&scores[split..]);
    if older_avg == 0.0 {
        return settings.neutral_improvement;
    }

    let improvement_pct = (recent_avg - older_avg) / older_avg * 100.0;
    (settings.neutral_improvement + improvement_pct).clamp(0.0, 100.0)
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
