pub mod metric;
pub mod submission;
pub mod types;
pub mod validation;

pub use metric::score_metric;
pub use submission::score_submission;
pub use types::{MetricScore, OverallScore, Rating, ScoreResult};
pub use validation::{validate_metrics, ValidationReport};
