pub mod engine;
pub mod filters;
pub mod types;

pub use engine::generate_rankings;
pub use filters::{filter_rankings, RankingFilter};
pub use types::PlayerRanking;
