pub mod settings;

pub use settings::{
    AppConfig, ProgressionSettings, RankingSettings, ScoringSettings, TrendSettings,
};
