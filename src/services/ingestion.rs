use anyhow::{Context, Result};
use log::{info, warn};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::database::{self, DbConn};
use crate::domain::models::{Challenge, PlayerProfile, PlayerProgress, Submission, Video};
use crate::scoring;

/// Loads a JSON data export (the persistence collaborator's snapshot) into
/// the local SQLite mirror, scoring any submissions that arrive unscored.
pub struct IngestionService {
    export_dir: PathBuf,
    config: AppConfig,
}

struct DataExport {
    players: Vec<PlayerProfile>,
    challenges: Vec<Challenge>,
    submissions: Vec<Submission>,
    videos: Vec<Video>,
    progress: Vec<PlayerProgress>,
}

impl IngestionService {
    pub fn new<P: AsRef<Path>>(export_dir: P, config: AppConfig) -> Self {
        Self {
            export_dir: export_dir.as_ref().to_path_buf(),
            config,
        }
    }

    pub fn run(&self) -> Result<()> {
        let db_path = database::connection::database_path();

        info!("=== Starting Data Ingestion ===\n");
        info!("Export dir: {}, Target DB: {}", self.export_dir.display(), db_path);

        // Step 1: Load the export files
        let mut export = self.load_export()?;
        info!(
            "  → Loaded {} players, {} challenges, {} submissions, {} videos, {} progress records\n",
            export.players.len(),
            export.challenges.len(),
            export.submissions.len(),
            export.videos.len(),
            export.progress.len()
        );

        // Step 2: Score submissions the export left unscored
        let scored = self.score_missing(&mut export);
        info!("  → Computed scores for {} submissions\n", scored);

        // Step 3: Reset schema and insert everything
        let pool = database::create_pool(&db_path)?;
        let mut conn = database::get_connection(&pool)?;
        database::setup::reset_database(&mut conn)?;
        self.insert_export(&mut conn, &export)?;
        info!("  → Export written to database\n");

        info!("=== Ingestion Complete ===");
        Ok(())
    }

    fn load_export(&self) -> Result<DataExport> {
        info!("Step 1: Loading export files...");

        Ok(DataExport {
            players: self.load_file("players")?,
            challenges: self.load_file("challenges")?,
            submissions: self.load_file("submissions")?,
            videos: self.load_file("videos")?,
            progress: self.load_file("progress")?,
        })
    }

    fn load_file<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>> {
        let path = self.export_dir.join(format!("{name}.json"));
        if !path.exists() {
            warn!("  Export file {} not found, treating as empty", path.display());
            return Ok(Vec::new());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Submission scores are computed once, here, for any record the export
    /// delivered without them. Already-scored submissions are left alone.
    fn score_missing(&self, export: &mut DataExport) -> usize {
        info!("Step 2: Scoring unscored submissions...");

        let challenges: HashMap<&str, &Challenge> = export
            .challenges
            .iter()
            .map(|c| (c.id.as_str(), c))
            .collect();

        let mut scored = 0;
        for submission in &mut export.submissions {
            if submission.is_scored() {
                continue;
            }

            let Some(challenge) = challenges.get(submission.challenge_id.as_str()) else {
                warn!(
                    "  Submission {} references unknown challenge {}, left unscored",
                    submission.id, submission.challenge_id
                );
                continue;
            };

            let score = scoring::score_submission(
                challenge,
                &submission.metric_values,
                &self.config.scoring,
            );
            if !score.skipped_metrics.is_empty() {
                warn!(
                    "  Submission {}: no thresholds for metrics {:?}",
                    submission.id, score.skipped_metrics
                );
            }

            submission.metric_scores = score
                .metric_scores
                .iter()
                .map(|m| (m.metric_id.clone(), m.result))
                .collect();
            submission.total_score = score.average_score;
            submission.overall_rating = Some(score.overall_rating);
            scored += 1;
        }

        scored
    }

    fn insert_export(&self, conn: &mut DbConn, export: &DataExport) -> Result<()> {
        info!("Step 3: Writing export to database...");

        for player in &export.players {
            database::players::insert_player(conn, player)?;
        }
        for challenge in &export.challenges {
            database::challenges::insert_challenge(conn, challenge)?;
        }
        for submission in &export.submissions {
            database::submissions::insert_submission(conn, submission)?;
        }
        for video in &export.videos {
            database::videos::insert_video(conn, video)?;
        }
        for progress in &export.progress {
            database::progress::upsert_progress(conn, progress)?;
        }

        Ok(())
    }
}
