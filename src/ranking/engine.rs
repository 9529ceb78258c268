use chrono::{DateTime, Utc};
use log::info;
use std::collections::HashMap;

use crate::config::{RankingSettings, TrendSettings};
use crate::domain::models::{Level, PlayerProfile, PlayerProgress, Role, Video};
use crate::trend::improvement_score;

use super::types::PlayerRanking;

/// Recompute the full leaderboard from a snapshot of players, progress
/// records and reviewed video submissions.
///
/// This is a batch job: it always reads the whole snapshot and produces a
/// whole replacement ranking, never a partial patch. `now` is injected by
/// the caller so reruns over the same snapshot are reproducible.
pub fn generate_rankings(
    players: &[PlayerProfile],
    progress: &[PlayerProgress],
    videos: &[Video],
    now: DateTime<Utc>,
    settings: &RankingSettings,
    trend: &TrendSettings,
) -> Vec<PlayerRanking> {
    info!(
        "Generating rankings for {} profiles over {} videos",
        players.len(),
        videos.len()
    );

    let progress_by_player: HashMap<&str, &PlayerProgress> = progress
        .iter()
        .map(|p| (p.player_id.as_str(), p))
        .collect();

    let mut videos_by_player: HashMap<&str, Vec<&Video>> = HashMap::new();
    for video in videos {
        videos_by_player
            .entry(video.player_id.as_str())
            .or_default()
            .push(video);
    }
    for list in videos_by_player.values_mut() {
        list.sort_by_key(|v| v.uploaded_at);
    }

    let mut rankings: Vec<PlayerRanking> = players
        .iter()
        .filter(|p| p.role == Role::Player)
        .map(|player| {
            rank_player(
                player,
                progress_by_player.get(player.id.as_str()).copied(),
                videos_by_player
                    .get(player.id.as_str())
                    .map(Vec::as_slice)
                    .unwrap_or(&[]),
                now,
                settings,
                trend,
            )
        })
        .collect();

    // Deterministic order: points descending, player id as tie-break.
    rankings.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    for (idx, ranking) in rankings.iter_mut().enumerate() {
        ranking.rank = idx + 1;
    }

    info!("Ranked {} players", rankings.len());
    rankings
}

fn rank_player(
    player: &PlayerProfile,
    progress: Option<&PlayerProgress>,
    videos: &[&Video],
    now: DateTime<Utc>,
    settings: &RankingSettings,
    trend: &TrendSettings,
) -> PlayerRanking {
    let approved: Vec<&Video> = videos.iter().copied().filter(|v| v.is_approved()).collect();

    let mut points = approved.len() as f64 * settings.submission_base_points;
    points += settings.admin_score_factor
        * approved
            .iter()
            .filter_map(|v| v.admin_score)
            .sum::<f64>();

    let completed_series = progress.map_or(0, |p| p.completed_series.len());
    let completed_videos = progress.map_or(0, |p| p.completed_videos.len());
    points += completed_series as f64 * settings.series_bonus;
    points += progress.map_or(0, |p| p.achievement_points()) as f64;

    let last_activity = progress.and_then(|p| p.last_activity);
    if let Some(days) = days_since(last_activity, now) {
        if days <= settings.activity_window_days {
            points += settings.activity_bonus;
        }
    }

    // One evaluation of the cut points yields both the multiplier and the
    // displayed level, so the two can never disagree.
    let (level, multiplier) = level_for(completed_series, completed_videos, settings);
    let total_points = (points * multiplier).floor() as i64;

    PlayerRanking {
        player_id: player.id.clone(),
        name: player.name.clone(),
        age: player.age,
        position: player.position.clone(),
        total_points,
        rank: 0, // assigned after the population sort
        level,
        consistency: consistency(videos, last_activity, now, settings),
        improvement: improvement(&approved, trend),
    }
}

/// Level label and point multiplier from completed-content cut points.
fn level_for(completed_series: usize, completed_videos: usize, settings: &RankingSettings) -> (Level, f64) {
    if completed_series >= settings.advanced_series && completed_videos >= settings.advanced_videos {
        (Level::Advanced, settings.advanced_multiplier)
    } else if completed_series >= settings.intermediate_series
        && completed_videos >= settings.intermediate_videos
    {
        (Level::Intermediate, settings.intermediate_multiplier)
    } else {
        (Level::Beginner, 1.0)
    }
}

/// 0..100 blend of approval rate and activity recency. Zero submissions is
/// defined as zero consistency.
fn consistency(
    videos: &[&Video],
    last_activity: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    settings: &RankingSettings,
) -> f64 {
    if videos.is_empty() {
        return 0.0;
    }

    let approved = videos.iter().filter(|v| v.is_approved()).count();
    let approval_rate = approved as f64 / videos.len() as f64 * 100.0;

    let activity_score = match days_since(last_activity, now) {
        Some(days) => (100.0 - days as f64 * settings.activity_decay_per_day).max(0.0),
        None => 0.0,
    };

    (approval_rate + activity_score) / 2.0
}

fn improvement(approved: &[&Video], trend: &TrendSettings) -> f64 {
    // Chronological admin scores of approved submissions only.
    let scores: Vec<f64> = approved.iter().filter_map(|v| v.admin_score).collect();
    improvement_score(&scores, trend)
}

fn days_since(moment: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Option<i64> {
    moment.map(|m| now.signed_duration_since(m).num_days().max(0))
}
