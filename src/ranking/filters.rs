use crate::domain::models::Level;

use super::types::PlayerRanking;

/// Post-hoc leaderboard filter. Every supplied field must pass; an absent
/// field is no constraint.
#[derive(Debug, Clone, Default)]
pub struct RankingFilter {
    /// Age bucket, either `"20+"` or a `"min-max"` range.
    pub age_range: Option<String>,
    pub position: Option<String>,
    pub level: Option<Level>,
    pub min_points: Option<i64>,
    pub max_points: Option<i64>,
}

pub fn filter_rankings(rankings: &[PlayerRanking], filter: &RankingFilter) -> Vec<PlayerRanking> {
    rankings
        .iter()
        .filter(|r| matches(r, filter))
        .cloned()
        .collect()
}

fn matches(ranking: &PlayerRanking, filter: &RankingFilter) -> bool {
    if let Some(range) = &filter.age_range {
        if !matches_age(ranking.age, range) {
            return false;
        }
    }
    if let Some(position) = &filter.position {
        if ranking.position.as_deref() != Some(position.as_str()) {
            return false;
        }
    }
    if let Some(level) = filter.level {
        if ranking.level != level {
            return false;
        }
    }
    if let Some(min) = filter.min_points {
        if ranking.total_points < min {
            return false;
        }
    }
    if let Some(max) = filter.max_points {
        if ranking.total_points > max {
            return false;
        }
    }
    true
}

/// `"20+"` means at-least; `"16-18"` is inclusive on both ends. A player
/// without a recorded age never matches an age constraint; a bucket string
/// that parses to nothing constrains nothing.
fn matches_age(age: Option<u8>, range: &str) -> bool {
    let Some(age) = age else { return false };

    if let Some(min) = range.strip_suffix('+') {
        return match min.parse::<u8>() {
            Ok(min) => age >= min,
            Err(_) => true,
        };
    }

    match range.split_once('-') {
        Some((min, max)) => match (min.parse::<u8>(), max.parse::<u8>()) {
            (Ok(min), Ok(max)) => age >= min && age <= max,
            _ => true,
        },
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, age: Option<u8>, position: &str, points: i64, level: Level) -> PlayerRanking {
        PlayerRanking {
            player_id: id.to_string(),
            name: id.to_string(),
            age,
            position: Some(position.to_string()),
            total_points: points,
            rank: 0,
            level,
            consistency: 50.0,
            improvement: 50.0,
        }
    }

    fn sample() -> Vec<PlayerRanking> {
        vec![
            entry("p1", Some(17), "winger", 450, Level::Intermediate),
            entry("p2", Some(21), "striker", 300, Level::Beginner),
            entry("p3", Some(24), "winger", 700, Level::Advanced),
            entry("p4", None, "striker", 120, Level::Beginner),
        ]
    }

    fn ids(rankings: &[PlayerRanking]) -> Vec<&str> {
        rankings.iter().map(|r| r.player_id.as_str()).collect()
    }

    #[test]
    fn test_no_filter_keeps_everything() {
        let filtered = filter_rankings(&sample(), &RankingFilter::default());
        assert_eq!(filtered.len(), 4);
    }

    #[test]
    fn test_open_ended_age_bucket() {
        let filter = RankingFilter {
            age_range: Some("20+".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_rankings(&sample(), &filter)), vec!["p2", "p3"]);
    }

    #[test]
    fn test_bounded_age_bucket_is_inclusive() {
        let filter = RankingFilter {
            age_range: Some("17-21".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_rankings(&sample(), &filter)), vec!["p1", "p2"]);
    }

    #[test]
    fn test_unknown_age_never_matches_age_constraint() {
        let filter = RankingFilter {
            age_range: Some("0-120".to_string()),
            ..Default::default()
        };
        let filtered = filter_rankings(&sample(), &filter);
        assert!(!ids(&filtered).contains(&"p4"));
    }

    #[test]
    fn test_filters_combine_with_and() {
        let filter = RankingFilter {
            age_range: Some("20+".to_string()),
            position: Some("winger".to_string()),
            min_points: Some(500),
            ..Default::default()
        };
        assert_eq!(ids(&filter_rankings(&sample(), &filter)), vec!["p3"]);
    }

    #[test]
    fn test_level_and_point_range() {
        let filter = RankingFilter {
            level: Some(Level::Beginner),
            min_points: Some(100),
            max_points: Some(350),
            ..Default::default()
        };
        assert_eq!(ids(&filter_rankings(&sample(), &filter)), vec!["p2", "p4"]);
    }
}
