use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use the_coach_analysis::{Endpoint, RawProfile, RawRatings, RawStats};

/// Response of the profile endpoint. Stat percentages are 0-100 here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub steam64_id: String,
    #[serde(default)]
    pub winrate: Option<f64>,
    #[serde(default)]
    pub total_matches: Option<u32>,
    #[serde(default)]
    pub ranks: Option<Ranks>,
    #[serde(default)]
    pub rating: Option<RawRatings>,
    #[serde(default)]
    pub stats: Option<RawStats>,
    /// Newest first.
    #[serde(default)]
    pub recent_matches: Vec<RecentMatch>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ranks {
    #[serde(default)]
    pub leetify: Option<f64>,
    #[serde(default)]
    pub premier: Option<u32>,
    #[serde(default)]
    pub faceit: Option<u32>,
    #[serde(default)]
    pub faceit_elo: Option<u32>,
    #[serde(default)]
    pub wingman: Option<u32>,
}

/// One entry of `recent_matches`. Its stats use the match format, with
/// percentages already decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentMatch {
    pub id: String,
    pub finished_at: DateTime<Utc>,
    #[serde(default)]
    pub data_source: Option<String>,
    #[serde(default)]
    pub outcome: Option<String>,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub map_name: Option<String>,
    #[serde(default)]
    pub leetify_rating: Option<f64>,
    #[serde(default)]
    pub score: Vec<u32>,
    #[serde(flatten)]
    pub stats: RawStats,
}

impl Profile {
    pub fn premier_rank(&self) -> Option<u32> {
        self.ranks.as_ref().and_then(|ranks| ranks.premier)
    }

    /// Analysis input for this profile, or `None` when the rating or stats
    /// block is missing.
    pub fn raw_profile(&self) -> Option<RawProfile> {
        Some(RawProfile {
            name: self.name.clone(),
            skill_rank: self.premier_rank(),
            ratings: self.rating.clone()?,
            stats: self.stats.clone()?,
            endpoint: Endpoint::Profile,
        })
    }

    /// Matches newer than `last_seen`, oldest first. When nothing was seen
    /// before, or `last_seen` is no longer among the recent matches, only the
    /// newest match is returned.
    pub fn matches_since(&self, last_seen: Option<&str>) -> Vec<&RecentMatch> {
        let newer = last_seen.and_then(|last_seen| {
            self.recent_matches
                .iter()
                .position(|m| m.id == last_seen)
                .map(|index| &self.recent_matches[..index])
        });
        match newer {
            Some(newer) => newer.iter().rev().collect(),
            None => self.recent_matches.first().into_iter().collect(),
        }
    }
}

impl RecentMatch {
    pub fn score_line(&self) -> Option<String> {
        match self.score.as_slice() {
            [ours, theirs] => Some(format!("{ours}:{theirs}")),
            _ => None,
        }
    }
}
