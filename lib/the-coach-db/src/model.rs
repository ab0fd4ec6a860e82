use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::chrono::NaiveDateTime};
use the_coach_analysis::{MetricKey, RawStats};

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Guild {
    pub id: i64,
    pub channel_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Player {
    pub steam64_id: String,
    pub name: String,
    pub last_match_id: Option<String>,
    pub create_time: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct PlayerLink {
    pub discord_user_id: i64,
    pub steam64_id: String,
    pub create_time: NaiveDateTime,
}

/// Headline stats of one match, in the match endpoint's format.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct PlayerMatch {
    pub match_id: String,
    pub steam64_id: String,
    pub finished_at: NaiveDateTime,
    pub map_name: Option<String>,
    pub outcome: Option<String>,
    pub leetify_rating: Option<f64>,
    pub premier_rank: Option<i64>,
    pub accuracy_enemy_spotted: Option<f64>,
    pub accuracy_head: Option<f64>,
    pub spray_accuracy: Option<f64>,
    pub preaim: Option<f64>,
    pub reaction_time_ms: Option<f64>,
}

impl PlayerMatch {
    /// Stored stats as analysis input. Columns left `NULL` stay absent.
    pub fn stats(&self) -> RawStats {
        [
            (MetricKey::AccuracyEnemySpotted, self.accuracy_enemy_spotted),
            (MetricKey::AccuracyHead, self.accuracy_head),
            (MetricKey::SprayAccuracy, self.spray_accuracy),
            (MetricKey::Preaim, self.preaim),
            (MetricKey::ReactionTimeMs, self.reaction_time_ms),
        ]
        .into_iter()
        .filter_map(|(metric, value)| Some((metric, value?)))
        .collect()
    }
}
