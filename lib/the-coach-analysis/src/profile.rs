use crate::metric::{Endpoint, MetricKey};
use crate::normalize::{absolute_rating, normalize_metric, relative_rating, sanitize};
use serde::{Deserialize, Deserializer, Serialize};

/// Rating block as returned by the vendor. Aim, positioning and utility are
/// 0-100 (sometimes 0-1); the rest are signed relative decimals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRatings {
    #[serde(default, deserialize_with = "lenient_number")]
    pub aim: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub positioning: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub utility: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub clutch: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub opening: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub ct_leetify: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub t_leetify: Option<f64>,
}

/// Ratings converted to their display scales. Missing values read as `0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ratings {
    pub aim: f64,
    pub positioning: f64,
    pub utility: f64,
    pub clutch: f64,
    pub opening: f64,
    pub ct: f64,
    pub t: f64,
}

impl RawRatings {
    pub fn to_display(&self) -> Ratings {
        let value = |v: Option<f64>| v.unwrap_or_default();
        Ratings {
            aim: absolute_rating(value(self.aim)),
            positioning: absolute_rating(value(self.positioning)),
            utility: absolute_rating(value(self.utility)),
            clutch: relative_rating(value(self.clutch)),
            opening: relative_rating(value(self.opening)),
            ct: relative_rating(value(self.ct_leetify)),
            t: relative_rating(value(self.t_leetify)),
        }
    }

    /// CT side rating in the vendor's native decimal scale.
    pub fn ct_native(&self) -> f64 {
        sanitize(self.ct_leetify.unwrap_or_default())
    }

    /// T side rating in the vendor's native decimal scale.
    pub fn t_native(&self) -> f64 {
        sanitize(self.t_leetify.unwrap_or_default())
    }
}

/// Flat stat block as returned by the vendor, one optional value per
/// [`MetricKey`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawStats {
    #[serde(default, deserialize_with = "lenient_number")]
    pub accuracy_enemy_spotted: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub accuracy_head: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub spray_accuracy: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub counter_strafing_good_shots_ratio: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub preaim: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub reaction_time_ms: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub ct_opening_duel_success_percentage: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub t_opening_duel_success_percentage: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub ct_opening_aggression_success_rate: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub t_opening_aggression_success_rate: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub trade_kills_success_percentage: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub traded_deaths_success_percentage: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub trade_kill_opportunities_per_round: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub flashbang_hit_foe_per_flashbang: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub flashbang_hit_foe_avg_duration: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub flashbang_hit_friend_per_flashbang: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub flashbang_leading_to_kill: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub flashbang_thrown: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub he_foes_damage_avg: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub he_friends_damage_avg: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub utility_on_death_avg: Option<f64>,
}

impl RawStats {
    fn slot(&self, metric: MetricKey) -> &Option<f64> {
        match metric {
            MetricKey::AccuracyEnemySpotted => &self.accuracy_enemy_spotted,
            MetricKey::AccuracyHead => &self.accuracy_head,
            MetricKey::SprayAccuracy => &self.spray_accuracy,
            MetricKey::CounterStrafingGoodShotsRatio => &self.counter_strafing_good_shots_ratio,
            MetricKey::Preaim => &self.preaim,
            MetricKey::ReactionTimeMs => &self.reaction_time_ms,
            MetricKey::CtOpeningDuelSuccessPercentage => &self.ct_opening_duel_success_percentage,
            MetricKey::TOpeningDuelSuccessPercentage => &self.t_opening_duel_success_percentage,
            MetricKey::CtOpeningAggressionSuccessRate => &self.ct_opening_aggression_success_rate,
            MetricKey::TOpeningAggressionSuccessRate => &self.t_opening_aggression_success_rate,
            MetricKey::TradeKillsSuccessPercentage => &self.trade_kills_success_percentage,
            MetricKey::TradedDeathsSuccessPercentage => &self.traded_deaths_success_percentage,
            MetricKey::TradeKillOpportunitiesPerRound => &self.trade_kill_opportunities_per_round,
            MetricKey::FlashbangHitFoePerFlashbang => &self.flashbang_hit_foe_per_flashbang,
            MetricKey::FlashbangHitFoeAvgDuration => &self.flashbang_hit_foe_avg_duration,
            MetricKey::FlashbangHitFriendPerFlashbang => &self.flashbang_hit_friend_per_flashbang,
            MetricKey::FlashbangLeadingToKill => &self.flashbang_leading_to_kill,
            MetricKey::FlashbangThrown => &self.flashbang_thrown,
            MetricKey::HeFoesDamageAvg => &self.he_foes_damage_avg,
            MetricKey::HeFriendsDamageAvg => &self.he_friends_damage_avg,
            MetricKey::UtilityOnDeathAvg => &self.utility_on_death_avg,
        }
    }

    fn slot_mut(&mut self, metric: MetricKey) -> &mut Option<f64> {
        match metric {
            MetricKey::AccuracyEnemySpotted => &mut self.accuracy_enemy_spotted,
            MetricKey::AccuracyHead => &mut self.accuracy_head,
            MetricKey::SprayAccuracy => &mut self.spray_accuracy,
            MetricKey::CounterStrafingGoodShotsRatio => {
                &mut self.counter_strafing_good_shots_ratio
            }
            MetricKey::Preaim => &mut self.preaim,
            MetricKey::ReactionTimeMs => &mut self.reaction_time_ms,
            MetricKey::CtOpeningDuelSuccessPercentage => {
                &mut self.ct_opening_duel_success_percentage
            }
            MetricKey::TOpeningDuelSuccessPercentage => &mut self.t_opening_duel_success_percentage,
            MetricKey::CtOpeningAggressionSuccessRate => {
                &mut self.ct_opening_aggression_success_rate
            }
            MetricKey::TOpeningAggressionSuccessRate => &mut self.t_opening_aggression_success_rate,
            MetricKey::TradeKillsSuccessPercentage => &mut self.trade_kills_success_percentage,
            MetricKey::TradedDeathsSuccessPercentage => &mut self.traded_deaths_success_percentage,
            MetricKey::TradeKillOpportunitiesPerRound => {
                &mut self.trade_kill_opportunities_per_round
            }
            MetricKey::FlashbangHitFoePerFlashbang => &mut self.flashbang_hit_foe_per_flashbang,
            MetricKey::FlashbangHitFoeAvgDuration => &mut self.flashbang_hit_foe_avg_duration,
            MetricKey::FlashbangHitFriendPerFlashbang => {
                &mut self.flashbang_hit_friend_per_flashbang
            }
            MetricKey::FlashbangLeadingToKill => &mut self.flashbang_leading_to_kill,
            MetricKey::FlashbangThrown => &mut self.flashbang_thrown,
            MetricKey::HeFoesDamageAvg => &mut self.he_foes_damage_avg,
            MetricKey::HeFriendsDamageAvg => &mut self.he_friends_damage_avg,
            MetricKey::UtilityOnDeathAvg => &mut self.utility_on_death_avg,
        }
    }

    /// The raw value of a metric, or `None` if the vendor did not send it.
    pub fn get(&self, metric: MetricKey) -> Option<f64> {
        *self.slot(metric)
    }

    /// The raw value of a metric, reading absent or non-finite values as `0`.
    pub fn raw(&self, metric: MetricKey) -> f64 {
        sanitize(self.get(metric).unwrap_or_default())
    }

    /// The value of a metric in its canonical scale.
    pub fn normalized(&self, metric: MetricKey, endpoint: Endpoint) -> f64 {
        normalize_metric(self.raw(metric), metric, endpoint)
    }

    pub fn set(&mut self, metric: MetricKey, value: f64) {
        *self.slot_mut(metric) = Some(value);
    }

    pub fn with(mut self, metric: MetricKey, value: f64) -> Self {
        self.set(metric, value);
        self
    }
}

impl FromIterator<(MetricKey, f64)> for RawStats {
    fn from_iter<I: IntoIterator<Item = (MetricKey, f64)>>(iter: I) -> Self {
        let mut stats = RawStats::default();
        for (metric, value) in iter {
            stats.set(metric, value);
        }
        stats
    }
}

/// Input record for one player. Callers must only build this once both the
/// rating and stats blocks are known to be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawProfile {
    pub name: String,
    /// Skill rank used to select a benchmark tier (Premier rating).
    pub skill_rank: Option<u32>,
    pub ratings: RawRatings,
    pub stats: RawStats,
    #[serde(default = "default_endpoint")]
    pub endpoint: Endpoint,
}

fn default_endpoint() -> Endpoint {
    Endpoint::Profile
}

/// Accepts numbers, numeric strings and `null`; anything else reads as absent.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(number)) => number.as_f64(),
        Some(serde_json::Value::String(text)) => text.trim().parse().ok(),
        _ => None,
    })
}
