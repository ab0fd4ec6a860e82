use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// The API endpoint kind a set of stats was read from. The two endpoints
/// disagree on how percentage fields are scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    /// Aggregated profile stats; percentages arrive as whole numbers (`42.5`).
    Profile,
    /// Per-match stats; percentages arrive as decimals (`0.425`).
    Match,
}

/// How a raw vendor field is scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    /// Already a 0-1 decimal.
    Decimal,
    /// A percentage whose scale depends on the [`Endpoint`].
    Percentage,
    /// A raw count, duration or damage value.
    Magnitude,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

/// Every stat consumed by an analyzer. Each variant has a total mapping to
/// its vendor field name, format, direction and display unit, so a new
/// metric cannot fall through to the heuristic normalization path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    AccuracyEnemySpotted,
    AccuracyHead,
    SprayAccuracy,
    CounterStrafingGoodShotsRatio,
    Preaim,
    ReactionTimeMs,
    CtOpeningDuelSuccessPercentage,
    TOpeningDuelSuccessPercentage,
    CtOpeningAggressionSuccessRate,
    TOpeningAggressionSuccessRate,
    TradeKillsSuccessPercentage,
    TradedDeathsSuccessPercentage,
    TradeKillOpportunitiesPerRound,
    FlashbangHitFoePerFlashbang,
    FlashbangHitFoeAvgDuration,
    FlashbangHitFriendPerFlashbang,
    FlashbangLeadingToKill,
    FlashbangThrown,
    HeFoesDamageAvg,
    HeFriendsDamageAvg,
    UtilityOnDeathAvg,
}

impl MetricKey {
    pub const ALL: [MetricKey; 21] = [
        MetricKey::AccuracyEnemySpotted,
        MetricKey::AccuracyHead,
        MetricKey::SprayAccuracy,
        MetricKey::CounterStrafingGoodShotsRatio,
        MetricKey::Preaim,
        MetricKey::ReactionTimeMs,
        MetricKey::CtOpeningDuelSuccessPercentage,
        MetricKey::TOpeningDuelSuccessPercentage,
        MetricKey::CtOpeningAggressionSuccessRate,
        MetricKey::TOpeningAggressionSuccessRate,
        MetricKey::TradeKillsSuccessPercentage,
        MetricKey::TradedDeathsSuccessPercentage,
        MetricKey::TradeKillOpportunitiesPerRound,
        MetricKey::FlashbangHitFoePerFlashbang,
        MetricKey::FlashbangHitFoeAvgDuration,
        MetricKey::FlashbangHitFriendPerFlashbang,
        MetricKey::FlashbangLeadingToKill,
        MetricKey::FlashbangThrown,
        MetricKey::HeFoesDamageAvg,
        MetricKey::HeFriendsDamageAvg,
        MetricKey::UtilityOnDeathAvg,
    ];

    /// Field name as it appears in the vendor JSON.
    pub fn field_name(self) -> &'static str {
        match self {
            MetricKey::AccuracyEnemySpotted => "accuracy_enemy_spotted",
            MetricKey::AccuracyHead => "accuracy_head",
            MetricKey::SprayAccuracy => "spray_accuracy",
            MetricKey::CounterStrafingGoodShotsRatio => "counter_strafing_good_shots_ratio",
            MetricKey::Preaim => "preaim",
            MetricKey::ReactionTimeMs => "reaction_time_ms",
            MetricKey::CtOpeningDuelSuccessPercentage => "ct_opening_duel_success_percentage",
            MetricKey::TOpeningDuelSuccessPercentage => "t_opening_duel_success_percentage",
            MetricKey::CtOpeningAggressionSuccessRate => "ct_opening_aggression_success_rate",
            MetricKey::TOpeningAggressionSuccessRate => "t_opening_aggression_success_rate",
            MetricKey::TradeKillsSuccessPercentage => "trade_kills_success_percentage",
            MetricKey::TradedDeathsSuccessPercentage => "traded_deaths_success_percentage",
            MetricKey::TradeKillOpportunitiesPerRound => "trade_kill_opportunities_per_round",
            MetricKey::FlashbangHitFoePerFlashbang => "flashbang_hit_foe_per_flashbang",
            MetricKey::FlashbangHitFoeAvgDuration => "flashbang_hit_foe_avg_duration",
            MetricKey::FlashbangHitFriendPerFlashbang => "flashbang_hit_friend_per_flashbang",
            MetricKey::FlashbangLeadingToKill => "flashbang_leading_to_kill",
            MetricKey::FlashbangThrown => "flashbang_thrown",
            MetricKey::HeFoesDamageAvg => "he_foes_damage_avg",
            MetricKey::HeFriendsDamageAvg => "he_friends_damage_avg",
            MetricKey::UtilityOnDeathAvg => "utility_on_death_avg",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MetricKey::AccuracyEnemySpotted => "Accuracy (enemy spotted)",
            MetricKey::AccuracyHead => "Head accuracy",
            MetricKey::SprayAccuracy => "Spray accuracy",
            MetricKey::CounterStrafingGoodShotsRatio => "Counter-strafing",
            MetricKey::Preaim => "Preaim",
            MetricKey::ReactionTimeMs => "Time to damage",
            MetricKey::CtOpeningDuelSuccessPercentage => "CT opening duels won",
            MetricKey::TOpeningDuelSuccessPercentage => "T opening duels won",
            MetricKey::CtOpeningAggressionSuccessRate => "CT aggression success",
            MetricKey::TOpeningAggressionSuccessRate => "T aggression success",
            MetricKey::TradeKillsSuccessPercentage => "Trade kill success",
            MetricKey::TradedDeathsSuccessPercentage => "Traded deaths",
            MetricKey::TradeKillOpportunitiesPerRound => "Trade opportunities / round",
            MetricKey::FlashbangHitFoePerFlashbang => "Enemies flashed / flash",
            MetricKey::FlashbangHitFoeAvgDuration => "Avg blind time",
            MetricKey::FlashbangHitFriendPerFlashbang => "Teammates flashed / flash",
            MetricKey::FlashbangLeadingToKill => "Flashes leading to kill",
            MetricKey::FlashbangThrown => "Flashes thrown",
            MetricKey::HeFoesDamageAvg => "HE damage to enemies",
            MetricKey::HeFriendsDamageAvg => "HE damage to teammates",
            MetricKey::UtilityOnDeathAvg => "Utility value on death",
        }
    }

    /// The format the given endpoint delivers this field in.
    pub fn format(self, endpoint: Endpoint) -> FieldFormat {
        match self {
            MetricKey::AccuracyEnemySpotted
            | MetricKey::AccuracyHead
            | MetricKey::SprayAccuracy
            | MetricKey::CounterStrafingGoodShotsRatio
            | MetricKey::CtOpeningDuelSuccessPercentage
            | MetricKey::TOpeningDuelSuccessPercentage
            | MetricKey::CtOpeningAggressionSuccessRate
            | MetricKey::TOpeningAggressionSuccessRate
            | MetricKey::TradeKillsSuccessPercentage
            | MetricKey::TradedDeathsSuccessPercentage => match endpoint {
                Endpoint::Profile => FieldFormat::Percentage,
                Endpoint::Match => FieldFormat::Decimal,
            },
            MetricKey::TradeKillOpportunitiesPerRound
            | MetricKey::FlashbangHitFoePerFlashbang
            | MetricKey::FlashbangHitFriendPerFlashbang
            | MetricKey::FlashbangLeadingToKill => FieldFormat::Decimal,
            MetricKey::Preaim
            | MetricKey::ReactionTimeMs
            | MetricKey::FlashbangHitFoeAvgDuration
            | MetricKey::FlashbangThrown
            | MetricKey::HeFoesDamageAvg
            | MetricKey::HeFriendsDamageAvg
            | MetricKey::UtilityOnDeathAvg => FieldFormat::Magnitude,
        }
    }

    /// Whether this field is percentage-scaled on the vendor side, regardless
    /// of how a given endpoint encodes it.
    pub fn is_percentage(self) -> bool {
        self.format(Endpoint::Profile) == FieldFormat::Percentage
    }

    pub fn direction(self) -> Direction {
        match self {
            MetricKey::Preaim
            | MetricKey::ReactionTimeMs
            | MetricKey::FlashbangHitFriendPerFlashbang
            | MetricKey::HeFriendsDamageAvg
            | MetricKey::UtilityOnDeathAvg => Direction::LowerIsBetter,
            _ => Direction::HigherIsBetter,
        }
    }

    /// Render a normalized value for display.
    pub fn display_value(self, normalized: f64) -> String {
        match self {
            MetricKey::ReactionTimeMs => format!("{normalized:.0}ms"),
            MetricKey::Preaim => format!("{normalized:.1}°"),
            MetricKey::FlashbangHitFoeAvgDuration => format!("{normalized:.2}s"),
            MetricKey::FlashbangThrown => format!("{normalized:.1}"),
            MetricKey::HeFoesDamageAvg
            | MetricKey::HeFriendsDamageAvg
            | MetricKey::UtilityOnDeathAvg => format!("{normalized:.1}"),
            MetricKey::TradeKillOpportunitiesPerRound
            | MetricKey::FlashbangHitFoePerFlashbang
            | MetricKey::FlashbangHitFriendPerFlashbang => format!("{normalized:.2}"),
            _ => format!("{:.1}%", normalized * 100.0),
        }
    }
}

impl Display for MetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown metric field: {0}")]
pub struct UnknownMetric(pub String);

impl FromStr for MetricKey {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricKey::ALL
            .into_iter()
            .find(|key| key.field_name() == s)
            .ok_or_else(|| UnknownMetric(s.to_string()))
    }
}
