use crate::area::Category;
use crate::metric::MetricKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Premier rating assumed when a player has no rank.
pub const DEFAULT_RANK: u32 = 10_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BenchmarkError {
    #[error("benchmark table has no tiers")]
    Empty,
    #[error("more than one tier uses threshold {0}")]
    DuplicateThreshold(u32),
}

/// Reference category ratings on their display scales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingBenchmarks {
    pub aim: f64,
    pub positioning: f64,
    pub utility: f64,
    pub opening: f64,
    pub clutch: f64,
}

/// A skill bracket and its reference values. Stat values are in the
/// canonical scale produced by the normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkTier {
    pub min_rank: u32,
    pub label: String,
    pub ratings: RatingBenchmarks,
    #[serde(default)]
    pub stats: BTreeMap<MetricKey, f64>,
}

impl BenchmarkTier {
    pub fn stat(&self, metric: MetricKey) -> Option<f64> {
        self.stats.get(&metric).copied()
    }

    pub fn rating(&self, category: Category) -> f64 {
        match category {
            Category::Aim => self.ratings.aim,
            Category::Positioning => self.ratings.positioning,
            Category::Utility => self.ratings.utility,
            Category::Opening => self.ratings.opening,
            Category::Clutch => self.ratings.clutch,
        }
    }
}

#[derive(Debug, Deserialize)]
struct BenchmarkTableConfig {
    tiers: Vec<BenchmarkTier>,
    #[serde(default = "default_rank")]
    default_rank: u32,
}

fn default_rank() -> u32 {
    DEFAULT_RANK
}

/// Tiers ordered by threshold. A rank selects the tier with the greatest
/// threshold not above it, or the lowest tier when below every threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BenchmarkTableConfig")]
pub struct BenchmarkTable {
    tiers: Vec<BenchmarkTier>,
    default_rank: u32,
}

impl TryFrom<BenchmarkTableConfig> for BenchmarkTable {
    type Error = BenchmarkError;

    fn try_from(value: BenchmarkTableConfig) -> Result<Self, Self::Error> {
        BenchmarkTable::new(value.tiers, value.default_rank)
    }
}

impl BenchmarkTable {
    pub fn new(mut tiers: Vec<BenchmarkTier>, default_rank: u32) -> Result<Self, BenchmarkError> {
        if tiers.is_empty() {
            return Err(BenchmarkError::Empty);
        }
        tiers.sort_by_key(|tier| tier.min_rank);
        if let Some(pair) = tiers.windows(2).find(|w| w[0].min_rank == w[1].min_rank) {
            return Err(BenchmarkError::DuplicateThreshold(pair[0].min_rank));
        }
        Ok(Self {
            tiers,
            default_rank,
        })
    }

    pub fn tiers(&self) -> &[BenchmarkTier] {
        &self.tiers
    }

    pub fn select(&self, rank: Option<u32>) -> &BenchmarkTier {
        let rank = rank.unwrap_or(self.default_rank);
        self.tiers
            .iter()
            .rev()
            .find(|tier| tier.min_rank <= rank)
            .unwrap_or(&self.tiers[0])
    }
}

impl Default for BenchmarkTable {
    fn default() -> Self {
        Self {
            tiers: vec![
                builtin_tier(5_000, "Premier 5k+", [45.0, 45.0, 40.0, -3.0, -3.0], &TIER_5K),
                builtin_tier(10_000, "Premier 10k+", [60.0, 55.0, 50.0, 0.0, 0.0], &TIER_10K),
                builtin_tier(15_000, "Premier 15k+", [72.0, 65.0, 62.0, 2.0, 2.0], &TIER_15K),
            ],
            default_rank: DEFAULT_RANK,
        }
    }
}

fn builtin_tier(
    min_rank: u32,
    label: &str,
    [aim, positioning, utility, opening, clutch]: [f64; 5],
    stats: &[(MetricKey, f64)],
) -> BenchmarkTier {
    BenchmarkTier {
        min_rank,
        label: label.to_string(),
        ratings: RatingBenchmarks {
            aim,
            positioning,
            utility,
            opening,
            clutch,
        },
        stats: stats.iter().copied().collect(),
    }
}

const TIER_5K: [(MetricKey, f64); 21] = [
    (MetricKey::AccuracyEnemySpotted, 0.33),
    (MetricKey::AccuracyHead, 0.16),
    (MetricKey::SprayAccuracy, 0.30),
    (MetricKey::CounterStrafingGoodShotsRatio, 0.60),
    (MetricKey::Preaim, 11.0),
    (MetricKey::ReactionTimeMs, 650.0),
    (MetricKey::CtOpeningDuelSuccessPercentage, 0.44),
    (MetricKey::TOpeningDuelSuccessPercentage, 0.42),
    (MetricKey::CtOpeningAggressionSuccessRate, 0.38),
    (MetricKey::TOpeningAggressionSuccessRate, 0.40),
    (MetricKey::TradeKillsSuccessPercentage, 0.30),
    (MetricKey::TradedDeathsSuccessPercentage, 0.28),
    (MetricKey::TradeKillOpportunitiesPerRound, 0.14),
    (MetricKey::FlashbangHitFoePerFlashbang, 0.45),
    (MetricKey::FlashbangHitFoeAvgDuration, 2.4),
    (MetricKey::FlashbangHitFriendPerFlashbang, 0.40),
    (MetricKey::FlashbangLeadingToKill, 0.05),
    (MetricKey::FlashbangThrown, 4.0),
    (MetricKey::HeFoesDamageAvg, 4.5),
    (MetricKey::HeFriendsDamageAvg, 1.5),
    (MetricKey::UtilityOnDeathAvg, 300.0),
];

const TIER_10K: [(MetricKey, f64); 21] = [
    (MetricKey::AccuracyEnemySpotted, 0.38),
    (MetricKey::AccuracyHead, 0.19),
    (MetricKey::SprayAccuracy, 0.34),
    (MetricKey::CounterStrafingGoodShotsRatio, 0.70),
    (MetricKey::Preaim, 9.0),
    (MetricKey::ReactionTimeMs, 580.0),
    (MetricKey::CtOpeningDuelSuccessPercentage, 0.48),
    (MetricKey::TOpeningDuelSuccessPercentage, 0.46),
    (MetricKey::CtOpeningAggressionSuccessRate, 0.42),
    (MetricKey::TOpeningAggressionSuccessRate, 0.44),
    (MetricKey::TradeKillsSuccessPercentage, 0.36),
    (MetricKey::TradedDeathsSuccessPercentage, 0.34),
    (MetricKey::TradeKillOpportunitiesPerRound, 0.18),
    (MetricKey::FlashbangHitFoePerFlashbang, 0.60),
    (MetricKey::FlashbangHitFoeAvgDuration, 2.8),
    (MetricKey::FlashbangHitFriendPerFlashbang, 0.32),
    (MetricKey::FlashbangLeadingToKill, 0.07),
    (MetricKey::FlashbangThrown, 5.5),
    (MetricKey::HeFoesDamageAvg, 6.0),
    (MetricKey::HeFriendsDamageAvg, 1.0),
    (MetricKey::UtilityOnDeathAvg, 250.0),
];

const TIER_15K: [(MetricKey, f64); 21] = [
    (MetricKey::AccuracyEnemySpotted, 0.43),
    (MetricKey::AccuracyHead, 0.22),
    (MetricKey::SprayAccuracy, 0.38),
    (MetricKey::CounterStrafingGoodShotsRatio, 0.78),
    (MetricKey::Preaim, 7.5),
    (MetricKey::ReactionTimeMs, 520.0),
    (MetricKey::CtOpeningDuelSuccessPercentage, 0.52),
    (MetricKey::TOpeningDuelSuccessPercentage, 0.50),
    (MetricKey::CtOpeningAggressionSuccessRate, 0.46),
    (MetricKey::TOpeningAggressionSuccessRate, 0.48),
    (MetricKey::TradeKillsSuccessPercentage, 0.42),
    (MetricKey::TradedDeathsSuccessPercentage, 0.40),
    (MetricKey::TradeKillOpportunitiesPerRound, 0.22),
    (MetricKey::FlashbangHitFoePerFlashbang, 0.75),
    (MetricKey::FlashbangHitFoeAvgDuration, 3.1),
    (MetricKey::FlashbangHitFriendPerFlashbang, 0.25),
    (MetricKey::FlashbangLeadingToKill, 0.09),
    (MetricKey::FlashbangThrown, 7.0),
    (MetricKey::HeFoesDamageAvg, 7.5),
    (MetricKey::HeFriendsDamageAvg, 0.7),
    (MetricKey::UtilityOnDeathAvg, 200.0),
];
