#![allow(dead_code)]

use the_coach_analysis::{BenchmarkTable, BenchmarkTier, Endpoint, RawProfile, RawRatings, RawStats};

pub fn benchmarks() -> BenchmarkTable {
    BenchmarkTable::default()
}

pub fn tier_10k(table: &BenchmarkTable) -> &BenchmarkTier {
    table.select(Some(10_000))
}

/// Stats sitting exactly on every benchmark of `tier`, in match format.
pub fn stats_at(tier: &BenchmarkTier) -> RawStats {
    tier.stats.iter().map(|(metric, value)| (*metric, *value)).collect()
}

pub fn ratings(aim: f64, positioning: f64, utility: f64, opening: f64, clutch: f64) -> RawRatings {
    RawRatings {
        aim: Some(aim),
        positioning: Some(positioning),
        utility: Some(utility),
        clutch: Some(clutch),
        opening: Some(opening),
        ct_leetify: Some(0.0),
        t_leetify: Some(0.0),
    }
}

pub fn profile(ratings: RawRatings, stats: RawStats, endpoint: Endpoint) -> RawProfile {
    RawProfile {
        name: "tester".to_string(),
        skill_rank: Some(10_000),
        ratings,
        stats,
        endpoint,
    }
}
