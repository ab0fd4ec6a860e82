mod common;

use std::collections::BTreeMap;
use the_coach_analysis::benchmark::{BenchmarkTier, RatingBenchmarks};
use the_coach_analysis::compare::{compare, compare_field, meets, Band};
use the_coach_analysis::metric::{Direction, Endpoint, MetricKey};

fn empty_tier() -> BenchmarkTier {
    BenchmarkTier {
        min_rank: 0,
        label: "empty".to_string(),
        ratings: RatingBenchmarks {
            aim: 50.0,
            positioning: 50.0,
            utility: 50.0,
            opening: 0.0,
            clutch: 0.0,
        },
        stats: BTreeMap::new(),
    }
}

#[test]
fn test_missing_benchmark_fails_open() {
    let tier = empty_tier();
    for metric in MetricKey::ALL {
        for value in [0.0, 1.0, 1000.0] {
            let comparison = compare(value, metric, Endpoint::Profile, &tier);
            assert!(comparison.meets);
            assert_eq!(comparison.benchmark, None);
        }
    }
}

#[test]
fn test_unknown_field_fails_open() {
    let table = common::benchmarks();
    let tier = common::tier_10k(&table);
    let comparison = compare_field(0.0, "brand_new_metric", Endpoint::Profile, tier);
    assert!(comparison.meets);
    assert_eq!(comparison.delta_pct, 0.0);
}

#[test]
fn test_exact_benchmark_meets_in_both_directions() {
    let table = common::benchmarks();
    let tier = common::tier_10k(&table);
    for metric in MetricKey::ALL {
        let benchmark = tier.stat(metric).unwrap();
        let comparison = compare(benchmark, metric, Endpoint::Match, tier);
        assert!(comparison.meets, "{metric} at benchmark should meet it");
        assert_eq!(comparison.delta_pct, 0.0);
    }
}

#[test]
fn test_lower_is_better_delta_is_positive_when_lower() {
    let table = common::benchmarks();
    let tier = common::tier_10k(&table);

    // 10k benchmark is 580ms
    let fast = compare(464.0, MetricKey::ReactionTimeMs, Endpoint::Profile, tier);
    assert!(fast.meets);
    assert!((fast.delta_pct - 20.0).abs() < 1e-9);
    assert_eq!(fast.band(), Band::Good);

    let slow = compare(754.0, MetricKey::ReactionTimeMs, Endpoint::Profile, tier);
    assert!(!slow.meets);
    assert!((slow.delta_pct + 30.0).abs() < 1e-9);
    assert_eq!(slow.band(), Band::Poor);
}

#[test]
fn test_profile_percentages_are_normalized_before_comparing() {
    let table = common::benchmarks();
    let tier = common::tier_10k(&table);

    // 10k head accuracy benchmark is 0.19
    assert!(meets(25.0, MetricKey::AccuracyHead, Endpoint::Profile, tier));
    assert!(!meets(15.0, MetricKey::AccuracyHead, Endpoint::Profile, tier));
    assert!(meets(0.25, MetricKey::AccuracyHead, Endpoint::Match, tier));
    assert!(!meets(0.15, MetricKey::AccuracyHead, Endpoint::Match, tier));
}

#[test]
fn test_bands() {
    assert_eq!(Band::from_delta(30.0), Band::Excellent);
    assert_eq!(Band::from_delta(29.9), Band::Good);
    assert_eq!(Band::from_delta(10.0), Band::Good);
    assert_eq!(Band::from_delta(-5.0), Band::Average);
    assert_eq!(Band::from_delta(-5.1), Band::BelowAverage);
    assert_eq!(Band::from_delta(-20.0), Band::BelowAverage);
    assert_eq!(Band::from_delta(-20.1), Band::Poor);
}

#[test]
fn test_checks_are_monotonic() {
    let table = common::benchmarks();
    for tier in table.tiers() {
        for metric in MetricKey::ALL {
            let benchmark = tier.stat(metric).unwrap();
            let values: Vec<f64> = (0..=40).map(|i| benchmark * i as f64 / 20.0).collect();
            let results: Vec<bool> = values
                .iter()
                .map(|value| meets(*value, metric, Endpoint::Match, tier))
                .collect();
            let ordered: Vec<bool> = match metric.direction() {
                Direction::HigherIsBetter => results.clone(),
                Direction::LowerIsBetter => results.iter().rev().copied().collect(),
            };
            // Once passing, a better value never fails
            let first_pass = ordered.iter().position(|passed| *passed).unwrap();
            assert!(ordered[first_pass..].iter().all(|passed| *passed), "{metric}");
        }
    }
}
