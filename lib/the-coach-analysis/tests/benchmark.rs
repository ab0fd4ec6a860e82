mod common;

use the_coach_analysis::benchmark::{BenchmarkError, BenchmarkTable, DEFAULT_RANK};
use the_coach_analysis::metric::MetricKey;

#[test]
fn test_tier_selection_uses_greatest_threshold_at_or_below_rank() {
    let table = BenchmarkTable::default();
    assert_eq!(table.select(Some(10_000)).min_rank, 10_000);
    assert_eq!(table.select(Some(14_999)).min_rank, 10_000);
    assert_eq!(table.select(Some(15_000)).min_rank, 15_000);
    assert_eq!(table.select(Some(28_000)).min_rank, 15_000);
    assert_eq!(table.select(Some(5_000)).min_rank, 5_000);
}

#[test]
fn test_rank_below_every_threshold_selects_lowest_tier() {
    let table = BenchmarkTable::default();
    assert_eq!(table.select(Some(1_200)).min_rank, 5_000);
    assert_eq!(table.select(Some(0)).min_rank, 5_000);
}

#[test]
fn test_missing_rank_selects_default_tier() {
    let table = BenchmarkTable::default();
    assert_eq!(DEFAULT_RANK, 10_000);
    assert_eq!(table.select(None).min_rank, 10_000);
}

#[test]
fn test_builtin_tiers_cover_every_metric() {
    let table = BenchmarkTable::default();
    for tier in table.tiers() {
        for metric in MetricKey::ALL {
            assert!(tier.stat(metric).is_some(), "{} lacks {metric}", tier.label);
        }
    }
}

#[test]
fn test_tiers_are_sorted_on_construction() {
    let mut tiers = BenchmarkTable::default().tiers().to_vec();
    tiers.reverse();
    let table = BenchmarkTable::new(tiers, DEFAULT_RANK).unwrap();
    let thresholds: Vec<u32> = table.tiers().iter().map(|tier| tier.min_rank).collect();
    assert_eq!(thresholds, vec![5_000, 10_000, 15_000]);
}

#[test]
fn test_invalid_tables_are_rejected() {
    assert_eq!(
        BenchmarkTable::new(Vec::new(), DEFAULT_RANK),
        Err(BenchmarkError::Empty)
    );

    let tier = BenchmarkTable::default().tiers()[0].clone();
    assert_eq!(
        BenchmarkTable::new(vec![tier.clone(), tier], DEFAULT_RANK),
        Err(BenchmarkError::DuplicateThreshold(5_000))
    );
}

#[test]
fn test_table_deserializes_with_partial_stats() {
    let json = r#"{
        "tiers": [
            {
                "min_rank": 0,
                "label": "Everyone",
                "ratings": { "aim": 50, "positioning": 50, "utility": 50, "opening": 0, "clutch": 0 },
                "stats": { "accuracy_head": 0.2, "reaction_time_ms": 600 }
            }
        ]
    }"#;
    let table: BenchmarkTable = serde_json::from_str(json).unwrap();
    let tier = table.select(None);
    assert_eq!(tier.label, "Everyone");
    assert_eq!(tier.stat(MetricKey::AccuracyHead), Some(0.2));
    assert_eq!(tier.stat(MetricKey::SprayAccuracy), None);
}
