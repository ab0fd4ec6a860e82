mod common;

use the_coach_analysis::analyzer::StatsContext;
use the_coach_analysis::deep_dive::analyze_sides;
use the_coach_analysis::side::analyze_side_balance;
use the_coach_analysis::{build_report, Category, Endpoint, MetricKey, ResourceCatalog, Side};

#[test]
fn test_ct_imbalance_is_detected_and_drives_focus() {
    // Scenario B
    let table = common::benchmarks();
    let tier = common::tier_10k(&table);
    let stats = common::stats_at(tier)
        .with(MetricKey::CtOpeningDuelSuccessPercentage, 0.20)
        .with(MetricKey::TOpeningDuelSuccessPercentage, 0.50);
    let mut ratings = common::ratings(0.75, 0.75, 0.75, 0.0, 0.0);
    ratings.ct_leetify = Some(-0.05);
    ratings.t_leetify = Some(0.01);
    let profile = common::profile(ratings, stats, Endpoint::Match);

    let report = build_report(&profile, &table, &ResourceCatalog::default());
    assert!(report.side_balance.has_imbalance);
    assert_eq!(report.side_balance.weak_side, Some(Side::Ct));
    let advice = report.side_balance.advice.as_deref().unwrap();
    assert!(advice.contains("Your CT side (-5.0)"));
    assert!(advice.contains("20.0%"));

    assert!(report.focus.contains(&Category::Positioning));

    let ct_observations: Vec<&str> = report
        .side_insights
        .ct
        .insights
        .iter()
        .map(|insight| insight.observation.as_str())
        .collect();
    assert!(ct_observations.iter().any(|o| o.contains("CT opening duels")));
    assert!(report.side_insights.t.insights.is_empty());
}

#[test]
fn test_small_gap_is_not_an_imbalance() {
    let table = common::benchmarks();
    let tier = common::tier_10k(&table);
    let stats = common::stats_at(tier);
    let ctx = StatsContext::new(&stats, Endpoint::Match, tier);

    let balance = analyze_side_balance(0.01, 0.0, &ctx);
    assert!(!balance.has_imbalance);
    assert_eq!(balance.weak_side, None);
    assert_eq!(balance.advice, None);
}

#[test]
fn test_gap_at_threshold_is_an_imbalance() {
    let table = common::benchmarks();
    let tier = common::tier_10k(&table);
    let stats = common::stats_at(tier);
    let ctx = StatsContext::new(&stats, Endpoint::Match, tier);

    let balance = analyze_side_balance(0.01, 0.03, &ctx);
    assert!(balance.has_imbalance);
    assert_eq!(balance.weak_side, Some(Side::Ct));

    let balance = analyze_side_balance(0.03, 0.01, &ctx);
    assert_eq!(balance.weak_side, Some(Side::T));
}

#[test]
fn test_non_finite_side_ratings_are_treated_as_zero() {
    let table = common::benchmarks();
    let tier = common::tier_10k(&table);
    let stats = common::stats_at(tier);
    let ctx = StatsContext::new(&stats, Endpoint::Match, tier);

    let balance = analyze_side_balance(f64::NAN, 0.0, &ctx);
    assert!(!balance.has_imbalance);
}

#[test]
fn test_low_side_rating_without_failing_stats_gets_diagnostic() {
    let table = common::benchmarks();
    let tier = common::tier_10k(&table);
    let stats = common::stats_at(tier);
    let ctx = StatsContext::new(&stats, Endpoint::Match, tier);

    let insights = analyze_sides(&ctx, -0.03, 0.0);
    assert_eq!(insights.ct.insights.len(), 1);
    assert!(insights.ct.insights[0].observation.contains("-3.0"));
    assert!(insights.ct.resource_tags.contains("ct_retakes"));
    assert!(!insights.ct.drills.is_empty());
    assert!(insights.t.insights.is_empty());
}

#[test]
fn test_side_rules_use_side_specific_phrasing() {
    let table = common::benchmarks();
    let tier = common::tier_10k(&table);
    let stats = common::stats_at(tier).with(MetricKey::TradedDeathsSuccessPercentage, 0.10);
    let ctx = StatsContext::new(&stats, Endpoint::Match, tier);

    let insights = analyze_sides(&ctx, 0.0, 0.0);
    assert_eq!(insights.ct.insights.len(), 1);
    assert_eq!(insights.t.insights.len(), 1);
    assert!(insights.ct.insights[0].observation.ends_with("on defense."));
    assert!(insights.t.insights[0].observation.ends_with("on attack."));
    assert!(insights.ct.resource_tags.contains("ct_setups"));
    assert!(insights.t.resource_tags.contains("t_trading"));
}
