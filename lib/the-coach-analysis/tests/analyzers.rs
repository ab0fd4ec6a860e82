mod common;

use the_coach_analysis::analyzer::{
    analyze_aim, analyze_clutch, analyze_opening, analyze_positioning, analyze_utility,
    StatsContext,
};
use the_coach_analysis::area::{Category, IssueKind, Standing};
use the_coach_analysis::metric::{Endpoint, MetricKey};
use the_coach_analysis::{build_report, RawStats, ResourceCatalog, Side};

#[test]
fn test_stats_at_benchmark_produce_no_weaknesses() {
    // Scenario A: ratings at 0.75 and every stat exactly on the 10k benchmark
    let table = common::benchmarks();
    let tier = common::tier_10k(&table);
    let stats = common::stats_at(tier);
    let profile = common::profile(
        common::ratings(0.75, 0.75, 0.75, 0.75, 0.75),
        stats,
        Endpoint::Match,
    );

    let report = build_report(&profile, &table, &ResourceCatalog::default());
    for area in &report.areas {
        assert!(!area.has_real_issue(), "{:?}: {:?}", area.category, area.issues);
        assert!(area.drills.is_empty());
    }
}

#[test]
fn test_profile_endpoint_stats_at_benchmark_produce_no_weaknesses() {
    let table = common::benchmarks();
    let tier = common::tier_10k(&table);
    let stats: RawStats = [
        (MetricKey::AccuracyEnemySpotted, 38.0),
        (MetricKey::AccuracyHead, 19.0),
        (MetricKey::SprayAccuracy, 34.0),
        (MetricKey::CounterStrafingGoodShotsRatio, 70.0),
        (MetricKey::Preaim, 9.0),
        (MetricKey::ReactionTimeMs, 580.0),
        (MetricKey::CtOpeningDuelSuccessPercentage, 48.0),
        (MetricKey::TOpeningDuelSuccessPercentage, 46.0),
        (MetricKey::CtOpeningAggressionSuccessRate, 42.0),
        (MetricKey::TOpeningAggressionSuccessRate, 44.0),
        (MetricKey::TradeKillsSuccessPercentage, 36.0),
        (MetricKey::TradedDeathsSuccessPercentage, 34.0),
        (MetricKey::TradeKillOpportunitiesPerRound, 0.18),
        (MetricKey::FlashbangHitFoePerFlashbang, 0.60),
        (MetricKey::FlashbangHitFoeAvgDuration, 2.8),
        (MetricKey::FlashbangHitFriendPerFlashbang, 0.32),
        (MetricKey::FlashbangLeadingToKill, 0.07),
        (MetricKey::FlashbangThrown, 5.5),
        (MetricKey::HeFoesDamageAvg, 6.0),
        (MetricKey::HeFriendsDamageAvg, 1.0),
        (MetricKey::UtilityOnDeathAvg, 250.0),
    ]
    .into_iter()
    .collect();

    let ctx = StatsContext::new(&stats, Endpoint::Profile, tier);
    for metric in MetricKey::ALL {
        assert!(ctx.meets(metric), "{metric}");
    }
}

#[test]
fn test_everything_excellent_emits_one_excellent_note_per_area() {
    // Scenario C
    let table = common::benchmarks();
    let tier = common::tier_10k(&table);
    let stats = common::stats_at(tier);
    let ctx = StatsContext::new(&stats, Endpoint::Match, tier);

    let areas = [
        analyze_aim(&ctx, 80.0),
        analyze_positioning(&ctx, 75.0, None),
        analyze_utility(&ctx, 70.0),
        analyze_opening(&ctx, 20.0, None),
        analyze_clutch(&ctx, 20.0),
    ];
    for area in areas {
        assert_eq!(area.issues.len(), 1, "{:?}", area.category);
        assert_eq!(area.issues[0].kind, IssueKind::PerformingWell(Standing::Excellent));
        assert!(area.issues[0].text.contains("excellent"));
        assert!(area.drills.is_empty());
        assert!(area.resource_tags.is_empty());
    }
}

#[test]
fn test_standing_depends_on_distance_above_tier() {
    let table = common::benchmarks();
    let tier = common::tier_10k(&table);
    let stats = common::stats_at(tier);
    let ctx = StatsContext::new(&stats, Endpoint::Match, tier);

    // Aim benchmark is 60
    let good = analyze_aim(&ctx, 66.0);
    assert_eq!(good.issues[0].kind, IssueKind::PerformingWell(Standing::Good));
    assert!(good.issues[0].text.contains("good"));

    let solid = analyze_aim(&ctx, 61.0);
    assert_eq!(solid.issues[0].kind, IssueKind::PerformingWell(Standing::Solid));
    assert!(solid.issues[0].text.contains("solid"));
}

#[test]
fn test_extremely_low_clutch_uses_extreme_branch() {
    // Scenario D
    let table = common::benchmarks();
    let tier = common::tier_10k(&table);
    let stats = common::stats_at(tier);
    let ratings = common::ratings(0.75, 0.75, 0.75, 0.0, -0.15);
    let profile = common::profile(ratings, stats, Endpoint::Match);

    let report = build_report(&profile, &table, &ResourceCatalog::default());
    let clutch = report.area(Category::Clutch).unwrap();
    let weaknesses: Vec<_> = clutch.weaknesses().collect();
    assert_eq!(weaknesses.len(), 1);
    assert!(weaknesses[0].text.contains("extremely low"));
    assert!(!weaknesses[0].text.contains("very low"));
}

#[test]
fn test_relative_severity_branches() {
    let table = common::benchmarks();
    let tier = common::tier_10k(&table);
    let stats = common::stats_at(tier);
    let ctx = StatsContext::new(&stats, Endpoint::Match, tier);

    let very_low = analyze_opening(&ctx, -7.0, None);
    assert!(very_low.issues[0].text.contains("very low"));

    let below = analyze_opening(&ctx, -1.0, None);
    assert!(below.issues[0].text.contains("below the tier average"));

    let fine = analyze_opening(&ctx, 0.0, None);
    assert!(!fine.has_real_issue());
}

#[test]
fn test_head_accuracy_message_depends_on_raw_accuracy() {
    let table = common::benchmarks();
    let tier = common::tier_10k(&table);

    // Accurate but body-aiming
    let stats = common::stats_at(tier).with(MetricKey::AccuracyHead, 0.10);
    let ctx = StatsContext::new(&stats, Endpoint::Match, tier);
    let area = analyze_aim(&ctx, 70.0);
    let texts: Vec<&str> = area.weaknesses().map(|issue| issue.text.as_str()).collect();
    assert_eq!(texts.len(), 1);
    assert!(texts[0].contains("mostly on the body"));

    // Inaccurate overall
    let stats = common::stats_at(tier)
        .with(MetricKey::AccuracyHead, 0.10)
        .with(MetricKey::AccuracyEnemySpotted, 0.20);
    let ctx = StatsContext::new(&stats, Endpoint::Match, tier);
    let area = analyze_aim(&ctx, 70.0);
    let texts: Vec<&str> = area.weaknesses().map(|issue| issue.text.as_str()).collect();
    assert_eq!(texts.len(), 2);
    assert!(texts[1].contains("fix overall accuracy first"));
    assert!(area.resource_tags.contains("aim_fundamentals"));
}

#[test]
fn test_weak_side_hint_rephrases_matching_duel() {
    let table = common::benchmarks();
    let tier = common::tier_10k(&table);
    let stats = common::stats_at(tier).with(MetricKey::CtOpeningDuelSuccessPercentage, 0.30);
    let ctx = StatsContext::new(&stats, Endpoint::Match, tier);

    let hinted = analyze_opening(&ctx, 1.0, Some(Side::Ct));
    assert!(hinted.issues[0].text.starts_with("Your CT side is your weak side"));

    let other_side = analyze_opening(&ctx, 1.0, Some(Side::T));
    assert!(other_side.issues[0].text.starts_with("You win 30.0% of your CT opening duels"));
}

#[test]
fn test_weak_side_hint_attributes_positioning_issues() {
    let table = common::benchmarks();
    let tier = common::tier_10k(&table);
    let stats = common::stats_at(tier).with(MetricKey::TradedDeathsSuccessPercentage, 0.20);
    let ctx = StatsContext::new(&stats, Endpoint::Match, tier);

    let plain = analyze_positioning(&ctx, 60.0, None);
    assert!(!plain.issues[0].text.contains("side"));

    let hinted = analyze_positioning(&ctx, 60.0, Some(Side::T));
    assert!(hinted.issues[0].text.contains("your T side"));
}

#[test]
fn test_utility_flags_lower_is_better_metrics() {
    let table = common::benchmarks();
    let tier = common::tier_10k(&table);
    let stats = common::stats_at(tier)
        .with(MetricKey::FlashbangHitFriendPerFlashbang, 0.50)
        .with(MetricKey::HeFriendsDamageAvg, 4.0);
    let ctx = StatsContext::new(&stats, Endpoint::Match, tier);

    let area = analyze_utility(&ctx, 55.0);
    assert_eq!(area.weaknesses().count(), 2);
    assert!(area.resource_tags.contains("flash_team"));
    assert!(area.resource_tags.contains("he_grenades"));
}

#[test]
fn test_missing_stats_read_as_worst_case_without_panicking() {
    let table = common::benchmarks();
    let tier = common::tier_10k(&table);
    let stats = RawStats::default();
    let ctx = StatsContext::new(&stats, Endpoint::Profile, tier);

    let aim = analyze_aim(&ctx, 0.0);
    assert!(aim.has_real_issue());
    assert!(aim.is_critical());
}
