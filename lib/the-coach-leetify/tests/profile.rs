use the_coach_analysis::{build_report, BenchmarkTable, Endpoint, MetricKey, ResourceCatalog};
use the_coach_leetify::Profile;

const FIXTURE: &str = include_str!("fixtures/profile.json");

fn fixture() -> Profile {
    serde_json::from_str(FIXTURE).unwrap()
}

#[test]
fn test_parse_profile_fixture() {
    let profile = fixture();
    assert_eq!(profile.name, "s1mpleton");
    assert_eq!(profile.premier_rank(), Some(14_820));
    assert_eq!(profile.total_matches, Some(812));
    assert_eq!(profile.recent_matches.len(), 3);

    let stats = profile.stats.as_ref().unwrap();
    assert_eq!(stats.get(MetricKey::AccuracyHead), Some(21.7));
    // Numeric strings are accepted
    assert_eq!(stats.get(MetricKey::TradeKillsSuccessPercentage), Some(38.2));
}

#[test]
fn test_recent_match_stats_are_flattened() {
    let profile = fixture();
    let newest = &profile.recent_matches[0];
    assert_eq!(newest.map_name.as_deref(), Some("de_ancient"));
    assert_eq!(newest.stats.get(MetricKey::AccuracyHead), Some(0.26));
    assert_eq!(newest.score_line().as_deref(), Some("13:8"));

    let older = &profile.recent_matches[1];
    assert_eq!(older.stats.get(MetricKey::SprayAccuracy), None);

    let oldest = &profile.recent_matches[2];
    assert_eq!(oldest.rank, None);
    assert_eq!(oldest.stats.get(MetricKey::Preaim), None);
}

#[test]
fn test_raw_profile_requires_rating_and_stats() {
    let mut profile = fixture();
    let raw = profile.raw_profile().unwrap();
    assert_eq!(raw.endpoint, Endpoint::Profile);
    assert_eq!(raw.skill_rank, Some(14_820));

    profile.rating = None;
    assert!(profile.raw_profile().is_none());

    let mut profile = fixture();
    profile.stats = None;
    assert!(profile.raw_profile().is_none());
}

#[test]
fn test_profile_feeds_analysis() {
    let raw = fixture().raw_profile().unwrap();
    let report = build_report(&raw, &BenchmarkTable::default(), &ResourceCatalog::default());
    assert_eq!(report.tier, "Premier 10k+");
    assert_eq!(report.areas.len(), 5);
    assert!(!report.focus.is_empty());
    // 45.1% CT opening duels read as 0.451 against the tier
    assert!(report
        .side_insights
        .ct
        .insights
        .iter()
        .any(|insight| insight.observation.contains("45.1%")));
}

#[test]
fn test_matches_since_last_seen() {
    let profile = fixture();

    let ids = |last_seen: Option<&str>| -> Vec<String> {
        profile
            .matches_since(last_seen)
            .into_iter()
            .map(|m| m.id.clone())
            .collect()
    };

    assert_eq!(ids(None), vec!["b7d6a3b0-0003"]);
    assert_eq!(
        ids(Some("b7d6a3b0-0001")),
        vec!["b7d6a3b0-0002", "b7d6a3b0-0003"]
    );
    assert!(ids(Some("b7d6a3b0-0003")).is_empty());
    // Seen match rolled out of the recent list
    assert_eq!(ids(Some("unknown")), vec!["b7d6a3b0-0003"]);
}

#[test]
fn test_missing_blocks_parse() {
    let profile: Profile = serde_json::from_str(
        r#"{ "name": "new player", "steam64_id": "76561198000000002" }"#,
    )
    .unwrap();
    assert!(profile.recent_matches.is_empty());
    assert!(profile.raw_profile().is_none());
    assert!(profile.matches_since(None).is_empty());
}
