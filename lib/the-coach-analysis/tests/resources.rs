use std::collections::BTreeSet;
use the_coach_analysis::area::{Category, ImprovementArea};
use the_coach_analysis::deep_dive::{SideReport, SideSpecificInsights};
use the_coach_analysis::resource::{select_resources, CatalogError, ResourceKind, MAX_RESOURCES};
use the_coach_analysis::{tag, ResourceCatalog, Side};

fn area(tags: &[&'static str]) -> ImprovementArea {
    ImprovementArea {
        category: Category::Aim,
        rating: 20.0,
        benchmark: 60.0,
        issues: Vec::new(),
        drills: Vec::new(),
        resource_tags: tags.iter().copied().collect(),
    }
}

fn side(side: Side, tags: &[&'static str]) -> SideReport {
    SideReport {
        side,
        rating: 0.0,
        insights: Vec::new(),
        drills: Vec::new(),
        resource_tags: tags.iter().copied().collect::<BTreeSet<_>>(),
    }
}

fn no_sides() -> SideSpecificInsights {
    SideSpecificInsights {
        ct: side(Side::Ct, &[]),
        t: side(Side::T, &[]),
    }
}

fn catalog(json: &str) -> ResourceCatalog {
    ResourceCatalog::from_json(json).unwrap()
}

fn tags_of(selected: &[the_coach_analysis::SelectedResource]) -> Vec<&str> {
    selected.iter().map(|s| s.tag.as_str()).collect()
}

#[test]
fn test_non_repeatable_root_is_used_once() {
    let catalog = catalog(
        r#"{
            "positioning_fundamentals": [{ "type": "video", "link": "https://a.example/1" }],
            "positioning_trading": [{ "type": "video", "link": "https://a.example/2" }]
        }"#,
    );
    let focus = area(&[tag::POSITIONING_FUNDAMENTALS, tag::POSITIONING_TRADING]);

    let selected = select_resources(&[&focus], &no_sides(), &catalog);
    assert_eq!(tags_of(&selected), vec!["positioning_fundamentals"]);
}

#[test]
fn test_root_is_not_consumed_by_tag_without_resources() {
    let catalog = catalog(
        r#"{ "positioning_trading": [{ "type": "video", "link": "https://a.example/2" }] }"#,
    );
    let focus = area(&[tag::POSITIONING_FUNDAMENTALS, tag::POSITIONING_TRADING]);

    let selected = select_resources(&[&focus], &no_sides(), &catalog);
    assert_eq!(tags_of(&selected), vec!["positioning_trading"]);
}

#[test]
fn test_repeatable_roots_can_appear_more_than_once() {
    let catalog = catalog(
        r#"{
            "aim_fundamentals": [{ "type": "video", "link": "https://a.example/1" }],
            "aim_spray": [{ "type": "video", "link": "https://a.example/2" }]
        }"#,
    );
    let focus = area(&[tag::AIM_FUNDAMENTALS, tag::AIM_SPRAY]);

    let selected = select_resources(&[&focus], &no_sides(), &catalog);
    assert_eq!(tags_of(&selected), vec!["aim_fundamentals", "aim_spray"]);
}

#[test]
fn test_videos_and_websites_are_preferred() {
    let catalog = catalog(
        r#"{
            "aim_spray": [
                { "type": "workshop_map", "link": "https://a.example/map" },
                { "type": "website", "link": "https://a.example/site" }
            ]
        }"#,
    );
    let focus = area(&[tag::AIM_SPRAY]);

    let selected = select_resources(&[&focus], &no_sides(), &catalog);
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].resource.kind, ResourceKind::Website);
}

#[test]
fn test_same_link_is_never_selected_twice() {
    let catalog = catalog(
        r#"{
            "aim_fundamentals": [{ "type": "video", "link": "https://a.example/shared" }],
            "aim_spray": [
                { "type": "video", "link": "https://a.example/shared" },
                { "type": "guide", "link": "https://a.example/guide" }
            ],
            "aim_reaction": [{ "type": "video", "link": "https://a.example/shared" }]
        }"#,
    );
    let focus = area(&[tag::AIM_FUNDAMENTALS, tag::AIM_SPRAY, tag::AIM_REACTION]);

    let selected = select_resources(&[&focus], &no_sides(), &catalog);
    let links: Vec<&str> = selected.iter().map(|s| s.resource.link.as_str()).collect();
    assert_eq!(links, vec!["https://a.example/shared", "https://a.example/guide"]);
}

#[test]
fn test_selection_is_capped() {
    let mut json = String::from("{");
    for (i, tag) in tag::ALL.iter().enumerate() {
        if i > 0 {
            json.push(',');
        }
        json.push_str(&format!(
            r#""{tag}": [{{ "type": "video", "link": "https://a.example/{tag}" }}]"#
        ));
    }
    json.push('}');
    let catalog = catalog(&json);
    let focus = area(&tag::ALL);

    let selected = select_resources(&[&focus], &no_sides(), &catalog);
    assert_eq!(selected.len(), MAX_RESOURCES);
    // Broad topics carry the largest bonus
    assert_eq!(
        tags_of(&selected),
        vec![
            "aim_fundamentals",
            "clutch_fundamentals",
            "positioning_fundamentals",
            "utility_fundamentals"
        ]
    );
}

#[test]
fn test_focus_tags_outweigh_side_tags() {
    let catalog = catalog(
        r#"{
            "he_grenades": [{ "type": "video", "link": "https://a.example/he" }],
            "t_entry": [{ "type": "video", "link": "https://a.example/entry" }],
            "ct_setups": [{ "type": "video", "link": "https://a.example/setups" }]
        }"#,
    );
    let focus = area(&[tag::HE_GRENADES]);
    let sides = SideSpecificInsights {
        ct: side(Side::Ct, &[tag::CT_SETUPS]),
        t: side(Side::T, &[tag::T_ENTRY]),
    };

    let selected = select_resources(&[&focus], &sides, &catalog);
    // he_grenades 3, ct_setups 2 + 1, t_entry 2; ties keep alphabetical order
    assert_eq!(tags_of(&selected), vec!["ct_setups", "he_grenades", "t_entry"]);
}

#[test]
fn test_catalog_parsing() {
    let catalog = catalog(
        r#"{ "aim_spray": [{ "type": "podcast", "link": "https://a.example/p", "description": "Talk" }] }"#,
    );
    assert_eq!(catalog.len(), 1);
    let resource = &catalog.get("aim_spray")[0];
    assert_eq!(resource.kind, ResourceKind::Other);
    assert_eq!(resource.description.as_deref(), Some("Talk"));
    assert!(catalog.get("missing").is_empty());

    assert!(matches!(
        ResourceCatalog::from_json("not json"),
        Err(CatalogError::Parse(_))
    ));
}

#[test]
fn test_bundled_catalog_covers_every_tag() {
    let json = include_str!("../../../assets/resources.json");
    let catalog = ResourceCatalog::from_json(json).unwrap();
    for tag in tag::ALL {
        assert!(!catalog.get(tag).is_empty(), "no resource for {tag}");
    }
}
