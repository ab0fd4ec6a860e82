use crate::analyzer::{
    analyze_aim, analyze_clutch, analyze_opening, analyze_positioning, analyze_utility,
    StatsContext,
};
use crate::area::{Category, ImprovementArea};
use crate::benchmark::BenchmarkTable;
use crate::cross::{detect_cross_insights, CrossInsight};
use crate::deep_dive::{analyze_sides, SideSpecificInsights};
use crate::profile::{RawProfile, Ratings};
use crate::resource::{select_resources, ResourceCatalog, SelectedResource};
use crate::side::{analyze_side_balance, SideBalance};
use serde::Serialize;
use tracing::debug;

pub const MAX_FOCUS_AREAS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImprovementReport {
    pub player_name: String,
    pub tier: String,
    pub ratings: Ratings,
    /// All five areas, worst rating first.
    pub areas: Vec<ImprovementArea>,
    /// Categories selected for detailed display, in priority order.
    pub focus: Vec<Category>,
    pub side_balance: SideBalance,
    pub side_insights: SideSpecificInsights,
    pub cross_insights: Vec<CrossInsight>,
    pub resources: Vec<SelectedResource>,
}

impl ImprovementReport {
    pub fn area(&self, category: Category) -> Option<&ImprovementArea> {
        self.areas.iter().find(|area| area.category == category)
    }

    pub fn focus_areas(&self) -> impl Iterator<Item = &ImprovementArea> {
        self.focus.iter().filter_map(|category| self.area(*category))
    }
}

/// Analyze a profile. Deterministic: identical input yields an identical
/// report.
pub fn build_report(
    profile: &RawProfile,
    benchmarks: &BenchmarkTable,
    catalog: &ResourceCatalog,
) -> ImprovementReport {
    let tier = benchmarks.select(profile.skill_rank);
    debug!(
        "Building report for {:?} against tier {:?}",
        profile.name, tier.label
    );
    let ctx = StatsContext::new(&profile.stats, profile.endpoint, tier);
    let ratings = profile.ratings.to_display();
    let (ct_native, t_native) = (profile.ratings.ct_native(), profile.ratings.t_native());

    let side_balance = analyze_side_balance(ct_native, t_native, &ctx);
    let weak_side = side_balance.weak_side;

    let mut areas = vec![
        analyze_aim(&ctx, ratings.aim),
        analyze_positioning(&ctx, ratings.positioning, weak_side),
        analyze_utility(&ctx, ratings.utility),
        analyze_opening(&ctx, ratings.opening, weak_side),
        analyze_clutch(&ctx, ratings.clutch),
    ];
    areas.sort_by(|a, b| a.rating.total_cmp(&b.rating));

    let side_insights = analyze_sides(&ctx, ct_native, t_native);
    let cross_insights = detect_cross_insights(&ratings, &ctx);
    let focus = select_focus(&areas, &side_balance);

    let focus_areas: Vec<&ImprovementArea> = focus
        .iter()
        .filter_map(|category| areas.iter().find(|area| area.category == *category))
        .collect();
    let resources = select_resources(&focus_areas, &side_insights, catalog);
    debug!(
        "Selected focus {focus:?} and {} resources for {:?}",
        resources.len(),
        profile.name
    );

    ImprovementReport {
        player_name: profile.name.clone(),
        tier: tier.label.clone(),
        ratings,
        areas,
        focus,
        side_balance,
        side_insights,
        cross_insights,
        resources,
    }
}

/// Choose between one and [`MAX_FOCUS_AREAS`] categories. `areas` must be
/// sorted worst first.
pub fn select_focus(areas: &[ImprovementArea], side_balance: &SideBalance) -> Vec<Category> {
    let mut focus = Vec::with_capacity(MAX_FOCUS_AREAS);

    for area in areas {
        if focus.len() < MAX_FOCUS_AREAS && area.is_critical() && area.has_real_issue() {
            focus.push(area.category);
        }
    }

    if side_balance.has_imbalance
        && focus.len() < MAX_FOCUS_AREAS
        && !focus.contains(&Category::Positioning)
    {
        focus.push(Category::Positioning);
    }

    for area in areas {
        if focus.len() >= MAX_FOCUS_AREAS {
            break;
        }
        if !focus.contains(&area.category)
            && area.has_real_issue()
            && area.rating < area.category.scale().focus_threshold()
        {
            focus.push(area.category);
        }
    }

    if focus.is_empty() {
        focus.extend(areas.iter().take(MAX_FOCUS_AREAS).map(|area| area.category));
    }

    focus
}
