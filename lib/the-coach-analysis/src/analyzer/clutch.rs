use super::{AreaBuilder, Check, StatsContext};
use crate::area::{Category, ImprovementArea};
use crate::metric::MetricKey;
use crate::tag;

const CHECKS: [Check; 1] = [Check {
    metric: MetricKey::UtilityOnDeathAvg,
    issue: "You die holding %v of utility on average (tier %b); late-round utility wins clutches",
    drill: "In every clutch, use your remaining grenades to isolate duels before taking them",
    tag: tag::CLUTCH_FUNDAMENTALS,
}];

pub fn analyze_clutch(ctx: &StatsContext, rating: f64) -> ImprovementArea {
    let mut area = AreaBuilder::new(Category::Clutch, rating, ctx.tier);
    area.rating_severity(
        "Clutch review: for each lost clutch, write down the timing and which duel you took first",
        tag::CLUTCH_MINDSET,
    );

    for check in &CHECKS {
        area.check(ctx, check);
    }

    area.finish()
}
