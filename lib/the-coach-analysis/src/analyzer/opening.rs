use super::{render, AreaBuilder, Check, StatsContext};
use crate::area::{Category, ImprovementArea};
use crate::metric::MetricKey;
use crate::side::Side;
use crate::tag;

struct DuelCheck {
    side: Side,
    metric: MetricKey,
    issue: &'static str,
    weak_side_issue: &'static str,
    drill: &'static str,
    tag: &'static str,
}

const DUELS: [DuelCheck; 2] = [
    DuelCheck {
        side: Side::Ct,
        metric: MetricKey::CtOpeningDuelSuccessPercentage,
        issue: "You win %v of your CT opening duels (tier %b)",
        weak_side_issue: "Your CT side is your weak side: you win only %v of CT opening duels (tier %b)",
        drill: "On CT, hold off-angles and fall back after first contact instead of re-peeking the same angle",
        tag: tag::CT_HOLDING,
    },
    DuelCheck {
        side: Side::T,
        metric: MetricKey::TOpeningDuelSuccessPercentage,
        issue: "You win %v of your T opening duels (tier %b)",
        weak_side_issue: "Your T side is your weak side: you win only %v of T opening duels (tier %b)",
        drill: "On T, take first contact only with a flash or a teammate ready to trade",
        tag: tag::T_ENTRY,
    },
];

const AGGRESSION: [Check; 2] = [
    Check {
        metric: MetricKey::CtOpeningAggressionSuccessRate,
        issue: "Your aggressive CT plays succeed only %v of the time (tier %b); pick fewer early fights",
        drill: "Limit CT aggression to one planned push per half, with utility, and note the result",
        tag: tag::OPENING_AGGRESSION,
    },
    Check {
        metric: MetricKey::TOpeningAggressionSuccessRate,
        issue: "Your T-side entry attempts succeed only %v of the time (tier %b)",
        drill: "Entry drill: practice jiggle-peeking and wide swings on prefire maps before taking real entries",
        tag: tag::OPENING_AGGRESSION,
    },
];

/// Opening duels are rated on the relative scale. `weak_side` rephrases the
/// duel check of the matching side.
pub fn analyze_opening(ctx: &StatsContext, rating: f64, weak_side: Option<Side>) -> ImprovementArea {
    let mut area = AreaBuilder::new(Category::Opening, rating, ctx.tier);
    area.rating_severity(
        "Review your first deaths of each round in 3 demos and list the angle you were killed from",
        tag::OPENING_DUELS,
    );

    for duel in &DUELS {
        let comparison = ctx.compare(duel.metric);
        if comparison.meets {
            continue;
        }
        let template = if weak_side == Some(duel.side) {
            duel.weak_side_issue
        } else {
            duel.issue
        };
        area.flag(render(template, duel.metric, &comparison), duel.drill, duel.tag);
    }

    for check in &AGGRESSION {
        area.check(ctx, check);
    }

    area.finish()
}
