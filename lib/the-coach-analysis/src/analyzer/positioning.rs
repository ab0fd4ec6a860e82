use super::{render, AreaBuilder, StatsContext};
use crate::area::{Category, ImprovementArea};
use crate::metric::MetricKey;
use crate::side::Side;
use crate::tag;

struct PositioningCheck {
    metric: MetricKey,
    issue: &'static str,
    /// `%s` is replaced by the weak side.
    side_issue: &'static str,
    drill: &'static str,
    tag: &'static str,
}

const CHECKS: [PositioningCheck; 3] = [
    PositioningCheck {
        metric: MetricKey::TradedDeathsSuccessPercentage,
        issue: "Only %v of your deaths get traded (tier %b); you die where teammates cannot refrag",
        side_issue: "Only %v of your deaths get traded (tier %b), and your %s side is where it hurts most; you die out of reach of your teammates",
        drill: "Review 5 deaths per demo: was a teammate able to trade you? If not, move closer or wait for them",
        tag: tag::POSITIONING_TRADING,
    },
    PositioningCheck {
        metric: MetricKey::TradeKillOpportunitiesPerRound,
        issue: "You get %v trade opportunities per round (tier %b); you play too far from your team",
        side_issue: "You get %v trade opportunities per round (tier %b); on your %s side especially you play too isolated",
        drill: "Play the next 5 matches within one rotation of a teammate and count how many trades you get",
        tag: tag::POSITIONING_SPACING,
    },
    PositioningCheck {
        metric: MetricKey::TradeKillsSuccessPercentage,
        issue: "You convert only %v of your trade opportunities (tier %b)",
        side_issue: "You convert only %v of your trade opportunities (tier %b), most visibly on your %s side",
        drill: "Trade drill: in retake servers, swing immediately after your teammate dies instead of re-peeking alone",
        tag: tag::POSITIONING_TRADING,
    },
];

/// `weak_side` rephrases failing checks to attribute them to that side.
pub fn analyze_positioning(
    ctx: &StatsContext,
    rating: f64,
    weak_side: Option<Side>,
) -> ImprovementArea {
    let mut area = AreaBuilder::new(Category::Positioning, rating, ctx.tier);
    area.rating_severity(
        "Watch one demo per week from your own perspective and pause at every death to ask where you should have stood",
        tag::POSITIONING_FUNDAMENTALS,
    );

    for check in &CHECKS {
        let comparison = ctx.compare(check.metric);
        if comparison.meets {
            continue;
        }
        let issue = match weak_side {
            Some(side) => render(check.side_issue, check.metric, &comparison)
                .replace("%s", side.label()),
            None => render(check.issue, check.metric, &comparison),
        };
        area.flag(issue, check.drill, check.tag);
    }

    area.finish()
}
