use crate::analyzer::StatsContext;
use crate::metric::MetricKey;
use crate::profile::Ratings;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossInsight {
    pub label: String,
    pub detail: String,
}

struct CrossRule {
    label: &'static str,
    detail: &'static str,
    applies: fn(&Ratings, &StatsContext) -> bool,
}

const RULES: [CrossRule; 5] = [
    CrossRule {
        label: "Good aim, poor openings",
        detail: "Your aim holds up but you lose first duels. The problem is when and where you take them, not the shot itself.",
        applies: |r, _| r.aim >= 55.0 && r.opening < -2.0,
    },
    CrossRule {
        label: "Aim over utility",
        detail: "You rely on mechanics to win fights your utility could set up. Grenades would make your aim count for more.",
        applies: |r, _| r.aim >= 65.0 && r.utility < 40.0,
    },
    CrossRule {
        label: "Utility without positioning",
        detail: "You use grenades well but end up in spots where the payoff is lost. Pair your utility with a position a teammate can support.",
        applies: |r, _| r.utility >= 60.0 && r.positioning < 45.0,
    },
    CrossRule {
        label: "Good positioning, weak clutches",
        detail: "You survive to the late round but convert few of them. Slow down and use the information your positioning earns you.",
        applies: |r, _| r.positioning >= 60.0 && r.clutch < -2.0,
    },
    CrossRule {
        label: "Isolated entries",
        detail: "You lose openings and your deaths go untraded. Entry with a teammate close enough to refrag.",
        applies: |r, ctx| r.opening < 0.0 && ctx.value(MetricKey::TradedDeathsSuccessPercentage) < 0.30,
    },
];

/// Evaluate every cross-category rule independently, in declaration order.
pub fn detect_cross_insights(ratings: &Ratings, ctx: &StatsContext) -> Vec<CrossInsight> {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(ratings, ctx))
        .map(|rule| CrossInsight {
            label: rule.label.to_string(),
            detail: rule.detail.to_string(),
        })
        .collect()
}
