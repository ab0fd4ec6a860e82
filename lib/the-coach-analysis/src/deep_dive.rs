use crate::analyzer::{render, StatsContext};
use crate::metric::MetricKey;
use crate::normalize::relative_rating;
use crate::side::Side;
use crate::tag;
use serde::Serialize;
use std::collections::BTreeSet;

/// Side rating (display scale) below which a side with no failing metric
/// still gets a diagnostic insight.
pub const UNEXPLAINED_GAP_THRESHOLD: f64 = -2.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SideInsight {
    pub observation: String,
    pub cause: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SideReport {
    pub side: Side,
    /// Relative side rating on the display scale.
    pub rating: f64,
    pub insights: Vec<SideInsight>,
    pub drills: Vec<String>,
    pub resource_tags: BTreeSet<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SideSpecificInsights {
    pub ct: SideReport,
    pub t: SideReport,
}

impl SideSpecificInsights {
    pub fn sides(&self) -> [&SideReport; 2] {
        [&self.ct, &self.t]
    }
}

struct SideText {
    observation: &'static str,
    cause: &'static str,
    drills: &'static [&'static str],
    tag: &'static str,
}

/// A threshold check with CT and T phrasing, indexed `[ct, t]`.
struct SideRule {
    metrics: [MetricKey; 2],
    text: [SideText; 2],
}

const fn both(metric: MetricKey) -> [MetricKey; 2] {
    [metric, metric]
}

const RULES: [SideRule; 14] = [
    SideRule {
        metrics: [
            MetricKey::CtOpeningDuelSuccessPercentage,
            MetricKey::TOpeningDuelSuccessPercentage,
        ],
        text: [
            SideText {
                observation: "You win %v of CT opening duels (tier %b).",
                cause: "You are likely peeking or holding the same angle every round and getting pre-aimed.",
                drills: &["Rotate between two or three angles per position and never re-peek after first contact"],
                tag: tag::CT_HOLDING,
            },
            SideText {
                observation: "You win %v of T opening duels (tier %b).",
                cause: "Entries without a flash or a trade partner turn into coin flips against a prepared defender.",
                drills: &[
                    "Only take first contact with a flash or a teammate ready to trade",
                    "Prefire every common CT angle on the map before queueing",
                ],
                tag: tag::T_ENTRY,
            },
        ],
    },
    SideRule {
        metrics: [
            MetricKey::CtOpeningAggressionSuccessRate,
            MetricKey::TOpeningAggressionSuccessRate,
        ],
        text: [
            SideText {
                observation: "Your aggressive CT plays succeed only %v of the time (tier %b).",
                cause: "Early CT pushes without utility give free picks to T-side lurkers.",
                drills: &["Plan one CT push per half with a teammate's flash, skip the rest"],
                tag: tag::CT_SETUPS,
            },
            SideText {
                observation: "Your T-side aggression succeeds only %v of the time (tier %b).",
                cause: "You take map control fights alone instead of with the team's default.",
                drills: &["Agree on a default with your team and take space together"],
                tag: tag::T_EXECUTES,
            },
        ],
    },
    SideRule {
        metrics: both(MetricKey::FlashbangHitFriendPerFlashbang),
        text: [
            SideText {
                observation: "You flash %v teammates per flash (tier %b), costly during CT retakes.",
                cause: "Retake flashes thrown without calling them blind the teammates swinging with you.",
                drills: &["Call every retake flash before it leaves your hand"],
                tag: tag::CT_RETAKES,
            },
            SideText {
                observation: "You flash %v teammates per flash (tier %b), costly during T executes.",
                cause: "Flashes thrown over the entry fragger pop in their face instead of the defender's.",
                drills: &["Learn the execute flashes of your team's main hits so they pop behind the entry"],
                tag: tag::FLASH_TEAM,
            },
        ],
    },
    SideRule {
        metrics: both(MetricKey::HeFriendsDamageAvg),
        text: [
            SideText {
                observation: "Your HE grenades hit teammates for %v on average (tier %b).",
                cause: "Grenades into retake paths often land on teammates already pushing in.",
                drills: &["Check the minimap before throwing HEs onto a site you are retaking"],
                tag: tag::HE_GRENADES,
            },
            SideText {
                observation: "Your HE grenades hit teammates for %v on average (tier %b).",
                cause: "HEs thrown during executes land on your own entry.",
                drills: &["Throw execute HEs before the entry swings, never after"],
                tag: tag::HE_GRENADES,
            },
        ],
    },
    SideRule {
        metrics: both(MetricKey::TradeKillsSuccessPercentage),
        text: [
            SideText {
                observation: "You convert only %v of trade opportunities (tier %b) while defending.",
                cause: "Anchors often hold passive angles too far from the teammate they should trade.",
                drills: &["Position within a one-second swing of your site partner"],
                tag: tag::CT_SETUPS,
            },
            SideText {
                observation: "You convert only %v of trade opportunities (tier %b) on attack.",
                cause: "You follow the entry too late to punish the defender who killed them.",
                drills: &["Follow your entry at a one-second distance and swing the moment they fall"],
                tag: tag::T_TRADING,
            },
        ],
    },
    SideRule {
        metrics: both(MetricKey::TradedDeathsSuccessPercentage),
        text: [
            SideText {
                observation: "Only %v of your deaths get traded (tier %b) on defense.",
                cause: "You are holding positions where no teammate can refrag you.",
                drills: &["Discuss crossfires with your site partner before each half"],
                tag: tag::CT_SETUPS,
            },
            SideText {
                observation: "Only %v of your deaths get traded (tier %b) on attack.",
                cause: "You take fights ahead of the team or lurk too far away.",
                drills: &["Stay in line of sight of a teammate when you take fights on T"],
                tag: tag::T_TRADING,
            },
        ],
    },
    SideRule {
        metrics: both(MetricKey::TradeKillOpportunitiesPerRound),
        text: [
            SideText {
                observation: "You see %v trade chances per round (tier %b) on CT.",
                cause: "You play isolated positions and rotations leave you alone.",
                drills: &["Rotate through the shortest path to your teammates when the site is hit"],
                tag: tag::POSITIONING_SPACING,
            },
            SideText {
                observation: "You see %v trade chances per round (tier %b) on T.",
                cause: "You are not near the team when fights happen.",
                drills: &["Lurk less: stay within one callout of the nearest teammate"],
                tag: tag::POSITIONING_SPACING,
            },
        ],
    },
    SideRule {
        metrics: both(MetricKey::UtilityOnDeathAvg),
        text: [
            SideText {
                observation: "You die holding %v of utility (tier %b) on defense.",
                cause: "Delay utility is being saved for a retake that never happens.",
                drills: &["Use one grenade to delay as soon as you hear the push, before peeking"],
                tag: tag::UTILITY_ON_DEATH,
            },
            SideText {
                observation: "You die holding %v of utility (tier %b) on attack.",
                cause: "You dry-peek instead of using the grenades you bought.",
                drills: &["Before every T-side fight, ask which grenade helps it"],
                tag: tag::UTILITY_ON_DEATH,
            },
        ],
    },
    SideRule {
        metrics: both(MetricKey::FlashbangLeadingToKill),
        text: [
            SideText {
                observation: "Only %v of your flashes lead to a kill (tier %b) on CT.",
                cause: "Retake flashes are thrown without anyone ready to swing on them.",
                drills: &["Throw retake flashes only when a teammate is set to peek"],
                tag: tag::CT_RETAKES,
            },
            SideText {
                observation: "Only %v of your flashes lead to a kill (tier %b) on T.",
                cause: "Entry flashes pop before the entry is ready to swing.",
                drills: &["Time entry flashes with the entry's swing using a count of three"],
                tag: tag::FLASH_POPFLASH,
            },
        ],
    },
    SideRule {
        metrics: both(MetricKey::FlashbangHitFoeAvgDuration),
        text: [
            SideText {
                observation: "Enemies you flash are blind for only %v (tier %b) when you defend.",
                cause: "Defensive flashes are thrown where attackers can turn away.",
                drills: &["Learn one pop-flash for each site you anchor"],
                tag: tag::FLASH_POPFLASH,
            },
            SideText {
                observation: "Enemies you flash are blind for only %v (tier %b) when you attack.",
                cause: "Execute flashes pop in front of defenders instead of over them.",
                drills: &["Practice your team's execute flashes in a private server"],
                tag: tag::FLASH_FUNDAMENTALS,
            },
        ],
    },
    SideRule {
        metrics: both(MetricKey::HeFoesDamageAvg),
        text: [
            SideText {
                observation: "Your HE grenades deal %v damage to enemies (tier %b) when defending.",
                cause: "HEs are not thrown at the chokes attackers group up in.",
                drills: &["Throw an HE into the main choke at the first sound of a rush"],
                tag: tag::HE_GRENADES,
            },
            SideText {
                observation: "Your HE grenades deal %v damage to enemies (tier %b) when attacking.",
                cause: "HEs are thrown at random instead of at known CT positions.",
                drills: &["Learn one HE per site that hits a common CT position"],
                tag: tag::HE_GRENADES,
            },
        ],
    },
    SideRule {
        metrics: both(MetricKey::ReactionTimeMs),
        text: [
            SideText {
                observation: "Your time to damage is %v (tier %b); too slow for holding angles.",
                cause: "Your crosshair is likely off the angle when enemies swing, so reaction alone is not enough.",
                drills: &["Hold angles with the crosshair already on the peek path, not the wall"],
                tag: tag::CT_HOLDING,
            },
            SideText {
                observation: "Your time to damage is %v (tier %b); defenders shoot first.",
                cause: "You peek without clearing angles one at a time.",
                drills: &["Slice pie: clear angles one by one instead of wide-swinging into several"],
                tag: tag::T_ENTRY,
            },
        ],
    },
    SideRule {
        metrics: both(MetricKey::Preaim),
        text: [
            SideText {
                observation: "Your crosshair is %v off target on first sight (tier %b) while defending.",
                cause: "You are not pre-aiming the spot attackers appear at.",
                drills: &["For each CT position, pick the exact pixel an attacker will appear at"],
                tag: tag::CT_HOLDING,
            },
            SideText {
                observation: "Your crosshair is %v off target on first sight (tier %b) while attacking.",
                cause: "You clear angles with the crosshair trailing behind your movement.",
                drills: &["Prefire maps: clear every site with the crosshair leading your movement"],
                tag: tag::AIM_CROSSHAIR_PLACEMENT,
            },
        ],
    },
    SideRule {
        metrics: both(MetricKey::CounterStrafingGoodShotsRatio),
        text: [
            SideText {
                observation: "Only %v of your shots are fired stopped (tier %b) on CT.",
                cause: "You shoot while repositioning instead of committing to the fight.",
                drills: &["Counter-strafe before every shot in deathmatch, even at the cost of kills"],
                tag: tag::AIM_COUNTER_STRAFE,
            },
            SideText {
                observation: "Only %v of your shots are fired stopped (tier %b) on T.",
                cause: "You run into angles and shoot before stopping.",
                drills: &["Peek with a counter-strafe into every angle on prefire maps"],
                tag: tag::AIM_COUNTER_STRAFE,
            },
        ],
    },
];

const CT_UNEXPLAINED_DRILLS: &[&str] = &[
    "Review your CT rotations in one demo: note when you arrived at the site compared to the bomb plant",
];
const T_UNEXPLAINED_DRILLS: &[&str] =
    &["Review your T rounds in one demo: note where you were when the round was decided"];

/// Run the per-side checks. Ratings are the vendor's native side ratings.
pub fn analyze_sides(ctx: &StatsContext, ct_rating_raw: f64, t_rating_raw: f64) -> SideSpecificInsights {
    SideSpecificInsights {
        ct: analyze_side(ctx, Side::Ct, relative_rating(ct_rating_raw)),
        t: analyze_side(ctx, Side::T, relative_rating(t_rating_raw)),
    }
}

fn analyze_side(ctx: &StatsContext, side: Side, rating: f64) -> SideReport {
    let index = match side {
        Side::Ct => 0,
        Side::T => 1,
    };
    let mut report = SideReport {
        side,
        rating,
        insights: Vec::new(),
        drills: Vec::new(),
        resource_tags: BTreeSet::new(),
    };

    for rule in &RULES {
        let metric = rule.metrics[index];
        let comparison = ctx.compare(metric);
        if comparison.meets {
            continue;
        }
        let text = &rule.text[index];
        push(
            &mut report,
            render(text.observation, metric, &comparison),
            text.cause.to_string(),
            text.drills,
            text.tag,
        );
    }

    // The sampled metrics can all look fine while the side still loses rounds
    if report.insights.is_empty() && rating < UNEXPLAINED_GAP_THRESHOLD {
        let (drills, tag) = match side {
            Side::Ct => (CT_UNEXPLAINED_DRILLS, tag::CT_RETAKES),
            Side::T => (T_UNEXPLAINED_DRILLS, tag::T_EXECUTES),
        };
        push(
            &mut report,
            format!("Your {side} rating is {rating:+.1} even though none of the measured {side} stats are below your tier."),
            "The gap likely comes from things these stats do not capture: round impact, rotation timing, or playing isolated from the team.".to_string(),
            drills,
            tag,
        );
    }

    report
}

fn push(
    report: &mut SideReport,
    observation: String,
    cause: String,
    drills: &[&str],
    tag: &'static str,
) {
    report.insights.push(SideInsight { observation, cause });
    for drill in drills {
        if !report.drills.iter().any(|d| d == drill) {
            report.drills.push(drill.to_string());
        }
    }
    report.resource_tags.insert(tag);
}
