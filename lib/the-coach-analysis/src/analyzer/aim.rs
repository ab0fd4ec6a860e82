use super::{render, AreaBuilder, Check, StatsContext};
use crate::area::{Category, ImprovementArea};
use crate::metric::MetricKey;
use crate::tag;

const CHECKS: [Check; 4] = [
    Check {
        metric: MetricKey::SprayAccuracy,
        issue: "Spray accuracy of %v is below the tier benchmark of %b; you lose control after the first bullets",
        drill: "Spray control: 10 minutes of recoil patterns for the AK and M4 on recoil_master, then transfer sprays between bots",
        tag: tag::AIM_SPRAY,
    },
    Check {
        metric: MetricKey::CounterStrafingGoodShotsRatio,
        issue: "Only %v of your shots are fired while properly stopped (tier %b); you are shooting while moving",
        drill: "Counter-strafe drill: strafe A/D in aim_botz and only fire once fully stopped, 100 kills per session",
        tag: tag::AIM_COUNTER_STRAFE,
    },
    Check {
        metric: MetricKey::ReactionTimeMs,
        issue: "Time to damage of %v is slower than the tier benchmark of %b",
        drill: "Reaction training: 15 minutes of flick and reaction scenarios before queueing",
        tag: tag::AIM_REACTION,
    },
    Check {
        metric: MetricKey::Preaim,
        issue: "Your crosshair is %v away from enemies when they appear (tier %b); pre-aim common angles",
        drill: "Crosshair placement: walk every map in a private server and keep the crosshair on head height at each common angle",
        tag: tag::AIM_CROSSHAIR_PLACEMENT,
    },
];

pub fn analyze_aim(ctx: &StatsContext, rating: f64) -> ImprovementArea {
    let mut area = AreaBuilder::new(Category::Aim, rating, ctx.tier);
    area.rating_severity(
        "Warm up for 15 minutes on aim_botz or a deathmatch server before every session",
        tag::AIM_FUNDAMENTALS,
    );

    let accuracy = ctx.compare(MetricKey::AccuracyEnemySpotted);
    if !accuracy.meets {
        area.flag(
            render(
                "You hit %v of your shots when an enemy is spotted, below the tier benchmark of %b",
                MetricKey::AccuracyEnemySpotted,
                &accuracy,
            ),
            "Accuracy: 500 one-taps on aim_botz standing still, then 500 while counter-strafing",
            tag::AIM_FUNDAMENTALS,
        );
    }

    // Head accuracy advice depends on whether the player already hits shots
    let head = ctx.compare(MetricKey::AccuracyHead);
    if !head.meets {
        if accuracy.meets {
            area.flag(
                render(
                    "You land your shots but mostly on the body: head accuracy of %v vs a tier benchmark of %b",
                    MetricKey::AccuracyHead,
                    &head,
                ),
                "Crosshair height: play prefire maps keeping the crosshair exactly at head level",
                tag::AIM_CROSSHAIR_PLACEMENT,
            );
        } else {
            area.flag(
                render(
                    "Head accuracy of %v is also below the tier benchmark of %b; fix overall accuracy first",
                    MetricKey::AccuracyHead,
                    &head,
                ),
                "Accuracy: 500 one-taps on aim_botz standing still, then 500 while counter-strafing",
                tag::AIM_FUNDAMENTALS,
            );
        }
    }

    for check in &CHECKS {
        area.check(ctx, check);
    }

    area.finish()
}
