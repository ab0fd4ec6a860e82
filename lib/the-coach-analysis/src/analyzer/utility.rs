use super::{render, AreaBuilder, Check, StatsContext};
use crate::area::{Category, ImprovementArea};
use crate::metric::MetricKey;
use crate::tag;

const CHECKS: [Check; 6] = [
    Check {
        metric: MetricKey::FlashbangHitFoePerFlashbang,
        issue: "Your flashes blind %v enemies each (tier %b); most are not reaching anyone",
        drill: "Learn two pop-flashes per side on your three most played maps",
        tag: tag::FLASH_POPFLASH,
    },
    Check {
        metric: MetricKey::FlashbangHitFoeAvgDuration,
        issue: "Enemies you flash are blind for only %v on average (tier %b)",
        drill: "Throw flashes so they pop above and behind the enemy's position, not in front of them",
        tag: tag::FLASH_FUNDAMENTALS,
    },
    Check {
        metric: MetricKey::FlashbangHitFriendPerFlashbang,
        issue: "You flash %v teammates per flash (tier %b)",
        drill: "Call your flashes before throwing and only throw over teammates who are not about to peek",
        tag: tag::FLASH_TEAM,
    },
    Check {
        metric: MetricKey::HeFoesDamageAvg,
        issue: "Your HE grenades deal %v damage to enemies on average (tier %b)",
        drill: "Save HEs for stacked positions or enemies you already damaged",
        tag: tag::HE_GRENADES,
    },
    Check {
        metric: MetricKey::HeFriendsDamageAvg,
        issue: "Your HE grenades deal %v damage to teammates on average (tier %b)",
        drill: "Check the minimap before throwing HEs into contested areas",
        tag: tag::HE_GRENADES,
    },
    Check {
        metric: MetricKey::UtilityOnDeathAvg,
        issue: "You die with %v worth of unused utility on average (tier %b)",
        drill: "Use at least one grenade before taking any fight you might lose",
        tag: tag::UTILITY_ON_DEATH,
    },
];

pub fn analyze_utility(ctx: &StatsContext, rating: f64) -> ImprovementArea {
    let mut area = AreaBuilder::new(Category::Utility, rating, ctx.tier);
    area.rating_severity(
        "Learn one smoke, one flash and one molotov for each site of your best map",
        tag::UTILITY_FUNDAMENTALS,
    );

    // Flash volume and flash payoff are judged together
    let thrown = ctx.compare(MetricKey::FlashbangThrown);
    let to_kill = ctx.compare(MetricKey::FlashbangLeadingToKill);
    if !thrown.meets {
        area.flag(
            render(
                "You throw %v flashes per match (tier %b); you are leaving fights unsupported",
                MetricKey::FlashbangThrown,
                &thrown,
            ),
            "Buy and use two flashes every gun round",
            tag::FLASH_FUNDAMENTALS,
        );
    } else if !to_kill.meets {
        area.flag(
            render(
                "You throw plenty of flashes but only %v lead to a kill (tier %b); flash for a teammate who is ready to swing",
                MetricKey::FlashbangLeadingToKill,
                &to_kill,
            ),
            "Practice flash-peek combos with a teammate: one throws, one swings on the pop",
            tag::FLASH_TEAM,
        );
    }

    for check in &CHECKS {
        area.check(ctx, check);
    }

    area.finish()
}
