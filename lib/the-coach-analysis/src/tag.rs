//! Resource tags. The part before the first underscore is the tag's root
//! category, used to avoid picking several resources on the same topic.

pub const AIM_FUNDAMENTALS: &str = "aim_fundamentals";
pub const AIM_CROSSHAIR_PLACEMENT: &str = "aim_crosshair_placement";
pub const AIM_SPRAY: &str = "aim_spray";
pub const AIM_COUNTER_STRAFE: &str = "aim_counter_strafe";
pub const AIM_REACTION: &str = "aim_reaction";
pub const POSITIONING_FUNDAMENTALS: &str = "positioning_fundamentals";
pub const POSITIONING_TRADING: &str = "positioning_trading";
pub const POSITIONING_SPACING: &str = "positioning_spacing";
pub const UTILITY_FUNDAMENTALS: &str = "utility_fundamentals";
pub const UTILITY_ON_DEATH: &str = "utility_on_death";
pub const FLASH_FUNDAMENTALS: &str = "flash_fundamentals";
pub const FLASH_TEAM: &str = "flash_team";
pub const FLASH_POPFLASH: &str = "flash_popflash";
pub const HE_GRENADES: &str = "he_grenades";
pub const OPENING_DUELS: &str = "opening_duels";
pub const OPENING_AGGRESSION: &str = "opening_aggression";
pub const CLUTCH_FUNDAMENTALS: &str = "clutch_fundamentals";
pub const CLUTCH_MINDSET: &str = "clutch_mindset";
pub const CT_SETUPS: &str = "ct_setups";
pub const CT_RETAKES: &str = "ct_retakes";
pub const CT_HOLDING: &str = "ct_holding";
pub const T_ENTRY: &str = "t_entry";
pub const T_EXECUTES: &str = "t_executes";
pub const T_TRADING: &str = "t_trading";

pub const ALL: [&str; 24] = [
    AIM_FUNDAMENTALS,
    AIM_CROSSHAIR_PLACEMENT,
    AIM_SPRAY,
    AIM_COUNTER_STRAFE,
    AIM_REACTION,
    POSITIONING_FUNDAMENTALS,
    POSITIONING_TRADING,
    POSITIONING_SPACING,
    UTILITY_FUNDAMENTALS,
    UTILITY_ON_DEATH,
    FLASH_FUNDAMENTALS,
    FLASH_TEAM,
    FLASH_POPFLASH,
    HE_GRENADES,
    OPENING_DUELS,
    OPENING_AGGRESSION,
    CLUTCH_FUNDAMENTALS,
    CLUTCH_MINDSET,
    CT_SETUPS,
    CT_RETAKES,
    CT_HOLDING,
    T_ENTRY,
    T_EXECUTES,
    T_TRADING,
];

/// Roots that may appear more than once in a resource selection.
pub const REPEATABLE_ROOTS: [&str; 4] = ["ct", "t", "aim", "flash"];

/// Static bonus added to a tag's selection score. Broad topics outrank
/// narrow ones.
pub fn priority_bonus(tag: &str) -> u32 {
    match tag {
        AIM_FUNDAMENTALS | POSITIONING_FUNDAMENTALS | UTILITY_FUNDAMENTALS
        | CLUTCH_FUNDAMENTALS => 3,
        POSITIONING_TRADING | OPENING_DUELS | FLASH_FUNDAMENTALS | AIM_CROSSHAIR_PLACEMENT => 2,
        CT_SETUPS | T_EXECUTES | AIM_COUNTER_STRAFE | FLASH_TEAM => 1,
        _ => 0,
    }
}

pub fn root(tag: &str) -> &str {
    tag.split('_').next().unwrap_or(tag)
}
