use crate::command::{fetch_profile, resolve_player, CommandError, Context};
use crate::render;
use poise::serenity_prelude::User;
use poise::CreateReply;
use the_coach_analysis::build_report;
use tracing::debug;

/// Show what a player should work on, with drills and resources
#[poise::command(slash_command, guild_only)]
pub async fn improve(
    ctx: Context<'_>,
    #[description = "Discord user with a linked account"] user: Option<User>,
    #[description = "Steam64 ID, overrides the user"] steam_id: Option<String>,
) -> Result<(), CommandError> {
    let Some(steam_id) = resolve_player(ctx, user.as_ref(), steam_id.as_deref()).await? else {
        return Ok(());
    };
    ctx.defer().await?;

    let Some(profile) = fetch_profile(ctx, steam_id).await? else {
        return Ok(());
    };
    let Some(raw_profile) = profile.raw_profile() else {
        let message = format!(
            "Leetify has no ratings or stats for **{}** yet. Play a few more matches and try again.",
            profile.name
        );
        ctx.reply(message).await?;
        return Ok(());
    };

    let data = ctx.data();
    let report = build_report(&raw_profile, &data.benchmarks, &data.catalog);
    debug!("Focus for {steam_id}: {:?}", report.focus);

    // One embed per message keeps each message under Discord's size limit
    for embed in render::report_embeds(&report) {
        ctx.send(CreateReply::default().embed(embed)).await?;
    }
    Ok(())
}
