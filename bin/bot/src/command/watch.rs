use crate::command::{fetch_profile, resolve_player, CommandError, Context};
use anyhow::Context as _;
use poise::serenity_prelude::User;

/// Post a message in this server whenever the player finishes a match
#[poise::command(slash_command, guild_only)]
pub async fn watch(
    ctx: Context<'_>,
    #[description = "Discord user with a linked account"] user: Option<User>,
    #[description = "Steam64 ID, overrides the user"] steam_id: Option<String>,
) -> Result<(), CommandError> {
    let guild_id = ctx.guild_id().context("Trying to get guild ID")?;
    let Some(steam_id) = resolve_player(ctx, user.as_ref(), steam_id.as_deref()).await? else {
        return Ok(());
    };
    ctx.defer().await?;

    let Some(profile) = fetch_profile(ctx, steam_id).await? else {
        return Ok(());
    };

    let db_handler = &ctx.data().db_handler;
    let steam64_id = steam_id.to_string();
    db_handler.insert_guild(guild_id.into()).await?;
    db_handler.upsert_player(&steam64_id, &profile.name).await?;
    let result = db_handler
        .insert_guild_watch(guild_id.into(), &steam64_id)
        .await?;

    let message = if result.rows_affected() == 0 {
        format!("Already watching **{}**.", profile.name)
    } else {
        format!("Watching **{}**.", profile.name)
    };
    ctx.reply(message).await?;
    Ok(())
}
