use crate::command::{resolve_player, CommandError, Context};
use anyhow::Context as _;
use poise::serenity_prelude::User;

/// Stop posting match messages about a player in this server
#[poise::command(slash_command, guild_only)]
pub async fn unwatch(
    ctx: Context<'_>,
    #[description = "Discord user with a linked account"] user: Option<User>,
    #[description = "Steam64 ID, overrides the user"] steam_id: Option<String>,
) -> Result<(), CommandError> {
    let guild_id = ctx.guild_id().context("Trying to get guild ID")?;
    let Some(steam_id) = resolve_player(ctx, user.as_ref(), steam_id.as_deref()).await? else {
        return Ok(());
    };

    let db_handler = &ctx.data().db_handler;
    let steam64_id = steam_id.to_string();
    let name = db_handler
        .get_player(&steam64_id)
        .await?
        .map(|player| player.name)
        .unwrap_or_else(|| steam64_id.clone());
    let result = db_handler
        .delete_guild_watch(guild_id.into(), &steam64_id)
        .await?;

    let message = if result.rows_affected() == 0 {
        format!("Not watching **{name}**.")
    } else {
        format!("Stopped watching **{name}**.")
    };
    ctx.say(message).await?;
    Ok(())
}
