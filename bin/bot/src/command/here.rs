use crate::command::{CommandError, Context};
use anyhow::Context as _;

/// Set the channel that match notifications are sent to
#[poise::command(slash_command, guild_only)]
pub async fn here(ctx: Context<'_>) -> Result<(), CommandError> {
    let guild_id = ctx.guild_id().context("Trying to get guild ID")?;
    let db_handler = &ctx.data().db_handler;

    let channel_id = ctx.channel_id();
    db_handler.insert_guild(guild_id.into()).await?;
    db_handler
        .update_channel(guild_id.into(), Some(channel_id.into()))
        .await?;

    let message = format!(
        "Setting notification channel to **#{}**.",
        ctx.guild_channel()
            .await
            .context("Trying to get guild channel")?
            .name
    );
    ctx.reply(message).await?;
    Ok(())
}
