use crate::command::{CommandError, Context};
use anyhow::Context as _;
use tokio_stream::StreamExt;

/// Display a list of the players that the guild is watching
#[poise::command(slash_command, guild_only, ephemeral)]
pub async fn list(ctx: Context<'_>) -> Result<(), CommandError> {
    let guild_id = ctx.guild_id().context("Trying to get guild ID")?;

    // Get raw data from DB
    let watched = ctx
        .data()
        .db_handler
        .get_guild_watches(guild_id.into())
        .await?;

    if watched.is_empty() {
        ctx.reply("No watched players.").await?;
        return Ok(());
    }

    // Format the message, with the last stored match of each player
    let mut message = String::from("**WATCHED PLAYERS**\n**-------------------------**\n");
    let lines = tokio_stream::iter(watched).then(|player| async move {
        let last_match = match &player.last_match_id {
            Some(match_id) => {
                ctx.data()
                    .db_handler
                    .get_player_match(&player.steam64_id, match_id)
                    .await?
            }
            None => None,
        };
        let line = match last_match {
            Some(last_match) => format!(
                "{} - last match {} on {}",
                player.name,
                crate::message::outcome_label(last_match.outcome.as_deref()),
                crate::message::map_label(last_match.map_name.as_deref()),
            ),
            None => format!("{} - no match seen yet", player.name),
        };
        Ok::<String, anyhow::Error>(line)
    });
    tokio::pin!(lines);

    let mut index = 1;
    while let Some(line) = lines.next().await {
        message += &format!("**{})** {}\n", index, line?);
        index += 1;
    }

    // Send the message
    ctx.reply(message).await?;
    Ok(())
}
