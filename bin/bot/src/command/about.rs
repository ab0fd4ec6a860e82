use crate::command::{CommandError, Context};
use indoc::formatdoc;

/// Display information about the bot (e.g. version)
#[poise::command(slash_command, guild_only)]
pub async fn about(ctx: Context<'_>) -> Result<(), CommandError> {
    let message = formatdoc! {"
        **The Coach** v{}
        CS2 coaching from your Leetify stats. Link your account with `/link`, \
        then try `/stats` and `/improve`.",
        env!("CARGO_PKG_VERSION")
    };
    ctx.reply(message).await?;
    Ok(())
}
