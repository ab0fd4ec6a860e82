use crate::command::{CommandError, Context};

/// Remove the link between your Discord and Steam accounts
#[poise::command(slash_command, guild_only, ephemeral)]
pub async fn unlink(ctx: Context<'_>) -> Result<(), CommandError> {
    let result = ctx
        .data()
        .db_handler
        .delete_link(ctx.author().id.get())
        .await?;

    let message = if result.rows_affected() == 0 {
        "Your account is not linked."
    } else {
        "Unlinked your account."
    };
    ctx.reply(message).await?;
    Ok(())
}
