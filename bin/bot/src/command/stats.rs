use crate::command::{fetch_profile, resolve_player, CommandError, Context};
use crate::render;
use poise::serenity_prelude::User;
use poise::CreateReply;

/// Display ratings, ranks and aim stats of a player
#[poise::command(slash_command, guild_only)]
pub async fn stats(
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
    ctx.send(CreateReply::default().embed(render::stats_embed(&profile)))
        .await?;
    Ok(())
}
