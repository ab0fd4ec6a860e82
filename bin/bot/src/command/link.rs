use crate::command::{fetch_profile, parse_steam_id, CommandError, Context};

/// Link your Discord account to a Steam account with Leetify stats
#[poise::command(slash_command, guild_only)]
pub async fn link(
    ctx: Context<'_>,
    #[description = "Steam64 ID or steamcommunity.com/profiles link"] steam_id: String,
) -> Result<(), CommandError> {
    let Some(steam_id) = parse_steam_id(ctx, &steam_id).await? else {
        return Ok(());
    };
    ctx.defer().await?;

    // Only link accounts Leetify knows about
    let Some(profile) = fetch_profile(ctx, steam_id).await? else {
        return Ok(());
    };

    let db_handler = &ctx.data().db_handler;
    let steam64_id = steam_id.to_string();
    db_handler.upsert_player(&steam64_id, &profile.name).await?;
    db_handler
        .upsert_link(ctx.author().id.get(), &steam64_id)
        .await?;

    let message = format!("Linked your account to **{}** ({steam64_id}).", profile.name);
    ctx.reply(message).await?;
    Ok(())
}
