use poise::serenity_prelude::User;
use std::sync::Arc;
use the_coach_analysis::{BenchmarkTable, ResourceCatalog};
use the_coach_db::DbHandler;
use the_coach_leetify::{LeetifyClient, Profile, SteamId};
use tracing::error;

mod about;
mod here;
mod improve;
mod link;
mod list;
mod stats;
mod unhere;
mod unlink;
mod unwatch;
mod watch;

pub use about::about;
pub use here::here;
pub use improve::improve;
pub use link::link;
pub use list::list;
pub use stats::stats;
pub use unhere::unhere;
pub use unlink::unlink;
pub use unwatch::unwatch;
pub use watch::watch;

type CommandError = Box<dyn std::error::Error + Send + Sync>;
type Context<'a> = poise::Context<'a, Data, CommandError>;

pub struct Data {
    pub db_handler: Arc<DbHandler>,
    pub leetify: LeetifyClient,
    pub benchmarks: Arc<BenchmarkTable>,
    pub catalog: ResourceCatalog,
}

/// Parse a Steam ID typed by a user, replying with a hint when it is invalid.
async fn parse_steam_id(ctx: Context<'_>, input: &str) -> Result<Option<SteamId>, CommandError> {
    match input.parse() {
        Ok(steam_id) => Ok(Some(steam_id)),
        Err(e) => {
            ctx.reply(e.user_message()).await?;
            Ok(None)
        }
    }
}

/// Resolve the player a command is about: an explicit Steam ID wins, then the
/// link of `user`, then the link of the invoking user. Replies and returns
/// `None` when nothing resolves.
async fn resolve_player(
    ctx: Context<'_>,
    user: Option<&User>,
    steam_id: Option<&str>,
) -> Result<Option<SteamId>, CommandError> {
    if let Some(input) = steam_id {
        return parse_steam_id(ctx, input).await;
    }

    let user = user.unwrap_or_else(|| ctx.author());
    match ctx.data().db_handler.get_link(user.id.get()).await? {
        Some(link) => Ok(Some(link.steam64_id.parse()?)),
        None => {
            let message = if user.id == ctx.author().id {
                "You have not linked a Steam account yet. Use `/link` with your Steam64 ID first.".to_string()
            } else {
                format!("**{}** has not linked a Steam account yet.", user.name)
            };
            ctx.reply(message).await?;
            Ok(None)
        }
    }
}

/// Fetch a profile from Leetify, replying with a readable message when the
/// request fails.
async fn fetch_profile(ctx: Context<'_>, steam_id: SteamId) -> Result<Option<Profile>, CommandError> {
    match ctx.data().leetify.get_profile(steam_id).await {
        Ok(profile) => Ok(Some(profile)),
        Err(e) => {
            error!("Failed to fetch profile of {steam_id}: {e:?}");
            ctx.reply(e.user_message()).await?;
            Ok(None)
        }
    }
}
