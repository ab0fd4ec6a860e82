use anyhow::Context as _;
use std::sync::Arc;
use std::time::Duration;
use the_coach_db::{DbHandler, SqlitePoolOptions};
use the_coach_ipc::{r#pub::IpcPublisher, MatchNotification, IPC_MATCH_NOTIFICATION_PATH};
use the_coach_leetify::{LeetifyClient, SteamId};
use the_coach_poller::config::Config;
use the_coach_poller::handler::profile::ProfileHandler;
use the_coach_poller::leetify_api::{
    profile::{FetchedProfile, ProfileRequester},
    Publish,
};
use tokio::sync::mpsc::unbounded_channel;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    setup_tracing_subscriber();

    info!("Loading configuration");
    let config = Config::load(std::env::args().nth(1)).await?;

    info!("Setting up DB client");
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    let db_handler = Arc::new(DbHandler::new(pool));
    db_handler
        .migrate()
        .await
        .context("Failed to run database migrations")?;

    info!("Setting up Leetify API client");
    let client = LeetifyClient::new(config.leetify_api_key);

    info!("Starting Requester task");
    let (profile_tx, profile_rx) = unbounded_channel::<FetchedProfile>();
    let profile_requester = Arc::new(ProfileRequester::new(
        client,
        Duration::from_millis(config.request_interval_ms),
    ));
    tokio::task::spawn({
        let profile_requester = profile_requester.clone();
        async move {
            profile_requester.start(profile_tx).await;
        }
    });

    info!("Starting Handler task");
    let publisher = IpcPublisher::<MatchNotification>::new(IPC_MATCH_NOTIFICATION_PATH)
        .context("Failed to set up IPC publisher")?;
    let profile_handler = ProfileHandler::new(db_handler.clone(), profile_rx, publisher);
    tokio::task::spawn(profile_handler.start());

    info!("Starting main loop");
    loop {
        // Loop players rather than watches, so a player followed by several
        // guilds is only requested once
        let players = match db_handler.get_watched_players().await {
            Ok(players) => players,
            Err(e) => {
                error!("Failed to get watched players: {e:?}");
                Vec::new()
            }
        };
        debug!("Queueing {} watched players", players.len());
        for player in players {
            match player.steam64_id.parse::<SteamId>() {
                Ok(steam_id) => profile_requester.push(steam_id).await,
                Err(e) => error!("Skipping stored player: {e}"),
            }
        }

        debug!("Sleeping {}s...", config.iteration_secs);
        tokio::time::sleep(Duration::from_secs(config.iteration_secs)).await;
    }
}

fn setup_tracing_subscriber() {
    let layer = fmt::layer()
        .pretty()
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_thread_names(true)
        .with_thread_ids(false)
        .with_target(false);
    tracing_subscriber::registry()
        .with(layer)
        .with(EnvFilter::from_default_env())
        .init();
}
