use anyhow::Context as _;
use command::Data;
use config::Config;
use handler::bot::BotHandler;
use handler::message::MessageHandler;
use message::MessageBuilder;
use poise::serenity_prelude::{Client, GatewayIntents};
use poise::{Framework, FrameworkOptions};
use std::sync::Arc;
use the_coach_db::{DbHandler, SqlitePoolOptions};
use the_coach_ipc::{sub::IpcSubscriber, IPC_MATCH_NOTIFICATION_PATH};
use the_coach_leetify::LeetifyClient;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod command;
mod config;
mod handler;
mod message;
mod render;

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

    info!("Loading resource catalog from {:?}", config.resources_path);
    let catalog = config.load_catalog().await?;
    let benchmarks = Arc::new(config.benchmarks);

    info!("Setting up Leetify API client");
    let leetify = LeetifyClient::new(config.leetify_api_key);

    let data = Data {
        db_handler: db_handler.clone(),
        leetify,
        benchmarks: benchmarks.clone(),
        catalog,
    };
    let framework = Framework::builder()
        .options(FrameworkOptions {
            commands: vec![
                command::about(),
                command::here(),
                command::improve(),
                command::link(),
                command::list(),
                command::stats(),
                command::unhere(),
                command::unlink(),
                command::unwatch(),
                command::watch(),
            ],
            ..Default::default()
        })
        .setup(|ctx, _ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(data)
            })
        })
        .build();

    let mut client = Client::builder(config.discord_token, GatewayIntents::non_privileged())
        .framework(framework)
        .event_handler(BotHandler {
            db_handler: db_handler.clone(),
        })
        .await
        .context("Failed to create client")?;

    let match_handler = MessageHandler {
        db_handler: db_handler.clone(),
        subscriber: IpcSubscriber::new(IPC_MATCH_NOTIFICATION_PATH)?,
        benchmarks,
        message_builder: MessageBuilder::new(&config.message_templates_path).await?,
        http: client.http.clone(),
    };
    info!("Starting Match Notification Handler");
    tokio::task::spawn(async move { match_handler.start().await });

    info!("Starting client");
    client.start().await.context("Client exited its loop")?;

    Ok(())
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
