use crate::message::MessageBuilder;
use anyhow::Context as _;
use async_trait::async_trait;
use poise::serenity_prelude::Http;
use std::sync::Arc;
use the_coach_analysis::matches::evaluate_match;
use the_coach_analysis::BenchmarkTable;
use the_coach_db::{model::Guild, DbHandler};
use the_coach_ipc::{sub::IpcSubscriber, MatchNotification};
use tracing::{debug, error};

/// Somewhere a notification can be posted, addressed by channel ID.
#[async_trait]
pub trait ChannelSink {
    async fn say(&self, channel_id: u64, message: &str) -> anyhow::Result<()>;
}

#[async_trait]
impl ChannelSink for Http {
    async fn say(&self, channel_id: u64, message: &str) -> anyhow::Result<()> {
        let channel = self
            .get_channel(channel_id.into())
            .await?
            .guild()
            .context("Found non-guild channel ID in database")?;
        channel.say(self, message).await?;
        Ok(())
    }
}

/// Delivers a message to every following guild when the poller reports a new
/// match.
#[derive(Debug)]
pub struct MessageHandler {
    pub db_handler: Arc<DbHandler>,
    pub subscriber: IpcSubscriber<MatchNotification>,
    pub benchmarks: Arc<BenchmarkTable>,
    pub message_builder: MessageBuilder,
    pub http: Arc<Http>,
}

impl MessageHandler {
    #[tracing::instrument(skip(self))]
    pub async fn start(&self) {
        loop {
            if let Err(e) = self.run().await {
                error!("Error handling match notification: {e:?}");
            }
        }
    }

    async fn run(&self) -> anyhow::Result<()> {
        let notification = self.subscriber.recv().await?;
        debug!("Got match notification: {notification:?}");

        let player_match = self
            .db_handler
            .get_player_match(&notification.steam64_id, &notification.match_id)
            .await?
            .with_context(|| format!("Failed to get player match from {notification:?}"))?;
        let player = self
            .db_handler
            .get_player(&player_match.steam64_id)
            .await?
            .context("No player with Steam64 ID found in database")?;

        let rank = player_match
            .premier_rank
            .and_then(|rank| u32::try_from(rank).ok());
        let evaluation = evaluate_match(&player_match.stats(), self.benchmarks.select(rank));
        let message = self
            .message_builder
            .build_message(&player, &player_match, &evaluation);

        let followers = self
            .db_handler
            .get_watching_guilds(&player_match.steam64_id)
            .await?;
        debug!("Sending a message to {} guilds", followers.len());
        let delivered = deliver(self.http.as_ref(), &followers, &message).await;
        debug!("Delivered to {delivered} of {} guilds", followers.len());

        Ok(())
    }
}

/// Post `message` to the channel of every follower. A channel that cannot be
/// reached is logged and skipped. Returns how many posts succeeded.
pub async fn deliver(sink: &impl ChannelSink, followers: &[Guild], message: &str) -> usize {
    let mut delivered = 0;
    for follower in followers {
        let Some(channel_id) = follower.channel_id else {
            debug!("Skipping {:?} because no channel ID set yet", follower.id);
            continue;
        };

        match sink.say(channel_id as u64, message).await {
            Ok(()) => delivered += 1,
            Err(e) => error!(
                "Failed sending message to channel {channel_id} of guild {:?}: {e:?}",
                follower.id
            ),
        }
    }
    delivered
}
