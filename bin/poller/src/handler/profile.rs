use crate::leetify_api::profile::FetchedProfile;
use anyhow::Context as _;
use std::sync::Arc;
use the_coach_analysis::MetricKey;
use the_coach_db::{model::PlayerMatch, DbHandler};
use the_coach_ipc::{r#pub::IpcPublisher, MatchNotification};
use the_coach_leetify::RecentMatch;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, error, info};

#[derive(Debug)]
pub struct ProfileHandler {
    db_handler: Arc<DbHandler>,
    rx_channel: UnboundedReceiver<FetchedProfile>,
    publisher: IpcPublisher<MatchNotification>,
}

impl ProfileHandler {
    pub fn new(
        db_handler: Arc<DbHandler>,
        rx_channel: UnboundedReceiver<FetchedProfile>,
        publisher: IpcPublisher<MatchNotification>,
    ) -> Self {
        Self {
            db_handler,
            rx_channel,
            publisher,
        }
    }

    /// Receive fetched profiles, store the matches not seen before and notify
    /// the bot about each of them.
    #[tracing::instrument(skip(self))]
    pub async fn start(mut self) {
        loop {
            match self.run().await {
                Ok(Some(0)) => {}
                Ok(Some(count)) => info!("Stored {count} new matches"),
                Ok(None) => {
                    info!("Profile channel closed, stopping handler");
                    return;
                }
                Err(e) => error!("Profile handler error: {e:?}"),
            }
        }
    }

    async fn run(&mut self) -> anyhow::Result<Option<usize>> {
        let Some(FetchedProfile { steam_id, profile }) = self.rx_channel.recv().await else {
            return Ok(None);
        };
        let steam64_id = steam_id.to_string();
        debug!("Received profile of {steam64_id}");

        let player = self
            .db_handler
            .get_player(&steam64_id)
            .await?
            .context("Fetched profile of a player missing from the database")?;
        if player.name != profile.name {
            self.db_handler
                .upsert_player(&steam64_id, &profile.name)
                .await?;
        }

        let new_matches = profile.matches_since(player.last_match_id.as_deref());
        for recent_match in &new_matches {
            let data = player_match(&steam64_id, recent_match);
            self.db_handler.insert_player_match(&data).await?;

            let message = MatchNotification {
                steam64_id: steam64_id.clone(),
                match_id: data.match_id,
            };
            debug!("Sending match notification: {message:?}");
            self.publisher
                .publish(&message)
                .await
                .with_context(|| format!("Failed to publish {message:?}"))?;

            // Only advance once the bot was notified, so a failed publish is
            // retried on the next poll
            self.db_handler
                .update_last_match_id(&steam64_id, &message.match_id)
                .await?;
        }

        Ok(Some(new_matches.len()))
    }
}

fn player_match(steam64_id: &str, recent_match: &RecentMatch) -> PlayerMatch {
    let stat = |metric| recent_match.stats.get(metric);
    PlayerMatch {
        match_id: recent_match.id.clone(),
        steam64_id: steam64_id.to_string(),
        finished_at: recent_match.finished_at.naive_utc(),
        map_name: recent_match.map_name.clone(),
        outcome: recent_match.outcome.clone(),
        leetify_rating: recent_match.leetify_rating,
        premier_rank: recent_match.rank.map(i64::from),
        accuracy_enemy_spotted: stat(MetricKey::AccuracyEnemySpotted),
        accuracy_head: stat(MetricKey::AccuracyHead),
        spray_accuracy: stat(MetricKey::SprayAccuracy),
        preaim: stat(MetricKey::Preaim),
        reaction_time_ms: stat(MetricKey::ReactionTimeMs),
    }
}
