use super::Publish;
use std::collections::VecDeque;
use std::time::Duration;
use the_coach_leetify::{LeetifyClient, Profile, SteamId};
use tokio::sync::{mpsc::UnboundedSender, Mutex};
use tracing::{debug, error};

#[derive(Debug)]
pub struct FetchedProfile {
    pub steam_id: SteamId,
    pub profile: Profile,
}

/// Requester for fetching [`Profile`] data from the Leetify API given Steam
/// IDs. Requests are sent one at a time with a fixed pause in between.
///
/// This should have its [`Publish::start`] method called within a Tokio task.
#[derive(Debug)]
pub struct ProfileRequester {
    client: LeetifyClient,
    interval: Duration,
    queue: Mutex<VecDeque<SteamId>>,
}

impl ProfileRequester {
    pub fn new(client: LeetifyClient, interval: Duration) -> Self {
        Self {
            client,
            interval,
            queue: Mutex::new(VecDeque::new()),
        }
    }
}

impl Publish for ProfileRequester {
    type Input = SteamId;
    type Output = FetchedProfile;

    /// Add a Steam ID to the queue, unless it is already waiting.
    async fn push(&self, data: Self::Input) {
        let mut lock = self.queue.lock().await;
        if !lock.contains(&data) {
            lock.push_back(data);
        }
    }

    /// Loop the queue, fetching the profile of each Steam ID and pushing it to
    /// the provided publishing channel.
    #[tracing::instrument(skip(publishing_channel))]
    async fn start(&self, publishing_channel: UnboundedSender<Self::Output>) {
        loop {
            tokio::time::sleep(self.interval).await;

            let Some(steam_id) = self.queue.lock().await.pop_front() else {
                continue;
            };
            let profile = match self.client.get_profile(steam_id).await {
                Ok(profile) => profile,
                Err(e) => {
                    error!("Failed to fetch profile of {steam_id}: {e:?}");
                    continue;
                }
            };
            debug!(
                "Fetched profile of {steam_id} with {} recent matches",
                profile.recent_matches.len()
            );

            if publishing_channel
                .send(FetchedProfile { steam_id, profile })
                .is_err()
            {
                error!("Profile channel closed, stopping requester");
                return;
            }
        }
    }
}
