//! Client for the public Leetify CS2 API.

use reqwest::Client;
use tracing::debug;

pub mod error;
pub mod model;
pub mod steam_id;

pub use error::LeetifyError;
pub use model::{Profile, Ranks, RecentMatch};
pub use steam_id::SteamId;

pub const API_BASE_URL: &str = "https://api-public.cs-prod.leetify.com";

#[derive(Debug, Clone)]
pub struct LeetifyClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl LeetifyClient {
    /// An empty key sends unauthenticated requests, which Leetify allows at
    /// a lower rate limit.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(API_BASE_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: (!api_key.is_empty()).then_some(api_key),
        }
    }

    /// Fetch the profile of a player, including their recent matches.
    pub async fn get_profile(&self, steam_id: SteamId) -> Result<Profile, LeetifyError> {
        debug!("Fetching Leetify profile of {steam_id}");
        let mut request = self
            .http
            .get(format!("{}/v3/profile", self.base_url))
            .query(&[("steam64_id", steam_id.to_string())]);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;
        if let Some(err) = LeetifyError::from_status(response.status()) {
            return Err(err);
        }
        Ok(response.json().await?)
    }
}
