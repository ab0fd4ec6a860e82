use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeetifyError {
    #[error("no Leetify profile found")]
    NotFound,
    #[error("rate limited by the Leetify API")]
    RateLimited,
    #[error("Leetify API key was rejected")]
    Unauthorized,
    #[error("unexpected status from the Leetify API: {0}")]
    UnexpectedStatus(StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("invalid Steam64 ID: {0:?}")]
    InvalidSteamId(String),
}

impl LeetifyError {
    /// Map a non-success status to its error, or `None` for success.
    pub fn from_status(status: StatusCode) -> Option<Self> {
        if status.is_success() {
            return None;
        }
        Some(match status {
            StatusCode::NOT_FOUND => LeetifyError::NotFound,
            StatusCode::TOO_MANY_REQUESTS => LeetifyError::RateLimited,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LeetifyError::Unauthorized,
            status => LeetifyError::UnexpectedStatus(status),
        })
    }

    /// Text suitable for replying to a Discord user.
    pub fn user_message(&self) -> String {
        match self {
            LeetifyError::NotFound => {
                "No Leetify profile exists for that Steam ID. The player needs to sign in to Leetify at least once.".to_string()
            }
            LeetifyError::RateLimited => {
                "Leetify is rate limiting requests right now, try again later.".to_string()
            }
            LeetifyError::Unauthorized => {
                "The Leetify API key was rejected. Ask the bot owner to check it.".to_string()
            }
            LeetifyError::InvalidSteamId(input) => format!(
                "**{input}** is not a Steam64 ID. Use the 17 digit ID starting with 7656119 or a steamcommunity.com/profiles link."
            ),
            LeetifyError::UnexpectedStatus(_) | LeetifyError::Http(_) => {
                "Failed to fetch stats from Leetify.".to_string()
            }
        }
    }
}
