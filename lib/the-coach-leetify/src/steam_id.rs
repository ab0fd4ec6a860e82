use crate::error::LeetifyError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

const PREFIX: &str = "7656119";
const LENGTH: usize = 17;
const PROFILE_URL_MARKER: &str = "steamcommunity.com/profiles/";

/// A validated 64-bit Steam ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SteamId(u64);

impl SteamId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl FromStr for SteamId {
    type Err = LeetifyError;

    /// Accepts a bare ID or a `steamcommunity.com/profiles/<id>` link.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let candidate = match trimmed.find(PROFILE_URL_MARKER) {
            Some(index) => trimmed[index + PROFILE_URL_MARKER.len()..]
                .split(['/', '?', '#'])
                .next()
                .unwrap_or_default(),
            None => trimmed,
        };

        let valid = candidate.len() == LENGTH
            && candidate.starts_with(PREFIX)
            && candidate.bytes().all(|b| b.is_ascii_digit());
        if !valid {
            return Err(LeetifyError::InvalidSteamId(trimmed.to_string()));
        }
        candidate
            .parse()
            .map(SteamId)
            .map_err(|_| LeetifyError::InvalidSteamId(trimmed.to_string()))
    }
}

impl TryFrom<String> for SteamId {
    type Error = LeetifyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SteamId> for String {
    fn from(value: SteamId) -> Self {
        value.to_string()
    }
}

impl Display for SteamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
