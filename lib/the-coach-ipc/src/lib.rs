use serde::{Deserialize, Serialize};

pub mod error;
pub mod r#pub;
pub mod sub;

pub use error::IpcError;

pub const IPC_MATCH_NOTIFICATION_PATH: &str = "ipc:///tmp/the-coach.ipc";

/// Sent by the poller for every new match of a watched player. The match is
/// already stored when this is published.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MatchNotification {
    pub steam64_id: String,
    pub match_id: String,
}
