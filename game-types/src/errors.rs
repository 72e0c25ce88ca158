use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GameError {
    /// Per-field messages from player setup; `None` means the field is fine.
    #[error("invalid player names")]
    InvalidPlayerNames {
        player1: Option<String>,
        player2: Option<String>,
    },
    #[error("malformed intent: {message}")]
    MalformedIntent { message: String },
}
