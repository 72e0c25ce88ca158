use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Symbol;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Player {
    pub name: String,
    pub symbol: Symbol,
    pub score: u32,
    pub round_wins: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, symbol: Symbol) -> Self {
        Self {
            name: name.into(),
            symbol,
            score: 0,
            round_wins: 0,
        }
    }
}

/// Persisted cross-game total for one player name.
///
/// Field names are camelCase because this is also the stored blob format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LeaderboardEntry {
    pub name: String,
    pub total_score: u32,
}

impl LeaderboardEntry {
    pub fn new(name: impl Into<String>, total_score: u32) -> Self {
        Self {
            name: name.into(),
            total_score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RankedEntry {
    pub rank: u32,
    pub name: String,
    pub total_score: u32,
}
