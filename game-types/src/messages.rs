use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Intents dispatched by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GameIntent {
    RegisterPlayers { player1: String, player2: String },
    ApplyMove { cell: usize },
    AdvanceRound,
    ResetBoard,
    ResetGame,
    ClearLeaderboard,
}

impl GameIntent {
    pub fn name(&self) -> &'static str {
        match self {
            GameIntent::RegisterPlayers { .. } => "register_players",
            GameIntent::ApplyMove { .. } => "apply_move",
            GameIntent::AdvanceRound => "advance_round",
            GameIntent::ResetBoard => "reset_board",
            GameIntent::ResetGame => "reset_game",
            GameIntent::ClearLeaderboard => "clear_leaderboard",
        }
    }
}
