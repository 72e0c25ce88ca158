use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::user::{LeaderboardEntry, Player};

/// Number of cells on a tic-tac-toe board.
pub const BOARD_SIZE: usize = 9;

/// Mark placed on the board. The first registered player always plays `X`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Symbol {
    X,
    O,
}

/// Row-major 3x3 board: cells 0..=2 are the top row, 6..=8 the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Board([Option<Symbol>; BOARD_SIZE]);

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mark at `index`, or `None` when the cell is empty or out of range.
    pub fn get(&self, index: usize) -> Option<Symbol> {
        self.0.get(index).copied().flatten()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.0.get(index), Some(None))
    }

    /// Places `symbol` at `index`. Returns `false` and leaves the board
    /// untouched if the index is out of range or the cell is taken.
    pub fn place(&mut self, index: usize, symbol: Symbol) -> bool {
        if !self.is_empty_at(index) {
            return false;
        }
        self.0[index] = Some(symbol);
        true
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    pub fn cells(&self) -> &[Option<Symbol>; BOARD_SIZE] {
        &self.0
    }
}

impl From<[Option<Symbol>; BOARD_SIZE]> for Board {
    fn from(cells: [Option<Symbol>; BOARD_SIZE]) -> Self {
        Self(cells)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum GameStatus {
    #[default]
    Setup,
    Playing,
    RoundOver,
    GameOver,
}

/// Result of a round or of a whole game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Outcome {
    Winner { name: String },
    Draw,
}

impl Outcome {
    pub fn winner(name: impl Into<String>) -> Self {
        Outcome::Winner { name: name.into() }
    }

    pub fn winner_name(&self) -> Option<&str> {
        match self {
            Outcome::Winner { name } => Some(name.as_str()),
            Outcome::Draw => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GameSession {
    pub players: Vec<Player>,
    pub current_player_index: usize,
    pub board: Board,
    pub status: GameStatus,
    pub current_round: u32,
    pub round_winner: Option<Outcome>,
    pub winner: Option<Outcome>, // Set only at game-over
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            current_player_index: 0,
            board: Board::new(),
            status: GameStatus::Setup,
            current_round: 1,
            round_winner: None,
            winner: None,
        }
    }
}

impl GameSession {
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }
}

/// Full state tree handed to the presentation layer after every intent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TicTacToeState {
    pub session: GameSession,
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl TicTacToeState {
    pub fn with_leaderboard(leaderboard: Vec<LeaderboardEntry>) -> Self {
        Self {
            session: GameSession::default(),
            leaderboard,
        }
    }
}
