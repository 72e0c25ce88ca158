#![allow(dead_code)]

use async_trait::async_trait;
use game_core::{GameEvent, GameEventHandler, KeyValueStore, StoreError};
use game_types::{GameIntent, TicTacToeState};
use std::sync::{Arc, Mutex};

/// Ann (X) takes the top row while Bo (O) plays the middle row.
pub const X_WINS: [usize; 5] = [0, 3, 1, 4, 2];
/// X plays first but O completes the middle row.
pub const O_WINS: [usize; 6] = [0, 3, 1, 4, 8, 5];
/// Fills the board with no completed line.
pub const DRAWN_ROUND: [usize; 9] = [0, 1, 2, 4, 3, 5, 7, 6, 8];

pub fn register(player1: &str, player2: &str) -> GameIntent {
    GameIntent::RegisterPlayers {
        player1: player1.to_string(),
        player2: player2.to_string(),
    }
}

pub fn moves(cells: &[usize]) -> Vec<GameIntent> {
    cells.iter().map(|&cell| GameIntent::ApplyMove { cell }).collect()
}

/// Store whose every operation fails.
pub struct FailingStore;

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Backend("storage unavailable".to_string()))
    }

    async fn save(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend("storage unavailable".to_string()))
    }

    async fn remove(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend("storage unavailable".to_string()))
    }
}

/// Event collector for testing event emissions
#[derive(Clone, Default)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_events(&self) -> Vec<GameEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn has_event_type(&self, check_fn: impl Fn(&GameEvent) -> bool) -> bool {
        self.events.lock().unwrap().iter().any(check_fn)
    }
}

impl GameEventHandler for EventCollector {
    fn handle_event(&mut self, event: GameEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Drives the pure reducer through a sequence of intents.
pub fn run(state: TicTacToeState, intents: impl IntoIterator<Item = GameIntent>) -> TicTacToeState {
    intents
        .into_iter()
        .fold(state, |s, intent| game_core::reduce(&s, &intent).state)
}
