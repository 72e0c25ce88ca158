use game_types::{GameIntent, LeaderboardEntry, TicTacToeState};
use tracing::{info, warn};

use crate::game_state::{reduce, StoreEffect};
use crate::leaderboard::{self, LEADERBOARD_KEY};
use crate::store::{KeyValueStore, StoreError};
use crate::{GameEventBus, GameEventHandler};

/// Owns the game state and the durable store behind it.
///
/// Storage is best-effort: a failed save or remove is logged and the game
/// carries on with its in-memory state.
pub struct TicTacToe<S> {
    state: TicTacToeState,
    store: S,
    key: String,
    event_bus: GameEventBus,
}

impl<S: KeyValueStore> TicTacToe<S> {
    /// Load the leaderboard from `store` under the default key.
    pub async fn open(store: S) -> Self {
        Self::open_with_key(store, LEADERBOARD_KEY).await
    }

    pub async fn open_with_key(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let leaderboard = match load_leaderboard(&store, &key).await {
            Ok(entries) => {
                info!(key = %key, entries = entries.len(), "Loaded leaderboard");
                entries
            }
            Err(err) => {
                warn!(key = %key, error = %err, "Failed to load leaderboard, starting empty");
                Vec::new()
            }
        };

        Self {
            state: TicTacToeState::with_leaderboard(leaderboard),
            store,
            key,
            event_bus: GameEventBus::new(),
        }
    }

    pub fn state(&self) -> &TicTacToeState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add_handler(&mut self, handler: Box<dyn GameEventHandler>) {
        self.event_bus.add_handler(handler);
    }

    /// Apply one intent and return the resulting state.
    pub async fn dispatch(&mut self, intent: GameIntent) -> &TicTacToeState {
        let transition = reduce(&self.state, &intent);
        self.state = transition.state;

        if let Some(effect) = transition.effect {
            apply_effect(&self.store, &self.key, effect).await;
        }

        for event in transition.events {
            self.event_bus.publish(event);
        }

        &self.state
    }
}

async fn apply_effect<S: KeyValueStore>(store: &S, key: &str, effect: StoreEffect) {
    let result = match &effect {
        StoreEffect::Save(entries) => save_leaderboard(store, key, entries).await,
        StoreEffect::Remove => store.remove(key).await,
    };

    if let Err(err) = result {
        warn!(key = %key, ?effect, error = %err, "Leaderboard storage failed");
    }
}

async fn load_leaderboard<S: KeyValueStore>(
    store: &S,
    key: &str,
) -> Result<Vec<LeaderboardEntry>, StoreError> {
    match store.load(key).await? {
        Some(blob) => Ok(leaderboard::normalize(leaderboard::decode(&blob)?)),
        None => Ok(Vec::new()),
    }
}

async fn save_leaderboard<S: KeyValueStore>(
    store: &S,
    key: &str,
    entries: &[LeaderboardEntry],
) -> Result<(), StoreError> {
    let blob = leaderboard::encode(entries)?;
    store.save(key, &blob).await
}
