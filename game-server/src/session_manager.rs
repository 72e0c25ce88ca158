use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use game_core::{leaderboard, validate_player_names, KeyValueStore, TicTacToe, TracingEventHandler};
use game_types::{GameError, GameIntent, GameStatus, RankedEntry, TicTacToeState};

/// The single local game session behind the HTTP surface.
///
/// Intents are applied one at a time under a lock, so there is exactly one
/// writer to the state tree.
pub struct SessionManager {
    engine: Mutex<TicTacToe<Arc<dyn KeyValueStore>>>,
}

impl SessionManager {
    pub async fn open(store: Arc<dyn KeyValueStore>, leaderboard_key: &str) -> Self {
        let mut engine = TicTacToe::open_with_key(store, leaderboard_key).await;
        engine.add_handler(Box::new(TracingEventHandler));

        Self {
            engine: Mutex::new(engine),
        }
    }

    pub async fn state(&self) -> TicTacToeState {
        self.engine.lock().await.state().clone()
    }

    /// Apply an intent on behalf of the presentation layer.
    ///
    /// Player names go through the setup-form validation first, but only
    /// while the session is in setup; outside it the intent is a no-op
    /// either way. Every other intent reaches the state machine unchanged.
    pub async fn dispatch(&self, intent: GameIntent) -> Result<TicTacToeState, GameError> {
        let mut engine = self.engine.lock().await;

        let intent = match intent {
            GameIntent::RegisterPlayers { player1, player2 }
                if engine.state().session.status == GameStatus::Setup =>
            {
                let (player1, player2) = validate_player_names(&player1, &player2)?;
                info!("Registering players {} and {}", player1, player2);
                GameIntent::RegisterPlayers { player1, player2 }
            }
            other => other,
        };

        Ok(engine.dispatch(intent).await.clone())
    }

    pub async fn leaderboard(&self) -> Vec<RankedEntry> {
        leaderboard::ranked(&self.engine.lock().await.state().leaderboard)
    }

    pub async fn clear_leaderboard(&self) -> Vec<RankedEntry> {
        let mut engine = self.engine.lock().await;
        let state = engine.dispatch(GameIntent::ClearLeaderboard).await;
        leaderboard::ranked(&state.leaderboard)
    }
}
