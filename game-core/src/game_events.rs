use game_types::{Outcome, Player, Symbol};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    PlayersRegistered {
        players: Vec<Player>,
    },
    MoveApplied {
        cell: usize,
        symbol: Symbol,
    },
    RoundCompleted {
        round: u32,
        outcome: Outcome,
    },
    RoundStarted {
        round: u32,
    },
    GameCompleted {
        winner: Outcome,
        final_standings: Vec<Player>,
    },
    BoardReset,
    GameReset,
    LeaderboardCleared,
}

impl GameEvent {
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::PlayersRegistered { .. } => "players_registered",
            GameEvent::MoveApplied { .. } => "move_applied",
            GameEvent::RoundCompleted { .. } => "round_completed",
            GameEvent::RoundStarted { .. } => "round_started",
            GameEvent::GameCompleted { .. } => "game_completed",
            GameEvent::BoardReset => "board_reset",
            GameEvent::GameReset => "game_reset",
            GameEvent::LeaderboardCleared => "leaderboard_cleared",
        }
    }
}

/// Event handler trait for processing game events
pub trait GameEventHandler: Send {
    fn handle_event(&mut self, event: GameEvent);
}

/// Simple event bus for distributing game events
pub struct GameEventBus {
    handlers: Vec<Box<dyn GameEventHandler>>,
}

impl GameEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn GameEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn publish(&mut self, event: GameEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(event.clone());
        }
    }
}

impl Default for GameEventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Forwards every event to `tracing`.
pub struct TracingEventHandler;

impl GameEventHandler for TracingEventHandler {
    fn handle_event(&mut self, event: GameEvent) {
        match &event {
            GameEvent::GameCompleted { winner, .. } => {
                let winner = winner.winner_name().unwrap_or("draw");
                tracing::info!(kind = event.name(), winner, "Game completed");
            }
            _ => tracing::debug!(kind = event.name(), ?event, "Game event"),
        }
    }
}
