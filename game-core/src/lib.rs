pub mod engine;
pub mod game_events;
pub mod game_state;
pub mod leaderboard;
pub mod player_validation;
pub mod rules;
pub mod scoring;
pub mod store;

// Re-export main components
pub use engine::*;
pub use game_events::*;
pub use game_state::*;
pub use leaderboard::LEADERBOARD_KEY;
pub use player_validation::*;
pub use rules::*;
pub use scoring::*;
pub use store::*;
