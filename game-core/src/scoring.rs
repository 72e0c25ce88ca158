use game_types::{Outcome, Player};

/// Points for the player who completes a line.
pub const WIN_POINTS: u32 = 2;
/// Participation point for the player who lost the round.
pub const LOSS_POINTS: u32 = 1;
/// Rounds in a full game.
pub const ROUNDS_PER_GAME: u32 = 5;
/// Round wins that decide the game before the last round.
pub const ROUND_WINS_TO_CLINCH: u32 = 3;

pub struct ScoringEngine;

impl ScoringEngine {
    /// Credit a won round: the winner gets the win points and a round win,
    /// the other player gets the participation point. Draws award nothing,
    /// so there is no draw counterpart to this function.
    pub fn award_round(players: &mut [Player], winner_index: usize) {
        let loser_index = 1 - winner_index;

        let winner = &mut players[winner_index];
        winner.score = winner.score.saturating_add(WIN_POINTS);
        winner.round_wins += 1;

        let loser = &mut players[loser_index];
        loser.score = loser.score.saturating_add(LOSS_POINTS);
    }

    /// True once either player can no longer be caught.
    pub fn is_clinched(players: &[Player]) -> bool {
        players.iter().any(|p| p.round_wins >= ROUND_WINS_TO_CLINCH)
    }

    /// Strictly more round wins takes the game; equal counts are a draw.
    pub fn decide_match(players: &[Player]) -> Outcome {
        match (players.first(), players.get(1)) {
            (Some(a), Some(b)) if a.round_wins > b.round_wins => Outcome::winner(a.name.clone()),
            (Some(a), Some(b)) if b.round_wins > a.round_wins => Outcome::winner(b.name.clone()),
            _ => Outcome::Draw,
        }
    }

    /// Players ordered by score, highest first, for the final results screen.
    pub fn final_standings(players: &[Player]) -> Vec<Player> {
        let mut standings = players.to_vec();
        standings.sort_by(|a, b| b.score.cmp(&a.score));
        standings
    }
}
