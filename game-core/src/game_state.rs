//! The tic-tac-toe state machine.
//!
//! `reduce` is a pure function from the current state and one intent to the
//! next state. Storage is never touched here: a leaderboard change is
//! reported as a [`StoreEffect`] for the caller to carry out.

use game_types::{
    Board, GameIntent, GameSession, GameStatus, LeaderboardEntry, Outcome, Player, Symbol,
    TicTacToeState,
};
use tracing::debug;

use crate::leaderboard::commit_scores;
use crate::rules::{check_winner, is_draw};
use crate::scoring::{ROUNDS_PER_GAME, ScoringEngine};
use crate::GameEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEffect {
    /// Persist the full leaderboard under the leaderboard key.
    Save(Vec<LeaderboardEntry>),
    /// Delete the persisted leaderboard record.
    Remove,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: TicTacToeState,
    pub effect: Option<StoreEffect>,
    pub events: Vec<GameEvent>,
}

impl Transition {
    fn unchanged(state: &TicTacToeState) -> Self {
        Self {
            state: state.clone(),
            effect: None,
            events: Vec::new(),
        }
    }

    /// True when the intent was ignored because a precondition failed.
    pub fn is_noop(&self) -> bool {
        self.effect.is_none() && self.events.is_empty()
    }
}

/// Apply one intent. Intents whose preconditions do not hold are silent
/// no-ops: the returned state equals the input and carries no effect.
pub fn reduce(state: &TicTacToeState, intent: &GameIntent) -> Transition {
    let transition = match intent {
        GameIntent::RegisterPlayers { player1, player2 } => {
            register_players(state, player1, player2)
        }
        GameIntent::ApplyMove { cell } => apply_move(state, *cell),
        GameIntent::AdvanceRound => advance_round(state),
        GameIntent::ResetBoard => reset_board(state),
        GameIntent::ResetGame => reset_game(state),
        GameIntent::ClearLeaderboard => clear_leaderboard(state),
    };

    if transition.is_noop() {
        debug!(intent = intent.name(), status = ?state.session.status, "Intent ignored");
    } else {
        debug!(
            intent = intent.name(),
            from = ?state.session.status,
            to = ?transition.state.session.status,
            "Intent applied"
        );
    }

    transition
}

fn register_players(state: &TicTacToeState, player1: &str, player2: &str) -> Transition {
    if state.session.status != GameStatus::Setup {
        return Transition::unchanged(state);
    }

    let players = vec![Player::new(player1, Symbol::X), Player::new(player2, Symbol::O)];
    let session = GameSession {
        players: players.clone(),
        status: GameStatus::Playing,
        ..state.session.clone()
    };

    Transition {
        state: TicTacToeState {
            session,
            leaderboard: state.leaderboard.clone(),
        },
        effect: None,
        events: vec![GameEvent::PlayersRegistered { players }],
    }
}

fn apply_move(state: &TicTacToeState, cell: usize) -> Transition {
    let current = &state.session;
    if current.status != GameStatus::Playing
        || current.players.len() != 2
        || !current.board.is_empty_at(cell)
    {
        return Transition::unchanged(state);
    }

    let Some(symbol) = current.current_player().map(|player| player.symbol) else {
        return Transition::unchanged(state);
    };

    let mut session = current.clone();
    let mover = session.current_player_index;
    session.board.place(cell, symbol);

    let mut events = vec![GameEvent::MoveApplied { cell, symbol }];

    if check_winner(&session.board).is_some() {
        ScoringEngine::award_round(&mut session.players, mover);
        let outcome = Outcome::winner(session.players[mover].name.clone());
        session.round_winner = Some(outcome.clone());
        session.status = GameStatus::RoundOver;
        events.push(GameEvent::RoundCompleted {
            round: session.current_round,
            outcome,
        });
    } else if is_draw(&session.board) {
        session.round_winner = Some(Outcome::Draw);
        session.status = GameStatus::RoundOver;
        events.push(GameEvent::RoundCompleted {
            round: session.current_round,
            outcome: Outcome::Draw,
        });
    } else {
        session.current_player_index = 1 - mover;
    }

    Transition {
        state: TicTacToeState {
            session,
            leaderboard: state.leaderboard.clone(),
        },
        effect: None,
        events,
    }
}

fn advance_round(state: &TicTacToeState) -> Transition {
    if state.session.status != GameStatus::RoundOver {
        return Transition::unchanged(state);
    }

    let mut session = state.session.clone();

    if session.current_round < ROUNDS_PER_GAME {
        session.current_round += 1;
        clear_round(&mut session);
        session.status = GameStatus::Playing;

        if !ScoringEngine::is_clinched(&session.players) {
            let round = session.current_round;
            return Transition {
                state: TicTacToeState {
                    session,
                    leaderboard: state.leaderboard.clone(),
                },
                effect: None,
                events: vec![GameEvent::RoundStarted { round }],
            };
        }
    }

    finish_game(session, &state.leaderboard)
}

/// Decide the winner and fold the scores into the leaderboard.
fn finish_game(mut session: GameSession, leaderboard: &[LeaderboardEntry]) -> Transition {
    let winner = ScoringEngine::decide_match(&session.players);
    session.status = GameStatus::GameOver;
    session.winner = Some(winner.clone());

    let leaderboard = commit_scores(leaderboard, &session.players);
    let final_standings = ScoringEngine::final_standings(&session.players);

    Transition {
        state: TicTacToeState {
            session,
            leaderboard: leaderboard.clone(),
        },
        effect: Some(StoreEffect::Save(leaderboard)),
        events: vec![GameEvent::GameCompleted {
            winner,
            final_standings,
        }],
    }
}

fn reset_board(state: &TicTacToeState) -> Transition {
    let mut session = state.session.clone();
    clear_round(&mut session);
    if session.status == GameStatus::RoundOver {
        session.status = GameStatus::Playing;
    }

    Transition {
        state: TicTacToeState {
            session,
            leaderboard: state.leaderboard.clone(),
        },
        effect: None,
        events: vec![GameEvent::BoardReset],
    }
}

fn reset_game(state: &TicTacToeState) -> Transition {
    Transition {
        state: TicTacToeState {
            session: GameSession::default(),
            leaderboard: state.leaderboard.clone(),
        },
        effect: None,
        events: vec![GameEvent::GameReset],
    }
}

fn clear_leaderboard(state: &TicTacToeState) -> Transition {
    Transition {
        state: TicTacToeState {
            session: state.session.clone(),
            leaderboard: Vec::new(),
        },
        effect: Some(StoreEffect::Remove),
        events: vec![GameEvent::LeaderboardCleared],
    }
}

fn clear_round(session: &mut GameSession) {
    session.board = Board::new();
    session.current_player_index = 0;
    session.round_winner = None;
}
