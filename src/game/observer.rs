use std::fmt;

use crate::alpha_beta_searcher::SearchStats;
use crate::board::{Board, Color, Square};
use crate::evaluate::GameOutcome;

/// What the engine is waiting for.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TurnStatus {
    AwaitingHumanMove,
    AwaitingAiMove,
    GameOver,
}

impl fmt::Display for TurnStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status_str = match self {
            TurnStatus::AwaitingHumanMove => "awaiting human move",
            TurnStatus::AwaitingAiMove => "awaiting computer move",
            TurnStatus::GameOver => "game over",
        };
        write!(f, "{}", status_str)
    }
}

/// Receives the engine's state changes. Every method defaults to a no-op.
///
/// `on_board_changed` fires after every change to the board or the side to
/// move. Its snapshot carries candidate markers only while a human is to move.
/// The final position of a game is reported with [`TurnStatus::GameOver`]
/// right before `on_game_over`.
pub trait GameObserver {
    fn on_board_changed(&mut self, _snapshot: &Board, _status: TurnStatus, _current_player: Color) {}

    fn on_move(&mut self, _player: Color, _square: Square, _flipped: usize) {}

    fn on_search(&mut self, _player: Color, _stats: &SearchStats) {}

    fn on_pass(&mut self, _player: Color) {}

    fn on_game_over(&mut self, _outcome: GameOutcome) {}
}

pub struct NoopObserver;

impl GameObserver for NoopObserver {}
