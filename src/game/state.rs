use log::debug;

use crate::board::{Board, BoardError, Color, Square};
use crate::evaluate::{game_outcome, GameOutcome};
use crate::move_generator::MoveGenerator;
use crate::rules::{self, RuleError};

/// Result of handing the turn over after a placement.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Advance {
    /// The game goes on. `passed` names the side that had to skip its turn,
    /// if any.
    Ready { passed: Option<Color> },
    /// Neither side can place a disc.
    GameOver(GameOutcome),
}

/// The board, the side to move and how many placements that side has.
///
/// The board always carries the candidate markers of `current_player` while
/// the game is in progress.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    current_player: Color,
    legal_move_count: usize,
    move_generator: MoveGenerator,
}

impl GameState {
    /// A fresh game on a `size` x `size` board, black to move.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let board = Board::with_size(size)?;
        Ok(Self::from_position(board, Color::Black))
    }

    /// A game continuing from an arbitrary position with `player` to move.
    pub fn from_position(board: Board, player: Color) -> Self {
        let move_generator = MoveGenerator::new();
        let mut board = board;
        let legal_move_count = move_generator.mark_candidates(&mut board, player);
        Self {
            board,
            current_player: player,
            legal_move_count,
            move_generator,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn legal_move_count(&self) -> usize {
        self.legal_move_count
    }

    pub fn disc_count(&self, color: Color) -> usize {
        self.board.disc_count(color)
    }

    pub fn is_candidate(&self, square: Square) -> bool {
        square.is_within(self.board.size()) && self.board.get(square).is_candidate()
    }

    /// Places a disc for the side to move. The turn is not handed over; call
    /// [`GameState::advance_turn`] afterwards.
    pub fn apply_move(&mut self, square: Square) -> Result<usize, RuleError> {
        rules::place(&mut self.board, self.current_player, square)
    }

    /// Hands the turn to the opponent and recomputes their candidates.
    ///
    /// When the opponent has no placement the turn comes straight back to the
    /// side that just moved; when neither side has one the game is over and
    /// the board is left without candidate markers.
    pub fn advance_turn(&mut self) -> Advance {
        self.current_player = self.current_player.opposite();
        self.legal_move_count = self
            .move_generator
            .mark_candidates(&mut self.board, self.current_player);
        debug!(
            "{} has {} legal moves",
            self.current_player, self.legal_move_count
        );

        if self.legal_move_count > 0 {
            return Advance::Ready { passed: None };
        }

        let passed = self.current_player;
        if !self
            .move_generator
            .has_legal_move(&self.board, passed.opposite())
        {
            self.board.clear_candidates();
            return Advance::GameOver(game_outcome(&self.board));
        }

        self.current_player = passed.opposite();
        self.legal_move_count = self
            .move_generator
            .mark_candidates(&mut self.board, self.current_player);
        debug!(
            "{} passes, {} has {} legal moves",
            passed, self.current_player, self.legal_move_count
        );
        Advance::Ready {
            passed: Some(passed),
        }
    }
}
