use log::{debug, info};
use thiserror::Error;

use crate::alpha_beta_searcher::{AlphaBetaSearcher, SearchError, SearchStats};
use crate::board::{Board, BoardError, Color, Square};
use crate::evaluate::{GameOutcome, WeightedEvaluator};
use crate::reversi_move::Move;
use crate::rules::RuleError;

use super::config::EngineConfig;
use super::observer::{GameObserver, NoopObserver, TurnStatus};
use super::state::{Advance, GameState};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid cell selection: ({row}, {col}) is not a legal placement")]
    InvalidCellSelection { row: usize, col: usize },
    #[error("it is not a human player's turn")]
    NotHumanTurn,
    #[error("board error: {0}")]
    Board(#[from] BoardError),
    #[error("rule error: {0}")]
    Rule(#[from] RuleError),
    #[error("search error: {0}")]
    Search(#[from] SearchError),
}

/// Runs games between any combination of human and computer players.
///
/// Human moves come in through [`Engine::attempt_move`]; computer moves are
/// searched and played by the engine itself until a human is to move again
/// or the game ends. A finished game is reported to the observer and replaced
/// by a fresh one, whose computer moves only begin on [`Engine::start`].
pub struct Engine {
    config: EngineConfig,
    state: GameState,
    status: TurnStatus,
    searchers: [AlphaBetaSearcher<WeightedEvaluator>; 2],
    observer: Box<dyn GameObserver>,
    last_outcome: Option<GameOutcome>,
    games_completed: usize,
}

impl Engine {
    /// Fails fast on an invalid board size, before any game state exists.
    pub fn with_config(config: EngineConfig) -> Result<Self, EngineError> {
        let state = GameState::new(config.board_size)?;
        Ok(Self::from_state(config, state))
    }

    /// Continues from an arbitrary position. If `player` has no placement
    /// the opponent moves first; a finished position is rejected.
    pub fn from_position(
        config: EngineConfig,
        board: Board,
        player: Color,
    ) -> Result<Self, EngineError> {
        let config = EngineConfig {
            board_size: board.size(),
            ..config
        };
        let mut state = GameState::from_position(board, player);
        if state.legal_move_count() == 0 {
            if let Advance::GameOver(_) = state.advance_turn() {
                return Err(SearchError::NoAvailableMoves.into());
            }
        }
        Ok(Self::from_state(config, state))
    }

    fn from_state(config: EngineConfig, state: GameState) -> Self {
        let searchers = Color::ALL.map(|color| {
            let player = config.player(color);
            AlphaBetaSearcher::new(
                player.effective_depth(),
                WeightedEvaluator::from_preset(player.evaluator),
            )
        });

        let mut engine = Self {
            config,
            state,
            status: TurnStatus::GameOver,
            searchers,
            observer: Box::new(NoopObserver),
            last_outcome: None,
            games_completed: 0,
        };
        engine.status = engine.status_for_current_player();
        engine
    }

    pub fn set_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observer = observer;
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The live board, candidates of the side to move included.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// A copy of the board for drawing. Candidate markers are kept only while
    /// a human is to move.
    pub fn snapshot(&self) -> Board {
        if self.status == TurnStatus::AwaitingHumanMove {
            self.state.board().clone()
        } else {
            self.state.board().without_candidates()
        }
    }

    pub fn status(&self) -> TurnStatus {
        self.status
    }

    pub fn current_player(&self) -> Color {
        self.state.current_player()
    }

    pub fn legal_move_count(&self) -> usize {
        self.state.legal_move_count()
    }

    pub fn disc_count(&self, color: Color) -> usize {
        self.state.disc_count(color)
    }

    pub fn last_outcome(&self) -> Option<GameOutcome> {
        self.last_outcome
    }

    pub fn games_completed(&self) -> usize {
        self.games_completed
    }

    pub fn search_stats(&self, color: Color) -> SearchStats {
        self.searchers[color as usize].stats()
    }

    /// Reports the current position and plays computer moves until a human
    /// is to move or the game is over.
    pub fn start(&mut self) -> Result<(), EngineError> {
        info!(
            "Starting a {}x{} game: black ({}) against white ({})",
            self.config.board_size,
            self.config.board_size,
            self.config.black.controller,
            self.config.white.controller
        );
        self.notify_board_changed();
        self.play_computer_turns()
    }

    /// Submits a human placement. Returns false, without changing anything,
    /// when the cell is not a candidate or no human is to move.
    pub fn attempt_move(&mut self, row: usize, col: usize) -> bool {
        match self.try_move(row, col) {
            Ok(()) => true,
            Err(error) => {
                debug!("Rejected move at ({}, {}): {}", row, col, error);
                false
            }
        }
    }

    /// Like [`Engine::attempt_move`], with the reason for a rejection.
    pub fn try_move(&mut self, row: usize, col: usize) -> Result<(), EngineError> {
        if self.status != TurnStatus::AwaitingHumanMove {
            return Err(EngineError::NotHumanTurn);
        }

        let square = Square::new(row, col);
        if !self.state.is_candidate(square) {
            return Err(EngineError::InvalidCellSelection { row, col });
        }

        self.play(square)?;
        self.play_computer_turns()
    }

    /// Searches the current position with the side to move's depth and
    /// evaluator. Used for computer moves and for hints to human players.
    pub fn best_move_for_current_player(&mut self) -> Result<Move, EngineError> {
        let player = self.state.current_player();
        let searcher = &mut self.searchers[player as usize];
        let best = searcher.search(self.state.board(), player)?;
        let stats = searcher.stats();

        debug!(
            "{} searched {} positions at depth {}, best: {}",
            player, stats.positions_searched, stats.depth, best
        );
        self.observer.on_search(player, &stats);
        Ok(best)
    }

    fn play_computer_turns(&mut self) -> Result<(), EngineError> {
        let games_completed = self.games_completed;
        while self.status == TurnStatus::AwaitingAiMove && self.games_completed == games_completed {
            let best = self.best_move_for_current_player()?;
            let square = best.square().ok_or(SearchError::NoAvailableMoves)?;
            self.play(square)?;
        }
        Ok(())
    }

    fn play(&mut self, square: Square) -> Result<(), EngineError> {
        let player = self.state.current_player();
        let flipped = self.state.apply_move(square)?;
        info!("{} plays {} ({} flipped)", player, square, flipped);
        self.observer.on_move(player, square, flipped);
        self.finish_turn()
    }

    fn finish_turn(&mut self) -> Result<(), EngineError> {
        match self.state.advance_turn() {
            Advance::Ready { passed } => {
                if let Some(color) = passed {
                    info!("{} has no legal moves and passes", color);
                    self.observer.on_pass(color);
                }
                self.status = self.status_for_current_player();
                self.notify_board_changed();
            }
            Advance::GameOver(outcome) => {
                info!("Game over. {}", outcome);
                self.status = TurnStatus::GameOver;
                self.notify_board_changed();
                self.observer.on_game_over(outcome);

                self.last_outcome = Some(outcome);
                self.games_completed += 1;
                self.state = GameState::new(self.config.board_size)?;
                self.status = self.status_for_current_player();
            }
        }
        Ok(())
    }

    fn status_for_current_player(&self) -> TurnStatus {
        if self.state.legal_move_count() == 0 {
            TurnStatus::GameOver
        } else if self.config.player(self.state.current_player()).is_computer() {
            TurnStatus::AwaitingAiMove
        } else {
            TurnStatus::AwaitingHumanMove
        }
    }

    fn notify_board_changed(&mut self) {
        let snapshot = self.snapshot();
        self.observer
            .on_board_changed(&snapshot, self.status, self.state.current_player());
    }
}
