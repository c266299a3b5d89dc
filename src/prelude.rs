//! Common types re-exported for convenience.

pub use crate::alpha_beta_searcher::{AlphaBetaSearcher, SearchError, SearchStats};
pub use crate::board::{Board, BoardError, Cell, Color, Square};
pub use crate::evaluate::{
    EvaluatorPreset, Evaluator, GameOutcome, Score, WeightedEvaluator, Weights, Winner,
};
pub use crate::game::{Engine, EngineConfig, EngineError, GameObserver, PlayerConfig, TurnStatus};
pub use crate::move_generator::MoveGenerator;
pub use crate::reversi_move::Move;
