//! Alpha-beta search algorithm implementation.
//!
//! # Core Algorithm
//!
//! Minimax over the tree of legal continuations. Depth is counted in plies
//! upwards from the root, and the search bottoms out at the configured depth
//! with a static evaluation from the root player's point of view. Plies
//! alternate between maximizing (the root player's turns) and minimizing (the
//! opponent's turns).
//!
//! Alpha-beta pruning maintains a window [alpha, beta]: alpha is the best score
//! the maximizer can already guarantee, beta the best the minimizer can. Once
//! `beta <= alpha` at a node, its remaining children cannot change the result
//! and are skipped. Pruning changes how many positions are visited, never the
//! score returned at the root.
//!
//! # Children
//!
//! Every child is an independently owned copy of its parent board with one
//! candidate placement applied and the candidates of the next mover marked.
//! Children are materialized one at a time, so a pruned sibling is never
//! copied at all.
//!
//! # Ordering
//!
//! Children are visited in row-major order and a child only replaces the
//! running best on a strictly better score, so among equally scored moves the
//! first one found is kept.
//!
//! # Passing
//!
//! When the side to move has no candidates but the opponent does, the node
//! passes: the ply is spent, the same position is searched with the opponent
//! to move. When neither side can move the position is terminal and is
//! evaluated statically.

use std::time::Instant;

use log::{debug, trace};

use crate::board::{Board, Color};
use crate::evaluate::{Evaluator, Score, WeightedEvaluator, MAX_SCORE, MIN_SCORE};
use crate::move_generator::{MoveGenerator, SquareList};
use crate::reversi_move::Move;
use crate::rules;

use super::{SearchError, SearchStats};

pub struct AlphaBetaSearcher<E: Evaluator = WeightedEvaluator> {
    search_depth: u8,
    evaluator: E,
    move_generator: MoveGenerator,
    searched_position_count: usize,
    termination_count: usize,
    last_score: Option<Score>,
    last_search_duration: Option<std::time::Duration>,
}

impl<E: Evaluator> AlphaBetaSearcher<E> {
    pub fn new(search_depth: u8, evaluator: E) -> Self {
        Self {
            search_depth,
            evaluator,
            move_generator: MoveGenerator::new(),
            searched_position_count: 0,
            termination_count: 0,
            last_score: None,
            last_search_duration: None,
        }
    }

    pub fn search_depth(&self) -> u8 {
        self.search_depth
    }

    pub fn set_search_depth(&mut self, search_depth: u8) {
        self.search_depth = search_depth;
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    pub fn searched_position_count(&self) -> usize {
        self.searched_position_count
    }

    pub fn termination_count(&self) -> usize {
        self.termination_count
    }

    pub fn last_score(&self) -> Option<Score> {
        self.last_score
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats {
            positions_searched: self.searched_position_count,
            termination_count: self.termination_count,
            depth: self.search_depth,
            last_score: self.last_score,
            last_search_duration: self.last_search_duration,
        }
    }

    pub fn reset_stats(&mut self) {
        self.searched_position_count = 0;
        self.termination_count = 0;
    }

    /// Searches for the best placement for `player`.
    ///
    /// The candidates for `player` are recomputed on a private copy of the
    /// board, so any markers already on `board` are ignored. With a search
    /// depth of zero the returned move is the sentinel carrying the static
    /// evaluation of `board`.
    pub fn search(&mut self, board: &Board, player: Color) -> Result<Move, SearchError> {
        self.reset_stats();

        let (candidate_count, root) = self.move_generator.legal_moves(board, player);
        if candidate_count == 0 {
            return Err(SearchError::NoAvailableMoves);
        }

        let started = Instant::now();
        let best = self.best_move(&root, player, 0, MIN_SCORE, MAX_SCORE, true);
        let duration = started.elapsed();

        self.last_score = Some(best.score());
        self.last_search_duration = Some(duration);

        debug!(
            "Search for {} at depth {}: {} (positions searched: {}, cutoffs: {}, took {:?})",
            player,
            self.search_depth,
            best,
            self.searched_position_count,
            self.termination_count,
            duration
        );

        Ok(best)
    }

    /// Minimax with alpha-beta pruning from a single node.
    ///
    /// `board` must carry the candidate markers of the side to move at this
    /// ply: `player` when `is_max` is true, the opponent otherwise. Scores are
    /// always from `player`'s point of view. `depth` is the number of plies
    /// already played below the root; at the configured search depth the node
    /// returns a sentinel move carrying only its static evaluation.
    pub fn best_move(
        &mut self,
        board: &Board,
        player: Color,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        is_max: bool,
    ) -> Move {
        self.searched_position_count += 1;

        if depth >= self.search_depth {
            let score = self.evaluator.evaluate(board, player);
            trace!("Eval score ({}): {}", if is_max { "max" } else { "min" }, score);
            return Move::scored(score);
        }

        let mover = if is_max { player } else { player.opposite() };
        let candidates: SquareList = board.candidates().collect();

        if candidates.is_empty() {
            let (reply_count, passed) = self.move_generator.legal_moves(board, mover.opposite());
            if reply_count == 0 {
                return Move::scored(self.evaluator.evaluate(board, player));
            }
            let reply = self.best_move(&passed, player, depth + 1, alpha, beta, !is_max);
            return Move::scored(reply.score());
        }

        let mut best = Move::scored(if is_max { MIN_SCORE } else { MAX_SCORE });

        for &square in candidates.iter() {
            let mut child = board.without_candidates();
            if let Err(error) = rules::place(&mut child, mover, square) {
                debug!("Skipping stale candidate {}: {}", square, error);
                continue;
            }
            self.move_generator
                .mark_candidates(&mut child, mover.opposite());

            let reply = self.best_move(&child, player, depth + 1, alpha, beta, !is_max);

            if is_max {
                if reply.score() > best.score() || best.is_sentinel() {
                    best = Move::new(square, reply.score());
                }
                alpha = alpha.max(best.score());
            } else {
                if reply.score() < best.score() || best.is_sentinel() {
                    best = Move::new(square, reply.score());
                }
                beta = beta.min(best.score());
            }

            if beta <= alpha {
                self.termination_count += 1;
                break;
            }
        }

        best
    }
}
