//! Move generation implementation.
//!
//! Every vacant cell is tested with the rule engine's eight-direction check,
//! so one generation pass costs O(N²) cells × O(N) scan length × 8 directions.

use log::trace;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::board::{Board, Cell, Color, Square};
use crate::rules;

/// A list of squares that is optimized for small sizes.
pub type SquareList = SmallVec<[Square; 32]>;

/// Generates the legal placements for a player on a given board.
#[derive(Clone, Copy, Default, Debug)]
pub struct MoveGenerator;

impl MoveGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Legal placements for `player` in row-major order. The board is not
    /// modified.
    pub fn generate_moves(&self, board: &Board, player: Color) -> SquareList {
        board
            .squares()
            .filter(|&square| rules::is_legal(board, player, square))
            .collect()
    }

    /// Clears any stale candidate markers, then marks every legal placement
    /// for `player` as a candidate. Returns the number of candidates.
    ///
    /// Running this twice without an intervening move yields the same count.
    pub fn mark_candidates(&self, board: &mut Board, player: Color) -> usize {
        board.clear_candidates();

        let legal = self.generate_moves(board, player);
        for &square in legal.iter() {
            trace!("{} is a valid move for {}", square, player);
            board.set(square, Cell::Candidate);
        }
        legal.len()
    }

    /// Returns the legal-move count for `player` together with a copy of the
    /// board that has those moves marked as candidates.
    pub fn legal_moves(&self, board: &Board, player: Color) -> (usize, Board) {
        let mut marked = board.clone();
        let count = self.mark_candidates(&mut marked, player);
        (count, marked)
    }

    pub fn count_legal_moves(&self, board: &Board, player: Color) -> usize {
        self.legal_moves(board, player).0
    }

    pub fn has_legal_move(&self, board: &Board, player: Color) -> bool {
        board
            .squares()
            .any(|square| rules::is_legal(board, player, square))
    }

    /// Counts the leaf positions `depth` plies ahead of `board` with `player`
    /// to move. A forced pass uses up a ply, and a position in which neither
    /// side can move counts as a single leaf.
    pub fn count_positions(&self, depth: u8, board: &Board, player: Color) -> usize {
        if depth == 0 {
            return 1;
        }

        let next_player = player.opposite();
        let candidates = self.generate_moves(board, player);

        if candidates.is_empty() {
            if !self.has_legal_move(board, next_player) {
                return 1;
            }
            return self.count_positions(depth - 1, board, next_player);
        }

        candidates
            .iter()
            .map(|&square| {
                let mut child = board.without_candidates();
                rules::place(&mut child, player, square)
                    .expect("generated moves should be legal in position counting");
                self.count_positions(depth - 1, &child, next_player)
            })
            .sum()
    }

    /// Like [`count_positions`](Self::count_positions), but positions reached
    /// through different move orders are counted once.
    pub fn count_unique_positions(&self, depth: u8, board: &Board, player: Color) -> usize {
        let mut seen = FxHashSet::default();
        self.collect_positions(depth, &board.without_candidates(), player, &mut seen);
        seen.len()
    }

    fn collect_positions(
        &self,
        depth: u8,
        board: &Board,
        player: Color,
        seen: &mut FxHashSet<(Board, Color)>,
    ) {
        let next_player = player.opposite();
        let candidates = if depth == 0 {
            SquareList::new()
        } else {
            self.generate_moves(board, player)
        };

        if depth == 0 || (candidates.is_empty() && !self.has_legal_move(board, next_player)) {
            seen.insert((board.clone(), player));
            return;
        }

        if candidates.is_empty() {
            self.collect_positions(depth - 1, board, next_player, seen);
            return;
        }

        for &square in candidates.iter() {
            let mut child = board.clone();
            rules::place(&mut child, player, square)
                .expect("generated moves should be legal in position counting");
            self.collect_positions(depth - 1, &child, next_player, seen);
        }
    }
}
