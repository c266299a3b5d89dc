use std::fmt;

use crate::board::Square;
use crate::evaluate::Score;

/// A placement chosen by the search, together with the score that ranked it.
///
/// A move without a square is the sentinel returned where no placement is
/// made: at the depth limit, where only the static evaluation is reported, and
/// at a node where the side to move has to pass.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Move {
    square: Option<Square>,
    score: Score,
}

impl Move {
    pub fn new(square: Square, score: Score) -> Self {
        Self {
            square: Some(square),
            score,
        }
    }

    /// A sentinel move that carries only a score.
    pub fn scored(score: Score) -> Self {
        Self {
            square: None,
            score,
        }
    }

    pub fn square(&self) -> Option<Square> {
        self.square
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn is_sentinel(&self) -> bool {
        self.square.is_none()
    }

    pub fn row(&self) -> Option<usize> {
        self.square.map(|square| square.row)
    }

    pub fn col(&self) -> Option<usize> {
        self.square.map(|square| square.col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.square {
            Some(square) => write!(f, "{} (score: {})", square, self.score),
            None => write!(f, "-- (score: {})", self.score),
        }
    }
}
