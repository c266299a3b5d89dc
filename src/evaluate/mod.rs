use std::fmt;

use crate::board::{Board, Color};
use crate::move_generator::MoveGenerator;

pub mod weights;

pub use weights::{EvaluatorPreset, Weights};

pub type Score = i32;

/// Pre-search bounds. Every static evaluation lies strictly between them.
pub const MIN_SCORE: Score = Score::MIN;
pub const MAX_SCORE: Score = Score::MAX;

/// Scores a board from the perspective of `player`. Higher is better for
/// `player`.
pub trait Evaluator: Clone {
    fn evaluate(&self, board: &Board, player: Color) -> Score;
}

impl<F> Evaluator for F
where
    F: Fn(&Board, Color) -> Score + Clone,
{
    fn evaluate(&self, board: &Board, player: Color) -> Score {
        self(board, player)
    }
}

/// Discs held by `player` minus discs held by the opponent.
pub fn piece_difference(board: &Board, player: Color) -> Score {
    board.disc_count(player) as Score - board.disc_count(player.opposite()) as Score
}

/// +1 for each corner held by `player`, -1 for each held by the opponent.
pub fn corner_difference(board: &Board, player: Color) -> Score {
    board
        .corners()
        .iter()
        .map(|&corner| match board.get(corner).color() {
            Some(color) if color == player => 1,
            Some(_) => -1,
            None => 0,
        })
        .sum()
}

/// Legal-move count of `player` minus that of the opponent, both counted on
/// the current board. This is not a look-ahead: the opponent's mobility is
/// measured as if it were their turn right now.
pub fn mobility_difference(board: &Board, player: Color, move_generator: &MoveGenerator) -> Score {
    let (own, _) = move_generator.legal_moves(board, player);
    let (theirs, _) = move_generator.legal_moves(board, player.opposite());
    own as Score - theirs as Score
}

/// The composite heuristic, weighted by a [`Weights`] set.
#[derive(Clone, Debug)]
pub struct WeightedEvaluator {
    weights: Weights,
    move_generator: MoveGenerator,
}

impl Default for WeightedEvaluator {
    fn default() -> Self {
        Self::from_preset(EvaluatorPreset::default())
    }
}

impl WeightedEvaluator {
    pub fn new(weights: Weights) -> Self {
        Self {
            weights,
            move_generator: MoveGenerator::new(),
        }
    }

    pub fn from_preset(preset: EvaluatorPreset) -> Self {
        Self::new(preset.weights())
    }

    pub fn weights(&self) -> Weights {
        self.weights
    }
}

impl Evaluator for WeightedEvaluator {
    /// Terms saturate, and the result stays strictly inside the search bounds.
    fn evaluate(&self, board: &Board, player: Color) -> Score {
        let mut score = self.weights.pieces.saturating_mul(piece_difference(board, player));

        if self.weights.corners != 0 {
            let corners = corner_difference(board, player);
            score = score.saturating_add(self.weights.corners.saturating_mul(corners));
        }

        // Mobility is the expensive term, skip it when it carries no weight.
        if self.weights.mobility != 0 {
            let mobility = mobility_difference(board, player, &self.move_generator);
            score = score.saturating_add(self.weights.mobility.saturating_mul(mobility));
        }

        score.clamp(MIN_SCORE + 1, MAX_SCORE - 1)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Winner {
    Black,
    White,
    Tie,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let winner_str = match self {
            Winner::Black => "black",
            Winner::White => "white",
            Winner::Tie => "tie",
        };
        write!(f, "{}", winner_str)
    }
}

/// The final result of a game: the winner and both disc counts.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GameOutcome {
    pub winner: Winner,
    pub black: usize,
    pub white: usize,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner {
            Winner::Black => write!(f, "Black wins: {} to {}", self.black, self.white),
            Winner::White => write!(f, "White wins: {} to {}", self.white, self.black),
            Winner::Tie => write!(f, "Tie: {} to {}", self.black, self.white),
        }
    }
}

/// Compares disc counts. More discs wins; equal counts is a tie.
pub fn game_outcome(board: &Board) -> GameOutcome {
    let black = board.disc_count(Color::Black);
    let white = board.disc_count(Color::White);
    let winner = if black > white {
        Winner::Black
    } else if white > black {
        Winner::White
    } else {
        Winner::Tie
    };
    GameOutcome {
        winner,
        black,
        white,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reversi_position;

    #[test]
    fn test_starting_position_is_balanced() {
        let board = Board::starting_position();
        for color in Color::ALL {
            assert_eq!(piece_difference(&board, color), 0);
            assert_eq!(corner_difference(&board, color), 0);
            assert_eq!(
                mobility_difference(&board, color, &MoveGenerator::new()),
                0
            );
            assert_eq!(WeightedEvaluator::default().evaluate(&board, color), 0);
        }
    }

    #[test]
    fn test_piece_difference() {
        let board = reversi_position! {
            BBB.
            .WB.
            .BW.
            ....
        };
        assert_eq!(piece_difference(&board, Color::Black), 3);
        assert_eq!(piece_difference(&board, Color::White), -3);
    }

    #[test]
    fn test_corner_difference() {
        let board = reversi_position! {
            B..W
            .WB.
            .BW.
            B...
        };
        assert_eq!(corner_difference(&board, Color::Black), 1);
        assert_eq!(corner_difference(&board, Color::White), -1);
    }

    #[test]
    fn test_mobility_difference_uses_the_same_board() {
        let board = reversi_position! {
            ........
            ........
            ........
            ...WB...
            ...BBB..
            ........
            ........
            ........
        };
        let generator = MoveGenerator::new();
        let black_moves = generator.count_legal_moves(&board, Color::Black);
        let white_moves = generator.count_legal_moves(&board, Color::White);
        assert_eq!(black_moves, 3);
        assert_eq!(white_moves, 3);
        assert_eq!(
            mobility_difference(&board, Color::Black, &generator),
            black_moves as Score - white_moves as Score
        );
    }

    #[test]
    fn test_weighted_evaluation() {
        let board = reversi_position! {
            B..W
            .WB.
            .BW.
            B..B
        };
        let generator = MoveGenerator::new();
        let weights = Weights::new(10, 3, 2);
        let evaluator = WeightedEvaluator::new(weights);
        let expected = 10 * corner_difference(&board, Color::Black)
            + 3 * mobility_difference(&board, Color::Black, &generator)
            + 2 * piece_difference(&board, Color::Black);
        assert_eq!(evaluator.evaluate(&board, Color::Black), expected);
        assert_eq!(evaluator.evaluate(&board, Color::White), -expected);
    }

    #[test]
    fn test_extreme_weights_stay_inside_the_search_bounds() {
        let board = reversi_position! {
            B..W
            .WB.
            .BW.
            B..B
        };
        let evaluator = WeightedEvaluator::new(Weights::new(Score::MAX, 0, Score::MAX));
        assert_eq!(evaluator.evaluate(&board, Color::Black), MAX_SCORE - 1);
        assert_eq!(evaluator.evaluate(&board, Color::White), MIN_SCORE + 1);

        let evaluator = WeightedEvaluator::new(Weights::new(Score::MIN, 0, 0));
        assert_eq!(evaluator.evaluate(&board, Color::Black), MIN_SCORE + 1);
    }

    #[test]
    fn test_weak_evaluator_counts_discs() {
        let board = reversi_position! {
            B..W
            .WB.
            .BW.
            B..B
        };
        let evaluator = WeightedEvaluator::from_preset(EvaluatorPreset::Weak);
        assert_eq!(evaluator.evaluate(&board, Color::Black), 2);
    }

    #[test]
    fn test_closures_are_evaluators() {
        let constant = |_: &Board, _: Color| 42;
        assert_eq!(constant.evaluate(&Board::starting_position(), Color::Black), 42);
    }

    #[test]
    fn test_game_outcome() {
        let black_wins = reversi_position! {
            BBBB
            BWWB
            BBBB
            BBBB
        };
        assert_eq!(
            game_outcome(&black_wins),
            GameOutcome {
                winner: Winner::Black,
                black: 14,
                white: 2
            }
        );

        let tie = reversi_position! {
            BBWW
            BBWW
            BBWW
            BBWW
        };
        assert_eq!(game_outcome(&tie).winner, Winner::Tie);
        assert_eq!(game_outcome(&tie).to_string(), "Tie: 8 to 8");
    }
}
