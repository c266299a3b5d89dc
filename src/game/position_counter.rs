use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::alpha_beta_searcher::AlphaBetaSearcher;
use crate::board::{Board, BoardError, Color};
use crate::evaluate::WeightedEvaluator;
use crate::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountPositionsStrategy {
    All,
    Unique,
    AlphaBeta,
}

impl FromStr for CountPositionsStrategy {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CountPositionsStrategy::All),
            "unique" => Ok(CountPositionsStrategy::Unique),
            "alpha-beta" => Ok(CountPositionsStrategy::AlphaBeta),
            _ => Err("invalid strategy; options are: all, unique, alpha-beta"),
        }
    }
}

/// Counts the positions reachable from the opening at one depth.
pub fn count_positions(depth: u8, board: &Board, strategy: CountPositionsStrategy) -> usize {
    let move_generator = MoveGenerator::new();
    match strategy {
        CountPositionsStrategy::All => move_generator.count_positions(depth, board, Color::Black),
        CountPositionsStrategy::Unique => {
            move_generator.count_unique_positions(depth, board, Color::Black)
        }
        CountPositionsStrategy::AlphaBeta => {
            let mut searcher = AlphaBetaSearcher::new(depth, WeightedEvaluator::default());
            match searcher.search(board, Color::Black) {
                Ok(_) => searcher.searched_position_count(),
                Err(_) => 0,
            }
        }
    }
}

pub fn run_count_positions(
    depth: u8,
    size: usize,
    strategy: CountPositionsStrategy,
) -> Result<(), BoardError> {
    let board = Board::with_size(size)?;

    let mut total_positions = 0;
    let mut total_duration = Duration::from_secs(0);

    for depth in 1..=depth {
        let started = Instant::now();
        let count = count_positions(depth, &board, strategy);
        let duration = started.elapsed();
        let positions_per_second = count as f64 / duration.as_secs_f64();

        total_positions += count;
        total_duration += duration;

        println!(
            "depth: {}, positions: {}, positions per second: {}",
            depth, count, positions_per_second
        );
    }

    println!(
        "total positions: {}, total duration: {:?}, positions per second: {}",
        total_positions,
        total_duration,
        total_positions as f64 / total_duration.as_secs_f64()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategies() {
        let board = Board::starting_position();
        assert_eq!(count_positions(3, &board, CountPositionsStrategy::All), 56);
        assert!(count_positions(3, &board, CountPositionsStrategy::Unique) <= 56);
        assert!(count_positions(3, &board, CountPositionsStrategy::AlphaBeta) > 0);
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!(
            CountPositionsStrategy::from_str("alpha-beta"),
            Ok(CountPositionsStrategy::AlphaBeta)
        );
        assert!(CountPositionsStrategy::from_str("some").is_err());
    }

    #[test]
    fn test_invalid_size() {
        assert!(run_count_positions(1, 5, CountPositionsStrategy::All).is_err());
    }
}
