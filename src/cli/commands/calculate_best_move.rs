//! Calculate best move command - determine the best move from a position.

use reversi::alpha_beta_searcher::{AlphaBetaSearcher, SearchError};
use reversi::board::{Board, Color};
use reversi::evaluate::{EvaluatorPreset, WeightedEvaluator};
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(short, long, default_value = "5")]
    pub depth: u8,
    #[structopt(short = "c", long = "color", default_value = "black")]
    pub color: Color,
    #[structopt(short, long, default_value = "strong")]
    pub evaluator: EvaluatorPreset,
    #[structopt(short, long = "position")]
    pub position: Board,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        let evaluator = WeightedEvaluator::from_preset(self.evaluator);
        let mut searcher = AlphaBetaSearcher::new(self.depth.max(1), evaluator);

        match searcher.search(&self.position, self.color) {
            Ok(best_move) => println!("{}", best_move),
            Err(SearchError::NoAvailableMoves) => {
                eprintln!("There are no valid moves in the given position.")
            }
        }
    }
}
