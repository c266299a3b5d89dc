//! Watch command - watch the computer play against itself.

use std::time::Duration;

use reversi::evaluate::EvaluatorPreset;
use reversi::game::input_source::HumanInput;
use reversi::game::renderer::TerminalRenderer;
use reversi::game::{EngineConfig, PlayerConfig};
use structopt::StructOpt;

use super::util::run_game_loop;
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "8")]
    pub size: usize,
    #[structopt(long = "black-depth", default_value = "1")]
    pub black_depth: u8,
    #[structopt(long = "white-depth", default_value = "5")]
    pub white_depth: u8,
    #[structopt(long = "black-evaluator", default_value = "strong")]
    pub black_evaluator: EvaluatorPreset,
    #[structopt(long = "white-evaluator", default_value = "strong")]
    pub white_evaluator: EvaluatorPreset,
    #[structopt(
        long = "delay",
        default_value = "500",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = EngineConfig::computer_vs_computer(
            self.size,
            PlayerConfig::computer(self.black_depth, self.black_evaluator),
            PlayerConfig::computer(self.white_depth, self.white_evaluator),
        );
        let delay = Some(Duration::from_millis(self.delay_ms)).filter(|d| !d.is_zero());
        // Nobody is asked for input while both sides are computers.
        run_game_loop(HumanInput, Box::new(TerminalRenderer::new(true, delay)), config);
    }
}
