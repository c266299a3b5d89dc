//! Play command - play a game against the computer.

use reversi::board::Color;
use reversi::evaluate::EvaluatorPreset;
use reversi::game::input_source::HumanInput;
use reversi::game::renderer::TerminalRenderer;
use reversi::game::EngineConfig;
use structopt::StructOpt;

use super::util::run_game_loop;
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "5")]
    pub depth: u8,
    #[structopt(short = "c", long = "color", default_value = "random")]
    pub color: Color,
    #[structopt(short, long, default_value = "strong")]
    pub evaluator: EvaluatorPreset,
    #[structopt(short, long, default_value = "8")]
    pub size: usize,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config =
            EngineConfig::human_vs_computer(self.size, self.color, self.depth, self.evaluator);
        run_game_loop(
            HumanInput,
            Box::new(TerminalRenderer::new(true, None)),
            config,
        );
    }
}
