//! PvP command - play a game against another human.

use reversi::game::input_source::HumanInput;
use reversi::game::renderer::TerminalRenderer;
use reversi::game::EngineConfig;
use structopt::StructOpt;

use super::util::run_game_loop;
use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {
    #[structopt(short, long, default_value = "8")]
    pub size: usize,
}

impl Command for PvpArgs {
    fn execute(self) {
        let config = EngineConfig::human_vs_human(self.size);
        run_game_loop(HumanInput, Box::new(TerminalRenderer::simple()), config);
    }
}
