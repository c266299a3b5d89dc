//! Count positions command - count possible positions at a given depth.

use reversi::game::position_counter::{run_count_positions, CountPositionsStrategy};
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct CountPositionsArgs {
    #[structopt(short, long, default_value = "6")]
    pub depth: u8,
    #[structopt(long, default_value = "8")]
    pub size: usize,
    #[structopt(long, default_value = "all")]
    pub strategy: CountPositionsStrategy,
}

impl Command for CountPositionsArgs {
    fn execute(self) {
        if let Err(error) = run_count_positions(self.depth, self.size, self.strategy) {
            eprintln!("Invalid board: {}", error);
            std::process::exit(1);
        }
    }
}
