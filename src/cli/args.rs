//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    calculate_best_move::CalculateBestMoveArgs, count_positions::CountPositionsArgs,
    play::PlayArgs, pvp::PvpArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "reversi",
    about = "A reversi (othello) engine implemented in Rust ●○"
)]
pub enum Reversi {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which will search for the best move using alpha-beta pruning at the given `--depth` (default: 5). Your color will be chosen at random unless you specify with `--color`. Enter moves as `d3` or `row,col`."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "pvp",
        about = "Play a game against another human on this local machine."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself. Each side has its own search depth (`--black-depth`, default: 1, and `--white-depth`, default: 5) and evaluator (`strong` or `weak`)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "calculate-best-move",
        about = "Use the engine to determine the best move from a given position, provided with `--position` (required) as rows of `.`, `B` and `W` separated by `/`. You can optionally specify the side to move with `--color` (default: black) and the depth of the search with `--depth` (default: 5)."
    )]
    CalculateBestMove(CalculateBestMoveArgs),
    #[structopt(
        name = "count-positions",
        about = "Count the number of possible positions for a given `--depth` (default: 6), and reports the time it took to do so. By default, this counts all leaf positions. Use `--strategy unique` to count distinct positions, or `--strategy alpha-beta` to count the positions an alpha-beta search visits."
    )]
    CountPositions(CountPositionsArgs),
}

impl crate::cli::commands::Command for Reversi {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Pvp(cmd),
            Watch(cmd),
            CalculateBestMove(cmd),
            CountPositions(cmd),
        }
    }
}
