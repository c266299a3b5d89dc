mod cli;

use cli::commands::Command;
use cli::Reversi;
use structopt::StructOpt;

fn main() {
    // Keep log lines out of the board frames unless asked for with RUST_LOG.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    Reversi::from_args().execute();
}
