//! Shared utilities for CLI commands.

use reversi::game::engine::EngineError;
use reversi::game::input_source::InputSource;
use reversi::game::r#loop::GameLoop;
use reversi::game::{EngineConfig, GameObserver};

pub(crate) fn run_game_loop<I>(input_source: I, observer: Box<dyn GameObserver>, config: EngineConfig)
where
    I: InputSource,
{
    let result = GameLoop::new(input_source, observer, config).and_then(|mut game| game.run());

    match result {
        Ok(Some(_outcome)) => {}
        Ok(None) => println!("Game abandoned."),
        Err(EngineError::Board(error)) => {
            eprintln!("Invalid configuration: {}", error);
            std::process::exit(1);
        }
        Err(error) => eprintln!("Game stopped: {}", error),
    }
}
