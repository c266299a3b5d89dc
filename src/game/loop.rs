use log::warn;

use crate::evaluate::GameOutcome;
use crate::input_handler::{InputError, MoveInput};

use super::config::EngineConfig;
use super::engine::{Engine, EngineError};
use super::input_source::InputSource;
use super::observer::{GameObserver, TurnStatus};

/// Plays one game: starts the engine and feeds it human moves until the game
/// is over or a human quits.
pub struct GameLoop<I: InputSource> {
    engine: Engine,
    input: I,
}

impl<I: InputSource> GameLoop<I> {
    pub fn new(
        input: I,
        observer: Box<dyn GameObserver>,
        config: EngineConfig,
    ) -> Result<Self, EngineError> {
        let mut engine = Engine::with_config(config)?;
        engine.set_observer(observer);
        Ok(Self { engine, input })
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the outcome, or `None` if the game was abandoned.
    pub fn run(&mut self) -> Result<Option<GameOutcome>, EngineError> {
        self.engine.start()?;

        while self.engine.games_completed() == 0 {
            if self.engine.status() != TurnStatus::AwaitingHumanMove {
                warn!("Game loop stalled in state: {}", self.engine.status());
                return Ok(None);
            }

            let current_turn = self.engine.current_player();
            match self.input.get_move(current_turn) {
                Ok(Some(MoveInput::Square(square))) => {
                    if let Err(error) = self.engine.try_move(square.row, square.col) {
                        println!("illegal move {}: {}", square, error);
                    }
                }
                Ok(Some(MoveInput::Quit)) | Err(InputError::UserExit) => return Ok(None),
                Ok(None) => println!("Enter a square such as d3, or `quit`"),
                Err(error) => println!("error: {}", error),
            }
        }

        Ok(self.engine.last_outcome())
    }
}
