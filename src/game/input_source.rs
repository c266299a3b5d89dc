use crate::board::Color;
use crate::input_handler::{InputError, MoveInput};

pub trait InputSource {
    fn get_move(&mut self, current_turn: Color) -> Result<Option<MoveInput>, InputError>;
}

/// Moves typed on stdin.
pub struct HumanInput;

impl InputSource for HumanInput {
    fn get_move(&mut self, _current_turn: Color) -> Result<Option<MoveInput>, InputError> {
        match crate::input_handler::parse_move_input() {
            Ok(move_input) => Ok(Some(move_input)),
            Err(InputError::InvalidInput { input }) => {
                println!("invalid input: {}", input.trim());
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }
}

/// A fixed list of moves, replayed in order. Runs out as a quit.
pub struct ScriptedInput {
    moves: std::vec::IntoIter<MoveInput>,
}

impl ScriptedInput {
    pub fn new(moves: Vec<MoveInput>) -> Self {
        Self {
            moves: moves.into_iter(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn get_move(&mut self, _current_turn: Color) -> Result<Option<MoveInput>, InputError> {
        Ok(Some(self.moves.next().unwrap_or(MoveInput::Quit)))
    }
}
