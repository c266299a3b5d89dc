use std::io::{self, Write};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::Square;

static COORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2})\s*[,\s]\s*(\d{1,2})$").expect("COORD_RE regex should be valid")
});
static QUIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^(?i:q|quit|exit)$").expect("QUIT_RE regex should be valid"));

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("user exit")]
    UserExit,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveInput {
    /// A placement, given either as `d3` or as a 0-indexed `row,col` pair.
    Square(Square),
    Quit,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        if QUIT_RE.is_match(trimmed) {
            return Ok(MoveInput::Quit);
        }

        if let Some(square) = Square::from_algebraic(trimmed) {
            return Ok(MoveInput::Square(square));
        }

        if let Some(caps) = COORD_RE.captures(trimmed) {
            let parsed = (caps[1].parse::<usize>(), caps[2].parse::<usize>());
            if let (Ok(row), Ok(col)) = parsed {
                return Ok(MoveInput::Square(Square::new(row, col)));
            }
        }

        Err(InputError::InvalidInput {
            input: input.to_string(),
        })
    }
}

/// Reads one move from stdin. End of input counts as the user leaving.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    io::stdout().flush().map_err(|e| InputError::IOError {
        error: format!("Failed to flush stdout: {}", e),
    })?;

    let mut input = String::new();
    let bytes_read = io::stdin()
        .read_line(&mut input)
        .map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;

    if bytes_read == 0 {
        return Err(InputError::UserExit);
    }

    input.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algebraic() {
        assert_eq!(
            MoveInput::from_str("d3"),
            Ok(MoveInput::Square(Square::new(2, 3)))
        );
        assert_eq!(
            MoveInput::from_str("  H8\n"),
            Ok(MoveInput::Square(Square::new(7, 7)))
        );
        assert_eq!(
            MoveInput::from_str("a10"),
            Ok(MoveInput::Square(Square::new(9, 0)))
        );
    }

    #[test]
    fn test_coordinates() {
        for input in ["2,3", "2, 3", "2 3"] {
            assert_eq!(
                MoveInput::from_str(input),
                Ok(MoveInput::Square(Square::new(2, 3))),
                "{}",
                input
            );
        }
        assert_eq!(
            MoveInput::from_str("0,0"),
            Ok(MoveInput::Square(Square::new(0, 0)))
        );
    }

    #[test]
    fn test_quit() {
        for input in ["q", "quit", "EXIT"] {
            assert_eq!(MoveInput::from_str(input), Ok(MoveInput::Quit));
        }
    }

    #[test]
    fn test_invalid() {
        for input in ["", "d", "d0", "3d", "1,2,3", "move d3", "-1,2"] {
            assert!(MoveInput::from_str(input).is_err(), "{}", input);
        }
    }
}
