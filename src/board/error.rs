use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid board size {size}, the size must be an even number between 4 and 26")]
    InvalidBoardSize { size: usize },
    #[error("Square ({row}, {col}) is outside of the board")]
    OutOfBounds { row: usize, col: usize },
    #[error("Invalid position: {msg}")]
    InvalidPosition { msg: String },
}
