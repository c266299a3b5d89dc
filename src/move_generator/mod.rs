//! Legal placement generation.

pub mod generator;

pub use generator::{MoveGenerator, SquareList};
