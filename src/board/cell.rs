use std::fmt;

use super::color::Color;

/// The contents of a single board cell.
///
/// `Candidate` is a transient marker for an empty cell that is currently a
/// legal placement for the player to move. It is never a disc, and the move
/// generator clears every marker before it recomputes them.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
    Candidate,
}

impl Cell {
    pub const ALL: [Cell; 4] = [Cell::Empty, Cell::Black, Cell::White, Cell::Candidate];

    /// Returns the color of the disc in this cell, if there is one.
    pub fn color(&self) -> Option<Color> {
        match self {
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
            Cell::Empty | Cell::Candidate => None,
        }
    }

    /// Empty and candidate cells can both receive a disc.
    pub fn is_vacant(&self) -> bool {
        matches!(self, Cell::Empty | Cell::Candidate)
    }

    pub fn is_disc_of(&self, color: Color) -> bool {
        self.color() == Some(color)
    }

    pub fn is_candidate(&self) -> bool {
        *self == Cell::Candidate
    }

    pub fn to_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'B',
            Cell::White => 'W',
            Cell::Candidate => '*',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'B' | 'b' => Some(Cell::Black),
            'W' | 'w' => Some(Cell::White),
            '*' => Some(Cell::Candidate),
            _ => None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
