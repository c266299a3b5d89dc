use super::{Board, Square};
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size() {
            write!(f, " {}", (b'a' + col as u8) as char)?;
        }
        writeln!(f)?;

        for row in 0..self.size() {
            write!(f, "{:>3}", row + 1)?;
            for col in 0..self.size() {
                write!(f, " {}", self.get(Square::new(row, col)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Builds a [`Board`](crate::board::Board) from a picture of the grid, one
/// character per cell: `.` empty, `B` black, `W` white, `*` candidate. The
/// board size is inferred from the number of cells.
#[macro_export]
macro_rules! reversi_position {
    ($($cell:tt)*) => {{
        // Convert all input tokens to a string and filter out whitespace characters.
        let cells: Vec<$crate::board::Cell> = stringify!($($cell)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .map(|c| {
                $crate::board::Cell::from_char(c)
                    .unwrap_or_else(|| panic!("Invalid character in reversi position: {}", c))
            })
            .collect();
        let size = (cells.len() as f64).sqrt() as usize;
        assert_eq!(size * size, cells.len(), "Reversi positions must be square, got {} cells", cells.len());
        $crate::board::Board::from_cells(size, cells).expect("reversi position should have a valid size")
    }};
}
