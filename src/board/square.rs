use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static ALGEBRAIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-zA-Z])([1-9][0-9]?)$").expect("ALGEBRAIC_RE regex should be valid")
});

/// A cell coordinate, 0-indexed from the top-left corner of the board.
///
/// In algebraic notation the column is a letter and the row is a 1-based
/// number counted from the top, so `(2, 3)` is written `d3`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the square one step away in the given direction, or `None` if
    /// that step leaves a `size`×`size` board.
    #[inline(always)]
    pub fn step(&self, d_row: isize, d_col: isize, size: usize) -> Option<Square> {
        let row = self.row as isize + d_row;
        let col = self.col as isize + d_col;
        let bound = size as isize;
        if row < 0 || col < 0 || row >= bound || col >= bound {
            return None;
        }
        Some(Square::new(row as usize, col as usize))
    }

    pub fn is_within(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Row-major index of this square on a board of the given size.
    #[inline(always)]
    pub fn index(&self, size: usize) -> usize {
        self.row * size + self.col
    }

    pub fn from_index(index: usize, size: usize) -> Self {
        Self::new(index / size, index % size)
    }

    pub fn from_algebraic(algebraic: &str) -> Option<Square> {
        let caps = ALGEBRAIC_RE.captures(algebraic.trim())?;
        let file = caps[1].chars().next()?.to_ascii_lowercase();
        let rank: usize = caps[2].parse().ok()?;
        if rank == 0 {
            return None;
        }
        Some(Square::new(rank - 1, (file as u8 - b'a') as usize))
    }

    pub fn to_algebraic(&self) -> String {
        format!("{}{}", (b'a' + self.col as u8) as char, self.row + 1)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algebraic() {
        assert_eq!(Square::from_algebraic("d3"), Some(Square::new(2, 3)));
        assert_eq!(Square::from_algebraic("A1"), Some(Square::new(0, 0)));
        assert_eq!(Square::from_algebraic("h8"), Some(Square::new(7, 7)));
        assert_eq!(Square::from_algebraic("b10"), Some(Square::new(9, 1)));
        assert_eq!(Square::new(2, 3).to_algebraic(), "d3");
    }

    #[test]
    fn test_invalid_algebraic() {
        assert_eq!(Square::from_algebraic("d0"), None);
        assert_eq!(Square::from_algebraic("3d"), None);
        assert_eq!(Square::from_algebraic(""), None);
        assert_eq!(Square::from_algebraic("dd"), None);
    }

    #[test]
    fn test_step_stays_on_board() {
        let corner = Square::new(0, 0);
        assert_eq!(corner.step(-1, 0, 8), None);
        assert_eq!(corner.step(0, -1, 8), None);
        assert_eq!(corner.step(1, 1, 8), Some(Square::new(1, 1)));

        let far_corner = Square::new(7, 7);
        assert_eq!(far_corner.step(1, 0, 8), None);
        assert_eq!(far_corner.step(0, 1, 8), None);
        assert_eq!(far_corner.step(-1, -1, 8), Some(Square::new(6, 6)));
    }

    #[test]
    fn test_index_round_trip() {
        let square = Square::new(3, 5);
        assert_eq!(square.index(8), 29);
        assert_eq!(Square::from_index(29, 8), square);
    }
}
