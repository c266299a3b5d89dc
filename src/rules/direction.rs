use crate::board::Square;

/// A unit step on the grid; one of the eight compass directions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Direction {
    pub d_row: isize,
    pub d_col: isize,
}

impl Direction {
    pub const fn new(d_row: isize, d_col: isize) -> Self {
        Self { d_row, d_col }
    }

    #[inline(always)]
    pub fn step(&self, square: Square, size: usize) -> Option<Square> {
        square.step(self.d_row, self.d_col, size)
    }
}

pub const NORTH_WEST: Direction = Direction::new(-1, -1);
pub const NORTH: Direction = Direction::new(-1, 0);
pub const NORTH_EAST: Direction = Direction::new(-1, 1);
pub const EAST: Direction = Direction::new(0, 1);
pub const SOUTH_EAST: Direction = Direction::new(1, 1);
pub const SOUTH: Direction = Direction::new(1, 0);
pub const SOUTH_WEST: Direction = Direction::new(1, -1);
pub const WEST: Direction = Direction::new(0, -1);

pub const ALL_DIRECTIONS: [Direction; 8] = [
    NORTH_WEST, NORTH, NORTH_EAST, EAST, SOUTH_EAST, SOUTH, SOUTH_WEST, WEST,
];
