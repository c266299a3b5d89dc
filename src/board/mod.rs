pub mod cell;
pub mod color;
pub mod error;
pub mod square;

mod display;
mod position;


pub use cell::Cell;
pub use color::Color;
pub use error::BoardError;
pub use square::Square;

pub const DEFAULT_BOARD_SIZE: usize = 8;
pub const MIN_BOARD_SIZE: usize = 4;
/// Every column needs a letter in algebraic notation.
pub const MAX_BOARD_SIZE: usize = 26;

/// A square grid of cells, stored row-major.
///
/// The board is plain data: it knows nothing about whose turn it is or which
/// placements are legal. Cloning produces a fully independent copy, which is
/// what the search relies on when it expands a position into its children.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl Board {
    pub fn validate_size(size: usize) -> Result<(), BoardError> {
        if size < MIN_BOARD_SIZE || size > MAX_BOARD_SIZE || size % 2 != 0 {
            return Err(BoardError::InvalidBoardSize { size });
        }
        Ok(())
    }

    /// An empty board with no discs on it.
    pub fn empty(size: usize) -> Result<Self, BoardError> {
        Self::validate_size(size)?;
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// The canonical 8×8 opening position.
    pub fn starting_position() -> Self {
        let mut board = Self {
            size: DEFAULT_BOARD_SIZE,
            cells: vec![Cell::Empty; DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE],
        };
        board.place_starting_discs();
        board
    }

    /// The opening position for a board of any valid size: four discs on the
    /// centre cells, each color on one diagonal.
    pub fn with_size(size: usize) -> Result<Self, BoardError> {
        let mut board = Self::empty(size)?;
        board.place_starting_discs();
        Ok(board)
    }

    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Result<Self, BoardError> {
        Self::validate_size(size)?;
        if cells.len() != size * size {
            return Err(BoardError::InvalidPosition {
                msg: format!(
                    "expected {} cells for a {}x{} board, got {}",
                    size * size,
                    size,
                    size,
                    cells.len()
                ),
            });
        }
        Ok(Self { size, cells })
    }

    fn place_starting_discs(&mut self) {
        let low = self.size / 2 - 1;
        let high = self.size / 2;
        self.set(Square::new(low, low), Cell::White);
        self.set(Square::new(low, high), Cell::Black);
        self.set(Square::new(high, low), Cell::Black);
        self.set(Square::new(high, high), Cell::White);
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the cell at `square`.
    ///
    /// Panics if the square is off the board; callers step with
    /// [`Square::step`], so an out of range square is a bug.
    #[inline(always)]
    pub fn get(&self, square: Square) -> Cell {
        assert!(
            square.is_within(self.size),
            "square {:?} is outside of a {}x{} board",
            square,
            self.size,
            self.size
        );
        self.cells[square.index(self.size)]
    }

    /// Bounds-checked lookup by raw coordinates.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        let square = Square::new(row, col);
        if square.is_within(self.size) {
            Some(self.cells[square.index(self.size)])
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn set(&mut self, square: Square, cell: Cell) {
        assert!(
            square.is_within(self.size),
            "square {:?} is outside of a {}x{} board",
            square,
            self.size,
            self.size
        );
        let index = square.index(self.size);
        self.cells[index] = cell;
    }

    /// Bounds-checked write by raw coordinates.
    pub fn put(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        let square = Square::new(row, col);
        if !square.is_within(self.size) {
            return Err(BoardError::OutOfBounds { row, col });
        }
        self.set(square, cell);
        Ok(())
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> {
        let size = self.size;
        (0..size * size).map(move |index| Square::from_index(index, size))
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn disc_count(&self, color: Color) -> usize {
        self.count(Cell::from(color))
    }

    /// Squares currently marked as candidates, in row-major order.
    pub fn candidates(&self) -> impl Iterator<Item = Square> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell == Cell::Candidate)
            .map(move |(index, _)| Square::from_index(index, size))
    }

    pub fn clear_candidates(&mut self) {
        for cell in self.cells.iter_mut() {
            if *cell == Cell::Candidate {
                *cell = Cell::Empty;
            }
        }
    }

    /// A copy of this board with every candidate marker removed.
    pub fn without_candidates(&self) -> Board {
        let mut board = self.clone();
        board.clear_candidates();
        board
    }

    pub fn corners(&self) -> [Square; 4] {
        let last = self.size - 1;
        [
            Square::new(0, 0),
            Square::new(0, last),
            Square::new(last, 0),
            Square::new(last, last),
        ]
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_vacant())
    }
}
