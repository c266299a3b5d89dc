//! Compact text form of a board: one row per `/`-separated segment, one
//! character per cell (`.` empty, `B` black, `W` white). A `*` is accepted on
//! input and read as an empty cell, since candidate markers are recomputed.

use std::str::FromStr;

use super::{Board, BoardError, Cell};

impl Board {
    pub fn to_position_string(&self) -> String {
        self.cells()
            .chunks(self.size())
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Candidate => Cell::Empty.to_char(),
                        other => other.to_char(),
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(position: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = position.trim().split('/').map(str::trim).collect();
        let size = rows.len();
        Board::validate_size(size)?;

        let mut cells = Vec::with_capacity(size * size);
        for (row_index, row) in rows.iter().enumerate() {
            let row_len = row.chars().count();
            if row_len != size {
                return Err(BoardError::InvalidPosition {
                    msg: format!(
                        "row {} has {} cells, expected {}",
                        row_index + 1,
                        row_len,
                        size
                    ),
                });
            }
            for c in row.chars() {
                let cell = match Cell::from_char(c) {
                    Some(Cell::Candidate) => Cell::Empty,
                    Some(cell) => cell,
                    None => {
                        return Err(BoardError::InvalidPosition {
                            msg: format!("unexpected character {:?} in row {}", c, row_index + 1),
                        })
                    }
                };
                cells.push(cell);
            }
        }

        Board::from_cells(size, cells)
    }
}
