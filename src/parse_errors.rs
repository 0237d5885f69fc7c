//! Errors that may be encountered when reading a sudoku from a string
use crate::board::Cell;

/// An invalid sudoku entry encountered during parsing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("cell {cell} contains invalid character '{ch}'")]
pub struct InvalidEntry {
    /// Cell number goes from 0..=80, 0..=8 for first line, 9..=17 for 2nd and so on
    pub cell: u8,
    /// The parsed invalid char
    pub ch: char,
}

impl InvalidEntry {
    /// Row index from 0..=8, topmost row is 0
    pub fn row(self) -> u8 {
        Cell::new(self.cell).row().get()
    }

    /// Column index from 0..=8, leftmost col is 0
    pub fn col(self) -> u8 {
        Cell::new(self.cell).col().get()
    }

    /// Block index from 0..=8, numbering from left to right, top to bottom
    pub fn block(self) -> u8 {
        Cell::new(self.cell).block().get()
    }
}

/// Error for the line notation parser
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LineParseError {
    /// Accepted values are the digits 1..=9 and `.`, `0` or `_` for empty cells
    #[error(transparent)]
    InvalidEntry(#[from] InvalidEntry),
    /// Input ends before 81 cells are read. Contains the number of cells found.
    #[error("line contains {0} cells instead of required 81")]
    NotEnoughCells(u8),
    /// More than 81 cells are supplied
    #[error("line contains more than 81 cells")]
    TooManyCells,
}

/// Error for the block notation parser
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum BlockParseError {
    /// Accepted values are the digits 1..=9 and `.`, `0` or `_` for empty cells
    #[error(transparent)]
    InvalidEntry(#[from] InvalidEntry),
    /// Row does not contain exactly 9 cells. Contains the index of the row (0..=8).
    #[error("row {0} does not contain exactly 9 cells")]
    InvalidLineLength(u8),
    /// Input ends with less than 9 rows. Contains the number of rows encountered.
    #[error("input ends after {0} rows, 9 are required")]
    NotEnoughRows(u8),
    /// More than 9 puzzle rows are supplied
    #[error("input contains more than 9 rows")]
    TooManyRows,
}
