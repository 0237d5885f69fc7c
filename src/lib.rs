#![warn(missing_docs)]
//! A library for solving standard 9×9 sudokus.
//!
//! ## Overview
//!
//! The solver combines pencilmark propagation with a backtracking search.
//! For every open cell it keeps the set of digits that can still legally go
//! there and applies two deduction rules until nothing changes anymore:
//! a cell with a single candidate left is fixed to it, and a digit with a
//! single possible place left in some row, column or block is entered there.
//! If the grid is still unfinished at that point, the search guesses in the
//! open cell with the fewest candidates, remembering a snapshot of the grid
//! so a wrong guess can be taken back.
//!
//! ## Example
//!
//! ```
//! use pencilmark::Sudoku;
//!
//! let puzzle = Sudoku::from_str_line(
//!     "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..",
//! ).unwrap();
//!
//! let solution = puzzle.solve().unwrap();
//! assert!(solution.is_solved());
//! println!("{}", solution);
//! ```

mod board;
mod errors;
pub mod parse_errors;
pub mod propagate;
mod solver;

pub use crate::board::{
    positions::{Block, Cell, Col, House, HouseType, Row},
    CellState, Digit, DigitSet, Grid, Sudoku,
};
pub use crate::errors::{FromBytesError, FromBytesSliceError, Unsolvable};
pub use crate::solver::Solver;
