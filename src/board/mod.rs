//! Types for cells, digits and the sudoku board
mod cell_state;
mod digit;
mod grid;
pub mod positions;
mod sudoku;

pub use self::{
    cell_state::CellState,
    digit::{Digit, DigitSet},
    grid::Grid,
    positions::{Block, Cell, Col, House, HouseType, Row},
    sudoku::Sudoku,
};
