use crate::board::{Digit, DigitSet};
use std::fmt;

/// Contains either a digit or the pencilmarked candidates for an unsolved cell.
///
/// A solved cell carries no candidate set.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[allow(missing_docs)]
pub enum CellState {
    Digit(Digit),
    Candidates(DigitSet),
}

impl CellState {
    /// The fixed digit of the cell, if it has one.
    pub fn digit(self) -> Option<Digit> {
        match self {
            CellState::Digit(digit) => Some(digit),
            CellState::Candidates(_) => None,
        }
    }

    /// The candidate set of an unsolved cell, `None` for a solved one.
    pub fn candidates(self) -> Option<DigitSet> {
        match self {
            CellState::Digit(_) => None,
            CellState::Candidates(candidates) => Some(candidates),
        }
    }

    /// Checks whether the cell has a fixed digit.
    pub fn is_solved(self) -> bool {
        self.digit().is_some()
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            CellState::Digit(digit) => digit.to_string(),
            CellState::Candidates(candidates) if candidates.is_empty() => "_".to_string(),
            CellState::Candidates(candidates) => candidates.to_string(),
        };
        f.pad(&text)
    }
}
