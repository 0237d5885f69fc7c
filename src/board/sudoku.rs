use crate::board::Grid;
use crate::errors::{FromBytesError, FromBytesSliceError, Unsolvable};
use crate::parse_errors::{BlockParseError, InvalidEntry, LineParseError};
use crate::solver::Solver;
use std::{fmt, str};

/// The 81 cell values of a sudoku in row major order, `0` standing for an
/// empty cell.
///
/// This is the boundary value of the crate: puzzles enter the solver as a
/// `Sudoku`, solutions leave it as one, and the working [`Grid`] saves and
/// restores its state through one while backtracking. Candidate annotations
/// are never part of a `Sudoku`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sudoku(pub(crate) [u8; 81]);

impl Sudoku {
    /// Creates a sudoku from a byte array. Empty cells are denoted by 0,
    /// clues by 1..=9.
    pub fn from_bytes(bytes: [u8; 81]) -> Result<Sudoku, FromBytesError> {
        if bytes.iter().any(|&num| num > 9) {
            return Err(FromBytesError(()));
        }
        Ok(Sudoku(bytes))
    }

    /// Creates a sudoku from a byte slice. The slice must have length 81.
    /// Empty cells are denoted by 0, clues by 1..=9.
    pub fn from_bytes_slice(bytes: &[u8]) -> Result<Sudoku, FromBytesSliceError> {
        if bytes.len() != 81 {
            return Err(FromBytesSliceError::WrongLength(bytes.len()));
        }
        let mut array = [0; 81];
        array.copy_from_slice(bytes);
        Ok(Sudoku::from_bytes(array)?)
    }

    /// Reads a sudoku in line notation: exactly 81 cells, `1..=9` for clues
    /// and one of `.`, `0`, `_` for an empty cell. Surrounding whitespace is
    /// ignored.
    pub fn from_str_line(s: &str) -> Result<Sudoku, LineParseError> {
        let mut grid = [0; 81];
        let mut n_cells = 0;
        for ch in s.trim().chars() {
            if n_cells == 81 {
                return Err(LineParseError::TooManyCells);
            }
            grid[n_cells] = match ch {
                '1'..='9' => ch as u8 - b'0',
                '.' | '0' | '_' => 0,
                _ => {
                    return Err(InvalidEntry {
                        cell: n_cells as u8,
                        ch,
                    }
                    .into())
                }
            };
            n_cells += 1;
        }
        if n_cells < 81 {
            return Err(LineParseError::NotEnoughCells(n_cells as u8));
        }
        Ok(Sudoku(grid))
    }

    /// Reads a sudoku in block notation: 9 rows of 9 cells, `1..=9` for clues
    /// and one of `.`, `0`, `_` for an empty cell. `|` and whitespace inside a
    /// row are skipped, as are delimiter rows made up of `-`, `+`, `|` and
    /// whitespace.
    pub fn from_str_block(s: &str) -> Result<Sudoku, BlockParseError> {
        let mut grid = [0; 81];
        let mut n_rows = 0u8;
        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.chars().all(|ch| "-+| \t".contains(ch)) {
                continue;
            }
            if n_rows == 9 {
                return Err(BlockParseError::TooManyRows);
            }
            let mut n_cols = 0u8;
            for ch in line.chars() {
                match ch {
                    '|' | ' ' | '\t' => continue,
                    _ if n_cols == 9 => return Err(BlockParseError::InvalidLineLength(n_rows)),
                    '1'..='9' => grid[n_rows as usize * 9 + n_cols as usize] = ch as u8 - b'0',
                    '.' | '0' | '_' => (),
                    _ => {
                        return Err(InvalidEntry {
                            cell: n_rows * 9 + n_cols,
                            ch,
                        }
                        .into())
                    }
                }
                n_cols += 1;
            }
            if n_cols != 9 {
                return Err(BlockParseError::InvalidLineLength(n_rows));
            }
            n_rows += 1;
        }
        if n_rows < 9 {
            return Err(BlockParseError::NotEnoughRows(n_rows));
        }
        Ok(Sudoku(grid))
    }

    /// Returns the cell values as a byte array, 0 for empty cells.
    pub fn to_bytes(self) -> [u8; 81] {
        self.0
    }

    /// Returns the sudoku in line notation, `.` denoting empty cells.
    pub fn to_str_line(&self) -> String {
        self.0
            .iter()
            .map(|&num| match num {
                0 => '.',
                _ => (b'0' + num) as char,
            })
            .collect()
    }

    /// Returns an iterator over the cells, going from left to right, top to
    /// bottom. Empty cells yield `None`.
    pub fn iter(&self) -> impl Iterator<Item = Option<u8>> + '_ {
        self.0.iter().map(|&num| match num {
            0 => None,
            _ => Some(num),
        })
    }

    /// Counts the cells that are not empty.
    pub fn n_clues(&self) -> u8 {
        self.0.iter().filter(|&&num| num != 0).count() as u8
    }

    /// Searches for a solution and returns it, if one exists.
    ///
    /// If multiple solutions exist, the search stops at the first one it
    /// finds. Which one that is only depends on the input grid.
    pub fn solve(self) -> Result<Sudoku, Unsolvable> {
        Solver::from_sudoku(self).solve()
    }

    /// Checks whether this is a completely and correctly filled grid.
    pub fn is_solved(&self) -> bool {
        Grid::from_sudoku(self).is_solved()
    }
}

impl str::FromStr for Sudoku {
    type Err = LineParseError;

    fn from_str(s: &str) -> Result<Sudoku, LineParseError> {
        Sudoku::from_str_line(s)
    }
}

impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, &num) in self.0.iter().enumerate() {
            let (row, col) = (index / 9, index % 9);
            match (row, col) {
                (0, 0) => (),
                (_, 0) if row % 3 == 0 => write!(f, "\n\n")?,
                (_, 0) => writeln!(f)?,
                _ if col % 3 == 0 => write!(f, " ")?,
                _ => (),
            }
            match num {
                0 => write!(f, "_")?,
                _ => write!(f, "{}", num)?,
            }
        }
        Ok(())
    }
}
