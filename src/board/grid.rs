use crate::board::{Cell, CellState, Digit, DigitSet, House, Sudoku};
use std::fmt;
use std::ops::Index;

/// The working state of a solve: one [`CellState`] per cell.
///
/// A `Grid` is exclusively owned by whoever drives the solve. It offers the
/// read access an external renderer needs (per cell digit and candidate set,
/// iteration through the position types) and a snapshot/load pair used to
/// take back guesses during backtracking.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid([CellState; 81]);

impl Grid {
    /// Builds the working grid for `sudoku`. Empty cells start out with an
    /// empty candidate set, to be filled in by annotation.
    pub fn from_sudoku(sudoku: &Sudoku) -> Grid {
        let mut cells = [CellState::Candidates(DigitSet::NONE); 81];
        for (cell, num) in Cell::all().zip(sudoku.iter()) {
            if let Some(num) = num {
                cells[cell.as_index()] = CellState::Digit(Digit::new(num));
            }
        }
        Grid(cells)
    }

    /// The fixed digit of `cell`, if it has one.
    pub fn digit(&self, cell: Cell) -> Option<Digit> {
        self.0[cell.as_index()].digit()
    }

    /// The candidate set of `cell`, `None` if the cell is solved.
    pub fn candidates(&self, cell: Cell) -> Option<DigitSet> {
        self.0[cell.as_index()].candidates()
    }

    /// Fixes the digit of `cell`. The candidates of other cells are left
    /// as they are.
    pub fn set(&mut self, cell: Cell, digit: Digit) {
        self.0[cell.as_index()] = CellState::Digit(digit);
    }

    pub(crate) fn set_candidates(&mut self, cell: Cell, candidates: DigitSet) {
        debug_assert!(!self.0[cell.as_index()].is_solved());
        self.0[cell.as_index()] = CellState::Candidates(candidates);
    }

    /// The current cell values, candidates excluded.
    pub fn snapshot(&self) -> Sudoku {
        let mut values = [0; 81];
        for cell in Cell::all() {
            if let Some(digit) = self.digit(cell) {
                values[cell.as_index()] = digit.get();
            }
        }
        Sudoku(values)
    }

    /// Replaces the entire cell matrix with the values of `snapshot`.
    /// Candidate sets are not part of a snapshot and come back empty.
    pub fn load(&mut self, snapshot: &Sudoku) {
        *self = Grid::from_sudoku(snapshot);
    }

    /// Checks whether every row, every column and every block contains every
    /// digit. A grid with an unsolved cell never passes, because the digits
    /// remaining for that cell are missing from its houses.
    pub fn is_solved(&self) -> bool {
        House::all().all(|house| self.house_digits(house) == DigitSet::ALL)
    }

    /// The digits already entered in `house`.
    pub fn house_digits(&self, house: House) -> DigitSet {
        let mut digits = DigitSet::NONE;
        for cell in house.cells() {
            if let Some(digit) = self.digit(cell) {
                digits.insert(digit);
            }
        }
        digits
    }
}

impl Index<Cell> for Grid {
    type Output = CellState;

    fn index(&self, cell: Cell) -> &CellState {
        &self.0[cell.as_index()]
    }
}

/* Example output
┌──────────────────────────────┬──────────────────────────────┬──────────────────────────────┐
│ 1         2         3        │ 4         5         6        │ 7         8         _        │
│ 45678     45678     45678    │ 12378     12378     12378    │ 123456    123456    9        │
│ 456789    456789    456789   │ 123789    123789    123789   │ 123456    123456    123456   │
├──────────────────────────────┼──────────────────────────────┼──────────────────────────────┤
...
└──────────────────────────────┴──────────────────────────────┴──────────────────────────────┘
*/
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // the widest cell of a column decides how much room the column gets
        let mut widths = [1usize; 9];
        for cell in Cell::all() {
            let needed = match self[cell] {
                CellState::Digit(_) => 1,
                CellState::Candidates(candidates) => candidates.len().max(1) as usize,
            };
            let col = cell.col().as_index();
            widths[col] = widths[col].max(needed);
        }

        let frame = |f: &mut fmt::Formatter, left: char, junction: char, right: char| {
            write!(f, "{}", left)?;
            for stack in 0..3 {
                if stack > 0 {
                    write!(f, "{}", junction)?;
                }
                // three cells, a space on either side of each wall and two in between
                let span = widths[stack * 3..stack * 3 + 3].iter().sum::<usize>() + 6;
                write!(f, "{:─<span$}", "", span = span)?;
            }
            write!(f, "{}", right)
        };

        for band in 0..3u8 {
            match band {
                0 => frame(f, '┌', '┬', '┐')?,
                _ => frame(f, '├', '┼', '┤')?,
            }
            writeln!(f)?;
            for row in band * 3..band * 3 + 3 {
                for col in 0..9u8 {
                    match col % 3 {
                        0 => write!(f, "│ ")?,
                        _ => write!(f, "  ")?,
                    }
                    let cell = Cell::from_coords(row, col);
                    write!(f, "{:width$}", self[cell], width = widths[col as usize])?;
                    if col % 3 == 2 {
                        write!(f, " ")?;
                    }
                }
                writeln!(f, "│")?;
            }
        }
        frame(f, '└', '┴', '┘')
    }
}
