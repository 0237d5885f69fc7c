//! The backtracking search that drives propagation.

use crate::board::{Cell, DigitSet, Grid, Sudoku};
use crate::errors::Unsolvable;
use crate::propagate;

// A choice point of the search. `remaining` holds the digits not yet tried
// for `cell`; it is owned by the frame and never aliases the candidate set
// the live grid keeps for the same cell. `snapshot` holds the cell values
// from just before the first digit of this frame was entered.
#[derive(Clone, Debug)]
struct Guess {
    cell: Cell,
    remaining: DigitSet,
    snapshot: Sudoku,
}

/// Solves a sudoku by propagating to a fixpoint and, whenever propagation
/// stalls, guessing in the open cell with the fewest candidates.
///
/// Wrong guesses are taken back by restoring the grid snapshot stored with
/// the guess, in reverse order of guessing.
#[derive(Clone, Debug)]
pub struct Solver {
    grid: Grid,
    guesses: Vec<Guess>,
}

impl Solver {
    /// Creates a solver for `sudoku`.
    pub fn from_sudoku(sudoku: Sudoku) -> Solver {
        Solver {
            grid: Grid::from_sudoku(&sudoku),
            guesses: Vec::new(),
        }
    }

    /// Runs the search until a solution is reached or the search space is
    /// exhausted.
    ///
    /// Given the same input, the same solution is found through the same
    /// sequence of guesses: cells are compared in row major order and
    /// candidates are tried in ascending order.
    pub fn solve(mut self) -> Result<Sudoku, Unsolvable> {
        // Terminates: each pass either consumes one of the at most 9
        // candidates of some frame or pushes a frame for a cell that was
        // open when all frames below it were pushed, and frames are popped
        // as soon as their candidates run out.
        loop {
            propagate::fixpoint(&mut self.grid);
            if self.grid.is_solved() {
                return Ok(self.grid.snapshot());
            }
            propagate::annotate(&mut self.grid);
            // A grid with no open cell that still fails the solved check is
            // contradictory. It has no candidates to offer, same as an open
            // cell with an empty set, and forces a backtrack.
            match self.most_constrained_cell() {
                Some((cell, candidates)) if !candidates.is_empty() => {
                    self.guess(cell, candidates)
                }
                _ => self.backtrack()?,
            }
        }
    }

    // The open cell with the fewest candidates, ties broken by row major
    // order.
    fn most_constrained_cell(&self) -> Option<(Cell, DigitSet)> {
        let mut best: Option<(Cell, DigitSet)> = None;
        for cell in Cell::all() {
            if let Some(candidates) = self.grid.candidates(cell) {
                match best {
                    Some((_, best_candidates)) if best_candidates.len() <= candidates.len() => {}
                    _ => best = Some((cell, candidates)),
                }
            }
        }
        best
    }

    // Snapshots the grid, pushes a frame for `cell` and enters its smallest
    // candidate.
    fn guess(&mut self, cell: Cell, mut candidates: DigitSet) {
        debug_assert!(!candidates.is_empty());
        let snapshot = self.grid.snapshot();
        if let Some(digit) = candidates.pop_smallest() {
            self.grid.set(cell, digit);
        }
        self.guesses.push(Guess {
            cell,
            remaining: candidates,
            snapshot,
        });
    }

    // Walks the guess stack top down, restoring each frame's snapshot and
    // dropping exhausted frames, until a frame with an untried candidate is
    // found. That candidate is entered. Errors when the stack runs out.
    fn backtrack(&mut self) -> Result<(), Unsolvable> {
        loop {
            let guess = self.guesses.last_mut().ok_or(Unsolvable)?;
            let snapshot = guess.snapshot;
            match guess.remaining.pop_smallest() {
                Some(digit) => {
                    let cell = guess.cell;
                    self.grid.load(&snapshot);
                    self.grid.set(cell, digit);
                    return Ok(());
                }
                None => {
                    self.grid.load(&snapshot);
                    self.guesses.pop();
                }
            }
        }
    }
}
