//! Pencilmark propagation.
//!
//! Annotation recomputes, for every open cell, the set of digits not ruled
//! out by its row, column and block. Two deduction rules consume the
//! annotations: a naked single is a cell with exactly one candidate left,
//! a hidden single is a digit with exactly one possible place left in some
//! house. [`reduce`] runs one round of both rules, [`fixpoint`] repeats
//! rounds until the grid stops changing.
//!
//! Placements only ever go through [`can_fit`], so propagation cannot enter
//! a digit that collides with an already entered one.

use crate::board::{Block, Cell, Col, Digit, Grid, Row};

/// Checks whether `digit` could be entered in `cell` without colliding with
/// a digit already entered in the cell's row, column or block.
pub fn can_fit(grid: &Grid, digit: Digit, cell: Cell) -> bool {
    !contains(grid, digit, &cell.row().cells())
        && !contains(grid, digit, &cell.col().cells())
        && !contains(grid, digit, &cell.block().cells())
}

fn contains(grid: &Grid, digit: Digit, cells: &[Cell; 9]) -> bool {
    cells.iter().any(|&cell| grid.digit(cell) == Some(digit))
}

/// Recomputes the candidate set of every open cell. Solved cells are left
/// untouched.
pub fn annotate(grid: &mut Grid) {
    for cell in Cell::all() {
        if grid.digit(cell).is_some() {
            continue;
        }
        let candidates = Digit::all()
            .filter(|&digit| can_fit(grid, digit, cell))
            .collect();
        grid.set_candidates(cell, candidates);
    }
}

/// Fixes every open cell whose candidate set has exactly one member,
/// scanning in row major order. Returns whether any cell was changed.
///
/// Running this again on a grid it already reduced changes nothing.
pub fn fix_naked_singles(grid: &mut Grid) -> bool {
    let mut changed = false;
    for cell in Cell::all() {
        if let Some(candidates) = grid.candidates(cell) {
            if let Some(digit) = candidates.unique() {
                grid.set(cell, digit);
                changed = true;
            }
        }
    }
    changed
}

/// For each digit and house without that digit: if exactly one open cell of
/// the house can hold the digit, enters it there. Returns whether any cell
/// was changed.
///
/// Houses are visited per digit in the order rows, then columns, then
/// blocks, ascending, and each placement happens immediately, so later
/// houses in the same sweep observe it. Changing this order changes which
/// deductions a single sweep makes.
pub fn fix_hidden_singles(grid: &mut Grid) -> bool {
    let mut changed = false;
    for digit in Digit::all() {
        for row in Row::all() {
            changed |= fix_hidden_single_in(grid, digit, &row.cells());
        }
        for col in Col::all() {
            changed |= fix_hidden_single_in(grid, digit, &col.cells());
        }
        for block in Block::all() {
            changed |= fix_hidden_single_in(grid, digit, &block.cells());
        }
    }
    changed
}

fn fix_hidden_single_in(grid: &mut Grid, digit: Digit, cells: &[Cell; 9]) -> bool {
    if contains(grid, digit, cells) {
        return false;
    }
    let mut sole_fit = None;
    for &cell in cells.iter() {
        if grid.digit(cell).is_some() || !can_fit(grid, digit, cell) {
            continue;
        }
        if sole_fit.is_some() {
            return false;
        }
        sole_fit = Some(cell);
    }
    match sole_fit {
        Some(cell) => {
            grid.set(cell, digit);
            true
        }
        None => false,
    }
}

/// One reduction round: hidden singles, then a candidate refresh, then naked
/// singles. Returns whether either deduction rule changed the grid.
pub fn reduce(grid: &mut Grid) -> bool {
    let mut changed = fix_hidden_singles(grid);
    annotate(grid);
    changed |= fix_naked_singles(grid);
    changed
}

/// Runs [`reduce`] until it stops changing the grid.
///
/// Every round that reports a change has fixed at least one of the 81 cells
/// and no rule ever unfixes one, so this loop runs at most 81 times.
pub fn fixpoint(grid: &mut Grid) {
    while reduce(grid) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Sudoku;

    fn grid(sudoku: &str) -> Grid {
        Grid::from_sudoku(&Sudoku::from_str_block(sudoku).unwrap())
    }

    #[test]
    fn can_fit_respects_all_three_houses() {
        let grid = grid(
            "1........
             .........
             .........
             .........
             .........
             .........
             .........
             .........
             ........1",
        );
        let one = Digit::new(1);
        // same row
        assert!(!can_fit(&grid, one, Cell::from_coords(0, 5)));
        // same column
        assert!(!can_fit(&grid, one, Cell::from_coords(7, 0)));
        // same block
        assert!(!can_fit(&grid, one, Cell::from_coords(2, 2)));
        // unrelated cell
        assert!(can_fit(&grid, one, Cell::from_coords(4, 4)));
        // other digits are unconstrained
        assert!(can_fit(&grid, Digit::new(2), Cell::from_coords(0, 5)));
    }

    #[test]
    fn naked_single_is_fixed() {
        let mut grid = grid(
            "12345678.
             .........
             .........
             .........
             .........
             .........
             .........
             .........
             .........",
        );
        annotate(&mut grid);
        assert_eq!(
            grid.candidates(Cell::from_coords(0, 8)),
            Some([Digit::new(9)].iter().copied().collect())
        );
        assert!(fix_naked_singles(&mut grid));
        assert_eq!(grid.digit(Cell::from_coords(0, 8)), Some(Digit::new(9)));
    }

    #[test]
    fn hidden_single_is_fixed() {
        // 9 can go in many cells of row 0, but every column except the last
        // already sees a 9. The open cells of row 0 still have fat candidate
        // sets, only the per-house count pins the 9 down.
        let mut grid = grid(
            ".........
             ...9.....
             9........
             .......9.
             .9.......
             ....9....
             ......9..
             ..9......
             .....9...",
        );
        assert!(fix_hidden_singles(&mut grid));
        assert_eq!(grid.digit(Cell::from_coords(0, 8)), Some(Digit::new(9)));
        assert_eq!(grid.digit(Cell::from_coords(0, 0)), None);
    }

    #[test]
    fn reduce_reports_no_change_on_reduced_grid() {
        let mut grid = grid(
            "..3.2.6..
             9..3.5..1
             ..18.64..
             ..81.29..
             7.......8
             ..67.82..
             ..26.95..
             8..2.3..9
             ..5.1.3..",
        );
        fixpoint(&mut grid);
        let before = grid.snapshot();
        assert!(!reduce(&mut grid));
        assert_eq!(grid.snapshot(), before);
    }
}
