//! This module defines the [Solver] trait for structs that can solve number
//! place puzzles as well as [BacktrackingSolver], a perfect solver provided
//! by this crate. Solvers work on a [Grid] in place, so solving an
//! unsolvable grid leaves it untouched.
//!
//! # Example
//!
//! ```
//! use number_place::Grid;
//! use number_place::solver::{BacktrackingSolver, Solver};
//!
//! let mut grid = Grid::new(4).unwrap();
//!
//! assert!(BacktrackingSolver.solve(&mut grid));
//! assert!(grid.is_solved());
//! ```

use crate::Grid;
use crate::util::SymbolSet;

/// A trait for structs that can solve number place puzzles. Solvers operate
/// on a grid in place: a successful call leaves the solution in the grid,
/// while a failed call restores the grid to the state in which it was
/// provided.
pub trait Solver {

    /// Attempts to solve the given grid, that is, to assign a symbol to
    /// every unassigned cell such that no row, column, or box contains the
    /// same symbol twice. Cells that are already assigned are never changed.
    ///
    /// # Arguments
    ///
    /// * `grid`: The [Grid] to solve. On success it holds the solution, on
    /// failure it is left in its initial configuration.
    ///
    /// # Returns
    ///
    /// `true` if and only if a solution was found.
    fn solve(&self, grid: &mut Grid) -> bool;
}

fn candidates(grid: &Grid, index: usize) -> SymbolSet {
    let mut used = grid.row_values(index);
    used |= &grid.column_values(index);
    used |= &grid.box_values(index);
    SymbolSet::full(grid.side()) - &used
}

/// A perfect [Solver] which fills the grid by depth-first search. It scans
/// for the first unassigned cell in row-major order, computes the symbols
/// that are absent from that cell's row, column, and box, and tries them in
/// ascending order, recursing after each tentative assignment. A cell whose
/// options are exhausted is reset to the placeholder before the search
/// backtracks to the previously assigned cell.
///
/// This process finds a solution whenever one exists. Which solution is
/// found is fully determined by the scan and symbol order, so repeated runs
/// on equal grids yield equal results. If the search space is exhausted
/// without a solution, `false` is returned and the grid is restored to its
/// initial configuration.
///
/// As this is a zero-sized struct, it does not need to be instantiated:
/// `BacktrackingSolver` itself is a valid expression of its own type.
pub struct BacktrackingSolver;

impl BacktrackingSolver {

    fn solve_rec(grid: &mut Grid) -> bool {
        let index = match grid.first_unassigned() {
            Some(index) => index,
            None => return true
        };
        let options = candidates(grid, index);

        for symbol in options.iter() {
            grid.set_value(index, symbol);

            if BacktrackingSolver::solve_rec(grid) {
                return true;
            }
        }

        grid.clear_value(index);
        false
    }
}

impl Solver for BacktrackingSolver {
    fn solve(&self, grid: &mut Grid) -> bool {
        BacktrackingSolver::solve_rec(grid)
    }
}
