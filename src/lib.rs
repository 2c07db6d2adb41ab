// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements a small, easy-to-understand number place (Sudoku)
//! engine. It supports the following key features:
//!
//! * Parsing and printing puzzle grids of any size whose side length has an
//! integer square root (4x4, 9x9, 16x16, ...)
//! * Querying row, column, and box occupancy as well as the overall grid
//! state
//! * Solving grids using a perfect backtracking algorithm
//!
//! Note in this introduction we will mostly be using 4x4 grids due to their
//! simpler nature. These are divided in 4 2x2 boxes, each with the symbols 1
//! to 4, just like each row and column.
//!
//! # Parsing and printing grids
//!
//! See [Grid::parse] for the exact format of a grid code.
//!
//! Codes can be used to exchange grids, while [Grid]'s `Display`
//! implementation prints one comma-separated line per row, with unassigned
//! cells rendered as the placeholder value. An example of how to parse and
//! display a grid is provided below.
//!
//! ```
//! use number_place::Grid;
//!
//! let grid = Grid::parse("4;2, ,3, , ,1, , ,1, , ,4, ,2, ,3").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Solving grids
//!
//! This crate offers a [Solver](solver::Solver) trait for structs that can
//! solve number place puzzles. As a default implementation,
//! [BacktrackingSolver](solver::BacktrackingSolver) is provided, which finds
//! the first solution in a fixed search order, or reports that none exists.
//! As it is a zero-sized struct, no instantiation is required.
//!
//! ```
//! use number_place::Grid;
//! use number_place::solver::{BacktrackingSolver, Solver};
//!
//! // The riddle:
//! // ╔═══╤═══╦═══╤═══╗
//! // ║   │   ║   │ 4 ║
//! // ╟───┼───╫───┼───╢
//! // ║   │ 4 ║ 3 │   ║
//! // ╠═══╪═══╬═══╪═══╣
//! // ║   │ 3 ║   │   ║
//! // ╟───┼───╫───┼───╢
//! // ║   │   ║ 1 │   ║
//! // ╚═══╧═══╩═══╧═══╝
//! let mut grid = Grid::parse("4; , , ,4, ,4,3, , ,3, , , , ,1, ").unwrap();
//!
//! assert!(BacktrackingSolver.solve(&mut grid));
//!
//! // The solution we expect:
//! // ╔═══╤═══╦═══╤═══╗
//! // ║ 3 │ 1 ║ 2 │ 4 ║
//! // ╟───┼───╫───┼───╢
//! // ║ 2 │ 4 ║ 3 │ 1 ║
//! // ╠═══╪═══╬═══╪═══╣
//! // ║ 1 │ 3 ║ 4 │ 2 ║
//! // ╟───┼───╫───┼───╢
//! // ║ 4 │ 2 ║ 1 │ 3 ║
//! // ╚═══╧═══╩═══╧═══╝
//! let expected = Grid::parse("4;3,1,2,4,2,4,3,1,1,3,4,2,4,2,1,3").unwrap();
//!
//! assert_eq!(expected, grid);
//! ```
//!
//! Solving mutates the grid in place. On success it holds the completed
//! puzzle; on failure it is restored to its prior state, as shown below.
//!
//! ```
//! use number_place::Grid;
//! use number_place::solver::{BacktrackingSolver, Solver};
//!
//! // The last cell of the first row has no legal symbol: 1, 2, and 3
//! // occupy its row and 4 occupies its column.
//! let mut grid = Grid::parse("4;1,2,3, , , , ,4, , , , , , , , ").unwrap();
//! let before = grid.clone();
//!
//! assert!(!BacktrackingSolver.solve(&mut grid));
//! assert_eq!(before, grid);
//! ```
//!
//! # Note regarding performance
//!
//! Solving is exhaustive depth-first search, so large or very sparse grids
//! can take a while. It is strongly recommended to use at least
//! `opt-level = 2` in any profile that solves grids beyond 9x9, including
//! tests.

pub mod error;
pub mod solver;
pub mod util;

#[cfg(test)]
mod random_tests;

use error::{GridError, GridParseError, GridParseResult, GridResult};
use util::{contains_duplicate, SymbolSet};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

#[cfg(windows)]
const LINE_SEPARATOR: &'static str = "\r\n";

#[cfg(not(windows))]
const LINE_SEPARATOR: &'static str = "\n";

/// A number place grid is a square arrangement of cells which is subdivided
/// into square boxes. A grid of side length `side` consists of `side * side`
/// cells organized into `side` rows, `side` columns, and `side` boxes of
/// width `floor(sqrt(side))`, which requires the side length to have an
/// integer square root. Each cell either holds a symbol in `[1, side]` or
/// the grid's placeholder value, which marks the cell as unassigned.
///
/// Cells are stored in row-major order, so the cell in row `r` and column
/// `c` has the index `r * side + c`. All cell-related methods on this type
/// take such flat indices.
///
/// `Grid` implements `Display` by printing one line per row, with the values
/// of a row separated by commas and unassigned cells rendered literally as
/// the placeholder. As an example, a solved 4x4 grid prints like this:
///
/// ```text
/// 1,2,3,4
/// 3,4,1,2
/// 2,1,4,3
/// 4,3,2,1
/// ```
///
/// A `Grid` can also be serialized and deserialized using serde.
/// Deserialization performs the same validation as [Grid::from_cells], so it
/// is not possible to obtain a malformed grid from it.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "(usize, usize, Vec<usize>)")]
#[serde(try_from = "(usize, usize, Vec<usize>)")]
pub struct Grid {
    side: usize,
    box_width: usize,
    placeholder: usize,
    cells: Vec<usize>
}

fn box_width_of(side: usize) -> GridResult<usize> {
    if side == 0 {
        return Err(GridError::InvalidDimensions);
    }

    let box_width = (side as f64).sqrt().round() as usize;

    if box_width * box_width != side {
        return Err(GridError::InvalidDimensions);
    }

    Ok(box_width)
}

fn entry_to_string(value: usize, placeholder: usize) -> String {
    if value == placeholder {
        String::from("")
    }
    else {
        value.to_string()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..self.side {
            for column in 0..self.side {
                if column != 0 {
                    f.write_str(",")?;
                }

                write!(f, "{}", self.cells[row * self.side + column])?;
            }

            f.write_str(LINE_SEPARATOR)?;
        }

        Ok(())
    }
}

impl Grid {

    /// The placeholder value used by grids for which no other placeholder
    /// was specified. It is also the placeholder of all grids obtained from
    /// [Grid::parse].
    pub const DEFAULT_PLACEHOLDER: usize = 0;

    /// Creates a new, empty grid with the given side length and the default
    /// placeholder. All cells are initialized to the placeholder.
    ///
    /// # Arguments
    ///
    /// * `side`: The side length of the grid, that is, the number of rows,
    /// columns, and boxes. Must be greater than 0 and have an integer square
    /// root, which becomes the box width. For an ordinary Sudoku grid, this
    /// is 9.
    ///
    /// # Errors
    ///
    /// If `side` is zero or has no integer square root. In that case,
    /// `GridError::InvalidDimensions` is returned.
    pub fn new(side: usize) -> GridResult<Grid> {
        Grid::with_placeholder(side, Grid::DEFAULT_PLACEHOLDER)
    }

    /// Creates a new, empty grid with the given side length and placeholder.
    /// All cells are initialized to the placeholder.
    ///
    /// # Arguments
    ///
    /// * `side`: The side length of the grid, that is, the number of rows,
    /// columns, and boxes. Must be greater than 0 and have an integer square
    /// root, which becomes the box width.
    /// * `placeholder`: The value that marks a cell as unassigned. Must lie
    /// outside the symbol range `[1, side]`.
    ///
    /// # Errors
    ///
    /// * `GridError::InvalidDimensions`: If `side` is zero or has no integer
    /// square root.
    /// * `GridError::InvalidPlaceholder`: If `placeholder` is in the range
    /// `[1, side]`.
    pub fn with_placeholder(side: usize, placeholder: usize)
            -> GridResult<Grid> {
        let box_width = box_width_of(side)?;

        if placeholder != 0 && placeholder <= side {
            return Err(GridError::InvalidPlaceholder);
        }

        let cells = vec![placeholder; side * side];

        Ok(Grid {
            side,
            box_width,
            placeholder,
            cells
        })
    }

    /// Creates a grid with the given side length and placeholder whose cells
    /// are initialized from the given vector, which must list them in
    /// row-major order. Unassigned cells must hold exactly the placeholder
    /// value. The provided cells are fully validated, so this constructor
    /// cannot yield a grid that violates the puzzle rules.
    ///
    /// # Arguments
    ///
    /// * `side`: The side length of the grid, that is, the number of rows,
    /// columns, and boxes. Must be greater than 0 and have an integer square
    /// root, which becomes the box width.
    /// * `placeholder`: The value that marks a cell as unassigned. Must lie
    /// outside the symbol range `[1, side]`.
    /// * `cells`: The initial cell values in row-major order. Must contain
    /// exactly `side * side` entries, each of which is the placeholder or a
    /// symbol in `[1, side]`, and no row, column, or box may contain the
    /// same symbol twice.
    ///
    /// # Errors
    ///
    /// * `GridError::InvalidDimensions`: If `side` is zero or has no integer
    /// square root.
    /// * `GridError::InvalidPlaceholder`: If `placeholder` is in the range
    /// `[1, side]`.
    /// * `GridError::WrongNumberOfCells`: If `cells` does not contain
    /// exactly `side * side` entries.
    /// * `GridError::InvalidSymbol`: If an entry is neither the placeholder
    /// nor in the range `[1, side]`.
    /// * `GridError::InconsistentGrid`: If a row, column, or box contains
    /// the same symbol twice.
    pub fn from_cells(side: usize, placeholder: usize, cells: Vec<usize>)
            -> GridResult<Grid> {
        let mut grid = Grid::with_placeholder(side, placeholder)?;

        if cells.len() != grid.cells.len() {
            return Err(GridError::WrongNumberOfCells);
        }

        grid.cells = cells;

        for &value in &grid.cells {
            if value != placeholder && !grid.is_symbol(value) {
                return Err(GridError::InvalidSymbol);
            }
        }

        grid.verify_consistent()?;
        Ok(grid)
    }

    /// Parses a code encoding a grid. The code has to be of the format
    /// `<side>;<cells>` where `<cells>` is a comma-separated list of
    /// entries, which are either empty, the default placeholder, or a symbol
    /// in `[1, side]`. The entries are assigned left-to-right,
    /// top-to-bottom, where each row is completed before the next one is
    /// started. Whitespace in the entries is ignored to allow for more
    /// intuitive formatting. The number of entries must be `side * side`.
    /// The parsed grid always uses the default placeholder.
    ///
    /// As an example, the code `4;1, ,2, , ,3, ,4, , , ,3, ,1, ,2` parses to
    /// a grid whose display form is the following:
    ///
    /// ```text
    /// 1,0,2,0
    /// 0,3,0,4
    /// 0,0,0,3
    /// 0,1,0,2
    /// ```
    ///
    /// # Errors
    ///
    /// Any specialization of `GridParseError` (see that documentation).
    pub fn parse(code: &str) -> GridParseResult<Grid> {
        let parts: Vec<&str> = code.split(';').collect();

        if parts.len() != 2 {
            return Err(GridParseError::WrongNumberOfParts);
        }

        let side = parts[0].parse::<usize>()?;

        if let Ok(mut grid) = Grid::new(side) {
            let entries: Vec<&str> = parts[1].split(',').collect();

            if entries.len() != side * side {
                return Err(GridParseError::WrongNumberOfCells);
            }

            for (i, entry) in entries.iter().enumerate() {
                let entry = entry.trim();

                if entry.is_empty() {
                    continue;
                }

                let symbol = entry.parse::<usize>()?;

                if symbol == Grid::DEFAULT_PLACEHOLDER {
                    continue;
                }

                if symbol > side {
                    return Err(GridParseError::InvalidSymbol);
                }

                grid.cells[i] = symbol;
            }

            grid.verify_consistent()?;
            Ok(grid)
        }
        else {
            Err(GridParseError::InvalidDimensions)
        }
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [Grid::parse]. That is, a grid that is converted to a string and
    /// parsed again will not change, as is illustrated below. Unassigned
    /// cells become empty entries, so a grid with a custom placeholder
    /// parses back to one with the same assignments and the default
    /// placeholder.
    ///
    /// ```
    /// use number_place::Grid;
    ///
    /// let mut grid = Grid::new(4).unwrap();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_value(5, 4);
    /// grid.set_value(10, 2);
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = Grid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        let mut s = format!("{};", self.side);
        let placeholder = self.placeholder;
        let cells = self.cells.iter()
            .map(|&value| entry_to_string(value, placeholder))
            .collect::<Vec<String>>()
            .join(",");
        s.push_str(cells.as_str());
        s
    }

    /// Gets the side length of the grid, that is, the number of rows,
    /// columns, and boxes, which is also the highest symbol value.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Gets the width (and height) of one box of the grid. This is the
    /// integer square root of [Grid::side].
    pub fn box_width(&self) -> usize {
        self.box_width
    }

    /// Gets the value that marks a cell of this grid as unassigned.
    pub fn placeholder(&self) -> usize {
        self.placeholder
    }

    /// Gets the current value of the cell at the given index, which is the
    /// placeholder for unassigned cells.
    ///
    /// # Arguments
    ///
    /// * `index`: The flat index of the desired cell. Must be in the range
    /// `[0, side * side[`.
    ///
    /// # Panics
    ///
    /// If `index` is not in the specified range.
    pub fn value(&self, index: usize) -> usize {
        self.cells[index]
    }

    /// Sets the cell at the given index to the given symbol, overwriting any
    /// previous value. No validation is performed, neither of the symbol nor
    /// of the resulting grid. The grid stays consistent as long as callers
    /// only place symbols that are absent from the candidate cell's row,
    /// column, and box, which can be checked with the region queries
    /// [Grid::row_values], [Grid::column_values], and [Grid::box_values].
    ///
    /// # Arguments
    ///
    /// * `index`: The flat index of the assigned cell. Must be in the range
    /// `[0, side * side[`.
    /// * `symbol`: The value to assign to the specified cell.
    ///
    /// # Panics
    ///
    /// If `index` is not in the specified range.
    pub fn set_value(&mut self, index: usize, symbol: usize) {
        self.cells[index] = symbol;
    }

    /// Resets the cell at the given index to the placeholder, marking it as
    /// unassigned. If the cell is already unassigned, it is left that way.
    ///
    /// # Arguments
    ///
    /// * `index`: The flat index of the cleared cell. Must be in the range
    /// `[0, side * side[`.
    ///
    /// # Panics
    ///
    /// If `index` is not in the specified range.
    pub fn clear_value(&mut self, index: usize) {
        self.cells[index] = self.placeholder;
    }

    /// Indicates whether the cell at the given index is unassigned, that is,
    /// holds the placeholder value.
    ///
    /// # Arguments
    ///
    /// * `index`: The flat index of the checked cell. Must be in the range
    /// `[0, side * side[`.
    ///
    /// # Panics
    ///
    /// If `index` is not in the specified range.
    pub fn is_unassigned(&self, index: usize) -> bool {
        self.cells[index] == self.placeholder
    }

    fn is_symbol(&self, value: usize) -> bool {
        value != 0 && value <= self.side
    }

    /// Returns the set of distinct symbols in the row containing the cell
    /// with the given index, including that cell's own value if it is
    /// assigned. Values outside the symbol range, in particular the
    /// placeholder, are ignored.
    ///
    /// # Arguments
    ///
    /// * `index`: The flat index of a cell in the desired row. Must be in
    /// the range `[0, side * side[`.
    ///
    /// # Panics
    ///
    /// If `index` is not in the specified range.
    pub fn row_values(&self, index: usize) -> SymbolSet {
        assert!(index < self.cells.len(),
            "cell index {} out of bounds for side {}", index, self.side);

        let row_start = index / self.side * self.side;
        let mut values = SymbolSet::new(self.side);

        for i in row_start..(row_start + self.side) {
            let value = self.cells[i];

            if self.is_symbol(value) {
                values.insert(value).unwrap();
            }
        }

        values
    }

    /// Returns the set of distinct symbols in the column containing the cell
    /// with the given index, including that cell's own value if it is
    /// assigned. Values outside the symbol range, in particular the
    /// placeholder, are ignored.
    ///
    /// # Arguments
    ///
    /// * `index`: The flat index of a cell in the desired column. Must be in
    /// the range `[0, side * side[`.
    ///
    /// # Panics
    ///
    /// If `index` is not in the specified range.
    pub fn column_values(&self, index: usize) -> SymbolSet {
        assert!(index < self.cells.len(),
            "cell index {} out of bounds for side {}", index, self.side);

        let column_start = index % self.side;
        let mut values = SymbolSet::new(self.side);

        for i in (column_start..self.cells.len()).step_by(self.side) {
            let value = self.cells[i];

            if self.is_symbol(value) {
                values.insert(value).unwrap();
            }
        }

        values
    }

    /// Returns the set of distinct symbols in the box containing the cell
    /// with the given index, including that cell's own value if it is
    /// assigned. Values outside the symbol range, in particular the
    /// placeholder, are ignored.
    ///
    /// With `w` being the box width, the box containing a cell spans the
    /// rows starting at `(index / side / w) * w` and the columns starting at
    /// `(index % side / w) * w`, with `w` rows and columns each.
    ///
    /// # Arguments
    ///
    /// * `index`: The flat index of a cell in the desired box. Must be in
    /// the range `[0, side * side[`.
    ///
    /// # Panics
    ///
    /// If `index` is not in the specified range.
    pub fn box_values(&self, index: usize) -> SymbolSet {
        assert!(index < self.cells.len(),
            "cell index {} out of bounds for side {}", index, self.side);

        let w = self.box_width;
        let box_top = index / self.side / w * w;
        let box_left = index % self.side / w * w;
        let mut values = SymbolSet::new(self.side);

        for row in box_top..(box_top + w) {
            for column in box_left..(box_left + w) {
                let value = self.cells[row * self.side + column];

                if self.is_symbol(value) {
                    values.insert(value).unwrap();
                }
            }
        }

        values
    }

    /// Returns the index of the first unassigned cell in row-major order,
    /// that is, the lowest index whose cell holds the placeholder, or `None`
    /// if every cell is assigned. This scan order is fixed and part of the
    /// observable contract: it determines which solution a solver relying on
    /// it finds first.
    pub fn first_unassigned(&self) -> Option<usize> {
        self.cells.iter().position(|&value| value == self.placeholder)
    }

    /// Returns the number of unassigned cells in this grid.
    pub fn count_unassigned(&self) -> usize {
        self.cells.iter()
            .filter(|&&value| value == self.placeholder)
            .count()
    }

    /// Indicates whether this grid is empty, i.e. every cell is unassigned.
    /// In this case, [Grid::count_unassigned] returns the square of
    /// [Grid::side].
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&value| value == self.placeholder)
    }

    /// Indicates whether this grid is complete, i.e. no cell is unassigned.
    /// In this case, [Grid::count_unassigned] returns 0. Note that a
    /// complete grid need not satisfy the puzzle rules; use
    /// [Grid::is_solved] to check that as well.
    pub fn is_complete(&self) -> bool {
        !self.cells.iter().any(|&value| value == self.placeholder)
    }

    fn verify_consistent(&self) -> GridResult<()> {
        let side = self.side;

        for row in 0..side {
            let row_start = row * side;
            let values = self.cells[row_start..(row_start + side)].iter()
                .filter(|&&value| self.is_symbol(value));

            if contains_duplicate(values) {
                return Err(GridError::InconsistentGrid);
            }
        }

        for column in 0..side {
            let values = self.cells.iter()
                .skip(column)
                .step_by(side)
                .filter(|&&value| self.is_symbol(value));

            if contains_duplicate(values) {
                return Err(GridError::InconsistentGrid);
            }
        }

        let w = self.box_width;

        for box_index in 0..side {
            let box_top = box_index / w * w;
            let box_left = box_index % w * w;
            let mut values = Vec::new();

            for row in box_top..(box_top + w) {
                for column in box_left..(box_left + w) {
                    let value = self.cells[row * side + column];

                    if self.is_symbol(value) {
                        values.push(value);
                    }
                }
            }

            if contains_duplicate(values.into_iter()) {
                return Err(GridError::InconsistentGrid);
            }
        }

        Ok(())
    }

    /// Indicates whether this grid is a solution, that is, it is complete
    /// and every row, column, and box contains each symbol exactly once.
    pub fn is_solved(&self) -> bool {
        self.is_complete() && self.verify_consistent().is_ok()
    }

    fn verify_dimensions(&self, other: &Grid) -> GridResult<()> {
        if self.side != other.side {
            Err(GridError::InvalidDimensions)
        }
        else {
            Ok(())
        }
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells assigned in this grid must be assigned in `other`
    /// with the same symbol. If this condition is met, `true` is returned,
    /// and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If the side lengths of this and the `other` grid are not the same. In
    /// that case, `GridError::InvalidDimensions` is returned.
    pub fn is_subset(&self, other: &Grid) -> GridResult<bool> {
        self.verify_dimensions(other)?;
        Ok(self.cells.iter()
            .zip(other.cells.iter())
            .all(|(&self_value, &other_value)|
                self_value == self.placeholder ||
                    self_value == other_value))
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells assigned in the `other` grid must be assigned
    /// in this one with the same symbol. If this condition is met, `true` is
    /// returned, and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If the side lengths of this and the `other` grid are not the same. In
    /// that case, `GridError::InvalidDimensions` is returned.
    pub fn is_superset(&self, other: &Grid) -> GridResult<bool> {
        other.is_subset(self)
    }

    /// Gets the slice which holds the cell values. They are in row-major
    /// order, that is, left-to-right, top-to-bottom with rows together.
    /// Unassigned cells hold the placeholder.
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }
}

impl From<Grid> for (usize, usize, Vec<usize>) {
    fn from(grid: Grid) -> (usize, usize, Vec<usize>) {
        (grid.side, grid.placeholder, grid.cells)
    }
}

impl TryFrom<(usize, usize, Vec<usize>)> for Grid {
    type Error = GridError;

    fn try_from(parts: (usize, usize, Vec<usize>)) -> GridResult<Grid> {
        let (side, placeholder, cells) = parts;
        Grid::from_cells(side, placeholder, cells)
    }
}
