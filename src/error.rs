//! This module contains some error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// An enumeration of the errors that may be raised when constructing a
/// [Grid](../struct.Grid.html) from its raw parts. This does not include
/// errors that occur when parsing a grid from its string code, see
/// [GridParseError](enum.GridParseError.html) for that.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GridError {

    /// Indicates that the side length specified for a created grid is
    /// invalid. This is the case if it is zero or has no integer square
    /// root, since the boxes of such a grid would be malformed.
    InvalidDimensions,

    /// Indicates that the placeholder specified for a created grid collides
    /// with the symbol range. The placeholder must lie outside `[1, side]`,
    /// otherwise an unassigned cell could not be told apart from an assigned
    /// one.
    InvalidPlaceholder,

    /// Indicates that the number of cells provided for a created grid does
    /// not equal the square of its side length.
    WrongNumberOfCells,

    /// Indicates that a cell is filled with a value which is neither the
    /// placeholder nor a symbol in `[1, side]`.
    InvalidSymbol,

    /// Indicates that the provided cells already violate the puzzle rules,
    /// that is, some row, column, or box contains the same symbol twice.
    InconsistentGrid
}

impl Display for GridError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimensions =>
                write!(f, "invalid dimensions"),
            GridError::InvalidPlaceholder =>
                write!(f, "placeholder inside the symbol range"),
            GridError::WrongNumberOfCells =>
                write!(f, "wrong number of cells"),
            GridError::InvalidSymbol =>
                write!(f, "symbol outside the valid range"),
            GridError::InconsistentGrid =>
                write!(f, "grid violates the puzzle rules")
        }
    }
}

/// Syntactic sugar for `Result<V, GridError>`.
pub type GridResult<V> = Result<V, GridError>;

/// An enumeration of the errors that may occur when parsing a
/// [Grid](../struct.Grid.html) from its string code.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GridParseError {

    /// Indicates that the code has the wrong number of parts, which are
    /// separated by semicolons. The code should have two parts: the side
    /// length and the cells (separated by ';'), so if the code does not
    /// contain exactly one semicolon, this error will be returned.
    WrongNumberOfParts,

    /// Indicates that the side length or one of the cell entries could not
    /// be parsed as a number.
    NumberFormatError,

    /// Indicates that the parsed side length is invalid (zero or without an
    /// integer square root).
    InvalidDimensions,

    /// Indicates that the placeholder collides with the symbol range. Codes
    /// use the default placeholder, so this cannot currently be raised by
    /// parsing, but it mirrors the corresponding constructor error.
    InvalidPlaceholder,

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal the square of the side length.
    WrongNumberOfCells,

    /// Indicates that a cell is filled with a number outside the symbol
    /// range deduced from the side length.
    InvalidSymbol,

    /// Indicates that the parsed cells already violate the puzzle rules,
    /// that is, some row, column, or box contains the same symbol twice.
    InconsistentGrid
}

impl Display for GridParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GridParseError::WrongNumberOfParts =>
                write!(f, "wrong number of ';'-separated parts"),
            GridParseError::NumberFormatError =>
                write!(f, "malformed number"),
            GridParseError::InvalidDimensions =>
                write!(f, "invalid dimensions"),
            GridParseError::InvalidPlaceholder =>
                write!(f, "placeholder inside the symbol range"),
            GridParseError::WrongNumberOfCells =>
                write!(f, "wrong number of cells"),
            GridParseError::InvalidSymbol =>
                write!(f, "symbol outside the valid range"),
            GridParseError::InconsistentGrid =>
                write!(f, "grid violates the puzzle rules")
        }
    }
}

impl From<ParseIntError> for GridParseError {
    fn from(_: ParseIntError) -> Self {
        GridParseError::NumberFormatError
    }
}

impl From<GridError> for GridParseError {
    fn from(e: GridError) -> Self {
        match e {
            GridError::InvalidDimensions => GridParseError::InvalidDimensions,
            GridError::InvalidPlaceholder =>
                GridParseError::InvalidPlaceholder,
            GridError::WrongNumberOfCells =>
                GridParseError::WrongNumberOfCells,
            GridError::InvalidSymbol => GridParseError::InvalidSymbol,
            GridError::InconsistentGrid => GridParseError::InconsistentGrid
        }
    }
}

/// Syntactic sugar for `Result<V, GridParseError>`.
pub type GridParseResult<V> = Result<V, GridParseError>;
