//! Errors reported when a field cannot be built.
//!
//! Play operations never fail: opening or flagging a cell which can't be acted upon is silently ignored. Only construction can go wrong, and it does so before any cell exists.

use thiserror::Error;

/// A precondition violated while constructing a [`Field`](crate::Field).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    /// One of the dimensions is zero.
    #[error("field dimensions must be non-zero, got {width}x{height}")]
    EmptyDimensions {
        /// The requested number of columns.
        width: usize,
        /// The requested number of rows.
        height: usize,
    },
    /// The area of the field does not fit into a `usize`.
    #[error("a {width}x{height} field has more cells than can be addressed")]
    TooLarge {
        /// The requested number of columns.
        width: usize,
        /// The requested number of rows.
        height: usize,
    },
    /// There are so many mines that not a single safe cell would remain.
    #[error("cannot place {mines} mines on a field of {area} cells, at least one cell must stay safe")]
    TooManyMines {
        /// The requested number of mines.
        mines: usize,
        /// The number of cells on the field.
        area: usize,
    },
    /// An explicit mine layout contains a mine outside of the field.
    #[error("mine at row {row}, column {col} lies outside of the field")]
    MineOutOfBounds {
        /// Row of the offending mine.
        row: usize,
        /// Column of the offending mine.
        col: usize,
    },
    /// An explicit mine layout lists the same cell twice.
    #[error("mine at row {row}, column {col} is listed more than once")]
    DuplicateMine {
        /// Row of the offending mine.
        row: usize,
        /// Column of the offending mine.
        col: usize,
    },
}

/// A neighboring mine count which is not a valid [`Hint`](crate::Hint).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("{0} is not a valid hint, hints range from 1 to 8")]
pub struct InvalidHint(pub u8);

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_offending_values() {
        let err = FieldError::TooManyMines { mines: 9, area: 9 };
        assert_eq!(
            err.to_string(),
            "cannot place 9 mines on a field of 9 cells, at least one cell must stay safe"
        );
        let err = FieldError::MineOutOfBounds { row: 3, col: 7 };
        assert_eq!(err.to_string(), "mine at row 3, column 7 lies outside of the field");
        assert_eq!(InvalidHint(0).to_string(), "0 is not a valid hint, hints range from 1 to 8");
    }
}
