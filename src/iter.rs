//! Iterators useful for traversing a field.
//!
//! Currently available:
//! - [`Neighbors`][neighbors] — iterates over the coordinates of the up to 8 cells surrounding a cell
//! - [`Rows`][rows] — iterates over the rows of a field (each item is a slice of cells)
//!
//! [neighbors]: struct.Neighbors.html "Neighbors — iterates over the Moore neighborhood of a cell"
//! [rows]: struct.Rows.html "Rows — iterates over the rows of a field"

use core::{
    iter::FusedIterator,
    slice::ChunksExact,
};
use crate::{
    Cell, Field, FieldCoordinates, FieldDimensions,
};

/// Row and column offsets of the Moore neighborhood in clockwise order, starting from top-left: ↖, ↑, ↗, →, ↘, ↓, ↙, ←.
const DIRECTIONS: [[isize; 2]; 8] = [
    [-1, -1], [-1, 0], [-1, 1],
    [0, 1],
    [1, 1], [1, 0], [1, -1],
    [0, -1],
];

/// Iterates over the coordinates of the cells directly and diagonally adjacent to a cell, skipping the ones which would fall outside of the field.
///
/// Corner cells have 3 neighbors, edge cells have 5 and all other cells have 8.
///
/// # Usage
/// ```
/// # use minefield::Field;
/// #
/// let field = Field::from_mines(4, 3, []).unwrap(); // 4 columns, 3 rows, no mines
/// let corner: Vec<_> = field.neighbors(0, 0).unwrap().collect();
/// assert_eq!(corner, [[0, 1], [1, 1], [1, 0]]); // Right, down-right and down
/// assert_eq!(field.neighbors(1, 1).unwrap().count(), 8);
/// assert!(field.neighbors(3, 0).is_none()); // Row 3 doesn't exist
/// ```
#[derive(Clone, Debug)]
pub struct Neighbors {
    center: FieldCoordinates,
    width: usize,
    height: usize,
    direction: usize,
}
impl Neighbors {
    /// Creates an iterator over the neighbors of the specified cell on a field with the specified dimensions.
    #[inline]
    #[must_use]
    pub fn new(center: FieldCoordinates, dimensions: FieldDimensions) -> Self {
        Self {
            center,
            width: dimensions[0].get(),
            height: dimensions[1].get(),
            direction: 0,
        }
    }
}
impl Iterator for Neighbors {
    type Item = FieldCoordinates;
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&[row_offset, col_offset]) = DIRECTIONS.get(self.direction) {
            self.direction += 1;
            let row = self.center[0].checked_add_signed(row_offset);
            let col = self.center[1].checked_add_signed(col_offset);
            if let (Some(row), Some(col)) = (row, col) {
                if row < self.height && col < self.width {
                    return Some([row, col]);
                }
            }
        }
        None
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(DIRECTIONS.len().saturating_sub(self.direction)))
    }
}
impl FusedIterator for Neighbors {}

/// An iterator over the rows of a field, from top to bottom.
///
/// Each row is a slice of cells ordered from left to right, so the whole grid can be walked without any coordinate arithmetic.
///
/// # Usage
/// ```
/// # use minefield::Field;
/// #
/// let field = Field::from_mines(9, 4, [[3, 8]]).unwrap(); // A mine in the bottom right corner
/// let mut row_with_mine = None;
/// for (row, cells) in field.rows().enumerate() {
///     if cells.iter().any(|cell| cell.is_mine()) {
///         row_with_mine = Some(row);
///     }
/// }
/// assert_eq!(row_with_mine, Some(3));
/// ```
#[derive(Clone, Debug)]
pub struct Rows<'f> {
    chunks: ChunksExact<'f, Cell>,
}
impl<'f> Rows<'f> {
    /// Returns an iterator over the specified field's rows.
    #[inline]
    #[must_use]
    pub fn new(field: &'f Field) -> Self {
        Self {
            chunks: field.cells().chunks_exact(field.width()),
        }
    }
}
impl<'f> Iterator for Rows<'f> {
    type Item = &'f [Cell];
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}
impl<'f> DoubleEndedIterator for Rows<'f> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.chunks.next_back()
    }
}
impl ExactSizeIterator for Rows<'_> {}
impl FusedIterator for Rows<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::num::NonZeroUsize;

    fn dimensions(width: usize, height: usize) -> FieldDimensions {
        [
            NonZeroUsize::new(width).expect("non-zero width"),
            NonZeroUsize::new(height).expect("non-zero height"),
        ]
    }

    #[test]
    fn neighborhood_is_clipped_at_the_borders() {
        let dims = dimensions(5, 4);
        assert_eq!(Neighbors::new([0, 0], dims).count(), 3);
        assert_eq!(Neighbors::new([3, 4], dims).count(), 3);
        assert_eq!(Neighbors::new([0, 2], dims).count(), 5);
        assert_eq!(Neighbors::new([2, 0], dims).count(), 5);
        assert_eq!(Neighbors::new([2, 2], dims).count(), 8);
    }

    #[test]
    fn neighborhood_goes_clockwise_from_top_left() {
        let all: Vec<_> = Neighbors::new([1, 1], dimensions(3, 3)).collect();
        assert_eq!(all, [[0, 0], [0, 1], [0, 2], [1, 2], [2, 2], [2, 1], [2, 0], [1, 0]]);
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        let mut neighbors = Neighbors::new([0, 0], dimensions(1, 1));
        assert_eq!(neighbors.next(), None);
        assert_eq!(neighbors.next(), None);
    }

    #[test]
    fn one_wide_strip_only_looks_up_and_down() {
        let all: Vec<_> = Neighbors::new([2, 0], dimensions(1, 5)).collect();
        assert_eq!(all, [[1, 0], [3, 0]]);
    }

    #[test]
    fn rows_cover_the_grid() {
        let field = Field::from_mines(3, 2, [[1, 2]]).expect("valid layout");
        let rows = field.rows();
        assert_eq!(rows.len(), 2);
        let rows: Vec<_> = rows.collect();
        assert!(rows.iter().all(|row| row.len() == 3));
        assert!(rows[1][2].is_mine());
        assert_eq!(field.rows().next_back().map(|row| row.as_ptr()), Some(rows[1].as_ptr()));
    }
}
