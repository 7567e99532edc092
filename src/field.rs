//! The playfield of a Minesweeper game.
//!
//! Everything a game does happens here, which is why this module is the most detailed one.

use core::{
    num::NonZeroUsize,
    ops::Index,
};
use alloc::{
    vec,
    vec::Vec,
};
use tracing::{instrument, trace};
use crate::{
    Cell, CellKind, CellStatus, FieldError, FieldParams, GameState,
    Neighbors, Rows,
};

mod generation;
mod reveal;
pub use reveal::ClickOutcome;

/// Represents a playfield.
///
/// Fields in Minesweeper are matrices of [cells][cell]. A field is generated once, when it's created, and is then played by calling [`open`][m_open] and [`toggle_flag`][m_flag] whenever the player clicks a cell. The field keeps track of how many cells are open and flagged, and of whether the game has been [won or lost][state]. Once the game is over, the field stops reacting to input.
///
/// Out-of-bounds coordinates, opening a flagged or already open cell and flagging an open cell are all silently ignored, so frontends can forward raw user input without checking it first.
///
/// [cell]: struct.Cell.html "Cell — a cell on a Minesweeper field"
/// [state]: enum.GameState.html "GameState — the state of a game as a whole"
/// [m_open]: #method.open "open — opens a cell, clearing its surroundings if it has no neighboring mines"
/// [m_flag]: #method.toggle_flag "toggle_flag — places or removes a flag on a closed cell"
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    dimensions: FieldDimensions,
    mine_count: usize,
    storage: Vec<Cell>,
    opened: usize,
    flagged: usize,
    state: GameState,
}
/// The dimensions of a field.
///
/// The first element specifies the width (the number of columns), while the second one specifies the height (number of rows). As required by `NonZeroUsize`, a field cannot be smaller than 1x1.
pub type FieldDimensions = [NonZeroUsize; 2];
/// The coordinates of a cell on a field.
///
/// The first element specifies the row index, while the second one specifies the column index. This is the other way around from `FieldDimensions`, matching how the grid is stored: row after row. The coordinate system starts from zero, i.e. `[0, 0]` is the top left corner and the only cell of a 1x1 field.
pub type FieldCoordinates = [usize; 2];

impl Field {
    /// Generates a field with the given number of columns, rows and mines, placing the mines using the thread-local random number generator.
    ///
    /// # Errors
    /// Fails if either dimension is zero, if the area doesn't fit into a `usize` or if there wouldn't be a single cell without a mine.
    ///
    /// # Usage
    /// ```
    /// # use minefield::{Field, GameState};
    /// #
    /// let field = Field::new(9, 9, 10).unwrap();
    /// assert_eq!(field.cells().iter().filter(|cell| cell.is_mine()).count(), 10);
    /// assert_eq!(field.state(), GameState::Running);
    ///
    /// assert!(Field::new(3, 3, 9).is_err()); // No safe cell left
    /// ```
    #[cfg(all(feature = "std", feature = "generation"))]
    pub fn new(width: usize, height: usize, mines: usize) -> Result<Self, FieldError> {
        Self::with_rng(width, height, mines, &mut rand::rng())
    }
    /// Generates a field described by the given parameters. See [`new`][m_new].
    ///
    /// # Errors
    /// Fails under the same conditions as [`new`][m_new].
    ///
    /// [m_new]: #method.new "new — generates a field with the given number of columns, rows and mines"
    #[cfg(all(feature = "std", feature = "generation"))]
    #[inline]
    pub fn from_params(params: FieldParams) -> Result<Self, FieldError> {
        Self::new(params.width, params.height, params.mines)
    }
    /// Creates a field with mines at exactly the specified locations, given as `[row, column]` pairs.
    ///
    /// Hints are computed the same way as for randomly generated fields. This is meant for frontends which bring their own field generator, and for reproducing a known layout.
    ///
    /// # Errors
    /// Fails if either dimension is zero, if a mine lies outside of the field or is listed twice, or if there wouldn't be a single cell without a mine.
    pub fn from_mines<I>(width: usize, height: usize, mines: I) -> Result<Self, FieldError>
    where I: IntoIterator<Item = FieldCoordinates> {
        let mut field = Self::empty(FieldParams::new(width, height, 0))?;
        for [row, col] in mines {
            let index = field.index_of(row, col)
                .ok_or(FieldError::MineOutOfBounds { row, col })?;
            let cell = &mut field.storage[index];
            if cell.is_mine() {
                return Err(FieldError::DuplicateMine { row, col });
            }
            cell.kind = CellKind::Mine;
            field.mine_count += 1;
        }
        if field.mine_count >= field.area() {
            return Err(FieldError::TooManyMines { mines: field.mine_count, area: field.area() });
        }
        field.compute_hints();
        Ok(field)
    }
    /// Allocates a field with every cell closed and empty, after checking the parameters.
    fn empty(params: FieldParams) -> Result<Self, FieldError> {
        let (dimensions, area) = params.validate()?;
        Ok(Self {
            dimensions,
            mine_count: params.mines,
            storage: vec![Cell::default(); area],
            opened: 0,
            flagged: 0,
            state: GameState::Running,
        })
    }

    /// Returns the width and height of the field.
    #[inline]
    #[must_use]
    pub const fn dimensions(&self) -> FieldDimensions {
        self.dimensions
    }
    /// Returns the number of columns.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.dimensions[0].get()
    }
    /// Returns the number of rows.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.dimensions[1].get()
    }
    /// Returns the total number of cells.
    #[inline]
    #[must_use]
    pub fn area(&self) -> usize {
        self.storage.len()
    }
    /// Returns the number of mines on the field.
    #[inline]
    #[must_use]
    pub const fn mine_count(&self) -> usize {
        self.mine_count
    }
    /// Returns the number of cells which currently carry a flag.
    #[inline]
    #[must_use]
    pub const fn flag_count(&self) -> usize {
        self.flagged
    }
    /// Returns the number of cells which have been opened.
    #[inline]
    #[must_use]
    pub const fn opened_count(&self) -> usize {
        self.opened
    }
    /// Returns the amount of cells which the player still needs to open in order to win the game.
    ///
    /// This is zero once the game is over, since the whole field gets revealed at that point.
    #[inline]
    #[must_use]
    pub fn safe_cells_left(&self) -> usize {
        self.safe_cells().saturating_sub(self.opened)
    }
    /// Returns whether the game is still running, won or lost.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns all cells of the field in row-major order: the first row from left to right, then the second one, and so on.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.storage
    }
    /// Returns an iterator over the field's rows.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> Rows<'_> {
        Rows::new(self)
    }
    /// Returns the cell at the specified row and column, both starting at zero, or `None` if the coordinates are out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index_of(row, col).map(|index| &self.storage[index])
    }
    /// Returns an iterator over the coordinates of the cells surrounding the specified one, or `None` if the coordinates are out of bounds.
    #[inline]
    #[must_use]
    pub fn neighbors(&self, row: usize, col: usize) -> Option<Neighbors> {
        self.index_of(row, col)?;
        Some(Neighbors::new([row, col], self.dimensions))
    }

    /// Places a flag on a closed cell, or removes the flag from a flagged one, and returns the new status of the cell.
    ///
    /// Returns `None` and does nothing if the coordinates are out of bounds, the cell is already open or the game is over.
    ///
    /// # Usage
    /// ```
    /// # use minefield::{Field, CellStatus};
    /// #
    /// let mut field = Field::from_mines(3, 3, [[1, 1]]).unwrap();
    /// assert_eq!(field.toggle_flag(1, 1), Some(CellStatus::Flagged));
    /// assert_eq!(field.flag_count(), 1);
    /// assert_eq!(field.toggle_flag(1, 1), Some(CellStatus::Closed));
    /// assert_eq!(field.flag_count(), 0);
    /// assert_eq!(field.toggle_flag(3, 0), None); // Out of bounds
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn toggle_flag(&mut self, row: usize, col: usize) -> Option<CellStatus> {
        if self.state.is_over() {
            trace!(state = ?self.state, "ignoring flag on a finished game");
            return None;
        }
        let Some(index) = self.index_of(row, col) else {
            trace!("ignoring flag outside of the field");
            return None;
        };
        let cell = &mut self.storage[index];
        cell.status = match cell.status {
            CellStatus::Closed => {
                self.flagged += 1;
                CellStatus::Flagged
            },
            CellStatus::Flagged => {
                self.flagged -= 1;
                CellStatus::Closed
            },
            CellStatus::Opened => return None,
        };
        Some(cell.status)
    }

    /// Converts coordinates into an index into the storage, or `None` if they are out of bounds.
    #[inline]
    fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.height() && col < self.width() {
            Some(row * self.width() + col)
        } else {
            None
        }
    }
    /// The number of cells without a mine.
    #[inline]
    fn safe_cells(&self) -> usize {
        self.area() - self.mine_count
    }
}
impl Index<FieldCoordinates> for Field {
    type Output = Cell;
    /// Returns the cell at the row `coordinates[0]` and column `coordinates[1]`, both starting at zero.
    ///
    /// # Panics
    /// Index checking is enabled for this method. For a version which returns an `Option` instead of panicking if the index is out of bounds, see `get`.
    #[inline]
    fn index(&self, coordinates: FieldCoordinates) -> &Self::Output {
        self.get(coordinates[0], coordinates[1]).expect("index out of bounds")
    }
}
