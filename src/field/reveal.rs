//! Opening cells: the flood fill through clearings and the end of the game.

use core::num::NonZeroUsize;
use alloc::vec::Vec;
#[cfg(feature = "serialization")]
use serde::{Serialize, Deserialize};
use tracing::{debug, instrument, trace};
use crate::{CellKind, CellStatus, FieldCoordinates, GameState, Neighbors};
use super::Field;

/// The event produced after clicking a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum ClickOutcome {
    /// Nothing happens.
    ///
    /// Produced when the click lands outside of the field, on a cell which is flagged or already open, or after the game is over.
    Nothing,
    /// One or more cells are opened and the game goes on.
    ///
    /// Clicking a cell with a hint opens just that cell, while clicking an empty one opens the whole clearing around it.
    Opened(NonZeroUsize),
    /// An explosion is triggered, ending the game. The whole field is revealed.
    ///
    /// Obtained from a mine.
    Explosion,
    /// The last safe cell is opened, winning the game. The whole field is revealed.
    Victory,
}
impl Default for ClickOutcome {
    /// Returns the `Nothing` variant.
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

impl Field {
    /// Opens a cell and returns the outcome of clicking it.
    ///
    /// - Opening a mine loses the game.
    /// - Opening a cell with a hint opens only that cell.
    /// - Opening an empty cell opens its neighbors as well, directly and diagonally, and keeps spreading through every empty cell found this way. The spreading stops at cells with hints (which are opened) and never touches mines.
    ///
    /// Flagged cells reached by the spreading are opened too, losing their flag. Opening the last safe cell wins the game. In both cases the whole field is revealed.
    ///
    /// Returns `ClickOutcome::Nothing` and does nothing if the coordinates are out of bounds, the cell is flagged or already open, or the game is over.
    ///
    /// # Usage
    /// ```
    /// # use minefield::{Field, ClickOutcome, GameState};
    /// # use core::num::NonZeroUsize;
    /// #
    /// // . . .
    /// // 1 1 .
    /// // * 1 .
    /// let mut field = Field::from_mines(3, 3, [[2, 0]]).unwrap();
    /// assert_eq!(field.open(1, 1), ClickOutcome::Opened(NonZeroUsize::new(1).unwrap())); // A hint, so nothing spreads
    /// assert_eq!(field.open(0, 2), ClickOutcome::Victory); // The clearing holds every remaining safe cell
    /// assert_eq!(field.state(), GameState::Won);
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn open(&mut self, row: usize, col: usize) -> ClickOutcome {
        if self.state.is_over() {
            trace!(state = ?self.state, "ignoring open on a finished game");
            return ClickOutcome::Nothing;
        }
        let Some(index) = self.index_of(row, col) else {
            trace!("ignoring open outside of the field");
            return ClickOutcome::Nothing;
        };
        let cell = self.storage[index];
        if !cell.is_closed() {
            trace!(status = ?cell.status, "ignoring open on a cell which isn't closed");
            return ClickOutcome::Nothing;
        }
        if cell.is_mine() {
            self.end(GameState::Lost);
            return ClickOutcome::Explosion;
        }

        let opened = self.flood_fill([row, col]);
        trace!(opened, "flood fill finished");
        if self.opened == self.safe_cells() {
            self.end(GameState::Won);
            return ClickOutcome::Victory;
        }
        NonZeroUsize::new(opened).map_or(ClickOutcome::Nothing, ClickOutcome::Opened)
    }

    /// Opens the starting cell and spreads through the clearing it belongs to, returning the amount of cells opened.
    fn flood_fill(&mut self, start: FieldCoordinates) -> usize {
        let width = self.width();
        let mut opened = 0_usize;
        // Cells still to visit. Duplicates are fine, the open check skips them.
        let mut stack = Vec::with_capacity(8);
        stack.push(start);
        while let Some(location) = stack.pop() {
            let cell = &mut self.storage[location[0] * width + location[1]];
            if cell.is_open() || cell.is_mine() {
                continue;
            }
            if cell.is_flagged() {
                self.flagged -= 1;
            }
            cell.status = CellStatus::Opened;
            self.opened += 1;
            opened += 1;
            if cell.kind == CellKind::Empty {
                stack.extend(Neighbors::new(location, self.dimensions));
            }
        }
        opened
    }

    /// Reveals every cell and puts the game into the specified final state.
    fn end(&mut self, state: GameState) {
        for cell in &mut self.storage {
            cell.status = CellStatus::Opened;
        }
        self.opened = self.storage.len();
        self.flagged = 0;
        self.state = state;
        debug!(?state, mines = self.mine_count, "game over");
    }
}
