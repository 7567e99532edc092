use core::num::NonZeroU8;
#[cfg(feature = "serialization")]
use serde::{Serialize, Deserialize};
use crate::InvalidHint;

/// A cell on a Minesweeper field.
///
/// This groups what the cell contains, which never changes once the field is generated, and what the player has done with it so far.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Cell {
    /// The content of the cell. See the `CellKind` enum for the possible values.
    pub kind: CellKind,
    /// Whether the cell is closed, flagged or opened.
    pub status: CellStatus,
}
impl Cell {
    /// Returns `true` if the cell contains a mine, `false` otherwise.
    #[inline]
    #[must_use]
    pub const fn is_mine(self) -> bool {
        self.kind.is_mine()
    }
    /// Returns `true` if the cell has been opened, `false` otherwise.
    #[inline]
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self.status, CellStatus::Opened)
    }
    /// Returns `true` if the cell carries a flag, `false` otherwise.
    #[inline]
    #[must_use]
    pub const fn is_flagged(self) -> bool {
        matches!(self.status, CellStatus::Flagged)
    }
    /// Returns `true` if the cell is neither opened nor flagged.
    #[inline]
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self.status, CellStatus::Closed)
    }
    /// Returns `true` if this cell has to be opened in order for the game to be won, `false` otherwise.
    ///
    /// This is `true` only for safe cells which are still closed or flagged.
    #[inline]
    #[must_use]
    pub const fn is_required_to_open(self) -> bool {
        !self.is_mine() && !self.is_open()
    }
}

/// What a cell contains.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum CellKind {
    /// A safe cell without any neighboring mines.
    ///
    /// Returned by the `Default` trait implementation.
    Empty,
    /// A safe cell with at least one neighboring mine.
    Adjacent(Hint),
    /// A cell with a mine inside.
    Mine,
}
impl CellKind {
    /// Returns the kind of a safe cell surrounded by the given number of mines: `Empty` for zero, `Adjacent` otherwise.
    ///
    /// Returns `None` if the count is larger than 8, which no cell can have.
    #[inline]
    #[must_use]
    pub const fn from_neighboring_mines(count: u8) -> Option<Self> {
        if count == 0 {
            Some(Self::Empty)
        } else if let Some(hint) = Hint::new(count) {
            Some(Self::Adjacent(hint))
        } else {
            None
        }
    }
    /// Returns `true` if this is a mine, `false` otherwise.
    #[inline]
    #[must_use]
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
    /// Returns the hint shown once a cell of this kind is opened, or `None` for empty cells and mines.
    #[inline]
    #[must_use]
    pub const fn hint(self) -> Option<Hint> {
        match self {
            Self::Adjacent(hint) => Some(hint),
            _ => None,
        }
    }
}
impl Default for CellKind {
    /// Returns the `Empty` variant.
    #[inline]
    fn default() -> Self {
        Self::Empty
    }
}

/// The number of mines around a safe cell, always between 1 and 8.
///
/// Zero neighboring mines is expressed as [`CellKind::Empty`] instead, so `Adjacent(0)` cannot exist, and neither can anything above 8.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize), serde(try_from = "u8", into = "u8"))]
pub struct Hint(NonZeroU8);
impl Hint {
    /// The largest possible hint: a cell fully surrounded by mines.
    pub const MAX: u8 = 8;

    /// Returns the hint for the given mine count, or `None` if it is outside of `1..=8`.
    #[inline]
    #[must_use]
    pub const fn new(count: u8) -> Option<Self> {
        if count > Self::MAX {
            return None;
        }
        match NonZeroU8::new(count) {
            Some(count) => Some(Self(count)),
            None => None,
        }
    }
    /// Returns the number of neighboring mines.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}
impl TryFrom<u8> for Hint {
    type Error = InvalidHint;
    fn try_from(count: u8) -> Result<Self, InvalidHint> {
        Self::new(count).ok_or(InvalidHint(count))
    }
}
impl From<Hint> for u8 {
    #[inline]
    fn from(hint: Hint) -> Self {
        hint.get()
    }
}

/// What the player has done with a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum CellStatus {
    /// The player didn't touch this cell yet.
    ///
    /// Returned by the `Default` trait implementation.
    Closed,
    /// The player marked this cell as a suspected mine. Flagged cells can't be opened until the flag is removed.
    Flagged,
    /// The cell has been revealed.
    Opened,
}
impl Default for CellStatus {
    /// Returns the `Closed` variant.
    #[inline]
    fn default() -> Self {
        Self::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_only_cover_one_to_eight() {
        assert_eq!(Hint::new(0), None);
        assert_eq!(Hint::new(9), None);
        for count in 1..=8 {
            assert_eq!(Hint::new(count).map(Hint::get), Some(count));
        }
        assert_eq!(Hint::try_from(12_u8), Err(InvalidHint(12)));
    }

    #[test]
    fn neighbor_counts_map_to_kinds() {
        assert_eq!(CellKind::from_neighboring_mines(0), Some(CellKind::Empty));
        assert_eq!(
            CellKind::from_neighboring_mines(3).and_then(CellKind::hint).map(Hint::get),
            Some(3)
        );
        assert_eq!(CellKind::from_neighboring_mines(9), None);
    }

    #[test]
    fn default_cell_is_closed_and_empty() {
        let cell = Cell::default();
        assert_eq!(cell.kind, CellKind::Empty);
        assert!(cell.is_closed());
        assert!(cell.is_required_to_open());
        assert!(!cell.is_mine());
    }

    #[test]
    fn opened_and_mine_cells_are_not_required() {
        let opened = Cell { kind: CellKind::Empty, status: CellStatus::Opened };
        let mine = Cell { kind: CellKind::Mine, status: CellStatus::Closed };
        let flagged = Cell { kind: CellKind::Empty, status: CellStatus::Flagged };
        assert!(!opened.is_required_to_open());
        assert!(!mine.is_required_to_open());
        assert!(flagged.is_required_to_open());
    }

    #[cfg(feature = "serialization")]
    #[test]
    fn hints_deserialize_only_within_range() {
        let cell: Cell = serde_json::from_str(r#"{"kind":{"Adjacent":3},"status":"Flagged"}"#)
            .expect("valid cell");
        assert_eq!(cell.kind.hint().map(Hint::get), Some(3));
        assert!(cell.is_flagged());
        assert!(serde_json::from_str::<Hint>("0").is_err());
        assert!(serde_json::from_str::<Hint>("9").is_err());
        assert_eq!(serde_json::to_string(&CellKind::Mine).expect("serializable"), r#""Mine""#);
    }
}
