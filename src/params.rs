//! Parameters describing which field to generate.

use core::num::NonZeroUsize;
#[cfg(feature = "serialization")]
use serde::{Serialize, Deserialize};
use crate::{FieldDimensions, FieldError};

/// The size of a field and how many mines to put on it.
///
/// This is a plain parameter set, typically filled in by a frontend from user settings or one of the [`Difficulty`] presets. It is only checked when passed to [`validate`][m_validate] or used to build a field.
///
/// [m_validate]: #method.validate "validate — checks the parameters and returns the dimensions and area of the field"
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct FieldParams {
    /// The number of columns.
    pub width: usize,
    /// The number of rows.
    pub height: usize,
    /// The number of mines.
    pub mines: usize,
}
impl FieldParams {
    /// Creates a parameter set from its parts.
    #[inline]
    #[must_use]
    pub const fn new(width: usize, height: usize, mines: usize) -> Self {
        Self { width, height, mines }
    }
    /// Checks the parameters and returns the dimensions and the area of the field they describe.
    ///
    /// # Errors
    /// Fails if either dimension is zero, if the area overflows `usize` or if there are as many mines as cells or more.
    pub fn validate(&self) -> Result<(FieldDimensions, usize), FieldError> {
        let Self { width, height, mines } = *self;
        let dimensions = match (NonZeroUsize::new(width), NonZeroUsize::new(height)) {
            (Some(width), Some(height)) => [width, height],
            _ => return Err(FieldError::EmptyDimensions { width, height }),
        };
        let area = width.checked_mul(height)
            .ok_or(FieldError::TooLarge { width, height })?;
        if mines >= area {
            return Err(FieldError::TooManyMines { mines, area });
        }
        Ok((dimensions, area))
    }
}
impl From<Difficulty> for FieldParams {
    #[inline]
    fn from(difficulty: Difficulty) -> Self {
        difficulty.params()
    }
}

/// The classic field presets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum Difficulty {
    /// 9x9 with 10 mines.
    Beginner,
    /// 16x16 with 40 mines.
    Intermediate,
    /// 30x16 with 99 mines.
    Expert,
}
impl Difficulty {
    /// Returns the field parameters of the preset.
    #[must_use]
    pub const fn params(self) -> FieldParams {
        match self {
            Self::Beginner => FieldParams::new(9, 9, 10),
            Self::Intermediate => FieldParams::new(16, 16, 40),
            Self::Expert => FieldParams::new(30, 16, 99),
        }
    }
}
