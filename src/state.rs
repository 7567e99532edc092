#[cfg(feature = "serialization")]
use serde::{Serialize, Deserialize};

/// The state of a game as a whole.
///
/// Games start out `Running` and end in either `Won` or `Lost`. There is no way back from the two latter states: once a game is over, every mutating operation on the field is ignored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum GameState {
    /// The game is in progress.
    ///
    /// Returned by the `Default` trait implementation.
    Running,
    /// Every safe cell has been opened.
    Won,
    /// A mine has been opened.
    Lost,
}
impl GameState {
    /// Returns `true` if the game has ended, either way.
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Running)
    }
}
impl Default for GameState {
    #[inline]
    fn default() -> Self {
        Self::Running
    }
}
