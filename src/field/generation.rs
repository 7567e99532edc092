//! Mine placement and hint computation.

#[cfg(feature = "generation")]
use rand::Rng;
#[cfg(feature = "generation")]
use tracing::debug;
use crate::{CellKind, FieldCoordinates, Neighbors};
#[cfg(feature = "generation")]
use crate::{FieldError, FieldParams};
use super::Field;

impl Field {
    /// Generates a field with the given number of columns, rows and mines, drawing randomness from the specified generator.
    ///
    /// Every placement of the mines is equally likely. Use this instead of [`new`][m_new] to get reproducible fields from a seeded generator, or when there is no thread-local generator to use.
    ///
    /// # Errors
    /// Fails if either dimension is zero, if the area doesn't fit into a `usize` or if there wouldn't be a single cell without a mine.
    ///
    /// # Usage
    /// ```
    /// # use minefield::Field;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let first = Field::with_rng(16, 16, 40, &mut StdRng::seed_from_u64(7)).unwrap();
    /// let second = Field::with_rng(16, 16, 40, &mut StdRng::seed_from_u64(7)).unwrap();
    /// assert_eq!(first, second); // Same seed, same field
    /// ```
    ///
    /// [m_new]: #method.new "new — generates a field with the given number of columns, rows and mines"
    #[cfg(feature = "generation")]
    pub fn with_rng<R>(width: usize, height: usize, mines: usize, rng: &mut R) -> Result<Self, FieldError>
    where R: Rng + ?Sized {
        let mut field = Self::empty(FieldParams::new(width, height, mines))?;
        field.place_mines(rng);
        field.compute_hints();
        debug!(width, height, mines, "generated field");
        Ok(field)
    }

    /// Installs `mine_count` mines on an empty field.
    ///
    /// Walks the cells once, making each one a mine with probability `mines left / cells left`. That's uniform over all placements and never retries, so even nearly full fields generate in linear time.
    #[cfg(feature = "generation")]
    fn place_mines<R>(&mut self, rng: &mut R)
    where R: Rng + ?Sized {
        let mut mines_left = self.mine_count;
        let area = self.storage.len();
        for (cells_left, cell) in (1..=area).rev().zip(self.storage.iter_mut()) {
            if mines_left == 0 {
                break;
            }
            if rng.random_range(0..cells_left) < mines_left {
                cell.kind = CellKind::Mine;
                mines_left -= 1;
            }
        }
    }

    /// Turns every safe cell into either `Empty` or `Adjacent`, depending on the mines around it.
    pub(super) fn compute_hints(&mut self) {
        let width = self.width();
        for index in 0..self.storage.len() {
            if self.storage[index].is_mine() {
                continue;
            }
            let count = self.count_neighboring_mines([index / width, index % width]);
            if let Some(kind) = CellKind::from_neighboring_mines(count) {
                self.storage[index].kind = kind;
            }
        }
    }

    /// Counts all mines in the Moore neighborhood of a cell. The cell itself isn't counted.
    fn count_neighboring_mines(&self, center: FieldCoordinates) -> u8 {
        let width = self.width();
        Neighbors::new(center, self.dimensions)
            .filter(|&[row, col]| self.storage[row * width + col].is_mine())
            .fold(0, |count, _| count + 1)
    }
}
