//! The rules of Minesweeper, without any of the looks.
//!
//! This crate generates fields, answers clicks and keeps track of whether the game has been won or lost. Drawing the field, reading input and everything else a player sees or touches is left to the frontend, which only ever reads the field and calls [`Field::open`] and [`Field::toggle_flag`].
//!
//! ```
//! use minefield::{Field, Difficulty, CellKind, CellStatus, GameState, ClickOutcome};
//!
//! let mut field = Field::from_params(Difficulty::Beginner.into()).unwrap();
//! // Find a safe cell to start with, the way a lucky player would.
//! let first = field.cells().iter().position(|cell| !cell.is_mine()).unwrap();
//! let (row, col) = (first / field.width(), first % field.width());
//! assert_ne!(field.open(row, col), ClickOutcome::Explosion);
//!
//! for cells in field.rows() {
//!     let line: String = cells.iter().map(|cell| match (cell.status, cell.kind) {
//!         (CellStatus::Closed, _) => '-',
//!         (CellStatus::Flagged, _) => 'F',
//!         (CellStatus::Opened, CellKind::Mine) => '*',
//!         (CellStatus::Opened, CellKind::Empty) => ' ',
//!         (CellStatus::Opened, CellKind::Adjacent(hint)) => char::from(b'0' + hint.get()),
//!     }).collect();
//!     println!("{}", line);
//! }
//! assert_ne!(field.state(), GameState::Lost);
//! ```
//!
//! # Feature gates
//! - `std` — enable a dependency on the hosted standard library (**enabled by default**)
//!
//!   Without this feature, the crate only depends on `core` and `alloc`, so it can run in a freestanding environment as long as there is a memory allocator. Fields are then generated with [`Field::with_rng`] and a generator of your choice, since there is no thread-local one to fall back to.
//!
//! - `generation` — enable random generation (**enabled by default**)
//!
//!   Enables the dependency on `rand`, used for generating random fields. Disable to remove said dependency if you'd like to use your own random field generator and hand its layouts to [`Field::from_mines`].
//!
//! - `serialization` — enable support for serializing cells, outcomes and parameters (**enabled by default**, disable to speed up compilation)
//!
//!   Enables the dependency on `serde` and its derive macros, which lets frontends pass the visible state of a game around in a consistent format, or read [`FieldParams`] from a settings file.
//!
//! # Logging
//! The crate reports what it does through `tracing`: field generation and the end of a game at the `debug` level, ignored clicks and flood fill sizes at the `trace` level. Nothing is printed unless the application installs a subscriber.

#![warn(clippy::pedantic, clippy::cargo, clippy::nursery)]
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

mod cell;
pub use cell::*;
mod error;
pub use error::*;
mod field;
pub use field::*;
pub mod iter;
pub use iter::*;
mod params;
pub use params::*;
mod state;
pub use state::*;
