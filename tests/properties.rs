//! Property tests for field generation and play.
//!
//! Properties tested:
//! - Generated fields hold exactly the requested mines, and every hint matches its neighborhood
//! - Counters always agree with the cells, whatever the player does
//! - Mines stay closed while the game runs; finished games reveal everything and ignore input
//! - Flagging a closed cell twice leaves the field as it was
//! - Opening an empty cell reveals exactly its clearing and the hints around it

use std::collections::VecDeque;

use minefield::{ClickOutcome, Field, GameState};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

/// Width, height and a mine count which leaves at least one safe cell.
fn params() -> impl Strategy<Value = (usize, usize, usize)> {
    (1..12_usize, 1..12_usize).prop_flat_map(|(width, height)| (Just(width), Just(height), 0..width * height))
}

#[derive(Clone, Debug)]
enum Move {
    Open(usize, usize),
    Flag(usize, usize),
}

/// Clicks anywhere, including a little past the borders.
fn moves() -> impl Strategy<Value = Vec<Move>> {
    prop::collection::vec(
        prop_oneof![
            (0..14_usize, 0..14_usize).prop_map(|(row, col)| Move::Open(row, col)),
            (0..14_usize, 0..14_usize).prop_map(|(row, col)| Move::Flag(row, col)),
        ],
        0..60,
    )
}

fn generate(width: usize, height: usize, mines: usize, seed: u64) -> Field {
    Field::with_rng(width, height, mines, &mut StdRng::seed_from_u64(seed)).unwrap()
}

/// Counts mines around a cell the slow way, without the crate's neighborhood iterator.
fn mines_around(field: &Field, row: usize, col: usize) -> usize {
    let mut count = 0;
    for r in row.saturating_sub(1)..=row + 1 {
        for c in col.saturating_sub(1)..=col + 1 {
            if (r, c) != (row, col) && field.get(r, c).is_some_and(|cell| cell.is_mine()) {
                count += 1;
            }
        }
    }
    count
}

fn check_consistency(field: &Field) -> Result<(), TestCaseError> {
    let opened = field.cells().iter().filter(|cell| cell.is_open()).count();
    let flagged = field.cells().iter().filter(|cell| cell.is_flagged()).count();
    prop_assert_eq!(field.opened_count(), opened);
    prop_assert_eq!(field.flag_count(), flagged);
    if field.state() == GameState::Running {
        prop_assert!(!field.cells().iter().any(|cell| cell.is_mine() && cell.is_open()));
    } else {
        prop_assert_eq!(opened, field.area());
    }
    Ok(())
}

proptest! {
    /// Property: generation honors the mine count and hints are exact
    #[test]
    fn prop_generated_fields_are_consistent(
        (width, height, mines) in params(),
        seed in any::<u64>(),
    ) {
        let field = generate(width, height, mines, seed);
        prop_assert_eq!(field.cells().iter().filter(|cell| cell.is_mine()).count(), mines);
        prop_assert_eq!(field.state(), GameState::Running);
        prop_assert!(field.cells().iter().all(|cell| cell.is_closed()));
        for row in 0..height {
            for col in 0..width {
                let cell = field[[row, col]];
                if cell.is_mine() {
                    continue;
                }
                let shown = cell.kind.hint().map_or(0, |hint| usize::from(hint.get()));
                prop_assert_eq!(shown, mines_around(&field, row, col));
            }
        }
    }

    /// Property: counters and terminal states stay consistent under arbitrary play
    #[test]
    fn prop_play_keeps_the_field_consistent(
        (width, height, mines) in params(),
        seed in any::<u64>(),
        moves in moves(),
    ) {
        let mut field = generate(width, height, mines, seed);
        for step in moves {
            let before = field.clone();
            match step {
                Move::Open(row, col) => {
                    let outcome = field.open(row, col);
                    match outcome {
                        ClickOutcome::Explosion => {
                            prop_assert_eq!(field.state(), GameState::Lost);
                        },
                        ClickOutcome::Victory => {
                            prop_assert_eq!(field.state(), GameState::Won);
                        },
                        ClickOutcome::Opened(count) => {
                            prop_assert_eq!(field.state(), GameState::Running);
                            prop_assert_eq!(field.opened_count(), before.opened_count() + count.get());
                        },
                        ClickOutcome::Nothing => {
                            prop_assert_eq!(&field, &before);
                        },
                    }
                },
                Move::Flag(row, col) => {
                    if field.toggle_flag(row, col).is_none() {
                        prop_assert_eq!(&field, &before);
                    }
                    prop_assert_eq!(field.state(), before.state());
                },
            }
            if before.state().is_over() {
                prop_assert_eq!(&field, &before);
            }
            check_consistency(&field)?;
        }
    }

    /// Property: flagging a closed cell twice is a round trip
    #[test]
    fn prop_double_flag_is_a_round_trip(
        (width, height, mines) in params(),
        seed in any::<u64>(),
        row in 0..12_usize,
        col in 0..12_usize,
    ) {
        let mut field = generate(width, height, mines, seed);
        let before = field.clone();
        field.toggle_flag(row, col);
        field.toggle_flag(row, col);
        prop_assert_eq!(field, before);
    }

    /// Property: opening an empty cell reveals its 8-connected clearing plus the hints bordering it
    #[test]
    fn prop_clearing_matches_its_region(
        (width, height, mines) in params(),
        seed in any::<u64>(),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut field = generate(width, height, mines, seed);
        let empties: Vec<usize> = field.cells().iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_mine() && cell.kind.hint().is_none())
            .map(|(index, _)| index)
            .collect();
        if empties.is_empty() {
            return Ok(());
        }
        let start = empties[pick.index(empties.len())];

        let mut region = vec![false; field.area()];
        let mut queue = VecDeque::from([start]);
        region[start] = true;
        while let Some(index) = queue.pop_front() {
            let (row, col) = (index / width, index % width);
            if field.cells()[index].kind.hint().is_some() {
                continue;
            }
            for r in row.saturating_sub(1)..=(row + 1).min(height - 1) {
                for c in col.saturating_sub(1)..=(col + 1).min(width - 1) {
                    let next = r * width + c;
                    if !region[next] && !field.cells()[next].is_mine() {
                        region[next] = true;
                        queue.push_back(next);
                    }
                }
            }
        }

        let outcome = field.open(start / width, start % width);
        prop_assert_ne!(outcome, ClickOutcome::Explosion);
        if outcome == ClickOutcome::Victory {
            prop_assert!(field.cells().iter().all(|cell| cell.is_open()));
        } else {
            for (index, cell) in field.cells().iter().enumerate() {
                prop_assert_eq!(cell.is_open(), region[index], "cell {} disagrees", index);
            }
        }
    }
}
