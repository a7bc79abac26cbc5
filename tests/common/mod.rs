#![allow(dead_code)]

use fungi_core::{CellState, Grid};
use proptest::prelude::*;

/// Builds a grid from one string per interior row.
///
/// `.` EMPTY, `s` SPORE, `Y` YOUNG, `m` MATURING, `M` MUSHROOMS, `o` OLDER,
/// `x` DECAYING, `d` DEAD, `D` DEADER, `_` DEPLETED, `#` INERT.
pub fn grid_from_rows(rows: &[&str]) -> Grid {
    let columns = rows[0].chars().count();
    let states: Vec<CellState> = rows
        .iter()
        .flat_map(|row| {
            assert_eq!(row.chars().count(), columns, "ragged row {row:?}");
            row.chars().map(state_for)
        })
        .collect();
    Grid::from_interior(rows.len(), columns, &states).expect("valid test grid")
}

pub fn rows_of(grid: &Grid) -> Vec<String> {
    (1..=grid.rows())
        .map(|r| grid.interior_row(r).iter().map(|&s| char_for(s)).collect())
        .collect()
}

const LEGEND: [(char, CellState); CellState::COUNT] = [
    ('.', CellState::Empty),
    ('s', CellState::Spore),
    ('Y', CellState::Young),
    ('m', CellState::Maturing),
    ('M', CellState::Mushrooms),
    ('o', CellState::Older),
    ('x', CellState::Decaying),
    ('d', CellState::Dead),
    ('D', CellState::Deader),
    ('_', CellState::Depleted),
    ('#', CellState::Inert),
];

fn state_for(ch: char) -> CellState {
    LEGEND
        .iter()
        .find(|(c, _)| *c == ch)
        .map(|(_, s)| *s)
        .unwrap_or_else(|| panic!("unknown cell char {ch:?}"))
}

fn char_for(state: CellState) -> char {
    LEGEND[state.code() as usize].0
}

pub fn arb_state() -> impl Strategy<Value = CellState> {
    prop::sample::select(CellState::ALL.to_vec())
}

prop_compose! {
    /// A random grid up to 8x8 with states weighted toward EMPTY and YOUNG.
    pub fn arb_grid()(rows in 1usize..8, columns in 1usize..8)(
        states in prop::collection::vec(
            prop_oneof![
                3 => Just(CellState::Empty),
                2 => Just(CellState::Young),
                1 => arb_state(),
            ],
            rows * columns,
        ),
        rows in Just(rows),
        columns in Just(columns),
    ) -> Grid {
        Grid::from_interior(rows, columns, &states).expect("sized grid")
    }
}
