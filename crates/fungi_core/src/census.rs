//! Per-state cell counts.

use crate::grid::Grid;
use fungi_data::CellState;
use serde::Serialize;
use std::collections::BTreeMap;

/// Interior cell counts for every state, zero counts included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Census {
    counts: BTreeMap<CellState, usize>,
}

impl Default for Census {
    fn default() -> Self {
        Self {
            counts: CellState::ALL.iter().map(|&s| (s, 0)).collect(),
        }
    }
}

impl Census {
    /// Counts the interior of `grid`; the ghost border is ignored.
    pub fn of(grid: &Grid) -> Self {
        let mut census = Self::default();
        for (_, _, state) in grid.interior() {
            *census.counts.entry(state).or_insert(0) += 1;
        }
        census
    }

    #[must_use]
    pub fn count(&self, state: CellState) -> usize {
        self.counts.get(&state).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Cells holding live hyphae (YOUNG through OLDER).
    #[must_use]
    pub fn living(&self) -> usize {
        [
            CellState::Young,
            CellState::Maturing,
            CellState::Mushrooms,
            CellState::Older,
        ]
        .iter()
        .map(|&s| self.count(s))
        .sum()
    }
}
