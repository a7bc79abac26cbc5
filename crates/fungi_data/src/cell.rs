use serde::{Deserialize, Serialize};
use std::fmt;

/// Life-cycle state of a single patch of ground.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum CellState {
    /// Bare ground with no spores or hyphae.
    #[default]
    Empty = 0,
    /// Holds at least one spore.
    Spore = 1,
    /// Young hyphae that cannot fruit yet.
    Young = 2,
    /// Maturing hyphae that cannot fruit yet.
    Maturing = 3,
    /// Older hyphae carrying mushrooms.
    Mushrooms = 4,
    /// Older hyphae without mushrooms.
    Older = 5,
    /// Decaying hyphae, nutrients exhausted.
    Decaying = 6,
    /// Freshly dead hyphae.
    Dead = 7,
    /// Hyphae that have been dead for a while.
    Deader = 8,
    /// Ground depleted by earlier growth.
    Depleted = 9,
    /// Ground where nothing grows.
    Inert = 10,
}

impl CellState {
    pub const COUNT: usize = 11;

    /// Every state, ordered by numeric code.
    pub const ALL: [CellState; Self::COUNT] = [
        CellState::Empty,
        CellState::Spore,
        CellState::Young,
        CellState::Maturing,
        CellState::Mushrooms,
        CellState::Older,
        CellState::Decaying,
        CellState::Dead,
        CellState::Deader,
        CellState::Depleted,
        CellState::Inert,
    ];

    /// Numeric code used by the raw grid dump.
    #[inline]
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CellState::Empty => "EMPTY",
            CellState::Spore => "SPORE",
            CellState::Young => "YOUNG",
            CellState::Maturing => "MATURING",
            CellState::Mushrooms => "MUSHROOMS",
            CellState::Older => "OLDER",
            CellState::Decaying => "DECAYING",
            CellState::Dead => "DEAD",
            CellState::Deader => "DEADER",
            CellState::Depleted => "DEPLETED",
            CellState::Inert => "INERT",
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
