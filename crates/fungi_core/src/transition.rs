//! Per-cell life-cycle rule.
//!
//! Each state moves to its successor either deterministically or by
//! comparing one uniform draw against a fixed threshold. Draws are pulled
//! lazily, so deterministic transitions never advance the random stream,
//! and an EMPTY cell only draws when a YOUNG neighbor could colonize it.

use crate::rng::UniformSource;
use fungi_data::CellState;

/// Probability that a cell starts as SPORE.
pub const PROB_SPORE: f64 = 0.001;
/// Probability that a SPORE germinates into YOUNG.
pub const PROB_SPORE_TO_YOUNG: f64 = 0.25;
/// Probability that EMPTY ground next to YOUNG hyphae is colonized.
pub const PROB_SPREAD: f64 = 0.6;
/// Probability that MATURING hyphae fruit (otherwise they turn OLDER).
pub const PROB_MATURING_TO_MUSHROOMS: f64 = 0.7;
/// Probability that DEPLETED ground picks up a new SPORE.
pub const PROB_DEPLETED_TO_SPORE: f64 = 0.0001;
/// Cumulative threshold below which DEPLETED ground recovers to EMPTY.
pub const PROB_DEPLETED_TO_EMPTY: f64 = 0.5;

/// Initial state of an interior cell given its initialization draw.
#[inline]
pub fn initial_state(draw: f64) -> CellState {
    if draw <= PROB_SPORE {
        CellState::Spore
    } else {
        CellState::Empty
    }
}

pub trait TransitionLogic: Sized {
    /// Next state, pulling at most one value from `draw`.
    ///
    /// `has_young_neighbor` is consulted only for EMPTY cells.
    fn resolve<F: FnOnce() -> f64>(self, has_young_neighbor: bool, draw: F) -> CellState;

    /// Whether [`TransitionLogic::resolve`] will pull a draw.
    fn needs_draw(self, has_young_neighbor: bool) -> bool;

    /// Next state, drawing from `rng` only when the rule is probabilistic.
    #[inline]
    fn next_state<S: UniformSource + ?Sized>(
        self,
        has_young_neighbor: bool,
        rng: &mut S,
    ) -> CellState {
        self.resolve(has_young_neighbor, || rng.next_uniform())
    }
}

impl TransitionLogic for CellState {
    fn resolve<F: FnOnce() -> f64>(self, has_young_neighbor: bool, draw: F) -> CellState {
        match self {
            CellState::Empty if !has_young_neighbor => CellState::Empty,
            CellState::Empty => {
                if draw() <= PROB_SPREAD {
                    CellState::Young
                } else {
                    CellState::Empty
                }
            }
            CellState::Spore => {
                if draw() <= PROB_SPORE_TO_YOUNG {
                    CellState::Young
                } else {
                    CellState::Spore
                }
            }
            CellState::Young => CellState::Maturing,
            CellState::Maturing => {
                if draw() <= PROB_MATURING_TO_MUSHROOMS {
                    CellState::Mushrooms
                } else {
                    CellState::Older
                }
            }
            CellState::Mushrooms | CellState::Older => CellState::Decaying,
            CellState::Decaying => CellState::Dead,
            CellState::Dead => CellState::Deader,
            CellState::Deader => CellState::Depleted,
            CellState::Depleted => {
                let p = draw();
                if p <= PROB_DEPLETED_TO_SPORE {
                    CellState::Spore
                } else if p <= PROB_DEPLETED_TO_EMPTY {
                    CellState::Empty
                } else {
                    CellState::Depleted
                }
            }
            CellState::Inert => CellState::Inert,
        }
    }

    fn needs_draw(self, has_young_neighbor: bool) -> bool {
        match self {
            CellState::Empty => has_young_neighbor,
            CellState::Spore | CellState::Maturing | CellState::Depleted => true,
            CellState::Young
            | CellState::Mushrooms
            | CellState::Older
            | CellState::Decaying
            | CellState::Dead
            | CellState::Deader
            | CellState::Inert => false,
        }
    }
}
