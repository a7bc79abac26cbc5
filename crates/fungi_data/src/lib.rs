//! Core data structures for the fungi simulation.

pub mod cell;

pub use cell::CellState;
