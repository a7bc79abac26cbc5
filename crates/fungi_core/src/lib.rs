//! # Fungi Core
//!
//! Stochastic cellular automaton modelling the growth of a mycelium network
//! through a patch of ground.
//!
//! This crate contains the simulation engine:
//! - Bordered grid buffer with toroidal wraparound
//! - Moore-neighborhood queries
//! - The per-cell life-cycle rule and its fixed probabilities
//! - A double-buffered step loop driven by an injected random source
//! - Step metrics and structured logging setup
//!
//! ## Example
//!
//! ```
//! use fungi_core::{Headless, SeededSource, Simulation};
//!
//! let mut sim = Simulation::new(16, 16, SeededSource::new(42)).unwrap();
//! sim.run(10, &mut Headless).unwrap();
//! assert_eq!(sim.steps_executed(), 11);
//! ```

/// Toroidal wraparound of the ghost border
pub mod boundary;
/// Per-state cell counts
pub mod census;
/// Run configuration
pub mod config;
/// Error types and result alias
pub mod error;
/// Bordered row-major cell buffer
pub mod grid;
/// Step timing and logging setup
pub mod metrics;
/// Moore-neighborhood queries
pub mod neighborhood;
/// Uniform random sources
pub mod rng;
/// Double-buffered step loop and visualizer hook
pub mod simulation;
/// Life-cycle rule and probability constants
pub mod transition;

pub use census::Census;
pub use config::SimulationConfig;
pub use error::{CoreError, Result};
pub use fungi_data::CellState;
pub use grid::Grid;
pub use metrics::{init_logging, RunMetrics};
pub use neighborhood::has_young_neighbor;
pub use rng::{ReplaySource, SeededSource, UniformSource};
pub use simulation::{Headless, Simulation, Visualizer};
pub use transition::TransitionLogic;
