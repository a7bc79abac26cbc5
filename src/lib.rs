//! Command-line front end for the fungi simulation.

pub mod app;
pub mod cli;
