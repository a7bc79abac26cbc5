//! Console views of the simulation grid.
//!
//! Both views print the full bordered grid with the ghost rows and columns
//! fenced off, so the wraparound can be checked by eye.

/// Numeric grid dump
pub mod number;
/// Color glyph grid and legend
pub mod color;
/// State glyphs and foreground colors
pub mod palette;

pub use color::ColorView;
pub use number::NumberView;
pub use palette::{reset_color, set_foreground, Appearance, Tint};
