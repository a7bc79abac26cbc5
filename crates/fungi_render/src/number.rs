use anyhow::Result;
use fungi_core::{Grid, Visualizer};
use std::io::{self, Write};

/// Prints each step's grid as numeric state codes.
pub struct NumberView<W: Write> {
    out: W,
}

impl<W: Write> NumberView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Visualizer for NumberView<W> {
    fn show(&mut self, step: u64, grid: &Grid) -> Result<()> {
        write!(self.out, "\ntime step {step}:\n")?;
        write_number_grid(&mut self.out, grid)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Writes the bordered grid, one code per cell, with dashed rules and bars
/// separating the ghost rows and columns from the interior.
pub fn write_number_grid<W: Write + ?Sized>(out: &mut W, grid: &Grid) -> io::Result<()> {
    let rows = grid.rows();
    let columns = grid.columns();
    let rule = "--".repeat(columns + 2);

    for r in 0..=rows + 1 {
        if r == 1 {
            writeln!(out, "{rule}")?;
        }
        for (c, state) in grid.row(r).iter().enumerate() {
            if c == 1 {
                out.write_all(b"| ")?;
            }
            write!(out, "{} ", state.code())?;
            if c == columns {
                out.write_all(b"| ")?;
            }
        }
        writeln!(out)?;
        if r == rows {
            writeln!(out, "{rule}")?;
        }
    }
    writeln!(out)
}
