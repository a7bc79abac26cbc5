use crate::palette::{reset_color, set_foreground, write_glyph, Appearance};
use anyhow::Result;
use fungi_core::{Grid, Visualizer};
use fungi_data::CellState;
use std::io::{self, Write};

const LEGEND_RULE: &str = "-----------------------------------------";

/// Prints each step's grid as colored glyphs, preceded by the legend.
pub struct ColorView<W: Write> {
    out: W,
}

impl<W: Write> ColorView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Visualizer for ColorView<W> {
    fn show(&mut self, step: u64, grid: &Grid) -> Result<()> {
        write!(self.out, "\ntime step {step}:\n")?;
        write_legend(&mut self.out)?;
        write_color_grid(&mut self.out, grid)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Writes the key of state names and their glyphs.
pub fn write_legend<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    write!(out, "\nKEY:\n{LEGEND_RULE}\n")?;
    for state in CellState::ALL {
        let label = state.label();
        let pad = if label.len() >= 8 { "\t" } else { "\t\t" };
        write!(out, "|\t{label}{pad}|")?;
        set_foreground(out, state.tint())?;
        write!(out, "\t{}\t", state.glyph())?;
        reset_color(out)?;
        writeln!(out, "|")?;
    }
    write!(out, "{LEGEND_RULE}\n\n")
}

/// Writes the bordered grid as glyphs, fencing off the ghost border.
pub fn write_color_grid<W: Write + ?Sized>(out: &mut W, grid: &Grid) -> io::Result<()> {
    let rows = grid.rows();
    let columns = grid.columns();
    let rule = "-".repeat(columns + 7);

    for r in 0..=rows + 1 {
        if r == 1 {
            writeln!(out, "{rule}")?;
        }
        for (c, &state) in grid.row(r).iter().enumerate() {
            if c == 1 {
                out.write_all(b" | ")?;
            }
            write_glyph(out, state)?;
            if c == columns {
                out.write_all(b" | ")?;
            }
        }
        writeln!(out)?;
        if r == rows {
            writeln!(out, "{rule}")?;
        }
    }
    writeln!(out)
}
