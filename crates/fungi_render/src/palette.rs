use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::QueueableCommand;
use fungi_data::CellState;
use std::io::{self, Write};

pub const FULL_BLOCK: char = '\u{2588}';
pub const DARK_SHADE: char = '\u{2593}';
pub const HEAVY_CROSS: char = '\u{254B}';

/// Foreground colors used by the glyph grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Black,
    Red,
    Green,
    Brown,
    Grey,
    Purple,
}

impl Tint {
    pub fn color(self) -> Color {
        match self {
            Tint::Black => Color::Black,
            Tint::Red => Color::DarkRed,
            Tint::Green => Color::DarkGreen,
            Tint::Brown => Color::DarkYellow,
            Tint::Grey => Color::Blue,
            Tint::Purple => Color::Magenta,
        }
    }
}

pub trait Appearance {
    fn glyph(&self) -> char;
    fn tint(&self) -> Tint;
}

impl Appearance for CellState {
    fn glyph(&self) -> char {
        match self {
            CellState::Spore => HEAVY_CROSS,
            CellState::Older | CellState::Dead => DARK_SHADE,
            _ => FULL_BLOCK,
        }
    }

    fn tint(&self) -> Tint {
        match self {
            CellState::Empty | CellState::Depleted | CellState::Inert => Tint::Black,
            CellState::Spore | CellState::Young => Tint::Red,
            CellState::Maturing => Tint::Green,
            CellState::Mushrooms | CellState::Older => Tint::Brown,
            CellState::Decaying => Tint::Purple,
            CellState::Dead | CellState::Deader => Tint::Grey,
        }
    }
}

pub fn set_foreground<W: Write + ?Sized>(out: &mut W, tint: Tint) -> io::Result<()> {
    out.queue(SetForegroundColor(tint.color()))?;
    Ok(())
}

pub fn reset_color<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    out.queue(ResetColor)?;
    Ok(())
}

/// Writes `state`'s glyph in its color, then resets the color.
pub fn write_glyph<W: Write + ?Sized>(out: &mut W, state: CellState) -> io::Result<()> {
    set_foreground(out, state.tint())?;
    write!(out, "{}", state.glyph())?;
    reset_color(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_glyphs_differ_by_tint() {
        assert_eq!(CellState::Young.tint(), CellState::Spore.tint());
        assert_ne!(CellState::Young.glyph(), CellState::Spore.glyph());
        assert_eq!(CellState::Dead.glyph(), CellState::Older.glyph());
        assert_ne!(CellState::Dead.tint(), CellState::Older.tint());
    }

    #[test]
    fn test_write_glyph_wraps_in_color_codes() {
        let mut out = Vec::new();
        write_glyph(&mut out, CellState::Maturing).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with('\u{1b}'));
        assert!(text.contains(FULL_BLOCK));
        assert!(text.ends_with("\u{1b}[0m"));
    }
}
