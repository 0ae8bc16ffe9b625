//! Terminal styling for nsbundle output
//!
//! Each status mark is one `Glyph`: its unicode form, the ASCII fallback
//! used when stdout is not a terminal, and its color.

use crossterm::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub unicode: &'static str,
    pub ascii: &'static str,
    pub color: Color,
}

impl Glyph {
    const fn new(unicode: &'static str, ascii: &'static str, color: Color) -> Self {
        Self {
            unicode,
            ascii,
            color,
        }
    }
}

pub const DONE: Glyph = Glyph::new("✓", "[OK]", Color::Green);
pub const FAILED: Glyph = Glyph::new("✗", "[FAIL]", Color::Red);
pub const DEGRADED: Glyph = Glyph::new("⚠", "[WARN]", Color::Yellow);
pub const BUSY: Glyph = Glyph::new("●", "[..]", Color::Yellow);
pub const CHANGE: Glyph = Glyph::new("↳", "[>]", Color::DarkGrey);
pub const WATCHING: Glyph = Glyph::new("⟳", "[~]", Color::Cyan);
pub const BUNDLE: Glyph = Glyph::new("📦", "[BUILD]", Color::Cyan);

/// Command titles in headers
pub const TITLE: Color = Color::Cyan;
