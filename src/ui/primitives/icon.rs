use crossterm::style::Stylize;

use crate::ui::theme::{self, Glyph};

/// Status mark printed in front of an output line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Arrow,
    Watch,
    Build,
}

impl Icon {
    fn glyph(self) -> Glyph {
        match self {
            Icon::Success => theme::DONE,
            Icon::Error => theme::FAILED,
            Icon::Warning => theme::DEGRADED,
            Icon::Progress => theme::BUSY,
            Icon::Arrow => theme::CHANGE,
            Icon::Watch => theme::WATCHING,
            Icon::Build => theme::BUNDLE,
        }
    }

    pub fn render(&self, supports_unicode: bool) -> &'static str {
        let glyph = self.glyph();
        if supports_unicode {
            glyph.unicode
        } else {
            glyph.ascii
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mark = self.render(supports_unicode);
        if supports_color {
            mark.with(self.glyph().color).to_string()
        } else {
            mark.to_string()
        }
    }
}
