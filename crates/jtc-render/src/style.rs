//! Tones and palettes.
//!
//! A [`Tone`] is the semantic role of a piece of text; a [`Palette`] maps
//! tones to terminal colors for one [`Theme`]. The mismatch tone carries the
//! rendering side, not the direction of the difference: the left pane always
//! uses one color for its mismatches and the right pane another.

use colored::Color;
use jtc_types::{Annotation, Side, Theme};

/// Semantic role of a rendered span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Key label present on both sides.
    KeyMatch,
    /// Primitive strictly equal to its counterpart.
    ValueMatch,
    /// Key or value this side shows without a match on the other side.
    Differ(Side),
    /// Expand/collapse control and bracket glyph.
    Toggle,
    /// Separators, headings, anything without meaning for the comparison.
    Plain,
}

impl Tone {
    pub fn for_key(annotation: Annotation, side: Side) -> Self {
        match annotation {
            Annotation::Match => Tone::KeyMatch,
            Annotation::Differ => Tone::Differ(side),
        }
    }

    pub fn for_value(annotation: Annotation, side: Side) -> Self {
        match annotation {
            Annotation::Match => Tone::ValueMatch,
            Annotation::Differ => Tone::Differ(side),
        }
    }
}

/// Terminal styling for one tone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Style {
    pub color: Option<Color>,
    pub bold: bool,
}

impl Style {
    const fn plain() -> Self {
        Self {
            color: None,
            bold: false,
        }
    }

    const fn fg(color: Color) -> Self {
        Self {
            color: Some(color),
            bold: false,
        }
    }

    const fn strong(color: Color) -> Self {
        Self {
            color: Some(color),
            bold: true,
        }
    }
}

/// Colors for every tone under one theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub left_differ: Style,
    pub right_differ: Style,
    pub value_match: Style,
    pub key_match: Style,
    pub toggle: Style,
    pub error: Style,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        left_differ: Style::strong(Color::Red),
        right_differ: Style::strong(Color::Blue),
        value_match: Style::fg(Color::Green),
        key_match: Style::fg(Color::BrightBlack),
        toggle: Style::fg(Color::BrightBlack),
        error: Style::strong(Color::Red),
    };

    pub const DARK: Palette = Palette {
        left_differ: Style::strong(Color::BrightRed),
        right_differ: Style::strong(Color::BrightBlue),
        value_match: Style::fg(Color::BrightGreen),
        key_match: Style::fg(Color::White),
        toggle: Style::fg(Color::White),
        error: Style::strong(Color::BrightRed),
    };

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::LIGHT,
            Theme::Dark => Self::DARK,
        }
    }

    pub fn style(&self, tone: Tone) -> Style {
        match tone {
            Tone::KeyMatch => self.key_match,
            Tone::ValueMatch => self.value_match,
            Tone::Differ(Side::Left) => self.left_differ,
            Tone::Differ(Side::Right) => self.right_differ,
            Tone::Toggle => self.toggle,
            Tone::Plain => Style::plain(),
        }
    }
}
