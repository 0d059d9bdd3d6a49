//! Turn styled spans into terminal text.
//!
//! With color disabled the output is the bare text, so plain output never
//! contains escape sequences. With color enabled, styling goes through
//! `colored`; callers decide whether `colored` may emit escapes via
//! `colored::control::set_override`.

use colored::Colorize;
use jtc_types::Theme;

use crate::pane::{Line, Span};
use crate::style::{Palette, Style, Tone};

const ELLIPSIS: char = '…';

/// Renders spans and lines for one theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Painter {
    palette: Palette,
    use_color: bool,
    indent: usize,
}

impl Painter {
    /// Columns per nesting level.
    pub const DEFAULT_INDENT: usize = 2;

    pub fn new(theme: Theme, use_color: bool) -> Self {
        Self {
            palette: Palette::for_theme(theme),
            use_color,
            indent: Self::DEFAULT_INDENT,
        }
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    pub fn use_color(&self) -> bool {
        self.use_color
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn paint(&self, text: &str, style: Style) -> String {
        if !self.use_color || (style.color.is_none() && !style.bold) {
            return text.to_string();
        }
        let mut styled = text.normal();
        if let Some(color) = style.color {
            styled = styled.color(color);
        }
        if style.bold {
            styled = styled.bold();
        }
        styled.to_string()
    }

    pub fn tone(&self, text: &str, tone: Tone) -> String {
        self.paint(text, self.palette.style(tone))
    }

    pub fn span(&self, span: &Span) -> String {
        self.tone(&span.text, span.tone)
    }

    /// Text styled as an error banner.
    pub fn error(&self, text: &str) -> String {
        self.paint(text, self.palette.error)
    }

    /// Width of `line` once painted with at most `max_width` columns.
    pub fn line_width(&self, line: &Line, max_width: Option<usize>) -> usize {
        let width = line.width(self.indent);
        max_width.map_or(width, |max| width.min(max))
    }

    /// Indent and paint one row. Rows wider than `max_width` are cut and end
    /// with an ellipsis.
    pub fn line(&self, line: &Line, max_width: Option<usize>) -> String {
        let max = max_width.unwrap_or(usize::MAX);
        let pad = (line.depth * self.indent).min(max);
        let mut out = " ".repeat(pad);
        let mut used = pad;

        for span in &line.spans {
            let width = span.width();
            if used + width > max {
                let room = max - used;
                if room > 0 {
                    let mut cut: String = span.text.chars().take(room - 1).collect();
                    cut.push(ELLIPSIS);
                    out.push_str(&self.tone(&cut, span.tone));
                }
                return out;
            }
            out.push_str(&self.span(span));
            used += width;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::ExpandState;
    use crate::pane::render_pane;
    use jtc_types::Side;
    use serde_json::json;

    #[test]
    fn plain_output_has_no_escapes() {
        let left = json!({"a": 1, "b": [true, null]});
        let right = json!({"a": 2});
        let pane = render_pane(&left, Some(&right), Side::Left, &ExpandState::default());
        let painter = Painter::new(Theme::Dark, false);
        for line in &pane.lines {
            assert!(!painter.line(line, None).contains('\u{1b}'));
        }
        assert_eq!(painter.line(&pane.lines[1], None), "  \"a\": 1");
    }

    #[test]
    fn colored_output_uses_side_color() {
        colored::control::set_override(true);
        let painter = Painter::new(Theme::Light, true);
        let left = painter.tone("x", Tone::Differ(Side::Left));
        let right = painter.tone("x", Tone::Differ(Side::Right));
        assert!(left.contains('\u{1b}'));
        assert_ne!(left, right);
        assert_eq!(painter.tone("x", Tone::Plain), "x");
    }

    #[test]
    fn long_rows_are_cut() {
        let value = json!({"key": "a long string value"});
        let pane = render_pane(&value, None, Side::Right, &ExpandState::default());
        let painter = Painter::new(Theme::Light, false);
        let row = &pane.lines[1];
        let cut = painter.line(row, Some(12));
        assert_eq!(cut.chars().count(), 12);
        assert!(cut.ends_with(ELLIPSIS));
        assert_eq!(painter.line_width(row, Some(12)), 12);
        assert_eq!(painter.line(row, Some(200)), painter.line(row, None));
    }

    #[test]
    fn custom_indent() {
        let pane = render_pane(&json!([1]), None, Side::Left, &ExpandState::default());
        let painter = Painter::new(Theme::Light, false).with_indent(4);
        assert_eq!(painter.line(&pane.lines[1], None), "    0 1");
    }
}
