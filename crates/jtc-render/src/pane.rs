//! The recursive tree renderer.
//!
//! [`render_pane`] walks a value together with the value found at the same
//! key in the other document. Primitives become one colored span; composites
//! become a toggle line followed, when expanded, by one entry per child in
//! natural order. Key labels and child values are judged separately.

use jtc_diff::{annotate_key, annotate_value, container_of, entries, lookup_child};
use jtc_types::{Path, Side};
use serde_json::Value;

use crate::expand::ExpandState;
use crate::style::Tone;

/// Marker shown before the bracket glyph of an expanded composite.
pub const EXPANDED: &str = "▾";
/// Marker shown before the bracket glyph of a collapsed composite.
pub const COLLAPSED: &str = "▸";

/// A run of text with one tone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Plain)
    }

    /// Display width in characters.
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// One rendered row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    /// Nesting level; the root sits at 0.
    pub depth: usize,
    /// The node this row shows. Toggling a composite uses this path.
    pub path: Path,
    pub spans: Vec<Span>,
}

impl Line {
    /// The row without indentation or color.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Display width including `indent` columns per nesting level.
    pub fn width(&self, indent: usize) -> usize {
        self.depth * indent + self.spans.iter().map(Span::width).sum::<usize>()
    }

    /// The first span with the given tone, if any.
    pub fn span_with(&self, tone: Tone) -> Option<&Span> {
        self.spans.iter().find(|s| s.tone == tone)
    }
}

/// The rendered tree for one side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pane {
    pub side: Side,
    pub lines: Vec<Line>,
}

impl Pane {
    /// The row showing the node at `path`, if it is visible.
    pub fn line_at(&self, path: &Path) -> Option<&Line> {
        self.lines.iter().find(|l| &l.path == path)
    }

    /// Rows as plain text with `indent` spaces per level.
    pub fn plain_lines(&self, indent: usize) -> Vec<String> {
        self.lines
            .iter()
            .map(|l| format!("{}{}", " ".repeat(l.depth * indent), l.text()))
            .collect()
    }
}

/// Render `value` in the pane of `side`, judging it against `other`.
pub fn render_pane(value: &Value, other: Option<&Value>, side: Side, expand: &ExpandState) -> Pane {
    let mut lines = Vec::new();
    render_node(value, other, &Path::root(), side, expand, Vec::new(), &mut lines);
    Pane { side, lines }
}

fn render_node(
    value: &Value,
    other: Option<&Value>,
    path: &Path,
    side: Side,
    expand: &ExpandState,
    mut spans: Vec<Span>,
    lines: &mut Vec<Line>,
) {
    let depth = path.depth();

    let Some(container) = container_of(value) else {
        let text = serde_json::to_string(value).unwrap_or_default();
        let tone = Tone::for_value(annotate_value(value, other), side);
        spans.push(Span::new(text, tone));
        lines.push(Line {
            depth,
            path: path.clone(),
            spans,
        });
        return;
    };

    let expanded = expand.is_expanded(path);
    let marker = if expanded { EXPANDED } else { COLLAPSED };
    spans.push(Span::new(format!("{marker} {}", container.glyph()), Tone::Toggle));
    lines.push(Line {
        depth,
        path: path.clone(),
        spans,
    });

    if !expanded {
        return;
    }

    for (key, child) in entries(value) {
        let key_tone = Tone::for_key(annotate_key(other, &key), side);
        let other_child = lookup_child(other, &key);
        let prefix = vec![Span::new(key.label(), key_tone), Span::plain(" ")];
        let child_path = path.child(key);
        render_node(child, other_child, &child_path, side, expand, prefix, lines);
    }
}
