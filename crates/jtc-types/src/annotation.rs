use std::fmt;

use serde::{Deserialize, Serialize};

/// Verdict for a key label or primitive value against the other document.
///
/// There is no direction in the verdict: each pane marks its own mismatches
/// and the pane's side decides the color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Annotation {
    Match,
    Differ,
}

impl Annotation {
    pub fn from_match(matches: bool) -> Self {
        if matches {
            Annotation::Match
        } else {
            Annotation::Differ
        }
    }

    pub fn is_match(self) -> bool {
        matches!(self, Annotation::Match)
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Annotation::Match => f.write_str("match"),
            Annotation::Differ => f.write_str("differ"),
        }
    }
}

/// Kind of composite node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Container {
    /// Ordered sequence (JSON array).
    Sequence,
    /// Key/value mapping (JSON object).
    Mapping,
}

impl Container {
    /// The bracket glyph shown on the toggle control.
    pub fn glyph(self) -> &'static str {
        match self {
            Container::Sequence => "[]",
            Container::Mapping => "{}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_match() {
        assert_eq!(Annotation::from_match(true), Annotation::Match);
        assert_eq!(Annotation::from_match(false), Annotation::Differ);
        assert!(!Annotation::Differ.is_match());
    }

    #[test]
    fn container_glyphs() {
        assert_eq!(Container::Sequence.glyph(), "[]");
        assert_eq!(Container::Mapping.glyph(), "{}");
    }
}
