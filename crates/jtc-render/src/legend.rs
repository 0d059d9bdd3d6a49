//! The static color legend.

use jtc_types::Side;

use crate::paint::Painter;
use crate::style::Tone;

const SWATCH: &str = "■";

/// One legend row: a color swatch and what it means.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegendEntry {
    pub tone: Tone,
    pub label: &'static str,
}

/// The four legend entries, in display order.
pub fn legend() -> [LegendEntry; 4] {
    [
        LegendEntry {
            tone: Tone::Differ(Side::Left),
            label: "Extra data in left JSON",
        },
        LegendEntry {
            tone: Tone::Differ(Side::Right),
            label: "Extra data in right JSON",
        },
        LegendEntry {
            tone: Tone::ValueMatch,
            label: "Matching primitive values",
        },
        LegendEntry {
            tone: Tone::KeyMatch,
            label: "Matching keys or array indices",
        },
    ]
}

/// Legend rows painted with the painter's palette.
pub fn legend_lines(painter: &Painter) -> Vec<String> {
    legend()
        .iter()
        .map(|entry| format!("{} {}", painter.tone(SWATCH, entry.tone), entry.label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jtc_types::Theme;

    #[test]
    fn four_distinct_tones() {
        let entries = legend();
        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                assert_ne!(a.tone, b.tone);
            }
        }
    }

    #[test]
    fn plain_rows() {
        let lines = legend_lines(&Painter::new(Theme::Light, false));
        assert_eq!(lines[0], "■ Extra data in left JSON");
        assert_eq!(lines[3], "■ Matching keys or array indices");
    }
}
