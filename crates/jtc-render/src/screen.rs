//! Full view composition.
//!
//! A [`Screen`] stacks the sections of the viewer: the two raw inputs, the
//! error banner, the comparison result and the legend. Two-column sections
//! are laid out with [`side_by_side`].

use jtc_types::Side;

use crate::legend::legend_lines;
use crate::paint::Painter;
use crate::pane::Pane;
use crate::style::Tone;

pub const TITLE: &str = "JSON Tree Compare Viewer";
pub const RESULT_TITLE: &str = "Comparison Result";
pub const ERROR_TITLE: &str = "Error";
const LEGEND_TITLE: &str = "Legend";
const SEPARATOR: &str = " │ ";

struct Cell {
    text: String,
    width: usize,
}

impl Cell {
    fn empty() -> Self {
        Self {
            text: String::new(),
            width: 0,
        }
    }

    fn raw(text: &str, painter: &Painter, tone: Tone, max: usize) -> Self {
        let width = text.chars().count();
        if width <= max {
            return Self {
                text: painter.tone(text, tone),
                width,
            };
        }
        let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
        if max > 0 {
            cut.push('…');
        }
        Self {
            text: painter.tone(&cut, tone),
            width: max,
        }
    }
}

fn columns(left: Vec<Cell>, right: Vec<Cell>, column_width: usize) -> Vec<String> {
    let rows = left.len().max(right.len());
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    (0..rows)
        .map(|_| {
            let l = left.next().unwrap_or_else(Cell::empty);
            let r = right.next().unwrap_or_else(Cell::empty);
            let pad = column_width.saturating_sub(l.width);
            format!("{}{}{}{}", l.text, " ".repeat(pad), SEPARATOR, r.text)
        })
        .collect()
}

fn heading_cells(painter: &Painter, column_width: usize) -> (Cell, Cell) {
    (
        Cell::raw(Side::Left.title(), painter, Tone::Plain, column_width),
        Cell::raw(Side::Right.title(), painter, Tone::Plain, column_width),
    )
}

/// Lay out two rendered panes in columns of `column_width`, each headed by
/// its side's title.
pub fn side_by_side(
    left: &Pane,
    right: &Pane,
    painter: &Painter,
    column_width: usize,
) -> Vec<String> {
    let cells = |pane: &Pane| -> Vec<Cell> {
        pane.lines
            .iter()
            .map(|line| Cell {
                text: painter.line(line, Some(column_width)),
                width: painter.line_width(line, Some(column_width)),
            })
            .collect()
    };
    let (lh, rh) = heading_cells(painter, column_width);
    let mut left_cells = vec![lh];
    left_cells.extend(cells(left));
    let mut right_cells = vec![rh];
    right_cells.extend(cells(right));
    columns(left_cells, right_cells, column_width)
}

fn input_cells(side: Side, text: &str, painter: &Painter, column_width: usize) -> Vec<Cell> {
    if text.is_empty() {
        let placeholder = format!("Enter {side} JSON here");
        return vec![Cell::raw(&placeholder, painter, Tone::Toggle, column_width)];
    }
    text.lines()
        .map(|line| Cell::raw(line, painter, Tone::Plain, column_width))
        .collect()
}

/// The composed viewer output.
#[derive(Debug, Default)]
pub struct Screen<'a> {
    title: bool,
    inputs: Option<[&'a str; 2]>,
    error: Option<&'a str>,
    panes: Option<(Pane, Pane)>,
    legend: bool,
}

impl<'a> Screen<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self) -> Self {
        self.title = true;
        self
    }

    /// Show the raw left and right texts.
    pub fn with_inputs(mut self, left: &'a str, right: &'a str) -> Self {
        self.inputs = Some([left, right]);
        self
    }

    pub fn with_error(mut self, message: Option<&'a str>) -> Self {
        self.error = message;
        self
    }

    pub fn with_panes(mut self, panes: Option<(Pane, Pane)>) -> Self {
        self.panes = panes;
        self
    }

    pub fn with_legend(mut self) -> Self {
        self.legend = true;
        self
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn has_result(&self) -> bool {
        self.panes.is_some()
    }

    pub fn render(&self, painter: &Painter, column_width: usize) -> String {
        let mut sections: Vec<Vec<String>> = Vec::new();

        if self.title {
            sections.push(vec![TITLE.to_string()]);
        }

        if let Some([left, right]) = self.inputs {
            let (lh, rh) = heading_cells(painter, column_width);
            let mut l = vec![lh];
            l.extend(input_cells(Side::Left, left, painter, column_width));
            let mut r = vec![rh];
            r.extend(input_cells(Side::Right, right, painter, column_width));
            sections.push(columns(l, r, column_width));
        }

        if let Some(message) = self.error {
            sections.push(vec![painter.error(&format!("{ERROR_TITLE}: {message}"))]);
        }

        if let Some((left, right)) = &self.panes {
            let mut section = vec![RESULT_TITLE.to_string()];
            section.extend(side_by_side(left, right, painter, column_width));
            sections.push(section);
        }

        if self.legend {
            let mut section = vec![LEGEND_TITLE.to_string()];
            section.extend(legend_lines(painter));
            sections.push(section);
        }

        let mut out = sections
            .into_iter()
            .map(|lines| lines.join("\n"))
            .collect::<Vec<_>>()
            .join("\n\n");
        out.push('\n');
        out
    }
}
