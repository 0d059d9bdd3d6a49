//! Tree renderer for jtc.
//!
//! Renders one decoded document against its counterpart as a list of styled
//! lines. Composite nodes show a toggle with their bracket glyph and are
//! expanded or collapsed independently through [`ExpandState`]. Annotation
//! happens lazily while rendering: children of collapsed nodes are never
//! visited.
//!
//! # Modules
//!
//! - [`expand`] -- Per-node expand/collapse flags keyed by [`Path`](jtc_types::Path)
//! - [`pane`] -- The recursive renderer producing [`Line`]s
//! - [`style`] -- [`Tone`]s and per-theme [`Palette`]s
//! - [`paint`] -- ANSI output via `colored`
//! - [`legend`] -- The static four-color legend
//! - [`screen`] -- Full view composition and side-by-side layout

pub mod expand;
pub mod legend;
pub mod paint;
pub mod pane;
pub mod screen;
pub mod style;

pub use expand::ExpandState;
pub use legend::{legend, legend_lines, LegendEntry};
pub use paint::Painter;
pub use pane::{render_pane, Line, Pane, Span};
pub use screen::{side_by_side, Screen, ERROR_TITLE, RESULT_TITLE, TITLE};
pub use style::{Palette, Style, Tone};
