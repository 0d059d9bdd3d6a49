//! Foundation types for jtc, the JSON tree compare viewer.
//!
//! Every other jtc crate depends on `jtc-types`.
//!
//! # Key Types
//!
//! - [`Side`] -- Which of the two panes (left or right) a value belongs to
//! - [`Key`] / [`Path`] -- Addressing of nodes inside a decoded document
//! - [`Annotation`] -- Match / differ verdict for a key label or primitive
//! - [`Container`] -- Sequence or mapping, with its bracket glyph
//! - [`Theme`] / [`ColorMode`] -- Presentation settings, no effect on comparison

pub mod annotation;
pub mod error;
pub mod path;
pub mod side;
pub mod theme;

pub use annotation::{Annotation, Container};
pub use error::{TypeError, TypeResult};
pub use path::{Key, Path};
pub use side::Side;
pub use theme::{ColorMode, Theme};
