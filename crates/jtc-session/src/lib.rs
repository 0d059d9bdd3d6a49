//! Viewer session for jtc.
//!
//! The [`Viewer`] is the controller behind every user action: it holds the
//! two raw texts, decodes them on compare, keeps the decoded documents and
//! per-node expand state for each side, shows a single error banner when
//! decoding fails, and renders the full screen.
//!
//! # Modules
//!
//! - [`viewer`] -- The [`Viewer`] controller
//! - [`clipboard`] -- The [`Clipboard`] trait with terminal and in-memory backends
//! - [`config`] -- [`ViewerConfig`], loadable from TOML
//! - [`error`] -- [`SessionError`] and [`INVALID_JSON_MESSAGE`]

pub mod clipboard;
pub mod config;
pub mod error;
pub mod viewer;

pub use clipboard::{Clipboard, MemoryClipboard, Osc52Clipboard};
pub use config::ViewerConfig;
pub use error::{SessionError, SessionResult, INVALID_JSON_MESSAGE};
pub use viewer::Viewer;

// Re-export key types
pub use jtc_diff::{Comparison, DiffSummary};
pub use jtc_render::{ExpandState, Pane};
pub use jtc_types::{ColorMode, Key, Path, Side, Theme};
