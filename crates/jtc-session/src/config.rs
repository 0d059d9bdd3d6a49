use std::path::Path;

use jtc_render::ExpandState;
use jtc_types::{ColorMode, Theme};
use serde::{Deserialize, Serialize};

use crate::error::{SessionError, SessionResult};

/// Presentation settings for a viewer session.
///
/// None of these affect which nodes match; they only change how the result
/// is shown. Missing keys in a TOML file fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Initial display mode.
    pub theme: Theme,
    /// Composites shallower than this start expanded.
    pub expand_depth: usize,
    /// Columns per nesting level.
    pub indent: usize,
    /// When to emit ANSI colors.
    pub color: ColorMode,
    /// Width of each pane column in the side-by-side layout.
    pub pane_width: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            expand_depth: ExpandState::DEFAULT_DEPTH,
            indent: 2,
            color: ColorMode::Auto,
            pane_width: 48,
        }
    }
}

impl ViewerConfig {
    pub fn from_toml_str(text: &str) -> SessionResult<Self> {
        toml::from_str(text).map_err(|e| SessionError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> SessionResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> SessionResult<String> {
        toml::to_string(self).map_err(|e| SessionError::Config(e.to_string()))
    }
}
