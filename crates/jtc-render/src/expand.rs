//! Expand/collapse state for composite nodes.
//!
//! Each composite node owns one boolean. Nodes without an explicit flag fall
//! back to a default derived from their depth: shallower than
//! `default_depth` starts expanded, anything deeper starts collapsed.
//! Flags of descendants survive when an ancestor is collapsed, so expanding
//! it again restores exactly what was visible before.

use std::collections::BTreeMap;

use jtc_types::Path;

/// Per-node expand flags for one pane.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpandState {
    default_depth: usize,
    blanket: Option<bool>,
    flags: BTreeMap<Path, bool>,
}

impl ExpandState {
    /// Nodes at depth 0 and 1 start expanded.
    pub const DEFAULT_DEPTH: usize = 2;

    pub fn new(default_depth: usize) -> Self {
        Self {
            default_depth,
            blanket: None,
            flags: BTreeMap::new(),
        }
    }

    pub fn default_depth(&self) -> usize {
        self.default_depth
    }

    /// Whether the node at `path` shows its children.
    pub fn is_expanded(&self, path: &Path) -> bool {
        if let Some(&flag) = self.flags.get(path) {
            return flag;
        }
        self.blanket
            .unwrap_or(path.depth() < self.default_depth)
    }

    /// Flip the node at `path` and return its new state. No other node is
    /// affected.
    pub fn toggle(&mut self, path: &Path) -> bool {
        let expanded = !self.is_expanded(path);
        self.flags.insert(path.clone(), expanded);
        expanded
    }

    pub fn set(&mut self, path: &Path, expanded: bool) {
        self.flags.insert(path.clone(), expanded);
    }

    /// Expand every node, dropping individual flags.
    pub fn expand_all(&mut self) {
        self.flags.clear();
        self.blanket = Some(true);
    }

    /// Collapse every node, dropping individual flags.
    pub fn collapse_all(&mut self) {
        self.flags.clear();
        self.blanket = Some(false);
    }

    /// Back to depth-derived defaults, as for freshly created nodes.
    pub fn reset(&mut self) {
        self.flags.clear();
        self.blanket = None;
    }

    /// Number of nodes with an explicit flag.
    pub fn flagged(&self) -> usize {
        self.flags.len()
    }
}

impl Default for ExpandState {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DEPTH)
    }
}
