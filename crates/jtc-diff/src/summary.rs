//! Mismatch counts for a comparison.

use jtc_types::{Annotation, Side};
use serde::Serialize;

use crate::tree::{AnnotatedTree, NodeBody};

/// Counts for one side of a comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SideSummary {
    /// Every node, the root included.
    pub nodes: usize,
    pub composites: usize,
    pub primitives: usize,
    /// Key labels absent from the other side.
    pub differing_keys: usize,
    /// Primitives not strictly equal to their counterpart.
    pub differing_values: usize,
}

impl SideSummary {
    fn of(tree: &AnnotatedTree) -> Self {
        let mut summary = Self::default();
        tree.root.walk(&mut |node| {
            summary.nodes += 1;
            if node.key_annotation == Some(Annotation::Differ) {
                summary.differing_keys += 1;
            }
            match &node.body {
                NodeBody::Composite { .. } => summary.composites += 1,
                NodeBody::Primitive { annotation, .. } => {
                    summary.primitives += 1;
                    if !annotation.is_match() {
                        summary.differing_values += 1;
                    }
                }
            }
        });
        summary
    }

    /// Returns `true` if nothing on this side is marked as differing.
    pub fn is_clean(&self) -> bool {
        self.differing_keys == 0 && self.differing_values == 0
    }
}

/// Counts for both sides of a comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub left: SideSummary,
    pub right: SideSummary,
}

impl DiffSummary {
    pub fn of(left: &AnnotatedTree, right: &AnnotatedTree) -> Self {
        Self {
            left: SideSummary::of(left),
            right: SideSummary::of(right),
        }
    }

    pub fn side(&self, side: Side) -> &SideSummary {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Returns `true` if neither pane shows any mismatch.
    pub fn is_identical(&self) -> bool {
        self.left.is_clean() && self.right.is_clean()
    }
}
