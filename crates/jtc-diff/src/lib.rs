//! Comparison core for jtc.
//!
//! Two decoded documents are compared by walking them in parallel: keys are
//! looked up directly in the corresponding composite of the other document
//! and primitives are compared by strict equality. There is no alignment of
//! sequence elements, no move detection, and no edit distance.
//!
//! # Key Types
//!
//! - [`values_match`] / [`annotate_key`] / [`lookup_child`] -- The per-node rules
//! - [`AnnotatedTree`] / [`AnnotatedNode`] -- Fully annotated document for one side
//! - [`Comparison`] / [`DiffSummary`] -- Both sides plus mismatch counts
//! - [`resolve_pointer`] -- JSON Pointer to typed [`Path`](jtc_types::Path)

pub mod compare;
pub mod error;
pub mod pointer;
pub mod summary;
pub mod tree;

pub use compare::{annotate_key, annotate_value, container_of, entries, lookup_child, values_match};
pub use error::{DiffError, DiffResult};
pub use pointer::{node_at, resolve_pointer};
pub use summary::{DiffSummary, SideSummary};
pub use tree::{annotate, AnnotatedNode, AnnotatedTree, NodeBody};

use serde::Serialize;
use serde_json::Value;

/// Both annotated sides of one comparison.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Comparison {
    pub left: AnnotatedTree,
    pub right: AnnotatedTree,
    pub summary: DiffSummary,
}

/// Annotate `left` against `right` and `right` against `left`.
pub fn compare(left: &Value, right: &Value) -> Comparison {
    let left_tree = annotate(left, Some(right), jtc_types::Side::Left);
    let right_tree = annotate(right, Some(left), jtc_types::Side::Right);
    let summary = DiffSummary::of(&left_tree, &right_tree);
    Comparison {
        left: left_tree,
        right: right_tree,
        summary,
    }
}
