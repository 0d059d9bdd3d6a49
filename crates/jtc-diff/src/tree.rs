//! Fully annotated document trees.
//!
//! [`annotate`] walks one document against its counterpart and records, for
//! every node, the key label verdict and either the primitive verdict or the
//! annotated children. The result does not depend on expand state; it backs
//! machine-readable output and the mismatch summary.

use jtc_types::{Annotation, Container, Key, Path, Side};
use serde::Serialize;
use serde_json::Value;

use crate::compare::{annotate_key, annotate_value, container_of, entries, lookup_child};

/// One side of a comparison, annotated against the other side.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnnotatedTree {
    /// The pane this tree is rendered in; decides the mismatch color.
    pub side: Side,
    pub root: AnnotatedNode,
}

impl AnnotatedTree {
    /// The node at `path`, if the document has one.
    pub fn find(&self, path: &Path) -> Option<&AnnotatedNode> {
        path.keys()
            .iter()
            .try_fold(&self.root, |node, key| node.child(key))
    }
}

/// A node with its verdicts.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnnotatedNode {
    /// The key under which the node sits in its parent; `None` for the root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<Key>,
    /// Whether the other side's parent has the same key; `None` for the root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_annotation: Option<Annotation>,
    #[serde(flatten)]
    pub body: NodeBody,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NodeBody {
    Primitive {
        value: Value,
        annotation: Annotation,
    },
    Composite {
        container: Container,
        children: Vec<AnnotatedNode>,
    },
}

impl AnnotatedNode {
    /// The primitive verdict, `None` for composites.
    pub fn annotation(&self) -> Option<Annotation> {
        match &self.body {
            NodeBody::Primitive { annotation, .. } => Some(*annotation),
            NodeBody::Composite { .. } => None,
        }
    }

    pub fn children(&self) -> &[AnnotatedNode] {
        match &self.body {
            NodeBody::Primitive { .. } => &[],
            NodeBody::Composite { children, .. } => children,
        }
    }

    pub fn child(&self, key: &Key) -> Option<&AnnotatedNode> {
        self.children()
            .iter()
            .find(|c| c.key.as_ref() == Some(key))
    }

    /// Visit this node and all descendants depth-first, in document order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a AnnotatedNode)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}

/// Annotate `value` against `other`, the value at the same place in the
/// other document.
pub fn annotate(value: &Value, other: Option<&Value>, side: Side) -> AnnotatedTree {
    AnnotatedTree {
        side,
        root: annotate_node(None, value, other),
    }
}

fn annotate_node(
    key: Option<(Key, Annotation)>,
    value: &Value,
    other: Option<&Value>,
) -> AnnotatedNode {
    let (key, key_annotation) = match key {
        Some((key, annotation)) => (Some(key), Some(annotation)),
        None => (None, None),
    };

    let body = match container_of(value) {
        None => NodeBody::Primitive {
            value: value.clone(),
            annotation: annotate_value(value, other),
        },
        Some(container) => {
            let children = entries(value)
                .into_iter()
                .map(|(child_key, child)| {
                    let key_verdict = annotate_key(other, &child_key);
                    let other_child = lookup_child(other, &child_key);
                    annotate_node(Some((child_key, key_verdict)), child, other_child)
                })
                .collect();
            NodeBody::Composite { container, children }
        }
    };

    AnnotatedNode {
        key,
        key_annotation,
        body,
    }
}
