//! Node addressing inside a decoded document.
//!
//! A [`Path`] is the ordered list of [`Key`]s from the document root to a
//! node. Paths seed the default expand state and identify nodes for
//! toggling; they play no part in deciding whether two values match.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{TypeError, TypeResult};

/// One step from a composite node to a child.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    /// Position in a sequence.
    Index(usize),
    /// Key in a mapping.
    Name(String),
}

impl Key {
    pub fn name(name: impl Into<String>) -> Self {
        Key::Name(name.into())
    }

    /// The label shown before a child: the bare index for sequences, the
    /// quoted key followed by a colon for mappings.
    pub fn label(&self) -> String {
        match self {
            Key::Index(i) => i.to_string(),
            Key::Name(name) => {
                let encoded = serde_json::to_string(name).unwrap_or_else(|_| "\"\"".to_string());
                format!("{encoded}:")
            }
        }
    }

    /// The key as a plain string, the way a mapping would store it.
    pub fn as_lookup(&self) -> String {
        match self {
            Key::Index(i) => i.to_string(),
            Key::Name(name) => name.clone(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

/// Ordered sequence of keys from the root to a node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<Key>);

impl Path {
    /// The document root.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn new(keys: Vec<Key>) -> Self {
        Self(keys)
    }

    /// Number of segments; the root has depth 0.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> &[Key] {
        &self.0
    }

    pub fn last(&self) -> Option<&Key> {
        self.0.last()
    }

    /// A new path one level below this one.
    pub fn child(&self, key: Key) -> Self {
        let mut keys = Vec::with_capacity(self.0.len() + 1);
        keys.extend(self.0.iter().cloned());
        keys.push(key);
        Self(keys)
    }

    /// Returns `true` if `self` is a strict ancestor of `other`.
    pub fn is_ancestor_of(&self, other: &Path) -> bool {
        self.0.len() < other.0.len() && other.0.starts_with(&self.0)
    }

    /// Render as an RFC 6901 JSON Pointer (`""` for the root).
    pub fn to_pointer(&self) -> String {
        let mut out = String::new();
        for key in &self.0 {
            out.push('/');
            out.push_str(&escape_token(&key.as_lookup()));
        }
        out
    }

    /// Split a JSON Pointer into its unescaped reference tokens.
    ///
    /// The tokens are untyped: whether `"0"` names an index or a mapping key
    /// depends on the document it is resolved against.
    pub fn pointer_tokens(pointer: &str) -> TypeResult<Vec<String>> {
        if pointer.is_empty() {
            return Ok(Vec::new());
        }
        let rest = pointer
            .strip_prefix('/')
            .ok_or_else(|| TypeError::InvalidPointer(pointer.to_string()))?;
        rest.split('/')
            .map(|token| {
                unescape_token(token).ok_or_else(|| TypeError::InvalidPointer(pointer.to_string()))
            })
            .collect()
    }
}

/// Displays as the JSON Pointer, so the root is the empty string.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pointer())
    }
}

impl From<Vec<Key>> for Path {
    fn from(keys: Vec<Key>) -> Self {
        Self(keys)
    }
}

fn escape_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

fn unescape_token(token: &str) -> Option<String> {
    let mut out = String::with_capacity(token.len());
    let mut chars = token.chars();
    while let Some(ch) = chars.next() {
        if ch != '~' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('0') => out.push('~'),
            Some('1') => out.push('/'),
            _ => return None,
        }
    }
    Some(out)
}
