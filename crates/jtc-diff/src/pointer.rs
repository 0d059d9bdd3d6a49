//! Resolve JSON Pointers against a decoded document.

use jtc_types::{Key, Path};
use serde_json::Value;

use crate::compare::parse_index;
use crate::error::{DiffError, DiffResult};

/// Turn a JSON Pointer into a typed [`Path`] by walking `document`.
///
/// Tokens under a sequence become [`Key::Index`], tokens under a mapping
/// become [`Key::Name`]. Fails if any token has no matching node.
pub fn resolve_pointer(document: &Value, pointer: &str) -> DiffResult<Path> {
    let tokens = Path::pointer_tokens(pointer)?;
    let not_found = || DiffError::PathNotFound {
        pointer: pointer.to_string(),
    };

    let mut keys = Vec::with_capacity(tokens.len());
    let mut node = document;
    for token in tokens {
        let (key, child) = match node {
            Value::Object(map) => {
                let child = map.get(&token).ok_or_else(not_found)?;
                (Key::Name(token), child)
            }
            Value::Array(items) => {
                let index = parse_index(&token).ok_or_else(not_found)?;
                let child = items.get(index).ok_or_else(not_found)?;
                (Key::Index(index), child)
            }
            _ => return Err(not_found()),
        };
        keys.push(key);
        node = child;
    }
    Ok(Path::new(keys))
}

/// The node at a typed `path`, if `document` has one.
///
/// Unlike [`lookup_child`](crate::lookup_child), keys never cross container
/// kinds: [`Key::Index`] only steps into sequences and [`Key::Name`] only into
/// mappings, matching the paths the renderer produces.
pub fn node_at<'a>(document: &'a Value, path: &Path) -> Option<&'a Value> {
    path.keys()
        .iter()
        .try_fold(document, |node, key| match (node, key) {
            (Value::Array(items), Key::Index(i)) => items.get(*i),
            (Value::Object(map), Key::Name(name)) => map.get(name),
            _ => None,
        })
}
