//! Per-node comparison rules.
//!
//! Primitives match only under strict equality: same JSON type and same
//! value. A key label matches when the corresponding composite of the other
//! document has an entry under the same key. The two checks are independent:
//! a matching key may still hold a differing value.

use jtc_types::{Annotation, Container, Key};
use serde_json::{Number, Value};

/// Strict equality between a value and its counterpart in the other document.
///
/// An absent counterpart never matches, not even `null`. Composites never
/// match as a whole; their children are compared individually.
pub fn values_match(value: &Value, other: Option<&Value>) -> bool {
    let Some(other) = other else {
        return false;
    };
    match (value, other) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        _ => false,
    }
}

/// Annotation for a primitive node.
pub fn annotate_value(value: &Value, other: Option<&Value>) -> Annotation {
    Annotation::from_match(values_match(value, other))
}

/// Annotation for a key label: `Differ` when the other side is absent, is
/// not a composite, or has no entry under `key`.
pub fn annotate_key(other: Option<&Value>, key: &Key) -> Annotation {
    Annotation::from_match(lookup_child(other, key).is_some())
}

/// The value stored under `key` in the other document's composite.
///
/// Lookups cross container kinds the way property access does: a mapping
/// looked up by index `i` uses the key `"i"`, and a sequence looked up by
/// name succeeds only for a canonical decimal index within bounds.
pub fn lookup_child<'a>(other: Option<&'a Value>, key: &Key) -> Option<&'a Value> {
    match (other?, key) {
        (Value::Object(map), Key::Name(name)) => map.get(name),
        (Value::Object(map), Key::Index(i)) => map.get(&i.to_string()),
        (Value::Array(items), Key::Index(i)) => items.get(*i),
        (Value::Array(items), Key::Name(name)) => parse_index(name).and_then(|i| items.get(i)),
        _ => None,
    }
}

/// The container kind of a composite value, `None` for primitives.
pub fn container_of(value: &Value) -> Option<Container> {
    match value {
        Value::Array(_) => Some(Container::Sequence),
        Value::Object(_) => Some(Container::Mapping),
        _ => None,
    }
}

/// Children of a composite in natural order: index order for sequences,
/// insertion order for mappings. Empty for primitives.
pub fn entries(value: &Value) -> Vec<(Key, &Value)> {
    match value {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| (Key::Index(i), item))
            .collect(),
        Value::Object(map) => map
            .iter()
            .map(|(name, item)| (Key::Name(name.clone()), item))
            .collect(),
        _ => Vec::new(),
    }
}

/// Parse a canonical array index: `0` or a decimal without leading zeros.
pub(crate) fn parse_index(token: &str) -> Option<usize> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if token.len() > 1 && token.starts_with('0') {
        return None;
    }
    token.parse().ok()
}

// JSON has one number type, so 1 and 1.0 are the same value.
fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn same_type_same_value_matches() {
        assert!(values_match(&json!(1), Some(&json!(1))));
        assert!(values_match(&json!("x"), Some(&json!("x"))));
        assert!(values_match(&json!(true), Some(&json!(true))));
        assert!(values_match(&json!(null), Some(&json!(null))));
    }

    #[test]
    fn type_mismatch_differs() {
        assert!(!values_match(&json!(1), Some(&json!("1"))));
        assert!(!values_match(&json!(0), Some(&json!(false))));
        assert!(!values_match(&json!(null), Some(&json!(false))));
        assert!(!values_match(&json!(""), Some(&json!(null))));
    }

    #[test]
    fn absent_never_matches() {
        assert!(!values_match(&json!(null), None));
        assert_eq!(annotate_value(&json!(1), None), Annotation::Differ);
    }

    #[test]
    fn integer_and_float_forms_are_one_number() {
        assert!(values_match(&json!(1), Some(&json!(1.0))));
        assert!(!values_match(&json!(1), Some(&json!(1.5))));
        assert!(values_match(&json!(u64::MAX), Some(&json!(u64::MAX))));
        assert!(!values_match(&json!(-1), Some(&json!(u64::MAX))));
    }

    #[test]
    fn composites_never_match_whole() {
        assert!(!values_match(&json!([1]), Some(&json!([1]))));
        assert!(!values_match(&json!({}), Some(&json!({}))));
        assert!(!values_match(&json!(1), Some(&json!([1]))));
    }

    #[test]
    fn key_presence() {
        let other = json!({"a": null});
        assert_eq!(annotate_key(Some(&other), &Key::name("a")), Annotation::Match);
        assert_eq!(annotate_key(Some(&other), &Key::name("b")), Annotation::Differ);
        assert_eq!(annotate_key(None, &Key::name("a")), Annotation::Differ);
        assert_eq!(annotate_key(Some(&json!("a")), &Key::name("a")), Annotation::Differ);
        assert_eq!(annotate_key(Some(&json!(5)), &Key::Index(0)), Annotation::Differ);
    }

    #[test]
    fn sequence_lookup() {
        let other = json!([10, 20]);
        assert_eq!(lookup_child(Some(&other), &Key::Index(1)), Some(&json!(20)));
        assert_eq!(lookup_child(Some(&other), &Key::Index(2)), None);
        assert_eq!(lookup_child(Some(&other), &Key::name("1")), Some(&json!(20)));
        assert_eq!(lookup_child(Some(&other), &Key::name("01")), None);
        assert_eq!(lookup_child(Some(&other), &Key::name("length")), None);
    }

    #[test]
    fn mapping_looked_up_by_index() {
        let other = json!({"0": "zero"});
        assert_eq!(lookup_child(Some(&other), &Key::Index(0)), Some(&json!("zero")));
        assert_eq!(lookup_child(Some(&other), &Key::Index(1)), None);
    }

    #[test]
    fn entries_keep_insertion_order() {
        let value: Value = serde_json::from_str(r#"{"z":1,"a":2,"m":3}"#).unwrap();
        let keys: Vec<Key> = entries(&value).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![Key::name("z"), Key::name("a"), Key::name("m")]);
        assert!(entries(&json!(3)).is_empty());
    }

    #[test]
    fn canonical_indices() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("42"), Some(42));
        assert_eq!(parse_index("007"), None);
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index(""), None);
    }

    fn primitive() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i32>().prop_map(|n| json!(n)),
            "[a-z0-9]{0,4}".prop_map(Value::String),
        ]
    }

    proptest! {
        #[test]
        fn match_is_symmetric(a in primitive(), b in primitive()) {
            prop_assert_eq!(values_match(&a, Some(&b)), values_match(&b, Some(&a)));
        }

        #[test]
        fn match_agrees_with_structural_equality(a in primitive(), b in primitive()) {
            prop_assert_eq!(values_match(&a, Some(&b)), a == b);
        }
    }
}
