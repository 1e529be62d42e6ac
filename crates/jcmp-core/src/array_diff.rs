//! Array comparison: symmetric difference of element values.
//!
//! Elements are never diffed field by field. Arrays whose first element is a
//! string are compared by string value, anything else by content equality of
//! the whole element. Membership runs through hash lookups on
//! [`ElementKey`], so large arrays stay linear.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use serde_json::Value;

use crate::canonical::{number_key, ElementKey};
use crate::kind::NodeKind;
use crate::options::ArraySemantics;
use crate::tree::DiffLeaf;

/// Compare two arrays and report the elements present on only one side.
///
/// The offset lists left-only elements first, then right-only elements, each
/// in order of first appearance. Returns `None` when neither side has
/// elements the other lacks, which happens for arrays that differ only in
/// ordering (or, under set semantics, in repetition).
pub fn compare_arrays(
    left: &[Value],
    right: &[Value],
    semantics: ArraySemantics,
) -> Option<DiffLeaf> {
    let kind = left
        .first()
        .or_else(|| right.first())
        .map(|first| NodeKind::of(Some(first)));

    let (left, right): (Cow<'_, [Value]>, Cow<'_, [Value]>) = match kind {
        Some(NodeKind::String) => (Cow::Owned(as_text(left)), Cow::Owned(as_text(right))),
        _ => (Cow::Borrowed(left), Cow::Borrowed(right)),
    };

    let (left_only, right_only) = match semantics {
        ArraySemantics::Set => (
            set_difference(&left, &right),
            set_difference(&right, &left),
        ),
        ArraySemantics::Multiset => (
            multiset_difference(&left, &right),
            multiset_difference(&right, &left),
        ),
    };

    let offset: Vec<Value> = left_only.into_iter().chain(right_only).collect();
    if offset.is_empty() {
        None
    } else {
        Some(DiffLeaf::new(offset))
    }
}

/// Project the elements of a string array to their textual form.
///
/// Numbers and booleans are rendered as strings so that `5` and `"5"` match;
/// nulls and nested containers pass through untouched.
fn as_text(items: &[Value]) -> Vec<Value> {
    items
        .iter()
        .map(|item| match item {
            Value::Number(n) => Value::String(number_key(n)),
            Value::Bool(b) => Value::String(b.to_string()),
            other => other.clone(),
        })
        .collect()
}

/// Distinct elements of `from` absent from `exclude`.
fn set_difference(from: &[Value], exclude: &[Value]) -> Vec<Value> {
    let excluded: HashSet<ElementKey<'_>> = exclude.iter().map(ElementKey::of).collect();
    let mut out: IndexMap<ElementKey<'_>, &Value> = IndexMap::new();
    for item in from {
        let key = ElementKey::of(item);
        if !excluded.contains(&key) {
            out.entry(key).or_insert(item);
        }
    }
    out.into_values().cloned().collect()
}

/// Elements of `from` left over after each one cancels one equal element of
/// `exclude`.
fn multiset_difference(from: &[Value], exclude: &[Value]) -> Vec<Value> {
    let mut remaining: HashMap<ElementKey<'_>, usize> = HashMap::new();
    for item in exclude {
        *remaining.entry(ElementKey::of(item)).or_insert(0) += 1;
    }
    let mut out = Vec::new();
    for item in from {
        match remaining.get_mut(&ElementKey::of(item)) {
            Some(count) if *count > 0 => *count -= 1,
            _ => out.push(item.clone()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn values(v: Value) -> Vec<Value> {
        match v {
            Value::Array(items) => items,
            other => panic!("expected array, got {other}"),
        }
    }

    #[test]
    fn string_set_difference() {
        let left = values(json!(["1", "2", "3", "4", "5"]));
        let right = values(json!(["5", "6", "7"]));

        let leaf = compare_arrays(&left, &right, ArraySemantics::Set).unwrap();
        assert_eq!(
            leaf.to_value(),
            json!({"Offset": ["1", "2", "3", "4", "6", "7"], "Length": 6})
        );
    }

    #[test]
    fn reordered_arrays_have_no_diff() {
        let left = values(json!(["a", "b", "c"]));
        let right = values(json!(["c", "a", "b"]));
        assert!(compare_arrays(&left, &right, ArraySemantics::Set).is_none());
    }

    #[test]
    fn set_semantics_collapse_duplicates() {
        let left = values(json!(["a", "a", "b"]));
        let right = values(json!(["b"]));
        let leaf = compare_arrays(&left, &right, ArraySemantics::Set).unwrap();
        assert_eq!(leaf.offset(), [json!("a")]);

        let only_repetition = values(json!(["a", "b", "b"]));
        let plain = values(json!(["a", "b"]));
        assert!(compare_arrays(&only_repetition, &plain, ArraySemantics::Set).is_none());
    }

    #[test]
    fn multiset_semantics_keep_duplicates() {
        let left = values(json!(["a", "b", "b"]));
        let right = values(json!(["a", "b"]));
        let leaf = compare_arrays(&left, &right, ArraySemantics::Multiset).unwrap();
        assert_eq!(leaf.offset(), [json!("b")]);
        assert_eq!(leaf.length(), 1);

        let left = values(json!(["x", "x", "x"]));
        let right = values(json!(["x", "y"]));
        let leaf = compare_arrays(&left, &right, ArraySemantics::Multiset).unwrap();
        assert_eq!(leaf.offset(), [json!("x"), json!("x"), json!("y")]);
    }

    #[test]
    fn one_side_empty() {
        let left: Vec<Value> = Vec::new();
        let right = values(json!(["only"]));
        let leaf = compare_arrays(&left, &right, ArraySemantics::Set).unwrap();
        assert_eq!(leaf.offset(), [json!("only")]);
    }

    #[test]
    fn object_elements_compared_whole() {
        let left = values(json!([{"id": "1", "name": "a"}, {"id": "2"}]));
        let right = values(json!([{"name": "a", "id": "1"}, {"id": "3"}]));

        let leaf = compare_arrays(&left, &right, ArraySemantics::Set).unwrap();
        assert_eq!(leaf.offset(), [json!({"id": "2"}), json!({"id": "3"})]);
    }

    #[test]
    fn numbers_in_string_array_match_by_text() {
        let left = values(json!(["5", "6"]));
        let right = values(json!([5, "6"]));
        assert!(compare_arrays(&left, &right, ArraySemantics::Set).is_none());
    }

    #[test]
    fn integral_floats_match_integers() {
        let left = values(json!([1, 2]));
        let right = values(json!([1.0, 3]));
        let leaf = compare_arrays(&left, &right, ArraySemantics::Set).unwrap();
        assert_eq!(leaf.offset(), [json!(2), json!(3)]);
    }

    #[test]
    fn large_disjoint_arrays_stay_fast() {
        let left: Vec<Value> = (0..50_000).map(|i| json!(format!("l{i}"))).collect();
        let right: Vec<Value> = (0..50_000).map(|i| json!(format!("r{i}"))).collect();

        let started = std::time::Instant::now();
        let leaf = compare_arrays(&left, &right, ArraySemantics::Set).unwrap();
        assert_eq!(leaf.length(), 100_000);
        assert_eq!(leaf.offset()[0], json!("l0"));
        assert_eq!(leaf.offset()[50_000], json!("r0"));

        let multiset = compare_arrays(&left, &right, ArraySemantics::Multiset).unwrap();
        assert_eq!(multiset.length(), 100_000);
        assert!(started.elapsed() < std::time::Duration::from_secs(5));
    }
}
