//! Scalar leaf comparison for string, null, and missing nodes.

use serde_json::Value;

use crate::tree::DiffLeaf;

/// Compare two scalar leaves by their string representation.
///
/// Null and missing nodes render as the empty string. Empty representations
/// are left out of the offset, so a value compared against an empty string
/// contributes only itself. Returns `None` when the representations match.
pub fn compare_values(left: Option<&Value>, right: Option<&Value>) -> Option<DiffLeaf> {
    let (left, right) = (render(left), render(right));
    if left == right {
        return None;
    }

    let offset: Vec<Value> = [left, right]
        .into_iter()
        .filter(|s| !s.is_empty())
        .map(|s| Value::String(s.to_owned()))
        .collect();

    if offset.is_empty() {
        None
    } else {
        Some(DiffLeaf::new(offset))
    }
}

fn render(value: Option<&Value>) -> &str {
    match value {
        Some(Value::String(s)) => s,
        _ => "",
    }
}
