//! Content equality and hashable keys for JSON values.
//!
//! Object key order never matters, and numbers compare by numeric value, so
//! `1` and `1.0` are the same. [`json_eq`] and [`ElementKey`] agree on
//! equality.

use std::fmt::Write;

use serde_json::{Number, Value};

/// Deep equality by content.
pub fn json_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => number_key(l) == number_key(r),
        (Value::Array(l), Value::Array(r)) => {
            l.len() == r.len() && l.iter().zip(r).all(|(a, b)| json_eq(a, b))
        }
        (Value::Object(l), Value::Object(r)) => {
            l.len() == r.len()
                && l.iter()
                    .all(|(key, a)| r.get(key).is_some_and(|b| json_eq(a, b)))
        }
        _ => left == right,
    }
}

/// Like [`json_eq`], with a missing node equal only to another missing node.
pub fn node_eq(left: Option<&Value>, right: Option<&Value>) -> bool {
    match (left, right) {
        (Some(l), Some(r)) => json_eq(l, r),
        (None, None) => true,
        _ => false,
    }
}

/// Hash key of an array element.
///
/// Strings key on their text without allocating; everything else keys on a
/// canonical encoding with sorted object keys and normalized numbers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementKey<'a> {
    Text(&'a str),
    Encoded(String),
}

impl<'a> ElementKey<'a> {
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s),
            other => {
                let mut out = String::new();
                write_canonical(other, &mut out);
                Self::Encoded(out)
            }
        }
    }
}

/// Textual form of a number in which integral floats print as integers.
pub fn number_key(n: &Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f.fract() == 0.0 && f.abs() < 9.0e15 {
                return (f as i64).to_string();
            }
        }
    }
    n.to_string()
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&number_key(n)),
        Value::String(s) => {
            let _ = write!(out, "{s:?}");
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                let _ = write!(out, "{key:?}:");
                write_canonical(item, out);
            }
            out.push('}');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integral_float_equals_integer() {
        assert!(json_eq(&json!(1), &json!(1.0)));
        assert!(json_eq(&json!({"n": [2, 3.0]}), &json!({"n": [2.0, 3]})));
        assert!(!json_eq(&json!(1), &json!(1.5)));
    }

    #[test]
    fn object_order_ignored() {
        assert!(json_eq(&json!({"a": "1", "b": "2"}), &json!({"b": "2", "a": "1"})));
        assert!(!json_eq(&json!({"a": "1"}), &json!({"a": "1", "b": "2"})));
    }

    #[test]
    fn missing_nodes() {
        assert!(node_eq(None, None));
        assert!(!node_eq(Some(&json!(null)), None));
    }

    #[test]
    fn keys_agree_with_equality() {
        let a = json!({"x": 1, "y": ["p"]});
        let b = json!({"y": ["p"], "x": 1.0});
        assert_eq!(ElementKey::of(&a), ElementKey::of(&b));
        assert_ne!(ElementKey::of(&json!("5")), ElementKey::of(&json!(5)));
        assert_eq!(ElementKey::of(&json!("s")), ElementKey::Text("s"));
    }
}
