//! Result classification.

use std::fmt;

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::CompareError;
use crate::tree::DiffTree;

/// Categorical outcome of a comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResponseType {
    ObjectsAreEqual,
    ObjectsAreNotEqual,
    ObjectsAreNotOfSameSize,
}

impl ResponseType {
    /// Machine label, e.g. `OBJECTS_ARE_NOT_EQUAL`.
    pub fn label(self) -> &'static str {
        match self {
            Self::ObjectsAreEqual => "OBJECTS_ARE_EQUAL",
            Self::ObjectsAreNotEqual => "OBJECTS_ARE_NOT_EQUAL",
            Self::ObjectsAreNotOfSameSize => "OBJECTS_ARE_NOT_OF_SAME_SIZE",
        }
    }

    /// Human form of the label, with separators replaced by spaces.
    pub fn message(self) -> String {
        self.label().replace('_', " ")
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// The record handed back to callers: a message and a schema-less payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComparerResponse {
    pub message: String,
    pub data: Value,
    #[serde(skip)]
    pub outcome: ResponseType,
}

impl ComparerResponse {
    /// Classify a completed diff tree. Emptiness alone decides equality.
    pub fn classify(tree: &DiffTree) -> Self {
        let outcome = if tree.is_empty() {
            ResponseType::ObjectsAreEqual
        } else {
            ResponseType::ObjectsAreNotEqual
        };
        Self {
            message: outcome.message(),
            data: tree.to_value(),
            outcome,
        }
    }

    /// Build the response for a comparison aborted by a shape mismatch.
    ///
    /// The payload is diagnostic only; no part of the diff tree survives.
    pub fn shape_mismatch(err: &CompareError) -> Self {
        let trace = match err {
            CompareError::IncompatibleShape { pointer, mismatch } => {
                format!("{mismatch} at `{pointer}`")
            }
            other => other.to_string(),
        };
        Self {
            message: err.to_string(),
            data: json!({
                "trace": trace,
                "pointer": err.pointer(),
            }),
            outcome: ResponseType::ObjectsAreNotOfSameSize,
        }
    }

    pub fn is_equal(&self) -> bool {
        self.outcome == ResponseType::ObjectsAreEqual
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShapeMismatch;
    use crate::kind::NodeKind;
    use crate::tree::DiffLeaf;

    #[test]
    fn labels_and_messages() {
        assert_eq!(ResponseType::ObjectsAreEqual.label(), "OBJECTS_ARE_EQUAL");
        assert_eq!(
            ResponseType::ObjectsAreNotEqual.message(),
            "OBJECTS ARE NOT EQUAL"
        );
        assert_eq!(
            ResponseType::ObjectsAreNotOfSameSize.to_string(),
            "OBJECTS ARE NOT OF SAME SIZE"
        );
    }

    #[test]
    fn empty_tree_is_equal() {
        let response = ComparerResponse::classify(&DiffTree::new());
        assert!(response.is_equal());
        assert_eq!(response.message, "OBJECTS ARE EQUAL");
        assert_eq!(response.data, json!({}));
    }

    #[test]
    fn non_empty_tree_is_not_equal() {
        let mut tree = DiffTree::new();
        tree.insert("a", DiffLeaf::new(vec![json!("x")]).into());
        let response = ComparerResponse::classify(&tree);
        assert_eq!(response.outcome, ResponseType::ObjectsAreNotEqual);
        assert_eq!(response.data, json!({"a": {"Offset": ["x"], "Length": 1}}));
    }

    #[test]
    fn shape_mismatch_payload() {
        let err = CompareError::IncompatibleShape {
            pointer: "/a".into(),
            mismatch: ShapeMismatch::Kind {
                left: NodeKind::String,
                right: NodeKind::Null,
            },
        };
        let response = ComparerResponse::shape_mismatch(&err);
        assert_eq!(response.message, "OBJECTS ARE NOT OF SAME SIZE");
        assert_eq!(response.data["pointer"], json!("/a"));
        assert_eq!(
            response.data["trace"],
            json!("node kinds differ: left is string, right is null at `/a`")
        );
    }

    #[test]
    fn serialized_shape() {
        let response = ComparerResponse::classify(&DiffTree::new());
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"message": "OBJECTS ARE EQUAL", "data": {}}));
    }
}
