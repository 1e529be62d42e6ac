//! The diff tree: an object-shaped accumulator mirroring the key structure of
//! the compared documents.
//!
//! A key is present at a given path only if a difference exists at or below
//! it. Leaves carry the mutually exclusive values found at that point.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

/// Object-shaped collection of differences, in first-seen key order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DiffTree {
    entries: IndexMap<String, DiffNode>,
}

/// One entry of a [`DiffTree`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DiffNode {
    /// Differences nested below an object field.
    Container(DiffTree),
    /// Differences at a scalar or array field.
    Leaf(DiffLeaf),
}

/// The `{Offset, Length}` record written at a scalar or array field.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DiffLeaf {
    offset: Vec<Value>,
    length: usize,
}

impl DiffTree {
    /// Create an empty diff tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no difference was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, key: &str) -> Option<&DiffNode> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DiffNode)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Record a difference under `key`, replacing any previous entry.
    pub fn insert(&mut self, key: impl Into<String>, node: DiffNode) {
        self.entries.insert(key.into(), node);
    }

    /// Attach `child` under `key` unless it is empty.
    ///
    /// Returns whether the child was attached.
    pub fn attach(&mut self, key: impl Into<String>, child: DiffTree) -> bool {
        if child.is_empty() {
            return false;
        }
        self.insert(key, DiffNode::Container(child));
        true
    }

    /// Number of leaves anywhere in the tree.
    pub fn leaf_count(&self) -> usize {
        self.entries
            .values()
            .map(|node| match node {
                DiffNode::Container(tree) => tree.leaf_count(),
                DiffNode::Leaf(_) => 1,
            })
            .sum()
    }

    /// Convert into a plain, schema-less JSON object.
    pub fn to_value(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(key, node)| (key.clone(), node.to_value()))
            .collect();
        Value::Object(map)
    }
}

impl DiffNode {
    pub fn as_container(&self) -> Option<&DiffTree> {
        match self {
            Self::Container(tree) => Some(tree),
            Self::Leaf(_) => None,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Self::Container(tree) => tree.to_value(),
            Self::Leaf(leaf) => leaf.to_value(),
        }
    }
}

impl DiffLeaf {
    pub fn new(offset: Vec<Value>) -> Self {
        let length = offset.len();
        Self { offset, length }
    }

    pub fn offset(&self) -> &[Value] {
        &self.offset
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("Offset".into(), Value::Array(self.offset.clone()));
        map.insert("Length".into(), Value::from(self.length));
        Value::Object(map)
    }
}

impl From<DiffLeaf> for DiffNode {
    fn from(leaf: DiffLeaf) -> Self {
        Self::Leaf(leaf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_tree() {
        let tree = DiffTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.to_value(), json!({}));
        assert_eq!(tree.leaf_count(), 0);
    }

    #[test]
    fn leaf_shape() {
        let leaf = DiffLeaf::new(vec![json!("x"), json!("y")]);
        assert_eq!(leaf.length(), 2);
        assert_eq!(leaf.to_value(), json!({"Offset": ["x", "y"], "Length": 2}));
    }

    #[test]
    fn attach_skips_empty_children() {
        let mut tree = DiffTree::new();
        assert!(!tree.attach("a", DiffTree::new()));
        assert!(tree.is_empty());

        let mut child = DiffTree::new();
        child.insert("b", DiffLeaf::new(vec![json!("1")]).into());
        assert!(tree.attach("a", child));
        assert_eq!(
            tree.to_value(),
            json!({"a": {"b": {"Offset": ["1"], "Length": 1}}})
        );
        assert_eq!(tree.leaf_count(), 1);
        assert!(tree.get("a").and_then(DiffNode::as_container).is_some());
    }

    #[test]
    fn serialize_matches_to_value() {
        let mut child = DiffTree::new();
        child.insert("k", DiffLeaf::new(vec![json!("v")]).into());
        let mut tree = DiffTree::new();
        tree.attach("outer", child);
        tree.insert("flat", DiffLeaf::new(vec![json!("1"), json!("2")]).into());

        let via_serde = serde_json::to_value(&tree).unwrap();
        assert_eq!(via_serde, tree.to_value());
    }

    #[test]
    fn preserves_insertion_order() {
        let mut tree = DiffTree::new();
        tree.insert("z", DiffLeaf::new(vec![json!("1")]).into());
        tree.insert("a", DiffLeaf::new(vec![json!("2")]).into());
        let keys: Vec<&str> = tree.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["z", "a"]);
    }
}
