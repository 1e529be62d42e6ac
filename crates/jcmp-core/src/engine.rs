//! Recursive dispatcher and object comparer.
//!
//! The walk threads a single mutable [`DiffTree`] through the recursion.
//! Nested objects are diffed into a fresh child tree that is attached to its
//! parent only if something was written into it, so the final tree never
//! holds an empty container.

use serde_json::{Map, Value};
use tracing::debug;

use crate::array_diff::compare_arrays;
use crate::canonical::node_eq;
use crate::error::{CompareError, CompareResult, ShapeMismatch};
use crate::kind::NodeKind;
use crate::options::CompareOptions;
use crate::tree::DiffTree;
use crate::value_diff::compare_values;

/// Diff `left` against `right` with default options, writing every
/// difference into `output`.
///
/// On error, `output` may hold part of the walk and must be discarded.
pub fn diff(left: &Value, right: &Value, output: &mut DiffTree) -> CompareResult<()> {
    diff_with(left, right, output, &CompareOptions::default())
}

/// Like [`diff`], with explicit options.
pub fn diff_with(
    left: &Value,
    right: &Value,
    output: &mut DiffTree,
    options: &CompareOptions,
) -> CompareResult<()> {
    Walker::new(options).dispatch(Some(left), Some(right), output, None)
}

/// Recursion state for one comparison.
struct Walker<'o> {
    options: &'o CompareOptions,
    /// Keys from the root to the node pair being compared.
    trail: Vec<String>,
}

impl<'o> Walker<'o> {
    fn new(options: &'o CompareOptions) -> Self {
        Self {
            options,
            trail: Vec::new(),
        }
    }

    /// Compare a node pair sitting at `path` (its key in the parent, `None`
    /// at the root) and record any difference in `output`.
    fn dispatch(
        &mut self,
        left: Option<&Value>,
        right: Option<&Value>,
        output: &mut DiffTree,
        path: Option<&str>,
    ) -> CompareResult<()> {
        if node_eq(left, right) {
            return Ok(());
        }

        let (left_kind, right_kind) = (NodeKind::of(left), NodeKind::of(right));
        if !left_kind.is_compatible_with(right_kind) {
            return Err(self.shape_error(ShapeMismatch::Kind {
                left: left_kind,
                right: right_kind,
            }));
        }

        match (left, right) {
            (Some(Value::Object(l)), Some(Value::Object(r))) => {
                self.compare_objects(l, r, output, path)
            }
            (Some(Value::Array(l)), Some(Value::Array(r))) => {
                if let Some(leaf) = compare_arrays(l, r, self.options.array_semantics) {
                    output.insert(path.unwrap_or_default(), leaf.into());
                }
                Ok(())
            }
            _ if left_kind.is_scalar_leaf() => {
                if let Some(leaf) = compare_values(left, right) {
                    output.insert(path.unwrap_or_default(), leaf.into());
                }
                Ok(())
            }
            _ => Err(CompareError::UnsupportedType {
                pointer: self.pointer(),
                kind: left_kind,
            }),
        }
    }

    /// Check key-set equality, then recurse into every field in `left`'s
    /// order.
    fn compare_objects(
        &mut self,
        left: &Map<String, Value>,
        right: &Map<String, Value>,
        output: &mut DiffTree,
        path: Option<&str>,
    ) -> CompareResult<()> {
        let left_only: Vec<String> = left
            .keys()
            .filter(|k| !right.contains_key(k.as_str()))
            .cloned()
            .collect();
        let right_only: Vec<String> = right
            .keys()
            .filter(|k| !left.contains_key(k.as_str()))
            .cloned()
            .collect();
        if left.len() != right.len() || !left_only.is_empty() || !right_only.is_empty() {
            return Err(self.shape_error(ShapeMismatch::Keys {
                left_only,
                right_only,
            }));
        }

        match path {
            None => self.compare_fields(left, right, output),
            Some(key) => {
                let mut child = DiffTree::new();
                self.compare_fields(left, right, &mut child)?;
                output.attach(key, child);
                Ok(())
            }
        }
    }

    fn compare_fields(
        &mut self,
        left: &Map<String, Value>,
        right: &Map<String, Value>,
        output: &mut DiffTree,
    ) -> CompareResult<()> {
        for (key, value) in left {
            self.trail.push(key.clone());
            let result = self.dispatch(Some(value), right.get(key), output, Some(key));
            self.trail.pop();
            result?;
        }
        Ok(())
    }

    fn shape_error(&self, mismatch: ShapeMismatch) -> CompareError {
        let pointer = self.pointer();
        debug!(%pointer, %mismatch, "shape mismatch aborts comparison");
        CompareError::IncompatibleShape { pointer, mismatch }
    }

    /// RFC 6901 pointer to the current node pair.
    fn pointer(&self) -> String {
        self.trail
            .iter()
            .map(|key| format!("/{}", key.replace('~', "~0").replace('/', "~1")))
            .collect()
    }
}
