use serde_json::Value;
use tracing::debug;

use crate::engine::diff_with;
use crate::error::{CompareError, CompareResult};
use crate::options::CompareOptions;
use crate::response::ComparerResponse;
use crate::tree::DiffTree;

/// Compares two documents and classifies the outcome.
///
/// Stateless apart from its options: one instance can serve any number of
/// concurrent comparisons.
#[derive(Clone, Debug, Default)]
pub struct Comparer {
    options: CompareOptions,
}

impl Comparer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CompareOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    /// Diff `left` against `right` and wrap the result.
    ///
    /// A shape mismatch anywhere aborts the walk and yields an
    /// `OBJECTS ARE NOT OF SAME SIZE` response. Only
    /// [`CompareError::UnsupportedType`] is returned as `Err`.
    pub fn compare(&self, left: &Value, right: &Value) -> CompareResult<ComparerResponse> {
        let mut tree = DiffTree::new();
        match diff_with(left, right, &mut tree, &self.options) {
            Ok(()) => {
                let response = ComparerResponse::classify(&tree);
                debug!(
                    outcome = response.outcome.label(),
                    leaves = tree.leaf_count(),
                    "comparison complete"
                );
                Ok(response)
            }
            Err(err @ CompareError::IncompatibleShape { .. }) => {
                Ok(ComparerResponse::shape_mismatch(&err))
            }
            Err(err) => Err(err),
        }
    }
}
