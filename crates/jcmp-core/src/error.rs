//! Error types for the diff engine.

use std::fmt;

use crate::kind::NodeKind;

/// Errors that can abort a comparison.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompareError {
    /// Two corresponding nodes cannot be compared: their kinds differ, or two
    /// objects do not share the same key set.
    ///
    /// The classifier turns this into an ordinary response.
    #[error("OBJECTS ARE NOT OF SAME SIZE")]
    IncompatibleShape {
        /// JSON Pointer to the node pair that failed the shape check.
        pointer: String,
        mismatch: ShapeMismatch,
    },

    /// A node pair of a kind the engine cannot diff (numbers, booleans).
    ///
    /// This is never absorbed by the classifier and reaches the caller.
    #[error("could not recognize the property type `{kind}` at `{pointer}`")]
    UnsupportedType { pointer: String, kind: NodeKind },
}

impl CompareError {
    /// JSON Pointer to the node that produced this error.
    pub fn pointer(&self) -> &str {
        match self {
            Self::IncompatibleShape { pointer, .. } | Self::UnsupportedType { pointer, .. } => {
                pointer
            }
        }
    }

    /// Returns `true` for errors the classifier converts into a response.
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, Self::IncompatibleShape { .. })
    }
}

/// What exactly made two nodes structurally incompatible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeMismatch {
    /// The two nodes are of different kinds.
    Kind { left: NodeKind, right: NodeKind },
    /// Two objects whose key sets differ.
    Keys {
        left_only: Vec<String>,
        right_only: Vec<String>,
    },
}

impl fmt::Display for ShapeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kind { left, right } => {
                write!(f, "node kinds differ: left is {left}, right is {right}")
            }
            Self::Keys {
                left_only,
                right_only,
            } => write!(
                f,
                "key sets differ: only on left {left_only:?}, only on right {right_only:?}"
            ),
        }
    }
}

/// Convenience alias for comparison results.
pub type CompareResult<T> = Result<T, CompareError>;
