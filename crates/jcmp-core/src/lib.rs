//! Structural diff engine for JSON documents.
//!
//! Walks two parsed documents in lockstep, checks that every node pair has a
//! compatible shape, and records the differences in a diff tree that mirrors
//! the documents' key structure.
//!
//! # Key Types
//!
//! - [`Comparer`] / [`ComparerResponse`] -- Entry point and classified result
//! - [`DiffTree`] / [`DiffNode`] / [`DiffLeaf`] -- Accumulated differences
//! - [`CompareError`] / [`ShapeMismatch`] -- Shape and type failures
//! - [`CompareOptions`] / [`ArraySemantics`] -- Comparison knobs

pub mod array_diff;
pub mod canonical;
pub mod comparer;
pub mod engine;
pub mod error;
pub mod kind;
pub mod options;
pub mod response;
pub mod tree;
pub mod value_diff;

pub use array_diff::compare_arrays;
pub use canonical::json_eq;
pub use comparer::Comparer;
pub use engine::{diff, diff_with};
pub use error::{CompareError, CompareResult, ShapeMismatch};
pub use kind::NodeKind;
pub use options::{ArraySemantics, CompareOptions};
pub use response::{ComparerResponse, ResponseType};
pub use tree::{DiffLeaf, DiffNode, DiffTree};
pub use value_diff::compare_values;
