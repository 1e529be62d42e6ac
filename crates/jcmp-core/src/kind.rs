use std::fmt;

use serde_json::Value;

/// The JSON category of a node.
///
/// `Undefined` stands for a missing node, i.e. a lookup that found nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Object,
    Array,
    String,
    Null,
    Undefined,
    Number,
    Boolean,
}

impl NodeKind {
    /// Classify a (possibly missing) node.
    pub fn of(value: Option<&Value>) -> Self {
        match value {
            None => Self::Undefined,
            Some(Value::Null) => Self::Null,
            Some(Value::Bool(_)) => Self::Boolean,
            Some(Value::Number(_)) => Self::Number,
            Some(Value::String(_)) => Self::String,
            Some(Value::Array(_)) => Self::Array,
            Some(Value::Object(_)) => Self::Object,
        }
    }

    /// Returns `true` for `Null` and `Undefined`.
    pub fn is_nullish(self) -> bool {
        matches!(self, Self::Null | Self::Undefined)
    }

    /// Whether two kinds may be compared at all.
    ///
    /// Kinds must match exactly, except that `Null` and `Undefined` are
    /// interchangeable. Null against anything else is a shape mismatch.
    pub fn is_compatible_with(self, other: Self) -> bool {
        self == other || (self.is_nullish() && other.is_nullish())
    }

    /// Kinds the value comparer handles.
    pub fn is_scalar_leaf(self) -> bool {
        matches!(self, Self::String | Self::Null | Self::Undefined)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
