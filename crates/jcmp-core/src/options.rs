use serde::{Deserialize, Serialize};

/// How the array comparer treats repeated elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArraySemantics {
    /// Duplicates collapse to one occurrence before subtraction.
    #[default]
    Set,
    /// Each occurrence on one side cancels at most one equal occurrence on
    /// the other side.
    Multiset,
}

/// Knobs for a comparison run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    pub array_semantics: ArraySemantics,
}

impl CompareOptions {
    pub fn with_array_semantics(mut self, semantics: ArraySemantics) -> Self {
        self.array_semantics = semantics;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_set_semantics() {
        assert_eq!(CompareOptions::default().array_semantics, ArraySemantics::Set);
    }

    #[test]
    fn deserialize_lowercase() {
        let opts: CompareOptions =
            serde_json::from_str(r#"{"array_semantics":"multiset"}"#).unwrap();
        assert_eq!(opts.array_semantics, ArraySemantics::Multiset);

        let empty: CompareOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, CompareOptions::default());
    }
}
