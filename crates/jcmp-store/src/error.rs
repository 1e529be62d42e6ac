use crate::side::Side;

/// Errors from document storage and decoding.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A side name other than `left` or `right`.
    #[error("unknown document side: {0}")]
    UnknownSide(String),

    /// Neither side may be stored under an empty identifier.
    #[error("document identifier must not be empty")]
    EmptyId,

    /// A submitted document is not valid standard Base64.
    #[error("invalid base64 in {side} document: {source}")]
    InvalidBase64 {
        side: Side,
        #[source]
        source: base64::DecodeError,
    },

    /// The decoded bytes are not UTF-8 text.
    #[error("{side} document is not valid UTF-8: {source}")]
    InvalidUtf8 {
        side: Side,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The decoded text is not JSON.
    #[error("{side} document is not valid JSON: {source}")]
    InvalidJson {
        side: Side,
        #[source]
        source: serde_json::Error,
    },

    /// The document root is not a JSON object.
    #[error("{side} document root must be a JSON object")]
    NotAnObject { side: Side },

    /// A thread panicked while holding the store lock.
    #[error("store lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    /// Returns `true` for errors caused by the submitted content rather than
    /// the store itself.
    pub fn is_invalid_document(&self) -> bool {
        matches!(
            self,
            Self::InvalidBase64 { .. }
                | Self::InvalidUtf8 { .. }
                | Self::InvalidJson { .. }
                | Self::NotAnObject { .. }
        )
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
