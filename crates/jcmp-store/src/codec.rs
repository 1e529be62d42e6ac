//! Base64 transport encoding of documents.
//!
//! Documents travel as standard Base64 of their UTF-8 JSON text. Decoding
//! checks each layer in turn so the error names the one that failed.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;

use crate::error::{StoreError, StoreResult};
use crate::side::Side;

/// Decode a Base64 document into a JSON object.
pub fn decode_document(side: Side, encoded: &str) -> StoreResult<Value> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|source| StoreError::InvalidBase64 { side, source })?;
    let text = String::from_utf8(bytes).map_err(|source| StoreError::InvalidUtf8 { side, source })?;
    parse_document(side, &text)
}

/// Parse plain JSON text into a JSON object.
pub fn parse_document(side: Side, text: &str) -> StoreResult<Value> {
    let value: Value =
        serde_json::from_str(text).map_err(|source| StoreError::InvalidJson { side, source })?;
    if !value.is_object() {
        return Err(StoreError::NotAnObject { side });
    }
    Ok(value)
}

/// Encode a JSON value as Base64 of its compact text.
pub fn encode_document(value: &Value) -> String {
    STANDARD.encode(value.to_string())
}
