use crate::error::StoreResult;
use crate::side::Side;

/// Storage for Base64-encoded documents awaiting comparison.
///
/// Each identifier has one slot per [`Side`]. Writing a slot replaces its
/// previous content. Stored text is opaque to the store; decoding happens
/// only when a comparison is requested.
pub trait DocumentStore: Send + Sync {
    /// Store `encoded` as the `side` document of `id`.
    fn put(&self, id: &str, side: Side, encoded: String) -> StoreResult<()>;

    /// Read the `side` document of `id`, if any.
    fn get(&self, id: &str, side: Side) -> StoreResult<Option<String>>;

    /// Remove both documents of `id`. Returns `true` if anything was removed.
    fn remove(&self, id: &str) -> StoreResult<bool>;

    /// Both documents of `id`, if both are present and non-empty.
    fn pair(&self, id: &str) -> StoreResult<Option<(String, String)>> {
        let left = self.get(id, Side::Left)?.filter(|s| !s.is_empty());
        let right = self.get(id, Side::Right)?.filter(|s| !s.is_empty());
        Ok(left.zip(right))
    }
}
