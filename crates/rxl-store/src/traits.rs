use rxl_types::RecordKey;

use crate::error::StoreResult;

/// Durable keyed storage for drug record payloads.
///
/// All implementations must satisfy these invariants:
/// - [`insert`](RecordStore::insert) assigns a key strictly greater than any
///   key previously assigned or written, and never hands the same key out
///   twice, even under concurrent callers.
/// - A `get` after a completed `put` or `insert` on the same key observes it.
/// - Payloads are opaque: the store never interprets them.
/// - There is no delete operation.
pub trait RecordStore: Send + Sync {
    /// Read the payload stored under `key`.
    ///
    /// Returns `Ok(None)` if nothing is stored there.
    fn get(&self, key: RecordKey) -> StoreResult<Option<Vec<u8>>>;

    /// Store `value` under an explicit key, replacing any previous payload.
    fn put(&self, key: RecordKey, value: &[u8]) -> StoreResult<()>;

    /// Store `value` under a freshly assigned key and return that key.
    fn insert(&self, value: &[u8]) -> StoreResult<RecordKey>;

    /// Every key currently in the store, in no particular order.
    fn keys(&self) -> StoreResult<Vec<RecordKey>>;

    /// Every `(key, payload)` pair, in no particular order.
    ///
    /// Default implementation calls `keys()` and then `get()` for each key.
    /// Backends may override with a single range read.
    fn scan(&self) -> StoreResult<Vec<(RecordKey, Vec<u8>)>> {
        let mut entries = Vec::new();
        for key in self.keys()? {
            if let Some(value) = self.get(key)? {
                entries.push((key, value));
            }
        }
        Ok(entries)
    }
}
