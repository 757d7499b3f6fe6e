use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use rxl_types::RecordKey;
use tracing::trace;

use crate::error::{StoreError, StoreResult};
use crate::traits::RecordStore;

/// First key handed out by an empty store.
pub const FIRST_KEY: RecordKey = RecordKey::new(1);

/// In-memory, HashMap-based record store.
///
/// Intended for tests and embedding. Payloads are held behind a `RwLock`;
/// key allocation happens under the write lock, so concurrent inserts always
/// receive distinct keys. Key listing follows `HashMap` iteration order and
/// is therefore not sorted.
pub struct InMemoryRecordStore {
    inner: RwLock<StoreState>,
    read_only: AtomicBool,
}

struct StoreState {
    records: HashMap<RecordKey, Vec<u8>>,
    /// `None` once the key at `u64::MAX` has been handed out or written.
    next_key: Option<RecordKey>,
}

impl InMemoryRecordStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreState {
                records: HashMap::new(),
                next_key: Some(FIRST_KEY),
            }),
            read_only: AtomicBool::new(false),
        }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read_state()?.records.len())
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read_state()?.records.is_empty())
    }

    /// Reject every subsequent write with [`StoreError::ReadOnly`].
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only.load(Ordering::SeqCst)
    }

    fn read_state(&self) -> StoreResult<RwLockReadGuard<'_, StoreState>> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write_state(&self) -> StoreResult<RwLockWriteGuard<'_, StoreState>> {
        if self.is_read_only() {
            return Err(StoreError::ReadOnly);
        }
        self.inner.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn get(&self, key: RecordKey) -> StoreResult<Option<Vec<u8>>> {
        Ok(self.read_state()?.records.get(&key).cloned())
    }

    fn put(&self, key: RecordKey, value: &[u8]) -> StoreResult<()> {
        let mut state = self.write_state()?;
        state.records.insert(key, value.to_vec());
        // Explicit writes push the allocator past the written key so that
        // later inserts cannot collide with it.
        if state.next_key.is_some_and(|next| key >= next) {
            state.next_key = key.next();
        }
        trace!(%key, bytes = value.len(), "put record");
        Ok(())
    }

    fn insert(&self, value: &[u8]) -> StoreResult<RecordKey> {
        let mut state = self.write_state()?;
        let key = state.next_key.ok_or(StoreError::KeySpaceExhausted)?;
        state.next_key = key.next();
        state.records.insert(key, value.to_vec());
        trace!(%key, bytes = value.len(), "inserted record");
        Ok(key)
    }

    fn keys(&self) -> StoreResult<Vec<RecordKey>> {
        Ok(self.read_state()?.records.keys().copied().collect())
    }

    fn scan(&self) -> StoreResult<Vec<(RecordKey, Vec<u8>)>> {
        let state = self.read_state()?;
        Ok(state
            .records
            .iter()
            .map(|(key, value)| (*key, value.clone()))
            .collect())
    }
}

impl std::fmt::Debug for InMemoryRecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len().unwrap_or_default();
        f.debug_struct("InMemoryRecordStore")
            .field("record_count", &count)
            .field("read_only", &self.is_read_only())
            .finish()
    }
}
