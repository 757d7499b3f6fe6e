/// Errors from record store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The backend could not be reached or refused the operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Storage backend is read-only.
    #[error("store is read-only")]
    ReadOnly,

    /// Every key up to `u64::MAX` has been allocated.
    #[error("record key space exhausted")]
    KeySpaceExhausted,

    /// An internal lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    LockPoisoned,
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
