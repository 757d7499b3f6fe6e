use rxl_store::StoreError;
use rxl_types::{RecordError, RecordKey};

/// Errors produced by ledger operations.
///
/// A missing drug is not an error; see [`crate::Lookup`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("malformed input {input:?}: expected {expected} fields, found {found}")]
    MalformedInput {
        expected: usize,
        found: usize,
        input: String,
    },

    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),

    #[error("corrupt record at key {key}: {reason}")]
    CorruptRecord { key: RecordKey, reason: String },

    #[error("invalid record key: {0:?}")]
    InvalidKey(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<RecordError> for LedgerError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::MalformedInput {
                expected,
                found,
                input,
            } => Self::MalformedInput {
                expected,
                found,
                input,
            },
            RecordError::CorruptRecord { key, reason } => Self::CorruptRecord { key, reason },
            RecordError::InvalidKey(raw) => Self::InvalidKey(raw),
            RecordError::Serialization(reason) => Self::Serialization(reason),
        }
    }
}

/// Result alias for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;
