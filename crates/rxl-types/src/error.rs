use thiserror::Error;

use crate::key::RecordKey;

/// Errors produced while decoding or (de)serializing drug records.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The positional encoding resolved to fewer fields than required.
    #[error("malformed input {input:?}: expected {expected} fields, found {found}")]
    MalformedInput {
        expected: usize,
        found: usize,
        input: String,
    },

    /// A stored payload could not be mapped onto a [`crate::DrugRecord`].
    #[error("corrupt record at key {key}: {reason}")]
    CorruptRecord { key: RecordKey, reason: String },

    /// A key string was not a non-negative decimal integer.
    #[error("invalid record key: {0:?}")]
    InvalidKey(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl RecordError {
    pub(crate) fn malformed(expected: usize, found: usize, input: &str) -> Self {
        Self::MalformedInput {
            expected,
            found,
            input: input.to_string(),
        }
    }
}

/// Result alias for record operations.
pub type RecordResult<T> = Result<T, RecordError>;
