use rxl_ledger::LedgerError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("no route for path {0:?}")]
    UnknownRoute(String),

    #[error("missing {0} in request path")]
    MissingArgument(&'static str),

    #[error("invalid percent-encoding in path segment {0:?}")]
    InvalidEncoding(String),

    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl ProtocolError {
    /// HTTP-style status code a transport should report for this error.
    pub fn code(&self) -> u16 {
        match self {
            Self::UnknownRoute(_) => 404,
            Self::MissingArgument(_) | Self::InvalidEncoding(_) => 400,
            Self::Ledger(err) => match err {
                LedgerError::MalformedInput { .. } | LedgerError::InvalidKey(_) => 400,
                LedgerError::StoreUnavailable(_) => 503,
                LedgerError::CorruptRecord { .. } | LedgerError::Serialization(_) => 500,
            },
            Self::Serialization(_) => 500,
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

/// Error payload for transports that report errors as JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
}

pub type ProtocolResult<T> = Result<T, ProtocolError>;
