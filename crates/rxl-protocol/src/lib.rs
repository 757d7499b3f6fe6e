//! Request contract for RxLedger.
//!
//! Defines the four request paths a front end uses to reach the ledger, how
//! they map onto ledger operations, and the JSON payloads that come back.
//! This crate carries no transport: an HTTP server, a CLI, or a test can all
//! feed paths through [`handle_path`].

pub mod dispatch;
pub mod endpoint;
pub mod error;
pub mod request;
pub mod response;

pub use dispatch::{dispatch, handle_path};
pub use endpoint::endpoints;
pub use error::{ErrorBody, ProtocolError, ProtocolResult};
pub use request::Request;
pub use response::{KeyedRecord, Response, ResponseStatus, NOT_FOUND_SENTINEL};
