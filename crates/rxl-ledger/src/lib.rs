//! Drug custody ledger core for RxLedger.
//!
//! This crate is the heart of RxLedger. It provides:
//! - [`IngestionService`]: decode a positional encoding and record a new drug
//! - [`QueryService`]: look up one drug by id, or list all drugs by key
//! - [`CustodyTransferEngine`]: move a drug to a new holder
//! - [`DrugLedger`]: the three services bound to one record store
//! - Genesis seeding with the sample drug set
//!
//! "Not found" is a domain outcome, reported as [`Lookup::NotFound`], never
//! as an error. Errors are reserved for malformed input and store failures.

pub mod config;
pub mod custody;
pub mod error;
pub mod genesis;
pub mod ingest;
pub mod ledger;
pub mod lookup;
pub mod query;

pub use config::LedgerConfig;
pub use custody::CustodyTransferEngine;
pub use error::{LedgerError, LedgerResult};
pub use genesis::{genesis_drugs, seed_genesis};
pub use ingest::IngestionService;
pub use ledger::DrugLedger;
pub use lookup::Lookup;
pub use query::QueryService;
