//! Keyed record storage for RxLedger.
//!
//! The ledger core never talks to a database directly. It goes through the
//! narrow [`RecordStore`] boundary, which only knows about opaque byte
//! payloads filed under numeric [`RecordKey`]s. Mapping payloads onto typed
//! drug records is the caller's job.
//!
//! # Storage Backends
//!
//! All backends implement the [`RecordStore`] trait:
//!
//! - [`InMemoryRecordStore`] -- `HashMap`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. Keys are assigned by the store, never by callers of [`RecordStore::insert`].
//! 2. Assigned keys are strictly increasing and never reused.
//! 3. Reads observe every completed write to the same key.
//! 4. Key listing carries no ordering guarantee.
//! 5. All backend failures are propagated, never silently ignored.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryRecordStore;
pub use traits::RecordStore;
