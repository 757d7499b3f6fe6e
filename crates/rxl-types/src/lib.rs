//! Foundation types for RxLedger.
//!
//! RxLedger tracks custody of physical drug units. Every unit is a
//! [`DrugRecord`] stored under a [`RecordKey`] that the record store assigns
//! at creation time. Every other RxLedger crate depends on `rxl-types`.
//!
//! # Key Types
//!
//! - [`RecordKey`] — Store-assigned, strictly increasing numeric key
//! - [`NewDrug`] — The five caller-supplied fields of a drug before it is stored
//! - [`DrugRecord`] — A stored drug with its key; only `holder` ever changes
//! - [`HolderChange`] — A decoded custody-transfer request
//!
//! The hyphen-delimited positional encoding used by the request paths lives
//! entirely in [`codec`], so nothing else in the workspace parses it.

pub mod codec;
pub mod error;
pub mod key;
pub mod record;

pub use codec::{HolderChange, DELIMITER};
pub use error::{RecordError, RecordResult};
pub use key::RecordKey;
pub use record::{join_location, DrugFields, DrugRecord, NewDrug, LOCATION_SEPARATOR};
