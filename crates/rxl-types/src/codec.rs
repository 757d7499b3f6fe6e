//! Hyphen-delimited positional encoding carried in request paths.
//!
//! A new drug travels as `id-location-timestamp-holder-manufacturer`, where
//! `location` is itself `"<longitude>, <latitude>"`. A custody transfer
//! travels as `id-newHolder`. The delimiter is not escaped, so any field that
//! contains a hyphen is ambiguous. Decoding resolves the two common cases
//! deterministically:
//!
//! - `id`, `holder` and `manufacturer` are read from the fixed ends of the
//!   segment list, and whatever lies between the location and the holder is
//!   rejoined as the timestamp (dates such as `2024-01-01` survive).
//! - A negative coordinate splits the location; the pieces are stitched back
//!   together.
//!
//! Ids, holders and manufacturers containing a hyphen cannot be represented.

use serde::{Deserialize, Serialize};

use crate::error::{RecordError, RecordResult};
use crate::record::{NewDrug, LOCATION_SEPARATOR};

/// Field delimiter of the positional encoding.
pub const DELIMITER: &str = "-";

/// Logical fields in a new-drug encoding.
pub const NEW_DRUG_FIELDS: usize = 5;

/// Logical fields in a holder-change encoding.
pub const HOLDER_CHANGE_FIELDS: usize = 2;

/// A decoded custody-transfer request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolderChange {
    pub id: String,
    pub holder: String,
}

impl HolderChange {
    pub fn new(id: impl Into<String>, holder: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            holder: holder.into(),
        }
    }
}

/// Decode `id-location-timestamp-holder-manufacturer`.
pub fn decode_new_drug(input: &str) -> RecordResult<NewDrug> {
    let segments: Vec<&str> = input.split(DELIMITER).collect();
    if segments.len() < NEW_DRUG_FIELDS {
        return Err(RecordError::malformed(NEW_DRUG_FIELDS, segments.len(), input));
    }

    let last = segments.len() - 1;
    let id = segments[0];
    let holder = segments[last - 1];
    let manufacturer = segments[last];
    let middle = &segments[1..last - 1];

    let (location, used) = take_location(middle);
    let timestamp = &middle[used..];
    if timestamp.is_empty() {
        // The location swallowed the only remaining segment.
        return Err(RecordError::malformed(
            NEW_DRUG_FIELDS,
            NEW_DRUG_FIELDS - 1,
            input,
        ));
    }

    Ok(NewDrug::new(
        id,
        location,
        timestamp.join(DELIMITER),
        holder,
        manufacturer,
    ))
}

/// Encode a new drug into its positional form.
pub fn encode_new_drug(drug: &NewDrug) -> String {
    [
        drug.id.as_str(),
        drug.location.as_str(),
        drug.timestamp.as_str(),
        drug.holder.as_str(),
        drug.manufacturer.as_str(),
    ]
    .join(DELIMITER)
}

/// Decode `id-newHolder`. Everything after the first delimiter is the holder.
///
/// Both sides must be non-empty; `"D1-"` and `"-Hospital"` carry only one
/// usable field.
pub fn decode_holder_change(input: &str) -> RecordResult<HolderChange> {
    match input.split_once(DELIMITER) {
        Some((id, holder)) if !id.is_empty() && !holder.is_empty() => {
            Ok(HolderChange::new(id, holder))
        }
        _ => Err(RecordError::malformed(HOLDER_CHANGE_FIELDS, 1, input)),
    }
}

/// Encode a custody transfer into its positional form.
pub fn encode_holder_change(id: &str, holder: &str) -> String {
    format!("{id}{DELIMITER}{holder}")
}

/// Consume the location from the front of `segments`, returning it and the
/// number of segments used.
fn take_location(segments: &[&str]) -> (String, usize) {
    let mut location = String::new();
    let mut used = 0;

    // Negative longitude: "-12.1, 45.2" splits into "" and "12.1, 45.2".
    if segments.len() > 1 && segments[0].is_empty() {
        location.push_str(DELIMITER);
        used += 1;
    }
    location.push_str(segments[used]);
    used += 1;

    // Negative latitude: "12.1, -45.2" splits into "12.1, " and "45.2".
    if location.ends_with(LOCATION_SEPARATOR) && used < segments.len() {
        location.push_str(DELIMITER);
        location.push_str(segments[used]);
        used += 1;
    }

    (location, used)
}
