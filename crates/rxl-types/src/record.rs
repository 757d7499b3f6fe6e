use serde::{Deserialize, Serialize};

use crate::error::{RecordError, RecordResult};
use crate::key::RecordKey;

/// Separator placed between longitude and latitude in a location string.
pub const LOCATION_SEPARATOR: &str = ", ";

/// Build the `"<longitude>, <latitude>"` location string.
pub fn join_location(longitude: &str, latitude: &str) -> String {
    format!("{longitude}{LOCATION_SEPARATOR}{latitude}")
}

/// The caller-supplied fields of a drug that has not been stored yet.
///
/// Field contents are taken verbatim. Coordinates and timestamps are opaque
/// strings and are not range- or format-checked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDrug {
    pub id: String,
    pub location: String,
    pub timestamp: String,
    pub holder: String,
    pub manufacturer: String,
}

impl NewDrug {
    pub fn new(
        id: impl Into<String>,
        location: impl Into<String>,
        timestamp: impl Into<String>,
        holder: impl Into<String>,
        manufacturer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            location: location.into(),
            timestamp: timestamp.into(),
            holder: holder.into(),
            manufacturer: manufacturer.into(),
        }
    }

    /// Attach the key the store assigned.
    pub fn into_record(self, key: RecordKey) -> DrugRecord {
        DrugRecord {
            key,
            id: self.id,
            location: self.location,
            timestamp: self.timestamp,
            holder: self.holder,
            manufacturer: self.manufacturer,
        }
    }

    /// Serialize to the JSON payload held by the record store.
    pub fn to_payload(&self) -> RecordResult<Vec<u8>> {
        let payload = DrugFields {
            id: &self.id,
            location: &self.location,
            timestamp: &self.timestamp,
            holder: &self.holder,
            manufacturer: &self.manufacturer,
        };
        serde_json::to_vec(&payload).map_err(|e| RecordError::Serialization(e.to_string()))
    }
}

/// A drug record as held by the ledger.
///
/// Everything except `holder` is write-once. The only way to change `holder`
/// is [`DrugRecord::transfer_to`], which the custody transfer engine calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrugRecord {
    key: RecordKey,
    id: String,
    location: String,
    timestamp: String,
    holder: String,
    manufacturer: String,
}

impl DrugRecord {
    pub fn key(&self) -> RecordKey {
        self.key
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    /// Replace the current custodian. Returns the previous holder.
    pub fn transfer_to(&mut self, holder: impl Into<String>) -> String {
        std::mem::replace(&mut self.holder, holder.into())
    }

    /// The five drug fields without the key.
    pub fn fields(&self) -> DrugFields<'_> {
        DrugFields {
            id: &self.id,
            location: &self.location,
            timestamp: &self.timestamp,
            holder: &self.holder,
            manufacturer: &self.manufacturer,
        }
    }

    /// Serialize to the JSON payload held by the record store.
    ///
    /// The key is not part of the payload: it is the store key itself.
    pub fn to_payload(&self) -> RecordResult<Vec<u8>> {
        serde_json::to_vec(&self.fields()).map_err(|e| RecordError::Serialization(e.to_string()))
    }

    /// Map a payload read from the store onto a typed record.
    ///
    /// Missing, mistyped, or unknown fields are rejected with
    /// [`RecordError::CorruptRecord`].
    pub fn from_payload(key: RecordKey, bytes: &[u8]) -> RecordResult<Self> {
        let payload: OwnedPayload =
            serde_json::from_slice(bytes).map_err(|e| RecordError::CorruptRecord {
                key,
                reason: e.to_string(),
            })?;
        Ok(Self {
            key,
            id: payload.id,
            location: payload.location,
            timestamp: payload.timestamp,
            holder: payload.holder,
            manufacturer: payload.manufacturer,
        })
    }
}

/// Borrowed view of a drug's fields, serialized exactly as the stored payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DrugFields<'a> {
    pub id: &'a str,
    pub location: &'a str,
    pub timestamp: &'a str,
    pub holder: &'a str,
    pub manufacturer: &'a str,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct OwnedPayload {
    id: String,
    location: String,
    timestamp: String,
    holder: String,
    manufacturer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewDrug {
        NewDrug::new("D1", join_location("12.1", "45.2"), "1504054225", "KVS", "925F")
    }

    #[test]
    fn join_location_uses_comma_space() {
        assert_eq!(join_location("-45.0945", "0.7949"), "-45.0945, 0.7949");
    }

    #[test]
    fn into_record_keeps_fields() {
        let record = sample().into_record(RecordKey::new(3));
        assert_eq!(record.key(), RecordKey::new(3));
        assert_eq!(record.id(), "D1");
        assert_eq!(record.location(), "12.1, 45.2");
        assert_eq!(record.timestamp(), "1504054225");
        assert_eq!(record.holder(), "KVS");
        assert_eq!(record.manufacturer(), "925F");
    }

    #[test]
    fn fields_view_matches_payload() {
        let record = sample().into_record(RecordKey::new(4));
        let fields = record.fields();
        assert_eq!(fields.holder, "KVS");
        assert_eq!(serde_json::to_vec(&fields).unwrap(), record.to_payload().unwrap());
    }

    #[test]
    fn payload_excludes_key() {
        let record = sample().into_record(RecordKey::new(9));
        let bytes = record.to_payload().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(value.get("key").is_none());
        assert_eq!(value["holder"], "KVS");
    }

    #[test]
    fn new_drug_and_record_payloads_match() {
        let drug = sample();
        let record = drug.clone().into_record(RecordKey::new(1));
        assert_eq!(drug.to_payload().unwrap(), record.to_payload().unwrap());
    }

    #[test]
    fn from_payload_restores_record() {
        let record = sample().into_record(RecordKey::new(4));
        let bytes = record.to_payload().unwrap();
        let decoded = DrugRecord::from_payload(RecordKey::new(4), &bytes).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn from_payload_rejects_missing_field() {
        let bytes = br#"{"id":"D1","location":"1, 2","timestamp":"t","holder":"h"}"#;
        let err = DrugRecord::from_payload(RecordKey::new(1), bytes).unwrap_err();
        assert!(matches!(err, RecordError::CorruptRecord { key, .. } if key == RecordKey::new(1)));
    }

    #[test]
    fn from_payload_rejects_unknown_field() {
        let bytes = br#"{"id":"D1","location":"1, 2","timestamp":"t","holder":"h","manufacturer":"m","owner":"x"}"#;
        assert!(DrugRecord::from_payload(RecordKey::new(1), bytes).is_err());
    }

    #[test]
    fn from_payload_rejects_non_json() {
        assert!(DrugRecord::from_payload(RecordKey::new(1), b"not json").is_err());
    }

    #[test]
    fn transfer_returns_previous_holder() {
        let mut record = sample().into_record(RecordKey::new(1));
        let previous = record.transfer_to("Hospital");
        assert_eq!(previous, "KVS");
        assert_eq!(record.holder(), "Hospital");
        assert_eq!(record.id(), "D1");
        assert_eq!(record.manufacturer(), "925F");
    }
}
