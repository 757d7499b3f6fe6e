use rxl_ledger::Lookup;
use rxl_types::{DrugFields, DrugRecord, NewDrug, RecordError, RecordKey};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ProtocolError, ProtocolResult};

/// Literal payload returned when no drug matches, for both lookups and
/// custody transfers.
pub const NOT_FOUND_SENTINEL: &str = "Could not locate drug";

/// One entry of the listing payload: `{"Key": "3", "Record": {...}}`.
///
/// `Record` carries the stored payload only; the key appears once, as `Key`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "ListingRow")]
pub struct KeyedRecord {
    /// Store key as a decimal string.
    pub key: String,
    pub record: DrugRecord,
}

#[derive(Serialize)]
struct ListingRowRef<'a> {
    #[serde(rename = "Key")]
    key: &'a str,
    #[serde(rename = "Record")]
    record: DrugFields<'a>,
}

#[derive(Deserialize)]
struct ListingRow {
    #[serde(rename = "Key")]
    key: String,
    #[serde(rename = "Record")]
    record: NewDrug,
}

impl Serialize for KeyedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ListingRowRef {
            key: &self.key,
            record: self.record.fields(),
        }
        .serialize(serializer)
    }
}

impl TryFrom<ListingRow> for KeyedRecord {
    type Error = RecordError;

    fn try_from(row: ListingRow) -> Result<Self, Self::Error> {
        let key: RecordKey = row.key.parse()?;
        Ok(Self {
            key: row.key,
            record: row.record.into_record(key),
        })
    }
}

impl From<DrugRecord> for KeyedRecord {
    fn from(record: DrugRecord) -> Self {
        Self {
            key: record.key().to_string(),
            record,
        }
    }
}

/// Coarse outcome a presentation layer can branch on without inspecting
/// the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Ok,
    NotFound,
}

/// Successful-shaped response to a request.
///
/// `NotFound` is a response, not an error: it serializes to the JSON string
/// [`NOT_FOUND_SENTINEL`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    /// All drugs in ascending numeric key order.
    Drugs(Vec<KeyedRecord>),
    /// A single created, fetched, or transferred drug.
    Drug(DrugRecord),
    NotFound,
}

impl Response {
    pub fn status(&self) -> ResponseStatus {
        match self {
            Self::Drugs(_) | Self::Drug(_) => ResponseStatus::Ok,
            Self::NotFound => ResponseStatus::NotFound,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == ResponseStatus::NotFound
    }

    pub fn to_json(&self) -> ProtocolResult<String> {
        serde_json::to_string(self).map_err(|e| ProtocolError::Serialization(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> ProtocolResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ProtocolError::Serialization(e.to_string()))
    }
}

impl From<Lookup<DrugRecord>> for Response {
    fn from(lookup: Lookup<DrugRecord>) -> Self {
        match lookup {
            Lookup::Found(record) => Self::Drug(record),
            Lookup::NotFound => Self::NotFound,
        }
    }
}

impl Serialize for Response {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Drugs(records) => records.serialize(serializer),
            Self::Drug(record) => record.serialize(serializer),
            Self::NotFound => serializer.serialize_str(NOT_FOUND_SENTINEL),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    fn record(key: u64) -> DrugRecord {
        NewDrug::new("D1", "12.1, 45.2", "2024-01-01", "Acme", "PharmaCo")
            .into_record(RecordKey::new(key))
    }

    #[test]
    fn not_found_serializes_to_sentinel() {
        assert_eq!(Response::NotFound.to_json().unwrap(), "\"Could not locate drug\"");
        assert_eq!(Response::NotFound.status(), ResponseStatus::NotFound);
    }

    #[test]
    fn drug_serializes_fields() {
        let value: Value = serde_json::from_str(&Response::Drug(record(3)).to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "key": 3,
                "id": "D1",
                "location": "12.1, 45.2",
                "timestamp": "2024-01-01",
                "holder": "Acme",
                "manufacturer": "PharmaCo",
            })
        );
    }

    #[test]
    fn listing_uses_string_keys() {
        let response = Response::Drugs(vec![record(2).into(), record(10).into()]);
        let value: Value = serde_json::from_str(&response.to_json().unwrap()).unwrap();
        assert_eq!(value[0]["Key"], "2");
        assert_eq!(value[1]["Key"], "10");
        assert_eq!(value[1]["Record"]["holder"], "Acme");
        assert_eq!(response.status(), ResponseStatus::Ok);
    }

    #[test]
    fn listing_row_carries_key_once() {
        let value = serde_json::to_value(KeyedRecord::from(record(5))).unwrap();
        assert_eq!(
            value,
            json!({
                "Key": "5",
                "Record": {
                    "id": "D1",
                    "location": "12.1, 45.2",
                    "timestamp": "2024-01-01",
                    "holder": "Acme",
                    "manufacturer": "PharmaCo",
                },
            })
        );
    }

    #[test]
    fn listing_row_with_bad_key_is_rejected() {
        let json = r#"{"Key":"seven","Record":{"id":"D1","location":"1, 2","timestamp":"t","holder":"h","manufacturer":"m"}}"#;
        assert!(serde_json::from_str::<KeyedRecord>(json).is_err());
    }

    #[test]
    fn keyed_record_reads_back() {
        let keyed: KeyedRecord = record(7).into();
        let json = serde_json::to_string(&keyed).unwrap();
        let back: KeyedRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, keyed);
        assert_eq!(back.key.parse::<RecordKey>().unwrap(), back.record.key());
    }

    #[test]
    fn lookup_converts() {
        assert_eq!(Response::from(Lookup::NotFound), Response::NotFound);
        assert!(!Response::from(Lookup::Found(record(1))).is_not_found());
    }
}
