//! Sample drug set written into an empty ledger.

use rxl_store::RecordStore;
use rxl_types::{NewDrug, RecordKey};
use tracing::{debug, info};

use crate::error::LedgerResult;

/// (manufacturer, location, timestamp, holder)
const GENESIS: [(&str, &str, &str, &str); 10] = [
    ("925F", "67.0006, -70.5476", "1504054225", "KVS"),
    ("M83T", "91.2395, -49.4594", "1504057825", "Walyellows"),
    ("T012", "58.0148, 59.01391", "1493517025", "Kardinal"),
    ("P490", "-45.0945, 0.7949", "1496105425", "RX Health"),
    ("S439", "-107.6043, 19.5003", "1493512301", "AmeriDrug"),
    ("J205", "-155.2304, -15.8723", "1494117101", "Internet Pharmacy"),
    ("S22L", "103.8842, 22.1277", "1496104301", "RightAid"),
    ("EI89", "-132.3207, -34.0983", "1485066691", "Doctor's Office"),
    ("129R", "153.0054, 12.6429", "1485153091", "Anytown Hospital"),
    ("49W4", "51.9435, 8.2735", "1487745091", "Distributor X"),
];

/// The genesis drugs paired with the keys they are written at.
///
/// Drug `n` (1-based) gets key `n` and id `"n"`.
pub fn genesis_drugs() -> Vec<(RecordKey, NewDrug)> {
    GENESIS
        .iter()
        .enumerate()
        .map(|(index, (manufacturer, location, timestamp, holder))| {
            let n = index as u64 + 1;
            let drug = NewDrug::new(n.to_string(), *location, *timestamp, *holder, *manufacturer);
            (RecordKey::new(n), drug)
        })
        .collect()
}

/// Write the genesis drugs into `store` if it holds no records.
///
/// Returns how many records were written, which is zero when the store was
/// already populated.
pub fn seed_genesis<S: RecordStore + ?Sized>(store: &S) -> LedgerResult<usize> {
    if !store.keys()?.is_empty() {
        debug!("store already populated, skipping genesis");
        return Ok(0);
    }

    let drugs = genesis_drugs();
    for (key, drug) in &drugs {
        store.put(*key, &drug.to_payload()?)?;
    }
    info!(count = drugs.len(), "seeded genesis drugs");
    Ok(drugs.len())
}

#[cfg(test)]
mod tests {
    use rxl_store::InMemoryRecordStore;

    use super::*;
    use crate::ingest::IngestionService;
    use crate::query::QueryService;

    #[test]
    fn genesis_has_ten_sequential_keys() {
        let drugs = genesis_drugs();
        assert_eq!(drugs.len(), 10);
        for (index, (key, drug)) in drugs.iter().enumerate() {
            assert_eq!(key.get(), index as u64 + 1);
            assert_eq!(drug.id, key.to_string());
        }
        assert_eq!(drugs[0].1.manufacturer, "925F");
        assert_eq!(drugs[9].1.holder, "Distributor X");
    }

    #[test]
    fn seed_populates_empty_store() {
        let store = InMemoryRecordStore::new();
        assert_eq!(seed_genesis(&store).unwrap(), 10);

        let all = QueryService::get_all_drugs(&store).unwrap();
        assert_eq!(all.len(), 10);
        assert_eq!(all[3].location(), "-45.0945, 0.7949");
        assert_eq!(all[9].key().get(), 10);
    }

    #[test]
    fn seed_is_idempotent() {
        let store = InMemoryRecordStore::new();
        seed_genesis(&store).unwrap();
        assert_eq!(seed_genesis(&store).unwrap(), 0);
        assert_eq!(store.len().unwrap(), 10);
    }

    #[test]
    fn seed_skips_populated_store() {
        let store = InMemoryRecordStore::new();
        IngestionService::create_drug(&store, "D1-1, 2-t-h-m").unwrap();
        assert_eq!(seed_genesis(&store).unwrap(), 0);
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn ingestion_after_seed_continues_key_sequence() {
        let store = InMemoryRecordStore::new();
        seed_genesis(&store).unwrap();
        let record = IngestionService::create_drug(&store, "D11-1, 2-t-h-m").unwrap();
        assert_eq!(record.key().get(), 11);
    }
}
