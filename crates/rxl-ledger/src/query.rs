use rxl_store::RecordStore;
use rxl_types::{DrugRecord, RecordKey};
use tracing::{debug, warn};

use crate::error::LedgerResult;
use crate::lookup::Lookup;

/// Read-side operations over the record store.
pub struct QueryService;

impl QueryService {
    /// Find the drug whose caller-supplied `id` equals `id` exactly.
    ///
    /// Ids are not unique in the store. When several records share an id,
    /// the one with the lowest key wins; use [`QueryService::get_by_key`] to
    /// reach the others.
    ///
    /// Payloads that fail to decode are logged and skipped, so one corrupt
    /// record cannot hide every other drug from lookups and transfers.
    pub fn get_drug<S: RecordStore + ?Sized>(
        store: &S,
        id: &str,
    ) -> LedgerResult<Lookup<DrugRecord>> {
        let mut entries = store.scan()?;
        entries.sort_by_key(|(key, _)| *key);
        let found = entries
            .iter()
            .find_map(|(key, payload)| match DrugRecord::from_payload(*key, payload) {
                Ok(record) if record.id() == id => Some(record),
                Ok(_) => None,
                Err(err) => {
                    warn!(%key, error = %err, "skipping undecodable payload during lookup");
                    None
                }
            });
        debug!(id, found = found.is_some(), "drug lookup");
        Ok(found.into())
    }

    /// Every stored drug in ascending numeric key order.
    ///
    /// The order never depends on how the store iterates its keys.
    pub fn get_all_drugs<S: RecordStore + ?Sized>(store: &S) -> LedgerResult<Vec<DrugRecord>> {
        let mut records = store
            .scan()?
            .into_iter()
            .map(|(key, payload)| decode(key, &payload))
            .collect::<LedgerResult<Vec<_>>>()?;
        records.sort_by_key(DrugRecord::key);
        Ok(records)
    }

    /// Fetch a drug by its store key.
    pub fn get_by_key<S: RecordStore + ?Sized>(
        store: &S,
        key: RecordKey,
    ) -> LedgerResult<Lookup<DrugRecord>> {
        match store.get(key)? {
            Some(payload) => Ok(Lookup::Found(decode(key, &payload)?)),
            None => Ok(Lookup::NotFound),
        }
    }
}

fn decode(key: RecordKey, payload: &[u8]) -> LedgerResult<DrugRecord> {
    DrugRecord::from_payload(key, payload).map_err(|err| {
        warn!(%key, error = %err, "rejecting stored payload");
        err.into()
    })
}
