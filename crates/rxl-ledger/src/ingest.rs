use rxl_store::RecordStore;
use rxl_types::codec;
use rxl_types::{DrugRecord, NewDrug};
use tracing::info;

use crate::error::LedgerResult;

/// Records new drugs under freshly assigned store keys.
pub struct IngestionService;

impl IngestionService {
    /// Decode `id-location-timestamp-holder-manufacturer` and record it.
    ///
    /// Store failures are returned as-is; nothing is retried.
    pub fn create_drug<S: RecordStore + ?Sized>(
        store: &S,
        encoded: &str,
    ) -> LedgerResult<DrugRecord> {
        let drug = codec::decode_new_drug(encoded)?;
        Self::record(store, drug)
    }

    /// Record an already decoded drug.
    pub fn record<S: RecordStore + ?Sized>(store: &S, drug: NewDrug) -> LedgerResult<DrugRecord> {
        let payload = drug.to_payload()?;
        let key = store.insert(&payload)?;
        info!(%key, id = %drug.id, holder = %drug.holder, "recorded drug");
        Ok(drug.into_record(key))
    }
}
