use rxl_store::RecordStore;
use rxl_types::codec;
use rxl_types::{DrugRecord, HolderChange};
use tracing::info;

use crate::error::LedgerResult;
use crate::lookup::Lookup;
use crate::query::QueryService;

/// Applies custody transfers.
///
/// A transfer only ever rewrites the `holder` of an existing record at its
/// existing key. Concurrent transfers of the same drug are last-writer-wins,
/// and no history of previous holders is kept.
pub struct CustodyTransferEngine;

impl CustodyTransferEngine {
    /// Decode `id-newHolder` and apply it.
    pub fn change_holder<S: RecordStore + ?Sized>(
        store: &S,
        encoded: &str,
    ) -> LedgerResult<Lookup<DrugRecord>> {
        let change = codec::decode_holder_change(encoded)?;
        Self::apply(store, &change)
    }

    /// Apply an already decoded transfer.
    ///
    /// The target is resolved exactly like [`QueryService::get_drug`]. An
    /// unknown id yields [`Lookup::NotFound`] and writes nothing.
    pub fn apply<S: RecordStore + ?Sized>(
        store: &S,
        change: &HolderChange,
    ) -> LedgerResult<Lookup<DrugRecord>> {
        let mut record = match QueryService::get_drug(store, &change.id)? {
            Lookup::Found(record) => record,
            Lookup::NotFound => {
                info!(id = %change.id, "custody transfer for unknown drug");
                return Ok(Lookup::NotFound);
            }
        };

        let previous = record.transfer_to(change.holder.as_str());
        store.put(record.key(), &record.to_payload()?)?;
        info!(
            key = %record.key(),
            id = %change.id,
            from = %previous,
            to = %change.holder,
            "custody transferred"
        );
        Ok(Lookup::Found(record))
    }
}
