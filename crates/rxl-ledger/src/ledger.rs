use rxl_store::{InMemoryRecordStore, RecordStore};
use rxl_types::{DrugRecord, RecordKey};

use crate::config::LedgerConfig;
use crate::custody::CustodyTransferEngine;
use crate::error::LedgerResult;
use crate::genesis;
use crate::ingest::IngestionService;
use crate::lookup::Lookup;
use crate::query::QueryService;

/// The ledger services bound to one record store.
///
/// Every call runs to completion against the store before returning. The
/// ledger adds no locking of its own; key uniqueness and per-key
/// consistency come from the store.
pub struct DrugLedger<S: RecordStore = InMemoryRecordStore> {
    store: S,
}

impl DrugLedger<InMemoryRecordStore> {
    /// A ledger over a fresh in-memory store, seeded per `config`.
    pub fn in_memory(config: &LedgerConfig) -> LedgerResult<Self> {
        Self::open(InMemoryRecordStore::new(), config)
    }
}

impl<S: RecordStore> DrugLedger<S> {
    /// Wrap a store without touching its contents.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Wrap a store and apply `config` to it.
    pub fn open(store: S, config: &LedgerConfig) -> LedgerResult<Self> {
        let ledger = Self::new(store);
        if config.seed_genesis {
            ledger.seed_genesis()?;
        }
        Ok(ledger)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// See [`IngestionService::create_drug`].
    pub fn create_drug(&self, encoded: &str) -> LedgerResult<DrugRecord> {
        IngestionService::create_drug(&self.store, encoded)
    }

    /// See [`QueryService::get_drug`].
    pub fn get_drug(&self, id: &str) -> LedgerResult<Lookup<DrugRecord>> {
        QueryService::get_drug(&self.store, id)
    }

    /// See [`QueryService::get_all_drugs`].
    pub fn get_all_drugs(&self) -> LedgerResult<Vec<DrugRecord>> {
        QueryService::get_all_drugs(&self.store)
    }

    /// See [`QueryService::get_by_key`].
    pub fn get_by_key(&self, key: RecordKey) -> LedgerResult<Lookup<DrugRecord>> {
        QueryService::get_by_key(&self.store, key)
    }

    /// See [`CustodyTransferEngine::change_holder`].
    pub fn change_holder(&self, encoded: &str) -> LedgerResult<Lookup<DrugRecord>> {
        CustodyTransferEngine::change_holder(&self.store, encoded)
    }

    /// See [`genesis::seed_genesis`].
    pub fn seed_genesis(&self) -> LedgerResult<usize> {
        genesis::seed_genesis(&self.store)
    }
}

impl<S: RecordStore + std::fmt::Debug> std::fmt::Debug for DrugLedger<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrugLedger")
            .field("store", &self.store)
            .finish()
    }
}
