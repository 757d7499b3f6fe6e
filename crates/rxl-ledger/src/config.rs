use serde::{Deserialize, Serialize};

/// Configuration for a [`crate::DrugLedger`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Write the genesis drug set into an empty store on startup.
    pub seed_genesis: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self { seed_genesis: true }
    }
}

impl LedgerConfig {
    /// A ledger that starts with an empty store.
    pub fn empty() -> Self {
        Self {
            seed_genesis: false,
        }
    }
}
