use super::KeyValueStore;
use crate::core::ledger::HourLedger;
use crate::errors::AppResult;
use crate::models::HourRecord;

/// Loads and saves the record list under one key of a [`KeyValueStore`].
pub struct RecordRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> RecordRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Restore the ledger. A missing key is an empty ledger; stored totals
    /// are recomputed from the inputs.
    pub fn load(&self) -> AppResult<HourLedger> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(HourLedger::new());
        };

        let records: Vec<HourRecord> = serde_json::from_str(&raw)?;
        Ok(HourLedger::from_records(
            records.into_iter().map(HourRecord::recomputed).collect(),
        ))
    }

    /// Overwrite the stored list with the ledger's current contents.
    pub fn save(&mut self, ledger: &HourLedger) -> AppResult<()> {
        let json = serde_json::to_string(ledger.records())?;
        self.store.set(&self.key, &json)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
