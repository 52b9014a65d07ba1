use crate::core::ledger::HourLedger;
use crate::errors::AppResult;
use crate::forms::HourForm;
use crate::models::HourRecord;
use crate::storage::{KeyValueStore, RecordRepository};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// submit → validate → compute → append → persist.
    ///
    /// Nothing is stored when validation fails. Returns the new record and
    /// the ledger as saved.
    pub fn apply<S: KeyValueStore>(
        repo: &mut RecordRepository<S>,
        form: &HourForm,
    ) -> AppResult<(HourRecord, HourLedger)> {
        let entry = form.validate()?;

        let mut ledger = repo.load()?;
        let record = ledger.add(entry);
        repo.save(&ledger)?;

        Ok((record, ledger))
    }
}
