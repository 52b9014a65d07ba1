use crate::errors::{AppError, AppResult};
use crate::models::HourRecord;
use crate::storage::{KeyValueStore, RecordRepository};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete the record shown on 1-based `row`, then persist the list.
    pub fn apply<S: KeyValueStore>(
        repo: &mut RecordRepository<S>,
        row: usize,
    ) -> AppResult<HourRecord> {
        let index = row.checked_sub(1).ok_or(AppError::InvalidIndex(row))?;

        let mut ledger = repo.load()?;
        let removed = ledger.remove(index)?;
        repo.save(&ledger)?;

        Ok(removed)
    }

    /// Empty the list. Returns how many records were dropped.
    pub fn clear<S: KeyValueStore>(repo: &mut RecordRepository<S>) -> AppResult<usize> {
        let mut ledger = repo.load()?;
        let n = ledger.clear();
        repo.save(&ledger)?;
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ledger::HourLedger;
    use crate::models::HourEntry;
    use crate::storage::{DEFAULT_STORAGE_KEY, MemoryStore};

    fn seeded() -> RecordRepository<MemoryStore> {
        let mut repo = RecordRepository::new(MemoryStore::new(), DEFAULT_STORAGE_KEY);
        let mut ledger = HourLedger::new();
        for name in ["Ana", "Bruno", "Carla"] {
            ledger.add(HourEntry {
                name: name.into(),
                start_time: 9.0,
                end_time: 17.0,
                hourly_rate: 10.0,
                days: 1.0,
            });
        }
        repo.save(&ledger).unwrap();
        repo
    }

    fn names(repo: &RecordRepository<MemoryStore>) -> Vec<String> {
        repo.load()
            .unwrap()
            .records()
            .iter()
            .map(|r| r.name().to_string())
            .collect()
    }

    #[test]
    fn deletes_row_and_persists() {
        let mut repo = seeded();
        let removed = DeleteLogic::apply(&mut repo, 2).unwrap();
        assert_eq!(removed.name(), "Bruno");
        assert_eq!(names(&repo), vec!["Ana", "Carla"]);
    }

    #[test]
    fn row_zero_and_past_end_are_rejected() {
        let mut repo = seeded();
        assert!(matches!(
            DeleteLogic::apply(&mut repo, 0),
            Err(AppError::InvalidIndex(0))
        ));
        assert!(matches!(
            DeleteLogic::apply(&mut repo, 4),
            Err(AppError::InvalidIndex(4))
        ));
        assert_eq!(names(&repo).len(), 3);
    }

    #[test]
    fn clear_empties_store() {
        let mut repo = seeded();
        assert_eq!(DeleteLogic::clear(&mut repo).unwrap(), 3);
        assert!(repo.load().unwrap().is_empty());
    }
}
