//! Ordered list of hour records, in submission order.

use crate::core::calculator;
use crate::errors::{AppError, AppResult};
use crate::models::{HourEntry, HourRecord};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HourLedger {
    records: Vec<HourRecord>,
}

impl HourLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<HourRecord>) -> Self {
        Self { records }
    }

    /// Compute the derived totals for `entry` and append it. Returns a copy
    /// of the appended record.
    pub fn add(&mut self, entry: HourEntry) -> HourRecord {
        let record = HourRecord::from_entry(entry);
        self.records.push(record.clone());
        record
    }

    /// Remove the record at zero-based `index`; the rest keep their order.
    pub fn remove(&mut self, index: usize) -> AppResult<HourRecord> {
        if index >= self.records.len() {
            return Err(AppError::InvalidIndex(index + 1));
        }
        Ok(self.records.remove(index))
    }

    pub fn clear(&mut self) -> usize {
        let n = self.records.len();
        self.records.clear();
        n
    }

    pub fn records(&self) -> &[HourRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_compensation(&self) -> f64 {
        calculator::sum_compensation(&self.records)
    }
}
