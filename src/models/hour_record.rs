use crate::core::calculator;
use serde::{Deserialize, Deserializer, Serialize};

/// Validated form input, before the derived totals are computed.
#[derive(Debug, Clone, PartialEq)]
pub struct HourEntry {
    pub name: String,
    pub start_time: f64,
    pub end_time: f64,
    pub hourly_rate: f64,
    pub days: f64,
}

/// One submitted employee work period with its derived totals.
///
/// The totals are only ever produced by [`HourRecord::from_entry`], so
/// `total_hours == (end_time - start_time) * days` and
/// `total_compensation == total_hours * hourly_rate` hold for every value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourRecord {
    name: String,
    #[serde(deserialize_with = "nan_if_null")]
    start_time: f64,
    #[serde(deserialize_with = "nan_if_null")]
    end_time: f64,
    #[serde(deserialize_with = "nan_if_null")]
    hourly_rate: f64,
    #[serde(deserialize_with = "nan_if_null")]
    days: f64,
    #[serde(deserialize_with = "nan_if_null")]
    total_hours: f64,
    #[serde(deserialize_with = "nan_if_null")]
    total_compensation: f64,
}

/// JSON has no infinities or NaN; serde_json writes them as `null`.
fn nan_if_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

impl HourRecord {
    pub fn from_entry(entry: HourEntry) -> Self {
        let total_hours = calculator::total_hours(entry.start_time, entry.end_time, entry.days);
        let total_compensation = calculator::total_compensation(total_hours, entry.hourly_rate);

        Self {
            name: entry.name,
            start_time: entry.start_time,
            end_time: entry.end_time,
            hourly_rate: entry.hourly_rate,
            days: entry.days,
            total_hours,
            total_compensation,
        }
    }

    /// Rebuild the record from its inputs, discarding whatever totals were stored.
    pub fn recomputed(self) -> Self {
        Self::from_entry(self.entry())
    }

    pub fn entry(&self) -> HourEntry {
        HourEntry {
            name: self.name.clone(),
            start_time: self.start_time,
            end_time: self.end_time,
            hourly_rate: self.hourly_rate,
            days: self.days,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn start_time(&self) -> f64 {
        self.start_time
    }
    pub fn end_time(&self) -> f64 {
        self.end_time
    }
    pub fn hourly_rate(&self) -> f64 {
        self.hourly_rate
    }
    pub fn days(&self) -> f64 {
        self.days
    }
    pub fn total_hours(&self) -> f64 {
        self.total_hours
    }
    pub fn total_compensation(&self) -> f64 {
        self.total_compensation
    }
}
