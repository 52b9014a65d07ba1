// src/export/model.rs

use crate::core::ledger::HourLedger;
use serde::Serialize;

/// Flat row used by every export format.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecordExport {
    pub row: usize,
    pub name: String,
    pub start_time: f64,
    pub end_time: f64,
    pub hourly_rate: f64,
    pub days: f64,
    pub total_hours: f64,
    pub total_compensation: f64,
}

/// Column headers, same order as the serialized fields.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "row",
        "name",
        "startTime",
        "endTime",
        "hourlyRate",
        "days",
        "totalHours",
        "totalCompensation",
    ]
}

pub(crate) fn from_ledger(ledger: &HourLedger) -> Vec<RecordExport> {
    ledger
        .records()
        .iter()
        .enumerate()
        .map(|(i, r)| RecordExport {
            row: i + 1,
            name: r.name().to_string(),
            start_time: r.start_time(),
            end_time: r.end_time(),
            hourly_rate: r.hourly_rate(),
            days: r.days(),
            total_hours: r.total_hours(),
            total_compensation: r.total_compensation(),
        })
        .collect()
}
