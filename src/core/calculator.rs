//! Compensation arithmetic. Pure functions, no I/O.

use crate::models::HourRecord;

/// Hours worked over the whole period: `(end - start) * days`.
pub fn total_hours(start_time: f64, end_time: f64, days: f64) -> f64 {
    (end_time - start_time) * days
}

/// Pay for the period. A NaN product counts as no pay.
pub fn total_compensation(total_hours: f64, hourly_rate: f64) -> f64 {
    or_zero(total_hours * hourly_rate)
}

/// Running total shown under the table.
pub fn sum_compensation(records: &[HourRecord]) -> f64 {
    or_zero(records.iter().map(HourRecord::total_compensation).sum())
}

fn or_zero(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HourEntry;

    #[test]
    fn full_week_example() {
        let hours = total_hours(8.0, 18.0, 5.0);
        assert_eq!(hours, 50.0);
        assert_eq!(total_compensation(hours, 20.0), 1000.0);
    }

    #[test]
    fn end_before_start_gives_negative_hours() {
        assert_eq!(total_hours(18.0, 8.0, 1.0), -10.0);
    }

    #[test]
    fn fractional_values_are_kept() {
        let hours = total_hours(8.5, 12.0, 2.0);
        assert_eq!(hours, 7.0);
        assert_eq!(total_compensation(hours, 12.5), 87.5);
    }

    #[test]
    fn nan_compensation_counts_as_zero() {
        assert_eq!(total_compensation(f64::NAN, 20.0), 0.0);
        assert_eq!(total_compensation(8.0, f64::NAN), 0.0);
    }

    #[test]
    fn sum_of_empty_list_is_zero() {
        assert_eq!(sum_compensation(&[]), 0.0);
    }

    #[test]
    fn sum_adds_every_record() {
        let records: Vec<HourRecord> = [(8.0, 18.0, 5.0, 20.0), (9.0, 13.0, 1.0, 10.0)]
            .into_iter()
            .map(|(s, e, d, r)| {
                HourRecord::from_entry(HourEntry {
                    name: "x".repeat(2),
                    start_time: s,
                    end_time: e,
                    hourly_rate: r,
                    days: d,
                })
            })
            .collect();
        assert_eq!(sum_compensation(&records), 1040.0);
    }
}
