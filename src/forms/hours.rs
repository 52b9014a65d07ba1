use super::{ValidationErrors, min_chars, number_field};
use crate::models::HourEntry;

pub const NAME_MIN_CHARS: usize = 2;

/// Raw employee-hours form, exactly as typed. `None` means the field was
/// left at its default.
#[derive(Debug, Clone, Default)]
pub struct HourForm {
    pub name: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub hourly_rate: Option<String>,
    pub days: Option<String>,
}

impl HourForm {
    pub fn validate(&self) -> Result<HourEntry, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        min_chars(
            &mut errors,
            "name",
            &self.name,
            NAME_MIN_CHARS,
            "Name must have at least 2 characters.",
        );

        let start_time = number_field(&mut errors, "startTime", self.start_time.as_deref(), 0.0);
        let end_time = number_field(&mut errors, "endTime", self.end_time.as_deref(), 0.0);
        let hourly_rate = number_field(&mut errors, "hourlyRate", self.hourly_rate.as_deref(), 0.0);
        let days = number_field(&mut errors, "days", self.days.as_deref(), 1.0);

        errors.into_result(HourEntry {
            name: self.name.clone(),
            start_time,
            end_time,
            hourly_rate,
            days,
        })
    }
}
