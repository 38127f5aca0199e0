//! Schedule entity model.

use serde::{Deserialize, Serialize};

use cs_core::constants::SCHEDULE_WILDCARD;

/// A cron-like recurrence rule controlling when a message set is delivered.
///
/// Each field holds an arbitrary cron expression and is stored verbatim as a
/// string. Parsing or numeric coercion would destroy leading zeros and
/// range/list syntax like `"1-5"` or `"*/2"`, so none is ever attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub minute: String,
    pub hour: String,
    pub day_of_week: String,
    pub day_of_month: String,
    pub month_of_year: String,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            id: None,
            minute: SCHEDULE_WILDCARD.to_string(),
            hour: SCHEDULE_WILDCARD.to_string(),
            day_of_week: SCHEDULE_WILDCARD.to_string(),
            day_of_month: SCHEDULE_WILDCARD.to_string(),
            month_of_year: SCHEDULE_WILDCARD.to_string(),
        }
    }
}

impl Schedule {
    /// Sort key for canonical display ordering:
    /// (month_of_year, day_of_month, day_of_week, hour, minute).
    pub fn ordering_key(&self) -> (String, String, String, String, String) {
        (
            self.month_of_year.clone(),
            self.day_of_month.clone(),
            self.day_of_week.clone(),
            self.hour.clone(),
            self.minute.clone(),
        )
    }
}

/// Renders the schedule as a five-column cron line, spaces stripped from each
/// field and empty fields shown as the wildcard.
impl std::fmt::Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rfield = |field: &str| {
            let cleaned = field.replace(' ', "");
            if cleaned.is_empty() {
                SCHEDULE_WILDCARD.to_string()
            } else {
                cleaned
            }
        };
        write!(
            f,
            "{} {} {} {} {} (m/h/d/dM/MY)",
            rfield(&self.minute),
            rfield(&self.hour),
            rfield(&self.day_of_week),
            rfield(&self.day_of_month),
            rfield(&self.month_of_year),
        )
    }
}
