use chrono::{NaiveDate, NaiveDateTime, Weekday};
use serde::Serialize;

/// One matched message line, anchored to the date header that preceded it.
///
/// `raw_text` keeps the full original line so the daily aggregator can scan
/// it for the 반차 / 반반차 markers later on.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceEvent {
    pub person: String,
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub timestamp: NaiveDateTime,
    pub raw_text: String,
}

impl AttendanceEvent {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}
