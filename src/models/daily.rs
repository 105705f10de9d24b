use super::standard::DayStandard;
use chrono::{NaiveDate, NaiveDateTime, Weekday};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayStatus {
    /// At least two events: the worked interval and its delta are defined.
    Complete,
    /// Exactly one event: check-in known, check-out unknown.
    CheckoutMissing,
    /// No usable events. The aggregator never emits a record in this state;
    /// dates without events are simply absent from the output.
    InsufficientEvents,
}

impl DayStatus {
    pub fn from_event_count(count: usize) -> Self {
        match count {
            0 => DayStatus::InsufficientEvents,
            1 => DayStatus::CheckoutMissing,
            _ => DayStatus::Complete,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, DayStatus::Complete)
    }
}

/// One (person, date) with at least one event.
/// Immutable once built; discarded after the weekly roll-up.
#[derive(Debug, Clone, Serialize)]
pub struct DailyRecord {
    pub person: String,
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub check_in: Option<NaiveDateTime>,
    pub check_out: Option<NaiveDateTime>,
    pub standard: DayStandard,
    pub standard_minutes: i64,
    pub delta_minutes: Option<i64>,
    pub status: DayStatus,
}

impl DailyRecord {
    pub fn check_in_str(&self) -> String {
        match self.check_in {
            Some(t) => t.format("%H:%M").to_string(),
            None => "--:--".to_string(),
        }
    }

    pub fn check_out_str(&self) -> String {
        match self.check_out {
            Some(t) => t.format("%H:%M").to_string(),
            None => "--:--".to_string(),
        }
    }
}
