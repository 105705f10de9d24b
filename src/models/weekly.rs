use chrono::{NaiveDate, Weekday};
use serde::Serialize;

/// Per-person summary of one Monday-anchored week.
/// Terminal, read-only output of the weekly aggregator.
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyRecord {
    pub person: String,
    /// The Monday on or before every contributing date.
    pub week_start: NaiveDate,
    /// Delta per weekday, Monday first. None for days that are absent or
    /// not Complete.
    pub daily_deltas: [Option<i64>; 7],
    /// Sum of the deltas of Complete days only.
    pub total_delta_minutes: i64,
    /// Number of Complete days contributing to the total.
    pub complete_day_count: usize,
}

impl WeeklyRecord {
    pub fn new(person: String, week_start: NaiveDate) -> Self {
        Self {
            person,
            week_start,
            daily_deltas: [None; 7],
            total_delta_minutes: 0,
            complete_day_count: 0,
        }
    }

    pub fn delta_for(&self, weekday: Weekday) -> Option<i64> {
        self.daily_deltas[weekday.num_days_from_monday() as usize]
    }
}
