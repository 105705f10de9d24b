//! Weekly aggregator: DailyRecords rolled into Monday-anchored weeks.

use crate::models::{DailyRecord, WeeklyRecord};
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

/// The Monday on or before the given date.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Build one WeeklyRecord per (person, week) present in the input, ordered
/// by person and ascending week_start.
///
/// Only Complete days contribute to the total and the day count. A week
/// whose days are all CheckoutMissing still yields a record with total 0
/// and count 0: "no usable data" is represented, not omitted.
pub fn build_weekly_records(daily: &[DailyRecord]) -> Vec<WeeklyRecord> {
    let mut by_week: BTreeMap<(String, NaiveDate), WeeklyRecord> = BTreeMap::new();

    for rec in daily {
        let start = week_start(rec.date);
        let entry = by_week
            .entry((rec.person.clone(), start))
            .or_insert_with(|| WeeklyRecord::new(rec.person.clone(), start));

        if rec.status.is_complete()
            && let Some(delta) = rec.delta_minutes
        {
            let slot = rec.weekday.num_days_from_monday() as usize;
            entry.daily_deltas[slot] = Some(delta);
            entry.total_delta_minutes += delta;
            entry.complete_day_count += 1;
        }
    }

    by_week.into_values().collect()
}
