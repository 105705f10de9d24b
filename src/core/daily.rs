//! Daily aggregator: events grouped by (person, date) become DailyRecords.

use crate::models::{AttendanceEvent, DailyRecord, DayStandard, DayStatus, Standards};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Build one DailyRecord per (person, date) holding at least one event.
/// Dates without events simply do not appear; they are never zero-filled.
/// Output is ordered by person, then date.
pub fn build_daily_records(events: &[AttendanceEvent], standards: &Standards) -> Vec<DailyRecord> {
    let mut by_day: BTreeMap<(String, NaiveDate), Vec<&AttendanceEvent>> = BTreeMap::new();

    for ev in events {
        by_day
            .entry((ev.person.clone(), ev.date))
            .or_default()
            .push(ev);
    }

    by_day
        .into_iter()
        .filter_map(|((person, date), day_events)| build_one(person, date, &day_events, standards))
        .collect()
}

fn build_one(
    person: String,
    date: NaiveDate,
    day_events: &[&AttendanceEvent],
    standards: &Standards,
) -> Option<DailyRecord> {
    if day_events.is_empty() {
        return None;
    }

    let mut sorted = day_events.to_vec();
    sorted.sort_by_key(|e| e.timestamp);

    // the interval is min..max timestamp of the day, no matter what the
    // message texts say about 출근 or 퇴근
    let first = sorted.first()?;
    let last = sorted.last()?;

    let standard = DayStandard::detect_all(sorted.iter().map(|e| e.raw_text.as_str()));
    let standard_minutes = standard.minutes(standards);

    let status = DayStatus::from_event_count(sorted.len());
    let weekday = first.weekday;

    let (check_in, check_out, delta_minutes) = match status {
        DayStatus::Complete => {
            let worked = (last.timestamp - first.timestamp).num_minutes();
            (
                Some(first.timestamp),
                Some(last.timestamp),
                Some(worked - standard_minutes),
            )
        }
        DayStatus::CheckoutMissing => (Some(first.timestamp), None, None),
        DayStatus::InsufficientEvents => return None,
    };

    Some(DailyRecord {
        person,
        date,
        weekday,
        check_in,
        check_out,
        standard,
        standard_minutes,
        delta_minutes,
        status,
    })
}
