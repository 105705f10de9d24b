//! Event extractor: a single forward pass over classified lines.
//!
//! The most recent date header is the active context; message lines seen
//! before any header, outside the requested range, or on a non-permitted
//! weekday are dropped without error.

use crate::core::classify::{LineClass, classify};
use crate::models::AttendanceEvent;
use chrono::{NaiveDate, Weekday};
use std::collections::HashMap;

/// Injected display-name normalization. Lookups default to identity, so an
/// empty map keeps every name as written in the log.
#[derive(Debug, Clone, Default)]
pub struct AliasMap {
    map: HashMap<String, String>,
}

impl AliasMap {
    pub fn new(map: HashMap<String, String>) -> Self {
        Self { map }
    }

    pub fn canonical(&self, name: &str) -> String {
        match self.map.get(name) {
            Some(canonical) => canonical.clone(),
            None => name.to_string(),
        }
    }
}

/// Inclusive date range plus the set of weekdays worth keeping.
#[derive(Debug, Clone)]
pub struct ScanWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub weekdays: Vec<Weekday>,
}

impl ScanWindow {
    pub fn new(start: NaiveDate, end: NaiveDate, weekdays: Vec<Weekday>) -> Self {
        Self {
            start,
            end,
            weekdays,
        }
    }

    /// Monday through Friday of the week containing `monday`.
    pub fn workweek(monday: NaiveDate, end: NaiveDate) -> Self {
        Self::new(
            monday,
            end,
            vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ],
        )
    }

    fn admits(&self, date: NaiveDate, weekday: Weekday) -> bool {
        date >= self.start && date <= self.end && self.weekdays.contains(&weekday)
    }
}

/// Extract attendance events from raw lines, in source order.
pub fn extract_events<'a, I>(lines: I, window: &ScanWindow, aliases: &AliasMap) -> Vec<AttendanceEvent>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut context: Option<(NaiveDate, Weekday)> = None;
    let mut events = Vec::new();

    for line in lines {
        match classify(line) {
            LineClass::DateHeader { date, weekday } => {
                // a new header replaces the context, never merges with it
                context = Some((date, weekday));
            }
            LineClass::Message {
                person,
                hour,
                minute,
            } => {
                let Some((date, weekday)) = context else {
                    continue;
                };
                if !window.admits(date, weekday) {
                    continue;
                }
                // hour/minute were validated by the classifier
                let Some(time) = chrono::NaiveTime::from_hms_opt(hour, minute, 0) else {
                    continue;
                };

                events.push(AttendanceEvent {
                    person: aliases.canonical(&person),
                    date,
                    weekday,
                    timestamp: date.and_time(time),
                    raw_text: line.to_string(),
                });
            }
            LineClass::NoMatch => {}
        }
    }

    events
}
