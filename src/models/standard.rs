use serde::{Deserialize, Serialize};

/// Daily required-minutes standard, selected by free-text markers found in
/// a day's messages.
///
/// Note the minute values: a 반차 (half-day leave) leaves 4 working hours,
/// while a 반반차 (quarter-day leave) still leaves 7. The marker strings
/// overlap, so 반반차 must always be tested first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayStandard {
    Full,
    HalfLeave,
    QuarterLeave,
}

impl DayStandard {
    /// Detect the standard for one normalized (whitespace-stripped) text.
    pub fn detect_one(text: &str) -> Self {
        let collapsed: String = text.chars().filter(|c| !c.is_whitespace()).collect();

        if collapsed.contains("반반차") {
            DayStandard::QuarterLeave
        } else if collapsed.contains("반차") {
            DayStandard::HalfLeave
        } else {
            DayStandard::Full
        }
    }

    /// Detect the standard for a whole date by scanning every event text.
    /// Any single text carrying a marker fixes the standard for the date,
    /// with 반반차 winning over 반차.
    pub fn detect_all<'a, I>(texts: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut found = DayStandard::Full;

        for t in texts {
            match Self::detect_one(t) {
                DayStandard::QuarterLeave => return DayStandard::QuarterLeave,
                DayStandard::HalfLeave => found = DayStandard::HalfLeave,
                DayStandard::Full => {}
            }
        }

        found
    }

    pub fn minutes(&self, standards: &Standards) -> i64 {
        match self {
            DayStandard::Full => standards.full_day_minutes,
            DayStandard::HalfLeave => standards.half_day_minutes,
            DayStandard::QuarterLeave => standards.quarter_day_minutes,
        }
    }

    /// Suffix appended to the formatted delta, empty for a full day.
    pub fn suffix(&self) -> &'static str {
        match self {
            DayStandard::Full => "",
            DayStandard::HalfLeave => " (반차)",
            DayStandard::QuarterLeave => " (반반차)",
        }
    }
}

/// The three configurable standards, in minutes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Standards {
    pub full_day_minutes: i64,
    pub half_day_minutes: i64,
    pub quarter_day_minutes: i64,
}

impl Default for Standards {
    fn default() -> Self {
        Self {
            full_day_minutes: 9 * 60,
            half_day_minutes: 4 * 60,
            quarter_day_minutes: 7 * 60,
        }
    }
}
