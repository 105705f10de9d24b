//! Line classifier for KakaoTalk chat exports.
//!
//! Only two line shapes carry information:
//!
//! - a date header: `--------------- 2025년 10월 6일 월요일 ---------------`
//! - a message:     `[철수] [오전 9:00] 출근`
//!
//! Everything else (joins, notices, stickers, continuation lines) is noise
//! and classifies as `NoMatch`.

use chrono::{NaiveDate, Weekday};
use regex::Regex;
use std::sync::LazyLock;

static DATE_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-{5,}\s*(\d{4})년\s*(\d{1,2})월\s*(\d{1,2})일\s*([월화수목금토일])").unwrap()
});

static MESSAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[([^\[\]]+)\]\s*\[(오전|오후)\s*(\d{1,2}):(\d{2})\]\s*(.*)$").unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// A recognized date header. Replaces the active date context entirely.
    DateHeader { date: NaiveDate, weekday: Weekday },
    /// A message with its timestamp already converted to 24-hour time.
    Message {
        person: String,
        hour: u32,
        minute: u32,
    },
    NoMatch,
}

/// 12-hour to 24-hour conversion.
/// 오후 (PM) with hour != 12 adds 12; 오전 (AM) with hour == 12 is midnight;
/// every other combination passes through unchanged.
pub fn convert_hour(is_pm: bool, hour: u32) -> u32 {
    if is_pm && hour != 12 {
        hour + 12
    } else if !is_pm && hour == 12 {
        0
    } else {
        hour
    }
}

fn weekday_from_token(token: &str) -> Option<Weekday> {
    match token {
        "월" => Some(Weekday::Mon),
        "화" => Some(Weekday::Tue),
        "수" => Some(Weekday::Wed),
        "목" => Some(Weekday::Thu),
        "금" => Some(Weekday::Fri),
        "토" => Some(Weekday::Sat),
        "일" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Classify one raw line. Anything that does not parse cleanly, including
/// impossible calendar dates and out-of-range hours, is `NoMatch` rather
/// than an error: arbitrary chat content must never abort parsing.
pub fn classify(line: &str) -> LineClass {
    if let Some(caps) = DATE_HEADER_RE.captures(line) {
        let year: i32 = caps[1].parse().unwrap_or(0);
        let month: u32 = caps[2].parse().unwrap_or(0);
        let day: u32 = caps[3].parse().unwrap_or(0);

        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            return LineClass::NoMatch;
        };
        let Some(weekday) = weekday_from_token(&caps[4]) else {
            return LineClass::NoMatch;
        };

        return LineClass::DateHeader { date, weekday };
    }

    if let Some(caps) = MESSAGE_RE.captures(line) {
        let person = caps[1].trim().to_string();
        let is_pm = &caps[2] == "오후";
        let hour: u32 = caps[3].parse().unwrap_or(0);
        let minute: u32 = caps[4].parse().unwrap_or(60);

        if !(1..=12).contains(&hour) || minute > 59 {
            return LineClass::NoMatch;
        }

        return LineClass::Message {
            person,
            hour: convert_hour(is_pm, hour),
            minute,
        };
    }

    LineClass::NoMatch
}
