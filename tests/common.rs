#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Datelike, NaiveDate};
use chulcheck::models::AttendanceEvent;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn chk() -> Command {
    cargo_bin_cmd!("chulcheck")
}

/// Write a fixture file into the system temp dir and return its path.
pub fn write_fixture(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_chulcheck.txt", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write fixture");
    p
}

/// Create a temporary output file path and make sure it does not exist yet.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a config file with default standards and weekdays, isolated from
/// whatever the developer has in their home directory.
pub fn write_config(name: &str) -> String {
    write_config_with_aliases(name, "{}")
}

pub fn write_config_with_aliases(name: &str, aliases_yaml: &str) -> String {
    let yaml = format!(
        "standards:\n  full_day_minutes: 540\n  half_day_minutes: 240\n  quarter_day_minutes: 420\nweekdays: [mon, tue, wed, thu, fri]\naliases: {}\n",
        aliases_yaml
    );

    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_chulcheck.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, yaml).expect("write config");
    p
}

/// One week of chat-log fixture data (week of Monday 2025-10-06):
/// - Monday: 철수 works 09:00–18:05 (delta +5 against a full day)
/// - Tuesday: 철수 checks in only (missing check-out)
/// - Wednesday: 영희 takes a 반차 and works 09:00–13:00
/// - Saturday: a message that the default weekday filter must drop
/// plus assorted noise lines.
pub fn sample_log() -> String {
    [
        "저장한 날짜 : 2025년 10월 12일 오후 11:00",
        "--------------- 2025년 10월 6일 월요일 ---------------",
        "철수님이 들어왔습니다.",
        "[철수] [오전 9:00] 출근",
        "[철수] [오후 6:05] 퇴근",
        "--------------- 2025년 10월 7일 화요일 ---------------",
        "[철수] [오전 9:30] 출근합니다",
        "--------------- 2025년 10월 8일 수요일 ---------------",
        "[영희] [오전 9:00] 오늘 반차입니다, 출근",
        "[영희] [오후 1:00] 퇴근할게요",
        "--------------- 2025년 10월 11일 토요일 ---------------",
        "[철수] [오전 10:00] 주말인데 출근",
        "",
    ]
    .join("\n")
}

/// Build an event directly, for unit tests of the aggregators.
pub fn event(person: &str, date: &str, time: &str, raw_text: &str) -> AttendanceEvent {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("fixture date");
    let time = chrono::NaiveTime::parse_from_str(time, "%H:%M").expect("fixture time");

    AttendanceEvent {
        person: person.to_string(),
        date,
        weekday: date.weekday(),
        timestamp: date.and_time(time),
        raw_text: raw_text.to_string(),
    }
}
