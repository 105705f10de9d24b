use crate::models::{DailyRecord, DayStatus, WeeklyRecord};
use crate::utils::date::weekday_label;
use crate::utils::formatting::{delta_to_string, delta_with_suffix};
use serde::Serialize;

/// Rendered delta cell for a day that never got a second event.
pub const MISSING_CHECKOUT_LABEL: &str = "출근/퇴근 누락";
/// Date-column label of the interleaved weekly-total rows.
pub const WEEKLY_TOTAL_LABEL: &str = "주간합계";

/// Flat detail row: one per DailyRecord, plus one synthetic weekly-total
/// row per (person, week).
#[derive(Serialize, Clone, Debug)]
pub struct ReportRow {
    pub person: String,
    pub date: String,
    pub weekday: String,
    pub check_in: String,
    pub check_out: String,
    pub delta: String,
}

impl ReportRow {
    pub fn from_daily(rec: &DailyRecord) -> Self {
        let delta = match (rec.status, rec.delta_minutes) {
            (DayStatus::Complete, Some(d)) => delta_with_suffix(d, rec.standard),
            _ => MISSING_CHECKOUT_LABEL.to_string(),
        };

        Self {
            person: rec.person.clone(),
            date: rec.date.format("%Y-%m-%d").to_string(),
            weekday: weekday_label(rec.weekday).to_string(),
            check_in: rec.check_in_str(),
            check_out: rec.check_out_str(),
            delta,
        }
    }

    pub fn weekly_total(week: &WeeklyRecord) -> Self {
        Self {
            person: week.person.clone(),
            date: WEEKLY_TOTAL_LABEL.to_string(),
            weekday: week.week_start.format("%Y-%m-%d").to_string(),
            check_in: String::new(),
            check_out: String::new(),
            delta: delta_to_string(week.total_delta_minutes),
        }
    }
}

/// Flat weekly-summary row.
#[derive(Serialize, Clone, Debug)]
pub struct WeeklyRow {
    pub person: String,
    pub week_start: String,
    pub complete_days: usize,
    pub total_delta: String,
}

impl WeeklyRow {
    pub fn from_weekly(week: &WeeklyRecord) -> Self {
        Self {
            person: week.person.clone(),
            week_start: week.week_start.format("%Y-%m-%d").to_string(),
            complete_days: week.complete_day_count,
            total_delta: delta_to_string(week.total_delta_minutes),
        }
    }
}

/// Headers for the human-facing surfaces (terminal table, XLSX).
pub(crate) fn detail_headers() -> Vec<&'static str> {
    vec!["이름", "날짜", "요일", "출근", "퇴근", "근무차이"]
}

pub(crate) fn weekly_headers() -> Vec<&'static str> {
    vec!["이름", "주 시작일", "정상일수", "주간 근무차이"]
}

pub(crate) fn detail_row_to_vec(r: &ReportRow) -> Vec<String> {
    vec![
        r.person.clone(),
        r.date.clone(),
        r.weekday.clone(),
        r.check_in.clone(),
        r.check_out.clone(),
        r.delta.clone(),
    ]
}

pub(crate) fn weekly_row_to_vec(r: &WeeklyRow) -> Vec<String> {
    vec![
        r.person.clone(),
        r.week_start.clone(),
        r.complete_days.to_string(),
        r.total_delta.clone(),
    ]
}
