use chrono::{NaiveDate, NaiveTime, Timelike};

/// Try to interpret a cell as a date (YYYY-MM-DD) or a time (HH:MM),
/// returning the Excel serial plus the matching number format. Anything
/// else stays a plain text cell.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(("yyyy-mm-dd", date_to_excel_serial(d)));
    }

    if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M") {
        let seconds = t.num_seconds_from_midnight() as f64;
        return Some(("hh:mm", seconds / 86400.0));
    }

    None
}

fn date_to_excel_serial(d: NaiveDate) -> f64 {
    // Excel day 0 is 1899-12-30 (the off-by-two lotus compatibility quirk)
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
    (d - excel_epoch).num_days() as f64
}
