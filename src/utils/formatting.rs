//! Formatting utilities used for CLI and export outputs.

use crate::models::DayStandard;

/// Render a signed delta as whole hours and remainder minutes.
/// The sign is `+` for zero or positive values, `-` otherwise, and the
/// magnitude is always the absolute value: -125 → "-2시간 5분",
/// 0 → "+0시간 0분", -1 → "-0시간 1분".
pub fn delta_to_string(mins: i64) -> String {
    let sign = if mins >= 0 { "+" } else { "-" };
    let abs_m = mins.abs();

    format!("{}{}시간 {}분", sign, abs_m / 60, abs_m % 60)
}

/// Delta plus the day-type suffix when the standard was reduced,
/// e.g. "-2시간 5분 (반차)".
pub fn delta_with_suffix(mins: i64, standard: DayStandard) -> String {
    format!("{}{}", delta_to_string(mins), standard.suffix())
}

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}
