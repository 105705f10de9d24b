/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Color a formatted delta cell:
/// leading `+` → green, leading `-` → red, anything else (the missing
/// check-out label) → yellow.
pub fn colorize_delta(cell: &str) -> String {
    let color = match cell.chars().next() {
        Some('+') => GREEN,
        Some('-') => RED,
        _ => YELLOW,
    };
    format!("{color}{cell}{RESET}")
}

/// Grey out placeholder cells ("--:--" or empty), leave real values alone.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
