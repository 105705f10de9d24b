pub mod config;
pub mod export;
pub mod init;
pub mod report;

use crate::config::{Config, parse_weekdays_arg};
use crate::core::extract::{AliasMap, ScanWindow};
use crate::core::{Analysis, analyze};
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use std::fs;

/// Resolve the scan window from CLI arguments and config, read the log
/// file, and run the pipeline. Shared by `report` and `export`.
///
/// An unparsable --start or --end fails here, before any line is touched.
pub(crate) fn load_analysis(
    log_file: &str,
    start: &Option<String>,
    end: &Option<String>,
    weekdays: &Option<String>,
    cfg: &Config,
) -> AppResult<Analysis> {
    let start_date = match start {
        Some(s) => date::parse_date(s)?,
        None => date::monday_of(date::today()),
    };

    let end_date = match end {
        Some(s) => date::parse_date(s)?,
        None => date::today(),
    };

    if start_date > end_date {
        return Err(AppError::InvalidRange(format!(
            "start {start_date} is after end {end_date}"
        )));
    }

    let permitted = match weekdays {
        Some(arg) => parse_weekdays_arg(arg)?,
        None => cfg.permitted_weekdays()?,
    };

    let window = ScanWindow::new(start_date, end_date, permitted);
    let aliases = AliasMap::new(cfg.aliases.clone());

    let text = fs::read_to_string(log_file)?;

    Ok(analyze(&text, &window, &aliases, &cfg.standards))
}
