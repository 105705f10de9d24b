pub mod classify;
pub mod daily;
pub mod extract;
pub mod weekly;

use crate::models::{DailyRecord, Standards, WeeklyRecord};
use extract::{AliasMap, ScanWindow};

/// Output of the full pipeline for one chat export.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub daily: Vec<DailyRecord>,
    pub weekly: Vec<WeeklyRecord>,
}

impl Analysis {
    pub fn is_empty(&self) -> bool {
        self.daily.is_empty()
    }
}

/// Run the whole pipeline over one export: classify lines, extract events,
/// aggregate per day, roll up per week.
pub fn analyze(text: &str, window: &ScanWindow, aliases: &AliasMap, standards: &Standards) -> Analysis {
    let events = extract::extract_events(text.lines(), window, aliases);
    let daily = daily::build_daily_records(&events, standards);
    let weekly = weekly::build_weekly_records(&daily);

    Analysis { daily, weekly }
}
