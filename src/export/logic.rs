use crate::core::Analysis;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{ReportRow, WeeklyRow};
use crate::export::xlsx::export_xlsx;
use crate::export::ExportFormat;
use crate::models::WeeklyRecord;
use std::io;
use std::path::Path;

/// Detail rows in presentation order: each person's days grouped by week,
/// ascending, with one synthetic weekly-total row closing every week.
pub fn build_report_rows(analysis: &Analysis) -> Vec<ReportRow> {
    let mut rows = Vec::new();

    for week in &analysis.weekly {
        for rec in analysis
            .daily
            .iter()
            .filter(|r| r.person == week.person && belongs_to(week, r.date))
        {
            rows.push(ReportRow::from_daily(rec));
        }
        rows.push(ReportRow::weekly_total(week));
    }

    rows
}

fn belongs_to(week: &WeeklyRecord, date: chrono::NaiveDate) -> bool {
    crate::core::weekly::week_start(date) == week.week_start
}

pub fn build_weekly_rows(analysis: &Analysis) -> Vec<WeeklyRow> {
    analysis.weekly.iter().map(WeeklyRow::from_weekly).collect()
}

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the analysis to `file` in the requested format.
    ///
    /// - CSV: detail rows only (flat table).
    /// - JSON: `{ "detail": [...], "weekly": [...] }`, pretty-printed.
    /// - XLSX: one detail worksheet and one weekly-summary worksheet.
    pub fn export(
        analysis: &Analysis,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let detail = build_report_rows(analysis);
        let weekly = build_weekly_rows(analysis);

        match format {
            ExportFormat::Csv => export_csv(&detail, path)?,
            ExportFormat::Json => export_json(&detail, &weekly, path)?,
            ExportFormat::Xlsx => export_xlsx(&detail, &weekly, path)?,
        }

        Ok(())
    }
}
