use crate::core::calculator::grouping::compare_dates;
use crate::core::summary::monthly_summary;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all_actions, staff_logins};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv::export_summary_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ActionExport;
use crate::export::range::parse_range;
use crate::export::xlsx::{export_summary_xlsx, export_xlsx};
use crate::models::payroll::HoursMode;
use crate::ui::messages::warning;
use crate::utils::date::parse_day;
use crate::utils::path::is_absolute;
use chrono::NaiveDate;
use std::io;
use std::path::Path;

/// High-level export orchestration.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the action table.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"`, or a dotted period expression
    ///   (`DD.MM.YYYY`, `MM.YYYY`, `YYYY`, `start:end`)
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let rows = load_rows(pool, date_bounds)?;

        if rows.is_empty() {
            warning("No actions found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        Ok(())
    }

    /// Export the per-login monthly summary (`login,hours`).
    pub fn export_summary(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        month: &str,
        mode: HoursMode,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let actions = load_all_actions(pool)?;
        let roster = staff_logins(pool)?;

        if roster.is_empty() {
            warning("Staff roster is empty; add logins with `staff --add` first.");
        }

        let summary = monthly_summary(&roster, &actions, month, mode);

        match format {
            ExportFormat::Csv => export_summary_csv(&summary, path)?,
            ExportFormat::Json => {
                let json_data = serde_json::to_string_pretty(&summary).map_err(|e| {
                    AppError::from(io::Error::other(format!("JSON serialization error: {e}")))
                })?;
                std::fs::write(path, json_data)?;
                crate::export::notify_export_success("Summary JSON", path);
            }
            ExportFormat::Xlsx => export_summary_xlsx(&summary, path)?,
        }

        Ok(())
    }
}

/// Load export rows, bounded when a range was given, in chronological
/// order (date, then planned start).
fn load_rows(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<ActionExport>> {
    let mut actions = load_all_actions(pool)?;

    if let Some((start, end)) = bounds {
        actions.retain(|a| match parse_day(&a.date) {
            Some(d) => d >= start && d <= end,
            // Unparseable dates only survive an unbounded export.
            None => false,
        });
    }

    actions.sort_by(|a, b| {
        compare_dates(&a.date, &b.date).then_with(|| a.system_start.cmp(&b.system_start))
    });

    Ok(actions.iter().map(ActionExport::from).collect())
}
