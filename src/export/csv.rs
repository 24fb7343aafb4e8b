use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::monthly::MonthlySummary;
use crate::ui::messages::info;
use std::io;
use std::path::Path;

/// Write the monthly summary as CSV: `login,hours` header, one row per
/// roster login, RFC4180 quoting handled by the writer.
pub(crate) fn export_summary_csv(summary: &[MonthlySummary], path: &Path) -> AppResult<()> {
    info(format!("Exporting summary to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV open error: {e}"))))?;

    wtr.write_record(["login", "hours"])
        .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;

    for row in summary {
        wtr.write_record(&[row.login.clone(), format!("{:.2}", row.hours)])
            .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;
    }

    wtr.flush()
        .map_err(|e| AppError::from(io::Error::other(format!("CSV flush error: {e}"))))?;

    notify_export_success("Summary CSV", path);
    Ok(())
}
