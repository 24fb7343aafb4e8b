use crate::config::Config;
use crate::core::calculator::normalize::normalize_time;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries::insert_action;
use crate::errors::{AppError, AppResult};
use crate::models::action::{Action, ActionImport};
use crate::ui::messages::warning;
use crate::utils::date::{format_day, parse_day};
use std::fs;
use std::path::Path;

/// Result counters of one import run.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
}

/// High-level business logic for the `import` command: ingest a JSON
/// array of actions in the legacy wire shape.
pub struct ImportLogic;

impl ImportLogic {
    pub fn import_file(pool: &mut DbPool, cfg: &Config, file: &Path) -> AppResult<ImportReport> {
        let raw = fs::read_to_string(file)?;

        let records: Vec<ActionImport> = serde_json::from_str(&raw)
            .map_err(|e| AppError::Import(format!("{}: {}", file.display(), e)))?;

        let mut report = ImportReport::default();

        for (idx, rec) in records.into_iter().enumerate() {
            match Self::to_action(cfg, rec) {
                Some(action) => {
                    insert_action(&pool.conn, &action)?;
                    report.imported += 1;
                }
                None => {
                    // Dirty records are dropped, not fatal: partial data
                    // from the legacy API is expected.
                    warning(format!("Record #{} skipped: invalid date or time", idx + 1));
                    report.skipped += 1;
                }
            }
        }

        let _ = log::oplog(
            &pool.conn,
            "import",
            &file.display().to_string(),
            &format!("{} imported, {} skipped", report.imported, report.skipped),
        );

        Ok(report)
    }

    /// Map one wire record into the canonical shape. None when the date
    /// or the planned window cannot be canonicalized.
    fn to_action(cfg: &Config, rec: ActionImport) -> Option<Action> {
        let day = parse_day(&rec.date)?;

        let system_start = normalize_time(Some(rec.system_start.as_str()))?;
        let system_end = normalize_time(Some(rec.system_end.as_str()))?;

        let mut action = Action::new(
            0,
            rec.login.unwrap_or_else(|| cfg.login.clone()),
            format_day(day),
            rec.shop_name.unwrap_or_default(),
            rec.shop_address.unwrap_or_default(),
            system_start,
            system_end,
        );

        // Real times are optional; an unparseable one degrades to absent.
        action.real_start = rec.real_start.as_deref().and_then(|t| normalize_time(Some(t)));
        action.real_end = rec.real_end.as_deref().and_then(|t| normalize_time(Some(t)));
        action.is_training = rec.is_training;
        action.source = "import".to_string();

        Some(action)
    }
}
