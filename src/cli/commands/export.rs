use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::models::payroll::HoursMode;
use crate::utils::date::{current_month_key, parse_month_key};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        summary,
        month,
        mode,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *summary {
            let month = match month {
                Some(m) => {
                    parse_month_key(m).ok_or_else(|| AppError::InvalidMonth(m.clone()))?;
                    m.clone()
                }
                None => current_month_key(),
            };

            let mode = (*mode)
                .or_else(|| HoursMode::from_config_str(&cfg.hours_mode))
                .unwrap_or(HoursMode::System);

            ExportLogic::export_summary(&mut pool, format.clone(), file, &month, mode, *force)?;
        } else {
            ExportLogic::export(&mut pool, format.clone(), file, range, *force)?;
        }
    }
    Ok(())
}
