use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let report = ImportLogic::import_file(&mut pool, cfg, Path::new(file))?;

        success(format!(
            "Import completed: {} action(s) imported, {} skipped.",
            report.imported, report.skipped
        ));
    }
    Ok(())
}
