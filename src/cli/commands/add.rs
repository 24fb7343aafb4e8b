use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        shop,
        address,
        start,
        end,
        login,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        AddLogic::apply(
            &mut pool,
            cfg,
            date,
            shop,
            address,
            start,
            end,
            login.as_deref(),
        )?;
    }
    Ok(())
}
