use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, EditPatch};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        shop,
        address,
        start,
        end,
        real_start,
        real_end,
        training,
    } = cmd
    {
        let patch = EditPatch {
            date: date.clone(),
            shop: shop.clone(),
            address: address.clone(),
            start: start.clone(),
            end: end.clone(),
            real_start: real_start.clone(),
            real_end: real_end.clone(),
            training: *training,
        };

        if patch.date.is_none()
            && patch.shop.is_none()
            && patch.address.is_none()
            && patch.start.is_none()
            && patch.end.is_none()
            && patch.real_start.is_none()
            && patch.real_end.is_none()
            && patch.training.is_none()
        {
            info("Nothing to change; pass at least one field option.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;
        EditLogic::apply(&mut pool, *id, &patch)?;
    }
    Ok(())
}
