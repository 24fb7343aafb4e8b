use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries::{load_action, update_action};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date::{format_day, parse_day, today};
use crate::utils::time::canonical_time;

/// Fields of an `edit` invocation; None = leave unchanged.
#[derive(Debug, Default)]
pub struct EditPatch {
    pub date: Option<String>,
    pub shop: Option<String>,
    pub address: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub real_start: Option<String>,
    pub real_end: Option<String>,
    pub training: Option<bool>,
}

impl EditPatch {
    fn touches_outcome(&self) -> bool {
        self.real_start.is_some() || self.real_end.is_some() || self.training.is_some()
    }
}

/// High-level business logic for the `edit` command.
pub struct EditLogic;

impl EditLogic {
    pub fn apply(pool: &mut DbPool, id: i64, patch: &EditPatch) -> AppResult<()> {
        let mut action = load_action(pool, id)?;

        // ------------------------------------------------
        // Outcome fields (real window, training flag) only
        // exist for actions whose date already elapsed.
        // ------------------------------------------------
        if patch.touches_outcome() && !action.is_past(today()) {
            return Err(AppError::NotPastYet(id, action.date.clone()));
        }

        if let Some(date) = &patch.date {
            let day = parse_day(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;
            action.date = format_day(day);
        }

        if let Some(shop) = &patch.shop {
            action.shop_name = shop.clone();
        }
        if let Some(address) = &patch.address {
            action.shop_address = address.clone();
        }

        if let Some(start) = &patch.start {
            action.system_start = canonical_time(start)?;
        }
        if let Some(end) = &patch.end {
            action.system_end = canonical_time(end)?;
        }

        if let Some(rs) = &patch.real_start {
            action.real_start = Some(canonical_time(rs)?);
        }
        if let Some(re) = &patch.real_end {
            action.real_end = Some(canonical_time(re)?);
        }
        if let Some(t) = patch.training {
            action.is_training = t;
        }

        update_action(&pool.conn, &action)?;

        let _ = log::oplog(
            &pool.conn,
            "edit",
            &id.to_string(),
            &format!("Action on {} updated", action.date),
        );

        success(format!("Action #{} updated.", id));
        Ok(())
    }
}
