use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::insert_action;
use crate::db::log;
use crate::errors::{AppError, AppResult};
use crate::models::action::Action;
use crate::ui::messages::{success, warning};
use crate::utils::date::{format_day, parse_day, today};
use crate::utils::time::canonical_time;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    #[allow(clippy::too_many_arguments)]
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        date: &str,
        shop: &str,
        address: &str,
        start: &str,
        end: &str,
        login: Option<&str>,
    ) -> AppResult<i64> {
        // ------------------------------------------------
        // Validate the calendar date and re-render it in the
        // canonical dotted form (leading zeros guaranteed).
        // ------------------------------------------------
        let day = parse_day(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let date_canonical = format_day(day);

        // ------------------------------------------------
        // Planned window, normalized to HH:MM:SS.
        // ------------------------------------------------
        let system_start = canonical_time(start)?;
        let system_end = canonical_time(end)?;

        if day < today() {
            warning(format!(
                "Date {} is already in the past; real times stay empty until you edit them.",
                date_canonical
            ));
        }

        let owner = login.unwrap_or(&cfg.login).to_string();

        let action = Action::new(
            0,
            owner,
            date_canonical.clone(),
            shop.to_string(),
            address.to_string(),
            system_start,
            system_end,
        );

        let id = insert_action(&pool.conn, &action)?;

        let _ = log::oplog(
            &pool.conn,
            "add",
            &id.to_string(),
            &format!("Action on {} at {}", date_canonical, action.shop_address),
        );

        success(format!(
            "Action #{} saved: {} {}-{} @ {}",
            id,
            date_canonical,
            crate::utils::formatting::short_time(&action.system_start),
            crate::utils::formatting::short_time(&action.system_end),
            action.shop_address
        ));

        Ok(id)
    }
}
