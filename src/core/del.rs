use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries::delete_action;
use crate::errors::{AppError, AppResult};

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<()> {
        let deleted = delete_action(pool, id)?;

        if deleted == 0 {
            return Err(AppError::UnknownAction(id));
        }

        let _ = log::oplog(&pool.conn, "del", &id.to_string(), "Action deleted");
        Ok(())
    }
}
