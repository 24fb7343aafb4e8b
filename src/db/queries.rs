use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::action::Action;
use crate::models::staff::Staff;
use rusqlite::{Connection, OptionalExtension, Row, params};

// ---------------------------------------------------------------
// Actions
// ---------------------------------------------------------------

/// Mapping DB row → canonical Action. This is the only place where the
/// storage shape is allowed to touch the model.
pub fn map_action_row(row: &Row) -> rusqlite::Result<Action> {
    Ok(Action {
        id: row.get("id")?,
        login: row.get("login")?,
        date: row.get("date")?,
        shop_name: row.get("shop_name")?,
        shop_address: row.get("shop_address")?,
        system_start: row.get("system_start")?,
        system_end: row.get("system_end")?,
        real_start: row.get("real_start")?,
        real_end: row.get("real_end")?,
        is_training: row.get::<_, i64>("is_training")? == 1,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

/// All actions, in insertion order. Chronological ordering is a core
/// concern (the dotted date format does not sort in SQL), so callers go
/// through `core::calculator::grouping` for anything order-sensitive.
pub fn load_all_actions(pool: &mut DbPool) -> AppResult<Vec<Action>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, login, date, shop_name, shop_address,
                system_start, system_end, real_start, real_end,
                is_training, source, created_at
         FROM actions
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], map_action_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_action(pool: &mut DbPool, id: i64) -> AppResult<Action> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, login, date, shop_name, shop_address,
                system_start, system_end, real_start, real_end,
                is_training, source, created_at
         FROM actions
         WHERE id = ?1",
    )?;

    stmt.query_row([id], map_action_row)
        .optional()?
        .ok_or(AppError::UnknownAction(id))
}

pub fn insert_action(conn: &Connection, action: &Action) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO actions (login, date, shop_name, shop_address,
                              system_start, system_end, real_start, real_end,
                              is_training, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            action.login,
            action.date,
            action.shop_name,
            action.shop_address,
            action.system_start,
            action.system_end,
            action.real_start,
            action.real_end,
            if action.is_training { 1 } else { 0 },
            action.source,
            action.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update an action (all fields except id).
pub fn update_action(conn: &Connection, action: &Action) -> AppResult<()> {
    conn.execute(
        "UPDATE actions
         SET login = ?1, date = ?2, shop_name = ?3, shop_address = ?4,
             system_start = ?5, system_end = ?6,
             real_start = ?7, real_end = ?8,
             is_training = ?9, source = ?10, created_at = ?11
         WHERE id = ?12",
        params![
            action.login,
            action.date,
            action.shop_name,
            action.shop_address,
            action.system_start,
            action.system_end,
            action.real_start,
            action.real_end,
            if action.is_training { 1 } else { 0 },
            action.source,
            action.created_at,
            action.id,
        ],
    )?;
    Ok(())
}

/// Delete by id; returns the number of removed rows.
pub fn delete_action(pool: &mut DbPool, id: i64) -> AppResult<usize> {
    let n = pool
        .conn
        .execute("DELETE FROM actions WHERE id = ?1", [id])?;
    Ok(n)
}

// ---------------------------------------------------------------
// Staff roster
// ---------------------------------------------------------------

pub fn map_staff_row(row: &Row) -> rusqlite::Result<Staff> {
    Ok(Staff {
        id: row.get("id")?,
        login: row.get("login")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        area: row.get("area")?,
        created_at: row.get("created_at")?,
    })
}

pub fn load_staff(pool: &mut DbPool) -> AppResult<Vec<Staff>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, login, first_name, last_name, area, created_at
         FROM staff
         ORDER BY login ASC",
    )?;

    let rows = stmt.query_map([], map_staff_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_staff(conn: &Connection, staff: &Staff) -> AppResult<i64> {
    let exists: Option<i64> = conn
        .query_row(
            "SELECT id FROM staff WHERE login = ?1",
            [&staff.login],
            |row| row.get(0),
        )
        .optional()?;

    if exists.is_some() {
        return Err(AppError::DuplicateStaff(staff.login.clone()));
    }

    conn.execute(
        "INSERT INTO staff (login, first_name, last_name, area, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            staff.login,
            staff.first_name,
            staff.last_name,
            staff.area,
            staff.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_staff(pool: &mut DbPool, login: &str) -> AppResult<()> {
    let n = pool
        .conn
        .execute("DELETE FROM staff WHERE login = ?1", [login])?;

    if n == 0 {
        return Err(AppError::UnknownStaff(login.to_string()));
    }
    Ok(())
}

/// Roster logins in listing order.
pub fn staff_logins(pool: &mut DbPool) -> AppResult<Vec<String>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT login FROM staff ORDER BY login ASC")?;

    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
