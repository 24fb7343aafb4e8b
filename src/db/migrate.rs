use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `actions` table with the current schema.
fn create_actions_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS actions (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            login        TEXT NOT NULL DEFAULT '',
            date         TEXT NOT NULL,
            shop_name    TEXT NOT NULL DEFAULT '',
            shop_address TEXT NOT NULL DEFAULT '',
            system_start TEXT NOT NULL,
            system_end   TEXT NOT NULL,
            real_start   TEXT,
            real_end     TEXT,
            is_training  INTEGER NOT NULL DEFAULT 0,
            source       TEXT NOT NULL DEFAULT 'cli',
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_actions_date ON actions(date);
        CREATE INDEX IF NOT EXISTS idx_actions_login ON actions(login);
        "#,
    )?;
    Ok(())
}

/// Create the `staff` roster table.
fn create_staff_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS staff (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            login      TEXT NOT NULL UNIQUE,
            first_name TEXT NOT NULL DEFAULT '',
            last_name  TEXT NOT NULL DEFAULT '',
            area       TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Versioned migration: early databases predate the training flag.
fn migrate_add_training_column(conn: &Connection) -> Result<()> {
    let version = "20250412_0003_add_training_flag";

    // 1) Skip when already applied
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    if table_has_column(conn, "actions", "is_training")? {
        // Schema already current (fresh install); just mark it.
        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, 'Schema already current')",
            [version],
        )?;
        return Ok(());
    }

    // 2) Apply
    conn.execute(
        "ALTER TABLE actions ADD COLUMN is_training INTEGER NOT NULL DEFAULT 0;",
        [],
    )?;

    // 3) Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added is_training flag to actions')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'is_training' to actions table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db() and `db --migrate`. Safe to run repeatedly.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table first: migrations record themselves into it
    ensure_log_table(conn)?;

    // 2) Base tables
    let had_actions = table_exists(conn, "actions")?;
    create_actions_table(conn)?;
    create_staff_table(conn)?;

    if !had_actions {
        success("Created actions and staff tables (current schema).");
    }

    // 3) Column-level upgrades
    migrate_add_training_column(conn)?;

    Ok(())
}
