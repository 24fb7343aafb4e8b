use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{BLUE, CYAN, GREEN, MAGENTA, RED, RESET, WHITE, YELLOW};

/// ANSI color keyed on the logged operation.
fn color_for_operation(op: &str) -> &'static str {
    match op {
        "add" | "import" => GREEN,
        "del" => RED,
        "edit" => YELLOW,
        "migration_applied" => MAGENTA,
        "backup" => BLUE,
        "init" => CYAN,
        _ => WHITE,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd
        && *print
    {
        let mut pool = DbPool::new(&cfg.database)?;

        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: String = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok((id, date, operation, target, message))
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries
            .iter()
            .map(|(_, date, ..)| date.len())
            .max()
            .unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|(_, _, op, target, _)| op.len() + if target.is_empty() { 0 } else { target.len() + 3 })
            .max()
            .unwrap_or(10)
            .min(60);

        println!("📜 Internal log:\n");

        for (id, date, operation, target, message) in entries {
            let color = color_for_operation(&operation);

            let mut op_target = if target.is_empty() {
                operation.clone()
            } else {
                format!("{operation} ({target})")
            };

            if op_target.len() > 60 {
                op_target.truncate(57);
                op_target.push_str("...");
            }

            let padding = " ".repeat(op_w.saturating_sub(op_target.len()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{}{}{} => {}",
                id,
                date,
                color,
                op_target,
                RESET,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }
    }

    Ok(())
}
