use crate::core::calculator::grouping::compare_dates;
use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL ACTIONS / STAFF
    //
    let actions: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM actions", [], |row| row.get(0))?;
    let staff: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM staff", [], |row| row.get(0))?;

    println!(
        "{}• Total actions:{} {}{}{}",
        CYAN, RESET, GREEN, actions, RESET
    );
    println!("{}• Staff roster:{} {}{}{}", CYAN, RESET, GREEN, staff, RESET);

    //
    // 3) DATE RANGE
    //
    // The dotted date form does not sort in SQL, so the bounds are found
    // in memory with the chronological comparator.
    let dates: Vec<String> = {
        let mut stmt = pool.conn.prepare("SELECT DISTINCT date FROM actions")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut v = Vec::new();
        for r in rows {
            v.push(r?);
        }
        v
    };

    let mut sorted = dates.clone();
    sorted.sort_by(|a, b| compare_dates(a, b));

    let fmt_first = sorted
        .first()
        .cloned()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = sorted
        .last()
        .cloned()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) AVERAGE ACTIONS/DAY WORKED
    //
    if !dates.is_empty() {
        let avg = actions as f64 / dates.len() as f64;
        println!("{}• Average actions/day worked:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
