use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_staff, insert_staff, load_staff};
use crate::errors::AppResult;
use crate::models::staff::Staff;
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Staff {
        add,
        first_name,
        last_name,
        area,
        del,
        list,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if let Some(login) = add {
            let staff = Staff::new(
                0,
                login.to_uppercase(),
                first_name.clone().unwrap_or_default(),
                last_name.clone().unwrap_or_default(),
                area.clone().unwrap_or_default(),
            );

            let id = insert_staff(&pool.conn, &staff)?;
            let _ = log::oplog(
                &pool.conn,
                "add",
                &staff.login,
                &format!("Staff #{} registered", id),
            );
            success(format!("Staff {} registered.", staff.login));
        }

        if let Some(login) = del {
            let login = login.to_uppercase();
            delete_staff(&mut pool, &login)?;
            let _ = log::oplog(&pool.conn, "del", &login, "Staff removed");
            success(format!("Staff {} removed.", login));
        }

        if *list {
            let roster = load_staff(&mut pool)?;

            if roster.is_empty() {
                println!("Staff roster is empty.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("Login", 10),
                Column::new("First name", 14),
                Column::new("Last name", 14),
                Column::new("Area", 10),
            ]);

            for s in &roster {
                table.add_row(vec![
                    s.login.clone(),
                    s.first_name.clone(),
                    s.last_name.clone(),
                    s.area.clone(),
                ]);
            }

            print!("{}", table.render());
            println!("\n{} staff member(s).", roster.len());
        }
    }
    Ok(())
}
