use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::grouping::month_key;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_all_actions;
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_month_key;
use crate::utils::formatting::hours2readable;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Hours { month, login } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let mut actions = load_all_actions(&mut pool)?;

        if let Some(m) = month {
            parse_month_key(m).ok_or_else(|| AppError::InvalidMonth(m.clone()))?;
            actions.retain(|a| month_key(&a.date).as_ref() == Some(m));
        }
        if let Some(l) = login {
            actions.retain(|a| &a.login == l);
        }

        let days = Core::daily_aggregates(&actions);

        if days.is_empty() {
            println!("No actions recorded for the selected period.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("Date", 12),
            Column::new("System", 10),
            Column::new("Real", 10),
        ]);

        for day in &days {
            table.add_row(vec![
                day.date.clone(),
                hours2readable(day.system_hours),
                hours2readable(day.real_hours),
            ]);
        }

        print!("{}", table.render());

        let (system_total, real_total) = Core::total_hours(&days);
        println!(
            "\nTotal: {} actions | system {} | real {}",
            actions.len(),
            hours2readable(system_total),
            hours2readable(real_total),
        );
    }
    Ok(())
}
