use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::grouping::{compare_dates, day_offset};
use crate::core::filter::ListFilter;
use crate::core::summary::available_months;
use crate::db::pool::DbPool;
use crate::db::queries::load_all_actions;
use crate::errors::{AppError, AppResult};
use crate::models::action::Action;
use crate::models::status::ActionStatus;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::date::{current_month_key, parse_month_key};
use crate::utils::formatting::short_time;
use std::collections::HashMap;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        month,
        status,
        shop,
        login,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let actions = load_all_actions(&mut pool)?;
        let today = crate::utils::date::today();

        let filter = ListFilter {
            month: resolve_month(month, &actions)?,
            status: status.as_deref().and_then(ActionStatus::from_filter),
            shop: shop.clone(),
            login: login.clone(),
        };

        let filtered = filter.apply(&actions, today);

        if filtered.is_empty() {
            println!("No actions match the selected filters.");
            return Ok(());
        }

        print_grouped(&filtered, today);
    }
    Ok(())
}

/// Month filter resolution: explicit value wins ("all" disables it); with
/// nothing given, default to the current month when it has data.
fn resolve_month(month: &Option<String>, actions: &[Action]) -> AppResult<Option<String>> {
    match month {
        Some(m) if m.eq_ignore_ascii_case("all") => Ok(None),
        Some(m) => {
            parse_month_key(m).ok_or_else(|| AppError::InvalidMonth(m.clone()))?;
            Ok(Some(m.clone()))
        }
        None => {
            let this_month = current_month_key();
            if available_months(actions).contains(&this_month) {
                Ok(Some(this_month))
            } else {
                Ok(None)
            }
        }
    }
}

/// Calendar-style output: one block per date, chronologically.
fn print_grouped(actions: &[Action], today: chrono::NaiveDate) {
    let mut by_date: HashMap<&str, Vec<&Action>> = HashMap::new();
    for a in actions {
        by_date.entry(a.date.as_str()).or_default().push(a);
    }

    let mut dates: Vec<&str> = by_date.keys().copied().collect();
    dates.sort_by(|a, b| compare_dates(a, b));

    for date in dates {
        header(date);

        for a in &by_date[date] {
            let status = day_offset(&a.date, today).map(ActionStatus::from_day_offset);
            let color = color_for_status(status);
            let marker = match status {
                Some(s) => s.as_str(),
                None => "unknown",
            };

            let real = match (&a.real_start, &a.real_end) {
                (Some(s), Some(e)) => {
                    format!(" | real {}-{}", short_time(s), short_time(e))
                }
                _ => String::new(),
            };

            let training = if a.is_training { " [training]" } else { "" };
            let shop = if a.shop_name.trim().is_empty() {
                "-"
            } else {
                a.shop_name.as_str()
            };

            println!(
                "  #{:<4} {}{:<8}{} {} {}-{}{} @ {} ({}){}",
                a.id,
                color,
                marker,
                RESET,
                a.login,
                short_time(&a.system_start),
                short_time(&a.system_end),
                real,
                a.shop_address,
                shop,
                training,
            );
        }
        println!();
    }
}
