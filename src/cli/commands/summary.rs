use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::monthly_summary;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all_actions, staff_logins};
use crate::errors::{AppError, AppResult};
use crate::models::payroll::HoursMode;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{RESET, color_for_target};
use crate::utils::date::{current_month_key, month_name, parse_month_key};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { month, mode } = cmd {
        let month = match month {
            Some(m) => {
                parse_month_key(m).ok_or_else(|| AppError::InvalidMonth(m.clone()))?;
                m.clone()
            }
            None => current_month_key(),
        };

        let mode = (*mode)
            .or_else(|| HoursMode::from_config_str(&cfg.hours_mode))
            .unwrap_or(HoursMode::System);

        let mut pool = DbPool::new(&cfg.database)?;
        let actions = load_all_actions(&mut pool)?;
        let roster = staff_logins(&mut pool)?;

        if roster.is_empty() {
            warning("Staff roster is empty; add logins with `staff --add` first.");
            return Ok(());
        }

        let summary = monthly_summary(&roster, &actions, &month, mode);

        let (mm, yyyy) = month.split_once('.').unwrap_or((month.as_str(), ""));
        header(format!(
            "Team hours for {} {} ({} basis)",
            month_name(mm),
            yyyy,
            mode.as_str()
        ));

        let login_w = summary
            .iter()
            .map(|s| s.login.len())
            .max()
            .unwrap_or(5)
            .max("Login".len());

        println!("{:<login_w$}  Hours", "Login", login_w = login_w);

        for row in &summary {
            let color = color_for_target(row.hours, cfg.monthly_target_hours);
            println!(
                "{:<login_w$}  {}{:>6.2}{} / {:.0}",
                row.login,
                color,
                row.hours,
                RESET,
                cfg.monthly_target_hours,
                login_w = login_w
            );
        }
    }
    Ok(())
}
