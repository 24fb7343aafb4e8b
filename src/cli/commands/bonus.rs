use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::bonus::compute_bonus;
use crate::core::summary::monthly_hours;
use crate::db::pool::DbPool;
use crate::db::queries::load_all_actions;
use crate::errors::{AppError, AppResult};
use crate::models::payroll::{HoursMode, PayrollInput};
use crate::ui::messages::header;
use crate::utils::date::{current_month_key, parse_month_key};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Bonus {
        device_a,
        device_b,
        hours,
        month,
        login,
        mode,
    } = cmd
    {
        let input = PayrollInput {
            device_count_a: *device_a,
            device_count_b: *device_b,
            hours_mode: (*mode)
                .or_else(|| HoursMode::from_config_str(&cfg.hours_mode))
                .unwrap_or(HoursMode::System),
        };

        // Hour basis: either given directly, or aggregated from the
        // stored actions of one login for one month.
        let total_hours = match hours {
            Some(h) => *h,
            None => {
                let month = match month {
                    Some(m) => {
                        parse_month_key(m).ok_or_else(|| AppError::InvalidMonth(m.clone()))?;
                        m.clone()
                    }
                    None => current_month_key(),
                };

                let who = login.as_deref().unwrap_or(&cfg.login).to_string();

                let mut pool = DbPool::new(&cfg.database)?;
                let mut actions = load_all_actions(&mut pool)?;
                actions.retain(|a| a.login == who);

                monthly_hours(&actions, &month, input.hours_mode)
            }
        };

        let outcome = compute_bonus(input.device_count_a, input.device_count_b, total_hours);
        let action_count = total_hours / 4.0;

        header("Payroll bonus");
        println!("Hours ({}):    {:.2}", input.hours_mode.as_str(), total_hours);
        println!("Actions (4h):  {:.2}", action_count);
        println!("Efficiency A:  {:.2}", outcome.efficiency_a);
        println!("Efficiency B:  {:.2}", outcome.efficiency_b);
        println!("Bonus:         {} PLN", outcome.bonus_amount);
    }
    Ok(())
}
