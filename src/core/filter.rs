//! Listing filters: month, past/upcoming status, shop, login.

use crate::core::calculator::grouping::{day_offset, month_key};
use crate::models::action::Action;
use crate::models::status::ActionStatus;
use chrono::NaiveDate;

/// Immutable filter input built by the `list` command.
#[derive(Debug, Default, Clone)]
pub struct ListFilter {
    pub month: Option<String>,  // "MM.YYYY"
    pub status: Option<ActionStatus>,
    pub shop: Option<String>,
    pub login: Option<String>,
}

impl ListFilter {
    /// True when the action passes every active filter.
    ///
    /// Records with unparseable dates carry no status: they are excluded
    /// whenever a status filter is active and shown otherwise.
    pub fn matches(&self, action: &Action, today: NaiveDate) -> bool {
        if let Some(login) = &self.login
            && &action.login != login
        {
            return false;
        }

        if let Some(shop) = &self.shop
            && &action.shop_name != shop
        {
            return false;
        }

        if let Some(month) = &self.month
            && month_key(&action.date).as_ref() != Some(month)
        {
            return false;
        }

        if let Some(wanted) = self.status {
            let Some(offset) = day_offset(&action.date, today) else {
                return false;
            };
            if ActionStatus::from_day_offset(offset) != wanted {
                return false;
            }
        }

        true
    }

    pub fn apply(&self, actions: &[Action], today: NaiveDate) -> Vec<Action> {
        actions
            .iter()
            .filter(|a| self.matches(a, today))
            .cloned()
            .collect()
    }
}
