use crate::models::status::ActionStatus;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A scheduled promotional action at a shop address.
///
/// The record keeps the external string forms deliberately:
/// `date` is `DD.MM.YYYY`, times are `HH:MM:SS`. All calendar math goes
/// through `core::calculator`, which owns the parsing rules and their
/// sentinel behavior.
#[derive(Debug, Clone, Serialize)]
pub struct Action {
    pub id: i64,
    pub login: String,          // ⇔ actions.login (owning staff member)
    pub date: String,           // ⇔ actions.date (TEXT "DD.MM.YYYY")
    pub shop_name: String,      // ⇔ actions.shop_name
    pub shop_address: String,   // ⇔ actions.shop_address
    pub system_start: String,   // ⇔ actions.system_start (TEXT "HH:MM:SS")
    pub system_end: String,     // ⇔ actions.system_end
    pub real_start: Option<String>, // set only once the action took place
    pub real_end: Option<String>,
    pub is_training: bool,      // only meaningful for past actions
    pub source: String,         // ⇔ actions.source (TEXT, default 'cli')
    pub created_at: String,     // ⇔ actions.created_at (TEXT, ISO8601)
}

impl Action {
    /// High-level constructor for actions created from the CLI.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        login: String,
        date: String,
        shop_name: String,
        shop_address: String,
        system_start: String,
        system_end: String,
    ) -> Self {
        Self {
            id,
            login,
            date,
            shop_name,
            shop_address,
            system_start,
            system_end,
            real_start: None,
            real_end: None,
            is_training: false,
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    /// Status relative to `today`; None when the date cannot be parsed.
    pub fn status(&self, today: NaiveDate) -> Option<ActionStatus> {
        let offset = crate::core::calculator::grouping::day_offset(&self.date, today)?;
        Some(ActionStatus::from_day_offset(offset))
    }

    /// An action is editable for real times only once its date elapsed.
    pub fn is_past(&self, today: NaiveDate) -> bool {
        matches!(self.status(today), Some(ActionStatus::Past))
    }
}

/// Wire shape accepted by `import`: the legacy API exposed the same
/// record under shifting field names across versions. The aliases keep
/// that variance out of the canonical [`Action`].
#[derive(Debug, Deserialize)]
pub struct ActionImport {
    #[serde(default)]
    pub login: Option<String>,

    #[serde(alias = "action_date")]
    pub date: String,

    #[serde(default, alias = "type")]
    pub shop_name: Option<String>,

    #[serde(default, alias = "address")]
    pub shop_address: Option<String>,

    #[serde(alias = "start_sys", alias = "action_system_start")]
    pub system_start: String,

    #[serde(alias = "stop_sys", alias = "action_system_end")]
    pub system_end: String,

    #[serde(default, alias = "start_real")]
    pub real_start: Option<String>,

    #[serde(default, alias = "stop_real")]
    pub real_end: Option<String>,

    #[serde(default, alias = "szkolenie")]
    pub is_training: bool,
}
