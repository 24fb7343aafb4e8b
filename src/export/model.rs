use crate::models::action::Action;
use serde::Serialize;

/// Flat row shape shared by the action-table exports.
#[derive(Serialize, Clone, Debug)]
pub struct ActionExport {
    pub id: i64,
    pub login: String,
    pub date: String,
    pub shop_name: String,
    pub shop_address: String,
    pub system_start: String,
    pub system_end: String,
    pub real_start: String,
    pub real_end: String,
    pub is_training: bool,
}

impl From<&Action> for ActionExport {
    fn from(a: &Action) -> Self {
        Self {
            id: a.id,
            login: a.login.clone(),
            date: a.date.clone(),
            shop_name: a.shop_name.clone(),
            shop_address: a.shop_address.clone(),
            system_start: a.system_start.clone(),
            system_end: a.system_end.clone(),
            real_start: a.real_start.clone().unwrap_or_default(),
            real_end: a.real_end.clone().unwrap_or_default(),
            is_training: a.is_training,
        }
    }
}

/// Header for CSV / XLSX.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "login",
        "date",
        "shop_name",
        "shop_address",
        "system_start",
        "system_end",
        "real_start",
        "real_end",
        "is_training",
    ]
}

/// Convert one row into plain strings (XLSX cell writer input).
pub(crate) fn action_to_row(a: &ActionExport) -> Vec<String> {
    vec![
        a.id.to_string(),
        a.login.clone(),
        a.date.clone(),
        a.shop_name.clone(),
        a.shop_address.clone(),
        a.system_start.clone(),
        a.system_end.clone(),
        a.real_start.clone(),
        a.real_end.clone(),
        a.is_training.to_string(),
    ]
}
