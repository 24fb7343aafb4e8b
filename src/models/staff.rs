use chrono::Local;
use serde::Serialize;

/// A field staff member (brand ambassador) on the supervisor's roster.
#[derive(Debug, Clone, Serialize)]
pub struct Staff {
    pub id: i64,
    pub login: String,      // ⇔ staff.login (unique, e.g. "PLH01234")
    pub first_name: String,
    pub last_name: String,
    pub area: String,
    pub created_at: String, // ⇔ staff.created_at (TEXT, ISO8601)
}

impl Staff {
    pub fn new(id: i64, login: String, first_name: String, last_name: String, area: String) -> Self {
        Self {
            id,
            login,
            first_name,
            last_name,
            area,
            created_at: Local::now().to_rfc3339(),
        }
    }
}
