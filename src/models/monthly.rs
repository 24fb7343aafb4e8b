use serde::Serialize;

/// Per-login hour total for one selected month. Rebuilt whenever the
/// month or the underlying action list changes.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlySummary {
    pub login: String,
    pub hours: f64,
}
