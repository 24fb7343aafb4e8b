use serde::Serialize;

/// Which time window a summary or bonus calculation is based on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum HoursMode {
    System,
    Real,
}

impl HoursMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HoursMode::System => "system",
            HoursMode::Real => "real",
        }
    }

    pub fn from_config_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "system" => Some(HoursMode::System),
            "real" => Some(HoursMode::Real),
            _ => None,
        }
    }
}

/// Ephemeral input of one payroll calculation: two device-sale counters
/// and the hour basis. Nothing here is persisted.
#[derive(Debug, Clone, Copy)]
pub struct PayrollInput {
    pub device_count_a: u32,
    pub device_count_b: u32,
    pub hours_mode: HoursMode,
}

/// Result of the bonus-tier evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BonusOutcome {
    pub efficiency_a: f64,
    pub efficiency_b: f64,
    pub bonus_amount: u32,
}
