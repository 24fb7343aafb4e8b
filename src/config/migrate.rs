//! Configuration file upgrades: older installs miss fields that newer
//! releases expect. `check` reports the gaps, `migrate` fills them with
//! defaults without touching the values the user already set.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use serde_yaml::Value;
use std::fs;

/// Fields every current config file must carry.
const REQUIRED_FIELDS: [&str; 4] = ["database", "login", "hours_mode", "monthly_target_hours"];

fn load_raw() -> AppResult<Value> {
    let path = Config::config_file();
    let content = fs::read_to_string(&path)
        .map_err(|_| AppError::Config(format!("Cannot read {}", path.display())))?;

    serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("Cannot parse {}: {}", path.display(), e)))
}

fn missing_fields(raw: &Value) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .into_iter()
        .filter(|f| raw.get(*f).is_none())
        .collect()
}

/// Report missing fields; true when the file is complete.
pub fn check() -> AppResult<bool> {
    let raw = load_raw()?;
    let missing = missing_fields(&raw);

    if missing.is_empty() {
        success("Configuration file is complete.");
        Ok(true)
    } else {
        for f in &missing {
            warning(format!("Missing field: {}", f));
        }
        info("Run `promolog config --migrate` to fill in defaults.");
        Ok(false)
    }
}

/// Fill missing fields with defaults, preserving existing values.
pub fn migrate() -> AppResult<()> {
    let raw = load_raw()?;
    let missing = missing_fields(&raw);

    if missing.is_empty() {
        success("Configuration already up to date.");
        return Ok(());
    }

    // Round-trip through the typed struct: serde fills the defaults for
    // absent fields, known values survive untouched.
    let upgraded: Config = serde_yaml::from_value(raw)
        .map_err(|e| AppError::Config(format!("Cannot upgrade configuration: {}", e)))?;

    upgraded.save()?;

    for f in &missing {
        info(format!("Added default for: {}", f));
    }
    success("Configuration migrated.");
    Ok(())
}
