//! Time helpers shared by the CLI layer: validation of user-entered
//! clock times before they reach the database.

use crate::core::calculator::normalize::normalize_time;
use crate::errors::{AppError, AppResult};

/// Validate and canonicalize a user-entered time (`HH`, `HH:MM`,
/// `HH:MM:SS`) into `HH:MM:SS`, failing with InvalidTime on bad input.
pub fn canonical_time(s: &str) -> AppResult<String> {
    normalize_time(Some(s)).ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

/// Same as [`canonical_time`] but passes `None` through.
pub fn canonical_optional_time(input: Option<&String>) -> AppResult<Option<String>> {
    match input {
        Some(s) => Ok(Some(canonical_time(s)?)),
        None => Ok(None),
    }
}
