//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read the `DEBUG` environment variable and coerce it to a boolean.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - File parsing (see `sections.rs` and the `ini` module).
//! - `.env` file loading (handled by `ConfigLoader::load_dotenv`).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - `DEBUG` unset defaults to `1`; the value is parsed as an integer and
//!   coerced via a non-zero test. Non-integer values are an error, not a
//!   silent false.

use super::error::ConfigError;
use crate::constants::DEBUG_VAR;

/// Read an environment variable, returning None if unset, empty, or
/// whitespace-only. Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Read the debug flag from the `DEBUG` environment variable.
///
/// Absence (including empty/whitespace values) keeps the historical
/// default of `1`, so debug stays on unless explicitly disabled.
pub(crate) fn debug_flag() -> Result<bool, ConfigError> {
    match env_var_or_none(DEBUG_VAR) {
        None => Ok(true),
        Some(raw) => {
            let value: i64 = raw.parse().map_err(|_| ConfigError::InvalidEnvVar {
                var: DEBUG_VAR.to_string(),
                message: "must be an integer".to_string(),
            })?;
            Ok(value != 0)
        }
    }
}
