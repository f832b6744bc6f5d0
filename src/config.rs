//! Runtime configuration options
//!
//! Options are plain `KEY=VALUE` strings kept in a process-wide store.
//! Options set by calling functions in this module override options set in
//! environment variables of the same name.
//!
//! ```
//! use ogr_tools::config::*;
//!
//! // Only iterate selected features when a selection exists
//! set_config_option(USE_SELECTED, "YES").unwrap();
//! assert!(get_bool_config_option(USE_SELECTED, false).unwrap());
//!
//! // Back to the default
//! clear_config_option(USE_SELECTED).unwrap();
//! assert_eq!(get_config_option(USE_SELECTED, "XXX").unwrap(), "XXX");
//! ```

use std::collections::HashMap;
use std::env;
use std::sync::{Mutex, MutexGuard};

use once_cell::sync::Lazy;

use crate::errors::{Result, VectorError};

/// Restrict feature access to the layer's selection, when it has one.
pub const USE_SELECTED: &str = "USE_SELECTED";

static CONFIG_OPTIONS: Lazy<Mutex<HashMap<String, String>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

fn options() -> Result<MutexGuard<'static, HashMap<String, String>>> {
    CONFIG_OPTIONS.lock().map_err(|_| VectorError::ConfigLock)
}

/// Set a configuration option
pub fn set_config_option(key: &str, value: &str) -> Result<()> {
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(VectorError::BadArgument(format!(
            "Invalid characters in name: '{key}'"
        )));
    }
    options()?.insert(key.to_string(), value.to_string());
    Ok(())
}

/// Get the value of a configuration option
///
/// Falls back to the environment variable named `key`, then to `default`.
pub fn get_config_option(key: &str, default: &str) -> Result<String> {
    if let Some(value) = options()?.get(key) {
        return Ok(value.clone());
    }
    Ok(env::var(key).unwrap_or_else(|_| default.to_string()))
}

/// Clear the value of a configuration option
///
/// An environment variable of the same name becomes visible again.
pub fn clear_config_option(key: &str) -> Result<()> {
    options()?.remove(key);
    Ok(())
}

/// Get a configuration option interpreted as a boolean.
///
/// Accepts `YES`, `TRUE`, `ON`, `1` and `NO`, `FALSE`, `OFF`, `0` in any case.
pub fn get_bool_config_option(key: &str, default: bool) -> Result<bool> {
    let raw = get_config_option(key, if default { "YES" } else { "NO" })?;
    match raw.trim().to_ascii_uppercase().as_str() {
        "YES" | "TRUE" | "ON" | "1" => Ok(true),
        "NO" | "FALSE" | "OFF" | "0" => Ok(false),
        _ => Err(VectorError::BadArgument(format!(
            "Option {key} expects a boolean, got '{raw}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own key: the store is shared by the whole test binary.

    #[test]
    fn test_set_get_option() {
        set_config_option("OGR_TOOLS_TEST_SET", "1024").unwrap();
        assert_eq!(
            get_config_option("OGR_TOOLS_TEST_SET", "").unwrap(),
            "1024"
        );
        clear_config_option("OGR_TOOLS_TEST_SET").unwrap();
        assert_eq!(
            get_config_option("OGR_TOOLS_TEST_SET", "XXX").unwrap(),
            "XXX"
        );
    }

    #[test]
    fn test_bool_option() {
        assert!(!get_bool_config_option("OGR_TOOLS_TEST_BOOL", false).unwrap());
        assert!(get_bool_config_option("OGR_TOOLS_TEST_BOOL", true).unwrap());
        set_config_option("OGR_TOOLS_TEST_BOOL", "on").unwrap();
        assert!(get_bool_config_option("OGR_TOOLS_TEST_BOOL", false).unwrap());
        set_config_option("OGR_TOOLS_TEST_BOOL", "False").unwrap();
        assert!(!get_bool_config_option("OGR_TOOLS_TEST_BOOL", true).unwrap());
        set_config_option("OGR_TOOLS_TEST_BOOL", "maybe").unwrap();
        assert!(matches!(
            get_bool_config_option("OGR_TOOLS_TEST_BOOL", true),
            Err(VectorError::BadArgument(_))
        ));
        clear_config_option("OGR_TOOLS_TEST_BOOL").unwrap();
    }

    #[test]
    fn test_invalid_key() {
        assert!(set_config_option("BAD KEY", "x").is_err());
        assert!(set_config_option("", "x").is_err());
    }
}
