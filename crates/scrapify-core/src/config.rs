use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files. Useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a pure
/// `HashMap` lookup with no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let log_level = or_default("SCRAPIFY_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("SCRAPIFY_REQUEST_TIMEOUT_SECS", "10")?;
    let user_agent = or_default("SCRAPIFY_USER_AGENT", "scrapify/0.1 (catalog-export)");
    let throttle_ms = parse_u64("SCRAPIFY_THROTTLE_MS", "100")?;
    let max_pages = parse_u32("SCRAPIFY_MAX_PAGES", "100")?;
    let output_path = PathBuf::from(or_default("SCRAPIFY_OUTPUT_PATH", "products.csv"));

    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SCRAPIFY_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be at least 1 second".to_string(),
        });
    }

    if max_pages == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SCRAPIFY_MAX_PAGES".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        log_level,
        request_timeout_secs,
        user_agent,
        throttle_ms,
        max_pages,
        output_path,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
