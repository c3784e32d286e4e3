use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a `CTDOCKET_*` value fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a `CTDOCKET_*` value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        match raw.to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected true/false, got \"{raw}\""),
            }),
        }
    };

    let webdriver_url = or_default("CTDOCKET_WEBDRIVER_URL", "http://localhost:4444");
    let base_url = or_default("CTDOCKET_BASE_URL", "https://civilinquiry.jud.ct.gov");
    let headless = parse_bool("CTDOCKET_HEADLESS", "true")?;
    let page_load_timeout_secs = parse_u64("CTDOCKET_PAGE_LOAD_TIMEOUT_SECS", "30")?;
    let implicit_wait_secs = parse_u64("CTDOCKET_IMPLICIT_WAIT_SECS", "10")?;
    let detail_delay_max_ms = parse_u64("CTDOCKET_DETAIL_DELAY_MAX_MS", "2000")?;
    let log_level = or_default("CTDOCKET_LOG_LEVEL", "info");

    Ok(AppConfig {
        webdriver_url,
        base_url,
        headless,
        page_load_timeout_secs,
        implicit_wait_secs,
        detail_delay_max_ms,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
