use std::path::PathBuf;

use crate::ConfigError;

/// Runtime configuration for a single pipeline run, sourced from the
/// environment.
///
/// Credentials are cleaned with [`clean_credential`] before being stored, so
/// values pasted into a `.env` file with surrounding quotes still work.
#[derive(Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub blotato_api_key: String,
    pub blotato_account_id: String,
    pub gemini_model: String,
    pub templates_dir: PathBuf,
    pub output_path: PathBuf,
    pub platform: String,
    pub http_timeout_secs: u64,
    pub log_level: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("gemini_api_key", &"[redacted]")
            .field("blotato_api_key", &"[redacted]")
            .field("blotato_account_id", &self.blotato_account_id)
            .field("gemini_model", &self.gemini_model)
            .field("templates_dir", &self.templates_dir)
            .field("output_path", &self.output_path)
            .field("platform", &self.platform)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("log_level", &self.log_level)
            .finish()
    }
}

/// Load configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_config() -> Result<Config, ConfigError> {
    dotenvy::dotenv().ok();
    load_config_from_env()
}

/// Load configuration from environment variables already in the process.
///
/// Unlike [`load_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_config_from_env() -> Result<Config, ConfigError> {
    build_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_config<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require_credential = |var: &str| -> Result<String, ConfigError> {
        let raw = lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))?;
        let cleaned = clean_credential(&raw);
        if cleaned.is_empty() {
            return Err(ConfigError::MissingEnvVar(var.to_string()));
        }
        Ok(cleaned)
    };

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

    let gemini_api_key = require_credential("GEMINI_API_KEY")?;
    let blotato_api_key = require_credential("BLOTATO_API_KEY")?;
    let blotato_account_id = require_credential("BLOTATO_ACCOUNT_ID")?;

    let gemini_model = or_default("QUOTECARD_GEMINI_MODEL", "gemini-3-flash-preview");
    let templates_dir = PathBuf::from(or_default("QUOTECARD_TEMPLATES_DIR", "./assets/templates"));
    let output_path = lookup("QUOTECARD_OUTPUT_PATH").map_or_else(
        |_| std::env::temp_dir().join("quote_card.jpg"),
        PathBuf::from,
    );
    let platform = or_default("QUOTECARD_PLATFORM", "twitter");
    let http_timeout_secs = parse_u64("QUOTECARD_HTTP_TIMEOUT_SECS", "30")?;
    let log_level = or_default("QUOTECARD_LOG_LEVEL", "info");

    Ok(Config {
        gemini_api_key,
        blotato_api_key,
        blotato_account_id,
        gemini_model,
        templates_dir,
        output_path,
        platform,
        http_timeout_secs,
        log_level,
    })
}

/// Strips whitespace and one layer of surrounding quote characters from a
/// credential value. Dashboard copy-paste tends to bring both along.
fn clean_credential(raw: &str) -> String {
    raw.trim().trim_matches('"').trim_matches('\'').to_string()
}
