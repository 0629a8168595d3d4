//! Registrar configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

/// Top-level registrar configuration.
///
/// Loaded once at startup via [`RegistrarConfig::from_env`].
#[derive(Debug, Clone)]
pub struct RegistrarConfig {
    /// Default tracing filter directive (e.g. `"info"`,
    /// `"campus_registrar=debug"`). `RUST_LOG` takes precedence when set.
    pub log_filter: String,

    /// Emit log events as JSON lines instead of the compact format.
    pub log_json: bool,
}

impl RegistrarConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let log_filter =
            std::env::var("REGISTRAR_LOG_FILTER").unwrap_or_else(|_| "info".to_string());
        let log_json = parse_env_bool("REGISTRAR_LOG_JSON", false);

        Self {
            log_filter,
            log_json,
        }
    }
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            log_json: false,
        }
    }
}

/// Parses an environment variable as a boolean. Accepts `"true"`, `"1"`,
/// `"false"`, `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_env_bool(key: &str, default: bool) -> bool {
    match std::env::var(key).ok().as_deref() {
        Some("true") | Some("TRUE") | Some("1") => true,
        Some("false") | Some("FALSE") | Some("0") => false,
        _ => default,
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_compact_info() {
        let config = RegistrarConfig::default();
        assert_eq!(config.log_filter, "info");
        assert!(!config.log_json);
    }

    #[test]
    fn parse_env_bool_falls_back_on_garbage() {
        assert!(parse_env_bool("REGISTRAR_TEST_UNSET_KEY", true));
        assert!(!parse_env_bool("REGISTRAR_TEST_UNSET_KEY", false));
    }
}
