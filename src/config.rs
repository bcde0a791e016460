//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `STORE_PATH` - JSON file seeding and persisting the document store.
//!   When unset the store lives in memory only.
//! - `ACTIVE_WINDOW_DAYS` - Days before now that count as recent activity
//!   (default: 30, range: 1-3650)
//! - `UNSPECIFIED_LABEL` - Grouping key for records without a grade or
//!   teacher (default: `unspecified`)
//!
//! ```bash
//! export STORE_PATH="./data/school.json"
//! export ACTIVE_WINDOW_DAYS=14
//! ```

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::application::services::ReportSettings;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub store_path: Option<PathBuf>,
    pub active_window_days: u32,
    pub unspecified_label: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `ACTIVE_WINDOW_DAYS` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let store_path = env::var("STORE_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let active_window_days = match env::var("ACTIVE_WINDOW_DAYS") {
            Ok(v) => v
                .trim()
                .parse()
                .with_context(|| format!("ACTIVE_WINDOW_DAYS must be a number, got '{v}'"))?,
            Err(_) => 30,
        };

        let unspecified_label =
            env::var("UNSPECIFIED_LABEL").unwrap_or_else(|_| "unspecified".to_string());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            store_path,
            active_window_days,
            unspecified_label,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `active_window_days` is outside 1-3650
    /// - `unspecified_label` is blank
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !(1..=3650).contains(&self.active_window_days) {
            anyhow::bail!(
                "ACTIVE_WINDOW_DAYS must be between 1 and 3650, got {}",
                self.active_window_days
            );
        }

        if self.unspecified_label.trim().is_empty() {
            anyhow::bail!("UNSPECIFIED_LABEL must not be empty");
        }

        Ok(())
    }

    /// Report settings derived from this configuration.
    pub fn report_settings(&self) -> ReportSettings {
        ReportSettings {
            window_days: self.active_window_days,
            unspecified_label: self.unspecified_label.clone(),
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        if let Some(ref path) = self.store_path {
            tracing::info!("  Store file: {}", path.display());
        } else {
            tracing::info!("  Store file: none (in-memory only)");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Active window: {} days", self.active_window_days);
        tracing::info!("  Unspecified label: {}", self.unspecified_label);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 6] = [
        "LISTEN",
        "RUST_LOG",
        "LOG_FORMAT",
        "STORE_PATH",
        "ACTIVE_WINDOW_DAYS",
        "UNSPECIFIED_LABEL",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            store_path: None,
            active_window_days: 30,
            unspecified_label: "unspecified".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:8080".to_string();
        config.active_window_days = 0;
        assert!(config.validate().is_err());

        config.active_window_days = 3651;
        assert!(config.validate().is_err());

        config.active_window_days = 3650;
        assert!(config.validate().is_ok());

        config.unspecified_label = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_report_settings() {
        let mut config = valid_config();
        config.active_window_days = 7;
        config.unspecified_label = "none".to_string();

        let settings = config.report_settings();
        assert_eq!(settings.window_days, 7);
        assert_eq!(settings.unspecified_label, "none");
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.store_path, None);
        assert_eq!(config.active_window_days, 30);
        assert_eq!(config.unspecified_label, "unspecified");
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_from_env() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("STORE_PATH", "/tmp/school.json");
            env::set_var("ACTIVE_WINDOW_DAYS", "14");
            env::set_var("UNSPECIFIED_LABEL", "n/a");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.store_path, Some(PathBuf::from("/tmp/school.json")));
        assert_eq!(config.active_window_days, 14);
        assert_eq!(config.unspecified_label, "n/a");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_window_days() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("ACTIVE_WINDOW_DAYS", "a month");
        }
        assert!(Config::from_env().is_err());

        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("ACTIVE_WINDOW_DAYS", "0");
        }
        assert!(load_from_env().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_store_path_is_ignored() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("STORE_PATH", "  ");
        }

        assert_eq!(Config::from_env().unwrap().store_path, None);

        clear_env();
    }
}
