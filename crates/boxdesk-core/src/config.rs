//! Configuration management for the dashboard

use crate::i18n::Locale;
use boxdesk_types::UNASSIGNED;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Host server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Backend endpoints
    #[serde(default)]
    pub api: ApiConfig,

    /// Dashboard presentation settings
    #[serde(default)]
    pub ui: UiConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Host server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the compiled browser bundle, served under `/pkg`
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
}

/// Backend endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL serving `GET /boxes`
    #[serde(default = "default_records_url")]
    pub records_url: String,

    /// Base URL serving the ticket and box update routes
    #[serde(default = "default_tickets_url")]
    pub tickets_url: String,
}

/// Dashboard presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Language shown on first load
    #[serde(default)]
    pub default_locale: Locale,

    /// Technicians offered in the assignment picker
    #[serde(default = "default_technicians")]
    pub technicians: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8080
}

fn default_assets_dir() -> String {
    "dist".to_string()
}

fn default_records_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_tickets_url() -> String {
    "http://127.0.0.1:8500".to_string()
}

fn default_technicians() -> Vec<String> {
    vec!["Magnus".to_string(), "Freja".to_string(), "Mikkel".to_string()]
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            assets_dir: default_assets_dir(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            records_url: default_records_url(),
            tickets_url: default_tickets_url(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::default(),
            technicians: default_technicians(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from an optional `config` file in the working
    /// directory and `BOXDESK_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded, parsed or validated.
    pub fn load() -> crate::Result<Self> {
        Self::load_from(None)
    }

    /// Like [`Config::load`], reading `file` instead of `config` when given
    ///
    /// Environment variables use `__` between section and key, e.g.
    /// `BOXDESK_API__RECORDS_URL`. `BOXDESK_UI__TECHNICIANS` takes a comma
    /// separated list.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded, parsed or validated.
    pub fn load_from(file: Option<&Path>) -> crate::Result<Self> {
        let file_source = match file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let config: Self = config::Config::builder()
            .add_source(file_source)
            .add_source(
                config::Environment::with_prefix("BOXDESK")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("ui.technicians")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Configuration`] describing the first problem.
    pub fn validate(&self) -> crate::Result<()> {
        for (name, url) in [
            ("api.records_url", &self.api.records_url),
            ("api.tickets_url", &self.api.tickets_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(crate::Error::configuration(format!(
                    "{name} must be an http(s) URL, got '{url}'"
                )));
            }
        }

        let mut seen = std::collections::HashSet::new();
        for technician in &self.ui.technicians {
            let name = technician.trim();
            if name.is_empty() || name == UNASSIGNED {
                return Err(crate::Error::configuration(format!(
                    "'{technician}' is not a valid technician name"
                )));
            }
            if !seen.insert(name) {
                return Err(crate::Error::configuration(format!(
                    "technician '{name}' is listed twice"
                )));
            }
        }

        Ok(())
    }
}
