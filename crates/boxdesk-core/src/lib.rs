//! Core services for the boxdesk technician dashboard
//!
//! Configuration, logging setup, the translation catalog and the box filter.
//! Nothing in here performs network I/O.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod config;
pub mod error;
pub mod filter;
pub mod i18n;

// Re-export commonly used types
pub use config::{ApiConfig, Config, LoggingConfig, ServerConfig, UiConfig};
pub use error::{Error, Result};
pub use filter::{BoxFilter, TechnicianFilter, filter_boxes};
pub use i18n::{Locale, MessageKey, Translator};

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over the configured level. The format is JSON
/// unless `config.format` is `text` or `pretty`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format.to_ascii_lowercase().as_str() {
        "text" | "pretty" => registry.with(fmt::layer()).try_init(),
        _ => registry.with(fmt::layer().json()).try_init(),
    };

    result.map_err(|e| Error::Logging(e.to_string()))
}
