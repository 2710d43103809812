//! Display strings for the two supported locales
//!
//! Lookups go through [`Translator`], which is created from an explicit
//! [`Locale`] and handed to whatever renders text. A key without an entry in
//! the active catalog resolves to its dotted path, so a missing translation
//! stays visible on screen instead of rendering blank.

mod da;
mod en;
mod keys;

pub use keys::MessageKey;

use boxdesk_types::Status;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Supported display languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Danish
    Da,
}

impl Locale {
    /// Every supported locale in toggle order
    pub const ALL: [Self; 2] = [Self::En, Self::Da];

    /// Short language code
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Da => "da",
        }
    }

    /// The other locale
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::En => Self::Da,
            Self::Da => Self::En,
        }
    }

    /// Parse a language tag such as `da`, `DA` or `da-DK`
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.split(['-', '_']).next().unwrap_or_default() {
            "en" => Some(Self::En),
            "da" => Some(Self::Da),
            _ => None,
        }
    }

    const fn catalog(self) -> &'static [(MessageKey, &'static str)] {
        match self {
            Self::En => en::CATALOG,
            Self::Da => da::CATALOG,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw catalog lookup without the key fallback
#[must_use]
pub fn lookup(locale: Locale, key: MessageKey) -> Option<&'static str> {
    locale
        .catalog()
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, text)| *text)
}

/// Resolves message keys for one locale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    /// Create a translator for `locale`
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Active locale
    #[must_use]
    pub const fn locale(self) -> Locale {
        self.locale
    }

    /// Display string for `key`, or its dotted path when the catalog lacks it
    #[must_use]
    pub fn t(self, key: MessageKey) -> &'static str {
        lookup(self.locale, key).unwrap_or_else(|| {
            warn!(key = key.path(), locale = %self.locale, "translation missing");
            key.path()
        })
    }

    /// Display string for a dotted path computed at runtime; unknown paths
    /// come back unchanged
    #[must_use]
    pub fn t_path<'a>(self, path: &'a str) -> &'a str {
        MessageKey::from_path(path).map_or_else(
            || {
                warn!(key = path, locale = %self.locale, "translation key not found");
                path
            },
            |key| self.t(key),
        )
    }

    /// Display label of a status
    #[must_use]
    pub fn status(self, status: Status) -> &'static str {
        self.t(MessageKey::for_status(status))
    }

    /// "1 device", "3 devices"
    #[must_use]
    pub fn device_count(self, count: usize) -> String {
        let noun = if count == 1 {
            MessageKey::BoxDeviceCountSingle
        } else {
            MessageKey::BoxDeviceCountMultiple
        };
        format!("{count} {}", self.t(noun))
    }
}

impl From<Locale> for Translator {
    fn from(locale: Locale) -> Self {
        Self::new(locale)
    }
}
