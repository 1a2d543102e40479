//! Service configuration.
//!
//! All fields have defaults, so an empty TOML file (or none at all) yields a
//! working configuration. CLI flags may override individual fields on top.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::strings::Strings;

/// Notification identity and refresh cadence of the status service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Fixed id of the single status notification.
    pub notification_id: u32,
    /// Notification channel id.
    pub channel_id: String,
    /// Refresh interval in milliseconds.
    pub refresh_interval_ms: u64,
    /// Locale tag for built-in display strings.
    pub locale: String,
    /// Full display-string override; takes precedence over `locale`.
    pub strings: Option<Strings>,
}

impl Default for ServiceConfig {
    fn default() -> ServiceConfig {
        ServiceConfig {
            notification_id: 1,
            channel_id: "carrier_info".into(),
            refresh_interval_ms: 5000,
            locale: "en".into(),
            strings: None,
        }
    }
}

impl ServiceConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }

    /// Display strings for this configuration.
    pub fn display_strings(&self) -> Strings {
        self.strings
            .clone()
            .unwrap_or_else(|| Strings::for_locale(&self.locale))
    }
}
