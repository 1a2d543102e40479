//! Notification model — the shapes handed to a notification sink.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::icon::CarrierIcon;

/// Channel importance tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    Low,
    Default,
    High,
}

/// Lock-screen visibility of channel content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Private,
}

/// Registration parameters for a notification channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelSpec {
    pub id: String,
    pub name: String,
    pub description: String,
    pub importance: Importance,
    pub show_badge: bool,
    pub lights: bool,
    pub vibration: bool,
    pub sound: bool,
    pub visibility: Visibility,
}

impl ChannelSpec {
    /// A silent, low-importance, publicly visible status channel.
    pub fn silent_status(id: &str, name: &str, description: &str) -> ChannelSpec {
        ChannelSpec {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            importance: Importance::Low,
            show_badge: false,
            lights: false,
            vibration: false,
            sound: false,
            visibility: Visibility::Public,
        }
    }
}

/// A single notification, published or updated in place under a fixed id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub channel: String,
    pub icon: CarrierIcon,
    pub title: String,
    pub text: String,
    /// Non-dismissible while the service runs.
    pub ongoing: bool,
    /// Updates replace the entry silently instead of re-alerting.
    pub only_alert_once: bool,
    pub show_when: bool,
    pub when: DateTime<Utc>,
}

impl Notification {
    /// A persistent status entry: ongoing, alert-once, timestamped but with
    /// the timestamp hidden.
    pub fn status(id: u32, channel: &str, icon: CarrierIcon, title: &str, text: &str) -> Notification {
        Notification {
            id,
            channel: channel.into(),
            icon,
            title: title.into(),
            text: text.into(),
            ongoing: true,
            only_alert_once: true,
            show_when: false,
            when: Utc::now(),
        }
    }
}
