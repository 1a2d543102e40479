//! Notification sinks.
//!
//! The service only sees the `NotificationSink` trait; behind it sit the real
//! desktop sink (`notify-send`), a log-only sink for `--dry-run`, and an
//! in-memory sink for tests.

use std::process::Command;

use carrierd_common::error::PublishError;
use carrierd_common::notification::{ChannelSpec, Notification};

/// Where status notifications go.
pub trait NotificationSink: Send + Sync {
    /// Register the channel notifications will be published under.
    fn create_channel(&self, spec: &ChannelSpec) -> Result<(), PublishError>;

    /// Publish a notification, replacing any previous one with the same id.
    fn publish(&self, notification: &Notification) -> Result<(), PublishError>;

    /// Best-effort removal of a published notification.
    fn dismiss(&self, _id: u32) {}
}

/// Sends real desktop notifications through `notify-send`.
///
/// The notification id doubles as libnotify's replace-id, so each publish
/// updates the existing entry in place instead of stacking a new one.
pub struct DesktopSink;

impl NotificationSink for DesktopSink {
    fn create_channel(&self, spec: &ChannelSpec) -> Result<(), PublishError> {
        // No desktop equivalent of channel registration; the channel id rides
        // along on each notification as a synchronous-update hint instead.
        tracing::debug!(channel = %spec.id, importance = ?spec.importance, "notification channel registered");
        Ok(())
    }

    fn publish(&self, n: &Notification) -> Result<(), PublishError> {
        let status = Command::new("notify-send")
            .arg("--app-name=carrierd")
            .arg("--urgency=low")
            .arg(format!("--replace-id={}", n.id))
            .arg(format!("--icon={}", n.icon.resource()))
            .arg(format!(
                "--hint=string:x-canonical-private-synchronous:{}",
                n.channel
            ))
            .arg(&n.title)
            .arg(&n.text)
            .status()
            .map_err(|e| PublishError::Sink(format!("notify-send: {e}")))?;

        if !status.success() {
            return Err(PublishError::Sink(format!(
                "notify-send exited with {status}"
            )));
        }

        tracing::debug!(id = n.id, text = %n.text, icon = n.icon.resource(), "notification published");
        Ok(())
    }
}

/// Logs notifications instead of sending them (`--dry-run`).
pub struct LogSink;

impl NotificationSink for LogSink {
    fn create_channel(&self, spec: &ChannelSpec) -> Result<(), PublishError> {
        tracing::info!(channel = %spec.id, name = %spec.name, "dry-run: channel created");
        Ok(())
    }

    fn publish(&self, n: &Notification) -> Result<(), PublishError> {
        tracing::info!(
            id = n.id,
            icon = n.icon.resource(),
            title = %n.title,
            text = %n.text,
            "dry-run: notification"
        );
        Ok(())
    }

    fn dismiss(&self, id: u32) {
        tracing::info!(id, "dry-run: notification dismissed");
    }
}
