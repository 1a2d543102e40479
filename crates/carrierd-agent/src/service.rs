//! The carrier status service — one lookup-and-publish cycle at a time.
//!
//! Failure handling follows a fixed policy: permission denial skips the cycle
//! silently, a lookup failure publishes the localized error placeholder, and
//! a publish failure is retried exactly once with the generic network icon.

use std::sync::{Arc, Mutex};

use chrono::Utc;

use carrierd_common::config::ServiceConfig;
use carrierd_common::error::{LookupError, PublishError};
use carrierd_common::icon::CarrierIcon;
use carrierd_common::models::{CarrierSource, CarrierStatus};
use carrierd_common::notification::{ChannelSpec, Notification};
use carrierd_common::strings::Strings;

use crate::lookup::resolve_carrier;
use crate::notify::NotificationSink;
use crate::telephony::TelephonyProvider;

/// Minimal lifecycle of a status-reporting component, independent of the
/// host that schedules it.
pub trait StatusReporter: Send + Sync {
    /// One-time setup plus the first publish.
    fn on_start(&self) -> Result<(), PublishError>;

    /// One lookup-and-publish cycle.
    fn refresh(&self);

    /// Teardown — remove the published status.
    fn on_stop(&self);
}

/// Publishes the active mobile-data carrier as a persistent notification.
pub struct CarrierStatusService {
    config: ServiceConfig,
    strings: Strings,
    telephony: Arc<dyn TelephonyProvider>,
    sink: Arc<dyn NotificationSink>,
    /// Last successfully published state, read by the status portal.
    status: Mutex<Option<CarrierStatus>>,
}

impl CarrierStatusService {
    pub fn new(
        config: ServiceConfig,
        strings: Strings,
        telephony: Arc<dyn TelephonyProvider>,
        sink: Arc<dyn NotificationSink>,
    ) -> CarrierStatusService {
        CarrierStatusService {
            config,
            strings,
            telephony,
            sink,
            status: Mutex::new(None),
        }
    }

    /// Last published status, if any.
    pub fn snapshot(&self) -> Option<CarrierStatus> {
        self.status.lock().unwrap().clone()
    }

    fn channel_spec(&self) -> ChannelSpec {
        ChannelSpec::silent_status(
            &self.config.channel_id,
            &self.strings.channel_name,
            &self.strings.channel_description,
        )
    }

    /// Publish `text`, retrying once with the generic network icon if the
    /// sink rejects the first attempt.
    fn publish_with_fallback(&self, text: &str, source: CarrierSource) {
        let icon = CarrierIcon::for_name(text);
        let notification = Notification::status(
            self.config.notification_id,
            &self.config.channel_id,
            icon,
            &self.strings.notification_title,
            text,
        );

        match self.sink.publish(&notification) {
            Ok(()) => self.record(text, icon, source),
            Err(e) => {
                tracing::warn!(error = %e, "notification publish failed, retrying with fallback icon");
                let fallback = Notification {
                    icon: CarrierIcon::Network,
                    ..notification
                };
                match self.sink.publish(&fallback) {
                    Ok(()) => self.record(text, CarrierIcon::Network, source),
                    Err(e) => {
                        tracing::error!(error = %e, "notification publish failed after retry");
                    }
                }
            }
        }
    }

    fn record(&self, text: &str, icon: CarrierIcon, source: CarrierSource) {
        *self.status.lock().unwrap() = Some(CarrierStatus {
            carrier: text.to_string(),
            icon,
            source,
            refreshed_at: Utc::now(),
        });
    }
}

impl StatusReporter for CarrierStatusService {
    fn on_start(&self) -> Result<(), PublishError> {
        self.sink.create_channel(&self.channel_spec())?;
        tracing::info!(
            channel = %self.config.channel_id,
            notification_id = self.config.notification_id,
            "carrier status service started"
        );
        self.refresh();
        Ok(())
    }

    fn refresh(&self) {
        match resolve_carrier(self.telephony.as_ref()) {
            Ok(resolved) => match resolved.name {
                Some(name) => self.publish_with_fallback(&name, resolved.source),
                None => {
                    let text = self.strings.unknown_carrier.clone();
                    self.publish_with_fallback(&text, CarrierSource::Placeholder);
                }
            },
            Err(LookupError::PermissionDenied) => {
                tracing::debug!("phone state permission denied, skipping refresh");
            }
            Err(e) => {
                tracing::error!(error = %e, "carrier lookup failed");
                let text = self.strings.error_getting_carrier.clone();
                self.publish_with_fallback(&text, CarrierSource::Placeholder);
            }
        }
    }

    fn on_stop(&self) {
        self.sink.dismiss(self.config.notification_id);
        *self.status.lock().unwrap() = None;
        tracing::info!("carrier status service stopped");
    }
}
