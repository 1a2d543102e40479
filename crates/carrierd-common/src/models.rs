//! Carrier and subscription models.
//!
//! These types flow between the telephony providers (which produce them) and
//! the status service and portal (which consume them).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::icon::CarrierIcon;

/// Metadata for one mobile subscription (SIM/eSIM profile).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionInfo {
    pub subscription_id: i32,
    /// Carrier display name, absent when the network has not reported one.
    pub carrier_name: Option<String>,
}

/// Where a displayed carrier name came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarrierSource {
    /// Carrier name of the default-data subscription.
    Subscription,
    /// Legacy SIM operator name fallback.
    SimOperator,
    /// Neither source answered; a localized placeholder was shown.
    Placeholder,
}

/// The last published carrier status, surfaced by the status portal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarrierStatus {
    pub carrier: String,
    pub icon: CarrierIcon,
    pub source: CarrierSource,
    pub refreshed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carrier_source_uses_snake_case_tags() {
        assert_eq!(
            serde_json::to_string(&CarrierSource::SimOperator).unwrap(),
            "\"sim_operator\""
        );
        let back: CarrierSource = serde_json::from_str("\"subscription\"").unwrap();
        assert_eq!(back, CarrierSource::Subscription);
    }

    #[test]
    fn carrier_status_round_trip() {
        let status = CarrierStatus {
            carrier: "docomo".into(),
            icon: CarrierIcon::CarrierD,
            source: CarrierSource::Subscription,
            refreshed_at: Utc::now(),
        };

        let json = serde_json::to_string(&status).unwrap();
        let back: CarrierStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back.carrier, "docomo");
        assert_eq!(back.icon, CarrierIcon::CarrierD);
        assert_eq!(back.source, CarrierSource::Subscription);
    }
}
