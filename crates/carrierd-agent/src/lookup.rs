//! Carrier name resolution.
//!
//! Resolution order: subscription carrier name, then the legacy SIM operator
//! name, then nothing (the caller substitutes a placeholder). The permission
//! check runs first and short-circuits the whole lookup.

use carrierd_common::error::LookupError;
use carrierd_common::models::CarrierSource;

use crate::telephony::TelephonyProvider;

/// Outcome of a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCarrier {
    /// `None` means both sources were absent or blank.
    pub name: Option<String>,
    pub source: CarrierSource,
}

/// Resolve the display name of the carrier providing default mobile data.
pub fn resolve_carrier(telephony: &dyn TelephonyProvider) -> Result<ResolvedCarrier, LookupError> {
    if !telephony.has_phone_state_permission() {
        return Err(LookupError::PermissionDenied);
    }

    if let Some(sub_id) = telephony.default_data_subscription_id() {
        if let Some(info) = telephony.active_subscription_info(sub_id)? {
            if let Some(name) = non_blank(info.carrier_name) {
                return Ok(ResolvedCarrier {
                    name: Some(name),
                    source: CarrierSource::Subscription,
                });
            }
        }
    }

    if let Some(name) = non_blank(telephony.sim_operator_name()?) {
        return Ok(ResolvedCarrier {
            name: Some(name),
            source: CarrierSource::SimOperator,
        });
    }

    Ok(ResolvedCarrier {
        name: None,
        source: CarrierSource::Placeholder,
    })
}

fn non_blank(name: Option<String>) -> Option<String> {
    name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use carrierd_common::models::SubscriptionInfo;
    use crate::telephony::SimulatedTelephony;

    /// Provider that fails the test if anything beyond the permission check runs.
    struct PermissionDeniedOnly;

    impl TelephonyProvider for PermissionDeniedOnly {
        fn has_phone_state_permission(&self) -> bool {
            false
        }
        fn default_data_subscription_id(&self) -> Option<i32> {
            panic!("subscription lookup must not run without permission");
        }
        fn active_subscription_info(&self, _id: i32) -> Result<Option<SubscriptionInfo>, LookupError> {
            panic!("subscription lookup must not run without permission");
        }
        fn sim_operator_name(&self) -> Result<Option<String>, LookupError> {
            panic!("SIM lookup must not run without permission");
        }
    }

    #[test]
    fn permission_denied_short_circuits() {
        let err = resolve_carrier(&PermissionDeniedOnly).unwrap_err();
        assert!(matches!(err, LookupError::PermissionDenied));
    }

    #[test]
    fn subscription_name_wins_over_sim_operator() {
        let sim = SimulatedTelephony::new()
            .with_carrier("Rakuten")
            .with_sim_operator("docomo");
        let resolved = resolve_carrier(&sim).unwrap();
        assert_eq!(resolved.name.as_deref(), Some("Rakuten"));
        assert_eq!(resolved.source, CarrierSource::Subscription);
    }

    #[test]
    fn sim_operator_is_the_fallback() {
        let sim = SimulatedTelephony::new().with_sim_operator("docomo");
        let resolved = resolve_carrier(&sim).unwrap();
        assert_eq!(resolved.name.as_deref(), Some("docomo"));
        assert_eq!(resolved.source, CarrierSource::SimOperator);
    }

    #[test]
    fn both_sources_absent_resolves_to_placeholder() {
        let resolved = resolve_carrier(&SimulatedTelephony::new()).unwrap();
        assert_eq!(resolved.name, None);
        assert_eq!(resolved.source, CarrierSource::Placeholder);
    }

    #[test]
    fn blank_names_count_as_absent() {
        let sim = SimulatedTelephony::new()
            .with_carrier("   ")
            .with_sim_operator("au");
        let resolved = resolve_carrier(&sim).unwrap();
        assert_eq!(resolved.name.as_deref(), Some("au"));
        assert_eq!(resolved.source, CarrierSource::SimOperator);
    }

    #[test]
    fn backend_failure_surfaces_as_lookup_failed() {
        let err = resolve_carrier(&SimulatedTelephony::new().failing()).unwrap_err();
        assert!(matches!(err, LookupError::Failed(_)));
    }
}
