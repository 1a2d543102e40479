//! Telephony providers — where carrier names come from.
//!
//! `ModemManagerTelephony` shells out to `mmcli` (JSON output) on real
//! hardware. `SimulatedTelephony` fakes a single modem for local development
//! and tests.

use std::process::Command;

use carrierd_common::error::LookupError;
use carrierd_common::models::SubscriptionInfo;

/// Read access to the platform's subscription and SIM state.
pub trait TelephonyProvider: Send + Sync {
    /// Whether the process may read phone state at all. When this returns
    /// false, no other method is called.
    fn has_phone_state_permission(&self) -> bool;

    /// Id of the subscription currently providing mobile data.
    fn default_data_subscription_id(&self) -> Option<i32>;

    /// Subscription metadata for `id`, if that subscription is active.
    fn active_subscription_info(&self, id: i32) -> Result<Option<SubscriptionInfo>, LookupError>;

    /// Operator name from the SIM itself, the legacy fallback source.
    fn sim_operator_name(&self) -> Result<Option<String>, LookupError>;
}

// ── ModemManager backend ────────────────────────────────────────────

/// Real backend reading modem state from ModemManager via `mmcli -J`.
pub struct ModemManagerTelephony;

impl ModemManagerTelephony {
    pub fn new() -> ModemManagerTelephony {
        ModemManagerTelephony
    }

    fn mmcli_json(args: &[&str]) -> Result<serde_json::Value, LookupError> {
        let output = Command::new("mmcli")
            .args(args)
            .arg("-J")
            .output()
            .map_err(|e| LookupError::Failed(format!("mmcli: {e}")))?;

        if !output.status.success() {
            return Err(LookupError::Failed(format!(
                "mmcli {} exited with {}",
                args.join(" "),
                output.status
            )));
        }

        serde_json::from_slice(&output.stdout)
            .map_err(|e| LookupError::Failed(format!("mmcli output: {e}")))
    }

    /// Index of the first modem ModemManager reports. Multi-modem systems are
    /// rare enough on desktops that the first one stands in for the
    /// default-data subscription.
    fn first_modem_index() -> Result<Option<i32>, LookupError> {
        let v = Self::mmcli_json(&["-L"])?;
        // Entries are D-Bus paths like "/org/freedesktop/ModemManager1/Modem/0"
        Ok(v.get("modem-list")
            .and_then(|l| l.as_array())
            .and_then(|l| l.first())
            .and_then(|p| p.as_str())
            .and_then(|p| p.rsplit('/').next())
            .and_then(|n| n.parse().ok()))
    }
}

/// mmcli prints "--" for unset string fields.
fn mm_string(v: Option<&serde_json::Value>) -> Option<String> {
    v.and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "--")
        .map(String::from)
}

impl TelephonyProvider for ModemManagerTelephony {
    fn has_phone_state_permission(&self) -> bool {
        // The desktop analog of READ_PHONE_STATE: can we talk to the
        // ModemManager bus at all?
        Command::new("mmcli")
            .arg("-L")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    fn default_data_subscription_id(&self) -> Option<i32> {
        Self::first_modem_index().ok().flatten()
    }

    fn active_subscription_info(&self, id: i32) -> Result<Option<SubscriptionInfo>, LookupError> {
        let v = Self::mmcli_json(&["-m", &id.to_string()])?;
        let carrier_name = mm_string(v.pointer("/modem/3gpp/operator-name"));
        Ok(Some(SubscriptionInfo {
            subscription_id: id,
            carrier_name,
        }))
    }

    fn sim_operator_name(&self) -> Result<Option<String>, LookupError> {
        let Some(modem) = Self::first_modem_index()? else {
            return Ok(None);
        };
        let v = Self::mmcli_json(&["-m", &modem.to_string()])?;
        let Some(sim_path) = v.pointer("/modem/generic/sim").and_then(|p| p.as_str()) else {
            return Ok(None);
        };
        let Some(sim_index) = sim_path.rsplit('/').next() else {
            return Ok(None);
        };
        let sim = Self::mmcli_json(&["-i", sim_index])?;
        Ok(mm_string(sim.pointer("/sim/properties/operator-name")))
    }
}

// ── Simulated backend ───────────────────────────────────────────────

/// Fake telephony backend for `--simulate` mode and tests.
pub struct SimulatedTelephony {
    permission: bool,
    subscription_id: i32,
    carrier_name: Option<String>,
    sim_operator: Option<String>,
    fail_lookup: bool,
}

impl SimulatedTelephony {
    /// A permitted modem with no carrier information at all.
    pub fn new() -> SimulatedTelephony {
        SimulatedTelephony {
            permission: true,
            subscription_id: 1,
            carrier_name: None,
            sim_operator: None,
            fail_lookup: false,
        }
    }

    /// Simulated modem with a randomly chosen carrier, for `--simulate` runs.
    pub fn random() -> SimulatedTelephony {
        use rand::seq::IndexedRandom;

        const CARRIERS: &[&str] = &[
            "T-Mobile", "Vodafone", "SoftBank", "docomo", "au", "Rakuten", "KDDI", "Verizon",
        ];
        let mut rng = rand::rng();
        let carrier = CARRIERS.choose(&mut rng).copied().unwrap_or("T-Mobile");

        let mut sim = SimulatedTelephony::new();
        sim.carrier_name = Some(carrier.to_string());
        sim
    }
}

#[cfg(test)]
impl SimulatedTelephony {
    pub fn with_carrier(mut self, name: &str) -> SimulatedTelephony {
        self.carrier_name = Some(name.into());
        self
    }

    pub fn with_sim_operator(mut self, name: &str) -> SimulatedTelephony {
        self.sim_operator = Some(name.into());
        self
    }

    pub fn without_permission(mut self) -> SimulatedTelephony {
        self.permission = false;
        self
    }

    pub fn failing(mut self) -> SimulatedTelephony {
        self.fail_lookup = true;
        self
    }
}

impl TelephonyProvider for SimulatedTelephony {
    fn has_phone_state_permission(&self) -> bool {
        self.permission
    }

    fn default_data_subscription_id(&self) -> Option<i32> {
        Some(self.subscription_id)
    }

    fn active_subscription_info(&self, id: i32) -> Result<Option<SubscriptionInfo>, LookupError> {
        if self.fail_lookup {
            return Err(LookupError::Failed("simulated backend failure".into()));
        }
        if id != self.subscription_id {
            return Ok(None);
        }
        Ok(Some(SubscriptionInfo {
            subscription_id: id,
            carrier_name: self.carrier_name.clone(),
        }))
    }

    fn sim_operator_name(&self) -> Result<Option<String>, LookupError> {
        if self.fail_lookup {
            return Err(LookupError::Failed("simulated backend failure".into()));
        }
        Ok(self.sim_operator.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulated_modem_reports_its_carrier() {
        let sim = SimulatedTelephony::new().with_carrier("docomo");
        let info = sim.active_subscription_info(1).unwrap().unwrap();
        assert_eq!(info.carrier_name.as_deref(), Some("docomo"));
    }

    #[test]
    fn simulated_modem_unknown_subscription_is_absent() {
        let sim = SimulatedTelephony::new().with_carrier("docomo");
        assert!(sim.active_subscription_info(99).unwrap().is_none());
    }

    #[test]
    fn random_simulated_carrier_always_present() {
        let sim = SimulatedTelephony::random();
        let info = sim.active_subscription_info(1).unwrap().unwrap();
        assert!(info.carrier_name.is_some());
    }

    #[test]
    fn mm_string_filters_mmcli_placeholders() {
        let present = serde_json::json!("Rakuten");
        let unset = serde_json::json!("--");
        let blank = serde_json::json!("   ");
        assert_eq!(mm_string(Some(&present)).as_deref(), Some("Rakuten"));
        assert_eq!(mm_string(Some(&unset)), None);
        assert_eq!(mm_string(Some(&blank)), None);
        assert_eq!(mm_string(None), None);
    }
}
