//! Carrier icon table.
//!
//! Maps a carrier name's first letter to one of twelve letter-specific icons,
//! with a generic network icon for everything else. This is a heuristic brand
//! mapping, not a correctness-critical one: unrelated carriers sharing an
//! initial collide by design. Every input, including the empty string,
//! resolves to a defined icon.

use serde::{Deserialize, Serialize};

/// Status-bar icon for a carrier name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarrierIcon {
    CarrierA,
    CarrierD,
    CarrierI,
    CarrierK,
    CarrierL,
    CarrierP,
    CarrierR,
    CarrierS,
    CarrierT,
    CarrierU,
    CarrierV,
    CarrierY,
    Network,
}

impl CarrierIcon {
    /// Resolve the icon for a carrier display name.
    ///
    /// Only the first character matters, case-folded to uppercase. Anything
    /// outside the twelve-letter table (other letters, digits, symbols,
    /// non-ASCII, empty names) falls back to the generic network icon.
    pub fn for_name(name: &str) -> CarrierIcon {
        let first = match name.chars().next() {
            Some(c) => c.to_ascii_uppercase(),
            None => return CarrierIcon::Network,
        };

        match first {
            'A' => CarrierIcon::CarrierA,
            'D' => CarrierIcon::CarrierD,
            'I' => CarrierIcon::CarrierI,
            'K' => CarrierIcon::CarrierK,
            'L' => CarrierIcon::CarrierL,
            'P' => CarrierIcon::CarrierP,
            'R' => CarrierIcon::CarrierR,
            'S' => CarrierIcon::CarrierS,
            'T' => CarrierIcon::CarrierT,
            'U' => CarrierIcon::CarrierU,
            'V' => CarrierIcon::CarrierV,
            'Y' => CarrierIcon::CarrierY,
            _ => CarrierIcon::Network,
        }
    }

    /// Icon asset name, used as the desktop notification icon hint.
    pub fn resource(&self) -> &'static str {
        match self {
            CarrierIcon::CarrierA => "ic_carrier_a",
            CarrierIcon::CarrierD => "ic_carrier_d",
            CarrierIcon::CarrierI => "ic_carrier_i",
            CarrierIcon::CarrierK => "ic_carrier_k",
            CarrierIcon::CarrierL => "ic_carrier_l",
            CarrierIcon::CarrierP => "ic_carrier_p",
            CarrierIcon::CarrierR => "ic_carrier_r",
            CarrierIcon::CarrierS => "ic_carrier_s",
            CarrierIcon::CarrierT => "ic_carrier_t",
            CarrierIcon::CarrierU => "ic_carrier_u",
            CarrierIcon::CarrierV => "ic_carrier_v",
            CarrierIcon::CarrierY => "ic_carrier_y",
            CarrierIcon::Network => "ic_network",
        }
    }
}
