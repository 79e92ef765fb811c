//! Detected wifi card data model

use std::fmt;

use serde::{Deserialize, Serialize};

/// Driver family of a detected wifi card
///
/// The detection tool reports the driver family as a string; anything it
/// does not recognize arrives here as [`CardType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    Ath9kHtc,
    Rtl8812au,
    Rtl8188eu,
    Mt7601,
    Ralink,
    Intel,
    Broadcom,
    #[serde(other)]
    Unknown,
}

impl CardType {
    /// Get the manifest string for this card type
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ath9kHtc => "ath9k_htc",
            Self::Rtl8812au => "rtl8812au",
            Self::Rtl8188eu => "rtl8188eu",
            Self::Mt7601 => "mt7601",
            Self::Ralink => "ralink",
            Self::Intel => "intel",
            Self::Broadcom => "broadcom",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Capability flags reported for a detected card
///
/// Immutable once loaded. Every flag is required in the manifest; a missing
/// flag is a parse error, never a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Capabilities {
    /// Card can operate on the 5 GHz band
    pub supports_5ghz: bool,
    /// Card can operate on the 2.4 GHz band
    pub supports_2ghz: bool,
    /// Card supports raw frame injection (monitor mode)
    pub supports_injection: bool,
    /// Card can host a local access point
    pub supports_hotspot: bool,
    /// Card supports RTS frames
    pub supports_rts: bool,
}

/// One detected wifi card from the hardware manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiCard {
    /// Kernel interface name (e.g. wlan0)
    pub name: String,
    /// Driver family
    #[serde(rename = "type")]
    pub card_type: CardType,
    /// Hardware address
    pub mac: String,
    /// Capability flags
    #[serde(flatten)]
    pub capabilities: Capabilities,
}
