//! Engine settings

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Settings file missing or unreadable
    #[error("failed to read settings at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Settings file is not valid JSON
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings for one configuration pass
///
/// Every field has a default, so a partial (or absent) settings document
/// still yields a working configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiSettings {
    /// Location of the hardware manifest written by the detection tool
    #[serde(default = "default_manifest_path")]
    pub manifest_path: PathBuf,
    /// Frequency in MHz for 5 GHz capable broadcast cards
    #[serde(default = "default_5ghz_frequency")]
    pub default_5ghz_frequency: String,
    /// Frequency in MHz for 2.4 GHz only broadcast cards
    #[serde(default = "default_2ghz_frequency")]
    pub default_2ghz_frequency: String,
    /// Fixed transmit power in mBm for broadcast cards
    #[serde(default = "default_broadcast_tx_power")]
    pub broadcast_tx_power: String,
    /// Address the hotspot interface is brought up on
    #[serde(default = "default_hotspot_address")]
    pub hotspot_address: String,
    /// Fixed transmit power in mBm for the hotspot card
    #[serde(default = "default_hotspot_tx_power")]
    pub hotspot_tx_power: String,
    /// Privileged script that starts the access point daemon
    #[serde(default = "default_hotspot_script")]
    pub hotspot_script: PathBuf,
    /// Address of the external status service
    #[serde(default = "default_status_addr")]
    pub status_addr: SocketAddr,
}

fn default_manifest_path() -> PathBuf {
    PathBuf::from(sky_manifest::DEFAULT_MANIFEST_PATH)
}

fn default_5ghz_frequency() -> String {
    "5745".to_string()
}

fn default_2ghz_frequency() -> String {
    "2437".to_string()
}

fn default_broadcast_tx_power() -> String {
    "3100".to_string()
}

fn default_hotspot_address() -> String {
    "192.168.2.1".to_string()
}

fn default_hotspot_tx_power() -> String {
    "3100".to_string()
}

fn default_hotspot_script() -> PathBuf {
    PathBuf::from("/usr/local/share/skylink/wifi_hotspot.sh")
}

fn default_status_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 50000))
}

impl Default for WifiSettings {
    fn default() -> Self {
        Self {
            manifest_path: default_manifest_path(),
            default_5ghz_frequency: default_5ghz_frequency(),
            default_2ghz_frequency: default_2ghz_frequency(),
            broadcast_tx_power: default_broadcast_tx_power(),
            hotspot_address: default_hotspot_address(),
            hotspot_tx_power: default_hotspot_tx_power(),
            hotspot_script: default_hotspot_script(),
            status_addr: default_status_addr(),
        }
    }
}

impl WifiSettings {
    /// Load settings from a JSON document at `path`
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}
