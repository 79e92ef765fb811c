//! Manifest document loading
//!
//! The detection tool leaves a JSON manifest at a well-known location
//! describing every wifi card it found. Loading either yields the complete
//! card list or fails as a whole; the configuration pass never works from
//! a partially parsed document.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::card::WifiCard;
use crate::error::ManifestError;

/// Where the detection tool writes the manifest
pub const DEFAULT_MANIFEST_PATH: &str = "/tmp/wifi_manifest";

/// Hotspot flavor requested by the manifest
///
/// Carried through for reporting; the configuration pass itself selects
/// the hotspot card by capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HotspotKind {
    Internal,
    External,
    #[serde(other)]
    None,
}

impl HotspotKind {
    /// Get the manifest string for this hotspot kind
    pub fn name(&self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::External => "external",
            Self::None => "none",
        }
    }
}

/// The parsed hardware manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiManifest {
    /// Requested hotspot flavor
    pub hotspot: HotspotKind,
    /// Detected cards, in document order
    pub cards: Vec<WifiCard>,
}

/// Load and validate the manifest document at `path`
pub fn load_manifest(path: &Path) -> Result<WifiManifest, ManifestError> {
    let file = File::open(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let manifest: WifiManifest = serde_json::from_reader(BufReader::new(file))?;
    let manifest = validate(manifest)?;

    info!(
        cards = manifest.cards.len(),
        hotspot = manifest.hotspot.name(),
        "loaded wifi manifest"
    );
    Ok(manifest)
}

fn validate(manifest: WifiManifest) -> Result<WifiManifest, ManifestError> {
    if let Some(index) = manifest.cards.iter().position(|card| card.name.is_empty()) {
        return Err(ManifestError::EmptyName { index });
    }
    Ok(manifest)
}
