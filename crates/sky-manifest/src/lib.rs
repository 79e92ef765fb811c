//! Wifi Hardware Manifest Library
//!
//! This crate provides the data model for detected wifi cards and parsing
//! of the hardware manifest produced by the upstream detection tool.
//!
//! Each card carries an immutable set of capability flags. A card's role in
//! the system is derived purely from those flags: injection-capable cards
//! become long-range broadcast links, the rest are hotspot candidates.
//!
//! # Example
//!
//! ```rust
//! use sky_manifest::{assign_roles, WifiManifest};
//!
//! let manifest: WifiManifest = serde_json::from_str(r#"{
//!     "hotspot": "internal",
//!     "cards": [{
//!         "name": "wlan0", "type": "ath9k_htc", "mac": "00:11:22:33:44:55",
//!         "supports_5ghz": false, "supports_2ghz": true,
//!         "supports_injection": true, "supports_hotspot": false,
//!         "supports_rts": true
//!     }]
//! }"#).unwrap();
//!
//! let assignment = assign_roles(&manifest.cards);
//! assert_eq!(assignment.broadcast_links.len(), 1);
//! ```

pub mod card;
pub mod error;
pub mod loader;
pub mod role;

pub use card::{Capabilities, CardType, WifiCard};
pub use error::ManifestError;
pub use loader::{load_manifest, HotspotKind, WifiManifest, DEFAULT_MANIFEST_PATH};
pub use role::{assign_roles, Role, RoleAssignment};
