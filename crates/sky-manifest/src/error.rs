//! Error types for manifest processing

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the hardware manifest
///
/// Any of these invalidates the whole document: the configuration pass
/// never sees a partial card list.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Manifest document missing or unreadable
    #[error("failed to read manifest at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Document is not valid JSON or a required field is absent
    #[error("failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),

    /// A card entry has an empty interface name
    #[error("card entry {index} has an empty interface name")]
    EmptyName { index: usize },
}
