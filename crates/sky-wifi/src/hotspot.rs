//! Hotspot card configuration
//!
//! At most one card may ever become the system's hotspot within a process
//! lifetime. The state tracking that is threaded through the pass
//! explicitly rather than held as ambient global state, and it is only set
//! after the full sequence succeeds: unlike broadcast links, the hotspot
//! sequence aborts on the first failing step so a half-configured hotspot
//! is never recorded.

use std::fmt;

use sky_manifest::WifiCard;
use tracing::info;

use crate::command::CommandRunner;
use crate::iface;
use crate::settings::WifiSettings;
use crate::status::{StatusLevel, StatusReporter};
use crate::step::{run_steps, StepOutcome, StepPolicy};

/// Tracks whether a hotspot has been configured during this process
///
/// Transitions false to true at most once and is never reset; retrying
/// requires a process restart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HotspotState {
    configured: bool,
}

impl HotspotState {
    /// Create the initial (unconfigured) state
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a hotspot has been fully configured
    pub fn is_configured(&self) -> bool {
        self.configured
    }
}

/// Result of one hotspot configuration attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotspotOutcome {
    /// A hotspot already exists; nothing was invoked for this card
    AlreadyConfigured,
    /// Bringing the interface up on its address failed
    AddressFailed,
    /// The enablement script failed
    EnableFailed,
    /// The card is now the system's hotspot
    Configured,
}

impl HotspotOutcome {
    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::AlreadyConfigured => "already-configured",
            Self::AddressFailed => "address-failed",
            Self::EnableFailed => "enable-failed",
            Self::Configured => "configured",
        }
    }
}

impl fmt::Display for HotspotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Select the hotspot band and channel for a card
///
/// 5 GHz capable cards get band "a" channel "165", everything else band
/// "g" channel "11".
fn band_and_channel(card: &WifiCard) -> (&'static str, &'static str) {
    if card.capabilities.supports_5ghz {
        ("a", "165")
    } else {
        ("g", "11")
    }
}

/// Configure one hotspot candidate card
///
/// The first candidate to complete the sequence wins; every later
/// candidate is an INFO-level no-op. A card without hotspot support is
/// reported but still attempted.
pub async fn configure_hotspot_card<R: CommandRunner>(
    runner: &R,
    status: &StatusReporter,
    settings: &WifiSettings,
    state: &mut HotspotState,
    card: &WifiCard,
) -> (HotspotOutcome, Vec<StepOutcome>) {
    if state.configured {
        info!(card = %card.name, "hotspot already configured with another card");
        status.report(
            StatusLevel::Info,
            format!("wifi hotspot already configured, skipping {}", card.name),
        );
        return (HotspotOutcome::AlreadyConfigured, Vec::new());
    }

    if !card.capabilities.supports_hotspot {
        status.report(
            StatusLevel::Info,
            format!(
                "wifi hotspot not supported on {} cards ({})",
                card.card_type, card.name
            ),
        );
    }

    let up = vec![iface::hotspot_address(&card.name, &settings.hotspot_address)];
    let mut outcomes = run_steps(runner, status, &card.name, up, StepPolicy::AbortOnFailure).await;
    if outcomes.iter().any(|outcome| !outcome.ok) {
        return (HotspotOutcome::AddressFailed, outcomes);
    }

    let (band, channel) = band_and_channel(card);
    info!(card = %card.name, band, channel, "selected hotspot band");
    status.report(
        StatusLevel::Info,
        format!(
            "wifi hotspot on {} using band {band}, channel {channel}",
            card.name
        ),
    );

    let script = settings.hotspot_script.to_string_lossy();
    let enable = vec![iface::hotspot_enable(
        &script,
        band,
        channel,
        &card.name,
        &settings.hotspot_tx_power,
    )];
    let enabled = run_steps(runner, status, &card.name, enable, StepPolicy::AbortOnFailure).await;
    let ok = enabled.iter().all(|outcome| outcome.ok);
    outcomes.extend(enabled);

    if !ok {
        return (HotspotOutcome::EnableFailed, outcomes);
    }

    state.configured = true;
    (HotspotOutcome::Configured, outcomes)
}
