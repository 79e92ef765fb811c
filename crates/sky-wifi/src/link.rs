//! Broadcast link card configuration
//!
//! Injection-capable cards carry the long-range link. Each one is driven
//! through the same ordered sequence: link down, monitor mode, link up,
//! operating frequency, fixed transmit power.

use sky_manifest::WifiCard;
use tracing::info;

use crate::command::CommandRunner;
use crate::iface;
use crate::settings::WifiSettings;
use crate::status::StatusReporter;
use crate::step::{run_steps, Step, StepOutcome, StepPolicy};

/// Build the step sequence for one broadcast link card
///
/// The frequency is the configured 5 GHz default when the card supports
/// the 5 GHz band, the 2.4 GHz default otherwise.
pub fn link_plan(settings: &WifiSettings, card: &WifiCard) -> Vec<Step> {
    let frequency = if card.capabilities.supports_5ghz {
        &settings.default_5ghz_frequency
    } else {
        &settings.default_2ghz_frequency
    };

    vec![
        iface::link_down(&card.name),
        iface::monitor_mode(&card.name),
        iface::link_up(&card.name),
        iface::frequency(&card.name, frequency),
        iface::tx_power(&card.name, &settings.broadcast_tx_power),
    ]
}

/// Configure one broadcast link card
///
/// Runs under [`StepPolicy::ContinueOnFailure`]: a failing step does not
/// stop the remaining steps, and the card is still recorded as active by
/// the caller. Failures surface through the status channel only.
pub async fn configure_link_card<R: CommandRunner>(
    runner: &R,
    status: &StatusReporter,
    settings: &WifiSettings,
    card: &WifiCard,
) -> Vec<StepOutcome> {
    info!(card = %card.name, card_type = %card.card_type, "configuring broadcast link card");
    run_steps(
        runner,
        status,
        &card.name,
        link_plan(settings, card),
        StepPolicy::ContinueOnFailure,
    )
    .await
}
