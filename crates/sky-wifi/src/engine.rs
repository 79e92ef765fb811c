//! The configuration pass
//!
//! One pass per process lifetime: load the manifest, assign roles, then
//! drive every card through its configurator strictly sequentially in
//! manifest order. External commands mutate shared kernel state, so no
//! two cards are ever configured concurrently, and each invocation blocks
//! the pass with no timeout.

use sky_manifest::{assign_roles, load_manifest, Role};
use tracing::{error, info};

use crate::command::CommandRunner;
use crate::hotspot::{configure_hotspot_card, HotspotOutcome, HotspotState};
use crate::link::configure_link_card;
use crate::settings::WifiSettings;
use crate::status::{StatusLevel, StatusReporter};
use crate::step::StepOutcome;

/// Per-card outcome of the pass
#[derive(Debug, Clone)]
pub enum CardReport {
    Hotspot {
        card: String,
        outcome: HotspotOutcome,
        steps: Vec<StepOutcome>,
    },
    BroadcastLink {
        card: String,
        steps: Vec<StepOutcome>,
    },
}

/// Outcome of one configuration pass
#[derive(Debug, Clone)]
pub struct PassReport {
    /// Final hotspot state
    pub hotspot: HotspotState,
    /// Broadcast cards recorded active, in manifest order
    pub broadcast_cards: Vec<String>,
    /// One entry per processed card, in manifest order
    pub cards: Vec<CardReport>,
}

impl PassReport {
    fn empty(hotspot: HotspotState) -> Self {
        Self {
            hotspot,
            broadcast_cards: Vec::new(),
            cards: Vec::new(),
        }
    }
}

/// Drives one configuration pass over the detected cards
pub struct WifiConfigurator<R> {
    settings: WifiSettings,
    runner: R,
    status: StatusReporter,
    hotspot: HotspotState,
}

impl<R: CommandRunner> WifiConfigurator<R> {
    /// Create a configurator for one pass
    pub fn new(settings: WifiSettings, runner: R, status: StatusReporter) -> Self {
        Self {
            settings,
            runner,
            status,
            hotspot: HotspotState::new(),
        }
    }

    /// Run the configuration pass
    ///
    /// Consumes the configurator: a process performs at most one pass.
    /// Never fails; a bad manifest yields an empty report and one
    /// EMERGENCY status message, and per-card failures surface through
    /// the status channel while the pass runs to completion.
    pub async fn run(mut self) -> PassReport {
        let manifest = match load_manifest(&self.settings.manifest_path) {
            Ok(manifest) => manifest,
            Err(err) => {
                error!(%err, "wifi manifest processing failed");
                self.status
                    .report(StatusLevel::Emergency, "wifi manifest processing failed");
                return PassReport::empty(self.hotspot);
            }
        };

        let assignment = assign_roles(&manifest.cards);
        info!(
            broadcast = assignment.broadcast_links.len(),
            hotspot_candidates = assignment.hotspot_candidates.len(),
            hotspot_kind = manifest.hotspot.name(),
            "processing wifi manifest"
        );

        let mut report = PassReport::empty(self.hotspot);
        for card in &manifest.cards {
            match card.capabilities.role() {
                Role::Hotspot => {
                    let (outcome, steps) = configure_hotspot_card(
                        &self.runner,
                        &self.status,
                        &self.settings,
                        &mut self.hotspot,
                        card,
                    )
                    .await;
                    info!(card = %card.name, %outcome, "hotspot card processed");
                    report.cards.push(CardReport::Hotspot {
                        card: card.name.clone(),
                        outcome,
                        steps,
                    });
                }
                Role::BroadcastLink => {
                    let steps =
                        configure_link_card(&self.runner, &self.status, &self.settings, card)
                            .await;
                    report.broadcast_cards.push(card.name.clone());
                    report.cards.push(CardReport::BroadcastLink {
                        card: card.name.clone(),
                        steps,
                    });
                }
            }
        }

        report.hotspot = self.hotspot;
        report
    }
}
