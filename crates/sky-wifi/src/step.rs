//! Configuration step model
//!
//! Each card is configured by an ordered sequence of steps, every step one
//! external command invocation. The failure policy is an explicit property
//! of the sequence, not of the control flow that runs it.

use std::fmt;

use tracing::{debug, warn};

use crate::command::CommandRunner;
use crate::status::{StatusLevel, StatusReporter};

/// Identifies one step of a configuration sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepId {
    LinkDown,
    MonitorMode,
    LinkUp,
    Frequency,
    TxPower,
    Rename,
    HotspotAddress,
    HotspotEnable,
}

impl StepId {
    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::LinkDown => "link-down",
            Self::MonitorMode => "monitor-mode",
            Self::LinkUp => "link-up",
            Self::Frequency => "frequency",
            Self::TxPower => "txpower",
            Self::Rename => "rename",
            Self::HotspotAddress => "hotspot-address",
            Self::HotspotEnable => "hotspot-enable",
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One external command invocation in a configuration sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub id: StepId,
    pub program: String,
    pub args: Vec<String>,
}

/// What a sequence does when a step fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPolicy {
    /// Run every remaining step regardless (broadcast links)
    ContinueOnFailure,
    /// Stop the sequence at the first failing step (hotspot)
    AbortOnFailure,
}

/// Result of one executed step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub id: StepId,
    pub ok: bool,
}

/// Run a step sequence for one card under the given policy
///
/// Every failing step is logged and reported at WARNING with the card name
/// and step identifier. Returns the outcome of each step that ran.
pub async fn run_steps<R: CommandRunner>(
    runner: &R,
    status: &StatusReporter,
    card_name: &str,
    steps: Vec<Step>,
    policy: StepPolicy,
) -> Vec<StepOutcome> {
    let mut outcomes = Vec::with_capacity(steps.len());

    for step in steps {
        debug!(card = card_name, step = %step.id, program = %step.program, "running configuration step");
        let ok = runner.run(&step.program, &step.args).await;

        if !ok {
            warn!(card = card_name, step = %step.id, "configuration step failed");
            status.report(
                StatusLevel::Warning,
                format!("{card_name}: {} step failed", step.id),
            );
        }

        outcomes.push(StepOutcome { id: step.id, ok });

        if !ok && policy == StepPolicy::AbortOnFailure {
            break;
        }
    }

    outcomes
}
