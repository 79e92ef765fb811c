//! Status reporting channel
//!
//! Configuration failures never abort the pass; they surface as leveled
//! messages to the external status service. Producers report through a
//! cloneable handle backed by an unbounded channel, so reporting is
//! fire-and-forget: it never blocks and never fails observably.

use serde::Serialize;
use tokio::sync::mpsc;

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    /// The whole pass is compromised (e.g. unreadable manifest)
    Emergency,
    /// A configuration step failed
    Warning,
    /// Progress and no-op notices
    Info,
}

impl StatusLevel {
    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Emergency => "emergency",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// One message for the status service
#[derive(Debug, Clone, Serialize)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub message: String,
}

/// Producer handle for status messages
#[derive(Debug, Clone)]
pub struct StatusReporter {
    tx: mpsc::UnboundedSender<StatusMessage>,
}

impl StatusReporter {
    /// Create a reporter and the receiving end its messages arrive on
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<StatusMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Report a status message
    ///
    /// A closed channel is ignored; producers cannot observe delivery.
    pub fn report(&self, level: StatusLevel, message: impl Into<String>) {
        let _ = self.tx.send(StatusMessage {
            level,
            message: message.into(),
        });
    }
}
