//! Wifi Card Configuration Engine
//!
//! This crate turns the hardware manifest into a working radio setup: at
//! most one card serving the local hotspot, every injection-capable card
//! configured for the long-range broadcast link.
//!
//! # Architecture
//!
//! The engine processes cards strictly sequentially in manifest order.
//! Each card is driven through an ordered sequence of [`step::Step`]s, each
//! an external command invocation through a [`CommandRunner`]. The two
//! roles run under different failure policies:
//!
//! - **Broadcast links** continue past failing steps; one bad step or card
//!   never blocks the rest.
//! - **The hotspot** aborts on the first failing step; a half-configured
//!   hotspot is never recorded as the system's hotspot.
//!
//! Failures never abort the pass or the process. Every anomaly is
//! forwarded to the external status service through [`StatusReporter`].
//!
//! # Example
//!
//! ```rust,no_run
//! use sky_wifi::{StatusReporter, SystemRunner, WifiConfigurator, WifiSettings};
//!
//! # async fn configure() {
//! let (status, _status_rx) = StatusReporter::channel();
//! let configurator =
//!     WifiConfigurator::new(WifiSettings::default(), SystemRunner::new(), status);
//! let report = configurator.run().await;
//! println!("{} broadcast card(s) active", report.broadcast_cards.len());
//! # }
//! ```

pub mod command;
pub mod engine;
pub mod hotspot;
pub mod iface;
pub mod link;
pub mod settings;
pub mod status;
pub mod step;

pub use command::{CommandRunner, SystemRunner};
pub use engine::{CardReport, PassReport, WifiConfigurator};
pub use hotspot::{HotspotOutcome, HotspotState};
pub use settings::{SettingsError, WifiSettings};
pub use status::{StatusLevel, StatusMessage, StatusReporter};
pub use step::{Step, StepId, StepOutcome, StepPolicy};
