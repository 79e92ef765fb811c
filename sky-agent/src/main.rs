//! Skylink Wifi Configuration Agent
//!
//! Headless host process for the air unit: reads the hardware manifest
//! left by the detection tool, assigns each wifi card its role, configures
//! the hotspot and broadcast link cards, and relays status messages to the
//! external status service. Runs one configuration pass and exits.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use sky_wifi::{StatusMessage, StatusReporter, SystemRunner, WifiConfigurator, WifiSettings};
use tokio::net::UdpSocket;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_SETTINGS_PATH: &str = "/etc/skylink/wifi.json";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sky_agent=info,sky_wifi=info,sky_manifest=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skylink wifi configuration agent");

    let settings_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH));
    let settings = match WifiSettings::load(&settings_path) {
        Ok(settings) => settings,
        Err(err) => {
            warn!(path = %settings_path.display(), %err, "using default wifi settings");
            WifiSettings::default()
        }
    };

    let status_addr = settings.status_addr;
    let (status, status_rx) = StatusReporter::channel();
    let relay = tokio::spawn(relay_status(status_rx, status_addr));

    let report = WifiConfigurator::new(settings, SystemRunner::new(), status)
        .run()
        .await;

    info!(
        broadcast_cards = report.broadcast_cards.len(),
        hotspot_configured = report.hotspot.is_configured(),
        "wifi configuration pass complete"
    );

    // The configurator owned the last reporter handle; the relay drains
    // whatever is queued and then stops.
    relay.await?;
    Ok(())
}

/// Forward status messages to the external status service as JSON datagrams
///
/// Producers never block on delivery; messages that cannot be sent are
/// logged and dropped.
async fn relay_status(mut rx: UnboundedReceiver<StatusMessage>, addr: SocketAddr) {
    let socket = match UdpSocket::bind("0.0.0.0:0").await {
        Ok(socket) => socket,
        Err(err) => {
            warn!(%err, "status relay unavailable, dropping status messages");
            while rx.recv().await.is_some() {}
            return;
        }
    };

    while let Some(message) = rx.recv().await {
        match serde_json::to_vec(&message) {
            Ok(datagram) => {
                if let Err(err) = socket.send_to(&datagram, addr).await {
                    warn!(%err, "failed to relay status message");
                }
            }
            Err(err) => warn!(%err, "failed to encode status message"),
        }
    }
}
