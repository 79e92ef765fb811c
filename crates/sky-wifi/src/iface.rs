//! Network interface control surface
//!
//! Builds the exact argument vectors for the external tools that mutate
//! interface state: `ip` for link state and renames, `iw` for monitor
//! mode, frequency and transmit power, `ifconfig` plus the privileged
//! enablement script for the hotspot.

use crate::step::{Step, StepId};

fn step(id: StepId, program: &str, args: &[&str]) -> Step {
    Step {
        id,
        program: program.to_string(),
        args: args.iter().map(|arg| arg.to_string()).collect(),
    }
}

/// Set the interface link state down
pub fn link_down(name: &str) -> Step {
    step(StepId::LinkDown, "ip", &["link", "set", "dev", name, "down"])
}

/// Set the interface link state up
pub fn link_up(name: &str) -> Step {
    step(StepId::LinkUp, "ip", &["link", "set", "dev", name, "up"])
}

/// Rename the interface
pub fn rename(name: &str, new_name: &str) -> Step {
    step(StepId::Rename, "ip", &["link", "set", name, "name", new_name])
}

/// Put the interface into monitor mode for frame injection
pub fn monitor_mode(name: &str) -> Step {
    step(
        StepId::MonitorMode,
        "iw",
        &["dev", name, "set", "monitor", "otherbss"],
    )
}

/// Set the operating frequency in MHz
pub fn frequency(name: &str, freq: &str) -> Step {
    step(StepId::Frequency, "iw", &["dev", name, "set", "freq", freq])
}

/// Set a fixed transmit power in mBm
pub fn tx_power(name: &str, power: &str) -> Step {
    step(
        StepId::TxPower,
        "iw",
        &["dev", name, "set", "txpower", "fixed", power],
    )
}

/// Bring the hotspot interface up on its fixed address
pub fn hotspot_address(name: &str, address: &str) -> Step {
    step(StepId::HotspotAddress, "ifconfig", &[name, address, "up"])
}

/// Invoke the privileged hotspot enablement script
pub fn hotspot_enable(script: &str, band: &str, channel: &str, name: &str, power: &str) -> Step {
    step(
        StepId::HotspotEnable,
        "/bin/bash",
        &[script, band, channel, name, power],
    )
}
