//! Card role assignment
//!
//! A card's role follows from its capabilities alone: injection-capable
//! cards carry the long-range broadcast link, everything else is a
//! candidate for the local hotspot.

use crate::card::{Capabilities, WifiCard};

/// Role a card plays in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Candidate for the local access point
    Hotspot,
    /// Long-range frame-injection broadcast link
    BroadcastLink,
}

impl Role {
    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hotspot => "hotspot",
            Self::BroadcastLink => "broadcast-link",
        }
    }
}

impl Capabilities {
    /// Derive the role for a card with these capabilities
    pub fn role(&self) -> Role {
        if self.supports_injection {
            Role::BroadcastLink
        } else {
            Role::Hotspot
        }
    }
}

/// Cards partitioned by role, both halves in manifest order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoleAssignment {
    pub hotspot_candidates: Vec<WifiCard>,
    pub broadcast_links: Vec<WifiCard>,
}

/// Partition cards by role, preserving their relative order
///
/// Pure and deterministic: the same input always yields the same partition.
pub fn assign_roles(cards: &[WifiCard]) -> RoleAssignment {
    let mut assignment = RoleAssignment::default();
    for card in cards {
        match card.capabilities.role() {
            Role::Hotspot => assignment.hotspot_candidates.push(card.clone()),
            Role::BroadcastLink => assignment.broadcast_links.push(card.clone()),
        }
    }
    assignment
}
