//! Player identity, state and command senders.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::position::Location;

/// Stable identity of a player, online or not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Unique player identifier.
    pub id: Uuid,
    /// Last known player name.
    pub name: String,
}

impl PlayerProfile {
    /// Creates a profile.
    #[must_use]
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Host game modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameMode {
    Survival,
    Creative,
    Adventure,
    /// The mode dead players are parked in until revived.
    Spectator,
}

/// Snapshot of an online player as reported by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Who the player is.
    pub profile: PlayerProfile,
    /// Current game mode.
    pub game_mode: GameMode,
    /// Current position.
    pub location: Location,
}

/// Potion effect kinds applied by this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PotionEffectKind {
    Regeneration,
    DamageResistance,
}

/// A timed potion effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PotionEffect {
    /// The effect kind.
    pub kind: PotionEffectKind,
    /// Duration in server ticks.
    pub duration_ticks: u32,
    /// Zero-based effect level.
    pub amplifier: u8,
}

/// The issuer of an admin command: the server console or a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSender {
    player: Option<PlayerProfile>,
    permissions: BTreeSet<String>,
}

impl CommandSender {
    /// The server console. It holds every permission.
    #[must_use]
    pub fn console() -> Self {
        Self {
            player: None,
            permissions: BTreeSet::new(),
        }
    }

    /// A player sender without any permission granted yet.
    #[must_use]
    pub fn player(profile: PlayerProfile) -> Self {
        Self {
            player: Some(profile),
            permissions: BTreeSet::new(),
        }
    }

    /// Grants a permission node.
    #[must_use]
    pub fn with_permission(mut self, node: impl Into<String>) -> Self {
        self.permissions.insert(node.into());
        self
    }

    /// Returns the player behind this sender, if any.
    #[must_use]
    pub fn as_player(&self) -> Option<&PlayerProfile> {
        self.player.as_ref()
    }

    /// Returns `true` if the sender may use commands guarded by `node`.
    #[must_use]
    pub fn has_permission(&self, node: &str) -> bool {
        self.player.is_none() || self.permissions.contains(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_has_every_permission() {
        assert!(CommandSender::console().has_permission("hardcorerevival.admin"));
    }

    #[test]
    fn test_player_needs_explicit_permission() {
        let profile = PlayerProfile::new(Uuid::new_v4(), "Steve");
        let sender = CommandSender::player(profile.clone());

        assert!(!sender.has_permission("hardcorerevival.admin"));
        assert!(
            sender
                .with_permission("hardcorerevival.admin")
                .has_permission("hardcorerevival.admin")
        );
        assert_eq!(CommandSender::player(profile.clone()).as_player(), Some(&profile));
    }
}
