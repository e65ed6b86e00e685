//! Reasons a ritual is refused.

use hardcore_revival_core::config::ErrorMessages;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a head placement did not start a revival. Each reason maps to a
/// configured `messages.errors.*` entry shown to the placer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum Rejection {
    #[error("head not placed on a fence")]
    NotOnFence,
    #[error("rituals are not allowed in this world")]
    WorldNotAllowed,
    #[error("altar structure is invalid")]
    StructureInvalid,
    #[error("an altar chest is missing required items")]
    ChestMissingItems,
    #[error("altar is on cooldown")]
    CooldownActive,
    #[error("head does not name a known player")]
    HeadNotNamed,
    #[error("target player is not dead")]
    PlayerNotDead,
}

impl Rejection {
    /// Returns the configuration key under `messages.errors`.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::NotOnFence => "notOnFence",
            Self::WorldNotAllowed => "worldNotAllowed",
            Self::StructureInvalid => "structureInvalid",
            Self::ChestMissingItems => "chestMissingItems",
            Self::CooldownActive => "cooldownActive",
            Self::HeadNotNamed => "headNotNamed",
            Self::PlayerNotDead => "playerNotDead",
        }
    }

    /// Returns the configured message for this reason.
    #[must_use]
    pub fn message(self, errors: &ErrorMessages) -> &str {
        match self {
            Self::NotOnFence => &errors.not_on_fence,
            Self::WorldNotAllowed => &errors.world_not_allowed,
            Self::StructureInvalid => &errors.structure_invalid,
            Self::ChestMissingItems => &errors.chest_missing_items,
            Self::CooldownActive => &errors.cooldown_active,
            Self::HeadNotNamed => &errors.head_not_named,
            Self::PlayerNotDead => &errors.player_not_dead,
        }
    }
}
