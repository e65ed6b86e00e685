//! Domain events for the revival ritual.

use chrono::{DateTime, Utc};
use hardcore_revival_core::event::{DomainEvent, EventMetadata};
use hardcore_revival_core::position::{AltarKey, Location};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Emitted when an online player is revived at an altar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRevived {
    /// The revived player.
    pub player_id: Uuid,
    /// The player who performed the ritual.
    pub reviver_id: Uuid,
    /// The altar used.
    pub altar: AltarKey,
}

/// Emitted when a ritual targets an offline player and the revival is
/// queued for their next login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevivalDeferred {
    /// The player to revive.
    pub player_id: Uuid,
    /// The player who performed the ritual.
    pub reviver_id: Uuid,
    /// The altar used.
    pub altar: AltarKey,
}

/// Emitted when a queued revival is applied on login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingRevivalApplied {
    /// The revived player.
    pub player_id: Uuid,
}

/// Emitted when a dead player's head drops as a revival token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevivalTokenDropped {
    /// The dead player.
    pub player_id: Uuid,
    /// Where the head dropped.
    pub location: Location,
}

/// Event payload variants for the revival ritual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RitualEventKind {
    /// An online player was revived.
    PlayerRevived(PlayerRevived),
    /// An offline player's revival was queued.
    RevivalDeferred(RevivalDeferred),
    /// A queued revival was applied.
    PendingRevivalApplied(PendingRevivalApplied),
    /// A revival token dropped.
    RevivalTokenDropped(RevivalTokenDropped),
}

/// Domain event envelope for the revival ritual.
#[derive(Debug, Clone, PartialEq)]
pub struct RitualEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: RitualEventKind,
}

impl RitualEvent {
    /// Wraps `kind` in fresh metadata.
    #[must_use]
    pub fn new(kind: RitualEventKind, correlation_id: Uuid, occurred_at: DateTime<Utc>) -> Self {
        let event_type = event_type_of(&kind);
        Self {
            metadata: EventMetadata::new(event_type, correlation_id, occurred_at),
            kind,
        }
    }
}

fn event_type_of(kind: &RitualEventKind) -> &'static str {
    match kind {
        RitualEventKind::PlayerRevived(_) => "ritual.player_revived",
        RitualEventKind::RevivalDeferred(_) => "ritual.revival_deferred",
        RitualEventKind::PendingRevivalApplied(_) => "ritual.pending_revival_applied",
        RitualEventKind::RevivalTokenDropped(_) => "ritual.revival_token_dropped",
    }
}

impl DomainEvent for RitualEvent {
    fn event_type(&self) -> &'static str {
        event_type_of(&self.kind)
    }

    fn to_payload(&self) -> serde_json::Value {
        serde_json::to_value(&self.kind).unwrap_or_default()
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;

    #[test]
    fn test_event_type_matches_kind() {
        let at = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
        let event = RitualEvent::new(
            RitualEventKind::PendingRevivalApplied(PendingRevivalApplied {
                player_id: Uuid::new_v4(),
            }),
            Uuid::new_v4(),
            at,
        );

        assert_eq!(event.event_type(), "ritual.pending_revival_applied");
        assert_eq!(event.metadata().event_type, "ritual.pending_revival_applied");
        assert_eq!(event.metadata().occurred_at, at);
    }

    #[test]
    fn test_payload_names_the_variant() {
        let player_id = Uuid::new_v4();
        let event = RitualEvent::new(
            RitualEventKind::RevivalDeferred(RevivalDeferred {
                player_id,
                reviver_id: Uuid::new_v4(),
                altar: AltarKey::from_raw("world:1:2:3"),
            }),
            Uuid::new_v4(),
            Utc::now(),
        );

        let payload = event.to_payload();

        assert_eq!(payload["RevivalDeferred"]["player_id"], player_id.to_string());
        assert_eq!(payload["RevivalDeferred"]["altar"], "world:1:2:3");
    }
}
