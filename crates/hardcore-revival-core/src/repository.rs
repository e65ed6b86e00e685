//! Revival state repository abstraction.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;
use crate::position::AltarKey;

/// Full copy of the persisted revival state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Players to restore on their next join.
    pub pending_revivals: BTreeSet<Uuid>,
    /// Last use of each altar, in milliseconds since the Unix epoch.
    pub cooldowns: BTreeMap<AltarKey, i64>,
}

/// Repository for pending revivals and altar cooldowns.
#[async_trait]
pub trait RevivalRepository: Send + Sync {
    /// Returns whether the player is waiting for a deferred revival.
    async fn is_pending_revival(&self, player_id: Uuid) -> Result<bool, DomainError>;

    /// Marks a player for deferred revival. Returns `false` if the player
    /// was already pending.
    async fn add_pending_revival(&self, player_id: Uuid) -> Result<bool, DomainError>;

    /// Clears a player's pending revival. Returns `false` if there was none.
    async fn remove_pending_revival(&self, player_id: Uuid) -> Result<bool, DomainError>;

    /// Returns when the altar was last used, if ever.
    async fn last_used(&self, altar: &AltarKey) -> Result<Option<DateTime<Utc>>, DomainError>;

    /// Records a use of the altar at `at`.
    async fn record_use(&self, altar: &AltarKey, at: DateTime<Utc>) -> Result<(), DomainError>;

    /// Returns a copy of the whole state.
    async fn snapshot(&self) -> Result<StoreSnapshot, DomainError>;

    /// Writes the current state to durable storage.
    async fn flush(&self) -> Result<(), DomainError>;
}
