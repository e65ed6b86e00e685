//! Mock `RevivalRepository` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hardcore_revival_core::error::DomainError;
use hardcore_revival_core::position::AltarKey;
use hardcore_revival_core::repository::{RevivalRepository, StoreSnapshot};
use uuid::Uuid;

/// A repository that keeps its state in memory and counts flushes.
#[derive(Debug, Default)]
pub struct InMemoryRevivalRepository {
    state: Mutex<StoreSnapshot>,
    flushes: Mutex<usize>,
}

impl InMemoryRevivalRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `snapshot`.
    #[must_use]
    pub fn with_snapshot(snapshot: StoreSnapshot) -> Self {
        Self {
            state: Mutex::new(snapshot),
            flushes: Mutex::new(0),
        }
    }

    /// Returns a copy of the current state.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn state(&self) -> StoreSnapshot {
        self.state.lock().unwrap().clone()
    }

    /// Returns how many times `flush` was called.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn flush_count(&self) -> usize {
        *self.flushes.lock().unwrap()
    }
}

#[async_trait]
impl RevivalRepository for InMemoryRevivalRepository {
    async fn is_pending_revival(&self, player_id: Uuid) -> Result<bool, DomainError> {
        Ok(self.state.lock().unwrap().pending_revivals.contains(&player_id))
    }

    async fn add_pending_revival(&self, player_id: Uuid) -> Result<bool, DomainError> {
        Ok(self.state.lock().unwrap().pending_revivals.insert(player_id))
    }

    async fn remove_pending_revival(&self, player_id: Uuid) -> Result<bool, DomainError> {
        Ok(self.state.lock().unwrap().pending_revivals.remove(&player_id))
    }

    async fn last_used(&self, altar: &AltarKey) -> Result<Option<DateTime<Utc>>, DomainError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .cooldowns
            .get(altar)
            .and_then(|millis| DateTime::from_timestamp_millis(*millis)))
    }

    async fn record_use(&self, altar: &AltarKey, at: DateTime<Utc>) -> Result<(), DomainError> {
        self.state
            .lock()
            .unwrap()
            .cooldowns
            .insert(altar.clone(), at.timestamp_millis());
        Ok(())
    }

    async fn snapshot(&self) -> Result<StoreSnapshot, DomainError> {
        Ok(self.state())
    }

    async fn flush(&self) -> Result<(), DomainError> {
        *self.flushes.lock().unwrap() += 1;
        Ok(())
    }
}

/// A repository that always returns an infrastructure error. Useful for
/// testing that persistence failures are swallowed.
#[derive(Debug)]
pub struct FailingRevivalRepository;

fn unavailable() -> DomainError {
    DomainError::Infrastructure("data file unavailable".into())
}

#[async_trait]
impl RevivalRepository for FailingRevivalRepository {
    async fn is_pending_revival(&self, _player_id: Uuid) -> Result<bool, DomainError> {
        Err(unavailable())
    }

    async fn add_pending_revival(&self, _player_id: Uuid) -> Result<bool, DomainError> {
        Err(unavailable())
    }

    async fn remove_pending_revival(&self, _player_id: Uuid) -> Result<bool, DomainError> {
        Err(unavailable())
    }

    async fn last_used(&self, _altar: &AltarKey) -> Result<Option<DateTime<Utc>>, DomainError> {
        Err(unavailable())
    }

    async fn record_use(&self, _altar: &AltarKey, _at: DateTime<Utc>) -> Result<(), DomainError> {
        Err(unavailable())
    }

    async fn snapshot(&self) -> Result<StoreSnapshot, DomainError> {
        Err(unavailable())
    }

    async fn flush(&self) -> Result<(), DomainError> {
        Err(unavailable())
    }
}
