//! YAML file implementation of the `RevivalRepository` trait.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{debug, error, warn};
use uuid::Uuid;

use hardcore_revival_core::error::DomainError;
use hardcore_revival_core::position::AltarKey;
use hardcore_revival_core::repository::{RevivalRepository, StoreSnapshot};

use crate::schema;

/// Repository that keeps pending revivals and cooldowns in memory and
/// rewrites the whole data file after every change.
///
/// Write failures during mutations are logged and swallowed: the in-memory
/// state stays authoritative until the next successful write. Only
/// [`RevivalRepository::flush`] reports them.
#[derive(Debug)]
pub struct FlatFileStore {
    path: PathBuf,
    state: Mutex<StoreSnapshot>,
}

impl FlatFileStore {
    /// Opens the store at `path`, creating an empty file when none exists.
    ///
    /// Loading is best-effort: an unreadable or unparseable file yields an
    /// empty store, and malformed entries are skipped.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = match tokio::fs::read_to_string(&path).await {
            Ok(source) => schema::parse_lenient(&source).unwrap_or_else(|| {
                warn!(path = %path.display(), "data file is not valid YAML, starting empty");
                StoreSnapshot::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "creating empty data file");
                let empty = StoreSnapshot::default();
                if let Err(e) = write_atomically(&path, &empty).await {
                    error!(path = %path.display(), error = %e, "failed to create data file");
                }
                empty
            }
            Err(e) => {
                error!(
                    path = %path.display(),
                    error = %e,
                    "failed to read data file, starting empty"
                );
                StoreSnapshot::default()
            }
        };
        Self {
            path,
            state: Mutex::new(state),
        }
    }

    /// Returns the data file location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist_or_log(&self, state: &StoreSnapshot) {
        if let Err(e) = write_atomically(&self.path, state).await {
            error!(path = %self.path.display(), error = %e, "failed to save data file");
        }
    }
}

/// Writes the document next to its destination and renames it into place.
async fn write_atomically(path: &Path, state: &StoreSnapshot) -> Result<(), DomainError> {
    let rendered = schema::render(state)
        .map_err(|e| DomainError::Infrastructure(format!("data file serialization failed: {e}")))?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| {
                    DomainError::Infrastructure(format!("create {}: {e}", parent.display()))
                })?;
        }
    }
    let mut staging = path.as_os_str().to_owned();
    staging.push(".tmp");
    let staging = PathBuf::from(staging);
    tokio::fs::write(&staging, rendered)
        .await
        .map_err(|e| DomainError::Infrastructure(format!("write {}: {e}", staging.display())))?;
    tokio::fs::rename(&staging, path)
        .await
        .map_err(|e| DomainError::Infrastructure(format!("rename to {}: {e}", path.display())))
}

#[async_trait]
impl RevivalRepository for FlatFileStore {
    async fn is_pending_revival(&self, player_id: Uuid) -> Result<bool, DomainError> {
        Ok(self.state.lock().await.pending_revivals.contains(&player_id))
    }

    async fn add_pending_revival(&self, player_id: Uuid) -> Result<bool, DomainError> {
        let mut state = self.state.lock().await;
        let added = state.pending_revivals.insert(player_id);
        if added {
            self.persist_or_log(&state).await;
        }
        Ok(added)
    }

    async fn remove_pending_revival(&self, player_id: Uuid) -> Result<bool, DomainError> {
        let mut state = self.state.lock().await;
        let removed = state.pending_revivals.remove(&player_id);
        if removed {
            self.persist_or_log(&state).await;
        }
        Ok(removed)
    }

    async fn last_used(&self, altar: &AltarKey) -> Result<Option<DateTime<Utc>>, DomainError> {
        Ok(self
            .state
            .lock()
            .await
            .cooldowns
            .get(altar)
            .and_then(|millis| DateTime::from_timestamp_millis(*millis)))
    }

    async fn record_use(&self, altar: &AltarKey, at: DateTime<Utc>) -> Result<(), DomainError> {
        let mut state = self.state.lock().await;
        state.cooldowns.insert(altar.clone(), at.timestamp_millis());
        self.persist_or_log(&state).await;
        Ok(())
    }

    async fn snapshot(&self) -> Result<StoreSnapshot, DomainError> {
        Ok(self.state.lock().await.clone())
    }

    async fn flush(&self) -> Result<(), DomainError> {
        let state = self.state.lock().await;
        write_atomically(&self.path, &state).await
    }
}
