//! Plugin lifecycle: enable, reload and disable.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use hardcore_revival_core::clock::Clock;
use hardcore_revival_core::config::{ConfigError, RevivalConfig};
use hardcore_revival_core::host::GameHost;
use hardcore_revival_core::repository::RevivalRepository;
use hardcore_revival_ritual::domain::recipe::register_blank_head_recipe;
use hardcore_revival_store::FlatFileStore;
use tokio::sync::RwLock;
use tracing::{error, info, instrument, warn};

use crate::defaults::{self, DATA_FILE_NAME};
use crate::error::PluginError;
use crate::telemetry;

/// A running plugin instance.
///
/// The host hands it events through [`RevivalPlugin::on_event`] and
/// commands through [`RevivalPlugin::on_command`].
pub struct RevivalPlugin {
    data_folder: PathBuf,
    config: RwLock<Arc<RevivalConfig>>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) host: Arc<dyn GameHost>,
    pub(crate) repository: Arc<dyn RevivalRepository>,
}

impl std::fmt::Debug for RevivalPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevivalPlugin")
            .field("data_folder", &self.data_folder)
            .finish_non_exhaustive()
    }
}

impl RevivalPlugin {
    /// Enables the plugin in `data_folder`: installs logging, writes the
    /// default configuration if none exists, loads it, opens `data.yml`
    /// and registers the blank head recipe.
    ///
    /// # Errors
    ///
    /// Returns `PluginError` if the configuration cannot be written, read
    /// or parsed.
    #[instrument(skip_all, fields(data_folder = %data_folder.as_ref().display()))]
    pub async fn enable(
        data_folder: impl AsRef<Path>,
        host: Arc<dyn GameHost>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, PluginError> {
        telemetry::init();
        let data_folder = data_folder.as_ref().to_path_buf();

        let config_path = defaults::ensure_config_file(&data_folder).await?;
        let config = read_config(&config_path).await?;
        let store = FlatFileStore::open(data_folder.join(DATA_FILE_NAME)).await;

        let plugin = Self {
            data_folder,
            config: RwLock::new(Arc::new(config)),
            clock,
            host,
            repository: Arc::new(store),
        };
        plugin.register_recipe().await;
        info!("HardcoreRevival enabled");
        Ok(plugin)
    }

    /// Returns the data folder.
    #[must_use]
    pub fn data_folder(&self) -> &Path {
        &self.data_folder
    }

    /// Returns the active configuration.
    pub async fn config(&self) -> Arc<RevivalConfig> {
        Arc::clone(&*self.config.read().await)
    }

    /// Re-reads `config.yml` and re-registers the recipe.
    ///
    /// # Errors
    ///
    /// Returns `PluginError::Config` if the file cannot be read or parsed;
    /// the previous configuration stays active.
    #[instrument(skip(self))]
    pub async fn reload(&self) -> Result<(), PluginError> {
        let path = self.data_folder.join(defaults::CONFIG_FILE_NAME);
        let config = match read_config(&path).await {
            Ok(config) => config,
            Err(e) => {
                error!(error = %e, "reload failed, keeping previous configuration");
                return Err(e);
            }
        };
        *self.config.write().await = Arc::new(config);
        self.register_recipe().await;
        info!("configuration reloaded");
        Ok(())
    }

    /// Writes the store to disk one last time.
    ///
    /// # Errors
    ///
    /// Returns `PluginError::Domain` if the data file cannot be written.
    #[instrument(skip(self))]
    pub async fn disable(&self) -> Result<(), PluginError> {
        self.repository.flush().await?;
        info!("HardcoreRevival disabled");
        Ok(())
    }

    async fn register_recipe(&self) {
        let config = self.config().await;
        if let Err(e) = register_blank_head_recipe(self.host.as_ref(), &config.recipe) {
            warn!(error = %e, "blank head recipe not registered");
        }
    }
}

async fn read_config(path: &Path) -> Result<RevivalConfig, PluginError> {
    let source = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(RevivalConfig::from_yaml_str(&source)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_config_reports_missing_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yml");

        match read_config(&path).await {
            Err(PluginError::Config(ConfigError::Io { path: reported, .. })) => {
                assert_eq!(reported, path);
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
