//! Files kept in the plugin's data folder.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::PluginError;

/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "config.yml";

/// Name of the persisted state file.
pub const DATA_FILE_NAME: &str = "data.yml";

/// The bundled configuration, written on first enable.
pub const DEFAULT_CONFIG: &str = include_str!("../resources/config.yml");

/// Writes the bundled configuration to `data_folder` unless a
/// configuration file already exists. Returns the configuration path.
///
/// # Errors
///
/// Returns `PluginError::Io` if the folder or file cannot be created.
pub async fn ensure_config_file(data_folder: &Path) -> Result<PathBuf, PluginError> {
    let path = data_folder.join(CONFIG_FILE_NAME);
    if tokio::fs::try_exists(&path).await.unwrap_or(false) {
        return Ok(path);
    }
    tokio::fs::create_dir_all(data_folder)
        .await
        .map_err(|source| PluginError::Io {
            path: data_folder.to_path_buf(),
            source,
        })?;
    tokio::fs::write(&path, DEFAULT_CONFIG)
        .await
        .map_err(|source| PluginError::Io {
            path: path.clone(),
            source,
        })?;
    info!(path = %path.display(), "wrote default configuration");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    use hardcore_revival_core::config::RevivalConfig;

    #[test]
    fn test_bundled_file_matches_built_in_defaults() {
        let parsed = RevivalConfig::from_yaml_str(DEFAULT_CONFIG).unwrap();

        assert_eq!(parsed, RevivalConfig::default());
    }

    #[tokio::test]
    async fn test_existing_configuration_is_not_overwritten() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "settings:\n  cooldownSeconds: 5\n").unwrap();

        // Act
        let returned = ensure_config_file(dir.path()).await.unwrap();

        // Assert
        assert_eq!(returned, path);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "settings:\n  cooldownSeconds: 5\n"
        );
    }

    #[tokio::test]
    async fn test_missing_configuration_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("HardcoreRevival");

        let path = ensure_config_file(&folder).await.unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), DEFAULT_CONFIG);
    }
}
