use anyhow::Context;
use resistance_core::{GameConfig, ResistanceError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE: &str = "appsettings.json";

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub settings_path: PathBuf,
    /// Set when the path came from `--config`; a missing file is then an error.
    pub explicit: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        let local = PathBuf::from(SETTINGS_FILE);
        let settings_path = if local.exists() {
            local
        } else {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("resistance")
                .join(SETTINGS_FILE)
        };

        Self {
            settings_path,
            explicit: false,
        }
    }
}

impl CliConfig {
    pub fn new(settings_path: Option<PathBuf>) -> Self {
        match settings_path {
            Some(settings_path) => Self {
                settings_path,
                explicit: true,
            },
            None => Self::default(),
        }
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    pub async fn load_settings(&self) -> anyhow::Result<GameConfig> {
        let path = self.settings_path();

        match tokio::fs::read_to_string(path).await {
            Ok(content) => {
                let config = GameConfig::from_json(&content)
                    .with_context(|| format!("Failed to load settings from {}", path.display()))?;
                tracing::info!("Loaded settings from {}", path.display());
                Ok(config)
            }
            Err(e) if e.kind() == ErrorKind::NotFound && !self.explicit => {
                tracing::info!(
                    "No settings file at {}, using standard game modes",
                    path.display()
                );
                Ok(GameConfig::default())
            }
            Err(e) => Err(ResistanceError::from(e))
                .with_context(|| format!("Failed to read settings file {}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_load_settings_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, r#"{"PlayerMap": {"AB": "Alice Brown"}}"#).unwrap();

        let config = CliConfig::new(Some(path)).load_settings().await.unwrap();
        assert_eq!(config.player_map.name_for("ab"), Some("Alice Brown"));
    }

    #[tokio::test]
    async fn test_missing_default_file_uses_empty_settings() {
        let dir = tempdir().unwrap();
        let cli_config = CliConfig {
            settings_path: dir.path().join(SETTINGS_FILE),
            explicit: false,
        };

        let config = cli_config.load_settings().await.unwrap();
        assert!(config.player_map.is_empty());
        assert!(config.game_modes.is_empty());
    }

    #[tokio::test]
    async fn test_missing_explicit_file_is_an_error() {
        let dir = tempdir().unwrap();
        let cli_config = CliConfig::new(Some(dir.path().join("missing.json")));

        let err = cli_config.load_settings().await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ResistanceError>(),
            Some(ResistanceError::Io(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_settings_keep_core_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, r#"{"PlayerMap": {"AB": ""}}"#).unwrap();

        let err = CliConfig::new(Some(path)).load_settings().await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ResistanceError>(),
            Some(ResistanceError::Config(_))
        ));
        assert!(format!("{:#}", err).contains("Failed to load settings"));
    }
}
