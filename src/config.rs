use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Editor settings; block data is never stored here
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Where exported pages are written
    pub export_dir: PathBuf,

    /// Initial window size in logical pixels
    pub window_size: [f32; 2],
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("."),
            window_size: [1280.0, 800.0],
        }
    }
}

impl EditorConfig {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: EditorConfig =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.export_dir = Self::expand_path(&config.export_dir);

        Ok(Some(config))
    }

    /// Load from the default location, falling back to defaults when absent
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        let config = Self::load_from_path(&config_path)?;
        if config.is_none() {
            log::debug!("no config at {}, using defaults", config_path.display());
        }
        Ok(config.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/bio-page-builder");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> PathBuf {
        let path_str = path.to_string_lossy();
        PathBuf::from(shellexpand::tilde(&path_str).as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = EditorConfig::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/bio-page-builder/config.toml"));
    }

    #[test]
    fn test_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let result = EditorConfig::load_from_path(temp_dir.path().join("config.toml"));
        assert_matches!(result, Ok(None));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let original = EditorConfig {
            export_dir: PathBuf::from("/tmp/pages"),
            window_size: [900.0, 700.0],
        };
        original.save_to_path(&config_path).unwrap();

        let loaded = EditorConfig::load_from_path(&config_path).unwrap().unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "export_dir = \"/srv/bio\"\n").unwrap();

        let loaded = EditorConfig::load_from_path(&config_path).unwrap().unwrap();
        assert_eq!(loaded.export_dir, PathBuf::from("/srv/bio"));
        assert_eq!(loaded.window_size, EditorConfig::default().window_size);
    }

    #[test]
    fn test_tilde_is_expanded() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "export_dir = \"~/bio\"\n").unwrap();

        let loaded = EditorConfig::load_from_path(&config_path).unwrap().unwrap();
        assert!(!loaded.export_dir.to_string_lossy().starts_with('~'));
    }

    #[test]
    fn test_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "export_dir = [not toml").unwrap();

        let result = EditorConfig::load_from_path(&config_path);
        assert_matches!(result, Err(ConfigError::ConfigParseError { .. }));
    }
}
