use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{KanalsortError, Result};

const CONFIG_FILE: &str = "config.toml";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# kanalsort configuration file
# Location: ~/.kanalsort/config.toml

[paths]
# Playlist file to read (one channel entry per line)
# Example: input = "/data/iptv/channels.m3u"
input = "channels.m3u"

# Where the categorization report is written
# Example: output = "/data/iptv/channel_report.txt"
output = "channel_report.txt"
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Input/output path configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Playlist file to read
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Report file to write
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_input() -> PathBuf {
    PathBuf::from("channels.m3u")
}

fn default_output() -> PathBuf {
    PathBuf::from("channel_report.txt")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
        }
    }
}

impl Config {
    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| KanalsortError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = toml::to_string_pretty(self).map_err(|e| KanalsortError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "paths.input" => Some(self.paths.input.display().to_string()),
            "paths.output" => Some(self.paths.output.display().to_string()),
            _ => None,
        }
    }

    /// Set a config value by dot-notation key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "paths.input" => {
                self.paths.input = PathBuf::from(value);
                Ok(())
            }
            "paths.output" => {
                self.paths.output = PathBuf::from(value);
                Ok(())
            }
            _ => Err(KanalsortError::ConfigKeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        vec![
            (
                "paths.input".to_string(),
                self.paths.input.display().to_string(),
            ),
            (
                "paths.output".to_string(),
                self.paths.output.display().to_string(),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.paths.input, PathBuf::from("channels.m3u"));
        assert_eq!(config.paths.output, PathBuf::from("channel_report.txt"));
    }

    #[test]
    fn test_config_get_set() {
        let mut config = Config::default();

        config.set("paths.input", "/tmp/list.m3u").unwrap();
        assert_eq!(config.get("paths.input").unwrap(), "/tmp/list.m3u");

        let err = config.set("paths.nope", "x").unwrap_err();
        assert!(matches!(err, KanalsortError::ConfigKeyNotFound { .. }));
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.paths.input, PathBuf::from("channels.m3u"));
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();

        let mut config = Config::default();
        config.set("paths.input", "/data/channels.m3u").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded.paths.input, PathBuf::from("/data/channels.m3u"));
        assert_eq!(loaded.paths.output, PathBuf::from("channel_report.txt"));
    }

    #[test]
    fn test_init_writes_template_once() {
        let dir = tempdir().unwrap();

        let path = Config::init(dir.path()).unwrap();
        let template = fs::read_to_string(&path).unwrap();
        assert!(template.contains("[paths]"));

        fs::write(&path, "[paths]\ninput = \"custom.m3u\"\n").unwrap();
        Config::init(dir.path()).unwrap();
        let kept = fs::read_to_string(&path).unwrap();
        assert!(kept.contains("custom.m3u"));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "not = [valid").unwrap();

        let err = Config::load(dir.path()).unwrap_err();
        assert!(matches!(err, KanalsortError::ConfigParse { .. }));
    }
}
