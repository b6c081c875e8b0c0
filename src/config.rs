use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Host-level settings for the replay binary.
///
/// Protocol semantics are not configurable: the delimiter and wire format
/// are fixed by the stream producer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Bytes per simulated token when replaying a recorded stream
    pub chunk_bytes: usize,
    /// Pretty-print the state dump
    pub pretty: bool,
    /// tracing filter directive, e.g. "a2ui_stream=debug"
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chunk_bytes: 16,
            pretty: false,
            log_filter: None,
        }
    }
}

fn default_path() -> PathBuf {
    let home_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home_dir.join(".a2ui-stream").join("config.toml")
}

impl Config {
    /// Load configuration from file, falling back to defaults when absent
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = path.unwrap_or_else(default_path);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = path.unwrap_or_else(default_path);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
