use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MissioneerConfig {
    pub log_level: String,
    pub storage: StorageConfig,
    pub embedding: EmbeddingConfig,
    pub generation: GenerationConfig,
    pub retrieval: RetrievalConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub data_path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EmbeddingConfig {
    pub provider: String,
    pub endpoint: String,
    pub model: String,
    pub dimensions: usize,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GenerationConfig {
    pub provider: String,
    pub endpoint: String,
    pub model: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Default number of results for a search.
    pub default_top_k: usize,
    /// Number of neighbors injected as context when generating a mission.
    pub context_k: usize,
    /// Timeout for embedding/generation HTTP calls, in seconds.
    pub timeout_secs: u64,
}

impl Default for MissioneerConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            storage: StorageConfig::default(),
            embedding: EmbeddingConfig::default(),
            generation: GenerationConfig::default(),
            retrieval: RetrievalConfig::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let data_path = default_missioneer_dir()
            .join("missions.json")
            .to_string_lossy()
            .into_owned();
        Self { data_path }
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: "ollama".into(),
            endpoint: "http://localhost:11434".into(),
            model: "nomic-embed-text".into(),
            dimensions: 768,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: "ollama".into(),
            endpoint: "http://localhost:11434".into(),
            model: "llama3.2".into(),
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            default_top_k: 3,
            context_k: 3,
            timeout_secs: 60,
        }
    }
}

/// Returns `~/.missioneer/`
pub fn default_missioneer_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".missioneer")
}

/// Returns the default config file path: `~/.missioneer/config.toml`
pub fn default_config_path() -> PathBuf {
    default_missioneer_dir().join("config.toml")
}

impl MissioneerConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            MissioneerConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (MISSIONEER_DATA,
    /// MISSIONEER_LOG_LEVEL, MISSIONEER_OLLAMA_URL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("MISSIONEER_DATA") {
            self.storage.data_path = val;
        }
        if let Ok(val) = std::env::var("MISSIONEER_LOG_LEVEL") {
            self.log_level = val;
        }
        if let Ok(val) = std::env::var("MISSIONEER_OLLAMA_URL") {
            self.embedding.endpoint = val.clone();
            self.generation.endpoint = val;
        }
    }

    /// Resolve the data file path, expanding `~` if needed.
    pub fn resolved_data_path(&self) -> PathBuf {
        expand_tilde(&self.storage.data_path)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir()
            .expect("home directory must exist")
            .join(rest)
    } else {
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = MissioneerConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.embedding.model, "nomic-embed-text");
        assert_eq!(config.embedding.dimensions, 768);
        assert_eq!(config.generation.model, "llama3.2");
        assert_eq!(config.retrieval.context_k, 3);
        assert!(config.storage.data_path.ends_with("missions.json"));
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
log_level = "debug"

[storage]
data_path = "/tmp/test-missions.json"

[embedding]
model = "all-minilm"
dimensions = 384

[retrieval]
default_top_k = 10
"#;
        let config: MissioneerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.storage.data_path, "/tmp/test-missions.json");
        assert_eq!(config.embedding.model, "all-minilm");
        assert_eq!(config.embedding.dimensions, 384);
        assert_eq!(config.retrieval.default_top_k, 10);
        // defaults still apply for unset fields
        assert_eq!(config.retrieval.context_k, 3);
        assert_eq!(config.generation.model, "llama3.2");
    }

    #[test]
    fn env_overrides_apply() {
        let mut config = MissioneerConfig::default();
        std::env::set_var("MISSIONEER_DATA", "/tmp/override.json");
        std::env::set_var("MISSIONEER_LOG_LEVEL", "trace");
        std::env::set_var("MISSIONEER_OLLAMA_URL", "http://ollama.local:11434");

        config.apply_env_overrides();

        assert_eq!(config.storage.data_path, "/tmp/override.json");
        assert_eq!(config.log_level, "trace");
        assert_eq!(config.embedding.endpoint, "http://ollama.local:11434");
        assert_eq!(config.generation.endpoint, "http://ollama.local:11434");

        // Clean up
        std::env::remove_var("MISSIONEER_DATA");
        std::env::remove_var("MISSIONEER_LOG_LEVEL");
        std::env::remove_var("MISSIONEER_OLLAMA_URL");
    }
}
