//! Configuration file parsing.
//!
//! Loads the data file location, lock timing and section capacities from
//! TOML. Every field has a default, so an empty file is a valid config.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use whiteboard_gatekeeper::CapacityConfig;
use whiteboard_store::LockOptions;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "WHITEBOARD_CONFIG";

/// Environment variable overriding `data_file`
pub const DATA_ENV: &str = "WHITEBOARD_DATA";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file {}: {source}", path.display())]
    FileRead {
        /// Config path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A value is out of range
    #[error("Invalid configuration value: {0}")]
    Invalid(String),
}

/// Whiteboard configuration loaded from TOML
///
/// ```toml
/// data_file = "whiteboard_data.json"
/// lock_timeout_ms = 5000
/// stale_lock_secs = 30
///
/// [capacities]
/// "Today's Tasks" = 5
/// "Healthy Habits" = "unbounded"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhiteboardConfig {
    /// Board document path
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// How long a mutating operation waits for the lock
    #[serde(default = "default_lock_timeout_ms")]
    pub lock_timeout_ms: u64,

    /// Age after which a lock file is considered abandoned
    #[serde(default = "default_stale_lock_secs")]
    pub stale_lock_secs: u64,

    /// Per-section active-item capacities
    #[serde(default)]
    pub capacities: CapacityConfig,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("whiteboard_data.json")
}

fn default_lock_timeout_ms() -> u64 {
    5000
}

fn default_stale_lock_secs() -> u64 {
    30
}

impl Default for WhiteboardConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            lock_timeout_ms: default_lock_timeout_ms(),
            stale_lock_secs: default_stale_lock_secs(),
            capacities: CapacityConfig::default(),
        }
    }
}

impl WhiteboardConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: WhiteboardConfig = toml::from_str(contents)?;

        if config.lock_timeout_ms == 0 {
            return Err(ConfigError::Invalid("lock_timeout_ms must be positive".to_string()));
        }
        if config.stale_lock_secs == 0 {
            return Err(ConfigError::Invalid("stale_lock_secs must be positive".to_string()));
        }

        Ok(config)
    }

    /// Per-user config location (`~/.whiteboard/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".whiteboard").join("config.toml"))
    }

    /// Resolve configuration from the process environment
    ///
    /// Order: `explicit` path, then `WHITEBOARD_CONFIG`, then
    /// `~/.whiteboard/config.toml` if it exists, then defaults.
    /// `WHITEBOARD_DATA` overrides `data_file` afterwards.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::resolve_with(explicit, Self::default_path(), |key| std::env::var(key).ok())
    }

    /// [`WhiteboardConfig::resolve`] with injectable lookups
    pub fn resolve_with<F>(
        explicit: Option<&Path>,
        user_default: Option<PathBuf>,
        env: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| env(CONFIG_ENV).filter(|v| !v.is_empty()).map(PathBuf::from))
            .or_else(|| user_default.filter(|p| p.is_file()));

        let mut config = match path {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        if let Some(data) = env(DATA_ENV).filter(|v| !v.is_empty()) {
            config.data_file = PathBuf::from(data);
        }

        Ok(config)
    }

    /// Lock timing for the file store
    pub fn lock_options(&self) -> LockOptions {
        LockOptions {
            timeout: Duration::from_millis(self.lock_timeout_ms),
            stale_after: Duration::from_secs(self.stale_lock_secs),
            ..LockOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use whiteboard_domain::Section;
    use whiteboard_gatekeeper::Capacity;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = WhiteboardConfig::default();
        assert_eq!(config.data_file, PathBuf::from("whiteboard_data.json"));
        assert_eq!(config.lock_timeout_ms, 5000);
        assert_eq!(config.stale_lock_secs, 30);
        assert_eq!(config.capacities, CapacityConfig::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = WhiteboardConfig::from_toml_str("").unwrap();
        assert_eq!(config, WhiteboardConfig::default());
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            data_file = "/var/lib/whiteboard/board.json"
            lock_timeout_ms = 250

            [capacities]
            "Today's Tasks" = 3
            "Project Ideas" = "unbounded"
        "#;

        let config = WhiteboardConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.data_file, PathBuf::from("/var/lib/whiteboard/board.json"));
        assert_eq!(config.lock_timeout_ms, 250);
        assert_eq!(config.stale_lock_secs, 30);
        assert_eq!(config.capacities.capacity(Section::TodaysTasks), Capacity::Limited(3));
        assert_eq!(config.capacities.capacity(Section::ProjectIdeas), Capacity::Unbounded);
        assert_eq!(config.lock_options().timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            WhiteboardConfig::from_toml_str("lock_timeout_ms = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            WhiteboardConfig::from_toml_str("[capacities]\n\"Archive\" = 3"),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_resolve_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("explicit.toml");
        let from_env = dir.path().join("env.toml");
        std::fs::write(&explicit, "lock_timeout_ms = 111").unwrap();
        std::fs::write(&from_env, "lock_timeout_ms = 222").unwrap();
        let env_path = from_env.to_string_lossy().into_owned();

        let env = env_of(&[(CONFIG_ENV, env_path.as_str())]);
        let config = WhiteboardConfig::resolve_with(Some(&explicit), None, &env).unwrap();
        assert_eq!(config.lock_timeout_ms, 111);

        let config = WhiteboardConfig::resolve_with(None, None, &env).unwrap();
        assert_eq!(config.lock_timeout_ms, 222);

        let config = WhiteboardConfig::resolve_with(None, Some(dir.path().join("missing.toml")), env_of(&[])).unwrap();
        assert_eq!(config, WhiteboardConfig::default());
    }

    #[test]
    fn test_data_env_overrides_file() {
        let env = env_of(&[(DATA_ENV, "/tmp/other.json")]);
        let config = WhiteboardConfig::resolve_with(None, None, env).unwrap();
        assert_eq!(config.data_file, PathBuf::from("/tmp/other.json"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = WhiteboardConfig::resolve_with(Some(Path::new("/nonexistent/wb.toml")), None, env_of(&[]));
        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }
}
