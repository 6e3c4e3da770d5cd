//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.
//!
//! The product store is chosen here, once: a configured API base URL selects
//! the HTTP store; without one, a development environment gets the local mock
//! store and a production environment falls back to [`DEFAULT_API_URL`].

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::{MockLatency, StoreBackend};

/// API base URL used in production when none is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub mock: MockConfig,

    #[serde(default)]
    pub relay: RelayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Some(Environment::Development),
            "production" | "prod" => Some(Environment::Production),
            _ => None,
        }
    }
}

/// Product API configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the product API, e.g. `http://localhost:8080/api`
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default)]
    pub environment: Environment,
}

/// Local mock store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MockConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Uniform artificial delay; unset keeps the per-operation defaults
    #[serde(default)]
    pub latency_ms: Option<u64>,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("foodapp").to_string_lossy().to_string())
        .unwrap_or_else(|| "./foodapp_data".to_string())
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            latency_ms: None,
        }
    }
}

/// Expand a leading `~` to `home`; other paths are taken as written
fn expand_home(path: &str, home: Option<&Path>) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(path),
    };
    match home {
        Some(home) if rest.is_empty() => home.to_path_buf(),
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}

impl MockConfig {
    /// Data directory with `~` resolved against the user's home
    pub fn data_path(&self) -> PathBuf {
        expand_home(&self.data_dir, dirs::home_dir().as_deref())
    }

    pub fn latency(&self) -> MockLatency {
        match self.latency_ms {
            Some(ms) => MockLatency::uniform(Duration::from_millis(ms)),
            None => MockLatency::default(),
        }
    }
}

/// Restaurant relay server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Where restaurant submissions are forwarded
    #[serde(default = "default_downstream_url")]
    pub downstream_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_downstream_url() -> String {
    "http://localhost:8080/dishes".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            downstream_url: default_downstream_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl RelayConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment.
    ///
    /// Runs before logging is set up, so where the config came from is
    /// returned for the caller to log with [`ConfigOrigin::log`].
    pub fn load_default() -> (Self, ConfigOrigin) {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("foodapp").join("config.toml")),
            Some(PathBuf::from("/etc/foodapp/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first candidate that exists and parses
    fn load_first(candidates: &[PathBuf]) -> (Self, ConfigOrigin) {
        let mut origin = ConfigOrigin::default();

        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    origin.path = Some(path.clone());
                    return (config, origin);
                }
                Err(e) => origin.rejected.push(e),
            }
        }

        (Self::from_env(), origin)
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // API overrides
        if let Some(url) = lookup("FOODAPP_API_URL") {
            self.api.base_url = Some(url);
        }
        if let Some(env) = lookup("FOODAPP_ENV").and_then(|s| Environment::parse(&s)) {
            self.api.environment = env;
        }

        // Mock overrides
        if let Some(data_dir) = lookup("FOODAPP_DATA_DIR") {
            self.mock.data_dir = data_dir;
        }
        if let Some(ms) = lookup("FOODAPP_MOCK_LATENCY").and_then(|s| s.parse().ok()) {
            self.mock.latency_ms = Some(ms);
        }

        // Relay overrides
        if let Some(host) = lookup("FOODAPP_RELAY_HOST") {
            self.relay.host = host;
        }
        if let Some(port) = lookup("FOODAPP_RELAY_PORT").and_then(|s| s.parse().ok()) {
            self.relay.port = port;
        }
        if let Some(url) = lookup("FOODAPP_RELAY_DOWNSTREAM") {
            self.relay.downstream_url = url;
        }

        // Logging overrides
        if let Some(level) = lookup("FOODAPP_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("FOODAPP_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Decide which product store to run
    pub fn backend(&self) -> StoreBackend {
        let configured = self
            .api
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty());

        match (configured, self.api.environment) {
            (Some(url), _) => StoreBackend::Http {
                base_url: url.to_string(),
            },
            (None, Environment::Development) => StoreBackend::Local {
                data_dir: self.mock.data_path(),
                latency: self.mock.latency(),
            },
            (None, Environment::Production) => StoreBackend::Http {
                base_url: DEFAULT_API_URL.to_string(),
            },
        }
    }
}

/// Where [`Config::load_default`] found its settings
#[derive(Debug, Default)]
pub struct ConfigOrigin {
    /// File that was loaded; `None` means defaults plus environment
    pub path: Option<PathBuf>,
    /// Candidate files that exist but could not be loaded
    pub rejected: Vec<ConfigError>,
}

impl ConfigOrigin {
    pub fn log(&self) {
        for error in &self.rejected {
            tracing::warn!("Skipped config: {}", error);
        }
        match &self.path {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# FoodApp Configuration
#
# Environment variables override these settings:
# - FOODAPP_API_URL
# - FOODAPP_ENV
# - FOODAPP_DATA_DIR
# - FOODAPP_MOCK_LATENCY
# - FOODAPP_RELAY_HOST
# - FOODAPP_RELAY_PORT
# - FOODAPP_RELAY_DOWNSTREAM
# - FOODAPP_LOG_LEVEL
# - FOODAPP_LOG_FORMAT

[api]
# Product API base URL. Leave unset in development to use the local mock store.
# base_url = "http://localhost:8080/api"

# development or production
environment = "development"

[mock]
# Directory holding the mock store document
data_dir = "~/.local/share/foodapp"

# Uniform artificial latency in milliseconds (unset: 500-1000 ms per operation)
# latency_ms = 0

[relay]
# Relay server host
host = "0.0.0.0"

# Relay server port
port = 3000

# Downstream service that receives restaurant submissions
downstream_url = "http://localhost:8080/dishes"

# Downstream request timeout in seconds
request_timeout_secs = 30

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_template_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.api.base_url, None);
        assert_eq!(config.api.environment, Environment::Development);
        assert_eq!(config.relay.port, 3000);
        assert_eq!(config.relay.downstream_url, "http://localhost:8080/dishes");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_default_template_data_dir_under_home() {
        let config = Config::parse(&generate_default_config()).unwrap();

        match config.backend() {
            StoreBackend::Local { data_dir, .. } => {
                assert!(!data_dir.starts_with("~"), "unexpanded: {:?}", data_dir);
                if let Some(home) = dirs::home_dir() {
                    assert_eq!(data_dir, home.join(".local/share/foodapp"));
                }
            }
            other => panic!("expected local store, got {:?}", other),
        }
    }

    #[test]
    fn test_expand_home() {
        let home = Path::new("/home/chef");
        assert_eq!(expand_home("~", Some(home)), PathBuf::from("/home/chef"));
        assert_eq!(
            expand_home("~/data/foodapp", Some(home)),
            PathBuf::from("/home/chef/data/foodapp")
        );
        assert_eq!(expand_home("~chef/data", Some(home)), PathBuf::from("~chef/data"));
        assert_eq!(expand_home("./data", Some(home)), PathBuf::from("./data"));
        assert_eq!(expand_home("~/data", None), PathBuf::from("~/data"));
    }

    #[test]
    fn test_load_first_skips_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&broken, "[relay\nport = ").unwrap();
        std::fs::write(&good, "[relay]\nhost = \"127.0.0.1\"\n").unwrap();

        let candidates = vec![dir.path().join("missing.toml"), broken, good.clone()];
        let (config, origin) = Config::load_first(&candidates);

        assert_eq!(config.relay.host, "127.0.0.1");
        assert_eq!(origin.path, Some(good));
        assert_eq!(origin.rejected.len(), 1);
        assert!(matches!(origin.rejected[0], ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_first_without_files_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (_, origin) = Config::load_first(&[dir.path().join("config.toml")]);
        assert_eq!(origin.path, None);
        assert!(origin.rejected.is_empty());
    }

    #[test]
    fn test_development_without_url_uses_mock() {
        let mut config = Config::default();
        config.mock.data_dir = "/tmp/foodapp-test".to_string();

        match config.backend() {
            StoreBackend::Local { data_dir, latency } => {
                assert_eq!(data_dir, PathBuf::from("/tmp/foodapp-test"));
                assert_eq!(latency, MockLatency::default());
            }
            other => panic!("expected local store, got {:?}", other),
        }
    }

    #[test]
    fn test_configured_url_wins() {
        let config = Config::parse("[api]\nbase_url = \"https://api.example.com\"\n").unwrap();
        assert_eq!(
            config.backend(),
            StoreBackend::Http {
                base_url: "https://api.example.com".to_string()
            }
        );
    }

    #[test]
    fn test_blank_url_is_unset() {
        let config = Config::parse("[api]\nbase_url = \"  \"\n").unwrap();
        assert!(matches!(config.backend(), StoreBackend::Local { .. }));
    }

    #[test]
    fn test_production_without_url_uses_default() {
        let config = Config::parse("[api]\nenvironment = \"production\"\n").unwrap();
        assert_eq!(
            config.backend(),
            StoreBackend::Http {
                base_url: DEFAULT_API_URL.to_string()
            }
        );
    }

    #[test]
    fn test_overrides() {
        let mut config = Config::default();
        config.apply_overrides(lookup(&[
            ("FOODAPP_API_URL", "http://api:9000"),
            ("FOODAPP_ENV", "prod"),
            ("FOODAPP_MOCK_LATENCY", "0"),
            ("FOODAPP_RELAY_PORT", "4000"),
            ("FOODAPP_RELAY_DOWNSTREAM", "http://svc/restaurants"),
            ("FOODAPP_LOG_FORMAT", "json"),
        ]));

        assert_eq!(config.api.base_url.as_deref(), Some("http://api:9000"));
        assert_eq!(config.api.environment, Environment::Production);
        assert_eq!(config.mock.latency(), MockLatency::none());
        assert_eq!(config.relay.port, 4000);
        assert_eq!(config.relay.downstream_url, "http://svc/restaurants");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_invalid_override_values_ignored() {
        let mut config = Config::default();
        config.apply_overrides(lookup(&[
            ("FOODAPP_RELAY_PORT", "not-a-port"),
            ("FOODAPP_ENV", "staging"),
        ]));

        assert_eq!(config.relay.port, 3000);
        assert_eq!(config.api.environment, Environment::Development);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
