//! Application configuration loaded from a RON file.
//!
//! Lookup order: explicit path (first CLI argument), `MAILVIEW_CONFIG`,
//! `./mailview.ron` when present, built-in defaults. `MAILVIEW_API_URL`
//! overrides the store URL from any source.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::LevelFilter;
use mailview_engine::ApiSettings;
use mailview_logging::mail_info;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_CONFIG_FILENAME: &str = "mailview.ron";
const CONFIG_ENV: &str = "MAILVIEW_CONFIG";
const API_URL_ENV: &str = "MAILVIEW_API_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("invalid log level {0:?}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub api_url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_bytes: u64,
    pub log_destination: LogTarget,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let api = ApiSettings::default();
        Self {
            api_url: api.base_url,
            connect_timeout_secs: api.connect_timeout.as_secs(),
            request_timeout_secs: api.request_timeout.as_secs(),
            max_bytes: api.max_bytes,
            log_destination: LogTarget::File,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Resolves the config file, parses it and applies environment overrides.
    pub fn load(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = explicit
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
            .or_else(|| {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILENAME);
                fallback.exists().then_some(fallback)
            });

        let config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        Ok(config.with_api_url_override(std::env::var(API_URL_ENV).ok()))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        mail_info!("Loaded config from {:?}", path);
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.log_level
            .parse::<LevelFilter>()
            .map(|_| ())
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    pub fn with_api_url_override(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|url| !url.trim().is_empty()) {
            self.api_url = url;
        }
        self
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings {
            base_url: self.api_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = write_config(r#"(api_url: "http://mail.local:8025", log_level: "debug")"#);

        let config = AppConfig::from_file(file.path()).unwrap();

        assert_eq!(config.api_url, "http://mail.local:8025");
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        assert_eq!(config.log_destination, LogTarget::File);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn full_file_maps_to_api_settings() {
        let file = write_config(
            r#"(
                api_url: "http://127.0.0.1:9000",
                connect_timeout_secs: 1,
                request_timeout_secs: 2,
                max_bytes: 1024,
                log_destination: Both,
                log_level: "warn",
            )"#,
        );

        let config = AppConfig::from_file(file.path()).unwrap();
        let settings = config.api_settings();

        assert_eq!(settings.base_url, "http://127.0.0.1:9000");
        assert_eq!(settings.connect_timeout, Duration::from_secs(1));
        assert_eq!(settings.request_timeout, Duration::from_secs(2));
        assert_eq!(settings.max_bytes, 1024);
        assert_eq!(config.log_destination, LogTarget::Both);
    }

    #[test]
    fn unknown_field_is_parse_error() {
        let file = write_config("(port: 80)");
        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn bad_log_level_is_rejected() {
        let file = write_config(r#"(log_level: "chatty")"#);
        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(level) if level == "chatty"));
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::from_file(&dir.path().join("absent.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn api_url_override_wins_unless_blank() {
        let config = AppConfig::default();
        assert_eq!(
            config
                .clone()
                .with_api_url_override(Some("http://other:1".to_string()))
                .api_url,
            "http://other:1"
        );
        assert_eq!(
            config.clone().with_api_url_override(Some("  ".to_string())),
            config
        );
        assert_eq!(config.clone().with_api_url_override(None), config);
    }
}
