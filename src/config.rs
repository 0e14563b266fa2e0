//! User configuration loaded from `~/.countries-tui/config.yaml`

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{APP_DIR_NAME, DEFAULT_API_URL, DEFAULT_LOG_FILE};

const CONFIG_FILE: &str = "config.yaml";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Countries listing endpoint
    pub api_url: String,
    /// Where the favorites store lives
    pub data_dir: PathBuf,
    /// Log file path; relative paths resolve against `data_dir`
    pub log_file: PathBuf,
    /// Request timeout. Unset means the fetch may wait forever.
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: String::from(DEFAULT_API_URL),
            data_dir: app_dir(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults
    pub fn load() -> ConfigLoad {
        Self::load_or_default(&app_dir().join(CONFIG_FILE))
    }

    /// Load `path`; a missing or malformed file yields the defaults.
    ///
    /// The parse error is kept so it can be reported once logging is up.
    pub fn load_or_default(path: &Path) -> ConfigLoad {
        if !path.exists() {
            return ConfigLoad {
                config: Config::default(),
                error: None,
            };
        }
        match Self::from_file(path) {
            Ok(config) => ConfigLoad { config, error: None },
            Err(e) => ConfigLoad {
                config: Config::default(),
                error: Some(ConfigError {
                    path: path.to_path_buf(),
                    error: e,
                }),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Log file location. An empty `log_file` falls back to the default name.
    pub fn log_path(&self) -> PathBuf {
        let log_file = if self.log_file.as_os_str().is_empty() {
            Path::new(DEFAULT_LOG_FILE)
        } else {
            self.log_file.as_path()
        };

        if log_file.is_absolute() {
            log_file.to_path_buf()
        } else {
            self.data_dir.join(log_file)
        }
    }
}

/// Outcome of loading the config file
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    /// Set when the file existed but could not be used
    pub error: Option<ConfigError>,
}

#[derive(Debug)]
pub struct ConfigError {
    pub path: PathBuf,
    pub error: anyhow::Error,
}

impl ConfigLoad {
    /// Warn about a rejected config file. Call after the subscriber is installed.
    pub fn report(&self) {
        if let Some(ConfigError { path, error }) = &self.error {
            tracing::warn!(path = %path.display(), error = %error, "Invalid config, using defaults");
        }
    }
}

fn app_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let loaded = Config::load_or_default(&dir.path().join("config.yaml"));
        assert!(loaded.error.is_none());
        let config = loaded.config;
        assert_eq!(config, Config::default());
        assert_eq!(config.api_url, "https://restcountries.com/v3.1/all");
        assert_eq!(config.request_timeout_secs, None);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "api_url: http://localhost:8080/all\nrequest_timeout_secs: 5\n").unwrap();

        let config = Config::load_or_default(&path).config;
        assert_eq!(config.api_url, "http://localhost:8080/all");
        assert_eq!(config.request_timeout_secs, Some(5));
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "api_url: [unterminated").unwrap();
        assert!(Config::from_file(&path).is_err());

        let loaded = Config::load_or_default(&path);
        assert_eq!(loaded.config, Config::default());
        let error = loaded.error.as_ref().unwrap();
        assert_eq!(error.path, path);
    }

    /// Writer that appends formatted log lines to a shared buffer
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_malformed_file_warning_is_logged_on_report() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "api_url: [unterminated").unwrap();
        let loaded = Config::load_or_default(&path);

        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || loaded.report());

        let output = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains("Invalid config, using defaults"), "{output}");
        assert!(output.contains("config.yaml"), "{output}");
    }

    #[test]
    fn test_report_is_silent_for_valid_config() {
        let dir = tempdir().unwrap();
        let loaded = Config::load_or_default(&dir.path().join("missing.yaml"));

        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || loaded.report());
        assert!(buf.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_log_path_resolution() {
        let mut config = Config {
            data_dir: PathBuf::from("/data"),
            ..Config::default()
        };
        assert_eq!(config.log_path(), PathBuf::from("/data/countries-tui.log"));

        config.log_file = PathBuf::from("/var/log/countries.log");
        assert_eq!(config.log_path(), PathBuf::from("/var/log/countries.log"));
    }

    #[test]
    fn test_empty_log_file_uses_default_name() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "data_dir: /data\nlog_file: ''\n").unwrap();

        let config = Config::load_or_default(&path).config;
        assert_eq!(config.log_file, PathBuf::new());
        assert_eq!(config.log_path(), PathBuf::from("/data/countries-tui.log"));
        assert_eq!(config.log_path().file_name().unwrap(), DEFAULT_LOG_FILE);
    }
}
