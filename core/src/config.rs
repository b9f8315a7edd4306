use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use admin_directory_client::ClientOptions;
use admin_directory_client::DEFAULT_DIRECTORY_URL;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::error::ConfigError;

pub const CONFIG_FILENAME: &str = "config.toml";
pub const HOME_ENV_VAR: &str = "ADMIN_CONSOLE_HOME";
const DEFAULT_HOME_DIRNAME: &str = ".admin-console";

/// Settings read from `config.toml` in the console home.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Endpoint returning the JSON array of directory users.
    #[serde(default = "default_directory_url")]
    pub directory_url: String,

    /// Request timeout for the directory fetch, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// BCP-47 locale used to order names.
    #[serde(default = "default_collation_locale")]
    pub collation_locale: String,

    /// Where preferences and logs live. Not read from the file.
    #[serde(skip)]
    pub home: PathBuf,
}

fn default_directory_url() -> String {
    DEFAULT_DIRECTORY_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_collation_locale() -> String {
    "en".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            directory_url: default_directory_url(),
            request_timeout_secs: default_request_timeout_secs(),
            collation_locale: default_collation_locale(),
            home: PathBuf::from(DEFAULT_HOME_DIRNAME),
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub home: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub directory_url: Option<String>,
}

impl ConsoleConfig {
    /// Resolve the home directory, read `config.toml` (defaults when the
    /// file is missing), then apply `overrides`.
    pub fn load(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let home = match overrides.home {
            Some(home) => home,
            None => find_console_home()?,
        };
        let path = overrides
            .config_path
            .unwrap_or_else(|| home.join(CONFIG_FILENAME));
        let mut config = Self::from_file(&path)?;
        config.home = home;
        if let Some(url) = overrides.directory_url {
            config.directory_url = url;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                debug!(path = %path.display(), "loading console config");
                toml::from_str(&contents).map_err(|source| ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                })
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.directory_url.trim().is_empty() {
            return Err(ConfigError::Invalid("directory_url must not be empty".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            url: self.directory_url.clone(),
            timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }

    pub fn log_dir(&self) -> PathBuf {
        self.home.join("log")
    }
}

/// `$ADMIN_CONSOLE_HOME` when set and non-empty, else `~/.admin-console`.
pub fn find_console_home() -> Result<PathBuf, ConfigError> {
    if let Some(val) = std::env::var(HOME_ENV_VAR).ok().filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(val));
    }
    let mut home = dirs::home_dir().ok_or(ConfigError::NoHome)?;
    home.push(DEFAULT_HOME_DIRNAME);
    Ok(home)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ConsoleConfig::load(ConfigOverrides {
            home: Some(dir.path().to_path_buf()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(config.directory_url, DEFAULT_DIRECTORY_URL);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.collation_locale, "en");
        assert_eq!(config.home, dir.path());
    }

    #[test]
    fn file_values_and_overrides_apply() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "directory_url = \"http://file.example/users\"\nrequest_timeout_secs = 5\ncollation_locale = \"sv\"\n",
        )
        .unwrap();

        let from_file = ConsoleConfig::load(ConfigOverrides {
            home: Some(dir.path().to_path_buf()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(from_file.directory_url, "http://file.example/users");
        assert_eq!(from_file.client_options().timeout, Duration::from_secs(5));
        assert_eq!(from_file.collation_locale, "sv");

        let overridden = ConsoleConfig::load(ConfigOverrides {
            home: Some(dir.path().to_path_buf()),
            directory_url: Some("http://cli.example/users".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(overridden.directory_url, "http://cli.example/users");
        assert_eq!(overridden.request_timeout_secs, 5);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "request_timeout_secs = 0\n").unwrap();
        let err = ConsoleConfig::load(ConfigOverrides {
            home: Some(dir.path().to_path_buf()),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        fs::write(dir.path().join(CONFIG_FILENAME), "request_timeout_secs = \"soon\"\n").unwrap();
        let err = ConsoleConfig::from_file(&dir.path().join(CONFIG_FILENAME)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
