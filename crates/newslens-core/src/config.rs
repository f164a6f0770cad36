//! Client configuration.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `NEWSLENS_API_BASE_URL` | `http://localhost:8080` | backend base url |
//! | `NEWSLENS_TIMEOUT_SECS` | `30` | per-request timeout |
//! | `NEWSLENS_HOME` | `$HOME/.newslens` | directory holding the session file |

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::ValidationError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const SESSION_FILE_NAME: &str = "session.json";

/// Settings shared by the public and admin transports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("newslens/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Build a config for `base_url`. The url must be absolute http(s).
    pub fn new(base_url: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            ..Self::default()
        })
    }

    /// Read the config from the environment, falling back to defaults for
    /// unset variables. An unparsable timeout is ignored.
    pub fn from_env() -> Result<Self, ValidationError> {
        let mut config = match env::var("NEWSLENS_API_BASE_URL") {
            Ok(value) if !value.trim().is_empty() => Self::new(&value)?,
            _ => Self::default(),
        };

        if let Some(secs) = env::var("NEWSLENS_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
        {
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an API path (leading slash expected) onto the base url.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

fn normalize_base_url(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    let parsed = Url::parse(trimmed).map_err(|error| ValidationError::InvalidBaseUrl {
        value: trimmed.to_owned(),
        reason: error.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ValidationError::InvalidBaseUrl {
            value: trimmed.to_owned(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    Ok(trimmed.trim_end_matches('/').to_owned())
}

/// Resolve the newslens home directory from environment or default.
pub fn resolve_newslens_home() -> PathBuf {
    if let Some(path) = env::var_os("NEWSLENS_HOME") {
        let path = PathBuf::from(path);
        if !path.as_os_str().is_empty() {
            return path;
        }
    }

    if let Some(home) = env::var_os("HOME") {
        return PathBuf::from(home).join(".newslens");
    }

    PathBuf::from(".newslens")
}

/// Default location of the persisted admin session.
pub fn default_session_path() -> PathBuf {
    resolve_newslens_home().join(SESSION_FILE_NAME)
}
