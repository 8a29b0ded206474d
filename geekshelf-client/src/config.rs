use std::path::PathBuf;
use std::time::Duration;

use crate::error::BggError;

pub const DEFAULT_SCHEME: &str = "https";
pub const DEFAULT_HOST: &str = "boardgamegeek.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ENV_HOST: &str = "GEEKSHELF_HOST";
const ENV_SCHEME: &str = "GEEKSHELF_SCHEME";
const ENV_TOKEN: &str = "GEEKSHELF_TOKEN";
const ENV_RATE_MS: &str = "GEEKSHELF_RATE_MS";
const ENV_USERNAME: &str = "GEEKSHELF_USERNAME";
const ENV_PASSWORD: &str = "GEEKSHELF_PASSWORD";

fn default_user_agent() -> String {
    concat!("geekshelf/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Settings for a [`BggClient`](crate::BggClient).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub scheme: String,
    pub host: String,
    /// Minimum gap between two outgoing requests; zero disables limiting.
    pub min_request_interval_ms: u64,
    pub timeout_secs: u64,
    /// Sent as `Authorization: Bearer <token>` on every request.
    pub auth_token: Option<String>,
    pub user_agent: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            host: DEFAULT_HOST.to_string(),
            min_request_interval_ms: 0,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            auth_token: None,
            user_agent: default_user_agent(),
            username: None,
            password: None,
        }
    }
}

/// Where a setting's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    EnvVar(&'static str),
    ConfigFile,
    Default,
    Missing,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

/// Provenance of each setting.
#[derive(Debug)]
pub struct ConfigSources {
    pub scheme: ConfigSource,
    pub host: ConfigSource,
    pub min_request_interval_ms: ConfigSource,
    pub auth_token: ConfigSource,
    pub username: ConfigSource,
    pub password: ConfigSource,
}

/// TOML config file format.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct ConfigFile {
    bgg: Option<BggSection>,
}

#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct BggSection {
    scheme: Option<String>,
    host: Option<String>,
    min_request_interval_ms: Option<u64>,
    timeout_secs: Option<u64>,
    auth_token: Option<String>,
    username: Option<String>,
    password: Option<String>,
}

impl ClientConfig {
    /// Load settings from environment variables, the config file, or defaults.
    ///
    /// Priority: env vars > config file > defaults.
    pub fn load() -> Result<Self, BggError> {
        let file = load_config_file();
        Self::resolve(file.as_ref(), |name| std::env::var(name).ok())
    }

    fn resolve(
        file: Option<&BggSection>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, BggError> {
        let defaults = Self::default();

        let scheme = env(ENV_SCHEME)
            .or_else(|| file.and_then(|c| c.scheme.clone()))
            .unwrap_or(defaults.scheme);
        if scheme != "http" && scheme != "https" {
            return Err(BggError::config(format!(
                "Unsupported scheme '{scheme}', expected http or https"
            )));
        }

        let host = env(ENV_HOST)
            .or_else(|| file.and_then(|c| c.host.clone()))
            .unwrap_or(defaults.host);

        let min_request_interval_ms = match env(ENV_RATE_MS) {
            Some(raw) => raw.trim().parse().map_err(|_| {
                BggError::config(format!("{ENV_RATE_MS} must be a number of milliseconds, got '{raw}'"))
            })?,
            None => file
                .and_then(|c| c.min_request_interval_ms)
                .unwrap_or(defaults.min_request_interval_ms),
        };

        let timeout_secs = file
            .and_then(|c| c.timeout_secs)
            .unwrap_or(defaults.timeout_secs);

        let auth_token = env(ENV_TOKEN).or_else(|| file.and_then(|c| c.auth_token.clone()));
        let username = env(ENV_USERNAME).or_else(|| file.and_then(|c| c.username.clone()));
        let password = env(ENV_PASSWORD).or_else(|| file.and_then(|c| c.password.clone()));

        Ok(Self {
            scheme,
            host,
            min_request_interval_ms,
            timeout_secs,
            auth_token,
            user_agent: defaults.user_agent,
            username,
            password,
        })
    }

    /// Apply explicit values (e.g., from CLI args) on top of loaded ones.
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        auth_token: Option<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(token) = auth_token {
            self.auth_token = Some(token);
        }
        if let Some(name) = username {
            self.username = Some(name);
        }
        if let Some(pw) = password {
            self.password = Some(pw);
        }
        self
    }

    pub fn min_request_interval(&self) -> Duration {
        Duration::from_millis(self.min_request_interval_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Return the path to the config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("geekshelf").join("config.toml"))
}

/// Save settings to the config file, creating parent directories as needed.
///
/// Values equal to the defaults are left out. Returns the path written.
pub fn save_to_file(config: &ClientConfig) -> Result<PathBuf, BggError> {
    let path = config_path()
        .ok_or_else(|| BggError::config("Could not determine config directory"))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(&path, render_config(config)?)?;
    Ok(path)
}

fn render_config(config: &ClientConfig) -> Result<String, BggError> {
    let defaults = ClientConfig::default();
    let differs = |value: &String, default: &String| (value != default).then(|| value.clone());

    let file = ConfigFile {
        bgg: Some(BggSection {
            scheme: differs(&config.scheme, &defaults.scheme),
            host: differs(&config.host, &defaults.host),
            min_request_interval_ms: (config.min_request_interval_ms
                != defaults.min_request_interval_ms)
                .then_some(config.min_request_interval_ms),
            timeout_secs: (config.timeout_secs != defaults.timeout_secs)
                .then_some(config.timeout_secs),
            auth_token: config.auth_token.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
        }),
    };

    toml::to_string_pretty(&file)
        .map_err(|e| BggError::config(format!("Failed to serialize config: {}", e)))
}

/// Determine where each setting is coming from.
pub fn config_sources() -> ConfigSources {
    let file = load_config_file();
    let file = file.as_ref();

    let pick = |var: &'static str, in_file: bool, has_default: bool| {
        if std::env::var(var).is_ok() {
            ConfigSource::EnvVar(var)
        } else if in_file {
            ConfigSource::ConfigFile
        } else if has_default {
            ConfigSource::Default
        } else {
            ConfigSource::Missing
        }
    };

    ConfigSources {
        scheme: pick(ENV_SCHEME, file.is_some_and(|c| c.scheme.is_some()), true),
        host: pick(ENV_HOST, file.is_some_and(|c| c.host.is_some()), true),
        min_request_interval_ms: pick(
            ENV_RATE_MS,
            file.is_some_and(|c| c.min_request_interval_ms.is_some()),
            true,
        ),
        auth_token: pick(ENV_TOKEN, file.is_some_and(|c| c.auth_token.is_some()), false),
        username: pick(ENV_USERNAME, file.is_some_and(|c| c.username.is_some()), false),
        password: pick(ENV_PASSWORD, file.is_some_and(|c| c.password.is_some()), false),
    }
}

fn load_config_file() -> Option<BggSection> {
    let path = config_path()?;
    let content = std::fs::read_to_string(&path).ok()?;
    parse_config(&content)
}

fn parse_config(content: &str) -> Option<BggSection> {
    match toml::from_str::<ConfigFile>(content) {
        Ok(config) => config.bgg,
        Err(e) => {
            log::warn!("Ignoring malformed config file: {}", e);
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
