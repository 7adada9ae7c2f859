use std::{env, fmt, time::Duration};

// Runtime/server configuration, read once at startup.

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);
// Base64 images get big; allow generous request bodies.
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub api_key: String,
    pub port: u16,
    pub upstream_timeout: Duration,
    pub body_limit_bytes: usize,
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    InvalidUrl {
        value: String,
        source: url::ParseError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(name) => write!(f, "{name} must be set"),
            ConfigError::InvalidUrl { value, source } => {
                write!(f, "invalid upstream url {value:?}: {source}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    // Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = required(&lookup, "PLANT_ID_API_URL")?;
        url::Url::parse(&api_url).map_err(|source| ConfigError::InvalidUrl {
            value: api_url.clone(),
            source,
        })?;
        let api_key = required(&lookup, "PLANT_ID_API_KEY")?;

        let port = parsed(&lookup, "PORT").unwrap_or(DEFAULT_PORT);
        let upstream_timeout = parsed::<u64, _>(&lookup, "PLANT_ID_TIMEOUT_MS")
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT);
        let body_limit_bytes =
            parsed(&lookup, "BODY_LIMIT_BYTES").unwrap_or(DEFAULT_BODY_LIMIT_BYTES);

        Ok(Self {
            api_url,
            api_key,
            port,
            upstream_timeout,
            body_limit_bytes,
        })
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

// Unset or unparsable values fall back to the caller's default.
fn parsed<T, F>(lookup: &F, name: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(name).and_then(|value| value.parse().ok())
}
