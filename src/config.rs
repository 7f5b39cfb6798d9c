// src/config.rs
use axum::http::HeaderValue;
use std::{env, num::NonZeroU32};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    allowed_origins: AllowedOrigins,
    rate_limit: Option<RateLimitSettings>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// CORS origins accepted by the router.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

/// Per-client token bucket settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitSettings {
    pub per_second: NonZeroU32,
    pub burst: NonZeroU32,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            per_second: NonZeroU32::new(10).unwrap_or(NonZeroU32::MIN),
            burst: NonZeroU32::new(20).unwrap_or(NonZeroU32::MIN),
        }
    }
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".into()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            allowed_origins: AllowedOrigins::Any,
            rate_limit: None,
        }
    }
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup("LISTEN_ADDR")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_listen_addr);

        let allowed_origins = match lookup("ALLOWED_ORIGINS") {
            Some(raw) => parse_origins(&raw)?,
            None => AllowedOrigins::Any,
        };

        let enabled = match lookup("RATE_LIMIT_ENABLED") {
            Some(raw) => parse_bool("RATE_LIMIT_ENABLED", &raw)?,
            None => false,
        };

        let rate_limit = if enabled {
            let defaults = RateLimitSettings::default();
            Some(RateLimitSettings {
                per_second: parse_non_zero(&lookup, "RATE_LIMIT_PER_SECOND")?
                    .unwrap_or(defaults.per_second),
                burst: parse_non_zero(&lookup, "RATE_LIMIT_BURST")?.unwrap_or(defaults.burst),
            })
        } else {
            None
        };

        Ok(Self {
            listen_addr,
            allowed_origins,
            rate_limit,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn allowed_origins(&self) -> &AllowedOrigins {
        &self.allowed_origins
    }

    /// `None` unless `RATE_LIMIT_ENABLED` is set.
    pub fn rate_limit(&self) -> Option<RateLimitSettings> {
        self.rate_limit
    }

    pub fn with_rate_limit(mut self, settings: RateLimitSettings) -> Self {
        self.rate_limit = Some(settings);
        self
    }
}

fn parse_origins(raw: &str) -> Result<AllowedOrigins, ConfigError> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.trim_end_matches('/').to_string())
        .collect();

    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        return Ok(AllowedOrigins::Any);
    }

    if let Some(bad) = origins
        .iter()
        .find(|origin| HeaderValue::from_str(origin).is_err())
    {
        return Err(ConfigError::Invalid(format!(
            "ALLOWED_ORIGINS contains an invalid origin: {bad:?}"
        )));
    }

    Ok(AllowedOrigins::List(origins))
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid(format!(
            "{key} must be a boolean, got {other:?}"
        ))),
    }
}

fn parse_non_zero<F>(lookup: &F, key: &str) -> Result<Option<NonZeroU32>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<NonZeroU32>()
        .map(Some)
        .map_err(|_| ConfigError::Invalid(format!("{key} must be a positive integer, got {raw:?}")))
}
