//! Startup configuration.
//!
//! The listen port and the Sleeper API base URL are the only externally
//! configured values. They are resolved once (CLI flag, then environment
//! variable, then default) into an immutable [`Config`] that is passed to the
//! components that need it.

use crate::error::{Result, SleeperError};

pub const PORT_ENV_VAR: &str = "PORT";
pub const API_BASE_ENV_VAR: &str = "SLEEPER_API_BASE";

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_BASE: &str = "https://api.sleeper.app/v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Upstream base URL without a trailing slash.
    pub api_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl Config {
    /// Resolve configuration from explicit overrides and the process environment.
    pub fn resolve(port: Option<u16>, api_base: Option<String>) -> Result<Self> {
        Self::resolve_with(port, api_base, |key| std::env::var(key).ok())
    }

    /// Resolve configuration using `lookup` in place of the process environment.
    pub fn resolve_with<F>(port: Option<u16>, api_base: Option<String>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match port {
            Some(p) => p,
            None => match lookup(PORT_ENV_VAR) {
                Some(raw) if !raw.trim().is_empty() => {
                    raw.trim().parse::<u16>().map_err(|_| SleeperError::InvalidPort {
                        env_var: PORT_ENV_VAR.to_string(),
                        value: raw.clone(),
                    })?
                }
                _ => DEFAULT_PORT,
            },
        };

        let api_base = api_base
            .or_else(|| lookup(API_BASE_ENV_VAR))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Ok(Self {
            port,
            api_base: normalize_api_base(&api_base)?,
        })
    }
}

fn normalize_api_base(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(SleeperError::InvalidApiBase {
            value: raw.to_string(),
        })
    }
}
