//! Process configuration, read once from the environment at startup.

use crate::store::StoreLocation;
use log::{info, warn};
use std::{env, fmt::Display, path::PathBuf, str::FromStr};
use thiserror::Error;

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const DATABASE_NAME: &str = "DATABASE_NAME";
pub const PORT: &str = "PORT";
pub const HOST: &str = "HOST";

const DEFAULT_PORT: &str = "8000";
const DEFAULT_HOST: &str = "0.0.0.0";
const MEMORY_URL: &str = ":memory:";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    NotConfigured(&'static str),

    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            host: try_load(HOST, DEFAULT_HOST)?,
            port: try_load(PORT, DEFAULT_PORT)?,
            database_url: var(DATABASE_URL),
            database_name: var(DATABASE_NAME),
        })
    }

    /// Resolves `DATABASE_URL` and `DATABASE_NAME` into a database location:
    /// `<url>/<name>.sqlite`, or an in-memory database for `:memory:`.
    pub fn store_location(&self) -> Result<StoreLocation, ConfigError> {
        let url = self
            .database_url
            .as_deref()
            .ok_or(ConfigError::NotConfigured(DATABASE_URL))?;
        let name = self
            .database_name
            .as_deref()
            .ok_or(ConfigError::NotConfigured(DATABASE_NAME))?;

        let url = match url.split_once("://") {
            Some(("sqlite", path)) => path,
            Some((scheme, _)) => {
                return Err(ConfigError::InvalidValue {
                    key: DATABASE_URL,
                    message: format!("unsupported scheme '{scheme}', expected sqlite:// or a path"),
                });
            }
            None => url,
        };
        if url == MEMORY_URL {
            return Ok(StoreLocation::Memory);
        }
        if name.contains(['/', '\\']) || name == ".." {
            return Err(ConfigError::InvalidValue {
                key: DATABASE_NAME,
                message: format!("'{name}' is not a plain name"),
            });
        }

        Ok(StoreLocation::File(
            PathBuf::from(url).join(format!("{name}.sqlite")),
        ))
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e: T::Err| {
            warn!("Invalid {key} value: {e}");
            ConfigError::InvalidValue {
                key,
                message: e.to_string(),
            }
        })
}
