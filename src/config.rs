use std::{env, str::FromStr, time::Duration};

use thiserror::Error;

use crate::cache::MAX_TTL;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} no está definido en el entorno ni en .env")]
    Missing(&'static str),
    #[error("valor inválido para {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub max_connections: u32,
    pub categories_cache_ttl: Duration,
    // Si es false se conserva la ventana de datos viejos (hasta que venza el TTL)
    pub invalidate_cache_on_write: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let port = parse_or(&lookup, "PORT", 3000u16)?;
        let max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 5u32)?;
        let ttl_secs = parse_or(&lookup, "CATEGORIES_CACHE_TTL_SECS", 3600u64)?;
        if ttl_secs > MAX_TTL.as_secs() {
            return Err(ConfigError::Invalid {
                key: "CATEGORIES_CACHE_TTL_SECS",
                value: ttl_secs.to_string(),
            });
        }
        let invalidate_cache_on_write =
            parse_or(&lookup, "CATEGORIES_CACHE_INVALIDATE_ON_WRITE", true)?;

        Ok(Self {
            database_url,
            port,
            max_connections,
            categories_cache_ttl: Duration::from_secs(ttl_secs),
            invalidate_cache_on_write,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
