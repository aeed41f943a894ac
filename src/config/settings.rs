//! Runtime settings read from the environment (after `.env` is loaded by the binary).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/dev_events";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

/// Which persistence backend serves the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

impl FromStr for StoreKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreKind::Postgres),
            "memory" => Ok(StoreKind::Memory),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    /// Maximum accepted request body, in bytes.
    pub body_limit: usize,
    pub store: StoreKind,
}

impl Settings {
    /// Read `DATABASE_URL`, `BIND_ADDR`, `DATABASE_MAX_CONNECTIONS`, `REQUEST_BODY_LIMIT`
    /// and `DEV_EVENTS_STORE` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Settings::from_env`] with a caller-supplied variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let bind_addr = parse_or(&lookup, "BIND_ADDR", || {
            SocketAddr::from_str(DEFAULT_BIND_ADDR).map_err(|_| ConfigError::Invalid {
                key: "BIND_ADDR",
                value: DEFAULT_BIND_ADDR.into(),
            })
        })?;
        let max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", || Ok(DEFAULT_MAX_CONNECTIONS))?;
        let body_limit = parse_or(&lookup, "REQUEST_BODY_LIMIT", || Ok(DEFAULT_BODY_LIMIT))?;
        let store = parse_or(&lookup, "DEV_EVENTS_STORE", || Ok(StoreKind::Postgres))?;
        Ok(Settings {
            database_url,
            bind_addr,
            max_connections,
            body_limit,
            store,
        })
    }
}

fn parse_or<F, T, D>(lookup: &F, key: &'static str, default: D) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    D: FnOnce() -> Result<T, ConfigError>,
{
    match lookup(key).filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(s.bind_addr.port(), 3000);
        assert_eq!(s.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(s.body_limit, DEFAULT_BODY_LIMIT);
        assert_eq!(s.store, StoreKind::Postgres);
    }

    #[test]
    fn reads_overrides() {
        let s = settings(&[
            ("DATABASE_URL", "postgres://db/events"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("REQUEST_BODY_LIMIT", "1024"),
            ("DEV_EVENTS_STORE", "Memory"),
        ])
        .unwrap();
        assert_eq!(s.database_url, "postgres://db/events");
        assert_eq!(s.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(s.max_connections, 12);
        assert_eq!(s.body_limit, 1024);
        assert_eq!(s.store, StoreKind::Memory);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let s = settings(&[("DATABASE_MAX_CONNECTIONS", "  ")]).unwrap();
        assert_eq!(s.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn malformed_value_is_rejected() {
        let err = settings(&[("DATABASE_MAX_CONNECTIONS", "many")]).unwrap_err();
        match err {
            ConfigError::Invalid { key, value } => {
                assert_eq!(key, "DATABASE_MAX_CONNECTIONS");
                assert_eq!(value, "many");
            }
        }
        assert!(settings(&[("DEV_EVENTS_STORE", "sqlite")]).is_err());
        assert!(settings(&[("BIND_ADDR", "localhost")]).is_err());
    }
}
