//! Server configuration loaded from the environment

use anyhow::{Context, bail};
use auth::AuthConfig;
use auth::application::config::DEFAULT_SESSION_TTL;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

#[derive(Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub bind_addr: SocketAddr,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let max_connections = parse_or(&var, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            bail!("DATABASE_MAX_CONNECTIONS must be at least 1");
        }

        let acquire_timeout = Duration::from_secs(parse_or(
            &var,
            "DATABASE_ACQUIRE_TIMEOUT_SECS",
            DEFAULT_ACQUIRE_TIMEOUT_SECS,
        )?);

        let bind_addr = match var("BIND_ADDR") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("BIND_ADDR is not a socket address: {raw}"))?,
            None => DEFAULT_BIND_ADDR.parse()?,
        };

        let session_ttl = Duration::from_secs(parse_or(
            &var,
            "SESSION_TTL_SECS",
            DEFAULT_SESSION_TTL.as_secs(),
        )?);
        if session_ttl.is_zero() {
            bail!("SESSION_TTL_SECS must be positive");
        }

        let password_pepper = var("PASSWORD_PEPPER")
            .map(|b64| platform::crypto::from_base64(b64.trim()))
            .transpose()
            .context("PASSWORD_PEPPER must be standard base64")?;

        Ok(Self {
            database_url,
            max_connections,
            acquire_timeout,
            bind_addr,
            auth: AuthConfig {
                session_ttl,
                password_pepper,
            },
        })
    }
}

fn parse_or<T>(var: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match var(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/auth")]).unwrap();

        assert_eq!(config.database_url, "postgres://localhost/auth");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout, Duration::from_secs(5));
        assert_eq!(config.bind_addr, "0.0.0.0:31113".parse().unwrap());
        assert_eq!(config.auth.session_ttl, Duration::from_secs(3600));
        assert!(config.auth.password_pepper.is_none());
    }

    #[test]
    fn test_database_url_required() {
        assert!(load(&[]).is_err());
        assert!(load(&[("DATABASE_URL", "  ")]).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("DATABASE_URL", "postgres://db/auth"),
            ("DATABASE_MAX_CONNECTIONS", "20"),
            ("DATABASE_ACQUIRE_TIMEOUT_SECS", "2"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("SESSION_TTL_SECS", "60"),
            ("PASSWORD_PEPPER", "cGVwcGVy"),
        ])
        .unwrap();

        assert_eq!(config.max_connections, 20);
        assert_eq!(config.acquire_timeout, Duration::from_secs(2));
        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.auth.session_ttl, Duration::from_secs(60));
        assert_eq!(config.auth.pepper(), Some(&b"pepper"[..]));
    }

    #[test]
    fn test_invalid_values() {
        let base = ("DATABASE_URL", "postgres://db/auth");

        assert!(load(&[base, ("DATABASE_MAX_CONNECTIONS", "many")]).is_err());
        assert!(load(&[base, ("DATABASE_MAX_CONNECTIONS", "0")]).is_err());
        assert!(load(&[base, ("BIND_ADDR", "localhost")]).is_err());
        assert!(load(&[base, ("SESSION_TTL_SECS", "0")]).is_err());
        assert!(load(&[base, ("SESSION_TTL_SECS", "-1")]).is_err());
        assert!(load(&[base, ("PASSWORD_PEPPER", "not base64!")]).is_err());
    }
}
