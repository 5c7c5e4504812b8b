//! Startup configuration
//!
//! With nothing set the service listens on 0.0.0.0:8080, starts with the
//! two seed movies and hands out sequential ids. That is the whole
//! required surface. The variables below are optional overrides on top of
//! it, read from the process env or a `.env` file:
//!
//! - `HOST`, `PORT`: listener address
//! - `ID_STRATEGY`: `sequential` (default) or `uuid`
//! - `SEED_MOVIES`: `false`, `0` or `no` starts with an empty collection
//!
//! Unset or unparsable values fall back to the defaults.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_PORT: u16 = 8080;

/// How ids are generated for created movies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    /// Decimal counter continuing after the seed ids
    Sequential,
    /// Random v4 UUIDs
    Uuid,
}

impl std::str::FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sequential" => Ok(IdStrategy::Sequential),
            "uuid" => Ok(IdStrategy::Uuid),
            _ => Err(format!("Unknown id strategy: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub id_strategy: IdStrategy,
    /// Start with the two seed movies instead of an empty collection
    pub seed_movies: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            id_strategy: IdStrategy::Sequential,
            seed_movies: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparsable values keep their defaults
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let id_strategy = match lookup("ID_STRATEGY") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{}, using sequential ids", e);
                defaults.id_strategy
            }),
            None => defaults.id_strategy,
        };

        Self {
            host: lookup("HOST")
                .and_then(|h| h.parse().ok())
                .unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            id_strategy,
            seed_movies: lookup("SEED_MOVIES")
                .map(|v| !matches!(v.to_lowercase().as_str(), "false" | "0" | "no"))
                .unwrap_or(defaults.seed_movies),
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
