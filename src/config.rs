//! Server configuration loaded from environment variables.

use std::time::Duration;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SEED_USERS: u64 = 10_000;
const DEFAULT_SIMULATE_INTERVAL_SECS: u64 = 30;
const DEFAULT_PAGE_SIZE: u64 = 100;
const DEFAULT_MAX_PAGE_SIZE: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Number of synthetic users created at startup.
    pub seed_users: u64,
    /// Fixed RNG seed for a reproducible roster. Random when unset.
    pub seed: Option<u64>,
    /// Period of the background rating simulation. Zero disables it.
    pub simulate_interval: Duration,
    pub paging: PagingConfig,
}

/// Page size normalisation for `GET /api/leaderboard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingConfig {
    pub default_size: u64,
    pub max_size: u64,
}

impl PagingConfig {
    /// Floors `max_size` at 1 and clamps `default_size` into `[1, max_size]`.
    #[must_use]
    pub fn new(default_size: u64, max_size: u64) -> Self {
        let max_size = max_size.max(1);
        Self { default_size: default_size.clamp(1, max_size), max_size }
    }
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self { default_size: DEFAULT_PAGE_SIZE, max_size: DEFAULT_MAX_PAGE_SIZE }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            port: env_parse("PORT", DEFAULT_PORT),
            seed_users: env_parse("SEED_USERS", DEFAULT_SEED_USERS),
            seed: std::env::var("SEED").ok().and_then(|v| v.parse().ok()),
            simulate_interval: Duration::from_secs(env_parse(
                "SIMULATE_INTERVAL_SECS",
                DEFAULT_SIMULATE_INTERVAL_SECS,
            )),
            paging: PagingConfig::new(
                env_parse("DEFAULT_PAGE_SIZE", DEFAULT_PAGE_SIZE),
                env_parse("MAX_PAGE_SIZE", DEFAULT_MAX_PAGE_SIZE),
            ),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            seed_users: DEFAULT_SEED_USERS,
            seed: None,
            simulate_interval: Duration::from_secs(DEFAULT_SIMULATE_INTERVAL_SECS),
            paging: PagingConfig::default(),
        }
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.seed_users, 10_000);
        assert_eq!(cfg.simulate_interval, Duration::from_secs(30));
        assert_eq!(cfg.paging.default_size, 100);
        assert_eq!(cfg.paging.max_size, 500);
        assert!(cfg.seed.is_none());
    }

    #[test]
    fn env_parse_falls_back_on_missing_key() {
        assert_eq!(env_parse("LEADERBOARD_TEST_SURELY_UNSET_KEY", 42_u64), 42);
    }

    #[test]
    fn env_parse_reads_valid_value() {
        unsafe { std::env::set_var("__TEST_LB_EP_VALID__", "250") };
        assert_eq!(env_parse("__TEST_LB_EP_VALID__", 7_u64), 250);
        unsafe { std::env::remove_var("__TEST_LB_EP_VALID__") };
    }

    #[test]
    fn env_parse_falls_back_on_invalid_value() {
        unsafe { std::env::set_var("__TEST_LB_EP_INVALID__", "-3") };
        assert_eq!(env_parse("__TEST_LB_EP_INVALID__", 7_u64), 7);
        unsafe { std::env::remove_var("__TEST_LB_EP_INVALID__") };
    }

    #[test]
    fn paging_floors_max_and_clamps_default() {
        assert_eq!(PagingConfig::new(100, 0), PagingConfig { default_size: 1, max_size: 1 });
        assert_eq!(PagingConfig::new(0, 500), PagingConfig { default_size: 1, max_size: 500 });
        assert_eq!(PagingConfig::new(900, 250), PagingConfig { default_size: 250, max_size: 250 });
        assert_eq!(PagingConfig::new(100, 500), PagingConfig::default());
    }

    #[test]
    fn from_env_normalises_paging() {
        unsafe {
            std::env::set_var("MAX_PAGE_SIZE", "0");
            std::env::set_var("DEFAULT_PAGE_SIZE", "100");
        }
        let cfg = ServerConfig::from_env();
        unsafe {
            std::env::remove_var("MAX_PAGE_SIZE");
            std::env::remove_var("DEFAULT_PAGE_SIZE");
        }
        assert_eq!(cfg.paging, PagingConfig { default_size: 1, max_size: 1 });
    }
}
