//! Configuration Module
//!
//! This module defines all configuration structures for the ante guard.
//! Configuration is loaded from TOML files and parsed using serde.

use crate::ante::FilterType;
use anyhow::Context as _;
use serde::Deserialize;
use std::fs;

/// Main configuration structure
///
/// # Example TOML
/// ```toml
/// [chain]
/// chain_id = "mars-1"
///
/// [address]
/// account_prefix = "mars"
///
/// [ante]
/// filters = ["ibc_security"]
///
/// [pool]
/// max_pending = 5000
///
/// [api]
/// host = "127.0.0.1"
/// port = 8545
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub chain: ChainConfig,
    pub address: AddressConfig,
    #[serde(default)]
    pub ante: AnteConfig,
    #[serde(default)]
    pub pool: PoolConfig,
    pub api: ApiConfig,
}

/// Chain identity reported in the execution context
#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
    pub chain_id: String,
}

/// Address format configuration
///
/// # Fields
/// - `account_prefix`: Bech32 human-readable prefix of account addresses (e.g., "mars")
#[derive(Debug, Clone, Deserialize)]
pub struct AddressConfig {
    pub account_prefix: String,
}

/// Ante filter configuration
///
/// Filters run in the order listed. Defaults to `["ibc_security"]`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnteConfig {
    #[serde(default = "default_filters")]
    pub filters: Vec<FilterType>,
}

impl Default for AnteConfig {
    fn default() -> Self {
        Self {
            filters: default_filters(),
        }
    }
}

fn default_filters() -> Vec<FilterType> {
    vec![FilterType::IbcSecurity]
}

/// Admission pool configuration
///
/// # Fields
/// - `max_pending`: Maximum number of admitted transactions held at once
#[derive(Debug, Clone, Deserialize)]
pub struct PoolConfig {
    #[serde(default = "default_max_pending")]
    pub max_pending: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_pending: default_max_pending(),
        }
    }
}

fn default_max_pending() -> usize {
    5000
}

/// API server configuration
///
/// # Fields
/// - `host`: IP address to bind to (e.g., "127.0.0.1" or "0.0.0.0")
/// - `port`: TCP port to listen on (e.g., 8545)
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the TOML configuration file
    ///
    /// # Returns
    /// * `Ok(Config)` if the file was successfully loaded and parsed
    /// * `Err` if the file couldn't be read or the TOML is invalid
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path))?;

        Self::parse(&content).with_context(|| format!("invalid config file {}", path))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}
