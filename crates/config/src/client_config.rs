// Copyright (C) 2015-2025 The Neo Project.
//
// client_config.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Client configuration loaded from TOML.

use crate::{
    KeyRef, NetworkType, DEFAULT_ADDRESS_VERSION, DEFAULT_EXEC_FEE_FACTOR, DEFAULT_FEE_PER_BYTE,
    DEFAULT_MAX_VALID_UNTIL_BLOCK_INCREMENT, DEFAULT_RPC_TIMEOUT_SECS, DEFAULT_RPC_URL,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid rpc url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid key reference '{0}', expected env:NAME or file:PATH")]
    InvalidKeyRef(String),

    #[error("no key named '{0}' in configuration")]
    UnknownKey(String),

    #[error("environment variable {0} is not set")]
    MissingEnv(String),

    #[error("key reference {0} resolved to an empty value")]
    EmptyKey(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Fee policy overrides. Values are in datoshi (1e-8 GAS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeConfig {
    pub fee_per_byte: i64,
    pub exec_fee_factor: i64,
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            fee_per_byte: DEFAULT_FEE_PER_BYTE,
            exec_fee_factor: DEFAULT_EXEC_FEE_FACTOR,
        }
    }
}

/// Everything the toolkit needs to reach a node and sign on behalf of named
/// accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// JSON-RPC endpoint of the node.
    pub rpc_url: String,
    /// Network the node belongs to.
    pub network: NetworkType,
    /// Overrides the magic implied by `network` (private chains).
    pub network_magic: Option<u32>,
    pub address_version: u8,
    pub rpc_timeout_secs: u64,
    pub max_valid_until_block_increment: u32,
    pub fees: FeeConfig,
    /// Named key references, e.g. `committee = "env:NEO_COMMITTEE_WIF"`.
    pub keys: BTreeMap<String, KeyRef>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            network: NetworkType::default(),
            network_magic: None,
            address_version: DEFAULT_ADDRESS_VERSION,
            rpc_timeout_secs: DEFAULT_RPC_TIMEOUT_SECS,
            max_valid_until_block_increment: DEFAULT_MAX_VALID_UNTIL_BLOCK_INCREMENT,
            fees: FeeConfig::default(),
            keys: BTreeMap::new(),
        }
    }
}

impl ClientConfig {
    /// Loads and validates a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), rpc_url = %config.rpc_url, "configuration loaded");
        Ok(config)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rpc_url()?;
        if self.rpc_timeout_secs == 0 {
            return Err(ConfigError::Invalid("rpc_timeout_secs must be positive".into()));
        }
        if self.max_valid_until_block_increment == 0 {
            return Err(ConfigError::Invalid(
                "max_valid_until_block_increment must be positive".into(),
            ));
        }
        if self.fees.fee_per_byte < 0 || self.fees.exec_fee_factor < 0 {
            return Err(ConfigError::Invalid("fee values must not be negative".into()));
        }
        Ok(())
    }

    /// Parsed node endpoint.
    pub fn rpc_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.rpc_url).map_err(|e| ConfigError::InvalidUrl {
            url: self.rpc_url.clone(),
            reason: e.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::InvalidUrl {
                url: self.rpc_url.clone(),
                reason: format!("unsupported scheme '{other}'"),
            }),
        }
    }

    /// Magic used for signing-payload domain separation.
    pub fn magic(&self) -> u32 {
        self.network_magic.unwrap_or_else(|| self.network.magic())
    }

    pub fn rpc_timeout(&self) -> Duration {
        Duration::from_secs(self.rpc_timeout_secs)
    }

    /// Looks up a named key reference.
    pub fn key(&self, name: &str) -> Result<&KeyRef, ConfigError> {
        self.keys
            .get(name)
            .ok_or_else(|| ConfigError::UnknownKey(name.to_string()))
    }
}
