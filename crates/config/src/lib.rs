// Copyright (C) 2015-2025 The Neo Project.
//
// lib.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Neo Configuration Module
//!
//! Protocol constants shared by every crate in the workspace, plus the
//! client-side configuration (RPC endpoint, network, fee policy and key
//! references) loaded from TOML.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod client_config;
mod key_ref;

pub use client_config::{ClientConfig, ConfigError, FeeConfig};
pub use key_ref::KeyRef;

/// Size of a hash (UInt256) in bytes
pub const HASH_SIZE: usize = 32;
/// Size of an address (UInt160) in bytes
pub const ADDRESS_SIZE: usize = 20;
/// Size of a compressed secp256r1 public key
pub const PUBLIC_KEY_SIZE: usize = 33;
/// Size of a raw `r || s` signature
pub const SIGNATURE_SIZE: usize = 64;
/// Network limits constants
pub const MAX_TRANSACTION_SIZE: usize = 102_400; // 100KB
/// Maximum number of attributes (signers included) carried by a transaction
pub const MAX_TRANSACTION_ATTRIBUTES: usize = 16;
/// Maximum script size in bytes
pub const MAX_SCRIPT_SIZE: usize = 65536; // 64KB

/// Address version byte used by Neo N3 addresses ("N..." prefix)
pub const DEFAULT_ADDRESS_VERSION: u8 = 0x35;
/// Default network fee per transaction byte, in datoshi
pub const DEFAULT_FEE_PER_BYTE: i64 = 1000;
/// Default execution fee factor
pub const DEFAULT_EXEC_FEE_FACTOR: i64 = 30;
/// Upper bound of `valid_until_block - current height`
pub const DEFAULT_MAX_VALID_UNTIL_BLOCK_INCREMENT: u32 = 5760;
/// Default timeout applied to a single node round trip
pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 30;
/// Default local node endpoint
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:10332";

/// Network type for Neo blockchain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    MainNet,
    #[default]
    TestNet,
    Private,
}

impl NetworkType {
    /// Gets the network magic number
    pub fn magic(&self) -> u32 {
        match self {
            NetworkType::MainNet => 0x334f454e, // "NEO3" in little endian
            NetworkType::TestNet => 0x3554334e, // "N3T5" in little endian
            NetworkType::Private => 0x00000000,
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkType::MainNet => write!(f, "mainnet"),
            NetworkType::TestNet => write!(f, "testnet"),
            NetworkType::Private => write!(f, "private"),
        }
    }
}

impl FromStr for NetworkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" => Ok(NetworkType::MainNet),
            "testnet" | "test" => Ok(NetworkType::TestNet),
            "private" | "privnet" => Ok(NetworkType::Private),
            _ => Err(format!("Unknown network type: {}", s)),
        }
    }
}
