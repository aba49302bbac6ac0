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

//! # Neo Wallets
//!
//! Key pairs and single-signature accounts for Neo N3.
//!
//! An [`Account`] owns at most one [`KeyPair`]. Everything public about it
//! (verification script, script hash, address) is derived from the
//! compressed public key; the private scalar never leaves the key pair
//! except through an explicit WIF export.

pub mod account;
pub mod contract;
pub mod helper;
pub mod key_pair;

pub use account::Account;
pub use contract::Contract;
pub use helper::{address_from_public_key, script_hash_from_address};
pub use key_pair::KeyPair;

use thiserror::Error;

/// Result type for wallet operations
pub type WalletResult<T> = std::result::Result<T, WalletError>;

/// Wallet errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("signing failed: {0}")]
    Signing(String),

    #[error("invalid WIF: {0}")]
    InvalidWif(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

impl From<neo_cryptography::Error> for WalletError {
    fn from(err: neo_cryptography::Error) -> Self {
        match err {
            neo_cryptography::Error::KeyGeneration(msg) => WalletError::KeyGeneration(msg),
            other => WalletError::InvalidKey(other.to_string()),
        }
    }
}
