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

//! Cryptographic primitives for Neo N3.
//!
//! Hashing (SHA-256, RIPEMD-160 and their Neo combinations), Base58Check
//! encoding, and secp256r1 ECDSA. Curve arithmetic itself is delegated to the
//! `p256` crate.

pub mod base58;
pub mod ecdsa;
pub mod hash;

pub use ecdsa::ECDsa;
pub use hash::{hash160, hash256, ripemd160, sha256};

use thiserror::Error;

/// Result type for cryptographic operations
pub type Result<T> = std::result::Result<T, Error>;

/// Cryptography errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    #[error("Base58 decode error: {0}")]
    Base58(String),

    #[error("Base58Check checksum mismatch")]
    Checksum,
}
