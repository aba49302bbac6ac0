// Copyright (C) 2015-2025 The Neo Project.
//
// ecdsa.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! ECDSA (Elliptic Curve Digital Signature Algorithm) implementation for Neo.
//!
//! Neo N3 accounts use secp256r1 (P-256). Signatures are the raw 64-byte
//! `r || s` form over the SHA-256 digest of the message, with RFC 6979
//! deterministic nonces.

use crate::{Error, Result};
use neo_config::{HASH_SIZE, PUBLIC_KEY_SIZE, SIGNATURE_SIZE};
use p256::{
    ecdsa::{signature::Signer, signature::Verifier, Signature, SigningKey, VerifyingKey},
    elliptic_curve::sec1::ToEncodedPoint,
    PublicKey, SecretKey,
};
use rand::{rngs::OsRng, RngCore};
use zeroize::Zeroizing;

const MAX_KEY_GENERATION_ATTEMPTS: usize = 16;
const UNCOMPRESSED_PUBLIC_KEY_SIZE: usize = 65;

/// ECDSA implementation for Neo blockchain.
pub struct ECDsa;

impl ECDsa {
    /// Generates a new random private key from the operating system RNG.
    pub fn generate_private_key() -> Result<Zeroizing<[u8; HASH_SIZE]>> {
        let mut candidate = Zeroizing::new([0u8; HASH_SIZE]);
        for _ in 0..MAX_KEY_GENERATION_ATTEMPTS {
            OsRng
                .try_fill_bytes(&mut candidate[..])
                .map_err(|e| Error::KeyGeneration(e.to_string()))?;
            if Self::validate_private_key(&candidate[..]) {
                return Ok(candidate);
            }
        }
        Err(Error::KeyGeneration(
            "random source produced no valid scalar".to_string(),
        ))
    }

    /// Validates a private key: 32 bytes encoding a scalar in `[1, n)`.
    pub fn validate_private_key(private_key: &[u8]) -> bool {
        Self::secret_key(private_key).is_ok()
    }

    /// Derives the 33-byte compressed public key from a private key.
    pub fn derive_compressed_public_key(private_key: &[u8]) -> Result<[u8; PUBLIC_KEY_SIZE]> {
        let secret_key = Self::secret_key(private_key)?;
        let encoded = secret_key.public_key().to_encoded_point(true);
        encoded
            .as_bytes()
            .try_into()
            .map_err(|_| Error::InvalidKey("unexpected public key encoding".to_string()))
    }

    /// Parses a SEC1 public key (compressed or uncompressed) and returns its
    /// compressed form.
    pub fn compress_public_key(public_key: &[u8]) -> Result<[u8; PUBLIC_KEY_SIZE]> {
        Self::check_encoding(public_key)?;
        let key = PublicKey::from_sec1_bytes(public_key)
            .map_err(|e| Error::InvalidKey(format!("Invalid public key: {e}")))?;
        key.to_encoded_point(true)
            .as_bytes()
            .try_into()
            .map_err(|_| Error::InvalidKey("unexpected public key encoding".to_string()))
    }

    /// Validates a public key.
    pub fn validate_public_key(public_key: &[u8]) -> bool {
        Self::check_encoding(public_key).is_ok() && PublicKey::from_sec1_bytes(public_key).is_ok()
    }

    /// Signs `message` (hashed with SHA-256) with the given private key.
    pub fn sign(message: &[u8], private_key: &[u8]) -> Result<[u8; SIGNATURE_SIZE]> {
        let signing_key = SigningKey::from(Self::secret_key(private_key)?);
        let signature: Signature = signing_key.sign(message);

        let mut output = [0u8; SIGNATURE_SIZE];
        output.copy_from_slice(&signature.to_bytes());
        Ok(output)
    }

    /// Verifies a 64-byte signature of `message` against a SEC1 public key.
    pub fn verify(message: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool> {
        let sig = Signature::from_slice(signature)
            .map_err(|e| Error::InvalidSignature(format!("Invalid signature format: {e}")))?;
        Self::check_encoding(public_key)?;
        let verifying_key = VerifyingKey::from_sec1_bytes(public_key)
            .map_err(|e| Error::InvalidKey(format!("Invalid public key: {e}")))?;

        Ok(verifying_key.verify(message, &sig).is_ok())
    }

    /// Only `02`/`03` compressed and `04` uncompressed points are Neo keys.
    fn check_encoding(public_key: &[u8]) -> Result<()> {
        match (public_key.len(), public_key.first().copied()) {
            (PUBLIC_KEY_SIZE, Some(0x02 | 0x03)) | (UNCOMPRESSED_PUBLIC_KEY_SIZE, Some(0x04)) => {
                Ok(())
            }
            (len, tag) => Err(Error::InvalidKey(format!(
                "Unsupported public key encoding: {len} bytes, tag {:#04x}",
                tag.unwrap_or_default()
            ))),
        }
    }

    fn secret_key(private_key: &[u8]) -> Result<SecretKey> {
        if private_key.len() != HASH_SIZE {
            return Err(Error::InvalidKey(format!(
                "Private key must be {HASH_SIZE} bytes, got {}",
                private_key.len()
            )));
        }
        SecretKey::from_slice(private_key)
            .map_err(|_| Error::InvalidKey("Private key is not a valid scalar".to_string()))
    }
}
