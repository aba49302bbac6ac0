// Copyright (C) 2015-2025 The Neo Project.
//
// key_pair.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! secp256r1 key pair.

use crate::{WalletError, WalletResult};
use neo_config::{HASH_SIZE, PUBLIC_KEY_SIZE, SIGNATURE_SIZE};
use neo_core::UInt160;
use neo_cryptography::{base58, ECDsa};
use std::fmt;
use zeroize::Zeroizing;

const WIF_VERSION: u8 = 0x80;
const WIF_COMPRESSED_FLAG: u8 = 0x01;
const WIF_PAYLOAD_SIZE: usize = 1 + HASH_SIZE + 1;

/// A private scalar and its compressed public key.
///
/// Deliberately not `Clone`: the scalar lives in exactly one place and is
/// wiped when the key pair is dropped. `Debug` never prints it.
pub struct KeyPair {
    private_key: Zeroizing<[u8; HASH_SIZE]>,
    public_key: [u8; PUBLIC_KEY_SIZE],
}

impl KeyPair {
    /// Generates a fresh key pair from the OS random source.
    pub fn generate() -> WalletResult<Self> {
        let private_key = ECDsa::generate_private_key()?;
        Self::from_private_key(&private_key[..])
    }

    /// Builds a key pair from a 32-byte scalar in `[1, n)`.
    pub fn from_private_key(private_key: &[u8]) -> WalletResult<Self> {
        let public_key = ECDsa::derive_compressed_public_key(private_key)
            .map_err(|e| WalletError::InvalidKey(e.to_string()))?;
        let mut scalar = Zeroizing::new([0u8; HASH_SIZE]);
        scalar.copy_from_slice(private_key);
        Ok(Self {
            private_key: scalar,
            public_key,
        })
    }

    /// Decodes a compressed-key WIF string.
    pub fn from_wif(wif: &str) -> WalletResult<Self> {
        let data = Zeroizing::new(
            base58::decode_check(wif).map_err(|e| WalletError::InvalidWif(e.to_string()))?,
        );
        if data.len() != WIF_PAYLOAD_SIZE {
            return Err(WalletError::InvalidWif(format!(
                "expected {WIF_PAYLOAD_SIZE} payload bytes, got {}",
                data.len()
            )));
        }
        if data[0] != WIF_VERSION || data[WIF_PAYLOAD_SIZE - 1] != WIF_COMPRESSED_FLAG {
            return Err(WalletError::InvalidWif(
                "not a compressed mainnet WIF".to_string(),
            ));
        }
        Self::from_private_key(&data[1..=HASH_SIZE])
    }

    /// Exports the private key as WIF.
    pub fn export_wif(&self) -> Zeroizing<String> {
        let mut data = Zeroizing::new([0u8; WIF_PAYLOAD_SIZE]);
        data[0] = WIF_VERSION;
        data[1..=HASH_SIZE].copy_from_slice(&self.private_key[..]);
        data[WIF_PAYLOAD_SIZE - 1] = WIF_COMPRESSED_FLAG;
        Zeroizing::new(base58::encode_check(&data[..]))
    }

    pub fn public_key(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.public_key
    }

    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key)
    }

    /// Hash160 of the compressed public key itself (not of the account script).
    pub fn public_key_hash(&self) -> UInt160 {
        UInt160::from_script(&self.public_key)
    }

    /// Signs SHA-256(`message`).
    pub fn sign(&self, message: &[u8]) -> WalletResult<[u8; SIGNATURE_SIZE]> {
        ECDsa::sign(message, &self.private_key[..]).map_err(|e| WalletError::Signing(e.to_string()))
    }

    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        ECDsa::verify(message, signature, &self.public_key).unwrap_or(false)
    }
}

impl PartialEq for KeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.public_key == other.public_key
    }
}

impl Eq for KeyPair {}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key_hex())
            .field("private_key", &"<redacted>")
            .finish()
    }
}

impl fmt::Display for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.public_key_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIVATE_KEY: [u8; 32] = [0x01; 32];
    const WIF: &str = "KwFfNUhSDaASSAwtG7ssQM1uVX8RgX5GHWnnLfhfiQDigjioWXHH";

    #[test]
    fn test_known_vector() {
        let key_pair = KeyPair::from_private_key(&PRIVATE_KEY).unwrap();
        assert_eq!(
            key_pair.to_string(),
            "026ff03b949241ce1dadd43519e6960e0a85b41a69a05c328103aa2bce1594ca16"
        );
        assert_eq!(
            key_pair.public_key_hash().to_string(),
            "0x4ab3d6ac3a0609e87af84599c93d57c2d0890406"
        );
    }

    #[test]
    fn test_wif_round_trip() {
        let key_pair = KeyPair::from_private_key(&PRIVATE_KEY).unwrap();
        assert_eq!(key_pair.export_wif().as_str(), WIF);
        assert_eq!(KeyPair::from_wif(WIF).unwrap(), key_pair);
    }

    #[test]
    fn test_wif_rejects_bad_input() {
        assert!(matches!(
            KeyPair::from_wif("KwFfNUhSDaASSAwtG7ssQM1uVX8RgX5GHWnnLfhfiQDigjioWXHJ"),
            Err(WalletError::InvalidWif(_))
        ));
        let uncompressed = base58::encode_check(&[&[0x80u8][..], &PRIVATE_KEY[..]].concat());
        assert!(KeyPair::from_wif(&uncompressed).is_err());
    }

    #[test]
    fn test_invalid_scalars() {
        assert!(matches!(
            KeyPair::from_private_key(&[0u8; 32]),
            Err(WalletError::InvalidKey(_))
        ));
        assert!(KeyPair::from_private_key(&[0xff; 32]).is_err());
        assert!(KeyPair::from_private_key(&[0x01; 31]).is_err());
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let key_pair = KeyPair::from_private_key(&PRIVATE_KEY).unwrap();
        let debug = format!("{key_pair:?}");
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains(&hex::encode(PRIVATE_KEY)));
    }

    #[test]
    fn test_sign_verifies() {
        let key_pair = KeyPair::generate().unwrap();
        let signature = key_pair.sign(b"payload").unwrap();
        assert!(key_pair.verify(b"payload", &signature));
        assert!(!key_pair.verify(b"other", &signature));
    }
}
