// Copyright (C) 2015-2025 The Neo Project.
//
// account.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Single-signature account.

use crate::contract::Contract;
use crate::{KeyPair, WalletError, WalletResult};
use neo_config::{PUBLIC_KEY_SIZE, SIGNATURE_SIZE};
use neo_core::UInt160;
use neo_cryptography::ECDsa;
use tracing::debug;
use zeroize::Zeroizing;

/// An account backed by a signature contract.
///
/// Accounts built from a key can sign; watch-only accounts know their
/// script hash (and, when built from a public key, their verification
/// script) but fail to sign with [`WalletError::Signing`].
#[derive(Debug)]
pub struct Account {
    key_pair: Option<KeyPair>,
    public_key: Option<[u8; PUBLIC_KEY_SIZE]>,
    verification_script: Option<Vec<u8>>,
    script_hash: UInt160,
}

impl Account {
    /// Creates an account with a freshly generated key.
    pub fn create() -> WalletResult<Self> {
        let account = Self::from_key_pair(KeyPair::generate()?);
        debug!(account = %account.script_hash, "generated new account");
        Ok(account)
    }

    pub fn from_private_key(private_key: &[u8]) -> WalletResult<Self> {
        Ok(Self::from_key_pair(KeyPair::from_private_key(private_key)?))
    }

    pub fn from_wif(wif: &str) -> WalletResult<Self> {
        Ok(Self::from_key_pair(KeyPair::from_wif(wif)?))
    }

    pub fn from_key_pair(key_pair: KeyPair) -> Self {
        let public_key = *key_pair.public_key();
        let verification_script = Contract::create_signature_redeem_script(&public_key);
        Self {
            script_hash: UInt160::from_script(&verification_script),
            key_pair: Some(key_pair),
            public_key: Some(public_key),
            verification_script: Some(verification_script),
        }
    }

    /// Watch-only account for a SEC1 public key (compressed or not).
    pub fn watch_only(public_key: &[u8]) -> WalletResult<Self> {
        let public_key = ECDsa::compress_public_key(public_key)?;
        let verification_script = Contract::create_signature_redeem_script(&public_key);
        Ok(Self {
            script_hash: UInt160::from_script(&verification_script),
            key_pair: None,
            public_key: Some(public_key),
            verification_script: Some(verification_script),
        })
    }

    /// Watch-only account known only by its script hash.
    pub fn from_script_hash(script_hash: UInt160) -> Self {
        Self {
            key_pair: None,
            public_key: None,
            verification_script: None,
            script_hash,
        }
    }

    pub fn script_hash(&self) -> UInt160 {
        self.script_hash
    }

    pub fn address(&self, version: u8) -> String {
        self.script_hash.to_address(version)
    }

    pub fn verification_script(&self) -> Option<&[u8]> {
        self.verification_script.as_deref()
    }

    pub fn public_key(&self) -> Option<&[u8; PUBLIC_KEY_SIZE]> {
        self.public_key.as_ref()
    }

    pub fn key_pair(&self) -> Option<&KeyPair> {
        self.key_pair.as_ref()
    }

    pub fn is_watch_only(&self) -> bool {
        self.key_pair.is_none()
    }

    pub fn export_wif(&self) -> WalletResult<Zeroizing<String>> {
        self.key_pair
            .as_ref()
            .map(KeyPair::export_wif)
            .ok_or_else(|| WalletError::InvalidKey(format!("{} has no private key", self.script_hash)))
    }

    /// Signs SHA-256(`payload`).
    pub fn sign(&self, payload: &[u8]) -> WalletResult<[u8; SIGNATURE_SIZE]> {
        let key_pair = self.key_pair.as_ref().ok_or_else(|| {
            WalletError::Signing(format!("{} is watch-only", self.script_hash))
        })?;
        key_pair.sign(payload)
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.script_hash == other.script_hash
    }
}

impl Eq for Account {}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_config::DEFAULT_ADDRESS_VERSION;

    const PRIVATE_KEY: [u8; 32] = [0x01; 32];

    #[test]
    fn test_known_account() {
        let account = Account::from_private_key(&PRIVATE_KEY).unwrap();
        assert_eq!(
            account.script_hash().to_string(),
            "0x902e0d38da5e513b6d07c1c55b85e77d3dce8063"
        );
        assert_eq!(
            account.address(DEFAULT_ADDRESS_VERSION),
            "NUz6PKTAM7NbPJzkKJFNay3VckQtcDkgWo"
        );
        assert!(!account.is_watch_only());
    }

    #[test]
    fn test_script_hash_is_hash_of_verification_script() {
        let account = Account::create().unwrap();
        let script = account.verification_script().unwrap();
        assert_eq!(UInt160::from_script(script), account.script_hash());
        assert!(Contract::is_signature_contract(script));
    }

    #[test]
    fn test_watch_only_matches_but_cannot_sign() {
        let owner = Account::from_private_key(&PRIVATE_KEY).unwrap();
        let watcher = Account::watch_only(owner.public_key().unwrap()).unwrap();
        assert_eq!(watcher, owner);
        assert_eq!(watcher.verification_script(), owner.verification_script());
        assert!(matches!(watcher.sign(b"data"), Err(WalletError::Signing(_))));

        let by_hash = Account::from_script_hash(owner.script_hash());
        assert!(by_hash.verification_script().is_none());
        assert!(by_hash.sign(b"data").is_err());
        assert!(by_hash.export_wif().is_err());
    }

    #[test]
    fn test_sign_is_verifiable_with_public_key() {
        let account = Account::from_private_key(&PRIVATE_KEY).unwrap();
        let signature = account.sign(b"payload").unwrap();
        assert!(ECDsa::verify(b"payload", &signature, account.public_key().unwrap()).unwrap());
    }

    #[test]
    fn test_invalid_private_key() {
        assert!(matches!(
            Account::from_private_key(&[0u8; 16]),
            Err(WalletError::InvalidKey(_))
        ));
    }
}
