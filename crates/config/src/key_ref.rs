// Copyright (C) 2015-2025 The Neo Project.
//
// key_ref.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! References to key material.
//!
//! Configuration files never carry a WIF directly. A key is referenced either
//! by an environment variable (`env:NEO_COMMITTEE_WIF`) or by a file holding
//! the WIF on its first line (`file:/run/secrets/committee.wif`).

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use zeroize::Zeroizing;

/// Lookup reference for a signing key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum KeyRef {
    /// Read the WIF from an environment variable.
    Env(String),
    /// Read the WIF from a file.
    File(PathBuf),
}

impl KeyRef {
    /// Resolves the reference into the WIF string it points at.
    pub fn resolve(&self) -> Result<Zeroizing<String>, ConfigError> {
        let raw = match self {
            KeyRef::Env(name) => Zeroizing::new(
                std::env::var(name).map_err(|_| ConfigError::MissingEnv(name.clone()))?,
            ),
            KeyRef::File(path) => Zeroizing::new(std::fs::read_to_string(path).map_err(
                |source| ConfigError::Io {
                    path: path.clone(),
                    source,
                },
            )?),
        };

        let wif = raw.lines().next().unwrap_or_default().trim();
        if wif.is_empty() {
            return Err(ConfigError::EmptyKey(self.to_string()));
        }
        tracing::debug!(key = %self, "resolved key reference");
        Ok(Zeroizing::new(wif.to_string()))
    }
}

impl FromStr for KeyRef {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some(("env", name)) if !name.is_empty() => Ok(KeyRef::Env(name.to_string())),
            Some(("file", path)) if !path.is_empty() => Ok(KeyRef::File(PathBuf::from(path))),
            _ => Err(ConfigError::InvalidKeyRef(s.to_string())),
        }
    }
}

impl TryFrom<String> for KeyRef {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<KeyRef> for String {
    fn from(value: KeyRef) -> Self {
        value.to_string()
    }
}

impl fmt::Display for KeyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyRef::Env(name) => write!(f, "env:{name}"),
            KeyRef::File(path) => write!(f, "file:{}", path.display()),
        }
    }
}
