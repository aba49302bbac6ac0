// Copyright (C) 2015-2025 The Neo Project.
//
// uint160.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! 160-bit script hash.

use crate::{CoreError, CoreResult};
use neo_config::ADDRESS_SIZE;
use neo_cryptography::{base58, hash};
use neo_io::{IoResult, MemoryReader, Serializable};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A 160-bit hash identifying an account or contract.
///
/// Bytes are stored little-endian, the order in which they appear on the
/// wire and inside scripts. The textual form is big-endian with a `0x`
/// prefix, matching what nodes print.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct UInt160([u8; ADDRESS_SIZE]);

impl UInt160 {
    pub const LENGTH: usize = ADDRESS_SIZE;

    pub const fn zero() -> Self {
        Self([0u8; ADDRESS_SIZE])
    }

    /// Wraps little-endian bytes.
    pub const fn from_array(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }

    /// Creates a hash from a little-endian byte slice.
    pub fn from_bytes(bytes: &[u8]) -> CoreResult<Self> {
        let array: [u8; ADDRESS_SIZE] =
            bytes.try_into().map_err(|_| CoreError::InvalidLength {
                context: "UInt160",
                expected: ADDRESS_SIZE,
                actual: bytes.len(),
            })?;
        Ok(Self(array))
    }

    /// Script hash of a verification or contract script.
    pub fn from_script(script: &[u8]) -> Self {
        Self(hash::hash160(script))
    }

    pub fn to_array(&self) -> [u8; ADDRESS_SIZE] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Parses the big-endian hex form, with or without `0x`.
    pub fn parse(value: &str) -> CoreResult<Self> {
        let hex_str = value.strip_prefix("0x").unwrap_or(value);
        let mut bytes = hex::decode(hex_str)
            .map_err(|e| CoreError::InvalidFormat(format!("UInt160 '{value}': {e}")))?;
        bytes.reverse();
        Self::from_bytes(&bytes)
    }

    /// Base58Check address for the given version byte.
    pub fn to_address(&self, version: u8) -> String {
        let mut data = Vec::with_capacity(ADDRESS_SIZE + 1);
        data.push(version);
        data.extend_from_slice(&self.0);
        base58::encode_check(&data)
    }

    /// Decodes an address, checking the version byte.
    pub fn from_address(address: &str, version: u8) -> CoreResult<Self> {
        let data = base58::decode_check(address)
            .map_err(|e| CoreError::InvalidAddress(format!("{address}: {e}")))?;
        if data.len() != ADDRESS_SIZE + 1 {
            return Err(CoreError::InvalidAddress(format!(
                "{address}: unexpected payload length {}",
                data.len()
            )));
        }
        if data[0] != version {
            return Err(CoreError::InvalidAddress(format!(
                "{address}: version {:#04x}, expected {version:#04x}",
                data[0]
            )));
        }
        Self::from_bytes(&data[1..])
    }
}

impl fmt::Display for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        write!(f, "0x{}", hex::encode(reversed))
    }
}

impl fmt::Debug for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for UInt160 {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serializable for UInt160 {
    fn size(&self) -> usize {
        ADDRESS_SIZE
    }

    fn serialize(&self, writer: &mut neo_io::BinaryWriter) {
        writer.write_bytes(&self.0);
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self(reader.read_array()?))
    }
}

impl Serialize for UInt160 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for UInt160 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}
