// Copyright (C) 2015-2025 The Neo Project.
//
// uint256.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! 256-bit hash, used for transaction ids.

use crate::{CoreError, CoreResult};
use neo_config::HASH_SIZE;
use neo_io::{BinaryWriter, IoResult, MemoryReader, Serializable};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A 256-bit hash stored little-endian and displayed big-endian with `0x`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct UInt256([u8; HASH_SIZE]);

impl UInt256 {
    pub const LENGTH: usize = HASH_SIZE;

    pub const fn zero() -> Self {
        Self([0u8; HASH_SIZE])
    }

    pub const fn from_array(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> CoreResult<Self> {
        let array: [u8; HASH_SIZE] = bytes.try_into().map_err(|_| CoreError::InvalidLength {
            context: "UInt256",
            expected: HASH_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self(array))
    }

    pub fn to_array(&self) -> [u8; HASH_SIZE] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Parses the big-endian hex form, with or without `0x`.
    pub fn parse(value: &str) -> CoreResult<Self> {
        let hex_str = value.strip_prefix("0x").unwrap_or(value);
        let mut bytes = hex::decode(hex_str)
            .map_err(|e| CoreError::InvalidFormat(format!("UInt256 '{value}': {e}")))?;
        bytes.reverse();
        Self::from_bytes(&bytes)
    }
}

impl fmt::Display for UInt256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        write!(f, "0x{}", hex::encode(reversed))
    }
}

impl fmt::Debug for UInt256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for UInt256 {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serializable for UInt256 {
    fn size(&self) -> usize {
        HASH_SIZE
    }

    fn serialize(&self, writer: &mut BinaryWriter) {
        writer.write_bytes(&self.0);
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self(reader.read_array()?))
    }
}

impl Serialize for UInt256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for UInt256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_reverses_bytes() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0xab;
        let hash = UInt256::from_array(bytes);
        let text = hash.to_string();
        assert!(text.starts_with("0x00"));
        assert!(text.ends_with("ab"));
        assert_eq!(UInt256::parse(&text).unwrap(), hash);
    }

    #[test]
    fn test_from_bytes_checks_length() {
        assert!(UInt256::from_bytes(&[0u8; 31]).is_err());
        assert_eq!(UInt256::from_bytes(&[0u8; 32]).unwrap(), UInt256::zero());
    }
}
