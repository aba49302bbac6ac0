// Copyright (C) 2015-2025 The Neo Project.
//
// contract_parameter_type.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! ContractParameterType, the ABI type tags.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Type of a contract method parameter.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContractParameterType {
    /// Any type, including null.
    #[default]
    Any = 0x00,
    Boolean = 0x10,
    Integer = 0x11,
    ByteArray = 0x12,
    /// UTF-8 text.
    String = 0x13,
    Hash160 = 0x14,
    Hash256 = 0x15,
    /// 33-byte compressed secp256r1 key.
    PublicKey = 0x16,
    /// 64-byte signature.
    Signature = 0x17,
    Array = 0x20,
    Map = 0x22,
    InteropInterface = 0x30,
    /// Return type only: the method returns nothing.
    Void = 0xff,
}

impl ContractParameterType {
    const ALL: [ContractParameterType; 13] = [
        ContractParameterType::Any,
        ContractParameterType::Boolean,
        ContractParameterType::Integer,
        ContractParameterType::ByteArray,
        ContractParameterType::String,
        ContractParameterType::Hash160,
        ContractParameterType::Hash256,
        ContractParameterType::PublicKey,
        ContractParameterType::Signature,
        ContractParameterType::Array,
        ContractParameterType::Map,
        ContractParameterType::InteropInterface,
        ContractParameterType::Void,
    ];

    /// Manifest name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractParameterType::Any => "Any",
            ContractParameterType::Boolean => "Boolean",
            ContractParameterType::Integer => "Integer",
            ContractParameterType::ByteArray => "ByteArray",
            ContractParameterType::String => "String",
            ContractParameterType::Hash160 => "Hash160",
            ContractParameterType::Hash256 => "Hash256",
            ContractParameterType::PublicKey => "PublicKey",
            ContractParameterType::Signature => "Signature",
            ContractParameterType::Array => "Array",
            ContractParameterType::Map => "Map",
            ContractParameterType::InteropInterface => "InteropInterface",
            ContractParameterType::Void => "Void",
        }
    }

    /// Types whose values may be map keys.
    pub fn is_primitive(&self) -> bool {
        !matches!(
            self,
            ContractParameterType::Any
                | ContractParameterType::Array
                | ContractParameterType::Map
                | ContractParameterType::InteropInterface
                | ContractParameterType::Void
        )
    }
}

impl fmt::Display for ContractParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractParameterType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown parameter type '{s}'"))
    }
}

impl TryFrom<u8> for ContractParameterType {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| *t as u8 == value)
            .ok_or(value)
    }
}

impl Serialize for ContractParameterType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ContractParameterType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
