// Copyright (C) 2015-2025 The Neo Project.
//
// witness.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Witness: invocation + verification script pair.

use neo_io::{get_var_bytes_size, BinaryWriter, IoResult, MemoryReader, Serializable};
use serde::{Deserialize, Serialize};

/// Upper bound for either script of a witness.
pub const MAX_WITNESS_SCRIPT_SIZE: usize = 1024;

/// Proof that a signer authorised a transaction.
///
/// The invocation script pushes the signature; the verification script is
/// the signer's account program that checks it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Witness {
    #[serde(with = "hex_bytes")]
    pub invocation_script: Vec<u8>,
    #[serde(with = "hex_bytes")]
    pub verification_script: Vec<u8>,
}

impl Witness {
    pub fn new(invocation_script: Vec<u8>, verification_script: Vec<u8>) -> Self {
        Self {
            invocation_script,
            verification_script,
        }
    }
}

impl Serializable for Witness {
    fn size(&self) -> usize {
        get_var_bytes_size(&self.invocation_script) + get_var_bytes_size(&self.verification_script)
    }

    fn serialize(&self, writer: &mut BinaryWriter) {
        writer.write_var_bytes(&self.invocation_script);
        writer.write_var_bytes(&self.verification_script);
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let invocation_script = reader.read_var_bytes(MAX_WITNESS_SCRIPT_SIZE)?;
        let verification_script = reader.read_var_bytes(MAX_WITNESS_SCRIPT_SIZE)?;
        Ok(Self {
            invocation_script,
            verification_script,
        })
    }
}

mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let value = String::deserialize(deserializer)?;
        hex::decode(value).map_err(serde::de::Error::custom)
    }
}
