// Copyright (C) 2015-2025 The Neo Project.
//
// serialization.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Transaction serialization.

use super::core::{Transaction, HEADER_SIZE, MAX_SIGNERS, TRANSACTION_VERSION};
use crate::signer::Signer;
use crate::witness::Witness;
use neo_config::{MAX_SCRIPT_SIZE, MAX_TRANSACTION_ATTRIBUTES};
use neo_io::serializable::helper;
use neo_io::{get_var_bytes_size, BinaryWriter, IoError, IoResult, MemoryReader, Serializable};
use std::collections::HashSet;

impl Serializable for Transaction {
    fn size(&self) -> usize {
        HEADER_SIZE
            + helper::array_size(&self.signers)
            + 1 // empty attribute list
            + get_var_bytes_size(&self.script)
            + helper::array_size(&self.witnesses)
    }

    fn serialize(&self, writer: &mut BinaryWriter) {
        self.serialize_unsigned(writer);
        helper::serialize_array(&self.witnesses, writer);
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let version = reader.read_u8()?;
        if version != TRANSACTION_VERSION {
            return Err(IoError::invalid_data("version", version));
        }

        let nonce = reader.read_u32()?;
        let system_fee = reader.read_i64()?;
        if system_fee < 0 {
            return Err(IoError::invalid_data("system_fee", system_fee));
        }
        let network_fee = reader.read_i64()?;
        if network_fee < 0 {
            return Err(IoError::invalid_data("network_fee", network_fee));
        }
        let valid_until_block = reader.read_u32()?;

        let signers: Vec<Signer> = helper::deserialize_array(reader, MAX_SIGNERS)?;
        if signers.is_empty() {
            return Err(IoError::invalid_data("signers", "empty signer list"));
        }
        let mut seen = HashSet::with_capacity(signers.len());
        if !signers.iter().all(|s| seen.insert(s.account)) {
            return Err(IoError::invalid_data("signers", "duplicate account"));
        }

        let attribute_count = reader.read_var_int(MAX_TRANSACTION_ATTRIBUTES as u64)?;
        if attribute_count != 0 {
            return Err(IoError::invalid_data(
                "attributes",
                format!("{attribute_count} attributes are not supported"),
            ));
        }

        let script = reader.read_var_bytes(MAX_SCRIPT_SIZE)?;
        if script.is_empty() {
            return Err(IoError::invalid_data("script", "empty"));
        }

        let witnesses: Vec<Witness> = helper::deserialize_array(reader, MAX_SIGNERS)?;
        if witnesses.len() != signers.len() {
            return Err(IoError::invalid_data(
                "witnesses",
                format!("{} witnesses for {} signers", witnesses.len(), signers.len()),
            ));
        }

        Ok(Transaction {
            version,
            nonce,
            system_fee,
            network_fee,
            valid_until_block,
            signers,
            script,
            witnesses,
        })
    }
}
