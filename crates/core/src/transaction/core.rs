// Copyright (C) 2015-2025 The Neo Project.
//
// core.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Core Transaction struct and basic operations.

use crate::signer::Signer;
use crate::witness::Witness;
use crate::UInt256;
use neo_cryptography::hash::sha256;
use neo_io::{BinaryWriter, Serializable};
use std::fmt;

/// The only transaction version the network accepts.
pub const TRANSACTION_VERSION: u8 = 0;

/// Maximum number of signers on one transaction.
pub const MAX_SIGNERS: usize = 16;

/// The size of a transaction header in bytes.
pub const HEADER_SIZE: usize = 1 +  // Version (byte)
    4 +  // Nonce (uint32)
    8 +  // SystemFee (int64)
    8 +  // NetworkFee (int64)
    4; // ValidUntilBlock (uint32)

/// A Neo N3 transaction.
///
/// Fees are in datoshi (1 GAS = 10^8 datoshi). Attributes are not modelled;
/// the attribute list is always encoded empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transaction {
    pub(crate) version: u8,
    pub(crate) nonce: u32,
    pub(crate) system_fee: i64,
    pub(crate) network_fee: i64,
    pub(crate) valid_until_block: u32,
    pub(crate) signers: Vec<Signer>,
    pub(crate) script: Vec<u8>,
    pub(crate) witnesses: Vec<Witness>,
}

impl Transaction {
    /// Empty version 0 transaction.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    /// Random value making otherwise identical transactions distinct.
    pub fn nonce(&self) -> u32 {
        self.nonce
    }

    pub fn set_nonce(&mut self, value: u32) {
        self.nonce = value;
    }

    /// Fee for executing the script, in datoshi.
    pub fn system_fee(&self) -> i64 {
        self.system_fee
    }

    pub fn set_system_fee(&mut self, value: i64) {
        self.system_fee = value;
    }

    /// Fee for size and witness verification, in datoshi.
    pub fn network_fee(&self) -> i64 {
        self.network_fee
    }

    pub fn set_network_fee(&mut self, value: i64) {
        self.network_fee = value;
    }

    /// Last block height at which the transaction can be included.
    pub fn valid_until_block(&self) -> u32 {
        self.valid_until_block
    }

    pub fn set_valid_until_block(&mut self, value: u32) {
        self.valid_until_block = value;
    }

    pub fn signers(&self) -> &[Signer] {
        &self.signers
    }

    /// Appends a signer. Duplicate accounts are rejected on decode.
    pub fn push_signer(&mut self, signer: Signer) {
        self.signers.push(signer);
    }

    /// The first signer pays the fees.
    pub fn sender(&self) -> Option<&Signer> {
        self.signers.first()
    }

    pub fn script(&self) -> &[u8] {
        &self.script
    }

    pub fn set_script(&mut self, script: Vec<u8>) {
        self.script = script;
    }

    pub fn witnesses(&self) -> &[Witness] {
        &self.witnesses
    }

    pub fn set_witnesses(&mut self, witnesses: Vec<Witness>) {
        self.witnesses = witnesses;
    }

    pub fn clear_witnesses(&mut self) {
        self.witnesses.clear();
    }

    /// Encoding of every field except the witnesses.
    pub fn serialize_unsigned(&self, writer: &mut BinaryWriter) {
        writer.write_u8(self.version);
        writer.write_u32(self.nonce);
        writer.write_i64(self.system_fee);
        writer.write_i64(self.network_fee);
        writer.write_u32(self.valid_until_block);
        neo_io::serializable::helper::serialize_array(&self.signers, writer);
        // attributes
        writer.write_var_int(0);
        writer.write_var_bytes(&self.script);
    }

    /// [`serialize_unsigned`](Self::serialize_unsigned) into a fresh buffer.
    pub fn unsigned_bytes(&self) -> Vec<u8> {
        let mut writer = BinaryWriter::with_capacity(self.size());
        self.serialize_unsigned(&mut writer);
        writer.into_bytes()
    }

    /// Transaction id: SHA-256 of the unsigned encoding.
    pub fn hash(&self) -> UInt256 {
        UInt256::from_array(sha256(&self.unsigned_bytes()))
    }

    /// Payload each signer signs: network magic (LE) followed by the hash.
    pub fn get_sign_data(&self, network_magic: u32) -> Vec<u8> {
        let mut data = Vec::with_capacity(4 + UInt256::LENGTH);
        data.extend_from_slice(&network_magic.to_le_bytes());
        data.extend_from_slice(self.hash().as_bytes());
        data
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transaction {{ hash: {}, signers: {}, sysfee: {}, netfee: {}, vub: {} }}",
            self.hash(),
            self.signers.len(),
            self.system_fee,
            self.network_fee,
            self.valid_until_block
        )
    }
}
