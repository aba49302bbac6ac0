// Copyright (C) 2015-2025 The Neo Project.
//
// signer.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Transaction signer.

use crate::{CoreError, CoreResult, UInt160, WitnessScope};
use neo_config::{ADDRESS_SIZE, PUBLIC_KEY_SIZE};
use neo_io::serializable::helper;
use neo_io::{BinaryWriter, IoError, IoResult, MemoryReader, Serializable};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Maximum number of allowed contracts or groups on one signer.
pub const MAX_SUBITEMS: usize = 16;

/// An account whose witness a transaction requires, together with the
/// scope in which that witness may be used.
///
/// The first signer of a transaction is its sender and pays the fees.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signer {
    pub account: UInt160,
    pub scopes: WitnessScope,
    pub allowed_contracts: Vec<UInt160>,
    pub allowed_groups: Vec<[u8; PUBLIC_KEY_SIZE]>,
}

impl Signer {
    pub fn new(account: UInt160, scopes: WitnessScope) -> Self {
        Self {
            account,
            scopes,
            allowed_contracts: Vec::new(),
            allowed_groups: Vec::new(),
        }
    }

    pub fn called_by_entry(account: UInt160) -> Self {
        Self::new(account, WitnessScope::CalledByEntry)
    }

    pub fn global(account: UInt160) -> Self {
        Self::new(account, WitnessScope::Global)
    }

    /// Fee-only signer; the witness is not usable by any contract.
    pub fn none(account: UInt160) -> Self {
        Self::new(account, WitnessScope::None)
    }

    /// Adds contracts to the allow list and sets the `CustomContracts` flag.
    pub fn allow_contracts(mut self, contracts: impl IntoIterator<Item = UInt160>) -> Self {
        self.allowed_contracts.extend(contracts);
        self.scopes = self.scopes.combine(WitnessScope::CustomContracts);
        self
    }

    /// Adds group public keys and sets the `CustomGroups` flag.
    pub fn allow_groups(
        mut self,
        groups: impl IntoIterator<Item = [u8; PUBLIC_KEY_SIZE]>,
    ) -> Self {
        self.allowed_groups.extend(groups);
        self.scopes = self.scopes.combine(WitnessScope::CustomGroups);
        self
    }

    /// Checks scope consistency.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.scopes.is_valid() {
            return Err(CoreError::InvalidSigner(format!(
                "{}: invalid scope byte {:#04x}",
                self.account,
                self.scopes.to_byte()
            )));
        }
        let custom_contracts = self.scopes.has_flag(WitnessScope::CustomContracts);
        if custom_contracts != !self.allowed_contracts.is_empty() {
            return Err(CoreError::InvalidSigner(format!(
                "{}: CustomContracts requires a non-empty allow list and vice versa",
                self.account
            )));
        }
        let custom_groups = self.scopes.has_flag(WitnessScope::CustomGroups);
        if custom_groups != !self.allowed_groups.is_empty() {
            return Err(CoreError::InvalidSigner(format!(
                "{}: CustomGroups requires a non-empty group list and vice versa",
                self.account
            )));
        }
        if self.allowed_contracts.len() > MAX_SUBITEMS || self.allowed_groups.len() > MAX_SUBITEMS
        {
            return Err(CoreError::InvalidSigner(format!(
                "{}: more than {MAX_SUBITEMS} allowed entries",
                self.account
            )));
        }
        Ok(())
    }
}

impl Serializable for Signer {
    fn size(&self) -> usize {
        let mut size = ADDRESS_SIZE + 1;
        if self.scopes.has_flag(WitnessScope::CustomContracts) {
            size += helper::array_size(&self.allowed_contracts);
        }
        if self.scopes.has_flag(WitnessScope::CustomGroups) {
            size += neo_io::get_var_size(self.allowed_groups.len() as u64)
                + self.allowed_groups.len() * PUBLIC_KEY_SIZE;
        }
        size
    }

    fn serialize(&self, writer: &mut BinaryWriter) {
        Serializable::serialize(&self.account, writer);
        writer.write_u8(self.scopes.to_byte());
        if self.scopes.has_flag(WitnessScope::CustomContracts) {
            helper::serialize_array(&self.allowed_contracts, writer);
        }
        if self.scopes.has_flag(WitnessScope::CustomGroups) {
            writer.write_var_int(self.allowed_groups.len() as u64);
            for group in &self.allowed_groups {
                writer.write_bytes(group);
            }
        }
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let account = UInt160::deserialize(reader)?;
        let raw_scope = reader.read_u8()?;
        let scopes = WitnessScope::from_byte(raw_scope)
            .ok_or_else(|| IoError::invalid_data("witness scope", format!("{raw_scope:#04x}")))?;

        let allowed_contracts = if scopes.has_flag(WitnessScope::CustomContracts) {
            helper::deserialize_array(reader, MAX_SUBITEMS)?
        } else {
            Vec::new()
        };

        let allowed_groups = if scopes.has_flag(WitnessScope::CustomGroups) {
            let count = reader.read_var_int(MAX_SUBITEMS as u64)? as usize;
            let mut groups = Vec::with_capacity(count);
            for _ in 0..count {
                groups.push(reader.read_array::<PUBLIC_KEY_SIZE>()?);
            }
            groups
        } else {
            Vec::new()
        };

        Ok(Self {
            account,
            scopes,
            allowed_contracts,
            allowed_groups,
        })
    }
}

/// JSON form accepted by the node's `invokescript` signer argument.
impl Serialize for Signer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Signer", 4)?;
        state.serialize_field("account", &self.account)?;
        state.serialize_field("scopes", &self.scopes)?;
        state.serialize_field("allowedcontracts", &self.allowed_contracts)?;
        let groups: Vec<String> = self.allowed_groups.iter().map(hex::encode).collect();
        state.serialize_field("allowedgroups", &groups)?;
        state.end()
    }
}
