// Copyright (C) 2015-2025 The Neo Project.
//
// helper.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Address helpers.

use crate::{Account, WalletError, WalletResult};
use neo_core::UInt160;

/// Address of the signature account for a hex-encoded public key.
pub fn address_from_public_key(public_key_hex: &str, version: u8) -> WalletResult<String> {
    let bytes = hex::decode(public_key_hex.trim_start_matches("0x"))
        .map_err(|e| WalletError::InvalidKey(format!("public key is not hex: {e}")))?;
    Ok(Account::watch_only(&bytes)?.address(version))
}

pub fn script_hash_from_address(address: &str, version: u8) -> WalletResult<UInt160> {
    UInt160::from_address(address, version).map_err(|e| WalletError::InvalidAddress(e.to_string()))
}
