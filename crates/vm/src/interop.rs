// Copyright (C) 2015-2025 The Neo Project.
//
// interop.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Interop service identifiers.

use sha2::{Digest, Sha256};

pub const SYSTEM_CONTRACT_CALL: &str = "System.Contract.Call";
pub const SYSTEM_CRYPTO_CHECK_SIG: &str = "System.Crypto.CheckSig";

/// The 4-byte identifier `SYSCALL` carries for a service name: the first
/// four bytes of SHA-256 over the ASCII name, read little-endian.
pub fn interop_hash(name: &str) -> u32 {
    let digest = Sha256::digest(name.as_bytes());
    u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]])
}
