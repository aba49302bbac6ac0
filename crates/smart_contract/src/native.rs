// Copyright (C) 2015-2025 The Neo Project.
//
// native.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Well-known native contracts.

use neo_core::UInt160;

/// Script hashes of the native contracts this client talks to. They are
/// identical on every network.
pub struct NativeContract;

impl NativeContract {
    /// `0xcc5e4edd9f5f8dba8bb65734541df7a1c081c67b`
    pub const POLICY: UInt160 = UInt160::from_array([
        0x7b, 0xc6, 0x81, 0xc0, 0xa1, 0xf7, 0x1d, 0x54, 0x34, 0x57, 0xb6, 0x8b, 0xba, 0x8d, 0x5f,
        0x9f, 0xdd, 0x4e, 0x5e, 0xcc,
    ]);

    /// `0xd2a4cff31913016155e38e474a2c06d08be276cf`
    pub const GAS: UInt160 = UInt160::from_array([
        0xcf, 0x76, 0xe2, 0x8b, 0xd0, 0x06, 0x2c, 0x4a, 0x47, 0x8e, 0xe3, 0x55, 0x61, 0x01, 0x13,
        0x19, 0xf3, 0xcf, 0xa4, 0xd2,
    ]);

    /// `0xef4073a0f2b305a38ec4050e4d3d28bc40ea63f5`
    pub const NEO: UInt160 = UInt160::from_array([
        0xf5, 0x63, 0xea, 0x40, 0xbc, 0x28, 0x3d, 0x4d, 0x0e, 0x05, 0xc4, 0x8e, 0xa3, 0x05, 0xb3,
        0xf2, 0xa0, 0x73, 0x40, 0xef,
    ]);
}

/// Policy contract method names.
pub mod policy {
    pub const IS_BLOCKED: &str = "isBlocked";
    pub const BLOCK_ACCOUNT: &str = "blockAccount";
    pub const UNBLOCK_ACCOUNT: &str = "unblockAccount";
    pub const IS_RESTRICTED: &str = "isRestricted";
    pub const RESTRICT_ACCOUNT: &str = "restrictAccount";
    pub const UNRESTRICT_ACCOUNT: &str = "unrestrictAccount";
    pub const GET_FEE_PER_BYTE: &str = "getFeePerByte";
    pub const GET_EXEC_FEE_FACTOR: &str = "getExecFeeFactor";
}

/// NEP-17 token method names.
pub mod nep17 {
    pub const TRANSFER: &str = "transfer";
    pub const BALANCE_OF: &str = "balanceOf";
    pub const SYMBOL: &str = "symbol";
    pub const DECIMALS: &str = "decimals";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_hashes_display() {
        assert_eq!(
            NativeContract::POLICY.to_string(),
            "0xcc5e4edd9f5f8dba8bb65734541df7a1c081c67b"
        );
        assert_eq!(
            NativeContract::GAS.to_string(),
            "0xd2a4cff31913016155e38e474a2c06d08be276cf"
        );
        assert_eq!(
            NativeContract::NEO.to_string(),
            "0xef4073a0f2b305a38ec4050e4d3d28bc40ea63f5"
        );
    }
}
