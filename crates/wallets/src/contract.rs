// Copyright (C) 2015-2025 The Neo Project.
//
// contract.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Single-signature verification contract.

use neo_config::{PUBLIC_KEY_SIZE, SIGNATURE_SIZE};
use neo_vm::interop::SYSTEM_CRYPTO_CHECK_SIG;
use neo_vm::{interop_hash, OpCode, ScriptBuilder};

/// Execution price, in fee units before the exec fee factor, of running a
/// signature contract: two `PUSHDATA1` (8 each), `SYSCALL` (0) and
/// `System.Crypto.CheckSig` (1 << 15).
pub const SIGNATURE_CONTRACT_COST: i64 = 2 * 8 + (1 << 15);

/// Length of a single-signature verification script.
pub const SIGNATURE_CONTRACT_SIZE: usize = 2 + PUBLIC_KEY_SIZE + 5;

/// Length of the invocation script that pushes one signature.
pub const SIGNATURE_INVOCATION_SIZE: usize = 2 + SIGNATURE_SIZE;

pub struct Contract;

impl Contract {
    /// `PUSHDATA1 <pubkey> SYSCALL System.Crypto.CheckSig`.
    pub fn create_signature_redeem_script(public_key: &[u8; PUBLIC_KEY_SIZE]) -> Vec<u8> {
        let mut operand = Vec::with_capacity(1 + PUBLIC_KEY_SIZE);
        operand.push(PUBLIC_KEY_SIZE as u8);
        operand.extend_from_slice(public_key);
        let mut builder = ScriptBuilder::new();
        builder
            .emit_with_operand(OpCode::PUSHDATA1, &operand)
            .emit_syscall(SYSTEM_CRYPTO_CHECK_SIG);
        builder.into_bytes()
    }

    /// Invocation script carrying one signature: `PUSHDATA1 0x40 <sig>`.
    pub fn create_signature_invocation_script(signature: &[u8; SIGNATURE_SIZE]) -> Vec<u8> {
        let mut script = Vec::with_capacity(SIGNATURE_INVOCATION_SIZE);
        script.push(OpCode::PUSHDATA1 as u8);
        script.push(SIGNATURE_SIZE as u8);
        script.extend_from_slice(signature);
        script
    }

    /// True when `script` has the exact shape of a signature contract.
    pub fn is_signature_contract(script: &[u8]) -> bool {
        script.len() == SIGNATURE_CONTRACT_SIZE
            && script[0] == OpCode::PUSHDATA1 as u8
            && script[1] == PUBLIC_KEY_SIZE as u8
            && script[2 + PUBLIC_KEY_SIZE] == OpCode::SYSCALL as u8
            && script[3 + PUBLIC_KEY_SIZE..]
                == interop_hash(SYSTEM_CRYPTO_CHECK_SIG).to_le_bytes()
    }
}
