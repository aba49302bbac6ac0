// Copyright (C) 2015-2025 The Neo Project.
//
// script_builder.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Script builder module for the Neo Virtual Machine.
//!
//! This module provides a way to programmatically construct scripts for the Neo VM.

use crate::interop::interop_hash;
use crate::op_code::OpCode;
use crate::{VmError, VmResult};
use num_bigint::{BigInt, Sign};

/// Widths available to the `PUSHINT*` family, in bytes.
const PUSHINT_WIDTHS: [(usize, OpCode); 6] = [
    (1, OpCode::PUSHINT8),
    (2, OpCode::PUSHINT16),
    (4, OpCode::PUSHINT32),
    (8, OpCode::PUSHINT64),
    (16, OpCode::PUSHINT128),
    (32, OpCode::PUSHINT256),
];

/// Helps construct VM scripts programmatically.
#[derive(Debug, Default, Clone)]
pub struct ScriptBuilder {
    script: Vec<u8>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self { script: Vec::new() }
    }

    /// Emits an opcode to the script.
    pub fn emit_opcode(&mut self, op: OpCode) -> &mut Self {
        self.script.push(op as u8);
        self
    }

    /// Emits an opcode followed by a raw operand.
    pub fn emit_with_operand(&mut self, op: OpCode, operand: &[u8]) -> &mut Self {
        self.script.push(op as u8);
        self.script.extend_from_slice(operand);
        self
    }

    /// Pushes a byte string with the shortest `PUSHDATA` form.
    pub fn emit_push(&mut self, data: &[u8]) -> VmResult<&mut Self> {
        let len = data.len();
        if len <= u8::MAX as usize {
            self.emit_with_operand(OpCode::PUSHDATA1, &[len as u8]);
        } else if len <= u16::MAX as usize {
            self.emit_with_operand(OpCode::PUSHDATA2, &(len as u16).to_le_bytes());
        } else {
            let len = u32::try_from(len).map_err(|_| VmError::DataTooLarge(len))?;
            self.emit_with_operand(OpCode::PUSHDATA4, &len.to_le_bytes());
        }
        self.script.extend_from_slice(data);
        Ok(self)
    }

    /// Pushes UTF-8 text.
    pub fn emit_push_string(&mut self, value: &str) -> VmResult<&mut Self> {
        self.emit_push(value.as_bytes())
    }

    /// Pushes a small integer. Never fails.
    pub fn emit_push_int(&mut self, value: i64) -> &mut Self {
        if let Some(op) = Self::small_int_opcode(value) {
            return self.emit_opcode(op);
        }
        let bytes = value.to_le_bytes();
        // i64 always fits PUSHINT64, so the shortest form is found below it.
        let (width, op) = Self::pushint_width(&BigInt::from(value).to_signed_bytes_le())
            .unwrap_or((8, OpCode::PUSHINT64));
        self.emit_with_operand(op, &bytes[..width])
    }

    /// Pushes an arbitrary integer using `PUSHM1`/`PUSH0..16` or the
    /// narrowest `PUSHINT*` that holds its two's-complement form.
    pub fn emit_push_bigint(&mut self, value: &BigInt) -> VmResult<&mut Self> {
        if let Some(op) = i64::try_from(value).ok().and_then(Self::small_int_opcode) {
            return Ok(self.emit_opcode(op));
        }
        let bytes = value.to_signed_bytes_le();
        let (width, op) =
            Self::pushint_width(&bytes).ok_or(VmError::IntegerTooLarge(bytes.len()))?;
        let pad = if value.sign() == Sign::Minus { 0xff } else { 0x00 };
        let mut operand = bytes;
        operand.resize(width, pad);
        Ok(self.emit_with_operand(op, &operand))
    }

    pub fn emit_push_bool(&mut self, value: bool) -> &mut Self {
        self.emit_opcode(if value { OpCode::PUSHT } else { OpCode::PUSHF })
    }

    pub fn emit_push_null(&mut self) -> &mut Self {
        self.emit_opcode(OpCode::PUSHNULL)
    }

    /// Emits `SYSCALL` with the interop hash of `api`.
    pub fn emit_syscall(&mut self, api: &str) -> &mut Self {
        self.emit_with_operand(OpCode::SYSCALL, &interop_hash(api).to_le_bytes())
    }

    /// Packs the top `count` stack items into an array.
    pub fn emit_pack(&mut self, count: usize) -> &mut Self {
        if count == 0 {
            return self.emit_opcode(OpCode::NEWARRAY0);
        }
        self.emit_push_int(count as i64);
        self.emit_opcode(OpCode::PACK)
    }

    /// Packs the top `count` key/value pairs into a map.
    pub fn emit_pack_map(&mut self, count: usize) -> &mut Self {
        if count == 0 {
            return self.emit_opcode(OpCode::NEWMAP);
        }
        self.emit_push_int(count as i64);
        self.emit_opcode(OpCode::PACKMAP)
    }

    pub fn len(&self) -> usize {
        self.script.len()
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    pub fn to_array(&self) -> Vec<u8> {
        self.script.clone()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.script
    }

    fn small_int_opcode(value: i64) -> Option<OpCode> {
        match value {
            -1 => Some(OpCode::PUSHM1),
            0..=16 => OpCode::push_small(value as u8),
            _ => None,
        }
    }

    fn pushint_width(signed_le: &[u8]) -> Option<(usize, OpCode)> {
        PUSHINT_WIDTHS
            .iter()
            .copied()
            .find(|(width, _)| signed_le.len() <= *width)
    }
}
