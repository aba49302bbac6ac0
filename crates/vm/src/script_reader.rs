// Copyright (C) 2015-2025 The Neo Project.
//
// script_reader.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Instruction decoding.

use crate::op_code::OpCode;
use crate::{VmError, VmResult};
use num_bigint::BigInt;

/// One decoded instruction borrowing its operand from the script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction<'a> {
    pub offset: usize,
    pub opcode: OpCode,
    pub operand: &'a [u8],
}

impl<'a> Instruction<'a> {
    /// Data pushed by a `PUSHDATA*` instruction.
    pub fn push_data(&self) -> Option<&'a [u8]> {
        matches!(
            self.opcode,
            OpCode::PUSHDATA1 | OpCode::PUSHDATA2 | OpCode::PUSHDATA4
        )
        .then_some(self.operand)
    }

    /// Integer pushed by `PUSHM1`, `PUSH0..16` or `PUSHINT*`.
    pub fn push_integer(&self) -> Option<BigInt> {
        if let Some(small) = self.opcode.small_int_value() {
            return Some(BigInt::from(small));
        }
        match self.opcode {
            OpCode::PUSHINT8
            | OpCode::PUSHINT16
            | OpCode::PUSHINT32
            | OpCode::PUSHINT64
            | OpCode::PUSHINT128
            | OpCode::PUSHINT256 => Some(BigInt::from_signed_bytes_le(self.operand)),
            _ => None,
        }
    }

    /// Interop hash carried by `SYSCALL`.
    pub fn syscall_hash(&self) -> Option<u32> {
        if self.opcode != OpCode::SYSCALL {
            return None;
        }
        let bytes: [u8; 4] = self.operand.try_into().ok()?;
        Some(u32::from_le_bytes(bytes))
    }

    /// Encoded length including the opcode byte.
    pub fn size(&self) -> usize {
        1 + self.opcode.operand_size().size_prefix() + self.operand.len()
    }
}

/// Iterates over the instructions of a script.
#[derive(Debug, Clone)]
pub struct ScriptReader<'a> {
    script: &'a [u8],
    position: usize,
}

impl<'a> ScriptReader<'a> {
    pub fn new(script: &'a [u8]) -> Self {
        Self {
            script,
            position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.script.len()
    }

    /// Decodes the next instruction, or `None` at the end of the script.
    pub fn next_instruction(&mut self) -> VmResult<Option<Instruction<'a>>> {
        if self.is_at_end() {
            return Ok(None);
        }
        let offset = self.position;
        let byte = self.script[offset];
        let opcode = OpCode::from_byte(byte).ok_or(VmError::UnknownOpCode { byte, offset })?;
        let operand_size = opcode.operand_size();

        let mut cursor = offset + 1;
        let len = if operand_size.size_prefix() > 0 {
            let prefix = self.read_slice(cursor, operand_size.size_prefix(), offset)?;
            cursor += prefix.len();
            let mut le = [0u8; 4];
            le[..prefix.len()].copy_from_slice(prefix);
            u32::from_le_bytes(le) as usize
        } else {
            operand_size.size()
        };
        let operand = self.read_slice(cursor, len, offset)?;
        self.position = cursor + len;

        Ok(Some(Instruction {
            offset,
            opcode,
            operand,
        }))
    }

    /// Decodes every instruction of the script.
    pub fn read_all(mut self) -> VmResult<Vec<Instruction<'a>>> {
        let mut instructions = Vec::new();
        while let Some(instruction) = self.next_instruction()? {
            instructions.push(instruction);
        }
        Ok(instructions)
    }

    fn read_slice(&self, start: usize, len: usize, offset: usize) -> VmResult<&'a [u8]> {
        start
            .checked_add(len)
            .and_then(|end| self.script.get(start..end))
            .ok_or(VmError::Truncated { offset })
    }
}

impl<'a> Iterator for ScriptReader<'a> {
    type Item = VmResult<Instruction<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_instruction() {
            Ok(Some(instruction)) => Some(Ok(instruction)),
            Ok(None) => None,
            Err(e) => {
                // stop after the first error
                self.position = self.script.len();
                Some(Err(e))
            }
        }
    }
}
