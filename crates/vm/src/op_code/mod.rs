// Copyright (C) 2015-2025 The Neo Project.
//
// mod.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! OpCodes of the Neo N3 virtual machine.
//!
//! Only the instructions a transaction client emits or needs to step over
//! are listed. Decoding any other byte yields `VmError::UnknownOpCode`.

mod operand_size;

pub use operand_size::OperandSize;

/// A Neo N3 instruction.
#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OpCode {
    // Constants
    PUSHINT8 = 0x00,
    PUSHINT16 = 0x01,
    PUSHINT32 = 0x02,
    PUSHINT64 = 0x03,
    PUSHINT128 = 0x04,
    PUSHINT256 = 0x05,
    PUSHT = 0x08,
    PUSHF = 0x09,
    PUSHA = 0x0A,
    PUSHNULL = 0x0B,
    PUSHDATA1 = 0x0C,
    PUSHDATA2 = 0x0D,
    PUSHDATA4 = 0x0E,
    PUSHM1 = 0x0F,
    PUSH0 = 0x10,
    PUSH1 = 0x11,
    PUSH2 = 0x12,
    PUSH3 = 0x13,
    PUSH4 = 0x14,
    PUSH5 = 0x15,
    PUSH6 = 0x16,
    PUSH7 = 0x17,
    PUSH8 = 0x18,
    PUSH9 = 0x19,
    PUSH10 = 0x1A,
    PUSH11 = 0x1B,
    PUSH12 = 0x1C,
    PUSH13 = 0x1D,
    PUSH14 = 0x1E,
    PUSH15 = 0x1F,
    PUSH16 = 0x20,

    // Flow control
    NOP = 0x21,
    JMP = 0x22,
    JMP_L = 0x23,
    JMPIF = 0x24,
    JMPIF_L = 0x25,
    JMPIFNOT = 0x26,
    JMPIFNOT_L = 0x27,
    CALL = 0x34,
    CALL_L = 0x35,
    CALLT = 0x37,
    ABORT = 0x38,
    ASSERT = 0x39,
    THROW = 0x3A,
    RET = 0x40,
    SYSCALL = 0x41,

    // Stack
    DEPTH = 0x43,
    DROP = 0x45,
    NIP = 0x46,
    CLEAR = 0x49,
    DUP = 0x4A,
    OVER = 0x4B,
    SWAP = 0x50,
    ROT = 0x51,

    // Compound types
    PACKMAP = 0xBE,
    PACKSTRUCT = 0xBF,
    PACK = 0xC0,
    UNPACK = 0xC1,
    NEWARRAY0 = 0xC2,
    NEWARRAY = 0xC3,
    NEWSTRUCT0 = 0xC5,
    NEWMAP = 0xC8,
    SIZE = 0xCA,
    PICKITEM = 0xCE,
    APPEND = 0xCF,
    SETITEM = 0xD0,
}

impl OpCode {
    const PUSH_SMALL: [OpCode; 17] = [
        OpCode::PUSH0,
        OpCode::PUSH1,
        OpCode::PUSH2,
        OpCode::PUSH3,
        OpCode::PUSH4,
        OpCode::PUSH5,
        OpCode::PUSH6,
        OpCode::PUSH7,
        OpCode::PUSH8,
        OpCode::PUSH9,
        OpCode::PUSH10,
        OpCode::PUSH11,
        OpCode::PUSH12,
        OpCode::PUSH13,
        OpCode::PUSH14,
        OpCode::PUSH15,
        OpCode::PUSH16,
    ];

    const ALL: &'static [OpCode] = &[
        OpCode::PUSHINT8,
        OpCode::PUSHINT16,
        OpCode::PUSHINT32,
        OpCode::PUSHINT64,
        OpCode::PUSHINT128,
        OpCode::PUSHINT256,
        OpCode::PUSHT,
        OpCode::PUSHF,
        OpCode::PUSHA,
        OpCode::PUSHNULL,
        OpCode::PUSHDATA1,
        OpCode::PUSHDATA2,
        OpCode::PUSHDATA4,
        OpCode::PUSHM1,
        OpCode::PUSH0,
        OpCode::PUSH1,
        OpCode::PUSH2,
        OpCode::PUSH3,
        OpCode::PUSH4,
        OpCode::PUSH5,
        OpCode::PUSH6,
        OpCode::PUSH7,
        OpCode::PUSH8,
        OpCode::PUSH9,
        OpCode::PUSH10,
        OpCode::PUSH11,
        OpCode::PUSH12,
        OpCode::PUSH13,
        OpCode::PUSH14,
        OpCode::PUSH15,
        OpCode::PUSH16,
        OpCode::NOP,
        OpCode::JMP,
        OpCode::JMP_L,
        OpCode::JMPIF,
        OpCode::JMPIF_L,
        OpCode::JMPIFNOT,
        OpCode::JMPIFNOT_L,
        OpCode::CALL,
        OpCode::CALL_L,
        OpCode::CALLT,
        OpCode::ABORT,
        OpCode::ASSERT,
        OpCode::THROW,
        OpCode::RET,
        OpCode::SYSCALL,
        OpCode::DEPTH,
        OpCode::DROP,
        OpCode::NIP,
        OpCode::CLEAR,
        OpCode::DUP,
        OpCode::OVER,
        OpCode::SWAP,
        OpCode::ROT,
        OpCode::PACKMAP,
        OpCode::PACKSTRUCT,
        OpCode::PACK,
        OpCode::UNPACK,
        OpCode::NEWARRAY0,
        OpCode::NEWARRAY,
        OpCode::NEWSTRUCT0,
        OpCode::NEWMAP,
        OpCode::SIZE,
        OpCode::PICKITEM,
        OpCode::APPEND,
        OpCode::SETITEM,
    ];

    /// Looks up an opcode by its byte value.
    pub fn from_byte(value: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| *op as u8 == value)
    }

    /// `PUSH0`..`PUSH16` for values in range.
    pub fn push_small(value: u8) -> Option<Self> {
        Self::PUSH_SMALL.get(value as usize).copied()
    }

    /// The integer a `PUSHM1`/`PUSH0`..`PUSH16` instruction pushes.
    pub fn small_int_value(self) -> Option<i8> {
        let byte = self as u8;
        match self {
            OpCode::PUSHM1 => Some(-1),
            _ if (OpCode::PUSH0 as u8..=OpCode::PUSH16 as u8).contains(&byte) => {
                Some((byte - OpCode::PUSH0 as u8) as i8)
            }
            _ => None,
        }
    }

    /// Operand layout following the opcode byte.
    pub fn operand_size(self) -> OperandSize {
        match self {
            OpCode::PUSHINT8 | OpCode::JMP | OpCode::JMPIF | OpCode::JMPIFNOT | OpCode::CALL => {
                OperandSize::fixed(1)
            }
            OpCode::PUSHINT16 | OpCode::CALLT => OperandSize::fixed(2),
            OpCode::PUSHINT32
            | OpCode::PUSHA
            | OpCode::JMP_L
            | OpCode::JMPIF_L
            | OpCode::JMPIFNOT_L
            | OpCode::CALL_L
            | OpCode::SYSCALL => OperandSize::fixed(4),
            OpCode::PUSHINT64 => OperandSize::fixed(8),
            OpCode::PUSHINT128 => OperandSize::fixed(16),
            OpCode::PUSHINT256 => OperandSize::fixed(32),
            OpCode::PUSHDATA1 => OperandSize::prefix(1),
            OpCode::PUSHDATA2 => OperandSize::prefix(2),
            OpCode::PUSHDATA4 => OperandSize::prefix(4),
            _ => OperandSize::fixed(0),
        }
    }
}

impl TryFrom<u8> for OpCode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_byte(value).ok_or(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_lookup() {
        assert_eq!(OpCode::from_byte(0x41), Some(OpCode::SYSCALL));
        assert_eq!(OpCode::from_byte(0xC2), Some(OpCode::NEWARRAY0));
        assert_eq!(OpCode::from_byte(0x0C), Some(OpCode::PUSHDATA1));
        assert_eq!(OpCode::from_byte(0xFF), None);
        assert_eq!(OpCode::try_from(0x06), Err(0x06));
    }

    #[test]
    fn test_small_ints() {
        assert_eq!(OpCode::push_small(15), Some(OpCode::PUSH15));
        assert_eq!(OpCode::push_small(17), None);
        assert_eq!(OpCode::PUSH15.small_int_value(), Some(15));
        assert_eq!(OpCode::PUSHM1.small_int_value(), Some(-1));
        assert_eq!(OpCode::PACK.small_int_value(), None);
    }

    #[test]
    fn test_operand_sizes() {
        assert_eq!(OpCode::SYSCALL.operand_size(), OperandSize::fixed(4));
        assert_eq!(OpCode::PUSHDATA2.operand_size(), OperandSize::prefix(2));
        assert_eq!(OpCode::PUSHINT128.operand_size().size(), 16);
        assert_eq!(OpCode::PACK.operand_size(), OperandSize::fixed(0));
    }
}
