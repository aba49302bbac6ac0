// Copyright (C) 2015-2025 The Neo Project.
//
// operand_size.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Operand size information for Neo VM opcodes.

/// Operand layout of an instruction.
///
/// Either a fixed number of bytes (`size`) or a little-endian length
/// prefix of `size_prefix` bytes followed by that many data bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandSize {
    size: usize,
    size_prefix: usize,
}

impl OperandSize {
    pub const fn fixed(size: usize) -> Self {
        Self {
            size,
            size_prefix: 0,
        }
    }

    pub const fn prefix(size_prefix: usize) -> Self {
        Self {
            size: 0,
            size_prefix,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn size_prefix(&self) -> usize {
        self.size_prefix
    }
}
