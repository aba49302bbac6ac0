// Copyright (C) 2015-2025 The Neo Project.
//
// vm_state.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! VM state implementation.

use std::fmt;
use std::str::FromStr;

/// Final state reported by a node after running a script.
#[allow(clippy::upper_case_acronyms)]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VMState {
    /// Execution has not started or is in progress.
    NONE = 0,

    /// Execution completed successfully.
    HALT = 1 << 0,

    /// Execution ended with an uncaught exception.
    FAULT = 1 << 1,

    BREAK = 1 << 2,
}

impl VMState {
    #[inline]
    pub fn is_halt(self) -> bool {
        self == VMState::HALT
    }

    #[inline]
    pub fn is_fault(self) -> bool {
        self == VMState::FAULT
    }
}

impl fmt::Display for VMState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VMState::NONE => "NONE",
            VMState::HALT => "HALT",
            VMState::FAULT => "FAULT",
            VMState::BREAK => "BREAK",
        };
        f.write_str(name)
    }
}

impl FromStr for VMState {
    type Err = String;

    /// Parses the node's textual state. Nodes may report combined flags
    /// such as `"HALT, BREAK"`; FAULT wins over HALT.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = 0u8;
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let state = match part.to_ascii_uppercase().as_str() {
                "NONE" => VMState::NONE,
                "HALT" => VMState::HALT,
                "FAULT" => VMState::FAULT,
                "BREAK" => VMState::BREAK,
                other => return Err(format!("unknown VM state '{other}'")),
            };
            flags |= state as u8;
        }
        let state = [VMState::FAULT, VMState::HALT, VMState::BREAK]
            .into_iter()
            .find(|state| flags & *state as u8 != 0)
            .unwrap_or(VMState::NONE);
        Ok(state)
    }
}
