// Copyright (C) 2015-2025 The Neo Project.
//
// lib.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! # Neo Virtual Machine scripts
//!
//! Building and decoding Neo N3 VM scripts: opcodes, the `ScriptBuilder`
//! used for contract calls and verification scripts, a `ScriptReader` for
//! walking existing scripts, interop service hashes and call flags.
//!
//! Script execution happens on the node; nothing here runs code.
//!
//! ## Example
//!
//! ```rust
//! use neo_vm::{OpCode, ScriptBuilder};
//!
//! let mut builder = ScriptBuilder::new();
//! builder.emit_push_int(8);
//! builder.emit_opcode(OpCode::RET);
//! assert_eq!(builder.to_array(), vec![0x18, 0x40]);
//! ```

pub mod call_flags;
pub mod interop;
pub mod op_code;
pub mod script_builder;
pub mod script_reader;
pub mod vm_state;

pub use call_flags::CallFlags;
pub use interop::interop_hash;
pub use op_code::{OpCode, OperandSize};
pub use script_builder::ScriptBuilder;
pub use script_reader::{Instruction, ScriptReader};
pub use vm_state::VMState;

use thiserror::Error;

/// Result type for script operations
pub type VmResult<T> = std::result::Result<T, VmError>;

/// Errors raised while building or decoding scripts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VmError {
    #[error("unknown opcode {byte:#04x} at offset {offset}")]
    UnknownOpCode { byte: u8, offset: usize },

    #[error("instruction at offset {offset} is truncated")]
    Truncated { offset: usize },

    #[error("integer needs {0} bytes, the widest push is 32")]
    IntegerTooLarge(usize),

    #[error("push data of {0} bytes exceeds the PUSHDATA4 limit")]
    DataTooLarge(usize),
}
