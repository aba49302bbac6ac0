// Copyright (C) 2015-2025 The Neo Project.
//
// error.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Smart contract error types.

use crate::ContractParameterType;
use neo_vm::{OpCode, VmError};
use thiserror::Error;

/// Result type for contract operations
pub type ContractResult<T> = std::result::Result<T, ContractError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    #[error("script error: {0}")]
    Vm(#[from] VmError),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("{0} cannot be used as a map key")]
    InvalidMapKey(ContractParameterType),

    #[error("cannot read {found} as {expected}")]
    TypeMismatch {
        expected: ContractParameterType,
        found: ContractParameterType,
    },

    #[error("invalid invocation script: {0}")]
    InvalidScript(String),

    #[error("unsupported instruction {opcode:?} at offset {offset}")]
    UnsupportedInstruction { opcode: OpCode, offset: usize },
}
