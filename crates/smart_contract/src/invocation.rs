// Copyright (C) 2015-2025 The Neo Project.
//
// invocation.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Dynamic contract call scripts.
//!
//! A call script leaves `[args, flags, method, contract]` on the stack and
//! ends with `SYSCALL System.Contract.Call`. Building is a pure function of
//! its inputs; decoding walks the pushes back into parameters.

use crate::{ContractError, ContractParameter, ContractParameterType, ContractResult};
use neo_config::ADDRESS_SIZE;
use neo_core::UInt160;
use neo_vm::interop::SYSTEM_CONTRACT_CALL;
use neo_vm::{interop_hash, CallFlags, Instruction, OpCode, ScriptBuilder, ScriptReader};
use num_traits::ToPrimitive;

/// Builds a call script with [`CallFlags::ALL`].
pub fn build_invocation_script(
    contract: &UInt160,
    method: &str,
    params: &[ContractParameter],
) -> ContractResult<Vec<u8>> {
    build_invocation_script_with_flags(contract, method, params, CallFlags::ALL)
}

pub fn build_invocation_script_with_flags(
    contract: &UInt160,
    method: &str,
    params: &[ContractParameter],
    flags: CallFlags,
) -> ContractResult<Vec<u8>> {
    if method.is_empty() {
        return Err(ContractError::InvalidParameter(
            "method name is empty".to_string(),
        ));
    }
    let mut builder = ScriptBuilder::new();
    ContractParameter::Array(params.to_vec()).emit(&mut builder)?;
    builder.emit_push_int(i64::from(flags.0));
    builder.emit_push_string(method)?;
    builder.emit_push(contract.as_bytes())?;
    builder.emit_syscall(SYSTEM_CONTRACT_CALL);
    Ok(builder.into_bytes())
}

/// A call script taken apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedInvocation {
    pub contract: UInt160,
    pub method: String,
    pub call_flags: CallFlags,
    /// Arguments as the stack sees them: text, hashes and keys come back as
    /// `ByteArray`.
    pub parameters: Vec<ContractParameter>,
}

impl DecodedInvocation {
    /// Coerces the parameters against the method's ABI types.
    pub fn typed_parameters(
        &self,
        types: &[ContractParameterType],
    ) -> ContractResult<Vec<ContractParameter>> {
        if types.len() != self.parameters.len() {
            return Err(ContractError::InvalidParameter(format!(
                "{} takes {} arguments, script passes {}",
                self.method,
                types.len(),
                self.parameters.len()
            )));
        }
        self.parameters
            .iter()
            .zip(types)
            .map(|(param, ty)| param.coerce(*ty))
            .collect()
    }
}

/// Decodes a script produced by [`build_invocation_script`].
///
/// Only pushes, `PACK`, `PACKMAP`, `NEWARRAY0` and `NEWMAP` may precede
/// the final syscall.
pub fn decode_invocation_script(script: &[u8]) -> ContractResult<DecodedInvocation> {
    let instructions = ScriptReader::new(script).read_all()?;
    let (last, body) = instructions
        .split_last()
        .ok_or_else(|| ContractError::InvalidScript("script is empty".to_string()))?;
    if last.syscall_hash() != Some(interop_hash(SYSTEM_CONTRACT_CALL)) {
        return Err(ContractError::InvalidScript(format!(
            "script does not end with {SYSTEM_CONTRACT_CALL}"
        )));
    }

    let mut stack = Vec::new();
    for instruction in body {
        evaluate(instruction, &mut stack)?;
    }
    if stack.len() != 4 {
        return Err(ContractError::InvalidScript(format!(
            "expected 4 call arguments on the stack, found {}",
            stack.len()
        )));
    }

    let contract = match stack.pop() {
        Some(ContractParameter::ByteArray(bytes)) if bytes.len() == ADDRESS_SIZE => {
            UInt160::from_bytes(&bytes)
                .map_err(|e| ContractError::InvalidScript(e.to_string()))?
        }
        _ => {
            return Err(ContractError::InvalidScript(
                "contract hash must be a 20-byte push".to_string(),
            ))
        }
    };
    let method = match stack.pop() {
        Some(ContractParameter::ByteArray(bytes)) => String::from_utf8(bytes)
            .map_err(|_| ContractError::InvalidScript("method is not UTF-8".to_string()))?,
        _ => {
            return Err(ContractError::InvalidScript(
                "method must be a byte push".to_string(),
            ))
        }
    };
    let call_flags = match stack.pop() {
        Some(ContractParameter::Integer(bits)) => bits
            .to_i64()
            .and_then(CallFlags::from_bits)
            .ok_or_else(|| ContractError::InvalidScript(format!("invalid call flags {bits}")))?,
        _ => {
            return Err(ContractError::InvalidScript(
                "call flags must be an integer push".to_string(),
            ))
        }
    };
    let parameters = match stack.pop() {
        Some(ContractParameter::Array(items)) => items,
        _ => {
            return Err(ContractError::InvalidScript(
                "arguments must be packed into an array".to_string(),
            ))
        }
    };

    Ok(DecodedInvocation {
        contract,
        method,
        call_flags,
        parameters,
    })
}

fn evaluate(instruction: &Instruction<'_>, stack: &mut Vec<ContractParameter>) -> ContractResult<()> {
    if let Some(data) = instruction.push_data() {
        stack.push(ContractParameter::ByteArray(data.to_vec()));
        return Ok(());
    }
    if let Some(value) = instruction.push_integer() {
        stack.push(ContractParameter::Integer(value));
        return Ok(());
    }
    match instruction.opcode {
        OpCode::PUSHNULL => stack.push(ContractParameter::Any),
        OpCode::PUSHT => stack.push(ContractParameter::Boolean(true)),
        OpCode::PUSHF => stack.push(ContractParameter::Boolean(false)),
        OpCode::NEWARRAY0 => stack.push(ContractParameter::Array(Vec::new())),
        OpCode::NEWMAP => stack.push(ContractParameter::Map(Vec::new())),
        OpCode::PACK => {
            let count = pop_count(stack, instruction)?;
            let mut items = Vec::with_capacity(count);
            for _ in 0..count {
                items.push(pop(stack, instruction)?);
            }
            stack.push(ContractParameter::Array(items));
        }
        OpCode::PACKMAP => {
            let count = pop_count(stack, instruction)?;
            let mut entries = Vec::with_capacity(count);
            for _ in 0..count {
                let key = pop(stack, instruction)?;
                let value = pop(stack, instruction)?;
                entries.push((key, value));
            }
            stack.push(ContractParameter::Map(entries));
        }
        opcode => {
            return Err(ContractError::UnsupportedInstruction {
                opcode,
                offset: instruction.offset,
            })
        }
    }
    Ok(())
}

fn pop(
    stack: &mut Vec<ContractParameter>,
    instruction: &Instruction<'_>,
) -> ContractResult<ContractParameter> {
    stack.pop().ok_or_else(|| {
        ContractError::InvalidScript(format!(
            "stack underflow at offset {}",
            instruction.offset
        ))
    })
}

fn pop_count(
    stack: &mut Vec<ContractParameter>,
    instruction: &Instruction<'_>,
) -> ContractResult<usize> {
    match pop(stack, instruction)? {
        ContractParameter::Integer(count) => count
            .to_usize()
            .filter(|count| *count <= stack.len())
            .ok_or_else(|| {
                ContractError::InvalidScript(format!(
                    "invalid item count {count} at offset {}",
                    instruction.offset
                ))
            }),
        other => Err(ContractError::TypeMismatch {
            expected: ContractParameterType::Integer,
            found: other.get_type(),
        }),
    }
}
