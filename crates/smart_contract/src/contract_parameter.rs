// Copyright (C) 2015-2025 The Neo Project.
//
// contract_parameter.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Contract method arguments.

use crate::{ContractError, ContractParameterType, ContractResult};
use neo_config::{ADDRESS_SIZE, HASH_SIZE, PUBLIC_KEY_SIZE, SIGNATURE_SIZE};
use neo_core::{UInt160, UInt256};
use neo_vm::ScriptBuilder;
use num_bigint::BigInt;
use num_traits::Zero;

/// A typed argument of a contract call.
///
/// Maps keep insertion order so that the emitted script is a pure function
/// of the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContractParameter {
    /// Null.
    Any,
    Boolean(bool),
    Integer(BigInt),
    ByteArray(Vec<u8>),
    String(String),
    Hash160(UInt160),
    Hash256(UInt256),
    PublicKey([u8; PUBLIC_KEY_SIZE]),
    Signature([u8; SIGNATURE_SIZE]),
    Array(Vec<ContractParameter>),
    Map(Vec<(ContractParameter, ContractParameter)>),
}

impl ContractParameter {
    pub fn integer(value: impl Into<BigInt>) -> Self {
        ContractParameter::Integer(value.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        ContractParameter::String(value.into())
    }

    pub fn get_type(&self) -> ContractParameterType {
        match self {
            ContractParameter::Any => ContractParameterType::Any,
            ContractParameter::Boolean(_) => ContractParameterType::Boolean,
            ContractParameter::Integer(_) => ContractParameterType::Integer,
            ContractParameter::ByteArray(_) => ContractParameterType::ByteArray,
            ContractParameter::String(_) => ContractParameterType::String,
            ContractParameter::Hash160(_) => ContractParameterType::Hash160,
            ContractParameter::Hash256(_) => ContractParameterType::Hash256,
            ContractParameter::PublicKey(_) => ContractParameterType::PublicKey,
            ContractParameter::Signature(_) => ContractParameterType::Signature,
            ContractParameter::Array(_) => ContractParameterType::Array,
            ContractParameter::Map(_) => ContractParameterType::Map,
        }
    }

    /// Emits the instructions that leave this value on the evaluation stack.
    pub fn emit(&self, builder: &mut ScriptBuilder) -> ContractResult<()> {
        match self {
            ContractParameter::Any => {
                builder.emit_push_null();
            }
            ContractParameter::Boolean(value) => {
                builder.emit_push_bool(*value);
            }
            ContractParameter::Integer(value) => {
                builder.emit_push_bigint(value)?;
            }
            ContractParameter::ByteArray(bytes) => {
                builder.emit_push(bytes)?;
            }
            ContractParameter::String(value) => {
                builder.emit_push_string(value)?;
            }
            ContractParameter::Hash160(hash) => {
                builder.emit_push(hash.as_bytes())?;
            }
            ContractParameter::Hash256(hash) => {
                builder.emit_push(hash.as_bytes())?;
            }
            ContractParameter::PublicKey(key) => {
                builder.emit_push(key)?;
            }
            ContractParameter::Signature(signature) => {
                builder.emit_push(signature)?;
            }
            ContractParameter::Array(items) => {
                for item in items.iter().rev() {
                    item.emit(builder)?;
                }
                builder.emit_pack(items.len());
            }
            ContractParameter::Map(entries) => {
                for (key, value) in entries.iter().rev() {
                    if !key.get_type().is_primitive() {
                        return Err(ContractError::InvalidMapKey(key.get_type()));
                    }
                    value.emit(builder)?;
                    key.emit(builder)?;
                }
                builder.emit_pack_map(entries.len());
            }
        }
        Ok(())
    }

    /// Reinterprets a decoded value as `target`.
    ///
    /// Decoded scripts only carry stack shapes: null, booleans, integers,
    /// byte strings, arrays and maps. This recovers the ABI-level value
    /// (text, hashes, keys) from those shapes. Array and map members are
    /// left as decoded; use [`coerce_like`](Self::coerce_like) to type them.
    pub fn coerce(&self, target: ContractParameterType) -> ContractResult<ContractParameter> {
        let mismatch = || ContractError::TypeMismatch {
            expected: target,
            found: self.get_type(),
        };
        let coerced = match (target, self) {
            (ContractParameterType::Any, value) => value.clone(),
            (found, value) if found == value.get_type() => value.clone(),
            (ContractParameterType::Boolean, ContractParameter::Integer(value)) => {
                ContractParameter::Boolean(!value.is_zero())
            }
            (ContractParameterType::Integer, ContractParameter::Boolean(value)) => {
                ContractParameter::Integer(BigInt::from(u8::from(*value)))
            }
            (ContractParameterType::String, ContractParameter::ByteArray(bytes)) => {
                ContractParameter::String(String::from_utf8(bytes.clone()).map_err(|_| mismatch())?)
            }
            (ContractParameterType::ByteArray, ContractParameter::String(text)) => {
                ContractParameter::ByteArray(text.as_bytes().to_vec())
            }
            (ContractParameterType::Hash160, ContractParameter::ByteArray(bytes))
                if bytes.len() == ADDRESS_SIZE =>
            {
                ContractParameter::Hash160(UInt160::from_bytes(bytes).map_err(|_| mismatch())?)
            }
            (ContractParameterType::Hash256, ContractParameter::ByteArray(bytes))
                if bytes.len() == HASH_SIZE =>
            {
                ContractParameter::Hash256(UInt256::from_bytes(bytes).map_err(|_| mismatch())?)
            }
            (ContractParameterType::PublicKey, ContractParameter::ByteArray(bytes)) => {
                ContractParameter::PublicKey(bytes.as_slice().try_into().map_err(|_| mismatch())?)
            }
            (ContractParameterType::Signature, ContractParameter::ByteArray(bytes)) => {
                ContractParameter::Signature(bytes.as_slice().try_into().map_err(|_| mismatch())?)
            }
            _ => return Err(mismatch()),
        };
        Ok(coerced)
    }

    /// Like [`coerce`](Self::coerce), but takes the type of every nested
    /// member from `template`.
    pub fn coerce_like(&self, template: &ContractParameter) -> ContractResult<ContractParameter> {
        match (template, self) {
            (ContractParameter::Array(types), ContractParameter::Array(items))
                if types.len() == items.len() =>
            {
                let items = items
                    .iter()
                    .zip(types)
                    .map(|(item, ty)| item.coerce_like(ty))
                    .collect::<ContractResult<Vec<_>>>()?;
                Ok(ContractParameter::Array(items))
            }
            (ContractParameter::Map(types), ContractParameter::Map(entries))
                if types.len() == entries.len() =>
            {
                let entries = entries
                    .iter()
                    .zip(types)
                    .map(|((key, value), (key_ty, value_ty))| {
                        Ok((key.coerce_like(key_ty)?, value.coerce_like(value_ty)?))
                    })
                    .collect::<ContractResult<Vec<_>>>()?;
                Ok(ContractParameter::Map(entries))
            }
            (ContractParameter::Array(_) | ContractParameter::Map(_), _) => {
                Err(ContractError::TypeMismatch {
                    expected: template.get_type(),
                    found: self.get_type(),
                })
            }
            _ => self.coerce(template.get_type()),
        }
    }
}

impl From<bool> for ContractParameter {
    fn from(value: bool) -> Self {
        ContractParameter::Boolean(value)
    }
}

impl From<i64> for ContractParameter {
    fn from(value: i64) -> Self {
        ContractParameter::Integer(BigInt::from(value))
    }
}

impl From<BigInt> for ContractParameter {
    fn from(value: BigInt) -> Self {
        ContractParameter::Integer(value)
    }
}

impl From<&str> for ContractParameter {
    fn from(value: &str) -> Self {
        ContractParameter::String(value.to_string())
    }
}

impl From<String> for ContractParameter {
    fn from(value: String) -> Self {
        ContractParameter::String(value)
    }
}

impl From<Vec<u8>> for ContractParameter {
    fn from(value: Vec<u8>) -> Self {
        ContractParameter::ByteArray(value)
    }
}

impl From<UInt160> for ContractParameter {
    fn from(value: UInt160) -> Self {
        ContractParameter::Hash160(value)
    }
}

impl From<UInt256> for ContractParameter {
    fn from(value: UInt256) -> Self {
        ContractParameter::Hash256(value)
    }
}

impl From<Vec<ContractParameter>> for ContractParameter {
    fn from(value: Vec<ContractParameter>) -> Self {
        ContractParameter::Array(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    fn emit(param: &ContractParameter) -> Vec<u8> {
        let mut builder = ScriptBuilder::new();
        param.emit(&mut builder).unwrap();
        builder.to_array()
    }

    #[test]
    fn test_primitive_pushes() {
        assert_eq!(emit(&ContractParameter::Any), vec![0x0b]);
        assert_eq!(emit(&true.into()), vec![0x08]);
        assert_eq!(emit(&8i64.into()), vec![0x18]);
        assert_eq!(emit(&"neo".into()), hex!("0c 03 6e 65 6f").to_vec());
        let hash = UInt160::from_array([0x11; 20]);
        let script = emit(&hash.into());
        assert_eq!(&script[..2], &[0x0c, 0x14]);
        assert_eq!(&script[2..], hash.as_bytes());
    }

    #[test]
    fn test_array_is_pushed_reversed_then_packed() {
        let param = ContractParameter::Array(vec![1i64.into(), 2i64.into()]);
        assert_eq!(emit(&param), hex!("12 11 12 c0").to_vec());
        assert_eq!(emit(&ContractParameter::Array(vec![])), vec![0xc2]);
    }

    #[test]
    fn test_map_pushes_value_then_key() {
        let param = ContractParameter::Map(vec![("a".into(), 5i64.into())]);
        assert_eq!(emit(&param), hex!("15 0c 01 61 11 be").to_vec());
    }

    #[test]
    fn test_map_rejects_compound_keys() {
        let param = ContractParameter::Map(vec![(ContractParameter::Array(vec![]), 1i64.into())]);
        let mut builder = ScriptBuilder::new();
        assert_eq!(
            param.emit(&mut builder),
            Err(ContractError::InvalidMapKey(ContractParameterType::Array))
        );
    }

    #[test]
    fn test_coerce_recovers_abi_values() {
        let bytes = ContractParameter::ByteArray(vec![0x22; 20]);
        assert_eq!(
            bytes.coerce(ContractParameterType::Hash160).unwrap(),
            ContractParameter::Hash160(UInt160::from_array([0x22; 20]))
        );
        assert!(matches!(
            bytes.coerce(ContractParameterType::Hash256),
            Err(ContractError::TypeMismatch { .. })
        ));
        assert_eq!(
            ContractParameter::ByteArray(b"GAS".to_vec())
                .coerce(ContractParameterType::String)
                .unwrap(),
            ContractParameter::string("GAS")
        );
        assert!(ContractParameter::ByteArray(vec![0xff, 0xfe])
            .coerce(ContractParameterType::String)
            .is_err());
    }

    #[test]
    fn test_coerce_like_types_nested_members() {
        let template = ContractParameter::Array(vec![
            ContractParameter::Hash160(UInt160::zero()),
            ContractParameter::string(""),
        ]);
        let decoded = ContractParameter::Array(vec![
            ContractParameter::ByteArray(vec![0x33; 20]),
            ContractParameter::ByteArray(b"memo".to_vec()),
        ]);
        assert_eq!(
            decoded.coerce_like(&template).unwrap(),
            ContractParameter::Array(vec![
                ContractParameter::Hash160(UInt160::from_array([0x33; 20])),
                ContractParameter::string("memo"),
            ])
        );
    }
}
