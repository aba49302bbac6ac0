// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_stack_item.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Result stack items as the node reports them.

use crate::RpcError;
use base64::{engine::general_purpose, Engine as _};
use neo_core::UInt160;
use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One `{"type": ..., "value": ...}` entry of an invocation result stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcStackItem {
    #[serde(rename = "type")]
    pub item_type: String,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub value: Value,
}

impl RpcStackItem {
    pub fn any() -> Self {
        Self {
            item_type: "Any".to_string(),
            value: Value::Null,
        }
    }

    pub fn boolean(value: bool) -> Self {
        Self {
            item_type: "Boolean".to_string(),
            value: Value::Bool(value),
        }
    }

    pub fn integer(value: impl Into<BigInt>) -> Self {
        Self {
            item_type: "Integer".to_string(),
            value: Value::String(value.into().to_string()),
        }
    }

    pub fn byte_string(bytes: &[u8]) -> Self {
        Self {
            item_type: "ByteString".to_string(),
            value: Value::String(general_purpose::STANDARD.encode(bytes)),
        }
    }

    pub fn array(items: Vec<RpcStackItem>) -> Self {
        Self {
            item_type: "Array".to_string(),
            value: items
                .into_iter()
                .map(|item| serde_json::to_value(item).unwrap_or(Value::Null))
                .collect(),
        }
    }

    pub fn is_null(&self) -> bool {
        self.item_type == "Any" && self.value.is_null()
    }

    /// Boolean view with VM conversion rules: integers are true when non-zero,
    /// byte strings when any byte is non-zero.
    pub fn as_boolean(&self) -> Result<bool, RpcError> {
        match self.item_type.as_str() {
            "Boolean" => self
                .value
                .as_bool()
                .ok_or_else(|| self.malformed("boolean")),
            "Integer" => Ok(!self.as_integer()?.is_zero()),
            "ByteString" | "Buffer" => Ok(self.as_bytes()?.iter().any(|b| *b != 0)),
            _ => Err(self.mismatch("Boolean")),
        }
    }

    /// Integer view. Byte strings are read as little-endian two's complement.
    pub fn as_integer(&self) -> Result<BigInt, RpcError> {
        match self.item_type.as_str() {
            "Integer" => match &self.value {
                Value::String(text) => text.parse().map_err(|_| self.malformed("integer")),
                Value::Number(number) => number
                    .as_i64()
                    .map(BigInt::from)
                    .ok_or_else(|| self.malformed("integer")),
                _ => Err(self.malformed("integer")),
            },
            "Boolean" => Ok(BigInt::from(u8::from(self.as_boolean()?))),
            "ByteString" | "Buffer" => Ok(BigInt::from_signed_bytes_le(&self.as_bytes()?)),
            _ => Err(self.mismatch("Integer")),
        }
    }

    pub fn as_bytes(&self) -> Result<Vec<u8>, RpcError> {
        match self.item_type.as_str() {
            "ByteString" | "Buffer" => {
                let encoded = self.value.as_str().ok_or_else(|| self.malformed("base64"))?;
                general_purpose::STANDARD
                    .decode(encoded)
                    .map_err(|_| self.malformed("base64"))
            }
            _ => Err(self.mismatch("ByteString")),
        }
    }

    pub fn as_string(&self) -> Result<String, RpcError> {
        String::from_utf8(self.as_bytes()?).map_err(|_| self.malformed("UTF-8"))
    }

    /// Members of an `Array` or `Struct`.
    pub fn as_array(&self) -> Result<Vec<RpcStackItem>, RpcError> {
        match self.item_type.as_str() {
            "Array" | "Struct" => serde_json::from_value(self.value.clone())
                .map_err(|_| self.malformed("array")),
            _ => Err(self.mismatch("Array")),
        }
    }

    fn mismatch(&self, expected: &str) -> RpcError {
        RpcError::InvalidResponse(format!(
            "expected {expected} stack item, got {}",
            self.item_type
        ))
    }

    fn malformed(&self, what: &str) -> RpcError {
        RpcError::InvalidResponse(format!(
            "{} stack item carries malformed {what} value {}",
            self.item_type, self.value
        ))
    }
}

/// Conversion from a result stack item to a Rust value.
pub trait FromStackItem: Sized {
    fn from_stack_item(item: &RpcStackItem) -> Result<Self, RpcError>;
}

impl FromStackItem for RpcStackItem {
    fn from_stack_item(item: &RpcStackItem) -> Result<Self, RpcError> {
        Ok(item.clone())
    }
}

impl FromStackItem for bool {
    fn from_stack_item(item: &RpcStackItem) -> Result<Self, RpcError> {
        item.as_boolean()
    }
}

impl FromStackItem for BigInt {
    fn from_stack_item(item: &RpcStackItem) -> Result<Self, RpcError> {
        item.as_integer()
    }
}

impl FromStackItem for i64 {
    fn from_stack_item(item: &RpcStackItem) -> Result<Self, RpcError> {
        let value = item.as_integer()?;
        value
            .to_i64()
            .ok_or_else(|| RpcError::InvalidResponse(format!("{value} does not fit in i64")))
    }
}

impl FromStackItem for u8 {
    fn from_stack_item(item: &RpcStackItem) -> Result<Self, RpcError> {
        let value = item.as_integer()?;
        value
            .to_u8()
            .ok_or_else(|| RpcError::InvalidResponse(format!("{value} does not fit in u8")))
    }
}

impl FromStackItem for String {
    fn from_stack_item(item: &RpcStackItem) -> Result<Self, RpcError> {
        item.as_string()
    }
}

impl FromStackItem for Vec<u8> {
    fn from_stack_item(item: &RpcStackItem) -> Result<Self, RpcError> {
        item.as_bytes()
    }
}

impl FromStackItem for UInt160 {
    fn from_stack_item(item: &RpcStackItem) -> Result<Self, RpcError> {
        let bytes = item.as_bytes()?;
        UInt160::from_bytes(&bytes).map_err(|e| RpcError::InvalidResponse(e.to_string()))
    }
}

impl<T: FromStackItem> FromStackItem for Option<T> {
    fn from_stack_item(item: &RpcStackItem) -> Result<Self, RpcError> {
        if item.is_null() {
            return Ok(None);
        }
        T::from_stack_item(item).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> RpcStackItem {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_decodes_node_json() {
        assert!(bool::from_stack_item(&parse(json!({"type": "Boolean", "value": true}))).unwrap());
        assert_eq!(
            i64::from_stack_item(&parse(json!({"type": "Integer", "value": "1000"}))).unwrap(),
            1000
        );
        assert_eq!(
            String::from_stack_item(&parse(json!({"type": "ByteString", "value": "R0FT"})))
                .unwrap(),
            "GAS"
        );
        let null = parse(json!({"type": "Any"}));
        assert!(null.is_null());
        assert_eq!(Option::<i64>::from_stack_item(&null).unwrap(), None);
    }

    #[test]
    fn test_vm_conversions() {
        assert!(bool::from_stack_item(&RpcStackItem::integer(2)).unwrap());
        assert!(!bool::from_stack_item(&RpcStackItem::byte_string(&[0, 0])).unwrap());
        assert_eq!(
            BigInt::from_stack_item(&RpcStackItem::byte_string(&[0xff])).unwrap(),
            BigInt::from(-1)
        );
    }

    #[test]
    fn test_type_mismatch_is_reported() {
        let err = String::from_stack_item(&RpcStackItem::integer(5)).unwrap_err();
        assert!(matches!(err, RpcError::InvalidResponse(_)));
        assert!(u8::from_stack_item(&RpcStackItem::integer(300)).is_err());
        assert!(UInt160::from_stack_item(&RpcStackItem::byte_string(&[1, 2, 3])).is_err());
    }

    #[test]
    fn test_nested_arrays() {
        let item = RpcStackItem::array(vec![RpcStackItem::boolean(true), RpcStackItem::any()]);
        let members = item.as_array().unwrap();
        assert_eq!(members.len(), 2);
        assert!(members[1].is_null());
    }
}
