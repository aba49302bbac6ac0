// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_invoke_result.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::RpcStackItem;
use neo_vm::VMState;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Result of `invokescript`: a simulated execution.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RpcInvokeResult {
    #[serde(default)]
    pub script: String,

    #[serde(deserialize_with = "deserialize_state")]
    pub state: VMState,

    /// GAS burnt by the execution, in datoshi. This is the system fee.
    #[serde(rename = "gasconsumed", deserialize_with = "deserialize_gas")]
    pub gas_consumed: i64,

    #[serde(default)]
    pub exception: Option<String>,

    #[serde(default)]
    pub stack: Vec<RpcStackItem>,
}

impl RpcInvokeResult {
    pub fn halt(gas_consumed: i64, stack: Vec<RpcStackItem>) -> Self {
        Self {
            script: String::new(),
            state: VMState::HALT,
            gas_consumed,
            exception: None,
            stack,
        }
    }

    pub fn fault(gas_consumed: i64, exception: impl Into<String>) -> Self {
        Self {
            script: String::new(),
            state: VMState::FAULT,
            gas_consumed,
            exception: Some(exception.into()),
            stack: Vec::new(),
        }
    }

    pub fn is_fault(&self) -> bool {
        self.state.is_fault()
    }

    /// Fault message, or a placeholder when the node sent none.
    pub fn fault_message(&self) -> String {
        self.exception
            .clone()
            .unwrap_or_else(|| format!("execution ended in {}", self.state))
    }
}

fn deserialize_state<'de, D: Deserializer<'de>>(deserializer: D) -> Result<VMState, D::Error> {
    let value = String::deserialize(deserializer)?;
    value.parse().map_err(serde::de::Error::custom)
}

/// Nodes send `gasconsumed` as a decimal string; some send a number.
fn deserialize_gas<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(text) => text.parse().map_err(serde::de::Error::custom),
        Value::Number(number) => number
            .as_i64()
            .ok_or_else(|| serde::de::Error::custom(format!("gas value {number} out of range"))),
        other => Err(serde::de::Error::custom(format!(
            "expected gas amount, got {other}"
        ))),
    }
}
