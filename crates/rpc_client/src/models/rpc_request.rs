// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_request.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC 2.0 request envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    pub id: u64,

    #[serde(rename = "jsonrpc")]
    pub json_rpc: String,

    pub method: String,

    pub params: Vec<Value>,
}

impl RpcRequest {
    pub fn new(id: u64, method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            id,
            json_rpc: "2.0".to_string(),
            method: method.into(),
            params,
        }
    }
}

/// JSON-RPC 2.0 response envelope
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RpcResponse<T> {
    #[serde(default)]
    pub id: Value,

    #[serde(rename = "jsonrpc", default)]
    pub json_rpc: String,

    pub result: Option<T>,

    #[serde(default)]
    pub error: Option<RpcResponseError>,
}

/// Error object carried by a failed response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RpcResponseError {
    pub code: i64,

    pub message: String,

    #[serde(default)]
    pub data: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rpc_request_serializes_envelope() {
        let request = RpcRequest::new(7, "getblockcount", vec![]);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"id": 7, "jsonrpc": "2.0", "method": "getblockcount", "params": []})
        );
    }

    #[test]
    fn rpc_response_accepts_result_or_error() {
        let ok: RpcResponse<u32> =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":1,"result":42}"#).unwrap();
        assert_eq!(ok.result, Some(42));
        assert!(ok.error.is_none());

        let failed: RpcResponse<u32> = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-100,"message":"Unknown block"}}"#,
        )
        .unwrap();
        assert!(failed.result.is_none());
        assert_eq!(failed.error.unwrap().code, -100);
    }
}
