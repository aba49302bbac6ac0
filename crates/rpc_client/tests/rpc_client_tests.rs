// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_client_tests.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! JSON-RPC client against a local HTTP mock.

use mockito::{Matcher, Server};
use neo_config::ClientConfig;
use neo_core::{Signer, Transaction, UInt160, UInt256};
use neo_io::SerializableExt;
use neo_rpc_client::{NodeClient, RpcClient, RpcError};
use neo_vm::VMState;
use num_bigint::BigInt;
use serde_json::{json, Value};
use std::time::Duration;
use url::Url;

fn localhost_binding_permitted() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

fn rpc_response(result: Value) -> String {
    json!({ "jsonrpc": "2.0", "id": 1, "result": result }).to_string()
}

fn method(name: &str) -> Matcher {
    Matcher::Regex(format!(r#""method"\s*:\s*"{name}""#))
}

fn client(server: &Server) -> RpcClient {
    RpcClient::builder(Url::parse(&server.url()).unwrap())
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

#[tokio::test]
async fn get_block_count() {
    if !localhost_binding_permitted() {
        return;
    }
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_body(method("getblockcount"))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(rpc_response(json!(1234)))
        .create_async()
        .await;

    let client = client(&server);
    assert_eq!(client.get_block_count().await.unwrap(), 1234);
    mock.assert_async().await;
}

#[tokio::test]
async fn invoke_script_sends_script_and_signers() {
    if !localhost_binding_permitted() {
        return;
    }
    let account = UInt160::from_array([0x11; 20]);
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::AllOf(vec![
            method("invokescript"),
            Matcher::Regex(r#""EUA=""#.to_string()),
            Matcher::Regex(format!(r#""account"\s*:\s*"{account}""#)),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(rpc_response(json!({
            "script": "EUA=",
            "state": "HALT",
            "gasconsumed": "984060",
            "stack": [{ "type": "Integer", "value": "1" }]
        })))
        .create_async()
        .await;

    let client = client(&server);
    let result = client
        .invoke_script(&[0x11, 0x40], &[Signer::called_by_entry(account)])
        .await
        .unwrap();
    assert_eq!(result.state, VMState::HALT);
    assert_eq!(result.gas_consumed, 984_060);
    assert_eq!(result.stack[0].as_integer().unwrap(), BigInt::from(1));
    mock.assert_async().await;
}

#[tokio::test]
async fn simulate_reports_fault() {
    if !localhost_binding_permitted() {
        return;
    }
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .match_body(method("invokescript"))
        .with_status(200)
        .with_body(rpc_response(json!({
            "script": "EUA=",
            "state": "FAULT",
            "gasconsumed": "1000",
            "exception": "ASSERT is executed with false result.",
            "stack": []
        })))
        .create_async()
        .await;

    let client = client(&server);
    let result = client.simulate(&[0x11, 0x40], &[]).await.unwrap();
    assert!(result.is_fault());
    assert_eq!(result.fault_message(), "ASSERT is executed with false result.");
}

#[tokio::test]
async fn server_error_is_reported() {
    if !localhost_binding_permitted() {
        return;
    }
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_body(
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "error": { "code": -32601, "message": "Method not found" }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client(&server);
    let err = client.get_block_count().await.unwrap_err();
    assert_eq!(
        err,
        RpcError::Server {
            code: -32601,
            message: "Method not found".to_string()
        }
    );
    assert!(!err.is_transient());
}

#[tokio::test]
async fn send_transaction_returns_hash() {
    if !localhost_binding_permitted() {
        return;
    }
    let mut tx = Transaction::new();
    tx.set_script(vec![0x11, 0x40]);
    let hash = tx.hash();
    let raw = base64_encode(&tx.to_array());

    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::AllOf(vec![
            method("sendrawtransaction"),
            Matcher::Regex(regex_literal(&raw)),
        ]))
        .with_status(200)
        .with_body(rpc_response(json!({ "hash": hash.to_string() })))
        .create_async()
        .await;

    let client = client(&server);
    assert_eq!(client.send_transaction(&tx).await.unwrap(), hash);
    mock.assert_async().await;
}

#[tokio::test]
async fn basic_auth_header_is_sent() {
    if !localhost_binding_permitted() {
        return;
    }
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("authorization", "Basic dXNlcjpwYXNz")
        .with_status(200)
        .with_body(rpc_response(json!(7)))
        .create_async()
        .await;

    let client = RpcClient::builder(Url::parse(&server.url()).unwrap())
        .basic_auth("user", "pass")
        .build()
        .unwrap();
    assert_eq!(client.get_block_count().await.unwrap(), 7);
    mock.assert_async().await;
}

#[tokio::test]
async fn url_credentials_from_config_become_basic_auth() {
    if !localhost_binding_permitted() {
        return;
    }
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("authorization", "Basic bmVvOnNlY3JldA==")
        .with_status(200)
        .with_body(rpc_response(json!(11)))
        .create_async()
        .await;

    let config = ClientConfig {
        rpc_url: format!("http://neo:secret@{}", server.host_with_port()),
        ..ClientConfig::default()
    };
    let client = RpcClient::from_config(&config).unwrap();
    assert_eq!(client.url().username(), "");
    assert_eq!(client.url().password(), None);
    assert_eq!(client.get_block_count().await.unwrap(), 11);
    mock.assert_async().await;
}

#[tokio::test]
async fn config_without_credentials_sends_no_auth() {
    if !localhost_binding_permitted() {
        return;
    }
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(rpc_response(json!(12)))
        .create_async()
        .await;

    let config = ClientConfig {
        rpc_url: server.url(),
        ..ClientConfig::default()
    };
    let client = RpcClient::from_config(&config).unwrap();
    assert_eq!(client.get_block_count().await.unwrap(), 12);
    mock.assert_async().await;
}

#[tokio::test]
async fn http_500_is_transient() {
    if !localhost_binding_permitted() {
        return;
    }
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .with_status(503)
        .with_body("Service Unavailable")
        .create_async()
        .await;

    let err = client(&server).get_block_count().await.unwrap_err();
    assert!(matches!(err, RpcError::Transport(_)));
    assert!(err.is_transient());
}

#[tokio::test]
async fn malformed_result_is_invalid_response() {
    if !localhost_binding_permitted() {
        return;
    }
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_body(rpc_response(json!("not a number")))
        .create_async()
        .await;

    let err = client(&server).get_block_count().await.unwrap_err();
    assert!(matches!(err, RpcError::InvalidResponse(_)));
}

#[tokio::test]
async fn unreachable_node_is_transient() {
    if !localhost_binding_permitted() {
        return;
    }
    // Bind then drop to get a port nothing listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = RpcClient::builder(Url::parse(&format!("http://127.0.0.1:{port}")).unwrap())
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client.get_block_count().await.unwrap_err();
    assert!(err.is_transient(), "unexpected error: {err:?}");
}

#[test]
fn submitted_hash_parses() {
    let hash: UInt256 =
        serde_json::from_value(json!("0x0000000000000000000000000000000000000000000000000000000000000001"))
            .unwrap();
    assert_ne!(hash, UInt256::zero());
}

fn base64_encode(bytes: &[u8]) -> String {
    use base64::{engine::general_purpose, Engine as _};
    general_purpose::STANDARD.encode(bytes)
}

fn regex_literal(text: &str) -> String {
    text.replace('+', r"\+")
}
