// Copyright (C) 2015-2025 The Neo Project.
//
// node_client.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! The three node calls a transaction build depends on.

use crate::models::RpcInvokeResult;
use crate::RpcError;
use async_trait::async_trait;
use neo_core::{Signer, Transaction, UInt256};

/// Access to a Neo N3 node.
///
/// [`RpcClient`](crate::RpcClient) implements this over JSON-RPC. Tests and
/// embedders may supply their own implementation.
#[async_trait]
pub trait NodeClient: Send + Sync {
    /// Runs `script` without persisting anything, as if signed by `signers`.
    async fn simulate(&self, script: &[u8], signers: &[Signer])
        -> Result<RpcInvokeResult, RpcError>;

    /// Number of blocks in the node's main chain.
    async fn get_block_count(&self) -> Result<u32, RpcError>;

    /// Relays a fully witnessed transaction and returns the hash the node
    /// accepted it under.
    async fn send_transaction(&self, transaction: &Transaction) -> Result<UInt256, RpcError>;
}
