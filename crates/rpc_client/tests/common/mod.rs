// Copyright (C) 2015-2025 The Neo Project.
//
// mod.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! In-memory node used by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use neo_core::{Signer, Transaction, UInt256};
use neo_rpc_client::{NodeClient, RpcError, RpcInvokeResult, RpcStackItem};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Scripted node: queued answers are served first, then the defaults.
pub struct MockNode {
    simulations: Mutex<VecDeque<Result<RpcInvokeResult, RpcError>>>,
    block_counts: Mutex<VecDeque<Result<u32, RpcError>>>,
    default_simulation: RpcInvokeResult,
    block_count: u32,
    send_result: Mutex<Option<Result<UInt256, RpcError>>>,
    delay: Option<Duration>,
    pub simulated_scripts: Mutex<Vec<Vec<u8>>>,
    pub simulated_signers: Mutex<Vec<Vec<Signer>>>,
    pub block_count_calls: Mutex<usize>,
    pub sent: Mutex<Vec<Transaction>>,
}

impl MockNode {
    pub fn new(gas_consumed: i64, block_count: u32) -> Self {
        Self::returning(gas_consumed, block_count, Vec::new())
    }

    pub fn returning(gas_consumed: i64, block_count: u32, stack: Vec<RpcStackItem>) -> Self {
        Self {
            simulations: Mutex::new(VecDeque::new()),
            block_counts: Mutex::new(VecDeque::new()),
            default_simulation: RpcInvokeResult::halt(gas_consumed, stack),
            block_count,
            send_result: Mutex::new(None),
            delay: None,
            simulated_scripts: Mutex::new(Vec::new()),
            simulated_signers: Mutex::new(Vec::new()),
            block_count_calls: Mutex::new(0),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn faulting(message: &str) -> Self {
        let mut node = Self::new(0, 100);
        node.default_simulation = RpcInvokeResult::fault(1_000, message);
        node
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn push_simulation(&self, result: Result<RpcInvokeResult, RpcError>) {
        self.simulations.lock().unwrap().push_back(result);
    }

    pub fn push_block_count(&self, result: Result<u32, RpcError>) {
        self.block_counts.lock().unwrap().push_back(result);
    }

    pub fn fail_send(&self, error: RpcError) {
        *self.send_result.lock().unwrap() = Some(Err(error));
    }

    pub fn answer_send(&self, hash: UInt256) {
        *self.send_result.lock().unwrap() = Some(Ok(hash));
    }

    pub fn simulation_count(&self) -> usize {
        self.simulated_scripts.lock().unwrap().len()
    }

    pub fn last_script(&self) -> Vec<u8> {
        self.simulated_scripts
            .lock()
            .unwrap()
            .last()
            .cloned()
            .unwrap_or_default()
    }
}

pub fn transport_error() -> RpcError {
    RpcError::Transport("connection reset by peer".to_string())
}

#[async_trait]
impl NodeClient for MockNode {
    async fn simulate(
        &self,
        script: &[u8],
        signers: &[Signer],
    ) -> Result<RpcInvokeResult, RpcError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.simulated_scripts.lock().unwrap().push(script.to_vec());
        self.simulated_signers.lock().unwrap().push(signers.to_vec());
        let queued = self.simulations.lock().unwrap().pop_front();
        queued.unwrap_or_else(|| Ok(self.default_simulation.clone()))
    }

    async fn get_block_count(&self) -> Result<u32, RpcError> {
        *self.block_count_calls.lock().unwrap() += 1;
        let queued = self.block_counts.lock().unwrap().pop_front();
        queued.unwrap_or(Ok(self.block_count))
    }

    async fn send_transaction(&self, transaction: &Transaction) -> Result<UInt256, RpcError> {
        self.sent.lock().unwrap().push(transaction.clone());
        let configured = self.send_result.lock().unwrap().clone();
        configured.unwrap_or_else(|| Ok(transaction.hash()))
    }
}
