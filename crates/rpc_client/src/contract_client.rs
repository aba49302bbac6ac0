// Copyright (C) 2015-2025 The Neo Project.
//
// contract_client.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::models::FromStackItem;
use crate::transaction_builder::{AccountSigner, FeePolicy, TransactionBuilder};
use crate::{Error, NodeClient, Result};
use neo_core::UInt160;
use neo_smart_contract::{build_invocation_script, ContractParameter};
use std::sync::Arc;
use tracing::debug;

/// Read-only calls and unsigned invocations against deployed contracts.
#[derive(Clone)]
pub struct ContractClient {
    node: Arc<dyn NodeClient>,
    policy: FeePolicy,
}

impl ContractClient {
    pub fn new(node: Arc<dyn NodeClient>, policy: FeePolicy) -> Self {
        Self { node, policy }
    }

    pub fn node(&self) -> &dyn NodeClient {
        self.node.as_ref()
    }

    pub fn policy(&self) -> &FeePolicy {
        &self.policy
    }

    /// Simulates `method` and decodes the top of the result stack as `T`.
    ///
    /// Never produces a transaction. A FAULT becomes
    /// [`Error::ContractFault`] carrying the VM message.
    pub async fn call<T: FromStackItem>(
        &self,
        contract: &UInt160,
        method: &str,
        params: &[ContractParameter],
    ) -> Result<T> {
        let script = build_invocation_script(contract, method, params)?;
        debug!(contract = %contract, method, "simulating contract call");
        let result = self.node.simulate(&script, &[]).await?;
        if result.is_fault() {
            return Err(Error::ContractFault {
                message: result.fault_message(),
            });
        }
        let item = result.stack.first().ok_or_else(|| {
            Error::UnexpectedResult(format!("{method} returned an empty stack"))
        })?;
        T::from_stack_item(item).map_err(|e| Error::UnexpectedResult(format!("{method}: {e}")))
    }

    /// Builder holding the call script and `signers`, ready for
    /// [`TransactionBuilder::compute_fees`]. Nothing is sent.
    pub fn invoke(
        &self,
        contract: &UInt160,
        method: &str,
        params: &[ContractParameter],
        signers: Vec<AccountSigner>,
    ) -> Result<TransactionBuilder> {
        let script = build_invocation_script(contract, method, params)?;
        let mut builder = TransactionBuilder::new(self.policy);
        builder.set_script(script)?;
        for signer in signers {
            builder.add_signer(signer)?;
        }
        debug!(contract = %contract, method, state = %builder.state(), "invocation prepared");
        Ok(builder)
    }
}
