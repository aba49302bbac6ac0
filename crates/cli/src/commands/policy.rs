// Copyright (C) 2015-2025 The Neo Project.
//
// policy.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::{submit, CommandContext, CommandResult};
use anyhow::Context;
use neo_core::UInt160;
use neo_rpc_client::{AccountSigner, PolicyApi, TransactionBuilder};
use neo_wallets::Account;
use tracing::info;

/// Policy contract administration (`block`, `restrict`, ...).
///
/// Writes are signed by the named committee key with the CalledByEntry
/// scope and relayed immediately; reads only simulate.
pub struct PolicyCommands<'a> {
    context: &'a CommandContext,
}

#[derive(Clone, Copy)]
enum PolicyWrite {
    Block,
    Unblock,
    Restrict,
    Unrestrict,
}

impl<'a> PolicyCommands<'a> {
    pub fn new(context: &'a CommandContext) -> Self {
        Self { context }
    }

    pub async fn is_blocked(&self, account: &str) -> CommandResult {
        let target = self.context.parse_account(account)?;
        let blocked = PolicyApi::new(self.context.contracts())
            .is_blocked(&target)
            .await
            .context("isBlocked failed")?;
        Ok(blocked.to_string())
    }

    pub async fn is_restricted(&self, account: &str) -> CommandResult {
        let target = self.context.parse_account(account)?;
        let restricted = PolicyApi::new(self.context.contracts())
            .is_restricted(&target)
            .await
            .context("isRestricted failed")?;
        Ok(restricted.to_string())
    }

    pub async fn block(&self, account: &str, key: &str) -> CommandResult {
        self.write(PolicyWrite::Block, account, key).await
    }

    pub async fn unblock(&self, account: &str, key: &str) -> CommandResult {
        self.write(PolicyWrite::Unblock, account, key).await
    }

    pub async fn restrict(&self, account: &str, key: &str) -> CommandResult {
        self.write(PolicyWrite::Restrict, account, key).await
    }

    pub async fn unrestrict(&self, account: &str, key: &str) -> CommandResult {
        self.write(PolicyWrite::Unrestrict, account, key).await
    }

    async fn write(&self, operation: PolicyWrite, account: &str, key: &str) -> CommandResult {
        let target = self.context.parse_account(account)?;
        let committee = self.context.signing_account(key)?;
        let api = PolicyApi::new(self.context.contracts_with_chain_fees().await?);
        let builder = prepare(&api, operation, &target, &committee)?;
        info!(account = %target, signer = %committee.script_hash(), "submitting policy change");
        let txid = submit(builder, &committee, self.context.node(), self.context.config()).await?;
        Ok(txid.to_string())
    }
}

fn prepare(
    api: &PolicyApi,
    operation: PolicyWrite,
    target: &UInt160,
    committee: &Account,
) -> anyhow::Result<TransactionBuilder> {
    let signers = vec![AccountSigner::called_by_entry(committee)?];
    let builder = match operation {
        PolicyWrite::Block => api.block_account(target, signers),
        PolicyWrite::Unblock => api.unblock_account(target, signers),
        PolicyWrite::Restrict => api.restrict_account(target, signers),
        PolicyWrite::Unrestrict => api.unrestrict_account(target, signers),
    };
    Ok(builder?)
}
