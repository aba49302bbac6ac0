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

//! Command handlers for the `neo-txkit` binary.

pub mod nep17;
pub mod policy;
pub mod wallet;

use crate::args::Command;
use anyhow::{bail, Context};
use neo_config::ClientConfig;
use neo_core::{UInt160, UInt256};
use neo_rpc_client::{
    ContractClient, FeePolicy, NodeClient, PolicyApi, RpcClient, TransactionBuilder,
};
use neo_smart_contract::NativeContract;
use neo_wallets::{script_hash_from_address, Account};
use std::sync::Arc;
use tracing::debug;

pub use nep17::Nep17Commands;
pub use policy::PolicyCommands;
pub use wallet::WalletCommands;

/// Output printed by a command on success.
pub type CommandResult = anyhow::Result<String>;

/// Configuration and node connection shared by the command handlers.
pub struct CommandContext {
    config: ClientConfig,
    node: Arc<dyn NodeClient>,
}

impl CommandContext {
    pub fn new(config: ClientConfig, node: Arc<dyn NodeClient>) -> Self {
        Self { config, node }
    }

    /// Context talking JSON-RPC to the endpoint named in `config`.
    pub fn connect(config: ClientConfig) -> anyhow::Result<Self> {
        let client = RpcClient::from_config(&config).context("cannot create RPC client")?;
        debug!(rpc_url = %client.url(), "connected");
        Ok(Self::new(config, Arc::new(client)))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn node(&self) -> &dyn NodeClient {
        self.node.as_ref()
    }

    /// Contract client using the fee values from the configuration file.
    pub fn contracts(&self) -> ContractClient {
        ContractClient::new(self.node.clone(), FeePolicy::from_config(&self.config))
    }

    /// Contract client using the fee values currently stored on chain.
    pub async fn contracts_with_chain_fees(&self) -> anyhow::Result<ContractClient> {
        let configured = FeePolicy::from_config(&self.config);
        let policy = PolicyApi::new(self.contracts())
            .fee_policy(configured)
            .await
            .context("cannot read fee policy from chain")?;
        debug!(
            fee_per_byte = policy.fee_per_byte,
            exec_fee_factor = policy.exec_fee_factor,
            "using on-chain fee policy"
        );
        Ok(ContractClient::new(self.node.clone(), policy))
    }

    /// Parses a `0x` script hash, a bare 40-digit hex hash or an address.
    pub fn parse_account(&self, value: &str) -> anyhow::Result<UInt160> {
        let value = value.trim();
        let is_hex = value.len() == 40 && value.chars().all(|c| c.is_ascii_hexdigit());
        if value.starts_with("0x") || is_hex {
            return UInt160::parse(value).with_context(|| format!("invalid script hash '{value}'"));
        }
        script_hash_from_address(value, self.config.address_version)
            .with_context(|| format!("invalid address '{value}'"))
    }

    /// Like [`parse_account`](Self::parse_account), also accepting the
    /// native token names `gas` and `neo`.
    pub fn parse_token(&self, value: &str) -> anyhow::Result<UInt160> {
        match value.to_ascii_lowercase().as_str() {
            "gas" => Ok(NativeContract::GAS),
            "neo" => Ok(NativeContract::NEO),
            _ => self.parse_account(value),
        }
    }

    /// Loads the account behind the named key reference.
    pub fn signing_account(&self, key_name: &str) -> anyhow::Result<Account> {
        let key = self.config.key(key_name)?;
        let wif = key
            .resolve()
            .with_context(|| format!("cannot read key '{key_name}'"))?;
        let account = Account::from_wif(&wif).with_context(|| format!("key '{key_name}'"))?;
        debug!(key = key_name, account = %account.script_hash(), "signing account loaded");
        Ok(account)
    }

    /// Runs one parsed command.
    pub async fn execute(&self, command: Command) -> CommandResult {
        match command {
            Command::NewAccount => WalletCommands::new(self).new_account(),
            Command::Address { public_key } => WalletCommands::new(self).address(&public_key),
            Command::Transfer {
                token,
                from_key,
                to,
                amount,
            } => {
                Nep17Commands::new(self)
                    .transfer(&token, &from_key, &to, amount)
                    .await
            }
            Command::Block(args) => PolicyCommands::new(self).block(&args.account, &args.key).await,
            Command::Unblock(args) => {
                PolicyCommands::new(self)
                    .unblock(&args.account, &args.key)
                    .await
            }
            Command::IsBlocked(args) => PolicyCommands::new(self).is_blocked(&args.account).await,
            Command::Restrict(args) => {
                PolicyCommands::new(self)
                    .restrict(&args.account, &args.key)
                    .await
            }
            Command::Unrestrict(args) => {
                PolicyCommands::new(self)
                    .unrestrict(&args.account, &args.key)
                    .await
            }
            Command::IsRestricted(args) => {
                PolicyCommands::new(self).is_restricted(&args.account).await
            }
        }
    }
}

/// Computes fees, signs with `account` and relays the transaction.
///
/// Returns the txid accepted by the node. Every failure is an error, the
/// transaction is never reported as sent when the node refused it.
pub async fn submit(
    mut builder: TransactionBuilder,
    account: &Account,
    node: &dyn NodeClient,
    config: &ClientConfig,
) -> anyhow::Result<UInt256> {
    builder
        .compute_fees(node, config.rpc_timeout())
        .await
        .context("fee estimation failed")?;
    builder.sign(account).context("signing failed")?;
    if builder.to_signed().is_err() {
        bail!(
            "transaction needs witnesses from {} signers, only {} available",
            builder.signers().len(),
            builder.witness_count()
        );
    }
    let txid = builder.send(node).await.context("submission failed")?;
    Ok(txid)
}
