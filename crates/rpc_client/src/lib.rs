// Copyright (C) 2015-2025 The Neo Project.
//
// lib.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Neo RPC Client Library
//!
//! Everything that needs a node: the [`NodeClient`] seam and its JSON-RPC
//! implementation [`RpcClient`], the [`TransactionBuilder`] state machine,
//! and the contract-level APIs built on top of them.
//!
//! A transfer goes script -> signers -> fees -> witnesses -> submission:
//!
//! ```no_run
//! # async fn run() -> neo_rpc_client::Result<()> {
//! use neo_rpc_client::{ContractClient, FeePolicy, Nep17Api, NodeClient, RpcClient};
//! use neo_smart_contract::NativeContract;
//! use neo_wallets::Account;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let node = Arc::new(RpcClient::builder("http://127.0.0.1:10332".parse().unwrap()).build()?);
//! let contracts = ContractClient::new(node.clone(), FeePolicy::default());
//! let sender = Account::create()?;
//! let receiver = Account::create()?;
//!
//! let mut builder = Nep17Api::new(contracts).transfer(
//!     &NativeContract::GAS,
//!     &sender,
//!     &receiver.script_hash(),
//!     8.into(),
//!     None,
//! )?;
//! builder.compute_fees(node.as_ref(), Duration::from_secs(30)).await?;
//! builder.sign(&sender)?;
//! let txid = builder.send(node.as_ref()).await?;
//! # let _ = txid;
//! # Ok(())
//! # }
//! ```

pub mod models;

mod contract_client;
mod error;
mod nep17_api;
mod node_client;
mod policy_api;
mod rpc_client;
mod transaction_builder;

pub use contract_client::ContractClient;
pub use error::{Error, Result, RpcError};
pub use models::{FromStackItem, RpcInvokeResult, RpcStackItem};
pub use nep17_api::Nep17Api;
pub use node_client::NodeClient;
pub use policy_api::PolicyApi;
pub use rpc_client::{RpcClient, RpcClientBuilder};
pub use transaction_builder::{
    AccountSigner, BuilderState, FeePolicy, SignedTransaction, TransactionBuilder,
};
