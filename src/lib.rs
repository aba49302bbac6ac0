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

//! # neo-txkit: Neo N3 transaction client toolkit
//!
//! Builds, fee-quotes, signs and relays Neo N3 transactions against a node's
//! JSON-RPC interface, with typed wrappers for the native Policy contract and
//! NEP-17 tokens.
//!
//! ## Quick Start
//!
//! ```rust
//! use neo_txkit::prelude::*;
//!
//! let account = Account::from_private_key(&[0x01; 32]).unwrap();
//! assert_eq!(account.address(DEFAULT_ADDRESS_VERSION), "NUz6PKTAM7NbPJzkKJFNay3VckQtcDkgWo");
//!
//! let script = build_invocation_script(
//!     &NativeContract::POLICY,
//!     "isBlocked",
//!     &[ContractParameter::Hash160(account.script_hash())],
//! )
//! .unwrap();
//! assert_eq!(decode_invocation_script(&script).unwrap().method, "isBlocked");
//! ```
//!
//! ## Architecture
//!
//! - [`config`] - protocol constants and the TOML client configuration
//! - [`crypto`] - hashing, Base58Check and secp256r1 signatures
//! - [`io`] - binary serialization
//! - [`core`] - hashes, signers, witnesses and transactions
//! - [`vm`] - script building and reading
//! - [`smart_contract`] - contract parameters and call scripts
//! - [`wallets`] - key pairs and accounts
//! - [`rpc_client`] - node access, the transaction builder and contract APIs

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub use neo_config as config;
pub use neo_core as core;
pub use neo_cryptography as crypto;
pub use neo_io as io;
pub use neo_rpc_client as rpc_client;
pub use neo_smart_contract as smart_contract;
pub use neo_vm as vm;
pub use neo_wallets as wallets;

/// Common imports for client code
pub mod prelude {
    pub use crate::config::{ClientConfig, NetworkType, DEFAULT_ADDRESS_VERSION};
    pub use crate::core::{Signer, Transaction, UInt160, UInt256, Witness, WitnessScope};
    pub use crate::rpc_client::{
        AccountSigner, BuilderState, ContractClient, FeePolicy, Nep17Api, NodeClient,
        PolicyApi, RpcClient, SignedTransaction, TransactionBuilder,
    };
    pub use crate::smart_contract::{
        build_invocation_script, decode_invocation_script, ContractParameter,
        ContractParameterType, NativeContract,
    };
    pub use crate::wallets::{Account, KeyPair};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
