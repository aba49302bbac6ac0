// Copyright (C) 2015-2025 The Neo Project.
//
// error.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Error types for node access and transaction building.

use crate::transaction_builder::BuilderState;
use neo_core::{CoreError, UInt160};
use neo_smart_contract::ContractError;
use neo_wallets::WalletError;
use std::time::Duration;
use thiserror::Error;

/// Failures talking to a node.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RpcError {
    /// The request never produced a usable HTTP response.
    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// JSON-RPC error object returned by the node.
    #[error("RPC error {code}: {message}")]
    Server { code: i64, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl RpcError {
    /// Whether repeating the request may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, RpcError::Transport(_) | RpcError::Timeout(_))
    }
}

/// Result type for builder and contract operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("signing failed: {0}")]
    Signing(String),

    #[error("invalid script: {0}")]
    InvalidScript(String),

    #[error("{0} is already a signer")]
    DuplicateSigner(UInt160),

    #[error("a transaction holds at most {0} signers")]
    TooManySigners(usize),

    #[error("fee estimation failed: {0}")]
    FeeEstimation(String),

    #[error("{0} is not a signer of this transaction")]
    UnknownSigner(UInt160),

    #[error("contract execution faulted: {message}")]
    ContractFault { message: String },

    #[error("submission failed: {0}")]
    Submission(String),

    #[error("cannot {operation} in state {state}")]
    InvalidState {
        operation: &'static str,
        state: BuilderState,
    },

    #[error("transaction is not signed (state {0})")]
    NotSigned(BuilderState),

    #[error("unexpected result: {0}")]
    UnexpectedResult(String),

    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Rpc(#[from] RpcError),
}

impl From<WalletError> for Error {
    fn from(err: WalletError) -> Self {
        match err {
            WalletError::KeyGeneration(msg) => Error::KeyGeneration(msg),
            WalletError::Signing(msg) => Error::Signing(msg),
            WalletError::InvalidKey(msg)
            | WalletError::InvalidWif(msg)
            | WalletError::InvalidAddress(msg) => Error::InvalidKey(msg),
        }
    }
}
