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

//! Core error types.

use neo_io::IoError;
use thiserror::Error;

/// Result type for core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Errors raised by the core wire types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid length for {context}: expected {expected}, got {actual}")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid format: {0}")]
    InvalidFormat(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid signer: {0}")]
    InvalidSigner(String),

    #[error("serialization error: {0}")]
    Io(#[from] IoError),
}
