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

//! Neo.IO
//!
//! Little-endian binary encoding with Neo's variable-length integers, the
//! `Serializable` trait implemented by every wire type, and helpers to size
//! and round-trip objects.

mod binary_writer;
mod memory_reader;
pub mod serializable;

pub use binary_writer::{get_var_bytes_size, get_var_size, BinaryWriter};
pub use memory_reader::MemoryReader;
pub use serializable::{Serializable, SerializableExt};

use thiserror::Error;

/// Result type for IO operations
pub type IoResult<T> = std::result::Result<T, IoError>;

/// Errors raised while encoding or decoding
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IoError {
    #[error("unexpected end of data: needed {needed} bytes, {remaining} remaining")]
    EndOfStream { needed: usize, remaining: usize },

    #[error("value {value} exceeds maximum {max}")]
    Overflow { value: u64, max: u64 },

    #[error("invalid {context}: {value}")]
    InvalidData { context: String, value: String },
}

impl IoError {
    pub fn invalid_data(context: impl Into<String>, value: impl ToString) -> Self {
        IoError::InvalidData {
            context: context.into(),
            value: value.to_string(),
        }
    }
}
