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

//! Transaction module for Neo N3 transactions.
//!
//! - `core` - the `Transaction` struct, accessors and hashing
//! - `serialization` - canonical wire encoding

pub mod core;
pub mod serialization;

pub use core::{Transaction, HEADER_SIZE, MAX_SIGNERS, TRANSACTION_VERSION};
