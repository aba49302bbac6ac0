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

//! # Neo Core
//!
//! Wire-level types shared by every Neo N3 client component: script
//! hashes, witness scopes, signers, witnesses and the transaction itself,
//! with their canonical binary encoding.

pub mod error;
pub mod signer;
pub mod transaction;
pub mod uint160;
pub mod uint256;
pub mod witness;
pub mod witness_scope;

pub use error::{CoreError, CoreResult};
pub use signer::Signer;
pub use transaction::{Transaction, HEADER_SIZE, MAX_SIGNERS};
pub use uint160::UInt160;
pub use uint256::UInt256;
pub use witness::Witness;
pub use witness_scope::WitnessScope;
