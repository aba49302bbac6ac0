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

//! # Neo Smart Contract calls
//!
//! Typed contract parameters and the dynamic-call scripts that carry them:
//! [`build_invocation_script`] turns `(contract, method, params)` into a
//! script, [`decode_invocation_script`] takes one apart again.
//!
//! ```rust
//! use neo_smart_contract::{build_invocation_script, decode_invocation_script, NativeContract};
//!
//! let script = build_invocation_script(&NativeContract::GAS, "decimals", &[]).unwrap();
//! let call = decode_invocation_script(&script).unwrap();
//! assert_eq!(call.method, "decimals");
//! assert!(call.parameters.is_empty());
//! ```

pub mod contract_parameter;
pub mod contract_parameter_type;
pub mod error;
pub mod invocation;
pub mod native;

pub use contract_parameter::ContractParameter;
pub use contract_parameter_type::ContractParameterType;
pub use error::{ContractError, ContractResult};
pub use invocation::{
    build_invocation_script, build_invocation_script_with_flags, decode_invocation_script,
    DecodedInvocation,
};
pub use native::NativeContract;
