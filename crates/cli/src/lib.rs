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

//! neo-txkit command-line client
//!
//! Argument parsing and command handlers for the `neo-txkit` binary. The
//! handlers are plain async functions over a [`CommandContext`] so they can be
//! driven against any [`neo_rpc_client::NodeClient`].

pub mod args;
pub mod commands;

pub use args::{CliArgs, Command};
pub use commands::{submit, CommandContext, CommandResult};

use anyhow::Context;
use neo_config::ClientConfig;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Loads the configuration named by `args` (or the defaults) and applies
/// command-line overrides.
pub fn load_config(args: &CliArgs) -> anyhow::Result<ClientConfig> {
    let mut config = match &args.config {
        Some(path) => ClientConfig::load(path)
            .with_context(|| format!("cannot load configuration {}", path.display()))?,
        None => ClientConfig::default(),
    };
    if let Some(url) = &args.rpc_url {
        config.rpc_url = url.clone();
        config.validate().context("invalid --rpc-url")?;
    }
    Ok(config)
}
