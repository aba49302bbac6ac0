// Copyright (C) 2015-2025 The Neo Project.
//
// args.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use clap::{Parser, Subcommand};
use num_bigint::BigInt;
use std::path::PathBuf;

/// Command-line arguments for neo-txkit
#[derive(Parser, Debug, Clone)]
#[command(
    name = "neo-txkit",
    version = env!("CARGO_PKG_VERSION"),
    about = "Neo N3 client: accounts, NEP-17 transfers and Policy contract administration"
)]
pub struct CliArgs {
    /// Client configuration file (TOML)
    #[arg(short = 'c', long = "config", value_name = "FILE", env = "NEO_TXKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Overrides the configured node endpoint
    #[arg(long = "rpc-url", value_name = "URL", env = "NEO_RPC_URL")]
    pub rpc_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generates a fresh key pair and prints its address and WIF
    NewAccount,

    /// Prints the address of a compressed public key
    Address {
        /// 33-byte compressed public key, hex encoded
        public_key: String,
    },

    /// Transfers NEP-17 tokens
    Transfer {
        /// Token contract: `gas`, `neo`, a script hash or an address
        #[arg(long, default_value = "gas")]
        token: String,

        /// Name of the sending key under `[keys]`
        #[arg(long = "from-key", value_name = "NAME")]
        from_key: String,

        /// Recipient script hash or address
        #[arg(long)]
        to: String,

        /// Amount in the token's smallest unit
        #[arg(long)]
        amount: BigInt,
    },

    /// Blocks an account through the Policy contract
    Block(PolicyWrite),

    /// Lifts an account block
    Unblock(PolicyWrite),

    /// Reports whether an account is blocked
    IsBlocked(PolicyRead),

    /// Restricts an account through the Policy contract
    Restrict(PolicyWrite),

    /// Lifts an account restriction
    Unrestrict(PolicyWrite),

    /// Reports whether an account is restricted
    IsRestricted(PolicyRead),
}

#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct PolicyRead {
    /// Target script hash or address
    pub account: String,
}

#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct PolicyWrite {
    /// Target script hash or address
    pub account: String,

    /// Name of the committee key under `[keys]`
    #[arg(long = "key", value_name = "NAME", default_value = "committee")]
    pub key: String,
}
