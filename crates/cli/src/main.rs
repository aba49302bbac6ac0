// Copyright (C) 2015-2025 The Neo Project.
//
// main.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use anyhow::Result;
use clap::Parser;
use neo_cli::{load_config, CliArgs, CommandContext};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = CliArgs::parse();
    let config = load_config(&args)?;
    debug!(network = %config.network, network_magic = config.magic(), "configuration ready");

    let context = CommandContext::connect(config)?;
    let output = context.execute(args.command).await?;
    println!("{output}");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
