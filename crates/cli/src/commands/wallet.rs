// Copyright (C) 2015-2025 The Neo Project.
//
// wallet.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::{CommandContext, CommandResult};
use anyhow::Context;
use neo_wallets::{address_from_public_key, Account};

/// Offline account helpers.
pub struct WalletCommands<'a> {
    context: &'a CommandContext,
}

impl<'a> WalletCommands<'a> {
    pub fn new(context: &'a CommandContext) -> Self {
        Self { context }
    }

    /// Generates a key pair. The WIF is printed once and never stored.
    pub fn new_account(&self) -> CommandResult {
        let account = Account::create().context("key generation failed")?;
        let version = self.context.config().address_version;
        let public_key = account
            .key_pair()
            .map(|key| key.public_key_hex())
            .unwrap_or_default();
        let wif = account.export_wif()?;
        Ok(format!(
            "address:     {}\nscript hash: {}\npublic key:  {}\nwif:         {}",
            account.address(version),
            account.script_hash(),
            public_key,
            wif.as_str()
        ))
    }

    pub fn address(&self, public_key: &str) -> CommandResult {
        let version = self.context.config().address_version;
        Ok(address_from_public_key(public_key, version)?)
    }
}
