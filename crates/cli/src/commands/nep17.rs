// Copyright (C) 2015-2025 The Neo Project.
//
// nep17.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::{submit, CommandContext, CommandResult};
use anyhow::Context;
use neo_rpc_client::Nep17Api;
use num_bigint::BigInt;
use tracing::info;

/// NEP-17 token commands.
pub struct Nep17Commands<'a> {
    context: &'a CommandContext,
}

impl<'a> Nep17Commands<'a> {
    pub fn new(context: &'a CommandContext) -> Self {
        Self { context }
    }

    /// Sends `amount` (smallest unit) of `token` from the named key to `to`.
    pub async fn transfer(
        &self,
        token: &str,
        from_key: &str,
        to: &str,
        amount: BigInt,
    ) -> CommandResult {
        let token_hash = self.context.parse_token(token)?;
        let to_hash = self.context.parse_account(to)?;
        let from = self.context.signing_account(from_key)?;

        let api = Nep17Api::new(self.context.contracts_with_chain_fees().await?);
        info!(
            token = %token_hash,
            from = %from.script_hash(),
            to = %to_hash,
            %amount,
            "preparing transfer"
        );
        let builder = api
            .transfer(&token_hash, &from, &to_hash, amount, None)
            .context("cannot build transfer")?;
        let txid = submit(builder, &from, self.context.node(), self.context.config()).await?;
        Ok(txid.to_string())
    }
}
