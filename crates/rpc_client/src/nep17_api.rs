// Copyright (C) 2015-2025 The Neo Project.
//
// nep17_api.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::transaction_builder::{AccountSigner, TransactionBuilder};
use crate::{ContractClient, Result};
use neo_core::UInt160;
use neo_smart_contract::native::nep17;
use neo_smart_contract::{ContractError, ContractParameter};
use neo_wallets::Account;
use num_bigint::{BigInt, Sign};

/// Calls to NEP-17 fungible token contracts.
pub struct Nep17Api {
    contract_client: ContractClient,
}

impl Nep17Api {
    pub fn new(contract_client: ContractClient) -> Self {
        Self { contract_client }
    }

    pub async fn balance_of(&self, token: &UInt160, account: &UInt160) -> Result<BigInt> {
        self.contract_client
            .call(token, nep17::BALANCE_OF, &[ContractParameter::Hash160(*account)])
            .await
    }

    pub async fn symbol(&self, token: &UInt160) -> Result<String> {
        self.contract_client.call(token, nep17::SYMBOL, &[]).await
    }

    pub async fn decimals(&self, token: &UInt160) -> Result<u8> {
        self.contract_client.call(token, nep17::DECIMALS, &[]).await
    }

    /// Builder for `transfer(from, to, amount, data)` signed by `from` with
    /// the CalledByEntry scope. `amount` is in the token's smallest unit.
    pub fn transfer(
        &self,
        token: &UInt160,
        from: &Account,
        to: &UInt160,
        amount: BigInt,
        data: Option<ContractParameter>,
    ) -> Result<TransactionBuilder> {
        if amount.sign() == Sign::Minus {
            return Err(ContractError::InvalidParameter(format!(
                "transfer amount {amount} is negative"
            ))
            .into());
        }
        let params = [
            ContractParameter::Hash160(from.script_hash()),
            ContractParameter::Hash160(*to),
            ContractParameter::Integer(amount),
            data.unwrap_or(ContractParameter::Any),
        ];
        let signer = AccountSigner::called_by_entry(from)?;
        self.contract_client
            .invoke(token, nep17::TRANSFER, &params, vec![signer])
    }
}
