// Copyright (C) 2015-2025 The Neo Project.
//
// policy_api.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::transaction_builder::{AccountSigner, FeePolicy, TransactionBuilder};
use crate::{ContractClient, Error, Result};
use neo_core::UInt160;
use neo_smart_contract::native::policy;
use neo_smart_contract::{ContractParameter, NativeContract};

/// Calls to the native Policy contract.
///
/// Write operations are committee-only; the returned builders still need
/// fees, the committee witness and submission.
pub struct PolicyApi {
    contract_client: ContractClient,
    script_hash: UInt160,
}

impl PolicyApi {
    pub fn new(contract_client: ContractClient) -> Self {
        Self {
            contract_client,
            script_hash: NativeContract::POLICY,
        }
    }

    pub async fn is_blocked(&self, account: &UInt160) -> Result<bool> {
        self.query(policy::IS_BLOCKED, account).await
    }

    pub fn block_account(
        &self,
        account: &UInt160,
        signers: Vec<AccountSigner>,
    ) -> Result<TransactionBuilder> {
        self.update(policy::BLOCK_ACCOUNT, account, signers)
    }

    pub fn unblock_account(
        &self,
        account: &UInt160,
        signers: Vec<AccountSigner>,
    ) -> Result<TransactionBuilder> {
        self.update(policy::UNBLOCK_ACCOUNT, account, signers)
    }

    pub async fn is_restricted(&self, account: &UInt160) -> Result<bool> {
        self.query(policy::IS_RESTRICTED, account).await
    }

    pub fn restrict_account(
        &self,
        account: &UInt160,
        signers: Vec<AccountSigner>,
    ) -> Result<TransactionBuilder> {
        self.update(policy::RESTRICT_ACCOUNT, account, signers)
    }

    pub fn unrestrict_account(
        &self,
        account: &UInt160,
        signers: Vec<AccountSigner>,
    ) -> Result<TransactionBuilder> {
        self.update(policy::UNRESTRICT_ACCOUNT, account, signers)
    }

    /// Network fee per transaction byte, in datoshi.
    pub async fn get_fee_per_byte(&self) -> Result<i64> {
        self.contract_client
            .call(&self.script_hash, policy::GET_FEE_PER_BYTE, &[])
            .await
    }

    pub async fn get_exec_fee_factor(&self) -> Result<i64> {
        self.contract_client
            .call(&self.script_hash, policy::GET_EXEC_FEE_FACTOR, &[])
            .await
    }

    /// `base` with the fee values currently stored on chain.
    pub async fn fee_policy(&self, base: FeePolicy) -> Result<FeePolicy> {
        let fee_per_byte = self.get_fee_per_byte().await?;
        let exec_fee_factor = self.get_exec_fee_factor().await?;
        if fee_per_byte < 0 || exec_fee_factor < 0 {
            return Err(Error::UnexpectedResult(format!(
                "negative policy values: fee per byte {fee_per_byte}, exec fee factor {exec_fee_factor}"
            )));
        }
        Ok(FeePolicy {
            fee_per_byte,
            exec_fee_factor,
            ..base
        })
    }

    async fn query(&self, method: &str, account: &UInt160) -> Result<bool> {
        self.contract_client
            .call(&self.script_hash, method, &[ContractParameter::Hash160(*account)])
            .await
    }

    fn update(
        &self,
        method: &str,
        account: &UInt160,
        signers: Vec<AccountSigner>,
    ) -> Result<TransactionBuilder> {
        self.contract_client.invoke(
            &self.script_hash,
            method,
            &[ContractParameter::Hash160(*account)],
            signers,
        )
    }
}
