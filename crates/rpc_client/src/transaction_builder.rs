// Copyright (C) 2015-2025 The Neo Project.
//
// transaction_builder.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Transaction assembly.
//!
//! A [`TransactionBuilder`] walks one transaction through
//! `Empty -> ScriptSet -> SignersAttached -> FeesComputed -> Witnessed(n) -> Signed`.
//! Every witness signs the exact unsigned encoding held by the builder, so
//! any change to the script, the signers, the fees or the nonce drops all
//! witnesses collected so far.

use crate::{Error, NodeClient, Result, RpcError};
use neo_config::{
    ClientConfig, NetworkType, DEFAULT_EXEC_FEE_FACTOR, DEFAULT_FEE_PER_BYTE,
    DEFAULT_MAX_VALID_UNTIL_BLOCK_INCREMENT, MAX_SCRIPT_SIZE,
};
use neo_core::{Signer, Transaction, UInt160, UInt256, Witness, WitnessScope, MAX_SIGNERS};
use neo_io::{Serializable, SerializableExt};
use neo_wallets::contract::{SIGNATURE_CONTRACT_COST, SIGNATURE_INVOCATION_SIZE};
use neo_wallets::{Account, Contract};
use std::fmt;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Where a [`TransactionBuilder`] is in its life cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    Empty,
    ScriptSet,
    SignersAttached,
    FeesComputed,
    /// Some, but not all, signers have a witness.
    Witnessed(usize),
    Signed,
}

impl fmt::Display for BuilderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuilderState::Empty => f.write_str("Empty"),
            BuilderState::ScriptSet => f.write_str("ScriptSet"),
            BuilderState::SignersAttached => f.write_str("SignersAttached"),
            BuilderState::FeesComputed => f.write_str("FeesComputed"),
            BuilderState::Witnessed(n) => write!(f, "Witnessed({n})"),
            BuilderState::Signed => f.write_str("Signed"),
        }
    }
}

/// A transaction signer together with the public verification script of
/// its account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSigner {
    signer: Signer,
    verification_script: Vec<u8>,
}

impl AccountSigner {
    /// Pairs `signer` with a single-signature verification script hashing
    /// to `signer.account`.
    pub fn new(signer: Signer, verification_script: Vec<u8>) -> Result<Self> {
        if !Contract::is_signature_contract(&verification_script) {
            return Err(Error::InvalidScript(
                "only single-signature verification scripts are supported".to_string(),
            ));
        }
        let hash = UInt160::from_script(&verification_script);
        if hash != signer.account {
            return Err(Error::InvalidKey(format!(
                "verification script hashes to {hash}, signer account is {}",
                signer.account
            )));
        }
        signer.validate()?;
        Ok(Self {
            signer,
            verification_script,
        })
    }

    /// Signer for `account` with the given scopes.
    pub fn from_account(account: &Account, scopes: WitnessScope) -> Result<Self> {
        Self::with_signer(account, Signer::new(account.script_hash(), scopes))
    }

    /// Signer for `account` limited to the entry script.
    pub fn called_by_entry(account: &Account) -> Result<Self> {
        Self::from_account(account, WitnessScope::CalledByEntry)
    }

    /// Signer for `account` whose witness is valid in every context.
    ///
    /// ```
    /// use neo_core::WitnessScope;
    /// use neo_rpc_client::AccountSigner;
    /// use neo_wallets::Account;
    ///
    /// let account = Account::from_private_key(&[0x01; 32]).unwrap();
    /// let signer = AccountSigner::global(&account).unwrap();
    /// assert_eq!(signer.account(), account.script_hash());
    /// assert_eq!(signer.signer().scopes, WitnessScope::Global);
    /// assert_eq!(Some(signer.verification_script()), account.verification_script());
    /// ```
    pub fn global(account: &Account) -> Result<Self> {
        Self::from_account(account, WitnessScope::Global)
    }

    /// Uses a fully configured `signer` (custom contracts, groups) for `account`.
    pub fn with_signer(account: &Account, signer: Signer) -> Result<Self> {
        let script = account.verification_script().ok_or_else(|| {
            Error::InvalidKey(format!(
                "{} has no known verification script",
                account.script_hash()
            ))
        })?;
        Self::new(signer, script.to_vec())
    }

    /// Signer as it appears in the transaction.
    pub fn signer(&self) -> &Signer {
        &self.signer
    }

    /// Script hash of the signing account.
    pub fn account(&self) -> UInt160 {
        self.signer.account
    }

    /// Script placed in this signer's witness.
    pub fn verification_script(&self) -> &[u8] {
        &self.verification_script
    }
}

/// Chain parameters the builder needs locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeePolicy {
    /// Network fee charged per byte of the transaction, in datoshi.
    pub fee_per_byte: i64,
    /// Multiplier applied to opcode prices during verification.
    pub exec_fee_factor: i64,
    /// Magic mixed into the signing payload.
    pub network_magic: u32,
    /// Blocks the transaction stays valid for after the current height.
    pub max_valid_until_block_increment: u32,
}

impl Default for FeePolicy {
    fn default() -> Self {
        Self {
            fee_per_byte: DEFAULT_FEE_PER_BYTE,
            exec_fee_factor: DEFAULT_EXEC_FEE_FACTOR,
            network_magic: NetworkType::default().magic(),
            max_valid_until_block_increment: DEFAULT_MAX_VALID_UNTIL_BLOCK_INCREMENT,
        }
    }
}

impl FeePolicy {
    /// Policy from the configured fees and network.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            fee_per_byte: config.fees.fee_per_byte,
            exec_fee_factor: config.fees.exec_fee_factor,
            network_magic: config.magic(),
            max_valid_until_block_increment: config.max_valid_until_block_increment,
        }
    }

    /// Network fee of a transaction of `size` bytes verified by
    /// `signature_count` single-signature witnesses.
    pub fn network_fee(&self, size: usize, signature_count: usize) -> i64 {
        let size = i64::try_from(size).unwrap_or(i64::MAX);
        let count = i64::try_from(signature_count).unwrap_or(i64::MAX);
        size.saturating_mul(self.fee_per_byte).saturating_add(
            self.exec_fee_factor
                .saturating_mul(SIGNATURE_CONTRACT_COST)
                .saturating_mul(count),
        )
    }

    /// Last block in which a transaction built at `block_count` is valid.
    pub fn valid_until_block(&self, block_count: u32) -> u32 {
        block_count
            .saturating_add(self.max_valid_until_block_increment)
            .saturating_sub(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FeeQuote {
    system_fee: i64,
    network_fee: i64,
    valid_until_block: u32,
}

/// Builds and signs one transaction.
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    state: BuilderState,
    transaction: Transaction,
    signers: Vec<AccountSigner>,
    witnesses: Vec<Option<Witness>>,
    policy: FeePolicy,
}

impl Default for TransactionBuilder {
    fn default() -> Self {
        Self::new(FeePolicy::default())
    }
}

impl TransactionBuilder {
    /// Empty builder with a random nonce.
    pub fn new(policy: FeePolicy) -> Self {
        let mut transaction = Transaction::new();
        transaction.set_nonce(rand::random());
        Self {
            state: BuilderState::Empty,
            transaction,
            signers: Vec::new(),
            witnesses: Vec::new(),
            policy,
        }
    }

    /// Current stage of the builder.
    pub fn state(&self) -> BuilderState {
        self.state
    }

    pub fn policy(&self) -> &FeePolicy {
        &self.policy
    }

    /// Signers in transaction order. The first one pays the fees.
    pub fn signers(&self) -> &[AccountSigner] {
        &self.signers
    }

    /// Number of signers that already have a witness.
    pub fn witness_count(&self) -> usize {
        self.witnesses.iter().flatten().count()
    }

    /// The transaction as built so far. Witnesses are attached only once
    /// every signer has signed.
    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    /// Hash the witnesses sign, given the current contents.
    pub fn hash(&self) -> UInt256 {
        self.transaction.hash()
    }

    /// Sets or replaces the script.
    pub fn set_script(&mut self, script: Vec<u8>) -> Result<&mut Self> {
        if script.is_empty() {
            return Err(Error::InvalidScript("script is empty".to_string()));
        }
        if script.len() > MAX_SCRIPT_SIZE {
            return Err(Error::InvalidScript(format!(
                "script is {} bytes, the limit is {MAX_SCRIPT_SIZE}",
                script.len()
            )));
        }
        self.transaction.set_script(script);
        if self.signers.is_empty() {
            self.transition(BuilderState::ScriptSet);
        } else {
            self.invalidate("script changed");
        }
        Ok(self)
    }

    /// Appends a signer. The first signer pays the fees.
    pub fn add_signer(&mut self, signer: AccountSigner) -> Result<&mut Self> {
        if self.state == BuilderState::Empty {
            return Err(Error::InvalidState {
                operation: "add a signer",
                state: self.state,
            });
        }
        if self.signers.iter().any(|s| s.account() == signer.account()) {
            return Err(Error::DuplicateSigner(signer.account()));
        }
        if self.signers.len() >= MAX_SIGNERS {
            return Err(Error::TooManySigners(MAX_SIGNERS));
        }
        debug!(signer = %signer.account(), scopes = %signer.signer().scopes, "adding signer");
        self.transaction.push_signer(signer.signer().clone());
        self.signers.push(signer);
        self.invalidate("signer added");
        Ok(self)
    }

    /// Replaces the nonce. A different value clears existing witnesses.
    pub fn set_nonce(&mut self, nonce: u32) -> Result<&mut Self> {
        if nonce == self.transaction.nonce() {
            return Ok(self);
        }
        self.transaction.set_nonce(nonce);
        if matches!(self.state, BuilderState::Empty | BuilderState::ScriptSet) {
            return Ok(self);
        }
        self.invalidate("nonce changed");
        Ok(self)
    }

    /// Asks `client` for the system fee and the current height, then
    /// computes the network fee locally.
    ///
    /// Transient node failures are retried once. The whole step is bounded
    /// by `timeout`; on any failure the builder is left untouched.
    pub async fn compute_fees(
        &mut self,
        client: &dyn NodeClient,
        timeout: Duration,
    ) -> Result<&mut Self> {
        if matches!(self.state, BuilderState::Empty | BuilderState::ScriptSet) {
            return Err(Error::InvalidState {
                operation: "compute fees",
                state: self.state,
            });
        }

        let estimate = estimate_fees(client, &self.transaction, &self.signers, &self.policy);
        let quote = tokio::time::timeout(timeout, estimate)
            .await
            .map_err(|_| Error::FeeEstimation(format!("timed out after {timeout:?}")))??;

        let current = FeeQuote {
            system_fee: self.transaction.system_fee(),
            network_fee: self.transaction.network_fee(),
            valid_until_block: self.transaction.valid_until_block(),
        };
        let has_fees = !matches!(self.state, BuilderState::SignersAttached);
        if has_fees && quote == current {
            debug!(state = %self.state, "fees unchanged, keeping witnesses");
            return Ok(self);
        }

        self.transaction.set_system_fee(quote.system_fee);
        self.transaction.set_network_fee(quote.network_fee);
        self.transaction.set_valid_until_block(quote.valid_until_block);
        self.clear_witnesses();
        self.transition(BuilderState::FeesComputed);
        debug!(
            system_fee = quote.system_fee,
            network_fee = quote.network_fee,
            valid_until_block = quote.valid_until_block,
            "fees computed"
        );
        Ok(self)
    }

    /// Adds the witness of every signer controlled by `account`.
    pub fn sign(&mut self, account: &Account) -> Result<&mut Self> {
        if !matches!(
            self.state,
            BuilderState::FeesComputed | BuilderState::Witnessed(_) | BuilderState::Signed
        ) {
            return Err(Error::InvalidState {
                operation: "sign",
                state: self.state,
            });
        }
        let hash = account.script_hash();
        let indices: Vec<usize> = self
            .signers
            .iter()
            .enumerate()
            .filter(|(_, s)| s.account() == hash)
            .map(|(i, _)| i)
            .collect();
        if indices.is_empty() {
            return Err(Error::UnknownSigner(hash));
        }

        let sign_data = self.transaction.get_sign_data(self.policy.network_magic);
        let signature = account.sign(&sign_data)?;
        let invocation = Contract::create_signature_invocation_script(&signature);
        for index in indices {
            let verification = self.signers[index].verification_script.clone();
            self.witnesses[index] = Some(Witness::new(invocation.clone(), verification));
        }

        let count = self.witness_count();
        if count == self.signers.len() {
            let witnesses = self.witnesses.iter().flatten().cloned().collect();
            self.transaction.set_witnesses(witnesses);
            self.transition(BuilderState::Signed);
        } else {
            self.transition(BuilderState::Witnessed(count));
        }
        debug!(signer = %hash, witnesses = count, "signed");
        Ok(self)
    }

    /// Snapshot of the signed transaction.
    pub fn to_signed(&self) -> Result<SignedTransaction> {
        if self.state != BuilderState::Signed {
            return Err(Error::NotSigned(self.state));
        }
        Ok(SignedTransaction::new(self.transaction.clone()))
    }

    /// Consumes the builder. Fails with [`Error::NotSigned`] unless every signer has a witness.
    pub fn into_signed(self) -> Result<SignedTransaction> {
        if self.state != BuilderState::Signed {
            return Err(Error::NotSigned(self.state));
        }
        Ok(SignedTransaction::new(self.transaction))
    }

    /// Relays the signed transaction through `client`.
    pub async fn send(&self, client: &dyn NodeClient) -> Result<UInt256> {
        self.to_signed()?.send(client).await
    }

    /// Drops stale witnesses and fees after a change to signed content.
    fn invalidate(&mut self, reason: &'static str) {
        if self.witness_count() > 0 {
            debug!(reason, witnesses = self.witness_count(), "clearing witnesses");
        }
        self.clear_witnesses();
        self.transition(BuilderState::SignersAttached);
    }

    fn clear_witnesses(&mut self) {
        self.witnesses = vec![None; self.signers.len()];
        self.transaction.clear_witnesses();
    }

    fn transition(&mut self, state: BuilderState) {
        if self.state != state {
            debug!(from = %self.state, to = %state, "builder state");
            self.state = state;
        }
    }
}

async fn estimate_fees(
    client: &dyn NodeClient,
    transaction: &Transaction,
    signers: &[AccountSigner],
    policy: &FeePolicy,
) -> Result<FeeQuote> {
    let core_signers = transaction.signers();
    let simulation = retry_once("simulate", || {
        client.simulate(transaction.script(), core_signers)
    })
    .await
    .map_err(|e| Error::FeeEstimation(e.to_string()))?;
    if simulation.is_fault() {
        return Err(Error::FeeEstimation(simulation.fault_message()));
    }
    if simulation.gas_consumed < 0 {
        return Err(Error::FeeEstimation(format!(
            "node reported negative gas {}",
            simulation.gas_consumed
        )));
    }

    let block_count = retry_once("get_block_count", || client.get_block_count())
        .await
        .map_err(|e| Error::FeeEstimation(e.to_string()))?;

    // Size with one placeholder witness per signer; fee fields are fixed width.
    let mut sized = transaction.clone();
    sized.set_witnesses(
        signers
            .iter()
            .map(|s| Witness::new(vec![0; SIGNATURE_INVOCATION_SIZE], s.verification_script.clone()))
            .collect(),
    );

    Ok(FeeQuote {
        system_fee: simulation.gas_consumed,
        network_fee: policy.network_fee(sized.size(), signers.len()),
        valid_until_block: policy.valid_until_block(block_count),
    })
}

async fn retry_once<T, F, Fut>(operation: &'static str, mut call: F) -> std::result::Result<T, RpcError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::result::Result<T, RpcError>>,
{
    match call().await {
        Err(err) if err.is_transient() => {
            warn!(operation, attempt = 1, error = %err, "transient node failure, retrying");
            call().await
        }
        result => result,
    }
}

/// A fully witnessed transaction, ready to relay.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedTransaction {
    transaction: Transaction,
    txid: UInt256,
}

impl SignedTransaction {
    fn new(transaction: Transaction) -> Self {
        let txid = transaction.hash();
        Self { transaction, txid }
    }

    /// Hash of the unsigned part of the transaction.
    pub fn txid(&self) -> UInt256 {
        self.txid
    }

    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    /// Canonical encoding, as relayed to the network.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.transaction.to_array()
    }

    pub fn size(&self) -> usize {
        self.transaction.size()
    }

    /// Relays the transaction. Any failure, including a node answering with
    /// a different hash, is a [`Error::Submission`].
    pub async fn send(&self, client: &dyn NodeClient) -> Result<UInt256> {
        let hash = client
            .send_transaction(&self.transaction)
            .await
            .map_err(|e| Error::Submission(e.to_string()))?;
        if hash != self.txid {
            return Err(Error::Submission(format!(
                "node accepted {hash}, expected {}",
                self.txid
            )));
        }
        info!(tx = %self.txid, "transaction submitted");
        Ok(hash)
    }
}
