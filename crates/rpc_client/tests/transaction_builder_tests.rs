// Copyright (C) 2015-2025 The Neo Project.
//
// transaction_builder_tests.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Transaction builder scenarios against an in-memory node.

mod common;

use common::{transport_error, MockNode};
use hex_literal::hex;
use neo_core::{UInt160, UInt256};
use neo_rpc_client::{
    AccountSigner, BuilderState, ContractClient, Error, FeePolicy, Nep17Api, RpcError,
    RpcInvokeResult, TransactionBuilder,
};
use neo_smart_contract::{decode_invocation_script, ContractParameter};
use neo_wallets::contract::SIGNATURE_CONTRACT_COST;
use neo_wallets::Account;
use num_bigint::BigInt;
use std::sync::Arc;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(5);
const TOKEN: UInt160 = UInt160::from_array([0x42; 20]);

fn committee() -> Account {
    Account::from_private_key(&[0x01; 32]).unwrap()
}

fn user() -> Account {
    Account::from_private_key(&[0x02; 32]).unwrap()
}

fn contracts(node: &Arc<MockNode>) -> ContractClient {
    ContractClient::new(node.clone(), FeePolicy::default())
}

fn transfer_builder(node: &Arc<MockNode>, from: &Account) -> TransactionBuilder {
    Nep17Api::new(contracts(node))
        .transfer(&TOKEN, from, &user().script_hash(), BigInt::from(8), None)
        .unwrap()
}

/// Builder with two CalledByEntry signers (committee first).
fn two_signer_builder(node: &Arc<MockNode>) -> TransactionBuilder {
    contracts(node)
        .invoke(
            &TOKEN,
            "transfer",
            &[ContractParameter::integer(1)],
            vec![
                AccountSigner::called_by_entry(&committee()).unwrap(),
                AccountSigner::called_by_entry(&user()).unwrap(),
            ],
        )
        .unwrap()
}

#[tokio::test]
async fn transfer_is_signed_with_one_witness() {
    let node = Arc::new(MockNode::new(9_977_780, 100));
    let committee = committee();
    let mut builder = transfer_builder(&node, &committee);
    assert_eq!(builder.state(), BuilderState::SignersAttached);

    let decoded = decode_invocation_script(builder.transaction().script()).unwrap();
    assert_eq!(decoded.contract, TOKEN);
    assert_eq!(decoded.method, "transfer");
    assert_eq!(decoded.parameters[2], ContractParameter::integer(8));

    builder.compute_fees(node.as_ref(), TIMEOUT).await.unwrap();
    assert_eq!(builder.state(), BuilderState::FeesComputed);
    builder.sign(&committee).unwrap();
    assert_eq!(builder.state(), BuilderState::Signed);
    assert_eq!(builder.witness_count(), 1);

    let signed = builder.to_signed().unwrap();
    let tx = signed.transaction();
    assert_eq!(tx.witnesses().len(), 1);
    assert_eq!(tx.system_fee(), 9_977_780);
    assert_eq!(tx.valid_until_block(), 100 + 5760 - 1);
    assert!(tx.network_fee() > 0);
    assert_eq!(
        tx.network_fee(),
        signed.size() as i64 * 1000 + 30 * SIGNATURE_CONTRACT_COST
    );

    let witness = &tx.witnesses()[0];
    assert_eq!(witness.invocation_script.len(), 66);
    assert_eq!(
        committee.public_key().unwrap(),
        &hex!("026ff03b949241ce1dadd43519e6960e0a85b41a69a05c328103aa2bce1594ca16")
    );
    assert_eq!(witness.verification_script[2..35], committee.public_key().unwrap()[..]);
    assert_eq!(
        witness.verification_script.as_slice(),
        committee.verification_script().unwrap()
    );
    let sign_data = tx.get_sign_data(FeePolicy::default().network_magic);
    assert!(committee
        .key_pair()
        .unwrap()
        .verify(&sign_data, &witness.invocation_script[2..]));
}

#[tokio::test]
async fn simulation_sees_the_signers() {
    let node = Arc::new(MockNode::new(1_000, 10));
    let mut builder = transfer_builder(&node, &committee());
    builder.compute_fees(node.as_ref(), TIMEOUT).await.unwrap();

    let signers = node.simulated_signers.lock().unwrap();
    assert_eq!(signers[0].len(), 1);
    assert_eq!(signers[0][0].account, committee().script_hash());
}

#[tokio::test]
async fn recomputing_unchanged_fees_keeps_witnesses() {
    let node = Arc::new(MockNode::new(5_000, 100));
    let committee = committee();
    let mut builder = transfer_builder(&node, &committee);
    builder.compute_fees(node.as_ref(), TIMEOUT).await.unwrap();
    builder.sign(&committee).unwrap();
    let first = builder.to_signed().unwrap();

    builder.compute_fees(node.as_ref(), TIMEOUT).await.unwrap();
    assert_eq!(builder.state(), BuilderState::Signed);
    assert_eq!(builder.to_signed().unwrap(), first);
}

#[tokio::test]
async fn changed_fees_drop_witnesses() {
    let node = Arc::new(MockNode::new(5_000, 100));
    let committee = committee();
    let mut builder = transfer_builder(&node, &committee);
    builder.compute_fees(node.as_ref(), TIMEOUT).await.unwrap();
    builder.sign(&committee).unwrap();

    node.push_block_count(Ok(101));
    builder.compute_fees(node.as_ref(), TIMEOUT).await.unwrap();
    assert_eq!(builder.state(), BuilderState::FeesComputed);
    assert_eq!(builder.witness_count(), 0);
    assert!(builder.transaction().witnesses().is_empty());
    assert_eq!(builder.transaction().valid_until_block(), 101 + 5760 - 1);
}

#[tokio::test]
async fn script_change_invalidates_witnesses() {
    let node = Arc::new(MockNode::new(5_000, 100));
    let mut builder = two_signer_builder(&node);
    builder.compute_fees(node.as_ref(), TIMEOUT).await.unwrap();
    builder.sign(&committee()).unwrap();
    assert_eq!(builder.state(), BuilderState::Witnessed(1));

    builder.set_script(vec![0x11, 0x40]).unwrap();
    assert_eq!(builder.state(), BuilderState::SignersAttached);
    assert_eq!(builder.witness_count(), 0);

    assert!(matches!(
        builder.send(node.as_ref()).await,
        Err(Error::NotSigned(BuilderState::SignersAttached))
    ));
    assert!(node.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn all_signers_must_sign() {
    let node = Arc::new(MockNode::new(5_000, 100));
    let mut builder = two_signer_builder(&node);
    builder.compute_fees(node.as_ref(), TIMEOUT).await.unwrap();

    builder.sign(&user()).unwrap();
    assert_eq!(builder.state(), BuilderState::Witnessed(1));
    assert!(matches!(builder.to_signed(), Err(Error::NotSigned(_))));

    builder.sign(&committee()).unwrap();
    assert_eq!(builder.state(), BuilderState::Signed);
    let signed = builder.into_signed().unwrap();
    let witnesses = signed.transaction().witnesses();
    assert_eq!(
        witnesses[0].verification_script.as_slice(),
        committee().verification_script().unwrap()
    );
    assert_eq!(
        witnesses[1].verification_script.as_slice(),
        user().verification_script().unwrap()
    );
}

#[tokio::test]
async fn unknown_signer_changes_nothing() {
    let node = Arc::new(MockNode::new(5_000, 100));
    let mut builder = two_signer_builder(&node);
    builder.compute_fees(node.as_ref(), TIMEOUT).await.unwrap();
    builder.sign(&committee()).unwrap();

    let stranger = Account::from_private_key(&[0x03; 32]).unwrap();
    assert_eq!(
        builder.sign(&stranger).unwrap_err(),
        Error::UnknownSigner(stranger.script_hash())
    );
    assert_eq!(builder.state(), BuilderState::Witnessed(1));
    assert_eq!(builder.witness_count(), 1);
}

#[tokio::test]
async fn watch_only_account_cannot_sign() {
    let node = Arc::new(MockNode::new(5_000, 100));
    let owner = committee();
    let watcher = Account::watch_only(owner.public_key().unwrap()).unwrap();
    let mut builder = transfer_builder(&node, &watcher);
    builder.compute_fees(node.as_ref(), TIMEOUT).await.unwrap();

    assert!(matches!(builder.sign(&watcher), Err(Error::Signing(_))));
    assert_eq!(builder.state(), BuilderState::FeesComputed);
    builder.sign(&owner).unwrap();
    assert_eq!(builder.state(), BuilderState::Signed);
}

#[tokio::test]
async fn duplicate_signer_is_rejected() {
    let node = Arc::new(MockNode::new(5_000, 100));
    let signer = AccountSigner::called_by_entry(&committee()).unwrap();
    let result = contracts(&node).invoke(&TOKEN, "symbol", &[], vec![signer.clone(), signer]);
    assert_eq!(
        result.unwrap_err(),
        Error::DuplicateSigner(committee().script_hash())
    );
}

#[tokio::test]
async fn transient_failure_is_retried_once() {
    let node = Arc::new(MockNode::new(5_000, 100));
    node.push_simulation(Err(transport_error()));
    let mut builder = transfer_builder(&node, &committee());

    builder.compute_fees(node.as_ref(), TIMEOUT).await.unwrap();
    assert_eq!(node.simulation_count(), 2);
    assert_eq!(builder.transaction().system_fee(), 5_000);
}

#[tokio::test]
async fn second_transient_failure_surfaces() {
    let node = Arc::new(MockNode::new(5_000, 100));
    node.push_simulation(Err(transport_error()));
    node.push_simulation(Err(RpcError::Timeout(Duration::from_secs(1))));
    let mut builder = transfer_builder(&node, &committee());

    let err = builder.compute_fees(node.as_ref(), TIMEOUT).await.unwrap_err();
    assert!(matches!(err, Error::FeeEstimation(_)));
    assert_eq!(node.simulation_count(), 2);
    assert_eq!(builder.state(), BuilderState::SignersAttached);
    assert_eq!(builder.transaction().system_fee(), 0);
}

#[tokio::test]
async fn block_count_failure_is_retried_once() {
    let node = Arc::new(MockNode::new(5_000, 100));
    node.push_block_count(Err(transport_error()));
    let mut builder = transfer_builder(&node, &committee());

    builder.compute_fees(node.as_ref(), TIMEOUT).await.unwrap();
    assert_eq!(*node.block_count_calls.lock().unwrap(), 2);
}

#[tokio::test]
async fn server_errors_are_not_retried() {
    let node = Arc::new(MockNode::new(5_000, 100));
    node.push_simulation(Err(RpcError::Server {
        code: -32602,
        message: "Invalid params".to_string(),
    }));
    let mut builder = transfer_builder(&node, &committee());

    assert!(matches!(
        builder.compute_fees(node.as_ref(), TIMEOUT).await,
        Err(Error::FeeEstimation(_))
    ));
    assert_eq!(node.simulation_count(), 1);
}

#[tokio::test]
async fn faulting_simulation_fails_fee_estimation() {
    let node = Arc::new(MockNode::faulting("ASSERT is executed with false result."));
    let mut builder = transfer_builder(&node, &committee());

    let err = builder.compute_fees(node.as_ref(), TIMEOUT).await.unwrap_err();
    assert_eq!(
        err,
        Error::FeeEstimation("ASSERT is executed with false result.".to_string())
    );
    assert_eq!(node.simulation_count(), 1);
    assert_eq!(*node.block_count_calls.lock().unwrap(), 0);
}

#[tokio::test]
async fn timeout_keeps_last_valid_state() {
    let fast = Arc::new(MockNode::new(5_000, 100));
    let committee = committee();
    let mut builder = transfer_builder(&fast, &committee);
    builder.compute_fees(fast.as_ref(), TIMEOUT).await.unwrap();
    builder.sign(&committee).unwrap();
    let signed = builder.to_signed().unwrap();

    let slow = MockNode::new(6_000, 200).with_delay(Duration::from_millis(500));
    let err = builder
        .compute_fees(&slow, Duration::from_millis(20))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::FeeEstimation(msg) if msg.contains("timed out")));
    assert_eq!(builder.state(), BuilderState::Signed);
    assert_eq!(builder.to_signed().unwrap(), signed);
}

#[tokio::test]
async fn send_returns_the_txid() {
    let node = Arc::new(MockNode::new(5_000, 100));
    let committee = committee();
    let mut builder = transfer_builder(&node, &committee);
    builder.compute_fees(node.as_ref(), TIMEOUT).await.unwrap();
    builder.sign(&committee).unwrap();
    let signed = builder.to_signed().unwrap();

    let txid = builder.send(node.as_ref()).await.unwrap();
    assert_eq!(txid, signed.txid());
    let sent = node.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(&sent[0], signed.transaction());
}

#[tokio::test]
async fn submission_failures_are_errors() {
    let node = Arc::new(MockNode::new(5_000, 100));
    let committee = committee();
    let mut builder = transfer_builder(&node, &committee);
    builder.compute_fees(node.as_ref(), TIMEOUT).await.unwrap();
    builder.sign(&committee).unwrap();

    node.fail_send(RpcError::Server {
        code: -511,
        message: "Insufficient funds".to_string(),
    });
    let err = builder.send(node.as_ref()).await.unwrap_err();
    assert!(matches!(err, Error::Submission(msg) if msg.contains("Insufficient funds")));

    node.answer_send(UInt256::zero());
    assert!(matches!(
        builder.send(node.as_ref()).await,
        Err(Error::Submission(_))
    ));
}

#[tokio::test]
async fn fees_require_signers() {
    let node = MockNode::new(5_000, 100);
    let mut builder = TransactionBuilder::default();
    builder.set_script(vec![0x40]).unwrap();
    assert!(matches!(
        builder.compute_fees(&node, TIMEOUT).await,
        Err(Error::InvalidState {
            state: BuilderState::ScriptSet,
            ..
        })
    ));
    assert_eq!(node.simulation_count(), 0);
}

#[tokio::test]
async fn negative_gas_is_rejected() {
    let node = Arc::new(MockNode::new(5_000, 100));
    node.push_simulation(Ok(RpcInvokeResult::halt(-1, Vec::new())));
    let mut builder = transfer_builder(&node, &committee());
    assert!(matches!(
        builder.compute_fees(node.as_ref(), TIMEOUT).await,
        Err(Error::FeeEstimation(_))
    ));
}
