// Copyright (C) 2015-2025 The Neo Project.
//
// contract_invocation_tests.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Invocation transactions checked byte for byte against transactions a
//! private net accepted.

mod common;

use common::*;
use neo_config::{GAS_ASSET_ID, NEO_ASSET_ID, REMARK_NONCE_SIZE};
use neo_core::{
    CoreError, TransactionAttribute, TransactionAttributeUsage, TransactionOutput, UInt160,
    UInt256, Utxo, Verifiable,
};
use neo_io::SerializableExt;
use neo_rpc_client::rpc_exception::RELAY_REJECTED;
use neo_rpc_client::{ContractInvocation, InvocationError};
use neo_wallets::{Error as WalletError, InputStrategy};
use rust_decimal::Decimal;
use std::sync::atomic::Ordering;
use std::sync::Arc;

const WITH_NETWORK_FEE_TX: &str = "\
     d1013d1423ba2703c53263e8d6e522dc32203339dcd8eee9076e656f2e636f6d52c10872\
     6567697374657267d42cf7a931ce3c46550fd90de482583fc5ea701a0000000000000000\
     012023ba2703c53263e8d6e522dc32203339dcd8eee9016ed7eb573dd25ae0758e0fbb33\
     627b0f52ada87b14ab9d6a54ff93356f9a1b9f000001e72d286979ee6cb1b7e65dfddfb2\
     e384100b8d148e7758de42e4168b71792c60007f3e360200000023ba2703c53263e8d6e5\
     22dc32203339dcd8eee901414037298f37fa7360a36cfec1afabcadd30cc69bfd1dfb3f3\
     96c25515d5f6831a875c6eb26928706c19f796333ddfce26f3fc8fd2ce09427535561531\
     18c54a82f52321031a6c6fbbdf02ca351745fa86b9ba5a9452d785ac4f7fc2b7548ca2a4\
     6c4fcf4aac";

const WITHOUT_FEE_TX: &str = "\
     d1013d1423ba2703c53263e8d6e522dc32203339dcd8eee9076e656f2e636f6d52c10872\
     6567697374657267d42cf7a931ce3c46550fd90de482583fc5ea701a0000000000000000\
     022023ba2703c53263e8d6e522dc32203339dcd8eee9f015313536333335343634353935\
     3131363430346438350000014140ae90f2c650ba69d1a90c3c5d915b07613e32f98c25de\
     139b0be8f6977d4d0ecd86ef482f7e6d97a1ba64f6b03292a617e87a77674817cf156795\
     fa26515793302321031a6c6fbbdf02ca351745fa86b9ba5a9452d785ac4f7fc2b7548ca2\
     a46c4fcf4aac";

const ADDITIONAL_OUTPUTS_TX: &str = "\
     d1013d1423ba2703c53263e8d6e522dc32203339dcd8eee9076e656f2e636f6d52c10872\
     6567697374657267d42cf7a931ce3c46550fd90de482583fc5ea701a0000000000000000\
     012023ba2703c53263e8d6e522dc32203339dcd8eee9010541c7e33f9b3def50c64f2585\
     4ae0f2e517b943c9ccb2c4e954058c96d47af30100029b7cffdaa674beae0f930ebe6085\
     af9093e5fe56b34a5c220ccdcf6efc336fc500e1f50500000000d42cf7a931ce3c46550f\
     d90de482583fc5ea701a9b7cffdaa674beae0f930ebe6085af9093e5fe56b34a5c220ccd\
     cf6efc336fc5003ed563f286230023ba2703c53263e8d6e522dc32203339dcd8eee90141\
     400131b26785f2b522ea420e6f432611ffdb1bf0b2e1f7473eef17124faf227f27693bff\
     ef07654677025bae09b90e8e5a3c0918c35a3c8ec6ab97090541687bd22321031a6c6fbb\
     df02ca351745fa86b9ba5a9452d785ac4f7fc2b7548ca2a46c4fcf4aac";

const WITHOUT_PARAMETERS_TX: &str = "\
     d10115678efc040ce924c9bc031d77a4a00f781aa461f5bf0000000000000000022023ba\
     2703c53263e8d6e522dc32203339dcd8eee9f01531353633383937323931343634363231\
     366466366600000141408a9de1564fbdd53315f411237a9865e5976d362e39f60f1045dc\
     e03cd95eb16846cd69443e6dc3ddbf2c53e5eabc863cf5ce588d2e6eef60cfd7e84ecde8\
     79cb2321031a6c6fbbdf02ca351745fa86b9ba5a9452d785ac4f7fc2b7548ca2a46c4fcf\
     4aac";

fn fixed_remark(remark: &'static str) -> impl Fn() -> Vec<u8> + Send + Sync + 'static {
    move || hex::decode(remark).unwrap()
}

fn gas() -> UInt256 {
    UInt256::parse(GAS_ASSET_ID).unwrap()
}

fn hex_of(invocation: &ContractInvocation) -> String {
    hex::encode(invocation.transaction().to_array().unwrap())
}

#[test]
fn test_invocation_with_network_fee() {
    init_tracing();
    let mut account = account();
    account.add_utxo(
        Utxo::new(
            "9f1b9a6f3593ff546a9dab147ba8ad520f7b6233bb0f8e75e05ad23d57ebd76e",
            0,
            GAS_ASSET_ID,
            "96",
        )
        .unwrap(),
    );
    let script_attribute = TransactionAttribute::script(account.script_hash());

    let invocation = offline_builder()
        .contract_script_hash(ns_contract())
        .account(account)
        .network_fee("1")
        .parameters(register_parameters())
        .attribute(script_attribute)
        .build()
        .unwrap()
        .sign()
        .unwrap();

    assert_eq!(hex_of(&invocation), WITH_NETWORK_FEE_TX);
    assert_eq!(
        invocation.tx_id().to_string(),
        "467f8e948ef4670432b3ec0d44cb78631fa694d0ceeb17e2fb22f5bc20976011"
    );
    assert_eq!(invocation.raw_transaction().unwrap(), WITH_NETWORK_FEE_TX);
}

#[test]
fn test_invocation_without_fee() {
    let invocation = offline_builder()
        .remark_source(fixed_remark("313536333335343634353935313136343034643835"))
        .contract_script_hash(ns_contract())
        .account(account())
        .parameters(register_parameters())
        .build()
        .unwrap()
        .sign()
        .unwrap();

    assert_eq!(hex_of(&invocation), WITHOUT_FEE_TX);
    assert_eq!(
        invocation.tx_id().to_string(),
        "bab536d8804f5677b0014edf0e710d2721349fddd3a6a5baa6141fa269ec25fd"
    );
}

#[test]
fn test_invocation_with_additional_outputs_no_fee() {
    let mut account = account();
    account.add_utxo(
        Utxo::new(
            "f37ad4968c0554e9c4b2ccc943b917e5f2e04a85254fc650ef3d9b3fe3c74105",
            1,
            NEO_ASSET_ID,
            "99999999",
        )
        .unwrap(),
    );
    let script_attribute = TransactionAttribute::script(account.script_hash());
    let transfer =
        TransactionOutput::new(NEO_ASSET_ID, "1", "Ab7kmZJw2yJDNREnyBByt1QEZGbzj9uBf1").unwrap();

    let invocation = offline_builder()
        .contract_script_hash(ns_contract())
        .account(account)
        .parameters(register_parameters())
        .attribute(script_attribute)
        .output(transfer.clone())
        .build()
        .unwrap()
        .sign()
        .unwrap();

    assert_eq!(hex_of(&invocation), ADDITIONAL_OUTPUTS_TX);
    let outputs = invocation.transaction().outputs();
    assert_eq!(outputs[0], transfer);
    assert_eq!(outputs[1].value(), Decimal::from(99_999_998));
    assert_eq!(
        invocation.tx_id().to_string(),
        "f7ed9769d2b9ad69ab116bc21c44e27c515b0a81f13108ee314191ad8ec6f182"
    );
}

#[test]
fn test_invocation_without_parameters() {
    let invocation = offline_builder()
        .remark_source(fixed_remark("313536333839373239313436343632313664663666"))
        .contract_script_hash(UInt160::parse(NUMBER_INCREMENT_CONTRACT).unwrap())
        .account(account())
        .build()
        .unwrap()
        .sign()
        .unwrap();

    assert_eq!(hex_of(&invocation), WITHOUT_PARAMETERS_TX);
    assert_eq!(
        invocation.tx_id().to_string(),
        "797ed7b5a5b4b89127b88e4012b8dbf470bfa2f79db96d572637b19b262577dd"
    );
}

#[test]
fn test_random_remark() {
    let invocation = offline_builder()
        .contract_script_hash(ns_contract())
        .account(account())
        .parameters(register_parameters())
        .build()
        .unwrap();

    let attributes = invocation.transaction().attributes();
    assert_eq!(attributes.len(), 2);
    assert_eq!(attributes[0].usage(), TransactionAttributeUsage::Script);
    assert_eq!(attributes[0].data(), account().script_hash().to_array());
    assert_eq!(attributes[1].usage(), TransactionAttributeUsage::Remark(0));
    assert_eq!(attributes[1].data().len(), REMARK_NONCE_SIZE);
    assert!(!invocation.is_signed());
    assert!(invocation.transaction().witnesses().is_empty());
}

#[test]
fn test_two_fee_less_invocations_get_distinct_ids() {
    let build = || {
        offline_builder()
            .contract_script_hash(ns_contract())
            .account(account())
            .parameters(register_parameters())
            .build()
            .unwrap()
    };
    assert_ne!(build().tx_id(), build().tx_id());
}

#[test]
fn test_fee_without_change_adds_script_attribute_only() {
    let mut account = account();
    account.add_utxo(Utxo::new(&"11".repeat(32), 0, GAS_ASSET_ID, "1").unwrap());

    let invocation = offline_builder()
        .contract_script_hash(ns_contract())
        .account(account.clone())
        .network_fee("1")
        .build()
        .unwrap();

    let tx = invocation.transaction();
    assert_eq!(tx.inputs().len(), 1);
    assert!(tx.outputs().is_empty());
    assert_eq!(
        tx.attributes(),
        &[TransactionAttribute::script(account.script_hash())]
    );
}

#[test]
fn test_explicit_script_attribute_is_not_duplicated() {
    let account = account();
    let invocation = offline_builder()
        .remark_source(|| vec![7; 4])
        .contract_script_hash(ns_contract())
        .account(account.clone())
        .attribute(TransactionAttribute::script(account.script_hash()))
        .build()
        .unwrap();

    let usages: Vec<_> = invocation
        .transaction()
        .attributes()
        .iter()
        .map(|a| a.usage())
        .collect();
    assert_eq!(
        usages,
        vec![
            TransactionAttributeUsage::Script,
            TransactionAttributeUsage::Remark(0)
        ]
    );
}

#[test]
fn test_system_fee_is_funded_with_network_fee() {
    let mut account = account();
    account.add_utxos([
        Utxo::new(&"21".repeat(32), 0, GAS_ASSET_ID, "0.5").unwrap(),
        Utxo::new(&"22".repeat(32), 0, GAS_ASSET_ID, "2").unwrap(),
    ]);

    let invocation = offline_builder()
        .contract_script_hash(ns_contract())
        .account(account.clone())
        .network_fee("0.1")
        .system_fee("1")
        .input_strategy(InputStrategy::LargestFirst)
        .build()
        .unwrap();

    let tx = invocation.transaction();
    assert_eq!(tx.gas().to_decimal(), Decimal::ONE);
    assert_eq!(tx.inputs().len(), 1);
    assert_eq!(tx.outputs().len(), 1);
    assert_eq!(tx.outputs()[0].asset_id(), gas());
    assert_eq!(tx.outputs()[0].value(), Decimal::new(9, 1));
    assert_eq!(tx.outputs()[0].script_hash(), account.script_hash());
}

#[test]
fn test_not_adding_required_script_hash() {
    let result = offline_builder().account(account()).build();
    assert!(matches!(result, Err(InvocationError::Validation(_))));
}

#[test]
fn test_not_adding_required_account() {
    let result = offline_builder().contract_script_hash(ns_contract()).build();
    assert!(matches!(result, Err(InvocationError::Validation(_))));
}

#[test]
fn test_insufficient_funds() {
    let mut account = account();
    account.add_utxo(Utxo::new(&"33".repeat(32), 0, GAS_ASSET_ID, "0.5").unwrap());

    let err = offline_builder()
        .contract_script_hash(ns_contract())
        .account(account)
        .network_fee("2")
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        InvocationError::Wallet(WalletError::InsufficientFunds {
            asset_id: gas(),
            required: Decimal::from(2),
            available: Decimal::new(5, 1),
            shortfall: Decimal::new(15, 1),
        })
    );
}

#[test]
fn test_offsetting_outputs_cannot_skip_funding() {
    let address = account().address();
    assert!(matches!(
        TransactionOutput::new(NEO_ASSET_ID, "-10", &address),
        Err(CoreError::Validation { .. })
    ));
    assert!(TransactionOutput::new(NEO_ASSET_ID, "0", &address).is_err());

    let err = offline_builder()
        .contract_script_hash(ns_contract())
        .account(account())
        .output(TransactionOutput::new(NEO_ASSET_ID, "10", &address).unwrap())
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        InvocationError::Wallet(WalletError::InsufficientFunds { .. })
    ));
}

#[test]
fn test_invalid_fees_are_rejected() {
    let negative = offline_builder()
        .contract_script_hash(ns_contract())
        .account(account())
        .network_fee("-1")
        .build();
    assert!(matches!(negative, Err(InvocationError::Validation(_))));

    let malformed = offline_builder()
        .contract_script_hash(ns_contract())
        .account(account())
        .system_fee("one")
        .build();
    assert!(matches!(malformed, Err(InvocationError::Core(_))));
}

#[test]
fn test_sign_twice_keeps_one_witness() {
    let invocation = offline_builder()
        .contract_script_hash(ns_contract())
        .account(account())
        .build()
        .unwrap()
        .sign()
        .unwrap()
        .sign()
        .unwrap();
    assert_eq!(invocation.transaction().witnesses().len(), 1);
}

#[tokio::test]
async fn test_invoke_requires_signature() {
    let rpc = Arc::new(MockRpc::accepting());
    let invocation = ContractInvocation::builder(rpc.clone())
        .contract_script_hash(ns_contract())
        .account(account())
        .build()
        .unwrap();

    assert_eq!(invocation.invoke().await, Err(InvocationError::NotSigned));
    assert!(rpc.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_invoke_sends_signed_bytes() {
    let rpc = Arc::new(MockRpc::accepting());
    let invocation = ContractInvocation::builder(rpc.clone())
        .remark_source(fixed_remark("313536333839373239313436343632313664663666"))
        .contract_script_hash(UInt160::parse(NUMBER_INCREMENT_CONTRACT).unwrap())
        .account(account())
        .build()
        .unwrap()
        .sign()
        .unwrap();

    let tx_id = invocation.invoke().await.unwrap();
    assert_eq!(tx_id, invocation.tx_id());
    assert_eq!(*rpc.sent.lock().unwrap(), vec![WITHOUT_PARAMETERS_TX.to_string()]);
}

#[tokio::test]
async fn test_invoke_reports_refused_relay() {
    let rpc = Arc::new(MockRpc::default());
    rpc.accept.store(false, Ordering::SeqCst);
    let invocation = ContractInvocation::builder(rpc)
        .contract_script_hash(ns_contract())
        .account(account())
        .build()
        .unwrap()
        .sign()
        .unwrap();

    match invocation.invoke().await {
        Err(InvocationError::Rpc(err)) => assert_eq!(err.code, RELAY_REJECTED),
        other => panic!("unexpected result {other:?}"),
    }
}

#[tokio::test]
async fn test_invoke_propagates_transport_errors() {
    let invocation = offline_builder()
        .contract_script_hash(ns_contract())
        .account(account())
        .build()
        .unwrap()
        .sign()
        .unwrap();

    assert!(matches!(
        invocation.invoke().await,
        Err(InvocationError::Rpc(_))
    ));
}
