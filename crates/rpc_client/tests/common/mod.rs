// Copyright (C) 2015-2025 The Neo Project.
//
// mod.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

#![allow(dead_code)]

use async_trait::async_trait;
use neo_core::{UInt160, UInt256};
use neo_rpc_client::rpc_exception::INTERNAL_ERROR;
use neo_rpc_client::{
    ContractInvocation, ContractInvocationBuilder, NeoRpc, RpcApplicationLog, RpcException,
};
use neo_vm::ContractParameter;
use neo_wallets::Account;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

/// Account with address AK2nJJpJr6o664CWJKi1QRXjqeic2zRp8y.
pub const WIF: &str = "KxDgvEKzgSBPPfuVfw67oPQBSjidEiqTHURKSDL1R7yGaGYAeYnr";

/// Name service contract taking `register` plus an array of name and owner.
pub const NS_CONTRACT: &str = "1a70eac53f5882e40dd90f55463cce31a9f72cd4";

/// Number incrementing contract taking no parameters.
pub const NUMBER_INCREMENT_CONTRACT: &str = "bff561a41a780fa0a4771d03bcc924e90c04fc8e";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn account() -> Account {
    Account::from_wif(WIF).unwrap()
}

pub fn ns_contract() -> UInt160 {
    UInt160::parse(NS_CONTRACT).unwrap()
}

pub fn register_parameters() -> Vec<ContractParameter> {
    vec![
        ContractParameter::string("register"),
        ContractParameter::array([
            ContractParameter::string("neo.com"),
            ContractParameter::byte_array_from_address(&account().address()).unwrap(),
        ]),
    ]
}

/// A node that is never reached.
pub struct OfflineRpc;

#[async_trait]
impl NeoRpc for OfflineRpc {
    async fn send_raw_transaction(&self, _tx_hex: &str) -> Result<bool, RpcException> {
        Err(RpcException::new(INTERNAL_ERROR, "offline"))
    }

    async fn get_block_count(&self) -> Result<u32, RpcException> {
        Err(RpcException::new(INTERNAL_ERROR, "offline"))
    }

    async fn get_application_log(
        &self,
        _tx_id: &UInt256,
    ) -> Result<Option<RpcApplicationLog>, RpcException> {
        Err(RpcException::new(INTERNAL_ERROR, "offline"))
    }
}

pub fn offline_builder() -> ContractInvocationBuilder {
    ContractInvocation::builder(Arc::new(OfflineRpc))
}

/// A scripted node. The chain grows by one block per `getblockcount` call.
#[derive(Default)]
pub struct MockRpc {
    pub accept: AtomicBool,
    pub sent: Mutex<Vec<String>>,
    pub block_count: AtomicU32,
    pub freeze_height: AtomicBool,
    pub block_count_calls: AtomicU32,
    pub failing_block_counts: AtomicU32,
    pub always_fail: AtomicBool,
    pub log_calls: AtomicU32,
    /// Number of `getapplicationlog` calls answered with "unknown" before
    /// the log is returned. `None` never returns it.
    pub log_after: Mutex<Option<u32>>,
}

impl MockRpc {
    pub fn accepting() -> Self {
        let rpc = Self::default();
        rpc.accept.store(true, Ordering::SeqCst);
        rpc
    }

    pub fn with_log_after(calls: Option<u32>) -> Self {
        let rpc = Self::accepting();
        *rpc.log_after.lock().unwrap() = calls;
        rpc
    }

    pub fn block_count_calls(&self) -> u32 {
        self.block_count_calls.load(Ordering::SeqCst)
    }

    pub fn log_calls(&self) -> u32 {
        self.log_calls.load(Ordering::SeqCst)
    }
}

pub fn sample_log(tx_id: UInt256) -> RpcApplicationLog {
    serde_json::from_value(serde_json::json!({
        "txid": tx_id.to_string(),
        "executions": [{
            "trigger": "Application",
            "contract": NUMBER_INCREMENT_CONTRACT,
            "vmstate": "HALT",
            "gas_consumed": "0.173",
            "stack": [{"type": "Integer", "value": "1"}],
            "notifications": []
        }]
    }))
    .unwrap()
}

#[async_trait]
impl NeoRpc for MockRpc {
    async fn send_raw_transaction(&self, tx_hex: &str) -> Result<bool, RpcException> {
        self.sent.lock().unwrap().push(tx_hex.to_string());
        Ok(self.accept.load(Ordering::SeqCst))
    }

    async fn get_block_count(&self) -> Result<u32, RpcException> {
        self.block_count_calls.fetch_add(1, Ordering::SeqCst);
        if self.always_fail.load(Ordering::SeqCst) {
            return Err(RpcException::new(INTERNAL_ERROR, "HTTP error: connection refused"));
        }
        let pending = self.failing_block_counts.load(Ordering::SeqCst);
        if pending > 0 {
            self.failing_block_counts.store(pending - 1, Ordering::SeqCst);
            return Err(RpcException::new(INTERNAL_ERROR, "HTTP error: timed out"));
        }
        if self.freeze_height.load(Ordering::SeqCst) {
            return Ok(self.block_count.load(Ordering::SeqCst));
        }
        Ok(self.block_count.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn get_application_log(
        &self,
        tx_id: &UInt256,
    ) -> Result<Option<RpcApplicationLog>, RpcException> {
        let calls = self.log_calls.fetch_add(1, Ordering::SeqCst) + 1;
        match *self.log_after.lock().unwrap() {
            Some(after) if calls > after => Ok(Some(sample_log(*tx_id))),
            _ => Ok(None),
        }
    }
}
