// Copyright (C) 2015-2025 The Neo Project.
//
// lib.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! # Neo RPC Client
//!
//! Talks to a node over JSON-RPC and drives contract invocations end to end.
//!
//! - [`NeoRpc`]: the node calls the invocation flow needs, implemented over
//!   HTTP by [`RpcClient`]
//! - [`ContractInvocation`]: builds the invocation script, funds fees and
//!   transfers from the account's UTXOs, signs, and submits
//! - [`tracker`]: confirmation tracking as a cold stream or a cancellable
//!   [`Subscription`]
//!
//! ```no_run
//! use neo_core::UInt160;
//! use neo_rpc_client::{ContractInvocation, RpcClient};
//! use neo_vm::ContractParameter;
//! use neo_wallets::Account;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let rpc = Arc::new(RpcClient::new("http://localhost:30333".parse()?));
//! let invocation = ContractInvocation::builder(rpc)
//!     .contract_script_hash(UInt160::parse("1a70eac53f5882e40dd90f55463cce31a9f72cd4")?)
//!     .account(Account::from_wif("KxDgvEKzgSBPPfuVfw67oPQBSjidEiqTHURKSDL1R7yGaGYAeYnr")?)
//!     .parameter(ContractParameter::string("symbol"))
//!     .parameter(ContractParameter::array(Vec::new()))
//!     .build()?
//!     .sign()?;
//! invocation.invoke().await?;
//! # Ok(())
//! # }
//! ```

pub mod contract_invocation;
pub mod error;
pub mod models;
pub mod remark;
pub mod rpc_client;
pub mod rpc_exception;
pub mod tracker;

pub use contract_invocation::{ContractInvocation, ContractInvocationBuilder};
pub use error::{InvocationError, InvocationResult};
pub use models::{Execution, RpcApplicationLog, RpcNotification, RpcStackItem, TriggerType};
pub use remark::{timestamped_remark, RemarkSource};
pub use rpc_client::{NeoRpc, RpcClient};
pub use rpc_exception::RpcException;
pub use tracker::{
    application_log_stream, ApplicationLogEvent, ApplicationLogStream, PollPolicy, Subscription,
    MIN_POLL_INTERVAL,
};
