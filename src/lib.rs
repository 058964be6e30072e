//! # Neo Client
//!
//! Build, sign and submit Neo transactions from Rust.
//!
//! This library provides:
//! - A binary codec and the transaction model with its wire layout
//! - A script builder for contract invocation and deployment scripts
//! - Script hash and address derivation
//! - Key pairs, accounts and UTXO input selection
//! - Contract invocation with confirmation tracking over JSON-RPC
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use neo_client::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::load("neo-client.toml")?;
//!     let rpc = Arc::new(RpcClient::from_config(&config)?);
//!
//!     let invocation = ContractInvocation::builder(rpc)
//!         .config(&config)
//!         .contract_script_hash(UInt160::parse("bff561a41a780fa0a4771d03bcc924e90c04fc8e")?)
//!         .account(Account::from_wif("KxDgvEKzgSBPPfuVfw67oPQBSjidEiqTHURKSDL1R7yGaGYAeYnr")?)
//!         .build()?
//!         .sign()?;
//!     invocation.invoke().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`neo_config`] - Protocol constants and client configuration
//! - [`neo_io`] - Binary codec
//! - [`neo_cryptography`] - Hashes, base58check and ECDSA
//! - [`neo_core`] - Script hashes, ids and the transaction model
//! - [`neo_vm`] - Script builder and push reader
//! - [`neo_smart_contract`] - Contract metadata and deployment scripts
//! - [`neo_wallets`] - Key pairs, accounts and input selection
//! - `neo_rpc_client` - JSON-RPC, contract invocation and confirmation tracking (feature `rpc`)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub use neo_config as config;
pub use neo_core as core;
pub use neo_cryptography as crypto;
pub use neo_io as io;
pub use neo_smart_contract as smart_contract;
pub use neo_vm as vm;
pub use neo_wallets as wallets;

#[cfg(feature = "rpc")]
pub use neo_rpc_client as rpc_client;

/// Common imports for Neo client development
pub mod prelude {
    pub use crate::config::{ClientConfig, InputStrategy, NetworkType};
    pub use crate::core::{
        Fixed8, InvocationTransaction, Transaction, TransactionAttribute, TransactionOutput,
        UInt160, UInt256, Utxo, Verifiable, Witness,
    };
    pub use crate::io::SerializableExt;
    pub use crate::smart_contract::{
        ContractDeploymentScript, ContractDescriptionProperties, ContractFunctionProperties,
    };
    pub use crate::vm::{ContractParameter, ContractParameterType, ScriptBuilder};
    pub use crate::wallets::{Account, KeyPair, MessageSigner};

    #[cfg(feature = "rpc")]
    pub use crate::rpc_client::{
        ContractInvocation, InvocationError, NeoRpc, RpcApplicationLog, RpcClient, Subscription,
    };
}

/// Neo client library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
