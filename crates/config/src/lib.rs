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

//! Neo Configuration Module
//!
//! Protocol constants shared by every crate of the client library, and the
//! [`ClientConfig`] that carries the runtime policy of the RPC-facing parts
//! (poll interval, failure tolerance, default input strategy).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Size of a hash (UInt256) in bytes
pub const HASH_SIZE: usize = 32;
/// Size of an address (UInt160) in bytes
pub const ADDRESS_SIZE: usize = 20;
/// Version byte prepended to a script hash before base58check encoding
pub const ADDRESS_VERSION: u8 = 0x17;
/// Length of a base58check address payload (version + hash + checksum)
pub const ADDRESS_PAYLOAD_SIZE: usize = 1 + ADDRESS_SIZE + 4;

/// Maximum script size in bytes
pub const MAX_SCRIPT_LENGTH: usize = 1024 * 1024;
/// Largest operand a single push instruction may carry
pub const MAX_PUSH_DATA_SIZE: usize = 1024 * 1024;
/// Maximum serialized transaction size accepted by the network
pub const MAX_TRANSACTION_SIZE: usize = 102_400;
/// Maximum number of attributes, inputs, outputs or witnesses in one list
pub const MAX_TRANSACTION_ATTRIBUTES: usize = 16;
/// Upper bound used when decoding input/output lists
pub const MAX_TRANSACTION_IO: usize = u16::MAX as usize;

/// Type tag of an invocation transaction
pub const INVOCATION_TX_TYPE: u8 = 0xd1;
/// Version written by the transaction builders
pub const CURRENT_TX_VERSION: u8 = 1;
/// Number of decimals of a Fixed8 amount
pub const FIXED8_DECIMALS: u32 = 8;
/// Byte length of a generated remark nonce (8-byte timestamp + 4 random bytes)
pub const REMARK_NONCE_SIZE: usize = 12;

/// GAS asset id (big-endian hex)
pub const GAS_ASSET_ID: &str = "602c79718b16e442de58778e148d0b1084e3b2dffd5de6b7b16cee7969282de7";
/// NEO asset id (big-endian hex)
pub const NEO_ASSET_ID: &str = "c56f33fc6ecfcd0c225c4ab356fee59390af8560be0e930faebe74a6daff7c9b";

/// Interop service that registers a deployed contract
pub const CONTRACT_CREATE_SYSCALL: &str = "Neo.Contract.Create";

/// Default interval between confirmation polls
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1_000;

/// Default Neo RPC ports
pub const DEFAULT_RPC_PORT: u16 = 10332;
pub const DEFAULT_TESTNET_RPC_PORT: u16 = 20332;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration value for {field}: {message}")]
    InvalidValue { field: &'static str, message: String },
}

/// Network type for Neo blockchain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    MainNet,
    #[default]
    TestNet,
    Private,
}

impl NetworkType {
    /// Gets the address version
    pub fn address_version(&self) -> u8 {
        ADDRESS_VERSION
    }

    /// Default JSON-RPC endpoint of a public node on this network
    pub fn default_rpc_url(&self) -> String {
        match self {
            NetworkType::MainNet => format!("http://seed1.ngd.network:{}", DEFAULT_RPC_PORT),
            NetworkType::TestNet => format!("http://seed1t.neo.org:{}", DEFAULT_TESTNET_RPC_PORT),
            NetworkType::Private => format!("http://localhost:{}", DEFAULT_RPC_PORT),
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkType::MainNet => write!(f, "mainnet"),
            NetworkType::TestNet => write!(f, "testnet"),
            NetworkType::Private => write!(f, "private"),
        }
    }
}

impl FromStr for NetworkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" => Ok(NetworkType::MainNet),
            "testnet" | "test" => Ok(NetworkType::TestNet),
            "private" | "privnet" => Ok(NetworkType::Private),
            _ => Err(format!("Unknown network type: {}", s)),
        }
    }
}

/// How UTXO candidates are ordered before the covering prefix is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InputStrategy {
    /// Keep the order the candidates were supplied in
    #[default]
    Default,
    /// Spend the largest outputs first
    LargestFirst,
    /// Spend the smallest outputs first
    SmallestFirst,
}

/// Client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub network: NetworkType,
    pub rpc_url: String,
    pub poll_interval_ms: u64,
    /// Consecutive failed polls tolerated before a confirmation stream gives
    /// up. `None` keeps polling through any number of transient failures.
    pub max_poll_failures: Option<u32>,
    pub address_version: u8,
    pub input_strategy: InputStrategy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let network = NetworkType::default();
        Self {
            network,
            rpc_url: network.default_rpc_url(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            max_poll_failures: None,
            address_version: ADDRESS_VERSION,
            input_strategy: InputStrategy::Default,
        }
    }
}

impl ClientConfig {
    /// Parses a configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "poll_interval_ms",
                message: "must be greater than zero".to_string(),
            });
        }
        if self.rpc_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "rpc_url",
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
