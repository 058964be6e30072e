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

//! Neo Wallets Library
//!
//! This crate provides the signing side of the client library:
//! - Key pairs over secp256r1 with WIF import and export
//! - The [`MessageSigner`] capability the invocation builder signs through
//! - Accounts holding known unspent outputs per asset
//! - UTXO input selection strategies
//!
//! ```rust
//! use neo_wallets::{Account, KeyPair};
//!
//! let key_pair = KeyPair::from_wif("KxDgvEKzgSBPPfuVfw67oPQBSjidEiqTHURKSDL1R7yGaGYAeYnr").unwrap();
//! let account = Account::from_key_pair(key_pair);
//! assert_eq!(account.address(), "AK2nJJpJr6o664CWJKi1QRXjqeic2zRp8y");
//! ```

pub mod account;
pub mod key_pair;
pub mod signer;
pub mod utxo_selection;

// Re-export main types
pub use account::Account;
pub use key_pair::KeyPair;
pub use signer::MessageSigner;
pub use utxo_selection::{select_inputs, InputStrategy, UtxoSelection};

use neo_core::UInt256;
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type for wallet operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wallet-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid private key")]
    InvalidPrivateKey,

    #[error("Invalid WIF format: {0}")]
    InvalidWif(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error(
        "insufficient funds for asset {asset_id}: required {required}, available {available}, short by {shortfall}"
    )]
    InsufficientFunds {
        asset_id: UInt256,
        required: Decimal,
        available: Decimal,
        shortfall: Decimal,
    },

    #[error("Cryptography error: {0}")]
    Crypto(#[from] neo_cryptography::Error),

    #[error("Core error: {0}")]
    Core(#[from] neo_core::CoreError),

    #[error("Script error: {0}")]
    Vm(#[from] neo_vm::VmError),
}
