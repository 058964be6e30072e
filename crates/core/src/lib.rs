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

//! # Neo Core
//!
//! The transaction model of the Neo client library.
//!
//! ## Features
//!
//! - **Identifiers**: `UInt160` script hashes with address conversion, and
//!   `UInt256` transaction and asset ids
//! - **Amounts**: `Fixed8`, the eight-decimal fixed-point wire amount
//! - **Transactions**: the generic `Transaction` aggregate and the
//!   `InvocationTransaction` submission format, both signable through
//!   [`Verifiable`]
//! - **Witnesses**: witnesses kept sorted by script hash, cosigners and
//!   their scopes
//!
//! ## Example
//!
//! ```rust
//! use neo_core::{InvocationTransaction, TransactionAttribute, UInt160, Verifiable};
//!
//! let account = UInt160::from_script(&[0x51]);
//! let tx = InvocationTransaction::builder()
//!     .script(vec![0x61])
//!     .attribute(TransactionAttribute::script(account))?
//!     .build()?;
//! let signing_payload = tx.to_array_without_scripts()?;
//! assert_eq!(signing_payload[0], 0xd1);
//! # Ok::<(), neo_core::CoreError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// Additional signers and their scopes
pub mod cosigner;
/// Core error types
pub mod error;
/// Fixed-point amounts
pub mod fixed8;
/// Transactions, attributes, inputs and outputs
pub mod transaction;
/// 160-bit script hashes
pub mod uint160;
/// 256-bit ids
pub mod uint256;
/// The signable view shared by transaction kinds
pub mod verifiable;
/// Invocation and verification script pairs
pub mod witness;
/// Cosigner scopes
pub mod witness_scope;

pub use cosigner::Cosigner;
pub use error::{CoreError, CoreResult};
pub use fixed8::Fixed8;
pub use transaction::{
    InvocationTransaction, InvocationTransactionBuilder, Transaction, TransactionAttribute,
    TransactionAttributeUsage, TransactionBuilder, TransactionInput, TransactionOutput, Utxo,
};
pub use uint160::UInt160;
pub use uint256::UInt256;
pub use verifiable::Verifiable;
pub use witness::Witness;
pub use witness_scope::WitnessScope;
