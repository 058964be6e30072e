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

//! Transaction model.
//!
//! - `core` - the generic `Transaction` aggregate and its builder
//! - `invocation` - `InvocationTransaction`, the submission format
//! - `attributes` - usage-tagged attributes
//! - `input` / `output` - asset inputs, outputs and UTXO candidates

pub mod attributes;
pub mod core;
pub mod input;
pub mod invocation;
pub mod output;

pub use attributes::{TransactionAttribute, TransactionAttributeUsage};
pub use self::core::{Transaction, TransactionBuilder};
pub use input::{TransactionInput, Utxo};
pub use invocation::{InvocationTransaction, InvocationTransactionBuilder};
pub use output::TransactionOutput;
