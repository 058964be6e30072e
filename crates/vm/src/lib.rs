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

//! # Neo VM scripts
//!
//! Assembly of the bytecode that invokes and deploys contracts.
//!
//! ## Features
//!
//! - **Script Building**: minimal integer and data pushes, contract calls
//!   with reversed parameters, syscalls
//! - **Push Decoding**: [`ScriptReader`] inverts whichever push form the
//!   builder chose
//! - **Contract Parameters**: a closed set of parameter kinds with nested
//!   arrays
//!
//! ## Example
//!
//! ```rust
//! use neo_core::UInt160;
//! use neo_vm::{ContractParameter, ScriptBuilder};
//!
//! let contract = UInt160::parse("1a70eac53f5882e40dd90f55463cce31a9f72cd4")?;
//! let mut builder = ScriptBuilder::new();
//! builder.emit_app_call(&contract, &[ContractParameter::string("resolve")])?;
//! let script = builder.to_bytes();
//! assert_eq!(script[0], 7);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

/// Contract parameters and type tags
pub mod contract_parameter;
/// VM error types and result handling
pub mod error;
/// VM opcode definitions
pub mod op_code;
/// Utility for constructing VM bytecode
pub mod script_builder;
/// Decoding of script pushes
pub mod script_reader;
/// Execution states reported by nodes
pub mod vm_state;

pub use contract_parameter::{ContractParameter, ContractParameterType};
pub use error::{VmError, VmResult};
pub use op_code::OpCode;
pub use script_builder::ScriptBuilder;
pub use script_reader::ScriptReader;
pub use vm_state::VMState;
