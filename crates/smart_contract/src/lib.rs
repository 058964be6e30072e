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

//! Neo smart contract metadata.
//!
//! Encodes the properties of a contract's entry point and assembles the
//! script that deploys a contract.
//!
//! ```rust
//! use neo_smart_contract::{
//!     ContractDeploymentScript, ContractDescriptionProperties, ContractFunctionProperties,
//! };
//! use neo_vm::ContractParameterType;
//!
//! let deployment = ContractDeploymentScript::new(
//!     vec![0x51, 0x66],
//!     ContractFunctionProperties::new(vec![], ContractParameterType::Void, false, false, false),
//!     ContractDescriptionProperties::new("Demo", "1.0", "neo", "dev@neo.org", "demo"),
//! )
//! .unwrap();
//!
//! let bytes = deployment.to_bytes().unwrap();
//! assert_eq!(ContractDeploymentScript::from_bytes(&bytes).unwrap(), deployment);
//! ```

pub mod deployment_script;
pub mod description_properties;
pub mod error;
pub mod function_properties;

pub use deployment_script::ContractDeploymentScript;
pub use description_properties::ContractDescriptionProperties;
pub use error::{ContractError, ContractResult};
pub use function_properties::{
    pack_flags, unpack_is_payable, unpack_needs_dynamic_invoke, unpack_needs_storage,
    ContractFunctionProperties, IS_PAYABLE, NEEDS_DYNAMIC_INVOKE, NEEDS_STORAGE,
};
