// Copyright (C) 2015-2025 The Neo Project.
//
// deployment_script.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Contract deployment scripts.
//!
//! A deployment script pushes the description strings, the function
//! properties and the contract bytecode, then calls
//! `Neo.Contract.Create`. Decoding walks the same pushes back.

use crate::description_properties::ContractDescriptionProperties;
use crate::error::{ContractError, ContractResult};
use crate::function_properties::ContractFunctionProperties;
use neo_config::{CONTRACT_CREATE_SYSCALL, MAX_SCRIPT_LENGTH};
use neo_core::UInt160;
use neo_vm::{ScriptBuilder, ScriptReader};
use tracing::debug;

/// A contract together with the metadata needed to deploy it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractDeploymentScript {
    script: Vec<u8>,
    function_properties: ContractFunctionProperties,
    description_properties: ContractDescriptionProperties,
}

impl ContractDeploymentScript {
    /// Wraps contract bytecode and its metadata.
    ///
    /// # Errors
    ///
    /// Returns `ContractError::MalformedScript` for empty bytecode or
    /// bytecode longer than `MAX_SCRIPT_LENGTH`.
    pub fn new(
        script: Vec<u8>,
        function_properties: ContractFunctionProperties,
        description_properties: ContractDescriptionProperties,
    ) -> ContractResult<Self> {
        if script.is_empty() {
            return Err(ContractError::malformed("contract script is empty"));
        }
        if script.len() > MAX_SCRIPT_LENGTH {
            return Err(ContractError::malformed(format!(
                "contract script of {} bytes exceeds maximum {MAX_SCRIPT_LENGTH}",
                script.len()
            )));
        }
        Ok(Self {
            script,
            function_properties,
            description_properties,
        })
    }

    /// The contract bytecode.
    pub fn script(&self) -> &[u8] {
        &self.script
    }

    pub fn function_properties(&self) -> &ContractFunctionProperties {
        &self.function_properties
    }

    pub fn description_properties(&self) -> &ContractDescriptionProperties {
        &self.description_properties
    }

    /// Identity of the deployed contract: the hash of its bytecode.
    pub fn contract_script_hash(&self) -> UInt160 {
        UInt160::from_script(&self.script)
    }

    /// Hash of the assembled deployment script.
    pub fn deployment_script_hash(&self) -> ContractResult<UInt160> {
        Ok(UInt160::from_script(&self.to_bytes()?))
    }

    /// Assembles the deployment script.
    pub fn to_bytes(&self) -> ContractResult<Vec<u8>> {
        let mut builder = ScriptBuilder::new();
        self.description_properties.write_to(&mut builder)?;
        self.function_properties.write_to(&mut builder)?;
        builder
            .push_data(&self.script)?
            .emit_syscall(CONTRACT_CREATE_SYSCALL)?;

        debug!(
            contract = %self.contract_script_hash(),
            length = builder.len(),
            "assembled deployment script"
        );
        Ok(builder.into_bytes())
    }

    /// Decodes a script produced by [`Self::to_bytes`].
    ///
    /// # Errors
    ///
    /// Fails on any unexpected opcode, a syscall other than
    /// `Neo.Contract.Create`, or data after the syscall.
    pub fn from_bytes(bytes: &[u8]) -> ContractResult<Self> {
        let mut reader = ScriptReader::new(bytes);
        let description_properties = ContractDescriptionProperties::read_from(&mut reader)?;
        let function_properties = ContractFunctionProperties::read_from(&mut reader)?;
        let script = reader.read_push_data()?;

        let offset = reader.position();
        let syscall = reader.read_syscall()?;
        if syscall != CONTRACT_CREATE_SYSCALL {
            return Err(ContractError::malformed(format!(
                "expected syscall {CONTRACT_CREATE_SYSCALL} at offset {offset}, found {syscall}"
            )));
        }
        if !reader.is_at_end() {
            return Err(ContractError::malformed(format!(
                "unexpected data at offset {}",
                reader.position()
            )));
        }

        Self::new(script, function_properties, description_properties)
    }
}
