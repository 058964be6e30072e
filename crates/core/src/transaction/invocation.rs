// Copyright (C) 2015-2025 The Neo Project.
//
// invocation.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Invocation transactions: a contract script plus asset inputs and outputs.
//!
//! ```text
//! unsigned := type(0xd1) version script:VarBytes [gas:Fixed8 if version >= 1]
//!             attributes:VarList inputs:VarList outputs:VarList
//! full     := unsigned witnesses:VarList
//! ```

use super::attributes::TransactionAttribute;
use super::input::TransactionInput;
use super::output::TransactionOutput;
use crate::error::{CoreError, CoreResult};
use crate::verifiable::{insert_sorted, Verifiable};
use crate::{Fixed8, Witness};
use neo_config::{
    CURRENT_TX_VERSION, INVOCATION_TX_TYPE, MAX_SCRIPT_LENGTH, MAX_TRANSACTION_ATTRIBUTES,
    MAX_TRANSACTION_IO,
};
use neo_io::serializable::helper::{get_array_size, get_var_bytes_size};
use neo_io::{BinaryWriter, IoError, IoResult, MemoryReader, Serializable};

/// A transaction executing a script, optionally moving assets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvocationTransaction {
    version: u8,
    script: Vec<u8>,
    gas: Fixed8,
    attributes: Vec<TransactionAttribute>,
    inputs: Vec<TransactionInput>,
    outputs: Vec<TransactionOutput>,
    witnesses: Vec<Witness>,
}

impl InvocationTransaction {
    /// Starts a builder.
    pub fn builder() -> InvocationTransactionBuilder {
        InvocationTransactionBuilder::default()
    }

    /// The transaction version.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// The invocation script.
    pub fn script(&self) -> &[u8] {
        &self.script
    }

    /// GAS consumed by the script (system fee).
    pub fn gas(&self) -> Fixed8 {
        self.gas
    }

    /// The attributes in insertion order.
    pub fn attributes(&self) -> &[TransactionAttribute] {
        &self.attributes
    }

    /// Spent outputs.
    pub fn inputs(&self) -> &[TransactionInput] {
        &self.inputs
    }

    /// Created outputs.
    pub fn outputs(&self) -> &[TransactionOutput] {
        &self.outputs
    }
}

impl Verifiable for InvocationTransaction {
    fn serialize_unsigned(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_u8(INVOCATION_TX_TYPE)?;
        writer.write_u8(self.version)?;
        writer.write_var_bytes(&self.script)?;
        if self.version >= 1 {
            writer.write_serializable(&self.gas)?;
        }
        writer.write_serializable_list(&self.attributes)?;
        writer.write_serializable_list(&self.inputs)?;
        writer.write_serializable_list(&self.outputs)
    }

    fn witnesses(&self) -> &[Witness] {
        &self.witnesses
    }

    fn witnesses_mut(&mut self) -> &mut Vec<Witness> {
        &mut self.witnesses
    }
}

impl Serializable for InvocationTransaction {
    fn size(&self) -> usize {
        let gas = if self.version >= 1 { self.gas.size() } else { 0 };
        2 + get_var_bytes_size(&self.script)
            + gas
            + get_array_size(&self.attributes)
            + get_array_size(&self.inputs)
            + get_array_size(&self.outputs)
            + get_array_size(&self.witnesses)
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        self.serialize_unsigned(writer)?;
        writer.write_serializable_list(&self.witnesses)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let offset = reader.position();
        let tx_type = reader.read_u8()?;
        if tx_type != INVOCATION_TX_TYPE {
            return Err(IoError::format(
                offset,
                "transaction type",
                format!("expected {INVOCATION_TX_TYPE:#04x}, found {tx_type:#04x}"),
            ));
        }

        let version = reader.read_u8()?;
        let script = reader.read_var_bytes(MAX_SCRIPT_LENGTH)?;
        let gas = if version >= 1 {
            reader.read_serializable()?
        } else {
            Fixed8::ZERO
        };

        Ok(Self {
            version,
            script,
            gas,
            attributes: reader.read_serializable_list(MAX_TRANSACTION_ATTRIBUTES)?,
            inputs: reader.read_serializable_list(MAX_TRANSACTION_IO)?,
            outputs: reader.read_serializable_list(MAX_TRANSACTION_IO)?,
            witnesses: reader.read_serializable_list(MAX_TRANSACTION_IO)?,
        })
    }
}

/// Accumulates an [`InvocationTransaction`].
#[derive(Debug)]
pub struct InvocationTransactionBuilder {
    version: u8,
    script: Vec<u8>,
    gas: Fixed8,
    attributes: Vec<TransactionAttribute>,
    inputs: Vec<TransactionInput>,
    outputs: Vec<TransactionOutput>,
    witnesses: Vec<Witness>,
}

impl Default for InvocationTransactionBuilder {
    fn default() -> Self {
        Self {
            version: CURRENT_TX_VERSION,
            script: Vec::new(),
            gas: Fixed8::ZERO,
            attributes: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            witnesses: Vec::new(),
        }
    }
}

impl InvocationTransactionBuilder {
    /// Overrides the version.
    pub fn version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    /// Sets the invocation script.
    pub fn script(mut self, script: Vec<u8>) -> Self {
        self.script = script;
        self
    }

    /// Sets the GAS consumed by the script.
    pub fn gas(mut self, gas: Fixed8) -> Self {
        self.gas = gas;
        self
    }

    /// Adds one attribute.
    pub fn attribute(self, attribute: TransactionAttribute) -> CoreResult<Self> {
        self.attributes(vec![attribute])
    }

    /// Adds attributes, failing once the attribute limit would be exceeded.
    pub fn attributes(mut self, attributes: Vec<TransactionAttribute>) -> CoreResult<Self> {
        if self.attributes.len() + attributes.len() > MAX_TRANSACTION_ATTRIBUTES {
            return Err(CoreError::validation(format!(
                "a transaction can hold at most {MAX_TRANSACTION_ATTRIBUTES} attributes"
            )));
        }
        self.attributes.extend(attributes);
        Ok(self)
    }

    /// Adds inputs.
    pub fn inputs(mut self, inputs: Vec<TransactionInput>) -> Self {
        self.inputs.extend(inputs);
        self
    }

    /// Adds outputs.
    pub fn outputs(mut self, outputs: Vec<TransactionOutput>) -> Self {
        self.outputs.extend(outputs);
        self
    }

    /// Adds witnesses, keeping the witnesses sorted.
    pub fn witnesses(mut self, witnesses: Vec<Witness>) -> CoreResult<Self> {
        insert_sorted(&mut self.witnesses, witnesses)?;
        Ok(self)
    }

    /// Finishes the transaction.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when no script was set.
    pub fn build(self) -> CoreResult<InvocationTransaction> {
        if self.script.is_empty() {
            return Err(CoreError::validation("an invocation transaction needs a script"));
        }
        Ok(InvocationTransaction {
            version: self.version,
            script: self.script,
            gas: self.gas,
            attributes: self.attributes,
            inputs: self.inputs,
            outputs: self.outputs,
            witnesses: self.witnesses,
        })
    }
}
