// Copyright (C) 2015-2025 The Neo Project.
//
// core.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! The generic transaction aggregate and its builder.

use super::attributes::TransactionAttribute;
use crate::error::{CoreError, CoreResult};
use crate::verifiable::{insert_sorted, Verifiable};
use crate::{Cosigner, UInt160, Witness};
use neo_config::{CURRENT_TX_VERSION, MAX_TRANSACTION_ATTRIBUTES};
use neo_io::serializable::helper::get_array_size;
use neo_io::{BinaryWriter, IoResult, MemoryReader, Serializable};

const MAX_WITNESSES: usize = u16::MAX as usize;

/// A transaction: the aggregate of fee, validity, signer and script data.
///
/// The wire form only carries `version`, `attributes` and `witnesses`; the
/// other fields are kept for callers that fill them from node queries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transaction {
    version: u8,
    nonce: Option<u32>,
    valid_until_block: Option<u32>,
    sender: Option<UInt160>,
    system_fee: Option<i64>,
    network_fee: Option<i64>,
    attributes: Vec<TransactionAttribute>,
    cosigners: Vec<Cosigner>,
    script: Vec<u8>,
    witnesses: Vec<Witness>,
}

impl Transaction {
    /// Starts a builder with the current transaction version.
    pub fn builder() -> TransactionBuilder {
        TransactionBuilder::new()
    }

    /// The transaction version.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Random number making the id unique, if set.
    pub fn nonce(&self) -> Option<u32> {
        self.nonce
    }

    /// Last block height the transaction is valid for, if set.
    pub fn valid_until_block(&self) -> Option<u32> {
        self.valid_until_block
    }

    /// The paying account, if set.
    pub fn sender(&self) -> Option<UInt160> {
        self.sender
    }

    /// System fee in the smallest GAS unit, if set.
    pub fn system_fee(&self) -> Option<i64> {
        self.system_fee
    }

    /// Network fee in the smallest GAS unit, if set.
    pub fn network_fee(&self) -> Option<i64> {
        self.network_fee
    }

    /// The attributes in insertion order.
    pub fn attributes(&self) -> &[TransactionAttribute] {
        &self.attributes
    }

    /// Additional signers.
    pub fn cosigners(&self) -> &[Cosigner] {
        &self.cosigners
    }

    /// The invocation script.
    pub fn script(&self) -> &[u8] {
        &self.script
    }
}

impl Verifiable for Transaction {
    fn serialize_unsigned(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_u8(self.version)?;
        writer.write_serializable_list(&self.attributes)
    }

    fn witnesses(&self) -> &[Witness] {
        &self.witnesses
    }

    fn witnesses_mut(&mut self) -> &mut Vec<Witness> {
        &mut self.witnesses
    }
}

impl Serializable for Transaction {
    fn size(&self) -> usize {
        1 + get_array_size(&self.attributes) + get_array_size(&self.witnesses)
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        self.serialize_unsigned(writer)?;
        writer.write_serializable_list(&self.witnesses)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let version = reader.read_u8()?;
        let attributes = reader.read_serializable_list(MAX_TRANSACTION_ATTRIBUTES)?;
        let witnesses = reader.read_serializable_list(MAX_WITNESSES)?;
        Ok(Self {
            version,
            attributes,
            witnesses,
            ..Default::default()
        })
    }
}

/// Accumulates a [`Transaction`], validating each addition.
#[derive(Debug, Default)]
pub struct TransactionBuilder {
    tx: Transaction,
}

impl TransactionBuilder {
    /// A builder with the current transaction version.
    pub fn new() -> Self {
        Self {
            tx: Transaction {
                version: CURRENT_TX_VERSION,
                ..Default::default()
            },
        }
    }

    /// Overrides the version.
    pub fn version(mut self, version: u8) -> Self {
        self.tx.version = version;
        self
    }

    /// Sets the nonce.
    pub fn nonce(mut self, nonce: u32) -> Self {
        self.tx.nonce = Some(nonce);
        self
    }

    /// Sets the last valid block height.
    pub fn valid_until_block(mut self, height: u32) -> Self {
        self.tx.valid_until_block = Some(height);
        self
    }

    /// Sets the paying account.
    pub fn sender(mut self, sender: UInt160) -> Self {
        self.tx.sender = Some(sender);
        self
    }

    /// Sets the system fee.
    pub fn system_fee(mut self, fee: i64) -> Self {
        self.tx.system_fee = Some(fee);
        self
    }

    /// Sets the network fee.
    pub fn network_fee(mut self, fee: i64) -> Self {
        self.tx.network_fee = Some(fee);
        self
    }

    /// Sets the script.
    pub fn script(mut self, script: Vec<u8>) -> Self {
        self.tx.script = script;
        self
    }

    /// Adds one attribute.
    pub fn attribute(self, attribute: TransactionAttribute) -> CoreResult<Self> {
        self.attributes(vec![attribute])
    }

    /// Adds attributes, failing once the attribute limit would be exceeded.
    pub fn attributes(mut self, attributes: Vec<TransactionAttribute>) -> CoreResult<Self> {
        if self.tx.attributes.len() + attributes.len() > MAX_TRANSACTION_ATTRIBUTES {
            return Err(CoreError::validation(format!(
                "a transaction can hold at most {MAX_TRANSACTION_ATTRIBUTES} attributes"
            )));
        }
        self.tx.attributes.extend(attributes);
        Ok(self)
    }

    /// Adds one cosigner.
    pub fn cosigner(mut self, cosigner: Cosigner) -> Self {
        self.tx.cosigners.push(cosigner);
        self
    }

    /// Adds cosigners.
    pub fn cosigners(mut self, cosigners: Vec<Cosigner>) -> Self {
        self.tx.cosigners.extend(cosigners);
        self
    }

    /// Adds one witness, keeping the witnesses sorted.
    pub fn witness(self, witness: Witness) -> CoreResult<Self> {
        self.witnesses(vec![witness])
    }

    /// Adds witnesses, keeping the witnesses sorted.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when any witness has no script hash.
    pub fn witnesses(mut self, witnesses: Vec<Witness>) -> CoreResult<Self> {
        insert_sorted(&mut self.tx.witnesses, witnesses)?;
        Ok(self)
    }

    /// Finishes the transaction.
    pub fn build(self) -> Transaction {
        self.tx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_io::SerializableExt;

    #[test]
    fn test_build_uses_current_version() {
        let tx = Transaction::builder().build();
        assert_eq!(tx.version(), CURRENT_TX_VERSION);
        assert_eq!(hex::encode(tx.to_array_without_scripts().unwrap()), "0100");
        assert_eq!(hex::encode(tx.to_array().unwrap()), "010000");
    }

    #[test]
    fn test_aggregate_fields_are_kept() {
        let sender = UInt160::from_script(b"sender");
        let tx = Transaction::builder()
            .nonce(7)
            .valid_until_block(1000)
            .sender(sender)
            .system_fee(10)
            .network_fee(20)
            .script(vec![0x61])
            .cosigner(Cosigner::called_by_entry(sender))
            .build();
        assert_eq!(tx.nonce(), Some(7));
        assert_eq!(tx.valid_until_block(), Some(1000));
        assert_eq!(tx.sender(), Some(sender));
        assert_eq!(tx.system_fee(), Some(10));
        assert_eq!(tx.network_fee(), Some(20));
        assert_eq!(tx.script(), &[0x61]);
        assert_eq!(tx.cosigners().len(), 1);
    }

    #[test]
    fn test_attribute_limit() {
        let remarks = (0..MAX_TRANSACTION_ATTRIBUTES)
            .map(|i| TransactionAttribute::remark(vec![i as u8]).unwrap())
            .collect();
        let builder = Transaction::builder().attributes(remarks).unwrap();
        let extra = TransactionAttribute::remark(vec![0xff]).unwrap();
        assert!(matches!(
            builder.attribute(extra),
            Err(CoreError::Validation { .. })
        ));
    }

    #[test]
    fn test_deserialize_full_form() {
        let hash = UInt160::from_script(b"account");
        let tx = Transaction::builder()
            .attribute(TransactionAttribute::script(hash))
            .unwrap()
            .witness(Witness::new(vec![0x40], vec![0x51]))
            .unwrap()
            .build();
        let bytes = tx.to_array().unwrap();
        let decoded = Transaction::from_array(&bytes).unwrap();
        assert_eq!(decoded.attributes(), tx.attributes());
        assert_eq!(decoded.witnesses(), tx.witnesses());
        assert_eq!(decoded.to_array().unwrap(), bytes);
    }

    #[test]
    fn test_deserialize_rejects_trailing_bytes() {
        assert!(Transaction::from_array(&[0x01, 0x00, 0x00, 0x00]).is_err());
    }
}
