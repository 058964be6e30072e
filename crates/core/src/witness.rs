// Copyright (C) 2015-2025 The Neo Project.
//
// witness.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Witness: an invocation script paired with a verification script.

use crate::UInt160;
use neo_config::MAX_SCRIPT_LENGTH;
use neo_io::serializable::helper::get_var_bytes_size;
use neo_io::{BinaryWriter, IoResult, MemoryReader, Serializable};

/// Proof of authorization attached to a transaction.
///
/// A witness is identified by the script hash of its verification script.
/// Witnesses with an empty verification script (contract-verified
/// accounts) have to be given their script hash explicitly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Witness {
    invocation_script: Vec<u8>,
    verification_script: Vec<u8>,
    script_hash: Option<UInt160>,
}

impl Witness {
    /// Creates a witness, deriving its script hash from a non-empty
    /// verification script.
    pub fn new(invocation_script: Vec<u8>, verification_script: Vec<u8>) -> Self {
        let script_hash =
            (!verification_script.is_empty()).then(|| UInt160::from_script(&verification_script));
        Self {
            invocation_script,
            verification_script,
            script_hash,
        }
    }

    /// Creates a witness with an explicit script hash.
    pub fn with_script_hash(
        invocation_script: Vec<u8>,
        verification_script: Vec<u8>,
        script_hash: UInt160,
    ) -> Self {
        Self {
            invocation_script,
            verification_script,
            script_hash: Some(script_hash),
        }
    }

    /// The script pushing the signature(s).
    pub fn invocation_script(&self) -> &[u8] {
        &self.invocation_script
    }

    /// The script defining the spending condition.
    pub fn verification_script(&self) -> &[u8] {
        &self.verification_script
    }

    /// Identity used to order witnesses, if known.
    pub fn script_hash(&self) -> Option<UInt160> {
        self.script_hash
    }
}

impl Serializable for Witness {
    fn size(&self) -> usize {
        get_var_bytes_size(&self.invocation_script) + get_var_bytes_size(&self.verification_script)
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_var_bytes(&self.invocation_script)?;
        writer.write_var_bytes(&self.verification_script)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let invocation_script = reader.read_var_bytes(MAX_SCRIPT_LENGTH)?;
        let verification_script = reader.read_var_bytes(MAX_SCRIPT_LENGTH)?;
        Ok(Self::new(invocation_script, verification_script))
    }
}
