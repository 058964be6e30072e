// Copyright (C) 2015-2025 The Neo Project.
//
// output.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Transaction outputs.

use super::input::{parse_amount, positive_amount};
use crate::error::CoreResult;
use crate::{Fixed8, UInt160, UInt256};
use neo_io::{BinaryWriter, IoError, IoResult, MemoryReader, Serializable};
use rust_decimal::Decimal;
use std::fmt;

/// Transfers `value` of `asset_id` to the account identified by `script_hash`.
///
/// Values compare numerically, so `"15983.0"` and `"15983"` are the same
/// output.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TransactionOutput {
    asset_id: UInt256,
    value: Decimal,
    script_hash: UInt160,
}

impl TransactionOutput {
    /// Creates an output from a display-form asset id, a decimal amount and
    /// a recipient address.
    pub fn new(asset_id: &str, value: &str, address: &str) -> CoreResult<Self> {
        Self::from_parts(
            UInt256::parse(asset_id)?,
            parse_amount(value)?,
            UInt160::from_address(address)?,
        )
    }

    /// Creates an output from already-parsed parts.
    ///
    /// # Errors
    ///
    /// `CoreError::Validation` unless `value` is positive and fits a
    /// [`Fixed8`].
    pub fn from_parts(asset_id: UInt256, value: Decimal, script_hash: UInt160) -> CoreResult<Self> {
        Ok(Self {
            asset_id,
            value: positive_amount("output", value)?,
            script_hash,
        })
    }

    /// The transferred asset.
    pub fn asset_id(&self) -> UInt256 {
        self.asset_id
    }

    /// The transferred amount.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// The recipient's script hash.
    pub fn script_hash(&self) -> UInt160 {
        self.script_hash
    }

    /// The recipient's address.
    pub fn address(&self) -> String {
        self.script_hash.to_address()
    }
}

impl Serializable for TransactionOutput {
    fn size(&self) -> usize {
        self.asset_id.size() + 8 + self.script_hash.size()
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        let value = Fixed8::from_decimal(self.value)
            .map_err(|e| IoError::invalid_data("output value", e))?;
        writer.write_serializable(&self.asset_id)?;
        writer.write_serializable(&value)?;
        writer.write_serializable(&self.script_hash)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let asset_id = reader.read_serializable()?;
        let value: Fixed8 = reader.read_serializable()?;
        if value <= Fixed8::ZERO {
            return Err(IoError::invalid_data("output value", value));
        }
        let script_hash = reader.read_serializable()?;
        Ok(Self {
            asset_id,
            value: value.to_decimal(),
            script_hash,
        })
    }
}

impl fmt::Display for TransactionOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} to {}", self.value, self.asset_id, self.address())
    }
}
