// Copyright (C) 2015-2025 The Neo Project.
//
// input.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Transaction inputs and the unspent outputs they are selected from.

use crate::error::{CoreError, CoreResult};
use crate::{Fixed8, UInt256};
use rust_decimal::Decimal;
use neo_io::{BinaryWriter, IoResult, MemoryReader, Serializable};
use std::str::FromStr;

/// A reference to an output of a previous transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransactionInput {
    /// Id of the transaction holding the output.
    pub prev_hash: UInt256,
    /// Position of the output in that transaction.
    pub prev_index: u16,
}

impl TransactionInput {
    /// Creates an input from a transaction id and output index.
    pub fn new(prev_hash: UInt256, prev_index: u16) -> Self {
        Self {
            prev_hash,
            prev_index,
        }
    }
}

impl Serializable for TransactionInput {
    fn size(&self) -> usize {
        self.prev_hash.size() + 2
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_serializable(&self.prev_hash)?;
        writer.write_u16(self.prev_index)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self {
            prev_hash: reader.read_serializable()?,
            prev_index: reader.read_u16()?,
        })
    }
}

/// An unspent output owned by an account, used as a selection candidate.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Utxo {
    /// Id of the transaction holding the output.
    pub tx_id: UInt256,
    /// Position of the output in that transaction.
    pub index: u16,
    /// Asset held by the output.
    pub asset_id: UInt256,
    /// Spendable amount.
    pub value: Decimal,
}

impl Utxo {
    /// Creates a candidate from its display-form id and decimal amount.
    ///
    /// # Errors
    ///
    /// `CoreError::Validation` unless the amount is positive and fits a
    /// [`Fixed8`].
    pub fn new(tx_id: &str, index: u16, asset_id: &str, value: &str) -> CoreResult<Self> {
        Ok(Self {
            tx_id: UInt256::parse(tx_id)?,
            index,
            asset_id: UInt256::parse(asset_id)?,
            value: positive_amount("utxo", parse_amount(value)?)?,
        })
    }

    /// The input that spends this output.
    pub fn to_input(&self) -> TransactionInput {
        TransactionInput::new(self.tx_id, self.index)
    }
}

pub(crate) fn parse_amount(value: &str) -> CoreResult<Decimal> {
    Decimal::from_str(value.trim()).map_err(|e| {
        crate::CoreError::invalid_format(format!("invalid amount '{value}': {e}"))
    })
}

/// Checks that `value` is a positive amount representable as [`Fixed8`].
pub(crate) fn positive_amount(what: &str, value: Decimal) -> CoreResult<Decimal> {
    Fixed8::from_decimal(value).map_err(|e| CoreError::validation(format!("{what} value: {e}")))?;
    if value <= Decimal::ZERO {
        return Err(CoreError::validation(format!(
            "{what} value must be positive, got {value}"
        )));
    }
    Ok(value.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_io::SerializableExt;

    #[test]
    fn test_input_layout() {
        let utxo = Utxo::new(
            "9f1b9a6f3593ff546a9dab147ba8ad520f7b6233bb0f8e75e05ad23d57ebd76e",
            0,
            neo_config::GAS_ASSET_ID,
            "96",
        )
        .unwrap();
        let bytes = utxo.to_input().to_array().unwrap();
        assert_eq!(
            hex::encode(bytes),
            "6ed7eb573dd25ae0758e0fbb33627b0f52ada87b14ab9d6a54ff93356f9a1b9f0000"
        );
    }

    #[test]
    fn test_short_id_is_rejected() {
        assert!(Utxo::new("9f1b9a6f", 0, neo_config::GAS_ASSET_ID, "96").is_err());
    }

    #[test]
    fn test_amount_parsing() {
        assert!(Utxo::new(
            "0000000000000000000000000000000000000000000000000000000000000000",
            0,
            neo_config::NEO_ASSET_ID,
            "many"
        )
        .is_err());
    }

    #[test]
    fn test_utxo_value_must_be_positive_and_in_range() {
        let id = "0000000000000000000000000000000000000000000000000000000000000000";
        for value in ["0", "-1", "79228162514264337593543950335", "0.000000001"] {
            assert!(matches!(
                Utxo::new(id, 0, neo_config::GAS_ASSET_ID, value),
                Err(CoreError::Validation { .. })
            ));
        }
        assert!(Utxo::new(id, 0, neo_config::GAS_ASSET_ID, "92233720368.54775807").is_ok());
    }
}
