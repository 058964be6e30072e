// Copyright (C) 2015-2025 The Neo Project.
//
// fixed8.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Fixed-point amounts with eight decimal places.

use crate::error::{CoreError, CoreResult};
use neo_config::FIXED8_DECIMALS;
use neo_io::{BinaryWriter, IoResult, MemoryReader, Serializable};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

const FIXED8_FACTOR: i64 = 100_000_000;

/// An asset amount stored as `value * 10^8` in a signed 64-bit integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed8(i64);

impl Fixed8 {
    /// Zero.
    pub const ZERO: Fixed8 = Fixed8(0);

    /// Wraps an already-scaled raw value.
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// The scaled integer as written on the wire.
    pub const fn raw(&self) -> i64 {
        self.0
    }

    /// Converts an exact decimal amount.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidData` when the amount has more than eight
    /// decimal places or does not fit in an `i64` after scaling.
    pub fn from_decimal(value: Decimal) -> CoreResult<Self> {
        let value = value.normalize();
        if value.scale() > FIXED8_DECIMALS {
            return Err(CoreError::InvalidData {
                message: format!("amount {value} has more than {FIXED8_DECIMALS} decimals"),
            });
        }

        value
            .checked_mul(Decimal::from(FIXED8_FACTOR))
            .and_then(|scaled| scaled.to_i64())
            .map(Self)
            .ok_or_else(|| CoreError::InvalidData {
                message: format!("amount {value} is out of range"),
            })
    }

    /// The amount as an exact decimal.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, FIXED8_DECIMALS).normalize()
    }
}

impl FromStr for Fixed8 {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())
            .map_err(|e| CoreError::invalid_format(format!("invalid amount '{s}': {e}")))?;
        Self::from_decimal(value)
    }
}

impl TryFrom<Decimal> for Fixed8 {
    type Error = CoreError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl fmt::Display for Fixed8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

impl Serializable for Fixed8 {
    fn size(&self) -> usize {
        8
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_i64(self.0)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self(reader.read_i64()?))
    }
}
