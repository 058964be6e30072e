// Copyright (C) 2015-2025 The Neo Project.
//
// uint256.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Implementation of `UInt256`, used for transaction ids and asset ids.

use crate::error::{CoreError, CoreResult};
use neo_config::HASH_SIZE;
use neo_cryptography::hash256;
use neo_io::{BinaryWriter, IoResult, MemoryReader, Serializable};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The length of `UInt256` values in bytes.
pub const UINT256_SIZE: usize = HASH_SIZE;

/// Represents a 256-bit unsigned integer.
///
/// Bytes are kept in wire order (little-endian). Display and parsing use
/// the reversed, big-endian hex form the network shows for ids.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct UInt256 {
    data: [u8; UINT256_SIZE],
}

impl UInt256 {
    /// Returns a zero `UInt256`.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Checks if every byte is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|b| *b == 0)
    }

    /// Creates a `UInt256` from raw (little-endian) bytes.
    pub fn from_bytes(value: &[u8]) -> CoreResult<Self> {
        let data: [u8; UINT256_SIZE] = value.try_into().map_err(|_| {
            CoreError::invalid_format(format!(
                "hash must be {} bytes, got {}",
                UINT256_SIZE,
                value.len()
            ))
        })?;
        Ok(Self { data })
    }

    /// Gets the raw (little-endian) byte representation.
    #[must_use]
    pub fn to_array(&self) -> [u8; UINT256_SIZE] {
        self.data
    }

    /// Double SHA-256 of `data`, kept in hash output order.
    #[must_use]
    pub fn hash_of(data: &[u8]) -> Self {
        Self {
            data: hash256(data),
        }
    }

    /// Parses big-endian hex, with or without a `0x` prefix.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if s.len() != UINT256_SIZE * 2 {
            return Err(CoreError::invalid_format(format!(
                "hash hex must be {} characters, got {}",
                UINT256_SIZE * 2,
                s.len()
            )));
        }

        let mut bytes =
            hex::decode(s).map_err(|e| CoreError::invalid_format(format!("invalid hash hex: {e}")))?;
        bytes.reverse();
        Self::from_bytes(&bytes)
    }

    /// Big-endian hex without prefix.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        let mut bytes = self.data;
        bytes.reverse();
        hex::encode(bytes)
    }
}

impl FromStr for UInt256 {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UInt256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

impl fmt::Debug for UInt256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UInt256({})", self.to_hex_string())
    }
}

impl PartialOrd for UInt256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UInt256 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.data.iter().rev().cmp(other.data.iter().rev())
    }
}

impl From<[u8; UINT256_SIZE]> for UInt256 {
    fn from(data: [u8; UINT256_SIZE]) -> Self {
        Self { data }
    }
}

impl Serializable for UInt256 {
    fn size(&self) -> usize {
        UINT256_SIZE
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_bytes(&self.data)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self {
            data: reader.read_array()?,
        })
    }
}

impl Serialize for UInt256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for UInt256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_id_wire_order() {
        let gas = UInt256::parse(neo_config::GAS_ASSET_ID).unwrap();
        assert_eq!(
            hex::encode(gas.to_array()),
            "e72d286979ee6cb1b7e65dfddfb2e384100b8d148e7758de42e4168b71792c60"
        );
        assert_eq!(gas.to_string(), neo_config::GAS_ASSET_ID);
    }

    #[test]
    fn test_hash_of_renders_reversed() {
        let id = UInt256::hash_of(b"");
        let mut raw = hash256(b"");
        assert_eq!(id.to_array(), raw);
        raw.reverse();
        assert_eq!(id.to_string(), hex::encode(raw));
    }

    #[test]
    fn test_parse_errors() {
        assert!(UInt256::parse("00").is_err());
        assert!(UInt256::from_bytes(&[0u8; 31]).is_err());
        assert!(UInt256::zero().is_zero());
    }

    #[test]
    fn test_ordering_is_big_endian() {
        let mut low = [0u8; 32];
        low[0] = 0xff;
        let mut high = [0u8; 32];
        high[31] = 0x01;
        assert!(UInt256::from(low) < UInt256::from(high));
    }
}
