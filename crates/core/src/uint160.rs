// Copyright (C) 2015-2025 The Neo Project.
//
// uint160.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Implementation of `UInt160`, the 20-byte script hash.
//!
//! A script hash is `RIPEMD160(SHA256(script))`. It is stored in the byte
//! order the hash function produced (little-endian as a number), rendered
//! as big-endian hex, and converts losslessly to and from a base58check
//! address.

use crate::error::{CoreError, CoreResult};
use neo_config::{ADDRESS_PAYLOAD_SIZE, ADDRESS_SIZE, ADDRESS_VERSION};
use neo_cryptography::{base58_check_decode, base58_check_encode, hash160};
use neo_io::{BinaryWriter, IoResult, MemoryReader, Serializable};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The length of `UInt160` values in bytes.
pub const UINT160_SIZE: usize = ADDRESS_SIZE;

/// Represents a 160-bit unsigned integer.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct UInt160 {
    /// First 8 bytes of the `UInt160` (least significant).
    value1: u64,
    /// Next 8 bytes of the `UInt160`.
    value2: u64,
    /// Last 4 bytes of the `UInt160` (most significant).
    value3: u32,
}

impl UInt160 {
    /// Alias for the byte length.
    pub const LENGTH: usize = UINT160_SIZE;

    /// Returns a zero `UInt160`.
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Checks if this `UInt160` is zero.
    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.value1 == 0 && self.value2 == 0 && self.value3 == 0
    }

    /// Creates a `UInt160` from its raw (little-endian) bytes.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidFormat` if the input length is not exactly 20 bytes.
    pub fn from_bytes(value: &[u8]) -> CoreResult<Self> {
        let array: [u8; UINT160_SIZE] = value.try_into().map_err(|_| {
            CoreError::invalid_format(format!(
                "script hash must be {} bytes, got {}",
                UINT160_SIZE,
                value.len()
            ))
        })?;
        Ok(Self::from(array))
    }

    /// Gets the raw (little-endian) byte representation.
    #[inline]
    #[must_use]
    pub fn to_array(&self) -> [u8; UINT160_SIZE] {
        let mut result = [0u8; UINT160_SIZE];
        result[0..8].copy_from_slice(&self.value1.to_le_bytes());
        result[8..16].copy_from_slice(&self.value2.to_le_bytes());
        result[16..UINT160_SIZE].copy_from_slice(&self.value3.to_le_bytes());
        result
    }

    /// Parses big-endian hex, with or without a `0x` prefix.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if s.len() != UINT160_SIZE * 2 {
            return Err(CoreError::invalid_format(format!(
                "script hash hex must be {} characters, got {}",
                UINT160_SIZE * 2,
                s.len()
            )));
        }

        let mut bytes = hex::decode(s)
            .map_err(|e| CoreError::invalid_format(format!("invalid script hash hex: {e}")))?;
        bytes.reverse();
        Self::from_bytes(&bytes)
    }

    /// Big-endian hex without prefix.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        let mut bytes = self.to_array();
        bytes.reverse();
        hex::encode(bytes)
    }

    /// Creates a `UInt160` from a script by computing its hash.
    #[must_use]
    pub fn from_script(script: &[u8]) -> Self {
        Self::from(hash160(script))
    }

    /// Converts this script hash to an address string.
    #[must_use]
    pub fn to_address(&self) -> String {
        self.to_address_with_version(ADDRESS_VERSION)
    }

    /// Converts this script hash to an address with an explicit version byte.
    #[must_use]
    pub fn to_address_with_version(&self, version: u8) -> String {
        let mut data = Vec::with_capacity(1 + UINT160_SIZE);
        data.push(version);
        data.extend_from_slice(&self.to_array());
        base58_check_encode(&data)
    }

    /// Parses an address string to a `UInt160`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidFormat` if the address is not valid Base58,
    /// has an incorrect length, has an invalid version byte, or has an invalid checksum.
    pub fn from_address(address: &str) -> CoreResult<Self> {
        let payload = base58_check_decode(address)
            .map_err(|e| CoreError::invalid_format(format!("invalid address {address}: {e}")))?;

        if payload.len() != ADDRESS_PAYLOAD_SIZE - 4 {
            return Err(CoreError::invalid_format("Invalid address length"));
        }

        if payload[0] != ADDRESS_VERSION {
            return Err(CoreError::invalid_format(format!(
                "Invalid address version {:#04x}",
                payload[0]
            )));
        }

        Self::from_bytes(&payload[1..])
    }
}

impl FromStr for UInt160 {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

impl fmt::Debug for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UInt160({})", self.to_hex_string())
    }
}

impl PartialOrd for UInt160 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Numeric order of the big-endian value, which is also the order of the
/// rendered hex strings.
impl Ord for UInt160 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value3
            .cmp(&other.value3)
            .then_with(|| self.value2.cmp(&other.value2))
            .then_with(|| self.value1.cmp(&other.value1))
    }
}

impl From<[u8; UINT160_SIZE]> for UInt160 {
    fn from(data: [u8; UINT160_SIZE]) -> Self {
        let mut value1_bytes = [0u8; 8];
        let mut value2_bytes = [0u8; 8];
        let mut value3_bytes = [0u8; 4];

        value1_bytes.copy_from_slice(&data[0..8]);
        value2_bytes.copy_from_slice(&data[8..16]);
        value3_bytes.copy_from_slice(&data[16..UINT160_SIZE]);

        Self {
            value1: u64::from_le_bytes(value1_bytes),
            value2: u64::from_le_bytes(value2_bytes),
            value3: u32::from_le_bytes(value3_bytes),
        }
    }
}

impl TryFrom<&[u8]> for UInt160 {
    type Error = CoreError;

    fn try_from(data: &[u8]) -> std::result::Result<Self, Self::Error> {
        Self::from_bytes(data)
    }
}

impl Serializable for UInt160 {
    fn size(&self) -> usize {
        UINT160_SIZE
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_bytes(&self.to_array())
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self::from(reader.read_array::<UINT160_SIZE>()?))
    }
}

impl Serialize for UInt160 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for UInt160 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ACCOUNT_HASH_LE: &str = "23ba2703c53263e8d6e522dc32203339dcd8eee9";
    const ACCOUNT_ADDRESS: &str = "AK2nJJpJr6o664CWJKi1QRXjqeic2zRp8y";

    #[test]
    fn test_parse_is_big_endian() {
        let hash = UInt160::parse("1a70eac53f5882e40dd90f55463cce31a9f72cd4").unwrap();
        assert_eq!(
            hex::encode(hash.to_array()),
            "d42cf7a931ce3c46550fd90de482583fc5ea701a"
        );
        assert_eq!(hash.to_string(), "1a70eac53f5882e40dd90f55463cce31a9f72cd4");
        assert_eq!(
            UInt160::parse("0x1a70eac53f5882e40dd90f55463cce31a9f72cd4").unwrap(),
            hash
        );
    }

    #[test]
    fn test_address_round_trip() {
        let hash = UInt160::from_bytes(&hex::decode(ACCOUNT_HASH_LE).unwrap()).unwrap();
        assert_eq!(hash.to_address(), ACCOUNT_ADDRESS);
        assert_eq!(UInt160::from_address(ACCOUNT_ADDRESS).unwrap(), hash);
    }

    #[test]
    fn test_from_address_rejects_wrong_version() {
        let hash = UInt160::from_script(b"\x51");
        let foreign = hash.to_address_with_version(0x35);
        assert!(matches!(
            UInt160::from_address(&foreign),
            Err(CoreError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_from_script() {
        let script =
            hex::decode("21031a6c6fbbdf02ca351745fa86b9ba5a9452d785ac4f7fc2b7548ca2a46c4fcf4aac")
                .unwrap();
        let hash = UInt160::from_script(&script);
        assert_eq!(hex::encode(hash.to_array()), ACCOUNT_HASH_LE);
    }

    #[test]
    fn test_ordering_follows_big_endian_value() {
        let low = UInt160::parse("00000000000000000000000000000000000000ff").unwrap();
        let high = UInt160::parse("0100000000000000000000000000000000000000").unwrap();
        assert!(low < high);
    }

    #[test]
    fn test_invalid_lengths() {
        assert!(UInt160::from_bytes(&[0u8; 19]).is_err());
        assert!(UInt160::parse("abcd").is_err());
        assert!(UInt160::parse("zz70eac53f5882e40dd90f55463cce31a9f72cd4").is_err());
    }

    #[test]
    fn test_serde_uses_hex() {
        let hash = UInt160::parse("1a70eac53f5882e40dd90f55463cce31a9f72cd4").unwrap();
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, "\"1a70eac53f5882e40dd90f55463cce31a9f72cd4\"");
        let back: UInt160 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);
    }

    proptest! {
        #[test]
        fn test_roundtrip_from_bytes(bytes in any::<[u8; UINT160_SIZE]>()) {
            let uint = UInt160::from_bytes(&bytes).unwrap();
            prop_assert_eq!(bytes, uint.to_array());
        }

        #[test]
        fn test_ordering_matches_hex_ordering(
            a in any::<[u8; UINT160_SIZE]>(),
            b in any::<[u8; UINT160_SIZE]>()
        ) {
            let a = UInt160::from(a);
            let b = UInt160::from(b);
            prop_assert_eq!(a.cmp(&b), a.to_hex_string().cmp(&b.to_hex_string()));
        }

        #[test]
        fn test_address_roundtrip(bytes in any::<[u8; UINT160_SIZE]>()) {
            let uint = UInt160::from(bytes);
            prop_assert_eq!(UInt160::from_address(&uint.to_address()).unwrap(), uint);
        }
    }
}
