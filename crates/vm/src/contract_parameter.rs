// Copyright (C) 2015-2025 The Neo Project.
//
// contract_parameter.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Contract parameters and their type tags.

use neo_core::{CoreResult, UInt160, UInt256};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type tags of contract parameters.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractParameterType {
    Signature = 0x00,
    Boolean = 0x01,
    Integer = 0x02,
    Hash160 = 0x03,
    Hash256 = 0x04,
    ByteArray = 0x05,
    PublicKey = 0x06,
    String = 0x07,
    Array = 0x10,
    InteropInterface = 0xf0,
    Void = 0xff,
}

impl ContractParameterType {
    /// Decodes a type tag.
    pub fn from_byte(value: u8) -> Option<Self> {
        let ty = match value {
            0x00 => Self::Signature,
            0x01 => Self::Boolean,
            0x02 => Self::Integer,
            0x03 => Self::Hash160,
            0x04 => Self::Hash256,
            0x05 => Self::ByteArray,
            0x06 => Self::PublicKey,
            0x07 => Self::String,
            0x10 => Self::Array,
            0xf0 => Self::InteropInterface,
            0xff => Self::Void,
            _ => return None,
        };
        Some(ty)
    }

    /// The tag byte.
    pub fn to_byte(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for ContractParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A value passed to a contract.
///
/// Closed over the kinds a script can push; arrays nest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractParameter {
    Signature(Vec<u8>),
    Boolean(bool),
    Integer(BigInt),
    Hash160(UInt160),
    Hash256(UInt256),
    ByteArray(Vec<u8>),
    PublicKey(Vec<u8>),
    String(String),
    Array(Vec<ContractParameter>),
}

impl ContractParameter {
    /// The type tag of this value.
    pub fn param_type(&self) -> ContractParameterType {
        match self {
            Self::Signature(_) => ContractParameterType::Signature,
            Self::Boolean(_) => ContractParameterType::Boolean,
            Self::Integer(_) => ContractParameterType::Integer,
            Self::Hash160(_) => ContractParameterType::Hash160,
            Self::Hash256(_) => ContractParameterType::Hash256,
            Self::ByteArray(_) => ContractParameterType::ByteArray,
            Self::PublicKey(_) => ContractParameterType::PublicKey,
            Self::String(_) => ContractParameterType::String,
            Self::Array(_) => ContractParameterType::Array,
        }
    }

    /// A string parameter.
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// A byte array parameter.
    pub fn byte_array(value: impl Into<Vec<u8>>) -> Self {
        Self::ByteArray(value.into())
    }

    /// A byte array parameter from hex.
    pub fn byte_array_from_hex(value: &str) -> CoreResult<Self> {
        let bytes = hex::decode(value.strip_prefix("0x").unwrap_or(value)).map_err(|e| {
            neo_core::CoreError::invalid_format(format!("invalid hex parameter: {e}"))
        })?;
        Ok(Self::ByteArray(bytes))
    }

    /// A byte array holding the script hash of `address`, as contracts
    /// expect account arguments.
    pub fn byte_array_from_address(address: &str) -> CoreResult<Self> {
        Ok(Self::ByteArray(UInt160::from_address(address)?.to_array().to_vec()))
    }

    /// An integer parameter.
    pub fn integer(value: impl Into<BigInt>) -> Self {
        Self::Integer(value.into())
    }

    /// An integer parameter from decimal text.
    pub fn integer_from_str(value: &str) -> CoreResult<Self> {
        BigInt::from_str(value)
            .map(Self::Integer)
            .map_err(|e| neo_core::CoreError::invalid_format(format!("invalid integer: {e}")))
    }

    /// A boolean parameter.
    pub fn boolean(value: bool) -> Self {
        Self::Boolean(value)
    }

    /// An array parameter.
    pub fn array(items: impl IntoIterator<Item = ContractParameter>) -> Self {
        Self::Array(items.into_iter().collect())
    }
}

impl From<&str> for ContractParameter {
    fn from(value: &str) -> Self {
        Self::string(value)
    }
}

impl From<bool> for ContractParameter {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for ContractParameter {
    fn from(value: i64) -> Self {
        Self::integer(value)
    }
}

impl From<UInt160> for ContractParameter {
    fn from(value: UInt160) -> Self {
        Self::Hash160(value)
    }
}
