// Copyright (C) 2015-2025 The Neo Project.
//
// attributes.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Transaction attributes: a usage tag plus usage-dependent data.

use crate::error::{CoreError, CoreResult};
use crate::UInt160;
use neo_config::{ADDRESS_SIZE, HASH_SIZE};
use neo_io::serializable::helper::get_var_bytes_size;
use neo_io::{BinaryWriter, IoError, IoResult, MemoryReader, Serializable};
use std::fmt;

const MAX_VAR_DATA: usize = u16::MAX as usize;

/// Transaction attribute usages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransactionAttributeUsage {
    /// Hash of a contract (0x00).
    ContractHash,
    /// Public key for ECDH key exchange, even y (0x02).
    Ecdh02,
    /// Public key for ECDH key exchange, odd y (0x03).
    Ecdh03,
    /// Script hash of an additional verifying account (0x20).
    Script,
    /// Vote (0x30).
    Vote,
    /// URL of an external description (0x81).
    DescriptionUrl,
    /// Short description (0x90).
    Description,
    /// Free hash slots `Hash1..Hash15` (0xa1..0xaf). Carries 1..=15.
    Hash(u8),
    /// Free remark slots `Remark..Remark15` (0xf0..0xff). Carries 0..=15.
    Remark(u8),
}

impl TransactionAttributeUsage {
    /// The tag byte written on the wire.
    pub fn to_byte(self) -> u8 {
        match self {
            Self::ContractHash => 0x00,
            Self::Ecdh02 => 0x02,
            Self::Ecdh03 => 0x03,
            Self::Script => 0x20,
            Self::Vote => 0x30,
            Self::DescriptionUrl => 0x81,
            Self::Description => 0x90,
            Self::Hash(n) => 0xa0 | (n & 0x0f),
            Self::Remark(n) => 0xf0 | (n & 0x0f),
        }
    }

    /// Decodes a tag byte.
    pub fn from_byte(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(Self::ContractHash),
            0x02 => Some(Self::Ecdh02),
            0x03 => Some(Self::Ecdh03),
            0x20 => Some(Self::Script),
            0x30 => Some(Self::Vote),
            0x81 => Some(Self::DescriptionUrl),
            0x90 => Some(Self::Description),
            0xa1..=0xaf => Some(Self::Hash(value & 0x0f)),
            0xf0..=0xff => Some(Self::Remark(value & 0x0f)),
            _ => None,
        }
    }

    fn data_encoding(self) -> DataEncoding {
        match self {
            Self::ContractHash | Self::Ecdh02 | Self::Ecdh03 | Self::Vote | Self::Hash(_) => {
                DataEncoding::Fixed(HASH_SIZE)
            }
            Self::Script => DataEncoding::Fixed(ADDRESS_SIZE),
            Self::DescriptionUrl => DataEncoding::ShortPrefixed,
            Self::Description | Self::Remark(_) => DataEncoding::VarBytes,
        }
    }
}

#[derive(Clone, Copy)]
enum DataEncoding {
    Fixed(usize),
    ShortPrefixed,
    VarBytes,
}

/// A `(usage, data)` pair attached to a transaction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TransactionAttribute {
    usage: TransactionAttributeUsage,
    data: Vec<u8>,
}

impl TransactionAttribute {
    /// Creates an attribute, checking the data length against the usage.
    pub fn new(usage: TransactionAttributeUsage, data: Vec<u8>) -> CoreResult<Self> {
        match usage {
            TransactionAttributeUsage::Hash(n) if !(1..=15).contains(&n) => {
                return Err(CoreError::validation(format!("no hash attribute slot {n}")));
            }
            TransactionAttributeUsage::Remark(n) if n > 15 => {
                return Err(CoreError::validation(format!("no remark attribute slot {n}")));
            }
            _ => {}
        }

        let valid = match usage.data_encoding() {
            DataEncoding::Fixed(length) => data.len() == length,
            DataEncoding::ShortPrefixed => data.len() <= u8::MAX as usize,
            DataEncoding::VarBytes => data.len() <= MAX_VAR_DATA,
        };
        if !valid {
            return Err(CoreError::validation(format!(
                "{} bytes is not a valid data length for attribute usage {:#04x}",
                data.len(),
                usage.to_byte()
            )));
        }
        Ok(Self { usage, data })
    }

    /// A `Script` attribute naming the invoking account.
    pub fn script(script_hash: UInt160) -> Self {
        Self {
            usage: TransactionAttributeUsage::Script,
            data: script_hash.to_array().to_vec(),
        }
    }

    /// A `Remark` attribute carrying arbitrary bytes.
    pub fn remark(data: Vec<u8>) -> CoreResult<Self> {
        Self::new(TransactionAttributeUsage::Remark(0), data)
    }

    /// The usage tag.
    pub fn usage(&self) -> TransactionAttributeUsage {
        self.usage
    }

    /// The raw data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl Serializable for TransactionAttribute {
    fn size(&self) -> usize {
        1 + match self.usage.data_encoding() {
            DataEncoding::Fixed(length) => length,
            DataEncoding::ShortPrefixed => 1 + self.data.len(),
            DataEncoding::VarBytes => get_var_bytes_size(&self.data),
        }
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_u8(self.usage.to_byte())?;
        match self.usage.data_encoding() {
            DataEncoding::Fixed(_) => writer.write_bytes(&self.data),
            DataEncoding::ShortPrefixed => {
                writer.write_u8(self.data.len() as u8)?;
                writer.write_bytes(&self.data)
            }
            DataEncoding::VarBytes => writer.write_var_bytes(&self.data),
        }
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let offset = reader.position();
        let tag = reader.read_u8()?;
        let usage = TransactionAttributeUsage::from_byte(tag).ok_or_else(|| {
            IoError::format(offset, "attribute usage", format!("unknown usage {tag:#04x}"))
        })?;

        let data = match usage.data_encoding() {
            DataEncoding::Fixed(length) => reader.read_memory(length)?.to_vec(),
            DataEncoding::ShortPrefixed => {
                let length = reader.read_u8()? as usize;
                reader.read_memory(length)?.to_vec()
            }
            DataEncoding::VarBytes => reader.read_var_bytes(MAX_VAR_DATA)?,
        };

        Ok(Self { usage, data })
    }
}

impl fmt::Display for TransactionAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.usage, hex::encode(&self.data))
    }
}
