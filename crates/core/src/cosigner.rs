// Copyright (C) 2015-2025 The Neo Project.
//
// cosigner.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! An additional required signer and the scope of its signature.

use crate::{UInt160, WitnessScope};
use neo_io::serializable::helper::{get_array_size, get_var_size};
use neo_io::{BinaryWriter, IoError, IoResult, MemoryReader, Serializable};

/// Size of a compressed public key identifying a contract group.
pub const GROUP_KEY_SIZE: usize = 33;

/// Most entries either allowed list may hold.
pub const MAX_SUBITEMS: usize = 16;

/// Declares an account that must co-sign a transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cosigner {
    /// The signing account.
    pub account: UInt160,
    /// Where the signature may be used.
    pub scopes: WitnessScope,
    /// Contracts allowed under `CustomContracts`.
    pub allowed_contracts: Vec<UInt160>,
    /// Group keys allowed under `CustomGroups`.
    pub allowed_groups: Vec<[u8; GROUP_KEY_SIZE]>,
}

impl Cosigner {
    /// A cosigner for `account` limited to the entry contract.
    pub fn called_by_entry(account: UInt160) -> Self {
        Self {
            account,
            scopes: WitnessScope::CalledByEntry,
            ..Default::default()
        }
    }

    /// A cosigner for `account` valid in every context.
    pub fn global(account: UInt160) -> Self {
        Self {
            account,
            scopes: WitnessScope::Global,
            ..Default::default()
        }
    }
}

impl Serializable for Cosigner {
    fn size(&self) -> usize {
        let mut size = self.account.size() + 1;
        if self.scopes.has_flag(WitnessScope::CustomContracts) {
            size += get_array_size(&self.allowed_contracts);
        }
        if self.scopes.has_flag(WitnessScope::CustomGroups) {
            size += get_var_size(self.allowed_groups.len() as u64)
                + self.allowed_groups.len() * GROUP_KEY_SIZE;
        }
        size
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        if self.allowed_contracts.len() > MAX_SUBITEMS {
            return Err(IoError::invalid_data(
                "allowed contracts",
                format!("{} entries, at most {MAX_SUBITEMS}", self.allowed_contracts.len()),
            ));
        }
        if self.allowed_groups.len() > MAX_SUBITEMS {
            return Err(IoError::invalid_data(
                "allowed groups",
                format!("{} entries, at most {MAX_SUBITEMS}", self.allowed_groups.len()),
            ));
        }
        writer.write_serializable(&self.account)?;
        writer.write_u8(self.scopes.to_byte())?;
        if self.scopes.has_flag(WitnessScope::CustomContracts) {
            writer.write_serializable_list(&self.allowed_contracts)?;
        }
        if self.scopes.has_flag(WitnessScope::CustomGroups) {
            writer.write_var_int(self.allowed_groups.len() as u64)?;
            for group in &self.allowed_groups {
                writer.write_bytes(group)?;
            }
        }
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let account = reader.read_serializable()?;
        let scope_byte = reader.read_u8()?;
        let scopes = WitnessScope::from_byte(scope_byte)
            .ok_or_else(|| IoError::invalid_data("witness scope", format!("{scope_byte:#04x}")))?;

        let allowed_contracts = if scopes.has_flag(WitnessScope::CustomContracts) {
            reader.read_serializable_list(MAX_SUBITEMS)?
        } else {
            Vec::new()
        };

        let allowed_groups = if scopes.has_flag(WitnessScope::CustomGroups) {
            let count = reader.read_var_int(MAX_SUBITEMS as u64)? as usize;
            let mut groups = Vec::with_capacity(count);
            for _ in 0..count {
                groups.push(reader.read_array::<GROUP_KEY_SIZE>()?);
            }
            groups
        } else {
            Vec::new()
        };

        Ok(Self {
            account,
            scopes,
            allowed_contracts,
            allowed_groups,
        })
    }
}
