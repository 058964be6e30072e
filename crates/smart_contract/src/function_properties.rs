// Copyright (C) 2015-2025 The Neo Project.
//
// function_properties.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Entry point metadata of a contract.
//!
//! The three capability booleans travel as one pushed integer. The
//! parameter type list is the operand of a single data push, so the
//! metadata stays valid script bytecode.

use crate::error::{ContractError, ContractResult};
use neo_vm::{ContractParameterType, ScriptBuilder, ScriptReader};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Flag bit: the contract uses storage.
pub const NEEDS_STORAGE: u8 = 1 << 0;
/// Flag bit: the contract performs dynamic invocation.
pub const NEEDS_DYNAMIC_INVOKE: u8 = 1 << 1;
/// Flag bit: the contract accepts assets.
pub const IS_PAYABLE: u8 = 1 << 2;

/// Packs the capability booleans into the flags integer. Unused bits are zero.
pub fn pack_flags(needs_storage: bool, needs_dynamic_invoke: bool, is_payable: bool) -> u8 {
    let mut flags = 0;
    if needs_storage {
        flags |= NEEDS_STORAGE;
    }
    if needs_dynamic_invoke {
        flags |= NEEDS_DYNAMIC_INVOKE;
    }
    if is_payable {
        flags |= IS_PAYABLE;
    }
    flags
}

/// Inverse of [`pack_flags`] for the storage bit.
pub fn unpack_needs_storage(flags: u8) -> bool {
    flags & NEEDS_STORAGE != 0
}

pub fn unpack_needs_dynamic_invoke(flags: u8) -> bool {
    flags & NEEDS_DYNAMIC_INVOKE != 0
}

pub fn unpack_is_payable(flags: u8) -> bool {
    flags & IS_PAYABLE != 0
}

/// Parameter types, return type and capabilities of a contract's entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractFunctionProperties {
    pub parameter_types: Vec<ContractParameterType>,
    pub return_type: ContractParameterType,
    pub needs_storage: bool,
    pub needs_dynamic_invoke: bool,
    pub is_payable: bool,
}

impl ContractFunctionProperties {
    pub fn new(
        parameter_types: Vec<ContractParameterType>,
        return_type: ContractParameterType,
        needs_storage: bool,
        needs_dynamic_invoke: bool,
        is_payable: bool,
    ) -> Self {
        Self {
            parameter_types,
            return_type,
            needs_storage,
            needs_dynamic_invoke,
            is_payable,
        }
    }

    /// The packed capability flags.
    pub fn flags(&self) -> u8 {
        pack_flags(self.needs_storage, self.needs_dynamic_invoke, self.is_payable)
    }

    /// Pushes the flags, the return type tag and the parameter type list.
    pub fn write_to(&self, builder: &mut ScriptBuilder) -> ContractResult<()> {
        let tags: Vec<u8> = self
            .parameter_types
            .iter()
            .map(|ty| ty.to_byte())
            .collect();
        builder
            .push_integer(self.flags())
            .push_integer(self.return_type.to_byte());
        builder.push_data(&tags)?;
        Ok(())
    }

    /// Reads back what [`Self::write_to`] pushed.
    ///
    /// Flag bits outside the three known capabilities are ignored.
    pub fn read_from(reader: &mut ScriptReader<'_>) -> ContractResult<Self> {
        let flags = low_byte(&reader.read_push_integer()?);

        let offset = reader.position();
        let return_tag = reader.read_push_integer()?.to_u8().ok_or_else(|| {
            ContractError::malformed(format!("return type at offset {offset} is not a type tag"))
        })?;
        let return_type = parameter_type(return_tag)?;

        let parameter_types = reader
            .read_push_data()?
            .into_iter()
            .map(parameter_type)
            .collect::<ContractResult<Vec<_>>>()?;

        Ok(Self {
            parameter_types,
            return_type,
            needs_storage: unpack_needs_storage(flags),
            needs_dynamic_invoke: unpack_needs_dynamic_invoke(flags),
            is_payable: unpack_is_payable(flags),
        })
    }

    /// The pushes of [`Self::write_to`] as a standalone script.
    pub fn to_bytes(&self) -> ContractResult<Vec<u8>> {
        let mut builder = ScriptBuilder::new();
        self.write_to(&mut builder)?;
        Ok(builder.into_bytes())
    }

    /// Decodes a standalone script produced by [`Self::to_bytes`].
    pub fn from_bytes(script: &[u8]) -> ContractResult<Self> {
        let mut reader = ScriptReader::new(script);
        let properties = Self::read_from(&mut reader)?;
        if !reader.is_at_end() {
            return Err(ContractError::malformed(format!(
                "unexpected data at offset {}",
                reader.position()
            )));
        }
        Ok(properties)
    }
}

fn parameter_type(tag: u8) -> ContractResult<ContractParameterType> {
    ContractParameterType::from_byte(tag).ok_or(ContractError::UnknownParameterType(tag))
}

// Lowest byte of the two's complement form, so wider flag values keep
// their known bits.
fn low_byte(value: &BigInt) -> u8 {
    value.to_signed_bytes_le().first().copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pack_flags() {
        assert_eq!(pack_flags(false, false, false), 0);
        assert_eq!(pack_flags(true, false, false), 1);
        assert_eq!(pack_flags(false, true, false), 2);
        assert_eq!(pack_flags(false, false, true), 4);
        assert_eq!(pack_flags(true, true, true), 7);
    }

    #[test]
    fn test_unpack_ignores_unknown_bits() {
        let flags = 0b1111_1010;
        assert!(!unpack_needs_storage(flags));
        assert!(unpack_needs_dynamic_invoke(flags));
        assert!(!unpack_is_payable(flags));
    }

    #[test]
    fn test_serialized_layout() {
        let properties = ContractFunctionProperties::new(
            vec![ContractParameterType::String, ContractParameterType::Array],
            ContractParameterType::ByteArray,
            true,
            true,
            true,
        );
        assert_eq!(properties.to_bytes().unwrap(), vec![0x57, 0x55, 0x02, 0x07, 0x10]);
    }

    #[test]
    fn test_void_return_and_no_parameters() {
        let properties = ContractFunctionProperties::new(
            Vec::new(),
            ContractParameterType::Void,
            false,
            false,
            false,
        );
        let bytes = properties.to_bytes().unwrap();
        assert_eq!(bytes, vec![0x00, 0x02, 0xff, 0x00, 0x00]);
        assert_eq!(ContractFunctionProperties::from_bytes(&bytes).unwrap(), properties);
    }

    #[test]
    fn test_wide_flags_are_tolerated() {
        let mut builder = ScriptBuilder::new();
        builder.push_integer(0x1_0005i64).push_integer(0x05);
        builder.push_data(&[]).unwrap();
        let properties = ContractFunctionProperties::from_bytes(&builder.to_bytes()).unwrap();
        assert!(properties.needs_storage);
        assert!(!properties.needs_dynamic_invoke);
        assert!(properties.is_payable);
    }

    #[test]
    fn test_unknown_type_tag() {
        assert_eq!(
            ContractFunctionProperties::from_bytes(&[0x51, 0x58, 0x00]),
            Err(ContractError::UnknownParameterType(0x08))
        );
        assert_eq!(
            ContractFunctionProperties::from_bytes(&[0x51, 0x55, 0x01, 0x09]),
            Err(ContractError::UnknownParameterType(0x09))
        );
    }

    #[test]
    fn test_trailing_data_is_rejected() {
        assert!(matches!(
            ContractFunctionProperties::from_bytes(&[0x51, 0x55, 0x00, 0x61]),
            Err(ContractError::MalformedScript { .. })
        ));
    }

    fn parameter_type_strategy() -> impl Strategy<Value = ContractParameterType> {
        prop::sample::select(vec![
            ContractParameterType::Signature,
            ContractParameterType::Boolean,
            ContractParameterType::Integer,
            ContractParameterType::Hash160,
            ContractParameterType::Hash256,
            ContractParameterType::ByteArray,
            ContractParameterType::PublicKey,
            ContractParameterType::String,
            ContractParameterType::Array,
            ContractParameterType::InteropInterface,
            ContractParameterType::Void,
        ])
    }

    proptest! {
        #[test]
        fn prop_properties_round_trip(
            parameter_types in prop::collection::vec(parameter_type_strategy(), 0..300),
            return_type in parameter_type_strategy(),
            needs_storage in any::<bool>(),
            needs_dynamic_invoke in any::<bool>(),
            is_payable in any::<bool>(),
        ) {
            let properties = ContractFunctionProperties::new(
                parameter_types,
                return_type,
                needs_storage,
                needs_dynamic_invoke,
                is_payable,
            );
            let bytes = properties.to_bytes().unwrap();
            prop_assert_eq!(ContractFunctionProperties::from_bytes(&bytes).unwrap(), properties);
        }

        #[test]
        fn prop_unpack_inverts_pack(storage in any::<bool>(), dynamic in any::<bool>(), payable in any::<bool>(), high in 0u8..32) {
            let flags = pack_flags(storage, dynamic, payable) | (high << 3);
            prop_assert_eq!(unpack_needs_storage(flags), storage);
            prop_assert_eq!(unpack_needs_dynamic_invoke(flags), dynamic);
            prop_assert_eq!(unpack_is_payable(flags), payable);
        }
    }
}
