// Copyright (C) 2015-2025 The Neo Project.
//
// script_builder.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Script builder module for the Neo Virtual Machine.
//!
//! Assembles invocation and deployment scripts. Every push uses the
//! shortest encoding, which [`crate::ScriptReader`] inverts.

use crate::contract_parameter::ContractParameter;
use crate::error::{VmError, VmResult};
use crate::op_code::OpCode;
use neo_config::MAX_PUSH_DATA_SIZE;
use neo_core::UInt160;
use num_bigint::BigInt;
use num_traits::ToPrimitive;

const MAX_SYSCALL_NAME: usize = 252;

/// Helps construct VM scripts programmatically.
#[derive(Debug, Default, Clone)]
pub struct ScriptBuilder {
    script: Vec<u8>,
}

impl ScriptBuilder {
    /// Creates a new script builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bytes emitted so far.
    pub fn len(&self) -> usize {
        self.script.len()
    }

    /// Whether nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    /// Emits an opcode to the script.
    pub fn emit(&mut self, op: OpCode) -> &mut Self {
        self.script.push(op as u8);
        self
    }

    /// Emits raw bytes to the script.
    pub fn emit_raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.script.extend_from_slice(bytes);
        self
    }

    /// Pushes an integer using the shortest encoding: `PUSHM1`, `PUSH0`,
    /// `PUSH1..PUSH16`, otherwise its minimal little-endian two's
    /// complement bytes.
    pub fn push_integer(&mut self, value: impl Into<BigInt>) -> &mut Self {
        let value = value.into();
        match value.to_i64() {
            Some(-1) => self.emit(OpCode::PUSHM1),
            Some(0) => self.emit(OpCode::PUSH0),
            Some(n @ 1..=16) => match OpCode::push_small(n as u8) {
                Some(op) => self.emit(op),
                None => self.write_data(&value.to_signed_bytes_le()),
            },
            _ => self.write_data(&value.to_signed_bytes_le()),
        }
    }

    /// Pushes `data` behind the smallest fitting length marker.
    ///
    /// # Errors
    ///
    /// Returns `VmError::DataTooLarge` when `data` is longer than a single
    /// push may be.
    pub fn push_data(&mut self, data: &[u8]) -> VmResult<&mut Self> {
        if data.len() > MAX_PUSH_DATA_SIZE {
            return Err(VmError::DataTooLarge {
                length: data.len(),
                max: MAX_PUSH_DATA_SIZE,
            });
        }
        Ok(self.write_data(data))
    }

    /// Pushes a boolean as `PUSH1` or `PUSH0`.
    pub fn push_boolean(&mut self, value: bool) -> &mut Self {
        if value {
            self.emit(OpCode::PUSH1)
        } else {
            self.emit(OpCode::PUSH0)
        }
    }

    /// Pushes the UTF-8 bytes of a string.
    pub fn push_string(&mut self, value: &str) -> VmResult<&mut Self> {
        self.push_data(value.as_bytes())
    }

    /// Pushes one contract parameter.
    ///
    /// Arrays push their items back to front, then the item count, then
    /// `PACK`, so the callee unpacks them in declaration order.
    pub fn push_parameter(&mut self, param: &ContractParameter) -> VmResult<&mut Self> {
        match param {
            ContractParameter::Signature(bytes)
            | ContractParameter::ByteArray(bytes)
            | ContractParameter::PublicKey(bytes) => self.push_data(bytes)?,
            ContractParameter::Boolean(value) => self.push_boolean(*value),
            ContractParameter::Integer(value) => self.push_integer(value.clone()),
            ContractParameter::Hash160(hash) => self.push_data(&hash.to_array())?,
            ContractParameter::Hash256(hash) => self.push_data(&hash.to_array())?,
            ContractParameter::String(value) => self.push_string(value)?,
            ContractParameter::Array(items) => {
                for item in items.iter().rev() {
                    self.push_parameter(item)?;
                }
                self.push_integer(items.len() as i64);
                self.emit_pack()
            }
        };
        Ok(self)
    }

    /// Emits a call of `script_hash` with positional `params`.
    ///
    /// The parameters are pushed in reverse without a count; the callee
    /// pops them in declaration order.
    pub fn emit_app_call(
        &mut self,
        script_hash: &UInt160,
        params: &[ContractParameter],
    ) -> VmResult<&mut Self> {
        for param in params.iter().rev() {
            self.push_parameter(param)?;
        }
        self.emit(OpCode::APPCALL);
        Ok(self.emit_raw(&script_hash.to_array()))
    }

    /// Emits a syscall operation.
    pub fn emit_syscall(&mut self, api: &str) -> VmResult<&mut Self> {
        let api_bytes = api.as_bytes();
        if api_bytes.is_empty() || api_bytes.len() > MAX_SYSCALL_NAME {
            return Err(VmError::InvalidOperation(format!(
                "syscall name must be 1 to {MAX_SYSCALL_NAME} bytes, got {}",
                api_bytes.len()
            )));
        }

        self.emit(OpCode::SYSCALL);
        self.script.push(api_bytes.len() as u8);
        Ok(self.emit_raw(api_bytes))
    }

    /// Emits a pack operation.
    pub fn emit_pack(&mut self) -> &mut Self {
        self.emit(OpCode::PACK)
    }

    /// The assembled script.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.script.clone()
    }

    /// Consumes the builder, returning the script.
    pub fn into_bytes(self) -> Vec<u8> {
        self.script
    }

    fn write_data(&mut self, data: &[u8]) -> &mut Self {
        let len = data.len();
        if len <= OpCode::MAX_PUSH_BYTES as usize {
            // PUSHBYTES1..75; an empty push is PUSH0
            self.script.push(len as u8);
        } else if len <= 0xff {
            self.emit(OpCode::PUSHDATA1);
            self.script.push(len as u8);
        } else if len <= 0xffff {
            self.emit(OpCode::PUSHDATA2);
            self.script.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.emit(OpCode::PUSHDATA4);
            self.script.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.emit_raw(data)
    }
}
