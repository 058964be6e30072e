// Copyright (C) 2015-2025 The Neo Project.
//
// script_reader.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Decoding of push instructions written by [`crate::ScriptBuilder`].

use crate::error::VmResult;
use crate::op_code::OpCode;
use neo_config::MAX_PUSH_DATA_SIZE;
use neo_io::{IoError, MemoryReader};
use num_bigint::BigInt;

/// Reads pushes and syscalls back out of a script.
pub struct ScriptReader<'a> {
    reader: MemoryReader<'a>,
}

impl<'a> ScriptReader<'a> {
    /// Starts reading at the beginning of `script`.
    pub fn new(script: &'a [u8]) -> Self {
        Self {
            reader: MemoryReader::new(script),
        }
    }

    /// Current offset into the script.
    pub fn position(&self) -> usize {
        self.reader.position()
    }

    /// Whether the whole script was consumed.
    pub fn is_at_end(&self) -> bool {
        self.reader.is_at_end()
    }

    /// Reads an integer pushed in any of the forms the builder emits.
    pub fn read_push_integer(&mut self) -> VmResult<BigInt> {
        let offset = self.position();
        let opcode = self.reader.peek()?;
        match opcode {
            0x00 => {
                self.reader.read_u8()?;
                Ok(BigInt::from(0))
            }
            0x4f => {
                self.reader.read_u8()?;
                Ok(BigInt::from(-1))
            }
            0x51..=0x60 => {
                self.reader.read_u8()?;
                Ok(BigInt::from(opcode - 0x50))
            }
            _ if is_data_push(opcode) => {
                let bytes = self.read_push_data()?;
                Ok(BigInt::from_signed_bytes_le(&bytes))
            }
            _ => Err(unexpected(offset, "integer push", opcode).into()),
        }
    }

    /// Reads bytes pushed with `PUSHBYTES1..75`, `PUSHDATA1/2/4`, or
    /// `PUSH0` (empty).
    pub fn read_push_data(&mut self) -> VmResult<Vec<u8>> {
        let offset = self.position();
        let opcode = self.reader.read_u8()?;
        let length = match opcode {
            0x00 => 0,
            _ if OpCode::is_push_bytes(opcode) => opcode as usize,
            0x4c => self.reader.read_u8()? as usize,
            0x4d => self.reader.read_u16()? as usize,
            0x4e => self.reader.read_u32()? as usize,
            _ => return Err(unexpected(offset, "data push", opcode).into()),
        };

        if length > MAX_PUSH_DATA_SIZE {
            return Err(IoError::format(
                offset,
                "data push",
                format!("length {length} exceeds maximum {MAX_PUSH_DATA_SIZE}"),
            )
            .into());
        }
        Ok(self.reader.read_memory(length)?.to_vec())
    }

    /// Reads pushed bytes as UTF-8.
    pub fn read_push_string(&mut self) -> VmResult<String> {
        let offset = self.position();
        let bytes = self.read_push_data()?;
        String::from_utf8(bytes)
            .map_err(|_| IoError::format(offset, "string push", "invalid UTF-8 sequence").into())
    }

    /// Reads a `SYSCALL` and returns the service name.
    pub fn read_syscall(&mut self) -> VmResult<String> {
        let offset = self.position();
        let opcode = self.reader.read_u8()?;
        if opcode != OpCode::SYSCALL as u8 {
            return Err(unexpected(offset, "syscall", opcode).into());
        }
        let length = self.reader.read_u8()? as usize;
        let name = self.reader.read_memory(length)?;
        String::from_utf8(name.to_vec())
            .map_err(|_| IoError::format(offset, "syscall", "invalid UTF-8 name").into())
    }
}

fn is_data_push(opcode: u8) -> bool {
    OpCode::is_push_bytes(opcode)
        || opcode == OpCode::PUSHDATA1 as u8
        || opcode == OpCode::PUSHDATA2 as u8
        || opcode == OpCode::PUSHDATA4 as u8
}

fn unexpected(offset: usize, field: &str, opcode: u8) -> IoError {
    IoError::format(offset, field, format!("unexpected opcode {opcode:#04x}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ScriptBuilder, VmError};
    use proptest::prelude::*;

    #[test]
    fn test_reads_every_integer_form() {
        let mut builder = ScriptBuilder::new();
        for value in [-1i64, 0, 7, 16, 17, -200, 1 << 40] {
            builder.push_integer(value);
        }
        let script = builder.to_bytes();

        let mut reader = ScriptReader::new(&script);
        for value in [-1i64, 0, 7, 16, 17, -200, 1 << 40] {
            assert_eq!(reader.read_push_integer().unwrap(), BigInt::from(value));
        }
        assert!(reader.is_at_end());
    }

    #[test]
    fn test_reads_data_and_strings() {
        let mut builder = ScriptBuilder::new();
        builder.push_string("Test").unwrap();
        builder.push_data(&[9u8; 300]).unwrap();
        builder.push_data(&[]).unwrap();
        builder.emit_syscall("Neo.Contract.Create").unwrap();
        let script = builder.to_bytes();

        let mut reader = ScriptReader::new(&script);
        assert_eq!(reader.read_push_string().unwrap(), "Test");
        assert_eq!(reader.read_push_data().unwrap(), vec![9u8; 300]);
        assert!(reader.read_push_data().unwrap().is_empty());
        assert_eq!(reader.read_syscall().unwrap(), "Neo.Contract.Create");
        assert!(reader.is_at_end());
    }

    #[test]
    fn test_unexpected_opcode_reports_offset() {
        let script = [0x51, 0x61];
        let mut reader = ScriptReader::new(&script);
        reader.read_push_integer().unwrap();
        let err = reader.read_push_integer().unwrap_err();
        assert!(matches!(err, VmError::Io(IoError::Format { offset: 1, .. })));
    }

    #[test]
    fn test_truncated_push_is_an_error() {
        let mut reader = ScriptReader::new(&[0x05, 0x01, 0x02]);
        assert!(matches!(
            reader.read_push_data(),
            Err(VmError::Io(IoError::UnexpectedEof { .. }))
        ));
    }

    proptest! {
        #[test]
        fn prop_integer_push_round_trip(value in any::<i128>()) {
            let mut builder = ScriptBuilder::new();
            builder.push_integer(value);
            let script = builder.to_bytes();
            let mut reader = ScriptReader::new(&script);
            prop_assert_eq!(reader.read_push_integer().unwrap(), BigInt::from(value));
            prop_assert!(reader.is_at_end());
        }
    }
}
