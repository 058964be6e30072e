// Copyright (C) 2015-2025 The Neo Project.
//
// op_code.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Opcodes of the legacy (NEO 2) virtual machine used by invocation and
//! deployment scripts.

use std::fmt;

/// Represents the opcodes emitted and decoded by this crate.
///
/// `0x01..=0x4b` are `PUSHBYTES1..PUSHBYTES75`: the opcode itself is the
/// number of bytes that follow. They have no named variant; see
/// [`OpCode::is_push_bytes`].
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpCode {
    /// Pushes an empty array (integer zero).
    PUSH0 = 0x00,
    /// The next byte is the number of bytes to push.
    PUSHDATA1 = 0x4c,
    /// The next two bytes (LE) are the number of bytes to push.
    PUSHDATA2 = 0x4d,
    /// The next four bytes (LE) are the number of bytes to push.
    PUSHDATA4 = 0x4e,
    /// Pushes -1.
    PUSHM1 = 0x4f,
    PUSH1 = 0x51,
    PUSH2 = 0x52,
    PUSH3 = 0x53,
    PUSH4 = 0x54,
    PUSH5 = 0x55,
    PUSH6 = 0x56,
    PUSH7 = 0x57,
    PUSH8 = 0x58,
    PUSH9 = 0x59,
    PUSH10 = 0x5a,
    PUSH11 = 0x5b,
    PUSH12 = 0x5c,
    PUSH13 = 0x5d,
    PUSH14 = 0x5e,
    PUSH15 = 0x5f,
    PUSH16 = 0x60,
    /// Does nothing.
    NOP = 0x61,
    /// Calls the contract whose 20-byte script hash follows.
    APPCALL = 0x67,
    /// Calls the interop service whose name follows (1-byte length + ASCII).
    SYSCALL = 0x68,
    /// Calls the contract whose script hash follows, as a tail call.
    TAILCALL = 0x69,
    /// Verifies a signature against a public key.
    CHECKSIG = 0xac,
    /// Verifies a set of signatures against a set of public keys.
    CHECKMULTISIG = 0xae,
    /// Packs the top n items into an array.
    PACK = 0xc1,
}

impl OpCode {
    /// Largest byte count expressed directly by a `PUSHBYTES` opcode.
    pub const MAX_PUSH_BYTES: u8 = 0x4b;

    /// Decodes a named opcode.
    pub fn from_u8(value: u8) -> Option<Self> {
        let op = match value {
            0x00 => Self::PUSH0,
            0x4c => Self::PUSHDATA1,
            0x4d => Self::PUSHDATA2,
            0x4e => Self::PUSHDATA4,
            0x4f => Self::PUSHM1,
            0x51..=0x60 => return Self::push_small(value - 0x50),
            0x61 => Self::NOP,
            0x67 => Self::APPCALL,
            0x68 => Self::SYSCALL,
            0x69 => Self::TAILCALL,
            0xac => Self::CHECKSIG,
            0xae => Self::CHECKMULTISIG,
            0xc1 => Self::PACK,
            _ => return None,
        };
        Some(op)
    }

    /// The `PUSH1..PUSH16` opcode for `n`.
    pub fn push_small(n: u8) -> Option<Self> {
        let op = match n {
            1 => Self::PUSH1,
            2 => Self::PUSH2,
            3 => Self::PUSH3,
            4 => Self::PUSH4,
            5 => Self::PUSH5,
            6 => Self::PUSH6,
            7 => Self::PUSH7,
            8 => Self::PUSH8,
            9 => Self::PUSH9,
            10 => Self::PUSH10,
            11 => Self::PUSH11,
            12 => Self::PUSH12,
            13 => Self::PUSH13,
            14 => Self::PUSH14,
            15 => Self::PUSH15,
            16 => Self::PUSH16,
            _ => return None,
        };
        Some(op)
    }

    /// Whether `value` is a `PUSHBYTES1..PUSHBYTES75` opcode.
    #[inline]
    pub fn is_push_bytes(value: u8) -> bool {
        (0x01..=Self::MAX_PUSH_BYTES).contains(&value)
    }
}

impl From<OpCode> for u8 {
    fn from(op: OpCode) -> Self {
        op as u8
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
