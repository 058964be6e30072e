// Copyright (C) 2015-2025 The Neo Project.
//
// vm_state.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! VM state implementation.
//!
//! Nodes report the state of an execution as flag names joined by commas,
//! e.g. `"HALT, BREAK"`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Indicates the status of the VM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VMState(u8);

#[allow(non_upper_case_globals)]
impl VMState {
    /// Execution is in progress or has not yet begun.
    pub const NONE: VMState = VMState(0);
    /// Execution completed successfully.
    pub const HALT: VMState = VMState(1 << 0);
    /// Execution ended with an uncaught exception.
    pub const FAULT: VMState = VMState(1 << 1);
    /// A breakpoint is currently being hit.
    pub const BREAK: VMState = VMState(1 << 2);

    const NAMES: [(VMState, &'static str); 3] = [
        (VMState::HALT, "HALT"),
        (VMState::FAULT, "FAULT"),
        (VMState::BREAK, "BREAK"),
    ];

    #[inline]
    pub fn contains(self, flag: VMState) -> bool {
        self.0 & flag.0 != 0
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self == VMState::NONE
    }

    #[inline]
    pub fn is_halt(self) -> bool {
        self.contains(VMState::HALT)
    }

    #[inline]
    pub fn is_fault(self) -> bool {
        self.contains(VMState::FAULT)
    }

    #[inline]
    pub fn is_break(self) -> bool {
        self.contains(VMState::BREAK)
    }
}

impl FromStr for VMState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut state = VMState::NONE;
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let flag = match part.to_ascii_uppercase().as_str() {
                "NONE" => VMState::NONE,
                "HALT" => VMState::HALT,
                "FAULT" => VMState::FAULT,
                "BREAK" => VMState::BREAK,
                _ => return Err(format!("unknown VM state '{part}'")),
            };
            state = VMState(state.0 | flag.0);
        }
        Ok(state)
    }
}

impl fmt::Display for VMState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Self::NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        if names.is_empty() {
            write!(f, "NONE")
        } else {
            write!(f, "{}", names.join(", "))
        }
    }
}

impl Serialize for VMState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VMState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
