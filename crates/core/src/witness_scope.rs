// Copyright (C) 2015-2025 The Neo Project.
//
// witness_scope.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Implementation of WitnessScope, the authorization scope of a cosigner.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The scope a cosigner's signature is valid for.
///
/// A flags byte. `Global` is the absence of any restriction and cannot be
/// combined with the other flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WitnessScope(u8);

#[allow(non_upper_case_globals)]
impl WitnessScope {
    /// The signature is valid in every context.
    pub const Global: WitnessScope = WitnessScope(0x00);

    /// Only valid while the entry script is the calling contract.
    pub const CalledByEntry: WitnessScope = WitnessScope(0x01);

    /// Only valid for the listed contracts.
    pub const CustomContracts: WitnessScope = WitnessScope(0x10);

    /// Only valid for contracts in the listed groups.
    pub const CustomGroups: WitnessScope = WitnessScope(0x20);

    const VALID_FLAGS: u8 = 0x01 | 0x10 | 0x20;

    /// Checks if this scope has the specified flag.
    pub fn has_flag(self, flag: WitnessScope) -> bool {
        flag.0 != 0 && self.0 & flag.0 == flag.0
    }

    /// Combines this scope with another scope.
    pub fn combine(self, other: WitnessScope) -> Self {
        WitnessScope(self.0 | other.0)
    }

    /// Creates a scope from its byte, rejecting unknown flags.
    pub fn from_byte(value: u8) -> Option<Self> {
        (value & !Self::VALID_FLAGS == 0).then_some(WitnessScope(value))
    }

    /// The byte written on the wire.
    pub fn to_byte(self) -> u8 {
        self.0
    }
}

impl Default for WitnessScope {
    fn default() -> Self {
        WitnessScope::Global
    }
}

impl fmt::Display for WitnessScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return write!(f, "Global");
        }

        let mut parts = Vec::new();
        if self.has_flag(WitnessScope::CalledByEntry) {
            parts.push("CalledByEntry");
        }
        if self.has_flag(WitnessScope::CustomContracts) {
            parts.push("CustomContracts");
        }
        if self.has_flag(WitnessScope::CustomGroups) {
            parts.push("CustomGroups");
        }
        write!(f, "{}", parts.join(" | "))
    }
}

impl From<WitnessScope> for u8 {
    fn from(scope: WitnessScope) -> Self {
        scope.to_byte()
    }
}
