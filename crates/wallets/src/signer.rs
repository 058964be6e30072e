// Copyright (C) 2015-2025 The Neo Project.
//
// signer.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::key_pair::KeyPair;
use crate::Result;
use neo_core::UInt160;
use std::sync::Arc;

/// Signing interface for transaction payloads.
///
/// Callers only ever see signatures and the verification script; the key
/// material stays behind the implementation.
pub trait MessageSigner: Send + Sync {
    /// Signs `message`, returning the 64-byte `r ‖ s` signature.
    fn sign_message(&self, message: &[u8]) -> Result<Vec<u8>>;

    /// The script that checks signatures made by this signer.
    fn verification_script(&self) -> Vec<u8>;

    /// Hash of [`MessageSigner::verification_script`].
    fn script_hash(&self) -> UInt160 {
        UInt160::from_script(&self.verification_script())
    }
}

impl MessageSigner for KeyPair {
    fn sign_message(&self, message: &[u8]) -> Result<Vec<u8>> {
        Ok(self.sign(message)?.to_vec())
    }

    fn verification_script(&self) -> Vec<u8> {
        KeyPair::verification_script(self)
    }
}

impl MessageSigner for Arc<dyn MessageSigner> {
    fn sign_message(&self, message: &[u8]) -> Result<Vec<u8>> {
        self.as_ref().sign_message(message)
    }

    fn verification_script(&self) -> Vec<u8> {
        self.as_ref().verification_script()
    }

    fn script_hash(&self) -> UInt160 {
        self.as_ref().script_hash()
    }
}
