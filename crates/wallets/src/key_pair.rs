// Copyright (C) 2015-2025 The Neo Project.
//
// key_pair.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! secp256r1 key pairs and WIF encoding.

use crate::{Error, Result};
use neo_config::HASH_SIZE;
use neo_core::UInt160;
use neo_cryptography::ecdsa::{COMPRESSED_PUBLIC_KEY_SIZE, SIGNATURE_SIZE};
use neo_cryptography::{base58_check_decode, base58_check_encode, ECDsa};
use neo_vm::{OpCode, ScriptBuilder};
use std::fmt;
use zeroize::Zeroizing;

const WIF_VERSION: u8 = 0x80;
const WIF_COMPRESSED_FLAG: u8 = 0x01;
const WIF_PAYLOAD_SIZE: usize = 1 + HASH_SIZE + 1;

/// A private key and its compressed public key.
///
/// The private key is wiped from memory when the pair is dropped.
#[derive(Clone)]
pub struct KeyPair {
    private_key: Zeroizing<[u8; HASH_SIZE]>,
    public_key: [u8; COMPRESSED_PUBLIC_KEY_SIZE],
}

impl KeyPair {
    /// Generates a fresh random key pair.
    pub fn generate() -> Result<Self> {
        let private_key = Zeroizing::new(ECDsa::generate_private_key());
        Self::from_private_key(&private_key[..])
    }

    /// Builds a key pair from a 32-byte private key.
    pub fn from_private_key(private_key: &[u8]) -> Result<Self> {
        let private_key: [u8; HASH_SIZE] = private_key
            .try_into()
            .map_err(|_| Error::InvalidPrivateKey)?;
        let private_key = Zeroizing::new(private_key);

        let derived = ECDsa::derive_public_key(&private_key[..], true)
            .map_err(|_| Error::InvalidPrivateKey)?;
        let public_key: [u8; COMPRESSED_PUBLIC_KEY_SIZE] = derived
            .as_slice()
            .try_into()
            .map_err(|_| Error::InvalidPrivateKey)?;

        Ok(Self {
            private_key,
            public_key,
        })
    }

    /// Imports a key from Wallet Import Format.
    ///
    /// Only the compressed form (`0x80 ‖ key ‖ 0x01`) is accepted.
    pub fn from_wif(wif: &str) -> Result<Self> {
        let payload = Zeroizing::new(
            base58_check_decode(wif).map_err(|e| Error::InvalidWif(e.to_string()))?,
        );
        if payload.len() != WIF_PAYLOAD_SIZE {
            return Err(Error::InvalidWif(format!(
                "payload must be {WIF_PAYLOAD_SIZE} bytes, got {}",
                payload.len()
            )));
        }
        if payload[0] != WIF_VERSION {
            return Err(Error::InvalidWif(format!(
                "unexpected version byte {:#04x}",
                payload[0]
            )));
        }
        if payload[WIF_PAYLOAD_SIZE - 1] != WIF_COMPRESSED_FLAG {
            return Err(Error::InvalidWif("missing compressed flag".to_string()));
        }
        Self::from_private_key(&payload[1..1 + HASH_SIZE])
    }

    /// Exports the private key in Wallet Import Format.
    pub fn to_wif(&self) -> String {
        let mut payload = Zeroizing::new(Vec::with_capacity(WIF_PAYLOAD_SIZE));
        payload.push(WIF_VERSION);
        payload.extend_from_slice(&self.private_key[..]);
        payload.push(WIF_COMPRESSED_FLAG);
        base58_check_encode(&payload)
    }

    pub fn private_key(&self) -> &[u8; HASH_SIZE] {
        &self.private_key
    }

    /// SEC1 compressed public key.
    pub fn public_key(&self) -> &[u8; COMPRESSED_PUBLIC_KEY_SIZE] {
        &self.public_key
    }

    /// `PUSHBYTES33 <public key> CHECKSIG`.
    pub fn verification_script(&self) -> Vec<u8> {
        let mut builder = ScriptBuilder::new();
        builder
            .emit_raw(&[COMPRESSED_PUBLIC_KEY_SIZE as u8])
            .emit_raw(&self.public_key)
            .emit(OpCode::CHECKSIG);
        builder.into_bytes()
    }

    /// Hash of the verification script.
    pub fn script_hash(&self) -> UInt160 {
        UInt160::from_script(&self.verification_script())
    }

    pub fn address(&self) -> String {
        self.script_hash().to_address()
    }

    /// Signs `message` with RFC 6979 ECDSA over its SHA-256 digest.
    pub fn sign(&self, message: &[u8]) -> Result<[u8; SIGNATURE_SIZE]> {
        Ok(ECDsa::sign(message, &self.private_key[..])?)
    }

    /// Checks a signature made by this key.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool> {
        Ok(ECDsa::verify(message, signature, &self.public_key)?)
    }
}

impl PartialEq for KeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.public_key == other.public_key
    }
}

impl Eq for KeyPair {}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &hex::encode(self.public_key))
            .finish_non_exhaustive()
    }
}

impl fmt::Display for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.public_key))
    }
}
