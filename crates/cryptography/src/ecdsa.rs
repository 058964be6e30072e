// Copyright (C) 2015-2025 The Neo Project.
//
// ecdsa.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! ECDSA over secp256r1 (P-256), Neo's signature curve.

use crate::{Error, Result};
use neo_config::HASH_SIZE;
use p256::{
    ecdsa::{signature::Signer, signature::Verifier, Signature, SigningKey, VerifyingKey},
    elliptic_curve::sec1::ToEncodedPoint,
};
use rand::rngs::OsRng;

/// Length of an `r || s` signature.
pub const SIGNATURE_SIZE: usize = 64;
/// Length of a SEC1 compressed public key.
pub const COMPRESSED_PUBLIC_KEY_SIZE: usize = 33;

/// ECDSA implementation for Neo blockchain.
pub struct ECDsa;

impl ECDsa {
    fn signing_key(private_key: &[u8]) -> Result<SigningKey> {
        if private_key.len() != HASH_SIZE {
            return Err(Error::InvalidKey(format!(
                "private key must be {} bytes, got {}",
                HASH_SIZE,
                private_key.len()
            )));
        }
        SigningKey::from_slice(private_key)
            .map_err(|e| Error::InvalidKey(format!("Invalid private key: {e}")))
    }

    /// Signs `data` with a deterministic nonce (RFC 6979, SHA-256).
    ///
    /// Returns the fixed-width `r || s` encoding. The same key and message
    /// always produce the same signature.
    pub fn sign(data: &[u8], private_key: &[u8]) -> Result<[u8; SIGNATURE_SIZE]> {
        let signing_key = Self::signing_key(private_key)?;
        let signature: Signature = signing_key.sign(data);

        let mut out = [0u8; SIGNATURE_SIZE];
        out.copy_from_slice(&signature.to_bytes());
        Ok(out)
    }

    /// Verifies an `r || s` signature against a SEC1 encoded public key.
    pub fn verify(data: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool> {
        let sig = Signature::from_slice(signature)
            .map_err(|e| Error::InvalidSignature(format!("Invalid signature format: {e}")))?;

        let verifying_key = VerifyingKey::from_sec1_bytes(public_key)
            .map_err(|e| Error::InvalidKey(format!("Invalid public key: {e}")))?;

        Ok(verifying_key.verify(data, &sig).is_ok())
    }

    /// Generates a new random private key.
    pub fn generate_private_key() -> [u8; HASH_SIZE] {
        let signing_key = SigningKey::random(&mut OsRng);
        let mut out = [0u8; HASH_SIZE];
        out.copy_from_slice(&signing_key.to_bytes());
        out
    }

    /// Derives the SEC1 public key from a private key.
    pub fn derive_public_key(private_key: &[u8], compressed: bool) -> Result<Vec<u8>> {
        let signing_key = Self::signing_key(private_key)?;
        let point = signing_key
            .verifying_key()
            .as_affine()
            .to_encoded_point(compressed);
        Ok(point.as_bytes().to_vec())
    }
}
