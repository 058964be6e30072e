// Copyright (C) 2015-2025 The Neo Project.
//
// base58.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Base58Check encoding used by addresses and WIF keys.

use crate::hash::{address_checksum, verify_checksum};
use crate::{Error, Result};

/// Appends a 4-byte double-SHA256 checksum and base58-encodes the result.
pub fn base58_check_encode(payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + 4);
    data.extend_from_slice(payload);
    data.extend_from_slice(&address_checksum(payload));
    bs58::encode(data).into_string()
}

/// Decodes a base58check string and returns the payload without its checksum.
pub fn base58_check_decode(encoded: &str) -> Result<Vec<u8>> {
    let decoded = bs58::decode(encoded)
        .into_vec()
        .map_err(|e| Error::InvalidBase58(e.to_string()))?;

    if decoded.len() < 4 {
        return Err(Error::InvalidBase58(format!(
            "decoded length {} is shorter than the checksum",
            decoded.len()
        )));
    }

    let (payload, checksum) = decoded.split_at(decoded.len() - 4);
    if !verify_checksum(payload, checksum) {
        return Err(Error::InvalidChecksum);
    }
    Ok(payload.to_vec())
}
