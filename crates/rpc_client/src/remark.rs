// Copyright (C) 2015-2025 The Neo Project.
//
// remark.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use chrono::Utc;
use neo_config::REMARK_NONCE_SIZE;
use rand::RngCore;
use std::sync::Arc;

/// Produces the payload of the `REMARK` attribute that keeps fee-less
/// invocations unique.
pub type RemarkSource = Arc<dyn Fn() -> Vec<u8> + Send + Sync>;

const TIMESTAMP_SIZE: usize = 8;

/// Unix time in milliseconds (8 bytes LE) followed by random bytes.
pub fn timestamped_remark() -> Vec<u8> {
    let mut remark = Vec::with_capacity(REMARK_NONCE_SIZE);
    remark.extend_from_slice(&Utc::now().timestamp_millis().to_le_bytes());

    let mut nonce = [0u8; REMARK_NONCE_SIZE - TIMESTAMP_SIZE];
    rand::thread_rng().fill_bytes(&mut nonce);
    remark.extend_from_slice(&nonce);
    remark
}

pub(crate) fn default_source() -> RemarkSource {
    Arc::new(timestamped_remark)
}
