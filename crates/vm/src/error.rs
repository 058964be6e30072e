// Copyright (C) 2015-2025 The Neo Project.
//
// error.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! VM error types.

use neo_io::IoError;
use thiserror::Error;

/// Errors raised while assembling or decoding scripts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VmError {
    /// A single push exceeds the maximum push size.
    #[error("push of {length} bytes exceeds the maximum of {max}")]
    DataTooLarge {
        /// Requested length
        length: usize,
        /// Largest accepted length
        max: usize,
    },

    /// The requested instruction cannot be emitted.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Script bytes could not be decoded.
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Result alias for VM operations.
pub type VmResult<T> = std::result::Result<T, VmError>;
