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

//! Smart contract error types.

use neo_core::CoreError;
use neo_io::IoError;
use neo_vm::VmError;
use thiserror::Error;

/// Errors raised while encoding or decoding contract metadata.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// A parameter or return type tag is not a known type.
    #[error("unknown contract parameter type 0x{0:02x}")]
    UnknownParameterType(u8),

    /// The script does not have the shape of a deployment script.
    #[error("malformed deployment script: {message}")]
    MalformedScript {
        /// What was found instead
        message: String,
    },

    /// Script assembly or push decoding failed.
    #[error(transparent)]
    Vm(#[from] VmError),

    /// Raw bytes could not be decoded.
    #[error(transparent)]
    Io(#[from] IoError),

    /// A value type rejected its input.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ContractError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedScript {
            message: message.into(),
        }
    }
}

/// Result alias for smart contract operations.
pub type ContractResult<T> = std::result::Result<T, ContractError>;
