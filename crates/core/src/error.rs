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

//! Core error types.

use neo_io::IoError;
use thiserror::Error;

/// Errors raised by the transaction model and its value types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A builder or mutator was given a value it must refuse immediately.
    #[error("Validation error: {message}")]
    Validation {
        /// Description of the rejected input
        message: String,
    },

    /// Text (hex, address, decimal amount) could not be parsed.
    #[error("Invalid format: {message}")]
    InvalidFormat {
        /// Description of the malformed input
        message: String,
    },

    /// A value is structurally valid but outside its allowed range.
    #[error("Invalid data: {message}")]
    InvalidData {
        /// Description of the offending value
        message: String,
    },

    /// Wire encoding or decoding failed.
    #[error(transparent)]
    Io(#[from] IoError),
}

impl CoreError {
    /// Shorthand for [`CoreError::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Shorthand for [`CoreError::InvalidFormat`].
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }
}

/// Result alias for core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
