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

use thiserror::Error;

/// Errors produced while encoding or decoding the wire format.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IoError {
    /// A read would run past the end of the buffer.
    #[error("unexpected end of input at offset {offset}: needed {needed} more bytes")]
    UnexpectedEof { offset: usize, needed: usize },

    /// A decoded value is outside the range allowed for its field.
    #[error("invalid data in {context}: {value}")]
    InvalidData { context: String, value: String },

    /// Structurally malformed input at a known position.
    #[error("format error at offset {offset} reading {field}: {message}")]
    Format {
        offset: usize,
        field: String,
        message: String,
    },
}

impl IoError {
    pub fn invalid_data(context: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidData {
            context: context.into(),
            value: value.to_string(),
        }
    }

    pub fn format(offset: usize, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Format {
            offset,
            field: field.into(),
            message: message.into(),
        }
    }
}

pub type IoResult<T> = Result<T, IoError>;
