// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_exception.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use thiserror::Error;

/// The response was not valid JSON or not a JSON-RPC envelope.
pub const PARSE_ERROR: i32 = -32700;
/// Transport failures and unexpected result shapes.
pub const INTERNAL_ERROR: i32 = -32603;
/// The node does not know the requested transaction or block.
pub const UNKNOWN_ITEM: i32 = -100;
/// The node refused to relay a transaction without giving a reason.
pub const RELAY_REJECTED: i32 = -500;

/// An error reported by, or while talking to, a node.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RpcException {
    /// JSON-RPC error code, or one of the local codes above
    pub code: i32,

    /// Error message
    pub message: String,
}

impl RpcException {
    /// Creates a new RPC exception
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub(crate) fn parse(message: impl Into<String>) -> Self {
        Self::new(PARSE_ERROR, message)
    }

    pub(crate) fn internal(message: impl Into<String>) -> Self {
        Self::new(INTERNAL_ERROR, message)
    }

    /// Whether the node answered that it does not know the requested item.
    pub fn is_unknown_item(&self) -> bool {
        self.code == UNKNOWN_ITEM || self.message.to_ascii_lowercase().contains("unknown transaction")
    }
}
