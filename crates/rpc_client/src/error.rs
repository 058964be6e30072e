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

use crate::rpc_exception::RpcException;
use neo_core::CoreError;
use neo_io::IoError;
use neo_vm::VmError;
use thiserror::Error;

/// Errors of the contract invocation flow.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvocationError {
    /// The builder is missing a required piece or was given an invalid one.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Wallet error: {0}")]
    Wallet(#[from] neo_wallets::Error),

    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    #[error("Script error: {0}")]
    Vm(#[from] VmError),

    #[error("RPC error: {0}")]
    Rpc(#[from] RpcException),

    /// Submission was attempted before signing.
    #[error("the transaction must be signed before it is sent")]
    NotSigned,
}

impl InvocationError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<IoError> for InvocationError {
    fn from(err: IoError) -> Self {
        Self::Core(CoreError::from(err))
    }
}

pub type InvocationResult<T> = std::result::Result<T, InvocationError>;
