// Copyright (C) 2015-2025 The Neo Project.
//
// mod.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! JSON-RPC envelopes and the node responses the client consumes.

pub mod rpc_application_log;
pub mod rpc_request;

pub use rpc_application_log::{
    Execution, RpcApplicationLog, RpcNotification, RpcStackItem, TriggerType,
};
pub use rpc_request::{RpcRequest, RpcResponse, RpcResponseError};
