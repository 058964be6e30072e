// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_application_log.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use neo_core::{UInt160, UInt256};
use neo_vm::VMState;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Execution results the node recorded for one transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcApplicationLog {
    /// Transaction ID
    #[serde(rename = "txid")]
    pub tx_id: UInt256,

    /// List of executions
    #[serde(default)]
    pub executions: Vec<Execution>,
}

impl RpcApplicationLog {
    /// Whether every execution ended in `HALT` without `FAULT`.
    pub fn is_successful(&self) -> bool {
        !self.executions.is_empty()
            && self
                .executions
                .iter()
                .all(|e| e.vm_state.is_halt() && !e.vm_state.is_fault())
    }
}

/// Trigger that caused an execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerType {
    Verification,
    VerificationR,
    Application,
    ApplicationR,
}

/// One script execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Execution {
    /// Trigger type
    pub trigger: TriggerType,

    /// Script hash of the executed script
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<UInt160>,

    /// VM state
    #[serde(rename = "vmstate")]
    pub vm_state: VMState,

    /// GAS consumed, in GAS units
    #[serde(alias = "gasconsumed")]
    pub gas_consumed: Decimal,

    /// Evaluation stack left by the execution
    #[serde(default)]
    pub stack: Vec<RpcStackItem>,

    /// Notifications raised by the execution
    #[serde(default)]
    pub notifications: Vec<RpcNotification>,
}

/// A stack item in the node's JSON form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcStackItem {
    #[serde(rename = "type")]
    pub item_type: String,

    #[serde(default)]
    pub value: Value,
}

/// A `Runtime.Notify` event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcNotification {
    pub contract: UInt160,
    pub state: RpcStackItem,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node_log() -> Value {
        json!({
            "txid": "0x797ed7b5a5b4b89127b88e4012b8dbf470bfa2f79db96d572637b19b262577dd",
            "executions": [{
                "trigger": "Application",
                "contract": "0xbff561a41a780fa0a4771d03bcc924e90c04fc8e",
                "vmstate": "HALT, BREAK",
                "gas_consumed": "0.173",
                "stack": [{"type": "Integer", "value": "3"}],
                "notifications": [{
                    "contract": "0xbff561a41a780fa0a4771d03bcc924e90c04fc8e",
                    "state": {"type": "Array", "value": [{"type": "ByteArray", "value": "6869"}]}
                }]
            }]
        })
    }

    #[test]
    fn parses_node_application_log() {
        let log: RpcApplicationLog = serde_json::from_value(node_log()).unwrap();
        assert_eq!(
            log.tx_id.to_string(),
            "797ed7b5a5b4b89127b88e4012b8dbf470bfa2f79db96d572637b19b262577dd"
        );
        let execution = &log.executions[0];
        assert_eq!(execution.trigger, TriggerType::Application);
        assert!(execution.vm_state.is_halt());
        assert_eq!(execution.gas_consumed, Decimal::new(173, 3));
        assert_eq!(execution.stack[0].item_type, "Integer");
        assert_eq!(execution.notifications[0].state.item_type, "Array");
        assert!(log.is_successful());
    }

    #[test]
    fn faulted_execution_is_not_successful() {
        let mut value = node_log();
        value["executions"][0]["vmstate"] = json!("FAULT");
        let log: RpcApplicationLog = serde_json::from_value(value).unwrap();
        assert!(!log.is_successful());
    }

    #[test]
    fn missing_optional_members_default() {
        let log: RpcApplicationLog = serde_json::from_value(json!({
            "txid": "797ed7b5a5b4b89127b88e4012b8dbf470bfa2f79db96d572637b19b262577dd",
            "executions": [{"trigger": "Verification", "vmstate": "HALT", "gas_consumed": 0}]
        }))
        .unwrap();
        let execution = &log.executions[0];
        assert!(execution.contract.is_none());
        assert!(execution.stack.is_empty() && execution.notifications.is_empty());
    }
}
