// Copyright (C) 2015-2025 The Neo Project.
//
// contract_invocation.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Contract invocation: from a script hash and parameters to a signed,
//! submitted and confirmed `InvocationTransaction`.
//!
//! ```text
//! builder -> build() -> sign() -> invoke().await -> application_log_stream()
//! ```

use crate::error::{InvocationError, InvocationResult};
use crate::remark::{default_source, RemarkSource};
use crate::rpc_client::NeoRpc;
use crate::rpc_exception::{RpcException, RELAY_REJECTED};
use crate::tracker::{
    application_log_stream, ApplicationLogEvent, ApplicationLogStream, PollPolicy, Subscription,
};
use neo_config::{ClientConfig, GAS_ASSET_ID};
use neo_core::{
    Fixed8, InvocationTransaction, TransactionAttribute, TransactionAttributeUsage,
    TransactionInput, TransactionOutput, UInt160, UInt256, Verifiable,
};
use neo_io::SerializableExt;
use neo_vm::{ContractParameter, ScriptBuilder};
use neo_wallets::{Account, InputStrategy};
use rust_decimal::Decimal;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// A built invocation, signed or not.
pub struct ContractInvocation {
    rpc: Arc<dyn NeoRpc>,
    account: Account,
    transaction: InvocationTransaction,
    tx_id: UInt256,
    signed: bool,
    poll_policy: PollPolicy,
}

impl ContractInvocation {
    /// Starts a builder that submits through `rpc`.
    pub fn builder(rpc: Arc<dyn NeoRpc>) -> ContractInvocationBuilder {
        ContractInvocationBuilder::new(rpc)
    }

    /// The transaction as built, with witnesses once signed.
    pub fn transaction(&self) -> &InvocationTransaction {
        &self.transaction
    }

    pub fn tx_id(&self) -> UInt256 {
        self.tx_id
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn is_signed(&self) -> bool {
        self.signed
    }

    /// Signs the transaction with the account and attaches the witness.
    ///
    /// Signing an already signed invocation changes nothing.
    pub fn sign(mut self) -> InvocationResult<Self> {
        if self.signed {
            debug!(tx = %self.tx_id, "invocation already signed");
            return Ok(self);
        }

        let payload = self.transaction.to_array_without_scripts()?;
        let witness = self.account.create_witness(&payload)?;
        self.transaction.add_witness(witness)?;
        self.signed = true;
        debug!(tx = %self.tx_id, signer = %self.account.address(), "invocation signed");
        Ok(self)
    }

    /// The full transaction bytes, hex encoded.
    pub fn raw_transaction(&self) -> InvocationResult<String> {
        Ok(hex::encode(self.transaction.to_array()?))
    }

    /// Sends the signed transaction to the node and returns its id.
    ///
    /// # Errors
    ///
    /// `InvocationError::NotSigned` before [`ContractInvocation::sign`];
    /// `InvocationError::Rpc` when the node fails or refuses the relay.
    pub async fn invoke(&self) -> InvocationResult<UInt256> {
        if !self.signed {
            return Err(InvocationError::NotSigned);
        }

        let raw = self.raw_transaction()?;
        debug!(tx = %self.tx_id, size = raw.len() / 2, "sending invocation");
        if !self.rpc.send_raw_transaction(&raw).await? {
            return Err(RpcException::new(
                RELAY_REJECTED,
                format!("node refused to relay transaction {}", self.tx_id),
            )
            .into());
        }
        info!(tx = %self.tx_id, "invocation relayed");
        Ok(self.tx_id)
    }

    /// A cold stream yielding the application log of this transaction once
    /// the node has it. Every call returns an independent stream.
    pub fn application_log_stream(&self) -> ApplicationLogStream {
        application_log_stream(self.rpc.clone(), self.tx_id, self.poll_policy)
    }

    /// Tracks the transaction on a spawned task and calls `on_event` with
    /// its application log, or with the error that ended tracking.
    ///
    /// Must be called within a tokio runtime.
    pub fn subscribe_application_log<F>(&self, on_event: F) -> Subscription
    where
        F: FnOnce(ApplicationLogEvent) + Send + 'static,
    {
        Subscription::spawn(self.application_log_stream(), on_event)
    }
}

impl fmt::Debug for ContractInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContractInvocation")
            .field("tx_id", &self.tx_id)
            .field("account", &self.account)
            .field("signed", &self.signed)
            .field("transaction", &self.transaction)
            .finish_non_exhaustive()
    }
}

/// Collects what an invocation needs.
///
/// Not meant to be shared between threads while building.
pub struct ContractInvocationBuilder {
    rpc: Arc<dyn NeoRpc>,
    script_hash: Option<UInt160>,
    account: Option<Account>,
    parameters: Vec<ContractParameter>,
    attributes: Vec<TransactionAttribute>,
    outputs: Vec<TransactionOutput>,
    network_fee: Option<String>,
    system_fee: Option<String>,
    input_strategy: InputStrategy,
    remark_source: RemarkSource,
    poll_policy: PollPolicy,
}

impl ContractInvocationBuilder {
    pub fn new(rpc: Arc<dyn NeoRpc>) -> Self {
        Self {
            rpc,
            script_hash: None,
            account: None,
            parameters: Vec::new(),
            attributes: Vec::new(),
            outputs: Vec::new(),
            network_fee: None,
            system_fee: None,
            input_strategy: InputStrategy::default(),
            remark_source: default_source(),
            poll_policy: PollPolicy::default(),
        }
    }

    /// The contract to call. Required.
    pub fn contract_script_hash(mut self, script_hash: UInt160) -> Self {
        self.script_hash = Some(script_hash);
        self
    }

    /// The paying and signing account. Required.
    pub fn account(mut self, account: Account) -> Self {
        self.account = Some(account);
        self
    }

    /// Appends one positional parameter.
    pub fn parameter(mut self, parameter: ContractParameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn parameters(mut self, parameters: impl IntoIterator<Item = ContractParameter>) -> Self {
        self.parameters.extend(parameters);
        self
    }

    /// Adds an attribute ahead of the ones the builder attaches itself.
    pub fn attribute(mut self, attribute: TransactionAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn attributes(mut self, attributes: impl IntoIterator<Item = TransactionAttribute>) -> Self {
        self.attributes.extend(attributes);
        self
    }

    /// Adds a transfer funded from the account's UTXOs.
    pub fn output(mut self, output: TransactionOutput) -> Self {
        self.outputs.push(output);
        self
    }

    pub fn outputs(mut self, outputs: impl IntoIterator<Item = TransactionOutput>) -> Self {
        self.outputs.extend(outputs);
        self
    }

    /// GAS left to the network as fee, e.g. `"0.001"`. Parsed at build time.
    pub fn network_fee(mut self, fee: &str) -> Self {
        self.network_fee = Some(fee.to_string());
        self
    }

    /// GAS reserved for script execution, written to the transaction's
    /// `gas` field. Parsed at build time.
    pub fn system_fee(mut self, fee: &str) -> Self {
        self.system_fee = Some(fee.to_string());
        self
    }

    pub fn input_strategy(mut self, strategy: InputStrategy) -> Self {
        self.input_strategy = strategy;
        self
    }

    /// Replaces the generator of the uniqueness remark.
    pub fn remark_source(mut self, source: impl Fn() -> Vec<u8> + Send + Sync + 'static) -> Self {
        self.remark_source = Arc::new(source);
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_policy.interval = interval;
        self
    }

    pub fn max_poll_failures(mut self, max_failures: Option<u32>) -> Self {
        self.poll_policy.max_failures = max_failures;
        self
    }

    /// Takes the input strategy and poll policy from `config`.
    pub fn config(mut self, config: &ClientConfig) -> Self {
        self.input_strategy = config.input_strategy;
        self.poll_policy = PollPolicy::from(config);
        self
    }

    /// Assembles the unsigned transaction.
    ///
    /// Outputs are the requested ones followed by one change output per
    /// funded asset. When inputs or outputs end up empty the account's
    /// `SCRIPT` attribute is attached, and when both are empty a `REMARK`
    /// follows it.
    ///
    /// # Errors
    ///
    /// `InvocationError::Validation` without a script hash or account, for a
    /// zero poll interval, or for a negative fee; `InvocationError::Wallet` when the account cannot
    /// fund the outputs and fees.
    pub fn build(self) -> InvocationResult<ContractInvocation> {
        let script_hash = self
            .script_hash
            .ok_or_else(|| InvocationError::validation("no contract script hash set"))?;
        let account = self
            .account
            .ok_or_else(|| InvocationError::validation("no account set"))?;
        if self.poll_policy.interval.is_zero() {
            return Err(InvocationError::validation("poll interval must be greater than zero"));
        }

        let mut script = ScriptBuilder::new();
        script.emit_app_call(&script_hash, &self.parameters)?;
        let script = script.into_bytes();

        let network_fee = parse_fee("network", self.network_fee.as_deref())?;
        let system_fee = parse_fee("system", self.system_fee.as_deref())?;
        let fees = network_fee.to_decimal() + system_fee.to_decimal();

        let mut inputs: Vec<TransactionInput> = Vec::new();
        let mut outputs = self.outputs;
        let mut change = Vec::new();
        for (asset_id, amount) in required_amounts(&outputs, fees)? {
            if amount.is_zero() {
                continue;
            }
            let selection = account.utxos_for_asset_amount(&asset_id, amount, self.input_strategy)?;
            inputs.extend(selection.selected.iter().map(|utxo| utxo.to_input()));
            if selection.has_change() {
                change.push(TransactionOutput::from_parts(
                    asset_id,
                    selection.change,
                    account.script_hash(),
                )?);
            }
        }
        outputs.extend(change);

        let mut attributes = self.attributes;
        if inputs.is_empty() || outputs.is_empty() {
            let script_attribute = TransactionAttribute::script(account.script_hash());
            if !attributes.contains(&script_attribute) {
                attributes.push(script_attribute);
            }
        }
        if inputs.is_empty() && outputs.is_empty() {
            attributes.push(TransactionAttribute::remark((self.remark_source)())?);
        }

        let transaction = InvocationTransaction::builder()
            .script(script)
            .gas(system_fee)
            .attributes(attributes)?
            .inputs(inputs)
            .outputs(outputs)
            .build()?;
        let tx_id = transaction.tx_id()?;

        debug!(
            tx = %tx_id,
            contract = %script_hash,
            inputs = transaction.inputs().len(),
            outputs = transaction.outputs().len(),
            remark = transaction
                .attributes()
                .iter()
                .any(|a| matches!(a.usage(), TransactionAttributeUsage::Remark(_))),
            "invocation built"
        );

        Ok(ContractInvocation {
            rpc: self.rpc,
            account,
            transaction,
            tx_id,
            signed: false,
            poll_policy: self.poll_policy,
        })
    }
}

impl fmt::Debug for ContractInvocationBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContractInvocationBuilder")
            .field("script_hash", &self.script_hash)
            .field("account", &self.account)
            .field("parameters", &self.parameters)
            .field("attributes", &self.attributes)
            .field("outputs", &self.outputs)
            .field("network_fee", &self.network_fee)
            .field("system_fee", &self.system_fee)
            .field("input_strategy", &self.input_strategy)
            .finish_non_exhaustive()
    }
}

fn parse_fee(kind: &str, fee: Option<&str>) -> InvocationResult<Fixed8> {
    let Some(fee) = fee else {
        return Ok(Fixed8::ZERO);
    };
    let fee: Fixed8 = fee.parse()?;
    if fee < Fixed8::ZERO {
        return Err(InvocationError::validation(format!(
            "{kind} fee must not be negative, got {fee}"
        )));
    }
    Ok(fee)
}

/// Amount to fund per asset: asset order follows the first appearance in
/// `outputs`, and the fees are added to GAS.
fn required_amounts(
    outputs: &[TransactionOutput],
    fees: Decimal,
) -> InvocationResult<Vec<(UInt256, Decimal)>> {
    let mut required: Vec<(UInt256, Decimal)> = Vec::new();
    for output in outputs {
        match required.iter_mut().find(|(asset, _)| *asset == output.asset_id()) {
            Some((_, amount)) => *amount += output.value(),
            None => required.push((output.asset_id(), output.value())),
        }
    }

    if fees > Decimal::ZERO {
        let gas = UInt256::parse(GAS_ASSET_ID)?;
        match required.iter_mut().find(|(asset, _)| *asset == gas) {
            Some((_, amount)) => *amount += fees,
            None => required.push((gas, fees)),
        }
    }
    Ok(required)
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_config::NEO_ASSET_ID;

    fn output(asset: &str, value: &str) -> TransactionOutput {
        TransactionOutput::from_parts(
            UInt256::parse(asset).unwrap(),
            value.parse().unwrap(),
            UInt160::from_script(b"recipient"),
        )
        .unwrap()
    }

    #[test]
    fn test_required_amounts_follow_output_order_then_gas() {
        let outputs = vec![
            output(NEO_ASSET_ID, "1"),
            output(GAS_ASSET_ID, "2.5"),
            output(NEO_ASSET_ID, "3"),
        ];
        let required = required_amounts(&outputs, Decimal::new(1, 1)).unwrap();
        assert_eq!(
            required,
            vec![
                (UInt256::parse(NEO_ASSET_ID).unwrap(), Decimal::from(4)),
                (UInt256::parse(GAS_ASSET_ID).unwrap(), Decimal::new(26, 1)),
            ]
        );
    }

    #[test]
    fn test_fee_only_requires_gas() {
        let required = required_amounts(&[], Decimal::ONE).unwrap();
        assert_eq!(
            required,
            vec![(UInt256::parse(GAS_ASSET_ID).unwrap(), Decimal::ONE)]
        );
        assert!(required_amounts(&[], Decimal::ZERO).unwrap().is_empty());
    }

    #[test]
    fn test_parse_fee() {
        assert_eq!(parse_fee("network", None).unwrap(), Fixed8::ZERO);
        assert_eq!(
            parse_fee("network", Some("0.001")).unwrap(),
            Fixed8::from_raw(100_000)
        );
        assert!(matches!(
            parse_fee("network", Some("-1")),
            Err(InvocationError::Validation(_))
        ));
        assert!(matches!(
            parse_fee("system", Some("0.000000001")),
            Err(InvocationError::Core(_))
        ));
        assert!(matches!(
            parse_fee("system", Some("lots")),
            Err(InvocationError::Core(_))
        ));
    }
}
