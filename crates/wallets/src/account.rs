// Copyright (C) 2015-2025 The Neo Project.
//
// account.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Accounts and the unspent outputs they are known to own.

use crate::key_pair::KeyPair;
use crate::signer::MessageSigner;
use crate::utxo_selection::{select_inputs, InputStrategy, UtxoSelection};
use crate::{Error, Result};
use neo_core::{UInt160, UInt256, Utxo, Witness};
use neo_vm::ScriptBuilder;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// A signing identity plus its known UTXOs, grouped by asset.
#[derive(Clone)]
pub struct Account {
    signer: Arc<dyn MessageSigner>,
    script_hash: UInt160,
    utxos: BTreeMap<UInt256, Vec<Utxo>>,
}

impl Account {
    pub fn new(signer: Arc<dyn MessageSigner>) -> Self {
        let script_hash = signer.script_hash();
        Self {
            signer,
            script_hash,
            utxos: BTreeMap::new(),
        }
    }

    pub fn from_key_pair(key_pair: KeyPair) -> Self {
        Self::new(Arc::new(key_pair))
    }

    pub fn from_wif(wif: &str) -> Result<Self> {
        Ok(Self::from_key_pair(KeyPair::from_wif(wif)?))
    }

    pub fn script_hash(&self) -> UInt160 {
        self.script_hash
    }

    pub fn address(&self) -> String {
        self.script_hash.to_address()
    }

    pub fn signer(&self) -> &Arc<dyn MessageSigner> {
        &self.signer
    }

    pub fn verification_script(&self) -> Vec<u8> {
        self.signer.verification_script()
    }

    /// Records an unspent output owned by this account.
    pub fn add_utxo(&mut self, utxo: Utxo) {
        trace!(asset = %utxo.asset_id, tx = %utxo.tx_id, index = utxo.index, "adding utxo");
        self.utxos.entry(utxo.asset_id).or_default().push(utxo);
    }

    pub fn add_utxos(&mut self, utxos: impl IntoIterator<Item = Utxo>) {
        for utxo in utxos {
            self.add_utxo(utxo);
        }
    }

    /// Forgets every known output of `asset_id`.
    pub fn clear_utxos(&mut self, asset_id: &UInt256) {
        self.utxos.remove(asset_id);
    }

    /// Known outputs of `asset_id`, in the order they were added.
    pub fn utxos(&self, asset_id: &UInt256) -> &[Utxo] {
        self.utxos.get(asset_id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Sum of the known outputs of `asset_id`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidAmount` when the sum overflows.
    pub fn balance(&self, asset_id: &UInt256) -> Result<Decimal> {
        self.utxos(asset_id)
            .iter()
            .try_fold(Decimal::ZERO, |total, utxo| total.checked_add(utxo.value))
            .ok_or_else(|| Error::InvalidAmount(format!("balance of {asset_id} overflows")))
    }

    /// Selects known outputs of `asset_id` covering `amount`.
    pub fn utxos_for_asset_amount(
        &self,
        asset_id: &UInt256,
        amount: Decimal,
        strategy: InputStrategy,
    ) -> Result<UtxoSelection> {
        select_inputs(strategy, asset_id, amount, self.utxos(asset_id))
    }

    /// Signs `message` through the account's signer.
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        self.signer.sign_message(message)
    }

    /// Signs `message` and wraps the signature into a witness: the
    /// invocation script pushes the signature, the verification script is
    /// the signer's.
    pub fn create_witness(&self, message: &[u8]) -> Result<Witness> {
        let signature = self.sign(message)?;
        let mut invocation = ScriptBuilder::new();
        invocation.push_data(&signature)?;
        Ok(Witness::new(
            invocation.into_bytes(),
            self.verification_script(),
        ))
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("script_hash", &self.script_hash)
            .field("utxos", &self.utxos)
            .finish_non_exhaustive()
    }
}
