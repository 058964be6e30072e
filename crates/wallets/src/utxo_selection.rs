// Copyright (C) 2015-2025 The Neo Project.
//
// utxo_selection.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! UTXO input selection.
//!
//! Candidates of the requested asset are ordered by the strategy, then the
//! shortest prefix covering the amount is taken. Sorting is stable, so a
//! given candidate list always yields the same selection.

use crate::{Error, Result};
use neo_core::{UInt256, Utxo};
use rust_decimal::Decimal;
use tracing::debug;

pub use neo_config::InputStrategy;

/// Outputs chosen to fund an amount of one asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtxoSelection {
    /// Spent outputs, in spending order.
    pub selected: Vec<Utxo>,
    /// Sum of `selected`.
    pub total: Decimal,
    /// `total` minus the required amount; paid back to the sender when positive.
    pub change: Decimal,
}

impl UtxoSelection {
    /// Whether a change output is needed.
    pub fn has_change(&self) -> bool {
        self.change > Decimal::ZERO
    }
}

/// Selects outputs of `asset_id` from `candidates` covering `required`.
///
/// Candidates of other assets are skipped. A zero amount selects nothing.
///
/// # Errors
///
/// `Error::InvalidAmount` for a negative amount or when the candidate values
/// overflow, and `Error::InsufficientFunds` when all matching candidates
/// together are worth less than `required`.
pub fn select_inputs(
    strategy: InputStrategy,
    asset_id: &UInt256,
    required: Decimal,
    candidates: &[Utxo],
) -> Result<UtxoSelection> {
    if required < Decimal::ZERO {
        return Err(Error::InvalidAmount(format!(
            "required amount {required} is negative"
        )));
    }

    let mut ordered: Vec<&Utxo> = candidates
        .iter()
        .filter(|utxo| utxo.asset_id == *asset_id)
        .collect();
    match strategy {
        InputStrategy::Default => {}
        InputStrategy::LargestFirst => ordered.sort_by(|a, b| b.value.cmp(&a.value)),
        InputStrategy::SmallestFirst => ordered.sort_by(|a, b| a.value.cmp(&b.value)),
    }

    let mut selected = Vec::new();
    let mut total = Decimal::ZERO;
    for utxo in &ordered {
        if total >= required {
            break;
        }
        total = total.checked_add(utxo.value).ok_or_else(|| {
            Error::InvalidAmount(format!("sum of {asset_id} inputs overflows"))
        })?;
        selected.push((*utxo).clone());
    }

    if total < required {
        return Err(Error::InsufficientFunds {
            asset_id: *asset_id,
            required,
            available: total,
            shortfall: required - total,
        });
    }

    let change = total - required;
    debug!(
        asset = %asset_id,
        ?strategy,
        selected = selected.len(),
        %total,
        %change,
        "selected inputs"
    );
    Ok(UtxoSelection {
        selected,
        total,
        change,
    })
}
