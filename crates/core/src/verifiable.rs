// Copyright (C) 2015-2025 The Neo Project.
//
// verifiable.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! The signable view shared by every transaction kind.

use crate::error::{CoreError, CoreResult};
use crate::{UInt256, Witness};
use neo_io::{BinaryWriter, IoResult, Serializable};
use tracing::trace;

/// A payload that is signed without its witnesses and carries a sorted
/// witness list.
///
/// `Serializable::serialize` writes the full form, which is always the
/// unsigned form followed by the witness list, so
/// [`neo_io::SerializableExt::to_array`] is the submission payload.
pub trait Verifiable: Serializable {
    /// Writes everything except the witnesses.
    fn serialize_unsigned(&self, writer: &mut BinaryWriter) -> IoResult<()>;

    /// The witnesses, sorted ascending by script hash.
    fn witnesses(&self) -> &[Witness];

    /// Mutable access for [`Verifiable::add_witnesses`].
    #[doc(hidden)]
    fn witnesses_mut(&mut self) -> &mut Vec<Witness>;

    /// The signing payload.
    fn to_array_without_scripts(&self) -> IoResult<Vec<u8>> {
        let mut writer = BinaryWriter::new();
        self.serialize_unsigned(&mut writer)?;
        Ok(writer.into_bytes())
    }

    /// Double SHA-256 of the unsigned bytes. Displays in reversed byte order.
    fn tx_id(&self) -> CoreResult<UInt256> {
        Ok(UInt256::hash_of(&self.to_array_without_scripts()?))
    }

    /// Adds one witness and restores the sort order.
    fn add_witness(&mut self, witness: Witness) -> CoreResult<()> {
        self.add_witnesses(vec![witness])
    }

    /// Adds a batch of witnesses and restores the sort order.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` without adding anything when a
    /// witness has no script hash.
    fn add_witnesses(&mut self, witnesses: Vec<Witness>) -> CoreResult<()> {
        insert_sorted(self.witnesses_mut(), witnesses)
    }
}

/// Appends `incoming` to `witnesses` and stably sorts the result by script
/// hash.
pub(crate) fn insert_sorted(witnesses: &mut Vec<Witness>, incoming: Vec<Witness>) -> CoreResult<()> {
    if incoming.iter().any(|w| w.script_hash().is_none()) {
        return Err(CoreError::validation(
            "the script hash of the given witness is empty, set the script hash explicitly",
        ));
    }

    witnesses.extend(incoming);
    witnesses.sort_by_key(Witness::script_hash);
    trace!(count = witnesses.len(), "witnesses sorted");
    Ok(())
}
