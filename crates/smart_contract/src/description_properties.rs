// Copyright (C) 2015-2025 The Neo Project.
//
// description_properties.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Human readable contract description.

use crate::error::ContractResult;
use neo_vm::{ScriptBuilder, ScriptReader};
use serde::{Deserialize, Serialize};

/// Name, version, author, email and description of a contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContractDescriptionProperties {
    pub name: String,
    pub version: String,
    pub author: String,
    pub email: String,
    pub description: String,
}

impl ContractDescriptionProperties {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        author: impl Into<String>,
        email: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            author: author.into(),
            email: email.into(),
            description: description.into(),
        }
    }

    /// Pushes the fields last to first, leaving `name` on top of the stack.
    pub fn write_to(&self, builder: &mut ScriptBuilder) -> ContractResult<()> {
        builder
            .push_string(&self.description)?
            .push_string(&self.email)?
            .push_string(&self.author)?
            .push_string(&self.version)?
            .push_string(&self.name)?;
        Ok(())
    }

    pub fn read_from(reader: &mut ScriptReader<'_>) -> ContractResult<Self> {
        let description = reader.read_push_string()?;
        let email = reader.read_push_string()?;
        let author = reader.read_push_string()?;
        let version = reader.read_push_string()?;
        let name = reader.read_push_string()?;
        Ok(Self {
            name,
            version,
            author,
            email,
            description,
        })
    }
}
