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

//! Codec integration tests

use neo_io::{BinaryWriter, IoError, IoResult, MemoryReader, Serializable, SerializableExt};

#[derive(Debug, Clone, PartialEq)]
struct MockWitness {
    invocation: Vec<u8>,
    verification: Vec<u8>,
}

impl Serializable for MockWitness {
    fn size(&self) -> usize {
        neo_io::serializable::helper::get_var_bytes_size(&self.invocation)
            + neo_io::serializable::helper::get_var_bytes_size(&self.verification)
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_var_bytes(&self.invocation)?;
        writer.write_var_bytes(&self.verification)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self {
            invocation: reader.read_var_bytes(1024)?,
            verification: reader.read_var_bytes(1024)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
struct MockEnvelope {
    version: u8,
    witnesses: Vec<MockWitness>,
}

impl Serializable for MockEnvelope {
    fn size(&self) -> usize {
        1 + neo_io::serializable::helper::get_array_size(&self.witnesses)
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_u8(self.version)?;
        writer.write_serializable_list(&self.witnesses)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self {
            version: reader.read_u8()?,
            witnesses: reader.read_serializable_list(16)?,
        })
    }
}

#[test]
fn test_nested_list_layout_is_flat() {
    let envelope = MockEnvelope {
        version: 1,
        witnesses: vec![
            MockWitness {
                invocation: vec![0x40],
                verification: vec![0xac],
            },
            MockWitness {
                invocation: vec![],
                verification: vec![0x51],
            },
        ],
    };

    let bytes = envelope.to_array().unwrap();
    assert_eq!(hex::encode(&bytes), "0102014001ac000151");
    assert_eq!(MockEnvelope::from_array(&bytes).unwrap(), envelope);
}

#[test]
fn test_decoding_reports_offset_of_truncation() {
    // second witness claims a 4 byte verification script but only 1 byte follows
    let bytes = hex::decode("0102014001ac000451").unwrap();
    let err = MockEnvelope::from_array(&bytes).unwrap_err();
    assert_eq!(err, IoError::UnexpectedEof { offset: 8, needed: 3 });
}
