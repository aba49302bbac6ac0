// Copyright (C) 2015-2025 The Neo Project.
//
// serializable.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Serialization traits and utilities for Neo objects.

use crate::{BinaryWriter, IoError, IoResult, MemoryReader};

pub use crate::binary_writer::{get_var_bytes_size, get_var_size};

/// Represents NEO objects that can be serialized.
pub trait Serializable {
    /// The size of the object in bytes after serialization.
    fn size(&self) -> usize;

    /// Serializes the object using the specified BinaryWriter.
    fn serialize(&self, writer: &mut BinaryWriter);

    /// Deserializes the object using the specified MemoryReader.
    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self>
    where
        Self: Sized;
}

/// Extension methods for serializable objects.
pub trait SerializableExt: Serializable {
    /// Converts the object to a byte array.
    fn to_array(&self) -> Vec<u8> {
        let mut writer = BinaryWriter::with_capacity(self.size());
        self.serialize(&mut writer);
        writer.into_bytes()
    }

    /// Creates an object from a byte array, rejecting trailing bytes.
    fn from_array(data: &[u8]) -> IoResult<Self>
    where
        Self: Sized,
    {
        let mut reader = MemoryReader::new(data);
        let value = Self::deserialize(&mut reader)?;
        if !reader.is_at_end() {
            return Err(IoError::invalid_data(
                "trailing data",
                format!("{} bytes", reader.remaining()),
            ));
        }
        Ok(value)
    }
}

impl<T: Serializable> SerializableExt for T {}

/// Helper functions for serialization.
pub mod helper {
    use super::{get_var_size, Serializable};
    use crate::{BinaryWriter, IoResult, MemoryReader};

    /// Serializes a collection of serializable objects.
    pub fn serialize_array<T: Serializable>(items: &[T], writer: &mut BinaryWriter) {
        writer.write_var_int(items.len() as u64);
        for item in items {
            item.serialize(writer);
        }
    }

    /// Deserializes a collection of at most `max` serializable objects.
    pub fn deserialize_array<T: Serializable>(
        reader: &mut MemoryReader,
        max: usize,
    ) -> IoResult<Vec<T>> {
        let count = reader.read_var_int(max as u64)? as usize;
        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            items.push(T::deserialize(reader)?);
        }
        Ok(items)
    }

    /// Serialized size of a collection.
    pub fn array_size<T: Serializable>(items: &[T]) -> usize {
        get_var_size(items.len() as u64) + items.iter().map(Serializable::size).sum::<usize>()
    }
}
