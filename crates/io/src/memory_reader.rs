// Copyright (C) 2015-2025 The Neo Project.
//
// memory_reader.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Cursor over a borrowed byte slice.

use crate::{IoError, IoResult};

/// Reads primitive values in Neo's binary format.
#[derive(Debug, Clone)]
pub struct MemoryReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> MemoryReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.remaining() == 0
    }

    pub fn read_bytes(&mut self, count: usize) -> IoResult<&'a [u8]> {
        if count > self.remaining() {
            return Err(IoError::EndOfStream {
                needed: count,
                remaining: self.remaining(),
            });
        }
        let slice = &self.data[self.position..self.position + count];
        self.position += count;
        Ok(slice)
    }

    pub fn read_array<const N: usize>(&mut self) -> IoResult<[u8; N]> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.read_bytes(N)?);
        Ok(array)
    }

    pub fn read_u8(&mut self) -> IoResult<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u16(&mut self) -> IoResult<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    pub fn read_u32(&mut self) -> IoResult<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub fn read_u64(&mut self) -> IoResult<u64> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    pub fn read_i64(&mut self) -> IoResult<i64> {
        Ok(i64::from_le_bytes(self.read_array()?))
    }

    /// Reads a variable-length integer no larger than `max`.
    pub fn read_var_int(&mut self, max: u64) -> IoResult<u64> {
        let value = match self.read_u8()? {
            0xfd => self.read_u16()? as u64,
            0xfe => self.read_u32()? as u64,
            0xff => self.read_u64()?,
            small => small as u64,
        };
        if value > max {
            return Err(IoError::Overflow { value, max });
        }
        Ok(value)
    }

    /// Reads a var-int length prefix and that many bytes.
    pub fn read_var_bytes(&mut self, max: usize) -> IoResult<Vec<u8>> {
        let len = self.read_var_int(max as u64)? as usize;
        Ok(self.read_bytes(len)?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BinaryWriter;

    #[test]
    fn reads_what_writer_wrote() {
        let mut writer = BinaryWriter::new();
        writer.write_u8(7);
        writer.write_u32(0xdead_beef);
        writer.write_i64(-2);
        writer.write_var_bytes(b"neo");
        writer.write_var_int(70_000);
        let bytes = writer.into_bytes();

        let mut reader = MemoryReader::new(&bytes);
        assert_eq!(reader.read_u8().unwrap(), 7);
        assert_eq!(reader.read_u32().unwrap(), 0xdead_beef);
        assert_eq!(reader.read_i64().unwrap(), -2);
        assert_eq!(reader.read_var_bytes(16).unwrap(), b"neo");
        assert_eq!(reader.read_var_int(u64::MAX).unwrap(), 70_000);
        assert!(reader.is_at_end());
    }

    #[test]
    fn enforces_limits() {
        let mut reader = MemoryReader::new(&[0x05, 1, 2]);
        assert_eq!(
            reader.clone().read_var_int(4),
            Err(IoError::Overflow { value: 5, max: 4 })
        );
        assert!(matches!(
            reader.read_var_bytes(16),
            Err(IoError::EndOfStream { needed: 5, remaining: 2 })
        ));
    }
}
