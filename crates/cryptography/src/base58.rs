// Copyright (C) 2015-2025 The Neo Project.
//
// base58.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Base58Check encoding used by addresses and WIF keys.

use crate::{hash::hash256, Error, Result};

const CHECKSUM_SIZE: usize = 4;

/// Encodes `data` followed by the first four bytes of its double SHA-256.
pub fn encode_check(data: &[u8]) -> String {
    let checksum = hash256(data);
    let mut buffer = Vec::with_capacity(data.len() + CHECKSUM_SIZE);
    buffer.extend_from_slice(data);
    buffer.extend_from_slice(&checksum[..CHECKSUM_SIZE]);
    bs58::encode(buffer).into_string()
}

/// Decodes a Base58Check string and verifies its checksum.
pub fn decode_check(input: &str) -> Result<Vec<u8>> {
    let mut buffer = bs58::decode(input)
        .into_vec()
        .map_err(|e| Error::Base58(e.to_string()))?;
    if buffer.len() < CHECKSUM_SIZE {
        return Err(Error::Base58("input too short".to_string()));
    }

    let payload_len = buffer.len() - CHECKSUM_SIZE;
    let checksum = hash256(&buffer[..payload_len]);
    if checksum[..CHECKSUM_SIZE] != buffer[payload_len..] {
        return Err(Error::Checksum);
    }
    buffer.truncate(payload_len);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let payload = [0x35u8, 1, 2, 3, 4, 5];
        let encoded = encode_check(&payload);
        assert_eq!(decode_check(&encoded).unwrap(), payload);
    }

    #[test]
    fn detects_corruption() {
        let mut encoded = encode_check(b"payload").into_bytes();
        let last = encoded.len() - 1;
        encoded[last] = if encoded[last] == b'2' { b'3' } else { b'2' };
        let corrupted = String::from_utf8(encoded).unwrap();
        assert!(decode_check(&corrupted).is_err());
    }

    #[test]
    fn rejects_non_alphabet_characters() {
        assert!(matches!(decode_check("0OIl"), Err(Error::Base58(_))));
    }
}
