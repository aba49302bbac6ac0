// Copyright (C) 2015-2025 The Neo Project.
//
// property_based_crypto_tests.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Property-Based Cryptographic Testing
//!
//! Signature soundness for secp256r1 keys and Base58Check round trips over
//! arbitrary inputs.

use neo_cryptography::{base58, ecdsa::ECDsa, hash};
use proptest::prelude::*;

/// Property-based tests for ECDSA operations
mod ecdsa_properties {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// A signature produced by a key verifies under that key's public key
        #[test]
        fn prop_signature_verifies(
            seed in prop::array::uniform32(1u8..0x7f),
            message in prop::collection::vec(any::<u8>(), 0..256)
        ) {
            let public_key = ECDsa::derive_compressed_public_key(&seed).unwrap();
            let signature = ECDsa::sign(&message, &seed).unwrap();
            prop_assert!(ECDsa::verify(&message, &signature, &public_key).unwrap());
        }

        /// Flipping any message byte invalidates the signature
        #[test]
        fn prop_tampered_message_fails(
            seed in prop::array::uniform32(1u8..0x7f),
            mut message in prop::collection::vec(any::<u8>(), 1..128),
            index in any::<prop::sample::Index>()
        ) {
            let public_key = ECDsa::derive_compressed_public_key(&seed).unwrap();
            let signature = ECDsa::sign(&message, &seed).unwrap();
            let i = index.index(message.len());
            message[i] ^= 0x01;
            prop_assert!(!ECDsa::verify(&message, &signature, &public_key).unwrap());
        }
    }
}

/// Property-based tests for encodings and hashes
mod encoding_properties {
    use super::*;

    proptest! {
        #[test]
        fn prop_base58_check_round_trip(data in prop::collection::vec(any::<u8>(), 0..64)) {
            let encoded = base58::encode_check(&data);
            prop_assert_eq!(base58::decode_check(&encoded).unwrap(), data);
        }

        #[test]
        fn prop_hash160_is_deterministic(data in prop::collection::vec(any::<u8>(), 0..128)) {
            prop_assert_eq!(hash::hash160(&data), hash::hash160(&data));
        }
    }
}
