// Copyright (C) 2015-2025 The Neo Project.
//
// script_builder_tests.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! ScriptBuilder / ScriptReader agreement on integer and data pushes.

use neo_vm::{OpCode, ScriptBuilder, ScriptReader};
use num_bigint::BigInt;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_pushed_integer_decodes_to_same_value(value in any::<i128>()) {
        let value = BigInt::from(value);
        let mut builder = ScriptBuilder::new();
        builder.emit_push_bigint(&value).unwrap();
        let script = builder.to_array();

        let instructions = ScriptReader::new(&script).read_all().unwrap();
        prop_assert_eq!(instructions.len(), 1);
        prop_assert_eq!(instructions[0].push_integer(), Some(value));
    }

    #[test]
    fn prop_pushed_bytes_decode_to_same_data(data in prop::collection::vec(any::<u8>(), 0..600)) {
        let mut builder = ScriptBuilder::new();
        builder.emit_push(&data).unwrap();
        let script = builder.to_array();

        let instruction = ScriptReader::new(&script).next_instruction().unwrap().unwrap();
        prop_assert_eq!(instruction.push_data(), Some(&data[..]));
        prop_assert_eq!(instruction.size(), script.len());
    }
}

#[test]
fn push_int_prefers_shortest_encoding() {
    let mut builder = ScriptBuilder::new();
    builder.emit_push_int(8);
    assert_eq!(builder.to_array(), vec![OpCode::PUSH8 as u8]);

    let mut builder = ScriptBuilder::new();
    builder.emit_push_int(i64::from(i32::MIN));
    assert_eq!(builder.to_array()[0], OpCode::PUSHINT32 as u8);
}
