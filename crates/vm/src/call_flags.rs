// Copyright (C) 2015-2025 The Neo Project.
//
// call_flags.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Call flags passed to `System.Contract.Call`.

use std::fmt;
use std::ops::BitOr;

/// Permissions granted to a called contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallFlags(pub u8);

impl CallFlags {
    pub const NONE: Self = Self(0);
    pub const READ_STATES: Self = Self(0x01);
    pub const WRITE_STATES: Self = Self(0x02);
    pub const ALLOW_CALL: Self = Self(0x04);
    pub const ALLOW_NOTIFY: Self = Self(0x08);

    pub const STATES: Self = Self(Self::READ_STATES.0 | Self::WRITE_STATES.0);
    pub const READ_ONLY: Self = Self(Self::READ_STATES.0 | Self::ALLOW_CALL.0);
    pub const ALL: Self = Self(
        Self::READ_STATES.0 | Self::WRITE_STATES.0 | Self::ALLOW_CALL.0 | Self::ALLOW_NOTIFY.0,
    );

    /// True when every bit of `flag` is set.
    pub fn has_flag(&self, flag: Self) -> bool {
        (self.0 & flag.0) == flag.0
    }

    /// Returns `None` when bits outside `ALL` are set.
    pub fn from_bits(bits: i64) -> Option<Self> {
        u8::try_from(bits)
            .ok()
            .filter(|b| b & !Self::ALL.0 == 0)
            .map(Self)
    }
}

impl Default for CallFlags {
    fn default() -> Self {
        Self::ALL
    }
}

impl BitOr for CallFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for CallFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NONE => write!(f, "None"),
            Self::ALL => write!(f, "All"),
            Self::READ_ONLY => write!(f, "ReadOnly"),
            Self::STATES => write!(f, "States"),
            other => write!(f, "{:#04x}", other.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_flags() {
        assert_eq!(CallFlags::STATES.0, 0x03);
        assert_eq!(CallFlags::READ_ONLY.0, 0x05);
        assert_eq!(CallFlags::ALL.0, 0x0F);
        assert_eq!(
            CallFlags::READ_STATES | CallFlags::WRITE_STATES,
            CallFlags::STATES
        );
    }

    #[test]
    fn test_has_flag() {
        assert!(CallFlags::ALL.has_flag(CallFlags::STATES));
        assert!(!CallFlags::STATES.has_flag(CallFlags::ALLOW_CALL));
        assert!(!CallFlags::NONE.has_flag(CallFlags::READ_STATES));
    }

    #[test]
    fn test_from_bits() {
        assert_eq!(CallFlags::from_bits(15), Some(CallFlags::ALL));
        assert_eq!(CallFlags::from_bits(0x10), None);
        assert_eq!(CallFlags::from_bits(-1), None);
        assert_eq!(CallFlags::ALL.to_string(), "All");
    }
}
