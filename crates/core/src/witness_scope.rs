// Copyright (C) 2015-2025 The Neo Project.
//
// witness_scope.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Implementation of WitnessScope, representing the scope of a witness.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Scope flags limiting where a signer's witness is honoured.
///
/// Rule-based scopes are not supported by this toolkit; a byte carrying
/// the `0x40` flag is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WitnessScope(u8);

#[allow(non_upper_case_globals)]
impl WitnessScope {
    /// Only the transaction itself is witnessed, no contract may use it.
    pub const None: WitnessScope = WitnessScope(0x00);

    /// The witness is valid only when the entry script calls the contract
    /// directly.
    pub const CalledByEntry: WitnessScope = WitnessScope(0x01);

    /// Valid inside the listed contracts.
    pub const CustomContracts: WitnessScope = WitnessScope(0x10);

    /// Valid inside contracts belonging to the listed groups.
    pub const CustomGroups: WitnessScope = WitnessScope(0x20);

    /// Valid everywhere. Cannot be combined with other flags.
    pub const Global: WitnessScope = WitnessScope(0x80);

    const VALID_MASK: u8 = 0x01 | 0x10 | 0x20 | 0x80;

    const NAMED: [(WitnessScope, &'static str); 4] = [
        (WitnessScope::CalledByEntry, "CalledByEntry"),
        (WitnessScope::CustomContracts, "CustomContracts"),
        (WitnessScope::CustomGroups, "CustomGroups"),
        (WitnessScope::Global, "Global"),
    ];
}

impl WitnessScope {
    pub fn has_flag(self, flag: WitnessScope) -> bool {
        self.0 & flag.0 != 0
    }

    pub fn combine(self, other: WitnessScope) -> Self {
        WitnessScope(self.0 | other.0)
    }

    /// Parses a wire byte, returning `None` for unknown flags or a
    /// `Global` combined with anything else.
    pub fn from_byte(value: u8) -> Option<Self> {
        let scope = WitnessScope(value);
        scope.is_valid().then_some(scope)
    }

    pub fn to_byte(self) -> u8 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        if self.0 & !Self::VALID_MASK != 0 {
            return false;
        }
        !(self.has_flag(WitnessScope::Global) && self.0 != WitnessScope::Global.0)
    }
}

impl Default for WitnessScope {
    fn default() -> Self {
        WitnessScope::CalledByEntry
    }
}

impl fmt::Display for WitnessScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return write!(f, "None");
        }
        let parts: Vec<&str> = Self::NAMED
            .iter()
            .filter(|(flag, _)| self.has_flag(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

impl FromStr for WitnessScope {
    type Err = String;

    /// Accepts the node's comma-separated form, e.g. `"CalledByEntry, CustomContracts"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scope = WitnessScope::None;
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let flag = match part {
                "None" => WitnessScope::None,
                other => Self::NAMED
                    .iter()
                    .find(|(_, name)| name.eq_ignore_ascii_case(other))
                    .map(|(flag, _)| *flag)
                    .ok_or_else(|| format!("unknown witness scope '{other}'"))?,
            };
            scope = scope.combine(flag);
        }
        if !scope.is_valid() {
            return Err(format!("invalid witness scope combination '{s}'"));
        }
        Ok(scope)
    }
}

impl TryFrom<u8> for WitnessScope {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_byte(value).ok_or(value)
    }
}

impl From<WitnessScope> for u8 {
    fn from(scope: WitnessScope) -> Self {
        scope.to_byte()
    }
}

impl Serialize for WitnessScope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WitnessScope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_witness_scope_values() {
        assert_eq!(WitnessScope::None.to_byte(), 0x00);
        assert_eq!(WitnessScope::CalledByEntry.to_byte(), 0x01);
        assert_eq!(WitnessScope::CustomContracts.to_byte(), 0x10);
        assert_eq!(WitnessScope::CustomGroups.to_byte(), 0x20);
        assert_eq!(WitnessScope::Global.to_byte(), 0x80);
    }

    #[test]
    fn test_witness_scope_from_byte() {
        assert_eq!(WitnessScope::from_byte(0x11), Some(WitnessScope(0x11)));
        assert_eq!(WitnessScope::from_byte(0x40), None);
        assert_eq!(WitnessScope::from_byte(0x81), None);
        assert_eq!(WitnessScope::from_byte(0x02), None);
    }

    #[test]
    fn test_witness_scope_display() {
        assert_eq!(WitnessScope::None.to_string(), "None");
        assert_eq!(WitnessScope::Global.to_string(), "Global");
        let combined = WitnessScope::CalledByEntry.combine(WitnessScope::CustomContracts);
        assert_eq!(combined.to_string(), "CalledByEntry, CustomContracts");
        assert_eq!(combined.to_string().parse::<WitnessScope>(), Ok(combined));
    }

    #[test]
    fn test_witness_scope_parse_rejects_global_combination() {
        assert!("Global, CalledByEntry".parse::<WitnessScope>().is_err());
        assert!("WitnessRules".parse::<WitnessScope>().is_err());
        assert_eq!(
            "calledbyentry".parse::<WitnessScope>(),
            Ok(WitnessScope::CalledByEntry)
        );
    }
}
