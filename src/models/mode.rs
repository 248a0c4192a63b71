// Bonding modes accepted by `mode <mode>`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BondingMode {
    Speed,
    Streaming,
    Redundant,
}

impl BondingMode {
    pub const ALL: [BondingMode; 3] = [
        BondingMode::Speed,
        BondingMode::Streaming,
        BondingMode::Redundant,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BondingMode::Speed => "speed",
            BondingMode::Streaming => "streaming",
            BondingMode::Redundant => "redundant",
        }
    }
}

impl fmt::Display for BondingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive; surrounding whitespace is ignored.
impl FromStr for BondingMode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        BondingMode::ALL
            .into_iter()
            .find(|m| m.as_str() == wanted)
            .ok_or(ModeError::Invalid)
    }
}
