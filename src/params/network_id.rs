//! Network identifiers

use super::ParamsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The networks a node can run on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    /// Production network
    Main,
    /// Public test network
    #[serde(rename = "test")]
    Testnet,
    /// Local regression-test network
    Regtest,
    /// In-process unit-test network
    Unittest,
}

impl NetworkId {
    /// All known networks
    pub const ALL: [NetworkId; 4] = [
        NetworkId::Main,
        NetworkId::Testnet,
        NetworkId::Regtest,
        NetworkId::Unittest,
    ];

    /// Canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkId::Main => "main",
            NetworkId::Testnet => "test",
            NetworkId::Regtest => "regtest",
            NetworkId::Unittest => "unittest",
        }
    }

    /// Position in `ALL`
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkId {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(NetworkId::Main),
            "test" | "testnet" => Ok(NetworkId::Testnet),
            "regtest" => Ok(NetworkId::Regtest),
            "unittest" => Ok(NetworkId::Unittest),
            _ => Err(ParamsError::UnimplementedNetwork(s.to_string())),
        }
    }
}

impl TryFrom<u8> for NetworkId {
    type Error = ParamsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        NetworkId::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| ParamsError::UnimplementedNetwork(format!("#{}", value)))
    }
}
