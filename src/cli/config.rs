//! Command-line configuration
//!
//! A small JSON config file can preset the network and log filter; the
//! command-line flags take precedence over it.

use crate::params::{NetworkId, ParamsError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Invalid config file: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Settings read from the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Network to run on when no flag is given
    pub network: Option<NetworkId>,
    /// Default `env_logger` filter
    pub log_level: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            network: None,
            log_level: "info".to_string(),
        }
    }
}

impl NetworkConfig {
    /// Load a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Load `path` if given, otherwise the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Pick the network from flags, then the config file, then Main.
    ///
    /// `--testnet` together with `--regtest` is rejected, as is a
    /// `--network` name that disagrees with either flag.
    pub fn resolve_network(
        &self,
        testnet: bool,
        regtest: bool,
        name: Option<&str>,
    ) -> Result<NetworkId, ParamsError> {
        let flagged = match (testnet, regtest) {
            (true, true) => return Err(ParamsError::ConflictingNetworkFlags),
            (true, false) => Some(NetworkId::Testnet),
            (false, true) => Some(NetworkId::Regtest),
            (false, false) => None,
        };

        let named = name.map(str::parse::<NetworkId>).transpose()?;

        match (flagged, named) {
            (Some(a), Some(b)) if a != b => Err(ParamsError::ConflictingNetworkFlags),
            (Some(id), _) | (None, Some(id)) => Ok(id),
            (None, None) => Ok(self.network.unwrap_or(NetworkId::Main)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_flags_take_precedence() {
        let config = NetworkConfig {
            network: Some(NetworkId::Testnet),
            ..Default::default()
        };

        assert_eq!(config.resolve_network(false, false, None).unwrap(), NetworkId::Testnet);
        assert_eq!(config.resolve_network(false, true, None).unwrap(), NetworkId::Regtest);
        assert_eq!(
            config.resolve_network(false, false, Some("unittest")).unwrap(),
            NetworkId::Unittest
        );
        assert_eq!(
            NetworkConfig::default().resolve_network(false, false, None).unwrap(),
            NetworkId::Main
        );
    }

    #[test]
    fn test_conflicting_flags() {
        let config = NetworkConfig::default();
        assert!(matches!(
            config.resolve_network(true, true, None),
            Err(ParamsError::ConflictingNetworkFlags)
        ));
        assert!(matches!(
            config.resolve_network(true, false, Some("regtest")),
            Err(ParamsError::ConflictingNetworkFlags)
        ));
        assert!(matches!(
            config.resolve_network(false, false, Some("devnet")),
            Err(ParamsError::UnimplementedNetwork(_))
        ));
    }

    #[test]
    fn test_load_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "network": "regtest", "log_level": "debug" }}"#).unwrap();

        let config = NetworkConfig::load(file.path()).unwrap();
        assert_eq!(config.network, Some(NetworkId::Regtest));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();

        let config = NetworkConfig::load(file.path()).unwrap();
        assert_eq!(config, NetworkConfig::default());
    }

    #[test]
    fn test_invalid_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            NetworkConfig::load(file.path()),
            Err(ConfigError::ParseError(_))
        ));
    }
}
