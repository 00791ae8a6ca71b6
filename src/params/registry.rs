//! Parameter registry and network selection
//!
//! [`ParameterRegistry`] owns one sealed [`ChainParams`] per network. It is an
//! ordinary value, so tests can build as many as they like; the process-wide
//! instance behind [`registry`] is built lazily on first access.
//!
//! A [`Selection`] records which network the process runs on. Reading the
//! active set before anything was selected is a programming error and
//! panics; [`Selection::try_current`] is the non-panicking variant.

use super::chain::ChainParams;
use super::network_id::NetworkId;
use super::networks::{main_params, regtest_params, testnet_params, unittest_params};
use super::ParamsError;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

// =============================================================================
// Registry
// =============================================================================

/// One sealed parameter set per network
#[derive(Debug, Clone)]
pub struct ParameterRegistry {
    sets: [ChainParams; 4],
}

impl ParameterRegistry {
    /// Build and verify all four networks
    pub fn build() -> Result<Self, ParamsError> {
        let main = main_params()?;
        let testnet = testnet_params(&main)?;
        let regtest = regtest_params(&testnet)?;
        let unittest = unittest_params(&main)?;

        let registry = Self {
            sets: [main, testnet, regtest, unittest],
        };
        registry.check_distinct_magic()?;

        log::info!(
            "Built chain parameters for {} networks",
            registry.sets.len()
        );
        Ok(registry)
    }

    fn check_distinct_magic(&self) -> Result<(), ParamsError> {
        for (i, a) in self.sets.iter().enumerate() {
            for b in &self.sets[i + 1..] {
                if a.message_start == b.message_start {
                    return Err(ParamsError::DuplicateMagic {
                        first: a.network,
                        second: b.network,
                        magic: hex::encode(a.message_start),
                    });
                }
            }
        }
        Ok(())
    }

    /// Parameter set for `network`
    pub fn get(&self, network: NetworkId) -> &ChainParams {
        &self.sets[network.index()]
    }

    /// Parameter set by name. Unknown names are an error, never Main.
    pub fn lookup(&self, name: &str) -> Result<&ChainParams, ParamsError> {
        let network: NetworkId = name.parse()?;
        Ok(self.get(network))
    }

    /// All sets in `NetworkId::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = &ChainParams> {
        self.sets.iter()
    }
}

// =============================================================================
// Selection
// =============================================================================

/// The network a process (or test) runs on
#[derive(Debug)]
pub struct Selection<'r> {
    registry: &'r ParameterRegistry,
    active: RwLock<Option<NetworkId>>,
}

impl<'r> Selection<'r> {
    pub fn new(registry: &'r ParameterRegistry) -> Self {
        Self {
            registry,
            active: RwLock::new(None),
        }
    }

    /// Make `network` the active one. Selecting again replaces it.
    pub fn select(&self, network: NetworkId) -> &'r ChainParams {
        let mut active = self.active.write();
        if *active != Some(network) {
            log::info!("Selected network: {}", network);
        }
        *active = Some(network);
        self.registry.get(network)
    }

    /// The active parameter set, if one was selected
    pub fn try_current(&self) -> Result<&'r ChainParams, ParamsError> {
        let active = *self.active.read();
        active
            .map(|network| self.registry.get(network))
            .ok_or(ParamsError::NetworkNotSelected)
    }

    /// The active parameter set.
    ///
    /// # Panics
    /// If no network was selected.
    pub fn current(&self) -> &'r ChainParams {
        match self.try_current() {
            Ok(params) => params,
            Err(e) => {
                log::error!("Chain parameters read before selection");
                panic!("{}", e);
            }
        }
    }

    /// Active network id, if any
    pub fn network(&self) -> Option<NetworkId> {
        *self.active.read()
    }
}

// =============================================================================
// Process-wide Handle
// =============================================================================

static REGISTRY: Lazy<ParameterRegistry> = Lazy::new(|| match ParameterRegistry::build() {
    Ok(registry) => registry,
    Err(e) => {
        log::error!("Failed to build chain parameters: {}", e);
        panic!("invalid chain parameters: {}", e);
    }
});

static SELECTION: Lazy<Selection<'static>> = Lazy::new(|| Selection::new(&REGISTRY));

/// The process-wide registry
pub fn registry() -> &'static ParameterRegistry {
    &REGISTRY
}

/// Select the network this process runs on
pub fn select_params(network: NetworkId) -> &'static ChainParams {
    SELECTION.select(network)
}

/// The active parameter set.
///
/// # Panics
/// If [`select_params`] was never called.
pub fn params() -> &'static ChainParams {
    SELECTION.current()
}

/// The active parameter set, or `NetworkNotSelected`
pub fn try_params() -> Result<&'static ChainParams, ParamsError> {
    SELECTION.try_current()
}

/// Parameter set for a specific network, regardless of selection
pub fn params_for(network: NetworkId) -> &'static ChainParams {
    REGISTRY.get(network)
}

// =============================================================================
// Tests
// =============================================================================
