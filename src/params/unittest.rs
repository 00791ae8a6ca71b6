//! Mutable unit-test parameters
//!
//! Unit tests sometimes need to tweak a handful of consensus knobs. They
//! get an owned copy of the Unittest set to change; the shared registry
//! stays immutable.

use super::chain::ChainParams;
use super::network_id::NetworkId;
use super::registry::ParameterRegistry;

/// Owned, mutable copy of the Unittest parameters
#[derive(Debug, Clone)]
pub struct UnitTestParams {
    params: ChainParams,
}

impl UnitTestParams {
    /// Copy the Unittest set out of `registry`
    pub fn from_registry(registry: &ParameterRegistry) -> Self {
        Self {
            params: registry.get(NetworkId::Unittest).clone(),
        }
    }

    pub fn set_subsidy_halving_interval(&mut self, interval: u32) -> &mut Self {
        self.params.consensus.subsidy_halving_interval = interval;
        self
    }

    pub fn set_enforce_block_upgrade_majority(&mut self, majority: u32) -> &mut Self {
        self.params.consensus.enforce_block_upgrade_majority = majority;
        self
    }

    pub fn set_reject_block_outdated_majority(&mut self, majority: u32) -> &mut Self {
        self.params.consensus.reject_block_outdated_majority = majority;
        self
    }

    pub fn set_to_check_block_upgrade_majority(&mut self, window: u32) -> &mut Self {
        self.params.consensus.to_check_block_upgrade_majority = window;
        self
    }

    pub fn set_default_consistency_checks(&mut self, enabled: bool) -> &mut Self {
        self.params.policy.default_consistency_checks = enabled;
        self
    }

    pub fn set_allow_min_difficulty_blocks(&mut self, allowed: bool) -> &mut Self {
        self.params.policy.allow_min_difficulty_blocks = allowed;
        self
    }

    pub fn set_skip_proof_of_work_check(&mut self, skip: bool) -> &mut Self {
        self.params.policy.skip_proof_of_work_check = skip;
        self
    }

    /// Current values
    pub fn params(&self) -> &ChainParams {
        &self.params
    }

    pub fn into_params(self) -> ChainParams {
        self.params
    }
}

impl ParameterRegistry {
    /// Mutable copy of the Unittest parameters
    pub fn unittest_handle(&self) -> UnitTestParams {
        UnitTestParams::from_registry(self)
    }
}
