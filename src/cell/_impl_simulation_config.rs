use crate::cell::SimulationConfig;
use crate::error::DefinitionFormatError;

/// Number of update attempts used when the configuration does not say otherwise.
pub const DEFAULT_PROPAGATION_STEPS: usize = 500;

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            propagation_steps: DEFAULT_PROPAGATION_STEPS,
            randomize_initial_states: false,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Read a configuration from its JSON representation. Missing fields use defaults.
    pub fn from_json(json: &str) -> Result<SimulationConfig, DefinitionFormatError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Copy of this configuration with the given generator seed.
    pub fn with_seed(mut self, seed: u64) -> SimulationConfig {
        self.seed = Some(seed);
        self
    }
}
