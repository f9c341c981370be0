use crate::cell::{CellNetwork, NetworkTemplate, SimulationConfig};
use crate::error::DefinitionFormatError;
use crate::BooleanNetwork;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

impl NetworkTemplate {
    /// Create a template from a fully constructed network.
    ///
    /// The per-cell seed generator is seeded by `config.seed`, or from system entropy
    /// when no seed is given.
    pub fn new(network: BooleanNetwork, config: SimulationConfig) -> NetworkTemplate {
        let seeds = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        NetworkTemplate {
            network,
            config,
            seeds,
        }
    }

    /// Load the template network from a `.json` or `.bnet` file.
    pub fn try_from_file<T: AsRef<Path>>(
        path: T,
        config: SimulationConfig,
    ) -> Result<NetworkTemplate, DefinitionFormatError> {
        let network = BooleanNetwork::try_from_file(path)?;
        Ok(NetworkTemplate::new(network, config))
    }

    pub fn network(&self) -> &BooleanNetwork {
        &self.network
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Deep-copy the template into a new `CellNetwork` driven by a generator seeded
    /// with `seed`.
    ///
    /// If `randomize_initial_states` is enabled, the non-input nodes of the copy are
    /// randomised once, using the new generator.
    pub fn instantiate(&self, seed: u64) -> CellNetwork {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut network = self.network.clone();
        if self.config.randomize_initial_states {
            network.initialize_random(&mut rng);
        }
        tracing::debug!(
            "Instantiated cell network with {} nodes (seed {}).",
            network.num_nodes(),
            seed
        );
        CellNetwork {
            network,
            rng,
            propagation_steps: self.config.propagation_steps,
        }
    }

    /// Instantiate a new `CellNetwork` with a seed drawn from the template's own generator.
    ///
    /// With a fixed `config.seed`, the sequence of spawned cells is reproducible.
    pub fn spawn(&mut self) -> CellNetwork {
        let seed = self.seeds.gen::<u64>();
        self.instantiate(seed)
    }
}
