//! Per-cell instancing of a `BooleanNetwork`.
//!
//! A population of cells shares one `NetworkTemplate`. Each cell obtains its own
//! `CellNetwork` by deep-copying the template, so stepping one cell never affects another
//! cell or the template. A `CellNetwork` owns its random generator, which makes a cell
//! reproducible from its seed and lets different cells run on different threads.

use crate::error::{DefinitionFormatError, EvaluationError, InputStateError};
use crate::BooleanNetwork;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// **(internal)** Implementation of `SimulationConfig` defaults and loading.
mod _impl_simulation_config;

/// **(internal)** Mapping of substance concentrations to input node states.
mod _impl_input_threshold;

pub use _impl_simulation_config::DEFAULT_PROPAGATION_STEPS;

/// **(internal)** Construction of templates and per-cell copies.
mod _impl_network_template;

/// **(internal)** The per-cell handle operations.
mod _impl_cell_network;

/// Parameters of the per-cell simulation.
///
/// All fields have defaults, so an empty JSON object is a valid configuration.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of update attempts performed by `CellNetwork::propagate_default`.
    pub propagation_steps: usize,
    /// If set, every new `CellNetwork` starts from uniformly random non-input states.
    pub randomize_initial_states: bool,
    /// Seed of the generator that derives per-cell seeds. Entropy is used when missing.
    pub seed: Option<u64>,
}

/// Binds a substance of the microenvironment to an input node.
///
/// The node is active whenever the concentration of the substance is strictly greater
/// than `threshold`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputThreshold {
    pub substance: String,
    pub node: String,
    pub threshold: f64,
}

/// The shared prototype of a cell population.
///
/// The template network itself is never stepped. Use `instantiate` or `spawn` to obtain
/// a `CellNetwork` that can be.
#[derive(Clone, Debug)]
pub struct NetworkTemplate {
    network: BooleanNetwork,
    config: SimulationConfig,
    seeds: StdRng,
}

/// An exclusive, independently mutable copy of a `BooleanNetwork` owned by a single cell.
///
/// `CellNetwork` is intentionally not `Clone`: the only way to get a new one is to
/// instantiate it from a `NetworkTemplate`.
#[derive(Debug)]
pub struct CellNetwork {
    network: BooleanNetwork,
    rng: StdRng,
    propagation_steps: usize,
}

/// An error produced by the operations of a `CellNetwork` or `NetworkTemplate`.
#[derive(Debug, Error)]
pub enum CellError {
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    #[error(transparent)]
    InputState(#[from] InputStateError),
    #[error(transparent)]
    DefinitionFormat(#[from] DefinitionFormatError),
    #[error("substance `{0}` is missing from the supplied concentrations")]
    MissingSubstance(String),
}
