//! # Cell networks
//!
//! In a simulation, every cell owns a private copy of the network. A `NetworkTemplate`
//! holds the shared prototype together with a `SimulationConfig`, and hands out
//! `CellNetwork` copies that carry their own random generator:
//!
//! ```rust
//! use cell_bn_sim::cell::{InputThreshold, NetworkTemplate, SimulationConfig};
//! use cell_bn_sim::{BooleanNetwork, NetworkDefinition, NodeSpec};
//! use std::collections::HashMap;
//!
//! let network = BooleanNetwork::try_from_definition(&NetworkDefinition {
//!     nodes: vec![
//!         NodeSpec::input("oxygen", true),
//!         NodeSpec::internal("HIF1", "!oxygen"),
//!         NodeSpec::internal("Necrosis", "HIF1").output(),
//!     ],
//! })
//! .unwrap();
//! let config = SimulationConfig::default().with_seed(1);
//! let mut template = NetworkTemplate::new(network, config);
//!
//! let thresholds = vec![InputThreshold::new("o2", "oxygen", 5.0)];
//! let mut cell = template.spawn();
//! cell.apply_environment(&thresholds, &HashMap::from([("o2".to_string(), 0.5)]))
//!     .unwrap();
//! cell.propagate_default().unwrap();
//! assert_eq!(Some(&true), cell.output_states().get("Necrosis"));
//!
//! // The template is never modified by its cells.
//! assert_eq!(Some(false), template.network().get_state("Necrosis"));
//! ```
//!
//! A `CellNetwork` cannot be cloned, but it is `Send`, so a population can be stepped
//! on several threads at once.
