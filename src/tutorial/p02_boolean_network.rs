//! # Boolean networks
//!
//! A `BooleanNetwork` is built from a `NetworkDefinition`, which is just a list of
//! `NodeSpec` records. Input nodes have no logic and are only ever changed by the caller.
//! All other nodes must have a logic expression that only references nodes of the network.
//!
//! ```rust
//! use cell_bn_sim::{BooleanNetwork, NetworkDefinition, NodeSpec};
//!
//! let definition = NetworkDefinition {
//!     nodes: vec![
//!         NodeSpec::input("A", false),
//!         NodeSpec::internal("B", "!A"),
//!         NodeSpec::internal("C", "B").output(),
//!     ],
//! };
//! let network = BooleanNetwork::try_from_definition(&definition).unwrap();
//! assert_eq!(3, network.num_nodes());
//! assert!(network.is_acyclic());
//! ```
//!
//! The same definition can be read from JSON (`NetworkDefinition::from_json`) or from a
//! `.bnet` model (`NetworkDefinition::try_from_bnet`).
//!
//! The network is updated *asynchronously*: each `step` picks one non-input node uniformly
//! at random, evaluates its logic against the current state and commits the result.
//! The random generator is always supplied by the caller:
//!
//! ```rust
//! use cell_bn_sim::{BooleanNetwork, NetworkDefinition};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let definition = NetworkDefinition::try_from_bnet("A, A\nB, !A\nC, B\n").unwrap();
//! let mut network = BooleanNetwork::try_from_definition(&definition).unwrap();
//! let mut rng = StdRng::seed_from_u64(0);
//!
//! network.set_input_states([("A", false)]).unwrap();
//! network.propagate(100, &mut rng).unwrap();
//! assert_eq!(Some(true), network.get_state("C"));
//!
//! network.set_input_states([("A", true)]).unwrap();
//! network.propagate(100, &mut rng).unwrap();
//! assert_eq!(Some(false), network.get_state("C"));
//! assert!(network.is_fixed_point().unwrap());
//! ```
//!
//! There is no convergence detection. Networks with feedback (see the `dependency_graph`
//! module) may oscillate forever, so the number of steps is always the caller's choice.
