//! This is a documentation-only module which describes how to use this crate
//! to simulate Boolean regulatory networks inside a population of cells.
//!
//! Table of contents:
//!  - [Logic expressions](./p01_logic_expressions/index.html)
//!  - [Boolean networks](./p02_boolean_network/index.html)
//!  - [Cell networks](./p03_cell_networks/index.html)

pub mod p01_logic_expressions;
pub mod p02_boolean_network;
pub mod p03_cell_networks;
