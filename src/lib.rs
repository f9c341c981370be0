//! A library for simulating asynchronous Boolean regulatory networks inside populations of
//! spatially distributed cells.
//!
//! Every cell holds its own private copy of a `BooleanNetwork`. The external driver pins the
//! values of *input* nodes (typically based on microenvironment concentrations), runs a number
//! of asynchronous update steps, and then reads the *output* nodes to decide cell fate.
//!
//! The main components are:
//!
//!  - `LogicExpression`: a parsed Boolean formula over node names (`&`, `|`, `!`, parentheses).
//!  - `BooleanNetwork`: the set of `Node`s, their bound update logic and the cached
//!    list of updatable nodes. Implements the asynchronous update algorithm.
//!  - `cell::NetworkTemplate` and `cell::CellNetwork`: the per-cell instancing discipline.
//!    A `CellNetwork` is an exclusive handle that can only be obtained by deep-copying a template.
//!
//! See the `tutorial` module for a guided overview.

#[macro_use]
extern crate lazy_static;

use fxhash::FxBuildHasher;
use std::collections::HashMap;
use std::iter::Map;
use std::ops::Range;
use std::sync::OnceLock;

pub mod cell;
pub mod dependency_graph;
pub mod error;
pub mod tutorial;

/// **(internal)** Implements `.bnet` parser for `NetworkDefinition` objects.
mod _bnet_parser;
/// **(internal)** Implements the tokenizer and parser of `LogicExpression` strings.
mod _logic_parser;

/// **(internal)** Construction, validation and topology changes of `BooleanNetwork`.
mod _impl_boolean_network;
/// **(internal)** `BooleanNetwork` to `.bnet` string.
mod _impl_boolean_network_display;
/// **(internal)** The asynchronous update algorithm of `BooleanNetwork`.
mod _impl_boolean_network_update;
/// **(internal)** Binding and evaluation of `FnLogic`.
mod _impl_fn_logic;
/// **(internal)** Utility methods for `Logic`.
mod _impl_logic;
/// **(internal)** Utility methods for `LogicExpression`.
mod _impl_logic_expression;
/// **(internal)** JSON (de)serialization and file loading of `NetworkDefinition`.
mod _impl_network_definition;
/// **(internal)** Utility methods for `Node`.
mod _impl_node;
/// **(internal)** Utility methods for `NodeId`.
mod _impl_node_id;
/// **(internal)** Builder methods for `NodeSpec`.
mod _impl_node_spec;
/// **(internal)** Implementation of `UpdateCache`.
mod _impl_update_cache;
/// **(internal)** `Valuation` implementations.
mod _impl_valuation;

pub use _impl_valuation::Valuation;

/// Character class of the identifiers allowed as node names.
pub(crate) const ID_PATTERN: &str = "[a-zA-Z0-9_]+";

lazy_static! {
    /// A regular expression that matches the identifiers allowed as node names.
    static ref ID_REGEX: regex::Regex = regex::Regex::new(&format!("^{}$", ID_PATTERN)).unwrap();
}

/// Names that can appear in a logic expression but are never node references.
pub(crate) const RESERVED_NAMES: [&str; 9] = [
    "true", "True", "1", "false", "False", "0", "and", "or", "not",
];

/// A type-safe index of a `Node` inside a `BooleanNetwork`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(usize);

/// Possible binary Boolean operators that can appear in a `LogicExpression`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BinaryOp {
    And,
    Or,
}

/// A Boolean formula over node *names*, as produced by the parser.
///
/// This is the structure behind a `LogicExpression`. It is not tied to any particular network,
/// so it can be evaluated against any name-to-value mapping.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Logic {
    Const(bool),
    Var(String),
    Not(Box<Logic>),
    Binary(BinaryOp, Box<Logic>, Box<Logic>),
}

/// A Boolean formula together with the text it was parsed from.
///
/// The text is immutable. Evaluation is a pure function of the supplied `Valuation`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogicExpression {
    text: String,
    root: Logic,
}

/// A Boolean formula bound to the `NodeId`s of one specific `BooleanNetwork`.
///
/// This is the form used by the update algorithm: node references are resolved once when
/// the network topology is built, so evaluation performs no name lookups.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum FnLogic {
    Const(bool),
    Var(NodeId),
    Not(Box<FnLogic>),
    Binary(BinaryOp, Box<FnLogic>, Box<FnLogic>),
}

/// A declarative record describing one node of a network.
///
/// For input nodes, `logic` must be `None`. For every other node, it must contain the text
/// of a valid `LogicExpression`.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NodeSpec {
    pub name: String,
    #[serde(default)]
    pub is_input: bool,
    #[serde(default)]
    pub is_output: bool,
    #[serde(default)]
    pub logic: Option<String>,
    #[serde(default)]
    pub default_state: bool,
}

/// An ordered list of `NodeSpec` records from which a `BooleanNetwork` is built.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NetworkDefinition {
    pub nodes: Vec<NodeSpec>,
}

/// One regulatory element (gene or signal) of a `BooleanNetwork`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Node {
    name: String,
    is_input: bool,
    is_output: bool,
    state: bool,
    default_state: bool,
    logic: Option<LogicExpression>,
}

/// **(internal)** Data derived from the network topology that is expensive to rebuild.
///
/// The cache is only invalidated when nodes are added or removed. Changing node *states*
/// never touches it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct UpdateCache {
    updatable: Vec<NodeId>,
}

/// A Boolean regulatory network with asynchronous update semantics.
///
/// The network owns all of its nodes; `Clone` produces a fully independent deep copy, since
/// no part of the structure is shared by reference.
#[derive(Clone, Debug)]
pub struct BooleanNetwork {
    nodes: Vec<Node>,
    bound_logic: Vec<Option<FnLogic>>,
    node_to_index: HashMap<String, NodeId, FxBuildHasher>,
    cache: OnceLock<UpdateCache>,
}

/// An iterator over all `NodeId`s of a `BooleanNetwork`.
pub type NodeIdIterator = Map<Range<usize>, fn(usize) -> NodeId>;
