//! Error types of the network engine.
//!
//! Each concern has its own error enum, so that callers can distinguish a malformed formula
//! from a malformed network, or from an attempt to drive a node that is not an input.

use thiserror::Error;

/// An error produced while parsing the text of a `LogicExpression`.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LogicParseError {
    #[error("unknown operator `{0}`")]
    UnknownOperator(char),
    #[error("unexpected `)`")]
    UnexpectedClosingParenthesis,
    #[error("expected `)`")]
    MissingClosingParenthesis,
    #[error("expected formula, found nothing")]
    ExpectedFormula,
    #[error("unexpected tokens `{0}`, expecting formula")]
    UnexpectedTokens(String),
}

/// An error produced while evaluating a formula.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum EvaluationError {
    /// The formula references a node that has no value in the supplied valuation.
    #[error("unknown node `{0}` referenced in logic expression")]
    UnknownNode(String),
    /// A bound formula references a node index outside of the network.
    #[error("node index {0} is not part of this network")]
    UnboundNode(usize),
}

/// An error produced when a network definition is not well-formed.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum NetworkDefinitionError {
    #[error("duplicate node `{0}`")]
    DuplicateNode(String),
    #[error("`{0}` is not a valid node name")]
    InvalidName(String),
    #[error("logic of node `{node}` references undefined node `{missing}`")]
    UndefinedReference { node: String, missing: String },
    #[error("input node `{0}` cannot have a logic expression")]
    InputWithLogic(String),
    #[error("non-input node `{0}` has no logic expression")]
    MissingLogic(String),
    #[error("invalid logic of node `{node}`: {source}")]
    InvalidLogic {
        node: String,
        #[source]
        source: LogicParseError,
    },
    #[error("node `{node}` is referenced by the logic of `{dependent}`")]
    ReferencedNode { node: String, dependent: String },
    #[error("unknown node `{0}`")]
    UnknownNode(String),
}

/// An error produced by `BooleanNetwork::set_input_states`.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum InputStateError {
    #[error("cannot set state of unknown node `{0}`")]
    UnknownNode(String),
    #[error("node `{0}` is not an input node")]
    NotAnInput(String),
}

/// An error produced while reading a network definition from text or from a file.
#[derive(Debug, Error)]
pub enum DefinitionFormatError {
    #[error("file not readable: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON network definition: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid `.bnet` model, line {line}: {message}")]
    Bnet { line: usize, message: String },
    #[error("unknown file format `{0}`")]
    UnknownFormat(String),
    #[error(transparent)]
    Definition(#[from] NetworkDefinitionError),
}
