use crate::error::EvaluationError;
use crate::Logic::*;
use crate::{BinaryOp, Logic, Valuation};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Constructor and destructor utility methods.
impl Logic {
    /// Create a `true` formula.
    pub fn mk_true() -> Logic {
        Const(true)
    }

    /// Create a `false` formula.
    pub fn mk_false() -> Logic {
        Const(false)
    }

    /// Create an `x` formula where `x` is a node name.
    pub fn mk_var(name: &str) -> Logic {
        Var(name.to_string())
    }

    /// Create a `!phi` formula, where `phi` is an inner `Logic`.
    pub fn mk_not(inner: Logic) -> Logic {
        Not(Box::new(inner))
    }

    /// Create a `phi 'op' psi` where `phi` and `psi` are arguments of `op` operator.
    pub fn mk_binary(op: BinaryOp, left: Logic, right: Logic) -> Logic {
        Binary(op, Box::new(left), Box::new(right))
    }

    /// Create a conjunction.
    pub fn and(self, other: Logic) -> Logic {
        Logic::mk_binary(BinaryOp::And, self, other)
    }

    /// Create a disjunction.
    pub fn or(self, other: Logic) -> Logic {
        Logic::mk_binary(BinaryOp::Or, self, other)
    }

    /// If `Var`, return the name, otherwise return `None`.
    pub fn as_var(&self) -> Option<&str> {
        match self {
            Var(name) => Some(name),
            _ => None,
        }
    }
}

impl Logic {
    /// Evaluate this formula using the given `Valuation`.
    ///
    /// Every referenced name must have a value. Both operands of a binary operator are always
    /// evaluated, hence a missing name is reported even if it could not influence the result.
    pub fn evaluate<V: Valuation + ?Sized>(&self, values: &V) -> Result<bool, EvaluationError> {
        Ok(match self {
            Const(value) => *value,
            Var(name) => values
                .value_of(name)
                .ok_or_else(|| EvaluationError::UnknownNode(name.clone()))?,
            Not(inner) => !inner.evaluate(values)?,
            Binary(op, left, right) => {
                let left = left.evaluate(values)?;
                let right = right.evaluate(values)?;
                op.apply(left, right)
            }
        })
    }

    /// Write all node names that appear in this formula into the given set.
    pub fn collect_names(&self, result: &mut BTreeSet<String>) {
        match self {
            Const(_) => {}
            Var(name) => {
                result.insert(name.clone());
            }
            Not(inner) => inner.collect_names(result),
            Binary(_, l, r) => {
                l.collect_names(result);
                r.collect_names(result);
            }
        }
    }
}

impl BinaryOp {
    /// Apply this operator to two Boolean values.
    pub fn apply(self, left: bool, right: bool) -> bool {
        match self {
            BinaryOp::And => left && right,
            BinaryOp::Or => left || right,
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            BinaryOp::And => "&",
            BinaryOp::Or => "|",
        };
        write!(f, "{}", symbol)
    }
}

/// Renders a fully parenthesised normal form of the formula.
impl Display for Logic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Const(value) => write!(f, "{}", value),
            Var(name) => write!(f, "{}", name),
            Not(inner) => write!(f, "!{}", inner),
            Binary(op, l, r) => write!(f, "({} {} {})", l, op, r),
        }
    }
}
