use crate::error::EvaluationError;
use crate::FnLogic::*;
use crate::{BinaryOp, BooleanNetwork, FnLogic, Logic, NodeId};
use std::collections::HashSet;

impl FnLogic {
    /// Resolve all names of a `Logic` tree into `NodeId`s using `resolve`.
    ///
    /// If a name cannot be resolved, it is returned as the error.
    pub fn bind<F>(logic: &Logic, resolve: &F) -> Result<FnLogic, String>
    where
        F: Fn(&str) -> Option<NodeId>,
    {
        Ok(match logic {
            Logic::Const(value) => Const(*value),
            Logic::Var(name) => Var(resolve(name).ok_or_else(|| name.clone())?),
            Logic::Not(inner) => Not(Box::new(FnLogic::bind(inner, resolve)?)),
            Logic::Binary(op, l, r) => Binary(
                *op,
                Box::new(FnLogic::bind(l, resolve)?),
                Box::new(FnLogic::bind(r, resolve)?),
            ),
        })
    }

    /// Evaluate this function, reading node values through `state`.
    ///
    /// The lookup returns `None` for ids that are not part of the valuation, which is reported
    /// as `EvaluationError::UnboundNode`.
    pub fn evaluate<F>(&self, state: &F) -> Result<bool, EvaluationError>
    where
        F: Fn(NodeId) -> Option<bool>,
    {
        Ok(match self {
            Const(value) => *value,
            Var(id) => state(*id).ok_or(EvaluationError::UnboundNode(id.to_index()))?,
            Not(inner) => !inner.evaluate(state)?,
            Binary(op, l, r) => {
                let l = l.evaluate(state)?;
                let r = r.evaluate(state)?;
                op.apply(l, r)
            }
        })
    }

    /// Return a sorted vector of all nodes that are actually used as inputs in this function.
    pub fn collect_arguments(&self) -> Vec<NodeId> {
        fn r_arguments(function: &FnLogic, args: &mut HashSet<NodeId>) {
            match function {
                Const(_) => (),
                Var(id) => {
                    args.insert(*id);
                }
                Not(inner) => r_arguments(inner, args),
                Binary(_, l, r) => {
                    r_arguments(l, args);
                    r_arguments(r, args);
                }
            };
        }
        let mut args = HashSet::new();
        r_arguments(self, &mut args);
        let mut result: Vec<NodeId> = args.into_iter().collect();
        result.sort();
        result
    }

    /// Convert this function back to a name-based `Logic` tree using the given `network`.
    pub fn to_logic(&self, network: &BooleanNetwork) -> Logic {
        match self {
            Const(value) => Logic::Const(*value),
            Var(id) => Logic::Var(network.get_node_name(*id).clone()),
            Not(inner) => Logic::mk_not(inner.to_logic(network)),
            Binary(op, l, r) => Logic::mk_binary(*op, l.to_logic(network), r.to_logic(network)),
        }
    }

    /// Create a `phi 'op' psi` where `phi` and `psi` are arguments of `op` operator.
    pub fn mk_binary(op: BinaryOp, left: FnLogic, right: FnLogic) -> FnLogic {
        Binary(op, Box::new(left), Box::new(right))
    }
}
