use crate::error::EvaluationError;
use crate::{BooleanNetwork, NodeId};
use rand::Rng;

/// The asynchronous update algorithm.
///
/// In every step, exactly one node is picked uniformly at random from the updatable nodes
/// (non-input nodes with logic) and its logic is evaluated against the *current* state of the
/// whole network. If the result differs from the state of the node, the new value is
/// committed. Otherwise, the step is a no-op.
///
/// Input nodes are never part of the updatable set, so no sequence of steps can change them.
/// There is no convergence detection: networks with cyclic logic may never reach a fixed point,
/// and the number of steps is always chosen by the caller.
impl BooleanNetwork {
    /// Perform one asynchronous update attempt.
    ///
    /// Returns the id of the updated node, or `None` if the state did not change (either
    /// because the selected node is stable, or because there are no updatable nodes).
    /// An evaluation error aborts the attempt before anything is committed.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<NodeId>, EvaluationError> {
        let updatable = self.updatable_nodes();
        if updatable.is_empty() {
            return Ok(None);
        }
        let candidate = updatable[rng.gen_range(0..updatable.len())];
        let value = self.next_state(candidate)?;
        if value == self[candidate].get_state() {
            return Ok(None);
        }
        self.nodes[candidate.0].set_state(value);
        tracing::trace!(
            "Node `{}` updated to {}.",
            self.get_node_name(candidate),
            value
        );
        Ok(Some(candidate))
    }

    /// Perform exactly `steps` asynchronous update attempts.
    ///
    /// Returns the last node that changed during the propagation (`None` if no node changed).
    /// The first evaluation error stops the propagation and is returned to the caller;
    /// updates committed by earlier steps are kept.
    pub fn propagate<R: Rng + ?Sized>(
        &mut self,
        steps: usize,
        rng: &mut R,
    ) -> Result<Option<NodeId>, EvaluationError> {
        let mut last_updated = None;
        let mut updates = 0usize;
        for _ in 0..steps {
            if let Some(updated) = self.step(rng)? {
                last_updated = Some(updated);
                updates += 1;
            }
        }
        tracing::debug!(
            "Propagation finished: {} attempts, {} updates.",
            steps,
            updates
        );
        Ok(last_updated)
    }

    /// Evaluate the logic of the given node against the current network state.
    ///
    /// For nodes without logic (inputs), this is simply their current state.
    pub fn next_state(&self, id: NodeId) -> Result<bool, EvaluationError> {
        match &self.bound_logic[id.0] {
            None => Ok(self.nodes[id.0].get_state()),
            Some(logic) => {
                let lookup = |it: NodeId| self.nodes.get(it.0).map(|node| node.get_state());
                logic.evaluate(&lookup)
            }
        }
    }

    /// Sorted ids of updatable nodes whose logic disagrees with their current state.
    ///
    /// These are exactly the nodes a `step` could change right now.
    pub fn unstable_nodes(&self) -> Result<Vec<NodeId>, EvaluationError> {
        let mut result = Vec::new();
        for id in self.updatable_nodes() {
            if self.next_state(*id)? != self[*id].get_state() {
                result.push(*id);
            }
        }
        Ok(result)
    }

    /// True if no `step` can change the current state.
    pub fn is_fixed_point(&self) -> Result<bool, EvaluationError> {
        Ok(self.unstable_nodes()?.is_empty())
    }

    /// Assign a uniformly random value to every non-input node.
    ///
    /// This ignores `default_state` and never touches input nodes. It is never invoked
    /// implicitly by `step` or `propagate`.
    pub fn initialize_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for node in self.nodes.iter_mut().filter(|it| !it.is_input()) {
            node.set_state(rng.gen());
        }
    }
}
