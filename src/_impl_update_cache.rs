use crate::{Node, NodeId, UpdateCache};

impl UpdateCache {
    /// Compute the cache for the given list of nodes.
    pub(crate) fn build(nodes: &[Node]) -> UpdateCache {
        let updatable = nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_updatable())
            .map(|(i, _)| NodeId(i))
            .collect();
        UpdateCache { updatable }
    }

    /// Sorted ids of nodes eligible for asynchronous update.
    pub(crate) fn updatable(&self) -> &[NodeId] {
        &self.updatable
    }
}
