//! Structural analysis of the dependencies between the nodes of a `BooleanNetwork`.
//!
//! A node `x` *depends* on a node `y` if `y` appears in the logic of `x`. When the resulting
//! graph has no cycle (self-loops included), every node is a function of the inputs only, so
//! enough asynchronous steps always reach one exact fixed point. Cyclic networks can settle in
//! different states or oscillate forever.

use crate::{BooleanNetwork, NodeId};

/// A directed graph where an edge `y -> x` means that `y` appears in the logic of `x`.
#[derive(Clone, Debug)]
pub struct DependencyGraph {
    regulators: Vec<Vec<NodeId>>,
    targets: Vec<Vec<NodeId>>,
}

impl From<&BooleanNetwork> for DependencyGraph {
    fn from(network: &BooleanNetwork) -> Self {
        let mut targets = vec![Vec::new(); network.num_nodes()];
        let regulators = network
            .nodes()
            .map(|target| {
                let regulators = network.dependencies(target);
                for regulator in &regulators {
                    targets[regulator.to_index()].push(target);
                }
                regulators
            })
            .collect();
        DependencyGraph {
            regulators,
            targets,
        }
    }
}

impl DependencyGraph {
    pub fn num_nodes(&self) -> usize {
        self.regulators.len()
    }

    /// Sorted list of nodes referenced by the logic of `target`.
    pub fn regulators(&self, target: NodeId) -> &[NodeId] {
        &self.regulators[target.to_index()]
    }

    /// Sorted list of nodes whose logic references `regulator`.
    pub fn targets(&self, regulator: NodeId) -> &[NodeId] {
        &self.targets[regulator.to_index()]
    }

    /// Order the nodes such that every node comes after all of its regulators.
    ///
    /// Returns `None` when the graph contains a cycle. The order only depends on the graph,
    /// so it is the same for every copy of a network.
    pub fn topological_order(&self) -> Option<Vec<NodeId>> {
        let mut pending: Vec<usize> = self.regulators.iter().map(|it| it.len()).collect();
        let mut ready: Vec<NodeId> = (0..self.num_nodes())
            .filter(|i| pending[*i] == 0)
            .map(NodeId::from_index)
            .rev()
            .collect();
        let mut order = Vec::with_capacity(self.num_nodes());
        while let Some(node) = ready.pop() {
            order.push(node);
            for target in self.targets(node).iter().rev() {
                pending[target.to_index()] -= 1;
                if pending[target.to_index()] == 0 {
                    ready.push(*target);
                }
            }
        }
        // Nodes on (or below) a cycle never run out of pending regulators.
        if order.len() == self.num_nodes() {
            Some(order)
        } else {
            None
        }
    }

    /// True if the graph has no cycles (self-loops included).
    pub fn is_acyclic(&self) -> bool {
        self.topological_order().is_some()
    }
}

impl BooleanNetwork {
    /// True if no node depends on itself, directly or through other nodes.
    ///
    /// For an acyclic network, enough propagation steps always lead to the same fixed point.
    pub fn is_acyclic(&self) -> bool {
        DependencyGraph::from(self).is_acyclic()
    }
}

#[cfg(test)]
mod tests {
    use crate::dependency_graph::DependencyGraph;
    use crate::{BooleanNetwork, NetworkDefinition, NodeSpec};

    fn build(nodes: Vec<NodeSpec>) -> BooleanNetwork {
        BooleanNetwork::try_from_definition(&NetworkDefinition { nodes }).unwrap()
    }

    #[test]
    fn regulators_and_targets() {
        let bn = build(vec![
            NodeSpec::input("oxygen", true),
            NodeSpec::internal("HIF1", "!oxygen"),
            NodeSpec::internal("VEGF", "HIF1 | oxygen"),
        ]);
        let graph = DependencyGraph::from(&bn);
        let oxygen = bn.find_node("oxygen").unwrap();
        let hif1 = bn.find_node("HIF1").unwrap();
        let vegf = bn.find_node("VEGF").unwrap();
        assert_eq!(3, graph.num_nodes());
        assert!(graph.regulators(oxygen).is_empty());
        assert_eq!(&[oxygen, hif1], graph.regulators(vegf));
        assert_eq!(&[hif1, vegf], graph.targets(oxygen));
        assert_eq!(Some(vec![oxygen, hif1, vegf]), graph.topological_order());
    }

    #[test]
    fn order_follows_dependencies() {
        // Declared in reverse, so the order cannot just follow the ids.
        let bn = build(vec![
            NodeSpec::internal("C", "B & A"),
            NodeSpec::internal("B", "!A"),
            NodeSpec::input("A", false),
        ]);
        let order = DependencyGraph::from(&bn).topological_order().unwrap();
        let names: Vec<&str> = order
            .iter()
            .map(|id| bn.get_node_name(*id).as_str())
            .collect();
        assert_eq!(vec!["A", "B", "C"], names);
        assert!(bn.is_acyclic());
    }

    #[test]
    fn cycles_are_detected() {
        let self_loop = build(vec![NodeSpec::internal("S", "!S")]);
        assert!(!self_loop.is_acyclic());

        let toggle = build(vec![
            NodeSpec::internal("X", "!Y"),
            NodeSpec::internal("Y", "!X"),
        ]);
        assert!(!toggle.is_acyclic());

        // A cycle further downstream still makes the whole network cyclic.
        let downstream = build(vec![
            NodeSpec::input("A", false),
            NodeSpec::internal("B", "A | C"),
            NodeSpec::internal("C", "B"),
            NodeSpec::internal("D", "A"),
        ]);
        assert!(!downstream.is_acyclic());
        assert_eq!(None, DependencyGraph::from(&downstream).topological_order());

        let constants = build(vec![NodeSpec::internal("K", "true")]);
        assert!(constants.is_acyclic());
    }
}
