use crate::error::{DefinitionFormatError, InputStateError, NetworkDefinitionError};
use crate::{
    BooleanNetwork, FnLogic, LogicExpression, NetworkDefinition, Node, NodeId, NodeIdIterator,
    NodeSpec, UpdateCache, ID_REGEX, RESERVED_NAMES,
};
use fxhash::FxBuildHasher;
use std::collections::HashMap;
use std::convert::TryFrom;
use std::ops::Index;
use std::path::Path;
use std::sync::OnceLock;

/// Basic methods for safely building `BooleanNetwork`s.
impl BooleanNetwork {
    /// Build a new `BooleanNetwork` from a `NetworkDefinition`.
    ///
    /// The definition is rejected if it contains duplicate or invalid names, input nodes with
    /// logic, non-input nodes without logic, unparseable logic, or logic referencing nodes
    /// that are not part of the definition. Every node starts in its `default_state`.
    pub fn try_from_definition(
        definition: &NetworkDefinition,
    ) -> Result<BooleanNetwork, NetworkDefinitionError> {
        let mut nodes = Vec::with_capacity(definition.nodes.len());
        let mut node_to_index =
            HashMap::with_capacity_and_hasher(definition.nodes.len(), FxBuildHasher::default());
        for spec in &definition.nodes {
            let node = Self::build_node(spec)?;
            if node_to_index.contains_key(&node.name) {
                return Err(NetworkDefinitionError::DuplicateNode(node.name));
            }
            node_to_index.insert(node.name.clone(), NodeId(nodes.len()));
            nodes.push(node);
        }

        let bound_logic = nodes
            .iter()
            .map(|node| Self::bind_node(node, &node_to_index))
            .collect::<Result<Vec<_>, _>>()?;

        let bn = BooleanNetwork {
            nodes,
            bound_logic,
            node_to_index,
            cache: OnceLock::new(),
        };
        tracing::debug!(
            "Built Boolean network with {} nodes ({} inputs, {} outputs).",
            bn.num_nodes(),
            bn.input_nodes().len(),
            bn.output_nodes().len()
        );
        Ok(bn)
    }

    /// Load a network from a `.json` definition or a `.bnet` model file.
    pub fn try_from_file<T: AsRef<Path>>(
        path: T,
    ) -> Result<BooleanNetwork, DefinitionFormatError> {
        let definition = NetworkDefinition::try_from_file(path)?;
        Ok(BooleanNetwork::try_from_definition(&definition)?)
    }

    /// Add a new node to this network.
    ///
    /// The logic of the new node can reference itself and any existing node. Since existing
    /// nodes were validated without it, none of them can depend on the new node.
    ///
    /// This changes the network topology, so the update cache is invalidated.
    pub fn add_node(&mut self, spec: NodeSpec) -> Result<NodeId, NetworkDefinitionError> {
        let node = Self::build_node(&spec)?;
        if self.node_to_index.contains_key(&node.name) {
            return Err(NetworkDefinitionError::DuplicateNode(node.name));
        }
        let id = NodeId(self.nodes.len());
        self.node_to_index.insert(node.name.clone(), id);
        match Self::bind_node(&node, &self.node_to_index) {
            Ok(bound) => {
                self.nodes.push(node);
                self.bound_logic.push(bound);
            }
            Err(e) => {
                self.node_to_index.remove(&node.name);
                return Err(e);
            }
        }
        self.invalidate_cache();
        tracing::debug!("Added node `{}` to Boolean network.", spec.name);
        Ok(id)
    }

    /// Remove the node called `name` from this network and return it.
    ///
    /// A node that appears in the logic of another node cannot be removed. Ids of nodes declared
    /// after the removed node are shifted by one.
    ///
    /// This changes the network topology, so the update cache is invalidated.
    pub fn remove_node(&mut self, name: &str) -> Result<Node, NetworkDefinitionError> {
        let id = self
            .find_node(name)
            .ok_or_else(|| NetworkDefinitionError::UnknownNode(name.to_string()))?;
        if let Some(dependent) = self.dependents(id).into_iter().find(|it| *it != id) {
            return Err(NetworkDefinitionError::ReferencedNode {
                node: name.to_string(),
                dependent: self.get_node_name(dependent).clone(),
            });
        }

        let removed = self.nodes.remove(id.0);
        self.node_to_index.clear();
        for (i, node) in self.nodes.iter().enumerate() {
            self.node_to_index.insert(node.name.clone(), NodeId(i));
        }
        // Indices have shifted, so all logic must be bound again.
        self.bound_logic = self
            .nodes
            .iter()
            .map(|node| Self::bind_node(node, &self.node_to_index))
            .collect::<Result<Vec<_>, _>>()?;
        self.invalidate_cache();
        tracing::debug!("Removed node `{}` from Boolean network.", name);
        Ok(removed)
    }

    /// Export the structure and default states of this network as a `NetworkDefinition`.
    ///
    /// Building a network from the result produces a network equal to this one after `reset`.
    pub fn to_definition(&self) -> NetworkDefinition {
        let nodes = self
            .nodes
            .iter()
            .map(|node| NodeSpec {
                name: node.name.clone(),
                is_input: node.is_input,
                is_output: node.is_output,
                logic: node.logic.as_ref().map(|it| it.get_text().to_string()),
                default_state: node.default_state,
            })
            .collect();
        NetworkDefinition { nodes }
    }

    /// A static check that allows to verify validity of a node name.
    ///
    /// Names are alphanumeric strings (possibly containing `_`) which do not coincide with
    /// Boolean constants or keyword operators.
    pub fn is_valid_name(name: &str) -> bool {
        ID_REGEX.is_match(name) && !RESERVED_NAMES.contains(&name)
    }

    /// **(internal)** Validate a single `NodeSpec` and create the corresponding `Node`.
    fn build_node(spec: &NodeSpec) -> Result<Node, NetworkDefinitionError> {
        if !Self::is_valid_name(&spec.name) {
            return Err(NetworkDefinitionError::InvalidName(spec.name.clone()));
        }
        let logic = match (spec.is_input, spec.logic.as_ref()) {
            (true, Some(_)) => {
                return Err(NetworkDefinitionError::InputWithLogic(spec.name.clone()));
            }
            (false, None) => {
                return Err(NetworkDefinitionError::MissingLogic(spec.name.clone()));
            }
            (true, None) => None,
            (false, Some(text)) => Some(LogicExpression::parse(text).map_err(|source| {
                NetworkDefinitionError::InvalidLogic {
                    node: spec.name.clone(),
                    source,
                }
            })?),
        };
        Ok(Node {
            name: spec.name.clone(),
            is_input: spec.is_input,
            is_output: spec.is_output,
            state: spec.default_state,
            default_state: spec.default_state,
            logic,
        })
    }

    /// **(internal)** Resolve the logic of `node` using the given name index.
    fn bind_node(
        node: &Node,
        index: &HashMap<String, NodeId, FxBuildHasher>,
    ) -> Result<Option<FnLogic>, NetworkDefinitionError> {
        match &node.logic {
            None => Ok(None),
            Some(logic) => {
                let resolve = |name: &str| index.get(name).cloned();
                FnLogic::bind(logic.as_logic(), &resolve)
                    .map(Some)
                    .map_err(|missing| NetworkDefinitionError::UndefinedReference {
                        node: node.name.clone(),
                        missing,
                    })
            }
        }
    }

    /// **(internal)** Drop all data derived from the network topology.
    fn invalidate_cache(&mut self) {
        self.cache.take();
    }

    /// **(internal)** The update cache, built on first use.
    pub(crate) fn update_cache(&self) -> &UpdateCache {
        self.cache.get_or_init(|| UpdateCache::build(&self.nodes))
    }
}

/// Some utility methods for accessing the structure of a `BooleanNetwork`.
impl BooleanNetwork {
    /// The number of nodes in this `BooleanNetwork`.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Return an iterator over all node ids of this network.
    pub fn nodes(&self) -> NodeIdIterator {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Find a `NodeId` corresponding to the given node `name`.
    pub fn find_node(&self, name: &str) -> Option<NodeId> {
        self.node_to_index.get(name).cloned()
    }

    /// Return the node object based on the given `NodeId`.
    pub fn get_node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Shorthand for `self.get_node(id).get_name()`.
    pub fn get_node_name(&self, id: NodeId) -> &String {
        &self.nodes[id.0].name
    }

    /// The logic of the given node, bound to the ids of this network.
    pub fn get_bound_logic(&self, id: NodeId) -> Option<&FnLogic> {
        self.bound_logic[id.0].as_ref()
    }

    /// Ids of all input nodes, in declaration order.
    pub fn input_nodes(&self) -> Vec<NodeId> {
        self.nodes().filter(|id| self[*id].is_input).collect()
    }

    /// Ids of all output nodes, in declaration order.
    pub fn output_nodes(&self) -> Vec<NodeId> {
        self.nodes().filter(|id| self[*id].is_output).collect()
    }

    /// Sorted ids of nodes eligible for asynchronous update (non-input nodes with logic).
    ///
    /// The list is cached and only recomputed after `add_node` or `remove_node`.
    pub fn updatable_nodes(&self) -> &[NodeId] {
        self.update_cache().updatable()
    }

    /// Return a sorted list of nodes that appear in the logic of the given `target` node.
    pub fn dependencies(&self, target: NodeId) -> Vec<NodeId> {
        self.bound_logic[target.0]
            .as_ref()
            .map(|it| it.collect_arguments())
            .unwrap_or_default()
    }

    /// Return a sorted list of nodes whose logic references the given `source` node.
    pub fn dependents(&self, source: NodeId) -> Vec<NodeId> {
        self.nodes()
            .filter(|id| self.dependencies(*id).binary_search(&source).is_ok())
            .collect()
    }
}

/// Access to node states.
impl BooleanNetwork {
    /// Pin the states of input nodes.
    ///
    /// Every name must refer to an existing input node. The whole mapping is validated
    /// before any state is changed, so on error, the network is left untouched.
    pub fn set_input_states<I, S>(&mut self, states: I) -> Result<(), InputStateError>
    where
        I: IntoIterator<Item = (S, bool)>,
        S: AsRef<str>,
    {
        let mut resolved = Vec::new();
        for (name, value) in states {
            let name = name.as_ref();
            let id = self
                .find_node(name)
                .ok_or_else(|| InputStateError::UnknownNode(name.to_string()))?;
            if !self[id].is_input {
                return Err(InputStateError::NotAnInput(name.to_string()));
            }
            resolved.push((id, value));
        }
        for (id, value) in resolved {
            self.nodes[id.0].set_state(value);
        }
        Ok(())
    }

    /// A snapshot of all node states, indexed by node name.
    ///
    /// The result is a copy; changing it does not affect the network.
    pub fn get_all_states(&self) -> HashMap<String, bool> {
        self.nodes
            .iter()
            .map(|node| (node.name.clone(), node.state))
            .collect()
    }

    /// A snapshot of the states of output nodes, indexed by node name.
    pub fn get_output_states(&self) -> HashMap<String, bool> {
        self.nodes
            .iter()
            .filter(|node| node.is_output)
            .map(|node| (node.name.clone(), node.state))
            .collect()
    }

    /// The current state of the node called `name`, if it exists.
    pub fn get_state(&self, name: &str) -> Option<bool> {
        self.find_node(name).map(|id| self[id].state)
    }

    /// A snapshot of all node states, indexed by `NodeId`.
    pub fn state_vector(&self) -> Vec<bool> {
        self.nodes.iter().map(|node| node.state).collect()
    }

    /// Restore every node (inputs included) to its default state.
    pub fn reset(&mut self) {
        for node in self.nodes.iter_mut() {
            node.state = node.default_state;
        }
    }
}

impl TryFrom<&NetworkDefinition> for BooleanNetwork {
    type Error = NetworkDefinitionError;

    fn try_from(value: &NetworkDefinition) -> Result<Self, Self::Error> {
        BooleanNetwork::try_from_definition(value)
    }
}

impl TryFrom<NetworkDefinition> for BooleanNetwork {
    type Error = NetworkDefinitionError;

    fn try_from(value: NetworkDefinition) -> Result<Self, Self::Error> {
        BooleanNetwork::try_from_definition(&value)
    }
}

/// Two networks are equal when they have the same nodes (including current states).
/// Cached data is not compared.
impl PartialEq for BooleanNetwork {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

impl Eq for BooleanNetwork {}

/// Allow indexing `BooleanNetwork` using `NodeId` objects.
impl Index<NodeId> for BooleanNetwork {
    type Output = Node;

    fn index(&self, index: NodeId) -> &Self::Output {
        self.get_node(index)
    }
}
