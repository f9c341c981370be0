use crate::{LogicExpression, Node};
use std::fmt::{Display, Error, Formatter};

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.name)
    }
}

impl Node {
    /// Human-readable name of this node.
    pub fn get_name(&self) -> &String {
        &self.name
    }

    /// Input nodes are driven externally and never changed by the update algorithm.
    pub fn is_input(&self) -> bool {
        self.is_input
    }

    /// Output nodes are read externally as fate signals. Otherwise, they behave
    /// as ordinary nodes.
    pub fn is_output(&self) -> bool {
        self.is_output
    }

    /// Current Boolean value of this node.
    pub fn get_state(&self) -> bool {
        self.state
    }

    /// Value assigned to this node when the network is built or reset.
    pub fn get_default_state(&self) -> bool {
        self.default_state
    }

    /// The logic expression of this node (`None` for input nodes).
    pub fn get_logic(&self) -> Option<&LogicExpression> {
        self.logic.as_ref()
    }

    /// A node is updatable if it is not an input and has a logic expression.
    pub fn is_updatable(&self) -> bool {
        !self.is_input && self.logic.is_some()
    }

    /// **(internal)** Overwrite the current state of this node.
    pub(crate) fn set_state(&mut self, value: bool) {
        self.state = value;
    }
}

#[cfg(test)]
mod tests {
    use crate::{BooleanNetwork, NetworkDefinition, NodeSpec};

    #[test]
    fn basic_node_test() {
        let definition = NetworkDefinition {
            nodes: vec![
                NodeSpec::input("A", true),
                NodeSpec::internal("B", "!A").output(),
            ],
        };
        let bn = BooleanNetwork::try_from_definition(&definition).unwrap();
        let a = &bn[bn.find_node("A").unwrap()];
        assert_eq!("A", a.to_string().as_str());
        assert!(a.is_input() && !a.is_output() && !a.is_updatable());
        assert!(a.get_state() && a.get_default_state());
        assert!(a.get_logic().is_none());
        let b = &bn[bn.find_node("B").unwrap()];
        assert_eq!("B", b.get_name());
        assert!(!b.is_input() && b.is_output() && b.is_updatable());
        assert_eq!("!A", b.get_logic().unwrap().get_text());
        assert!(!b.get_state());
    }
}
