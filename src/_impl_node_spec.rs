use crate::NodeSpec;

/// Builder methods for `NodeSpec` records.
impl NodeSpec {
    /// An input node with the given default state.
    pub fn input(name: &str, default_state: bool) -> NodeSpec {
        NodeSpec {
            name: name.to_string(),
            is_input: true,
            is_output: false,
            logic: None,
            default_state,
        }
    }

    /// A non-input node governed by `logic`, initially `false`.
    pub fn internal(name: &str, logic: &str) -> NodeSpec {
        NodeSpec {
            name: name.to_string(),
            is_input: false,
            is_output: false,
            logic: Some(logic.to_string()),
            default_state: false,
        }
    }

    /// Mark this node as an output node.
    pub fn output(mut self) -> NodeSpec {
        self.is_output = true;
        self
    }

    /// Change the default state of this node.
    pub fn with_default(mut self, default_state: bool) -> NodeSpec {
        self.default_state = default_state;
        self
    }
}
