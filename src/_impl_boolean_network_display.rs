use crate::{BooleanNetwork, FnLogic, NodeId};
use std::fmt::{Display, Error, Formatter};

impl BooleanNetwork {
    /// Produce a `.bnet` string representation of this model.
    ///
    /// Input nodes are written as identity rows (`X, X`), which is also how the `.bnet`
    /// reader recognizes them. Output flags and default states are not part of the format.
    ///
    /// A non-input node whose logic is a single variable is written as `(Y & Y)` whenever the
    /// plain row would be mistaken for an input (`X, X`) or for the header (`targets, factors`).
    pub fn to_bnet(&self) -> String {
        let mut model = "targets, factors\n".to_string();
        for id in self.nodes() {
            let name = self.get_node_name(id);
            let function = match self.get_bound_logic(id) {
                Some(FnLogic::Var(var)) => {
                    let var_name = self.get_node_name(*var);
                    let is_identity = *var == id;
                    let is_header = name == "targets" && var_name == "factors";
                    if is_identity || is_header {
                        format!("({} & {})", var_name, var_name)
                    } else {
                        var_name.clone()
                    }
                }
                Some(logic) => fn_logic_to_bnet_string(id, logic, self),
                None => name.clone(),
            };
            model.push_str(format!("{}, {}\n", name, function).as_str());
        }
        model
    }
}

fn fn_logic_to_bnet_string(node: NodeId, function: &FnLogic, network: &BooleanNetwork) -> String {
    match function {
        FnLogic::Var(id) => network.get_node_name(*id).clone(),
        FnLogic::Const(value) => {
            // .bnet does not have constants, but we can simulate a constant like this:
            let name = network.get_node_name(node);
            if *value {
                format!("({} | !{})", name, name)
            } else {
                format!("({} & !{})", name, name)
            }
        }
        FnLogic::Not(inner) => format!("!{}", fn_logic_to_bnet_string(node, inner, network)),
        FnLogic::Binary(op, left, right) => format!(
            "({} {} {})",
            fn_logic_to_bnet_string(node, left, network),
            op,
            fn_logic_to_bnet_string(node, right, network)
        ),
    }
}

impl Display for BooleanNetwork {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.to_bnet())
    }
}
