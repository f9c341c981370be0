use crate::error::DefinitionFormatError;
use crate::{Logic, LogicExpression, NetworkDefinition, NodeSpec, ID_PATTERN};
use regex::Regex;
use std::collections::{BTreeSet, HashSet};

lazy_static! {
    /// Matches one `target, function` row of a `.bnet` model.
    static ref BNET_ROW: Regex = Regex::new(&format!(
        r"^\s*(?P<name>{})\s*,\s*(?P<function>.+?)\s*$",
        ID_PATTERN
    ))
    .unwrap();
    /// Matches the optional `targets, factors` header.
    static ref BNET_HEADER: Regex = Regex::new(r"^\s*targets\s*,\s*factors\s*$").unwrap();
}

impl NetworkDefinition {
    /// Try to load a network definition from a `.bnet` model.
    ///
    /// Rows whose function is just the target itself (`X, X`) declare input nodes. Names that
    /// are used as regulators but have no row of their own also become input nodes. All nodes
    /// start as `false` and no node is marked as output (see `mark_outputs`).
    ///
    /// Note that `.bnet` functions are parsed using the same syntax as any `LogicExpression`.
    pub fn try_from_bnet(model_string: &str) -> Result<NetworkDefinition, DefinitionFormatError> {
        let mut nodes: Vec<NodeSpec> = Vec::new();
        let mut declared = HashSet::new();
        let mut regulators = BTreeSet::new();
        for (i, line) in model_string.lines().enumerate() {
            let line_number = i + 1;
            let trimmed = line.trim();
            if trimmed.starts_with('#') || trimmed.is_empty() || BNET_HEADER.is_match(trimmed) {
                continue; // Skip comments, empty lines and header.
            }
            let captures = BNET_ROW.captures(line).ok_or_else(|| DefinitionFormatError::Bnet {
                line: line_number,
                message: format!("Unexpected line: `{}`", line),
            })?;
            let name = captures["name"].to_string();
            let function = captures["function"].to_string();
            if !declared.insert(name.clone()) {
                return Err(DefinitionFormatError::Bnet {
                    line: line_number,
                    message: format!("Duplicate function declaration for `{}`.", name),
                });
            }

            let expression = LogicExpression::parse(&function).map_err(|e| {
                DefinitionFormatError::Bnet {
                    line: line_number,
                    message: format!("Invalid function of `{}`: {}", name, e),
                }
            })?;
            for regulator in expression.dependencies() {
                regulators.insert(regulator);
            }

            if expression.as_logic() == &Logic::Var(name.clone()) {
                tracing::debug!("Identity row `{}` declares an input node.", name);
                nodes.push(NodeSpec::input(&name, false));
            } else {
                nodes.push(NodeSpec::internal(&name, &function));
            }
        }

        for regulator in regulators {
            if !declared.contains(&regulator) {
                tracing::warn!(
                    "Regulator `{}` has no function in the `.bnet` model; using it as input.",
                    regulator
                );
                nodes.push(NodeSpec::input(&regulator, false));
            }
        }

        Ok(NetworkDefinition { nodes })
    }
}
