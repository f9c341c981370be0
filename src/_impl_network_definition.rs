use crate::error::{DefinitionFormatError, NetworkDefinitionError};
use crate::{NetworkDefinition, NodeSpec};
use std::path::Path;

impl NetworkDefinition {
    /// Read a network definition from its JSON representation.
    ///
    /// The expected shape is `{"nodes": [{"name": ..., "is_input": ..., "is_output": ...,
    /// "logic": ..., "default_state": ...}, ...]}`. Only `name` is mandatory; flags default
    /// to `false` and `logic` to `null`.
    pub fn from_json(json: &str) -> Result<NetworkDefinition, DefinitionFormatError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write this definition as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DefinitionFormatError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a definition from a `.json` or `.bnet` file, based on the file extension.
    pub fn try_from_file<T: AsRef<Path>>(
        path: T,
    ) -> Result<NetworkDefinition, DefinitionFormatError> {
        let path: &Path = path.as_ref();
        let extension = path.extension().and_then(|it| it.to_str()).unwrap_or("");
        match extension {
            "json" => Self::from_json(std::fs::read_to_string(path)?.as_str()),
            "bnet" => Self::try_from_bnet(std::fs::read_to_string(path)?.as_str()),
            _ => Err(DefinitionFormatError::UnknownFormat(
                path.display().to_string(),
            )),
        }
    }

    /// Find the record of the node called `name`.
    pub fn find(&self, name: &str) -> Option<&NodeSpec> {
        self.nodes.iter().find(|it| it.name == name)
    }

    /// Mark the given nodes as outputs.
    ///
    /// Fails without changing anything if one of the names is not part of the definition.
    pub fn mark_outputs(&mut self, names: &[&str]) -> Result<(), NetworkDefinitionError> {
        if let Some(missing) = names.iter().find(|name| self.find(name).is_none()) {
            return Err(NetworkDefinitionError::UnknownNode(missing.to_string()));
        }
        for node in self.nodes.iter_mut() {
            if names.contains(&node.name.as_str()) {
                node.is_output = true;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{DefinitionFormatError, NetworkDefinitionError};
    use crate::{BooleanNetwork, NetworkDefinition, NodeSpec};
    use pretty_assertions::assert_eq;

    const JSON_MODEL: &str = r#"{
        "nodes": [
            { "name": "oxygen", "is_input": true, "default_state": true },
            { "name": "HIF1", "logic": "!oxygen" },
            { "name": "Necrosis", "is_output": true, "logic": "HIF1 & !oxygen" }
        ]
    }"#;

    #[test]
    fn read_json() {
        let definition = NetworkDefinition::from_json(JSON_MODEL).unwrap();
        assert_eq!(
            NetworkDefinition {
                nodes: vec![
                    NodeSpec::input("oxygen", true),
                    NodeSpec::internal("HIF1", "!oxygen"),
                    NodeSpec::internal("Necrosis", "HIF1 & !oxygen").output(),
                ]
            },
            definition
        );
        let network = BooleanNetwork::try_from(&definition).unwrap();
        assert_eq!(3, network.num_nodes());
    }

    #[test]
    fn json_round_trip() {
        let definition = NetworkDefinition::from_json(JSON_MODEL).unwrap();
        let json = definition.to_json().unwrap();
        assert_eq!(definition, NetworkDefinition::from_json(&json).unwrap());
    }

    #[test]
    fn invalid_json() {
        assert!(matches!(
            NetworkDefinition::from_json("{\"nodes\": [{\"logic\": \"A\"}]}"),
            Err(DefinitionFormatError::Json(_))
        ));
    }

    #[test]
    fn unknown_file_format() {
        assert!(matches!(
            NetworkDefinition::try_from_file("model.sbml"),
            Err(DefinitionFormatError::UnknownFormat(_))
        ));
        assert!(matches!(
            NetworkDefinition::try_from_file("this/file/does/not/exist.bnet"),
            Err(DefinitionFormatError::Io(_))
        ));
    }

    #[test]
    fn read_file() {
        let path = std::env::temp_dir().join(format!("cell-bn-sim-{}.json", std::process::id()));
        std::fs::write(&path, JSON_MODEL).unwrap();
        let network = BooleanNetwork::try_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(Some(true), network.get_state("oxygen"));
    }

    #[test]
    fn mark_outputs() {
        let mut definition = NetworkDefinition::from_json(JSON_MODEL).unwrap();
        assert_eq!(
            Err(NetworkDefinitionError::UnknownNode("Apoptosis".to_string())),
            definition.mark_outputs(&["HIF1", "Apoptosis"])
        );
        assert!(!definition.find("HIF1").unwrap().is_output);
        definition.mark_outputs(&["HIF1"]).unwrap();
        assert!(definition.find("HIF1").unwrap().is_output);
        assert!(definition.find("Necrosis").unwrap().is_output);
    }
}
