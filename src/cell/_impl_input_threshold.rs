use crate::cell::{CellError, InputThreshold};
use std::collections::HashMap;

impl InputThreshold {
    pub fn new(substance: &str, node: &str, threshold: f64) -> InputThreshold {
        InputThreshold {
            substance: substance.to_string(),
            node: node.to_string(),
            threshold,
        }
    }

    /// True if `concentration` is strictly above the threshold.
    pub fn is_active(&self, concentration: f64) -> bool {
        concentration > self.threshold
    }

    /// Compute the `(node, state)` pair for the given microenvironment.
    pub fn resolve(
        &self,
        concentrations: &HashMap<String, f64>,
    ) -> Result<(&str, bool), CellError> {
        let concentration = concentrations
            .get(&self.substance)
            .ok_or_else(|| CellError::MissingSubstance(self.substance.clone()))?;
        Ok((self.node.as_str(), self.is_active(*concentration)))
    }
}

#[cfg(test)]
mod tests {
    use crate::cell::{CellError, InputThreshold};
    use std::collections::HashMap;

    #[test]
    fn threshold_is_strict() {
        let oxygen = InputThreshold::new("o2", "oxygen", 5.0);
        assert!(!oxygen.is_active(4.0));
        assert!(!oxygen.is_active(5.0));
        assert!(oxygen.is_active(5.5));

        let concentrations = HashMap::from([("o2".to_string(), 6.0)]);
        assert_eq!(("oxygen", true), oxygen.resolve(&concentrations).unwrap());

        let glucose = InputThreshold::new("glucose", "GLUT1", 0.1);
        match glucose.resolve(&concentrations) {
            Err(CellError::MissingSubstance(name)) => assert_eq!("glucose", name),
            other => panic!("Unexpected result: {:?}", other),
        }
    }
}
