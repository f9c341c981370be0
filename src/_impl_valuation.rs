use crate::BooleanNetwork;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A read-only assignment of Boolean values to node names.
///
/// A `LogicExpression` is evaluated against a `Valuation`. A name with no value
/// (`None`) is reported by the evaluation as an unknown node.
pub trait Valuation {
    /// The value assigned to the node called `name`, if any.
    fn value_of(&self, name: &str) -> Option<bool>;
}

impl<S: BuildHasher> Valuation for HashMap<String, bool, S> {
    fn value_of(&self, name: &str) -> Option<bool> {
        self.get(name).cloned()
    }
}

impl Valuation for BTreeMap<String, bool> {
    fn value_of(&self, name: &str) -> Option<bool> {
        self.get(name).cloned()
    }
}

/// A network is a live valuation of its own nodes. No intermediate mapping is materialized.
impl Valuation for BooleanNetwork {
    fn value_of(&self, name: &str) -> Option<bool> {
        self.find_node(name).map(|id| self[id].get_state())
    }
}

#[cfg(test)]
mod tests {
    use crate::Valuation;
    use std::collections::{BTreeMap, HashMap};

    #[test]
    fn map_valuations() {
        let mut map = HashMap::new();
        map.insert("a".to_string(), true);
        assert_eq!(Some(true), map.value_of("a"));
        assert_eq!(None, map.value_of("b"));

        let mut map = BTreeMap::new();
        map.insert("b".to_string(), false);
        assert_eq!(Some(false), map.value_of("b"));
        assert_eq!(None, map.value_of("a"));
    }
}
