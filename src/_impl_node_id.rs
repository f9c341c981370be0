use crate::NodeId;
use std::fmt::{Display, Error, Formatter};

impl NodeId {
    /// Convert this `NodeId` to its underlying index.
    pub fn to_index(self) -> usize {
        self.0
    }

    /// Create a `NodeId` from an index.
    ///
    /// The id is only meaningful within the network that assigned the index.
    pub fn from_index(index: usize) -> NodeId {
        NodeId(index)
    }
}

impl From<usize> for NodeId {
    fn from(val: usize) -> Self {
        NodeId(val)
    }
}

impl From<NodeId> for usize {
    fn from(value: NodeId) -> Self {
        value.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "BnNode({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::NodeId;

    #[test]
    fn node_id_conversions() {
        let id = NodeId::from(3);
        assert_eq!(3usize, usize::from(id));
        assert_eq!(id, NodeId::from_index(id.to_index()));
        assert_eq!("BnNode(3)", id.to_string());
    }
}
