use super::acyclic::Visited;
use crate::graph::{
    generic::{Graph, ImplGraph},
    Node,
};

/// Number of nodes of a P4.
pub const P4_LEN: usize = 4;

impl<G: ImplGraph> Graph<G> {
    /// Whether the four nodes induce a path (P4).
    ///
    /// Connected and acyclic on four nodes means that the induced subgraph is a tree,
    /// and the path is the only tree on four nodes whose maximum degree is 2 (the other
    /// one is the claw). Note that the connectivity check, comparing the number of
    /// visited nodes with the size of the subset, only works together with the acyclicity
    /// check because the size is fixed.
    pub fn is_induced_p4(&self, subset: &[Node; P4_LEN]) -> bool {
        let mut visited = Visited::with_capacity(P4_LEN);
        if !self.is_acyclic_on(subset, subset[0], None, &mut visited)
            || visited.len() < P4_LEN
        {
            return false;
        }
        subset
            .iter()
            .all(|&node| self.neighbours_in(node, subset).count() <= 2)
    }
}
