use crate::graph::{
    generic::{Graph, ImplGraph},
    HNodes, Node,
};

/// The nodes seen by one traversal; every classification allocates its own.
pub type Visited = HNodes;

impl<G: ImplGraph> Graph<G> {
    /// Depth-first search from `node`, restricted to the edges between nodes of
    /// `subset`; returns false as soon as a cycle is found.
    ///
    /// `parent` is the node we came from (`None` for the start node). Every reached node
    /// is recorded in `visited`, so that the caller can check whether the search reached
    /// the whole subset; the search alone does not say anything about connectivity.
    pub fn is_acyclic_on(
        &self,
        subset: &[Node],
        node: Node,
        parent: Option<Node>,
        visited: &mut Visited,
    ) -> bool {
        visited.insert(node);
        for neighbour in self.neighbours_in(node, subset) {
            if Some(neighbour) == parent {
                continue;
            }
            if visited.contains(&neighbour) {
                return false;
            }
            if !self.is_acyclic_on(subset, neighbour, Some(node), visited) {
                return false;
            }
        }
        true
    }
}
