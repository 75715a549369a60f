// some of the following type aliases are not used everywhere, but they serve as
// documentation and orientation for variable names
pub type Node = usize;
pub type Edge = (Node, Node);

// V for vector
pub type VNodes = Vec<Node>;
pub type VNodeInfo = (Node, VNodes);
// H for hash
pub type HNodes = hashbrown::HashSet<Node>;

/// Reasons why an adjacency list does not describe a simple undirected graph.
///
/// The algorithms do not require a valid graph, they just work on whatever
/// neighbourhoods they are given; this is only used to report bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub enum InvalidGraph {
    #[error("self loop detected on node {0}")]
    SelfLoop(Node),
    #[error("incompatible neighbourhoods between the nodes {0} and {1}")]
    IncompatibleNeighbourhoods(Node, Node),
}

pub mod generic;
