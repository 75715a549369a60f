use std::iter::Map;

use petgraph::{graph::Neighbors, visit::EdgeRef, Undirected};

use super::adj::Adj;
use crate::graph::{
    generic::{ImplGraph, NodeCollection},
    Edge, Node,
};

pub type NodeIndex = petgraph::graph::NodeIndex<u32>;

/// petgraph's graph, with node indices as identifiers.
pub type Pet = petgraph::Graph<(), (), Undirected, u32>;

impl ImplGraph for Pet {
    type Neighbours<'a>
        = Neighbors<'a, (), u32>
    where
        Self: 'a;

    fn insert_node(&mut self, node: Node) {
        while self.node_count() <= node {
            self.add_node(());
        }
    }

    fn insert_edge(&mut self, (a, b): Edge) {
        ImplGraph::insert_node(self, a.max(b));
        // update_edge instead of add_edge, we don't want multi-edges
        self.update_edge(NodeIndex::new(a), NodeIndex::new(b), ());
    }

    fn len(&self) -> usize {
        self.node_count()
    }

    fn get_neighbours(&self, node: Node) -> Option<Self::Neighbours<'_>> {
        (node < self.node_count()).then(|| self.neighbors(NodeIndex::new(node)))
    }
}

impl<'a> NodeCollection for Neighbors<'a, (), u32> {
    type Iter = Map<Neighbors<'a, (), u32>, fn(NodeIndex) -> Node>;

    fn contains(&self, node: Node) -> bool {
        self.clone().any(|n| n.index() == node)
    }

    fn iter(&self) -> Self::Iter {
        self.clone().map(NodeIndex::index as fn(NodeIndex) -> Node)
    }
}

impl From<&Pet> for Adj {
    fn from(graph: &Pet) -> Self {
        let mut ret = Adj::default();
        if let Some(last) = graph.node_count().checked_sub(1) {
            ret.insert_node(last);
        }
        for edge in graph.edge_references() {
            ret.insert_edge((edge.source().index(), edge.target().index()));
        }
        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{test_utils::collect, InvalidGraph, VNodes};

    #[test]
    fn from_edges() {
        let graph = Pet::from_edge_list(collect!(v; (1, 2), (2, 3), (3, 1), (2, 1),)).unwrap();
        assert_eq!(ImplGraph::len(&graph), 4);
        assert_eq!(graph.edge_count(), 3);
        let mut neighbours = graph.get_neighbours(2).unwrap().iter().collect::<VNodes>();
        neighbours.sort_unstable();
        assert_eq!(neighbours, vec![1, 3]);
        assert!(graph.get_neighbours(0).unwrap().is_empty());
        assert!(graph.get_neighbours(4).is_none());
    }

    #[test]
    fn self_loop() {
        let graph = Pet::from_edge_list_unchecked(collect!(v; (0, 0), (0, 1),));
        assert_eq!(graph.check(), Err(InvalidGraph::SelfLoop(0)));
    }

    #[test]
    fn into_adj() {
        let graph = Pet::from_adjacency_list(collect!(vv; (0, [1, 2]), (4, []),)).unwrap();
        let adj = Adj::from(&graph);
        assert_eq!(adj.nodes.len(), 5);
        assert_eq!(adj.check(), Ok(()));
        assert_eq!(adj.num_edges(), 2);
        assert!(adj.nodes[3].is_empty() && adj.nodes[4].is_empty());
    }
}
