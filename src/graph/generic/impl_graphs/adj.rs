use std::mem;

use crate::graph::{generic::ImplGraph, Edge, Node, VNodes};

/// Plain adjacency list, indexed by the node identifier.
///
/// The neighbourhoods are ordered sequences and they are kept exactly as given by
/// [Adj::set_neighbours]; the symmetric constructors from [ImplGraph] never introduce
/// duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Adj {
    pub nodes: Vec<VNodes>,
}

impl ImplGraph for Adj {
    type Neighbours<'a>
        = &'a [Node]
    where
        Self: 'a;

    fn insert_node(&mut self, node: Node) {
        if node >= self.nodes.len() {
            self.nodes.resize_with(node + 1, VNodes::new);
        }
    }

    fn insert_edge(&mut self, (a, b): Edge) {
        self.insert_node(a.max(b));
        push_unique(&mut self.nodes[a], b);
        push_unique(&mut self.nodes[b], a);
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn get_neighbours(&self, node: Node) -> Option<&[Node]> {
        self.nodes.get(node).map(Vec::as_slice)
    }
}

impl Adj {
    /// Replace the neighbourhood of `node`, without touching the neighbourhoods of the
    /// neighbours (so the graph may become asymmetric).
    pub fn set_neighbours(&mut self, node: Node, neighbours: VNodes) {
        self.insert_node(node);
        self.nodes[node] = neighbours;
    }

    /// Correct (potentially) invalid graph description, i.e., remove self loops and
    /// duplicates and make the neighbourhoods symmetric. Neighbours outside of the graph
    /// become nodes of the graph.
    pub fn correct(&mut self) {
        for node in 0..self.nodes.len() {
            let neighbours = mem::take(&mut self.nodes[node]);
            for neighbour in neighbours {
                if neighbour != node {
                    self.insert_edge((node, neighbour));
                }
            }
        }
    }
}

fn push_unique(neighbours: &mut VNodes, node: Node) {
    if !neighbours.contains(&node) {
        neighbours.push(node);
    }
}
