use std::{fmt::Debug, iter::Copied, ops::Range, slice};

use hashbrown::HashSet;

use super::{Edge, InvalidGraph, Node, VNodes};

/// Newtype around `impl `[ImplGraph] types; all the algorithms are implemented on it,
/// so that they run on every graph representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Graph<G = Adj>(pub G);

impl<G> Graph<G> {
    pub fn new(graph: G) -> Self {
        Self(graph)
    }
}

/// A basic undirected graph without any associated data.
///
/// Nodes are identified by `0..len`; there are no labels on top of that, since the
/// identifiers in the input are already compact (missing ones are just isolated
/// nodes). Looking up a node outside of that range is not an error, it simply has no
/// neighbourhood.
// note that this is not a graph library; the trait is only a convenience so that the
// algorithms are written once for the different representations
pub trait ImplGraph: Clone + Debug + Default {
    type Neighbours<'a>: NodeCollection
    where
        Self: 'a;

    /// Make sure that `node`, and therefore every node below it, is part of the graph.
    fn insert_node(&mut self, node: Node);

    /// Add the undirected edge, inserting the end points if necessary.
    fn insert_edge(&mut self, edge: Edge);

    fn insert_node_symmetrically<N: IntoIterator<Item = Node>>(
        &mut self,
        (node, adj): (Node, N),
    ) {
        self.insert_node(node);
        for neighbour in adj {
            self.insert_edge((node, neighbour));
        }
    }

    fn from_edge_list_unchecked(edges: impl IntoIterator<Item = Edge>) -> Self
    where
        Self: Sized,
    {
        let mut ret = Self::default();
        for edge in edges {
            ret.insert_edge(edge);
        }
        ret
    }

    fn from_adjacency_list_unchecked<A, N>(adj: A) -> Self
    where
        A: IntoIterator<Item = (Node, N)>,
        N: IntoIterator<Item = Node>,
    {
        let mut ret = Self::default();
        for node_adj in adj {
            ret.insert_node_symmetrically(node_adj);
        }
        ret
    }

    fn from_edge_list(
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self, (Self, InvalidGraph)>
    where
        Self: Sized,
    {
        let graph = Self::from_edge_list_unchecked(edges);
        match graph.check() {
            Ok(()) => Ok(graph),
            Err(err) => Err((graph, err)),
        }
    }

    fn from_adjacency_list<A, N>(adj: A) -> Result<Self, (Self, InvalidGraph)>
    where
        A: IntoIterator<Item = (Node, N)>,
        N: IntoIterator<Item = Node>,
        Self: Sized,
    {
        let graph = Self::from_adjacency_list_unchecked(adj);
        match graph.check() {
            Ok(()) => Ok(graph),
            Err(err) => Err((graph, err)),
        }
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get_neighbours(&self, node: Node) -> Option<Self::Neighbours<'_>>;

    fn iter_nodes(&self) -> Range<Node> {
        0..self.len()
    }

    fn iter_with_neighbourhoods(
        &self,
    ) -> impl Iterator<Item = (Node, Self::Neighbours<'_>)> + Clone {
        self.iter_nodes()
            .filter_map(|node| Some((node, self.get_neighbours(node)?)))
    }

    /// Number of distinct undirected edges (self loops are not counted); an edge only
    /// listed on one side counts as well.
    fn num_edges(&self) -> usize {
        let mut edges = HashSet::<Edge>::new();
        for (node, neighbours) in self.iter_with_neighbourhoods() {
            for neighbour in neighbours.iter() {
                if node != neighbour {
                    edges.insert((node.min(neighbour), node.max(neighbour)));
                }
            }
        }
        edges.len()
    }

    /// Check whether it is a valid description of a simple undirected graph.
    fn check(&self) -> Result<(), InvalidGraph> {
        for (node, neighbours) in self.iter_with_neighbourhoods() {
            for neighbour in neighbours.iter() {
                if node == neighbour {
                    return Err(InvalidGraph::SelfLoop(node));
                }
                if !self
                    .get_neighbours(neighbour)
                    .is_some_and(|back| back.contains(node))
                {
                    return Err(InvalidGraph::IncompatibleNeighbourhoods(
                        node, neighbour,
                    ));
                }
            }
        }
        Ok(())
    }
}

impl<G: ImplGraph> ImplGraph for Graph<G> {
    type Neighbours<'a>
        = G::Neighbours<'a>
    where
        Self: 'a;
    #[inline]
    fn insert_node(&mut self, node: Node) {
        self.0.insert_node(node)
    }
    #[inline]
    fn insert_edge(&mut self, edge: Edge) {
        self.0.insert_edge(edge)
    }
    #[inline]
    fn from_edge_list_unchecked(edges: impl IntoIterator<Item = Edge>) -> Self
    where
        Self: Sized,
    {
        Self(G::from_edge_list_unchecked(edges))
    }
    #[inline]
    fn from_adjacency_list_unchecked<A, N>(adj: A) -> Self
    where
        A: IntoIterator<Item = (Node, N)>,
        N: IntoIterator<Item = Node>,
    {
        Self(G::from_adjacency_list_unchecked(adj))
    }
    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }
    #[inline]
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    #[inline]
    fn get_neighbours(&self, node: Node) -> Option<Self::Neighbours<'_>> {
        self.0.get_neighbours(node)
    }
    #[inline]
    fn iter_nodes(&self) -> Range<Node> {
        self.0.iter_nodes()
    }
    #[inline]
    fn num_edges(&self) -> usize {
        self.0.num_edges()
    }
    #[inline]
    fn check(&self) -> Result<(), InvalidGraph> {
        self.0.check()
    }
}

impl<G: ImplGraph> Graph<G> {
    /// All nodes `0..len`, e.g., as vertex list when the graph was not loaded from a
    /// file.
    pub fn vertices(&self) -> VNodes {
        self.iter_nodes().collect()
    }

    /// The neighbours of `node` that are in `subset`, in the order of the neighbourhood.
    pub fn neighbours_in<'a>(
        &'a self,
        node: Node,
        subset: &'a [Node],
    ) -> impl Iterator<Item = Node> + 'a {
        self.get_neighbours(node)
            .into_iter()
            .flat_map(|neighbours| neighbours.iter())
            .filter(move |neighbour| subset.contains(neighbour))
    }
}

/// Read-only view on a neighbourhood.
pub trait NodeCollection: Clone {
    type Iter: Iterator<Item = Node> + Clone;

    fn contains(&self, node: Node) -> bool;

    fn iter(&self) -> Self::Iter;

    fn len(&self) -> usize {
        self.iter().count()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> NodeCollection for &'a [Node] {
    type Iter = Copied<slice::Iter<'a, Node>>;
    fn contains(&self, node: Node) -> bool {
        <[Node]>::contains(self, &node)
    }
    fn iter(&self) -> Self::Iter {
        (*self).iter().copied()
    }
    fn len(&self) -> usize {
        <[Node]>::len(self)
    }
}

pub mod algorithms;

mod impl_graphs;
pub use impl_graphs::{adj::Adj, impl_petgraph::Pet};
