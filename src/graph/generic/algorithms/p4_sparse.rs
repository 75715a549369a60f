use itertools::Itertools;
use rayon::iter::{ParallelBridge, ParallelIterator};
use serde::Serialize;
use tracing::{debug, trace};

use super::induced_p4::P4_LEN;
use crate::graph::{
    generic::{Graph, ImplGraph},
    HNodes, Node, VNodes,
};

/// Size of the node sets that may contain at most one induced P4.
pub const SET_LEN: usize = 5;

/// Five nodes that induce more than one P4, i.e., a proof that the graph is not
/// P4-sparse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Violation {
    pub nodes: [Node; SET_LEN],
    /// The induced P4s among the five sub-selections of [Self::nodes].
    pub p4s: Vec<[Node; P4_LEN]>,
}

impl<G: ImplGraph> Graph<G> {
    /// The four-node subsets of `nodes` (each one sorted) that induce a P4.
    pub fn induced_p4s_in_5(&self, nodes: &[Node; SET_LEN]) -> Vec<[Node; P4_LEN]> {
        (0..SET_LEN)
            .map(|omitted| omit(nodes, omitted))
            .filter(|subset| self.is_induced_p4(subset))
            .collect()
    }

    /// How many of the five four-node subsets of `nodes` induce a P4.
    pub fn count_induced_p4s_in_5(&self, nodes: &[Node; SET_LEN]) -> usize {
        (0..SET_LEN)
            .filter(|&omitted| self.is_induced_p4(&omit(nodes, omitted)))
            .count()
    }

    /// Whether every five nodes of `vertices` induce at most one P4.
    ///
    /// This is the brute force check over all five-node combinations, returning as soon
    /// as one combination fails. Repeated vertices are ignored, and vertices the graph
    /// doesn't know are isolated.
    pub fn is_p4_sparse(&self, vertices: &[Node]) -> bool {
        let vertices = dedup(vertices);
        debug!(vertices = vertices.len(), "checking P4-sparsity");
        if vertices.len() < SET_LEN {
            return true;
        }
        for nodes in five_sets(&vertices) {
            let count = self.count_induced_p4s_in_5(&nodes);
            trace!(?nodes, count);
            if count > 1 {
                debug!(?nodes, count, "more than one induced P4");
                return false;
            }
        }
        true
    }

    /// The first combination (in the order of [Self::is_p4_sparse]) that induces more
    /// than one P4; `None` if the graph is P4-sparse.
    pub fn find_violation(&self, vertices: &[Node]) -> Option<Violation> {
        let vertices = dedup(vertices);
        debug!(vertices = vertices.len(), "searching a P4-sparsity violation");
        // bound, so that the iterator is dropped before `vertices`
        let violation = five_sets(&vertices).find_map(|nodes| self.violation(nodes));
        violation
    }

    fn violation(&self, nodes: [Node; SET_LEN]) -> Option<Violation> {
        let p4s = self.induced_p4s_in_5(&nodes);
        if p4s.len() > 1 {
            debug!(?nodes, ?p4s, "more than one induced P4");
            Some(Violation { nodes, p4s })
        } else {
            None
        }
    }
}

impl<G: ImplGraph + Sync> Graph<G> {
    /// Same as [Self::is_p4_sparse], but the combinations are distributed over rayon's
    /// thread pool; all the work is abandoned once some thread found a failing
    /// combination.
    pub fn is_p4_sparse_parallel(&self, vertices: &[Node]) -> bool {
        let vertices = dedup(vertices);
        debug!(vertices = vertices.len(), "checking P4-sparsity in parallel");
        if vertices.len() < SET_LEN {
            return true;
        }
        let failing = five_sets(&vertices)
            .par_bridge()
            .find_any(|nodes| self.count_induced_p4s_in_5(nodes) > 1);
        failing.is_none()
    }

    /// Parallel version of [Self::find_violation]; if there are multiple violations,
    /// it is not specified which one is returned.
    pub fn find_violation_parallel(&self, vertices: &[Node]) -> Option<Violation> {
        let vertices = dedup(vertices);
        debug!(vertices = vertices.len(), "searching a P4-sparsity violation in parallel");
        let violation = five_sets(&vertices)
            .par_bridge()
            .find_map_any(|nodes| self.violation(nodes));
        violation
    }
}

// each unordered combination exactly once, in lexicographic order of the positions
fn five_sets(vertices: &[Node]) -> impl Iterator<Item = [Node; SET_LEN]> + Send + '_ {
    vertices
        .iter()
        .copied()
        .combinations(SET_LEN)
        .filter_map(|nodes| nodes.try_into().ok())
}

fn omit(nodes: &[Node; SET_LEN], omitted: usize) -> [Node; P4_LEN] {
    let mut subset = [0; P4_LEN];
    let remaining = nodes
        .iter()
        .enumerate()
        .filter_map(|(position, &node)| (position != omitted).then_some(node));
    for (slot, node) in subset.iter_mut().zip(remaining) {
        *slot = node;
    }
    subset.sort_unstable();
    subset
}

fn dedup(vertices: &[Node]) -> VNodes {
    let mut seen = HNodes::with_capacity(vertices.len());
    vertices.iter().copied().filter(|&node| seen.insert(node)).collect()
}
