use std::fmt::{self, Display};

use serde::Serialize;

use crate::graph::{
    generic::{algorithms::p4_sparse::Violation, Graph, ImplGraph},
    HNodes, Node,
};

/// The verdict on a graph, as printed by the binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Number of distinct checked vertices.
    pub vertices: usize,
    pub edges: usize,
    pub p4_sparse: bool,
    pub witness: Option<Violation>,
}

impl Report {
    pub fn new<G: ImplGraph + Sync>(
        graph: &Graph<G>,
        vertices: &[Node],
        parallel: bool,
    ) -> Self {
        let witness = if parallel {
            graph.find_violation_parallel(vertices)
        } else {
            graph.find_violation(vertices)
        };
        Self {
            vertices: vertices.iter().copied().collect::<HNodes>().len(),
            edges: graph.num_edges(),
            p4_sparse: witness.is_none(),
            witness,
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.p4_sparse {
            write!(f, "The graph is P4-sparse.")
        } else {
            write!(f, "The graph is NOT P4-sparse.")?;
            if let Some(witness) = &self.witness {
                write!(f, "\nThe nodes {:?} induce the P4s", witness.nodes)?;
                for p4 in witness.p4s.iter() {
                    write!(f, " {p4:?}")?;
                }
                write!(f, ".")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::graph::{generic::Adj, test_utils::collect};

    #[test]
    fn sparse() {
        let graph = Graph::<Adj>::from_edge_list(collect!(v; (0, 1), (1, 2), (2, 3),))
            .unwrap();
        let report = Report::new(&graph, &graph.vertices(), false);
        assert_eq!(
            report,
            Report {
                vertices: 4,
                edges: 3,
                p4_sparse: true,
                witness: None,
            }
        );
        assert_eq!(report.to_string(), "The graph is P4-sparse.");
    }

    #[test]
    fn repeated_vertices() {
        let graph = Graph::<Adj>::from_edge_list(collect!(v; (0, 1), (1, 2), (2, 3),))
            .unwrap();
        let report = Report::new(&graph, &[2, 0, 2, 1, 3, 0], false);
        assert_eq!(report.vertices, 4);
        assert!(report.p4_sparse);
    }

    #[test]
    fn not_sparse() {
        let graph =
            Graph::<Adj>::from_edge_list(collect!(v; (0, 1), (1, 2), (2, 3), (3, 4),))
                .unwrap();
        let report = Report::new(&graph, &graph.vertices(), true);
        assert!(!report.p4_sparse);
        assert_eq!(
            report.to_string(),
            "The graph is NOT P4-sparse.\nThe nodes [0, 1, 2, 3, 4] induce the P4s [1, 2, \
             3, 4] [0, 1, 2, 3]."
        );
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({
                "vertices": 5,
                "edges": 4,
                "p4_sparse": false,
                "witness": {
                    "nodes": [0, 1, 2, 3, 4],
                    "p4s": [[1, 2, 3, 4], [0, 1, 2, 3]],
                },
            })
        );
    }
}
