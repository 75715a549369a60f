//! Reading graphs from adjacency list files.
//!
//! Every line describes one node: `<node> = <neighbour> <neighbour> ...`. The `=` and
//! everything after it is optional, so a line with just the node is an isolated node.
//! Nodes that don't have a line of their own but are below the largest node are isolated
//! nodes too. In the weighted format, every neighbour is followed by its weight, which
//! we ignore. Ids above [MAX_NODE] are rejected, since the graph is indexed by them.

use std::{
    fs, io,
    num::ParseIntError,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::graph::{
    generic::{Adj, Graph},
    HNodes, Node, VNodes,
};

/// Largest accepted node id.
pub const MAX_NODE: Node = (1 << 20) - 1;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read the graph file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: invalid node '{token}'")]
    InvalidNode {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("line {line}: invalid neighbour '{token}'")]
    InvalidNeighbour {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("line {line}: node {node} is larger than {}", MAX_NODE)]
    NodeTooLarge { line: usize, node: Node },
}

/// The graph exactly as described by the input (it may be asymmetric), together with
/// the nodes that have a line, in the order of their first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    pub graph: Graph<Adj>,
    pub vertices: VNodes,
}

pub fn read(path: impl AsRef<Path>, weighted: bool) -> Result<AdjacencyList, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "read graph file");
    parse(&text, weighted)
}

/// A later line for the same node replaces the neighbourhood of an earlier one.
pub fn parse(text: &str, weighted: bool) -> Result<AdjacencyList, LoadError> {
    let mut ret = AdjacencyList::default();
    let mut seen = HNodes::new();
    // the weights are every second token
    let step = if weighted { 2 } else { 1 };

    for (line, content) in text.lines().enumerate() {
        let line = line + 1;
        if content.trim().is_empty() {
            continue;
        }
        let (node, neighbours) = content.split_once('=').unwrap_or((content, ""));

        let node = node.trim();
        let node: Node = node.parse().map_err(|source| LoadError::InvalidNode {
            line,
            token: node.to_owned(),
            source,
        })?;
        bounded(line, node)?;
        let neighbours = neighbours
            .split_whitespace()
            .step_by(step)
            .map(|token| {
                let neighbour = token.parse().map_err(|source| LoadError::InvalidNeighbour {
                    line,
                    token: token.to_owned(),
                    source,
                })?;
                bounded(line, neighbour)
            })
            .collect::<Result<VNodes, _>>()?;

        if seen.insert(node) {
            ret.vertices.push(node);
        }
        ret.graph.0.set_neighbours(node, neighbours);
    }

    debug!(
        nodes = ret.vertices.len(),
        len = ret.graph.0.nodes.len(),
        "parsed adjacency list"
    );
    Ok(ret)
}

fn bounded(line: usize, node: Node) -> Result<Node, LoadError> {
    if node > MAX_NODE {
        Err(LoadError::NodeTooLarge { line, node })
    } else {
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;
    use crate::graph::generic::ImplGraph;

    #[test]
    fn unweighted() {
        let list = parse("0 = 1 2\n1 = 0\n2 = 0\n", false).unwrap();
        assert_eq!(list.vertices, vec![0, 1, 2]);
        assert_eq!(list.graph.0.nodes, vec![vec![1, 2], vec![0], vec![0]]);
        assert_eq!(list.graph.check(), Ok(()));
    }

    #[test]
    fn weighted() {
        let list = parse("0 = 1 3.5 2 -1\n1 = 0 3.5\n2 = 0 -1", true).unwrap();
        assert_eq!(list.graph.0.nodes, vec![vec![1, 2], vec![0], vec![0]]);
        // a missing weight at the end is fine
        let list = parse("0 = 1 7 2", true).unwrap();
        assert_eq!(list.graph.0.nodes, vec![vec![1, 2]]);
    }

    #[test]
    fn layout() {
        let text = "\n3=1   0\n\n  1 =3\n0 = 3\n5\n6 =\n";
        let list = parse(text, false).unwrap();
        assert_eq!(list.vertices, vec![3, 1, 0, 5, 6]);
        assert_eq!(
            list.graph.0.nodes,
            vec![vec![3], vec![3], vec![], vec![1, 0], vec![], vec![], vec![]]
        );
        // 2 and 4 are isolated nodes without a line
        assert_eq!(list.graph.len(), 7);
    }

    #[test]
    fn repeated_lines() {
        let list = parse("0 = 1\n1 = 0\n0 = 1 2\n2 = 0", false).unwrap();
        assert_eq!(list.vertices, vec![0, 1, 2]);
        assert_eq!(list.graph.0.nodes[0], vec![1, 2]);
    }

    #[test]
    fn errors() {
        match parse("0 = 1\nx = 0", false) {
            Err(LoadError::InvalidNode { line: 2, token, .. }) => assert_eq!(token, "x"),
            other => panic!("{other:?}"),
        }
        match parse("0 = 1\n1 = 0\n\n2 = 1 -3", false) {
            Err(LoadError::InvalidNeighbour { line: 4, token, .. }) => {
                assert_eq!(token, "-3")
            },
            other => panic!("{other:?}"),
        }
        // the weights are not parsed, but the neighbours are
        assert!(matches!(
            parse("0 = 1.5 2", true),
            Err(LoadError::InvalidNeighbour { line: 1, .. })
        ));
        assert_eq!(
            parse("0 = 1\n= 0", false).unwrap_err().to_string(),
            "line 2: invalid node ''"
        );
    }

    #[test]
    fn huge_ids() {
        match parse("18446744073709551615 = 0\n0 = 1", false) {
            Err(LoadError::NodeTooLarge { line: 1, node }) => assert_eq!(node, usize::MAX),
            other => panic!("{other:?}"),
        }
        let too_large = MAX_NODE + 1;
        assert!(matches!(
            parse(&format!("0 = 1 {too_large}\n1 = 0"), false),
            Err(LoadError::NodeTooLarge { line: 1, node }) if node == too_large
        ));
        assert!(matches!(
            parse(&format!("0 = 1 0.5 {too_large} 2"), true),
            Err(LoadError::NodeTooLarge { line: 1, .. })
        ));
        let list = parse(&format!("{MAX_NODE}"), false).unwrap();
        assert_eq!(list.vertices, vec![MAX_NODE]);
        assert_eq!(list.graph.len(), MAX_NODE + 1);
    }

    #[test]
    fn files() {
        let path = env::temp_dir().join(format!("p4_sparse_load_{}.txt", std::process::id()));
        fs::write(&path, "0 = 1\n1 = 0 2\n2 = 1 3\n3 = 2 4\n4 = 3\n").unwrap();
        let list = read(&path, false).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(list.vertices, vec![0, 1, 2, 3, 4]);
        assert!(!list.graph.is_p4_sparse(&list.vertices));

        assert!(matches!(read(&path, false), Err(LoadError::Io { .. })));
    }
}
