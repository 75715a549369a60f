#![deny(unsafe_op_in_unsafe_fn)]

//! Recognition of P4-sparse graphs, i.e., graphs in which every five nodes induce at
//! most one path on four nodes.
//!
//! The check itself is [graph::generic::Graph::is_p4_sparse]; [load] reads adjacency
//! lists and [report] formats the verdict.

pub mod graph;
pub mod load;
pub mod random;
pub mod report;
