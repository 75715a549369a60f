use rand::Rng;

use crate::graph::generic::{Graph, ImplGraph};

/// Erdős–Rényi graph G(n, p): every one of the n(n-1)/2 possible edges is drawn
/// independently with probability `density`.
pub fn erdos_renyi<G: ImplGraph>(
    size: usize,
    density: f64,
    rng: &mut impl Rng,
) -> Graph<G> {
    let mut graph = Graph::<G>::default();
    if let Some(last) = size.checked_sub(1) {
        graph.insert_node(last);
    }
    let edge_pool = (0..size).flat_map(|i| (i + 1..size).map(move |j| (i, j)));
    for edge in edge_pool {
        if rng.gen::<f64>() < density {
            graph.insert_edge(edge);
        }
    }
    graph
}

/// Parse a density for [erdos_renyi], e.g., as clap value parser.
pub fn parse_density(arg: &str) -> Result<f64, String> {
    let density: f64 = arg.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&density) {
        Ok(density)
    } else {
        Err(format!("{density} is not in [0, 1]"))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    use super::*;
    use crate::graph::generic::{Adj, Pet};

    #[test]
    fn extreme_densities() {
        let rng = &mut Pcg64::seed_from_u64(7);

        let empty = erdos_renyi::<Adj>(6, 0., rng);
        assert_eq!(empty.len(), 6);
        assert_eq!(empty.num_edges(), 0);

        let complete = erdos_renyi::<Pet>(6, 1., rng);
        assert_eq!(complete.len(), 6);
        assert_eq!(complete.num_edges(), 15);
        assert_eq!(complete.check(), Ok(()));

        assert!(erdos_renyi::<Adj>(0, 0.5, rng).is_empty());
    }

    #[test]
    fn reproducible() {
        let a = erdos_renyi::<Adj>(12, 0.4, &mut Pcg64::seed_from_u64(1));
        let b = erdos_renyi::<Adj>(12, 0.4, &mut Pcg64::seed_from_u64(1));
        assert_eq!(a, b);
        assert_eq!(a.check(), Ok(()));
    }

    #[test]
    fn densities() {
        assert_eq!(parse_density("0.25"), Ok(0.25));
        assert_eq!(parse_density("1"), Ok(1.));
        assert!(parse_density("1.5").is_err());
        assert!(parse_density("-0.1").is_err());
        assert!(parse_density("dense").is_err());
    }
}
