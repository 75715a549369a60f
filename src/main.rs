use std::{io, path::PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use p4_sparse::{
    graph::generic::{Adj, ImplGraph},
    load, random,
    report::Report,
};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "p4_sparse", version, about = "Check whether a graph is P4-sparse")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    format: OutputFormat,

    /// Distribute the five-node combinations over all cores
    #[arg(long, global = true)]
    parallel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a graph given as adjacency list file
    Check {
        /// One `<node> = <neighbour> <neighbour> ...` line per node
        path: PathBuf,

        /// Every neighbour is followed by the weight of the edge (which is ignored)
        #[arg(long)]
        weighted: bool,
    },
    /// Check an Erdős–Rényi random graph
    Random {
        /// Number of nodes
        #[arg(long)]
        size: usize,

        /// Probability of each edge
        #[arg(long, value_parser = random::parse_density)]
        density: f64,

        /// Seed of the random number generator; drawn from the OS if missing
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let report = match cli.command {
        Commands::Check { path, weighted } => {
            let list = load::read(&path, weighted)?;
            if let Err(err) = list.graph.check() {
                warn!(%err, "not a simple undirected graph, checking it anyway");
            }
            Report::new(&list.graph, &list.vertices, cli.parallel)
        },
        Commands::Random { size, density, seed } => {
            let rng = &mut match seed {
                Some(seed) => Pcg64::seed_from_u64(seed),
                None => Pcg64::from_entropy(),
            };
            let graph = random::erdos_renyi::<Adj>(size, density, rng);
            info!(size, density, edges = graph.num_edges(), "sampled random graph");
            Report::new(&graph, &graph.vertices(), cli.parallel)
        },
    };

    match cli.format {
        OutputFormat::Text => println!("{report}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
