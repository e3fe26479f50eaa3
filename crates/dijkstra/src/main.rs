//! Prints shortest distances over the built-in demonstration graph.
//!
//! ```bash
//! dijkstra --start A
//! dijkstra --start G --selection heap -v
//! ```

use std::process::ExitCode;

use clap::Parser;
use clap::ValueEnum;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dijkstra::DistanceCalculator;
use dijkstra::GraphError;
use dijkstra::Selection;
use dijkstra::sample::demo_graph;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SelectionArg {
    Linear,
    Heap,
}

impl From<SelectionArg> for Selection {
    fn from(arg: SelectionArg) -> Self {
        match arg {
            SelectionArg::Linear => Selection::LinearScan,
            SelectionArg::Heap => Selection::BinaryHeap,
        }
    }
}

#[derive(Parser)]
#[command(name = "dijkstra")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Node to measure distances from
    #[arg(short, long, default_value = "A")]
    start: String,

    /// Strategy for picking the next node to settle
    #[arg(long, value_enum, default_value = "linear")]
    selection: SelectionArg,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), GraphError> {
    let graph = demo_graph()?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built demo graph"
    );

    let calculator = DistanceCalculator::with_selection(cli.selection.into());
    let distances = calculator.calculate_distances(&graph, &cli.start)?;
    for (name, distance) in distances.iter() {
        println!("{name}, {distance}");
    }
    Ok(())
}
