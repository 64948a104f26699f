use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;

use cityplanner::map::load_map;
use cityplanner::planner::CityPlanner;
use cityplanner::types::SearchMethod;

/// Shortest routes between cities.
#[derive(Parser)]
#[command(name = "cityplanner", about = "Shortest routes between cities")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest route between two cities
    Route {
        /// Map file (JSON)
        map: PathBuf,
        /// Starting city
        from: String,
        /// Destination city
        to: String,
        /// Search method
        #[arg(short, long, value_enum, default_value_t = SearchMethod::Dfs)]
        method: SearchMethod,
        /// Report search progress
        #[arg(short, long)]
        verbose: bool,
    },
    /// Print every road of a map
    Show {
        /// Map file (JSON)
        map: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> cityplanner::errors::Result<()> {
    match cli.command {
        Commands::Route {
            map,
            from,
            to,
            method,
            verbose,
        } => {
            init_tracing(verbose);
            let mut planner = CityPlanner::with_graph(load_map(&map)?.build()?);
            planner.verbose = verbose;
            planner.print_shortest_path(&from, &to, method)?;
        }
        Commands::Show { map } => {
            init_tracing(false);
            let graph = load_map(&map)?.build()?;
            println!("{}", graph);
            println!(
                "\n{} cities, {} roads",
                graph.node_count(),
                graph.edge_count()
            );
        }
    }
    Ok(())
}

/// Installs a stderr subscriber. `RUST_LOG` wins over the verbosity flag.
fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
