//! Binary entry point for the Wayline route-finding demo.
//!
//! Builds the fixed 8-station sample network, reads a departure and a
//! destination station (flags or stdin), and prints the shortest
//! distance between them.
#![forbid(unsafe_code)]

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use wayline::{logging, Graph, GraphError};

#[derive(Parser, Debug)]
#[command(
    name = "wayline",
    version,
    about = "Shortest-distance queries over the sample station network"
)]
struct Cli {
    #[arg(
        long,
        value_name = "STATION",
        help = "Departure station (prompted when omitted)"
    )]
    from: Option<String>,

    #[arg(
        long,
        value_name = "STATION",
        help = "Destination station (prompted when omitted)"
    )]
    to: Option<String>,

    #[arg(long, default_value = "warn", help = "Tracing filter directive")]
    log_level: String,
}

/// The hardcoded demo network: stations X0..X7 with undirected links.
fn sample_network() -> wayline::Result<Graph> {
    let mut graph = Graph::new();
    for i in 0..8 {
        graph.add_node(format!("X{i}"))?;
    }

    let links = [
        ("X0", "X1", 4.0),
        ("X0", "X2", 3.0),
        ("X0", "X3", 3.0),
        ("X1", "X2", 1.0),
        ("X1", "X4", 8.0),
        ("X1", "X5", 6.0),
        ("X2", "X3", 8.0),
        ("X2", "X4", 2.0),
        ("X3", "X6", 4.0),
        ("X4", "X5", 2.0),
        ("X4", "X7", 5.0),
        ("X5", "X7", 3.0),
        ("X6", "X7", 2.0),
    ];
    for (start, end, distance) in links {
        graph.add_link(start, end, distance, true)?;
    }
    Ok(graph)
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn Error>> {
    logging::init_logging(&cli.log_level)?;

    let graph = sample_network()?;

    let mut stations = graph.node_names();
    stations.sort_unstable();
    println!("Available stations: {}", stations.join(" "));

    let from = match cli.from {
        Some(station) => station,
        None => prompt("Departure station: ")?,
    };
    let to = match cli.to {
        Some(station) => station,
        None => prompt("Destination station: ")?,
    };

    match graph.shortest_distance(&from, &to) {
        Ok(distance) if distance.is_infinite() => {
            println!("No route from {from} to {to}.");
            Ok(ExitCode::SUCCESS)
        }
        Ok(distance) => {
            println!("Shortest route from {from} to {to} = {distance}");
            Ok(ExitCode::SUCCESS)
        }
        Err(GraphError::NodeNotFound(name)) => {
            eprintln!("unknown station: {name}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
