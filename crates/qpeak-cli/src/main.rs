//! qpeak Command-Line Interface
//!
//! Find the peak bitstring of a quantum circuit's output distribution.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{decompose, search, version};

/// qpeak - greedy peak-bitstring search for peaked quantum circuits
#[derive(Parser)]
#[command(name = "qpeak")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for the peak bitstring of a circuit
    Search {
        /// Input circuit file (JSON)
        #[arg(short, long)]
        input: String,

        /// Additional climbs from random seeds
        #[arg(long, default_value = "0")]
        restarts: u32,

        /// RNG seed for restart climbs
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Evaluate single-flip neighbors concurrently
        #[arg(long)]
        concurrent: bool,

        /// Per-query time budget in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Statevector engine qubit cap
        #[arg(long, default_value = "20")]
        max_qubits: u32,

        /// Emit the result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Decompose a circuit into the primitive gate set and print it
    Decompose {
        /// Input circuit file (JSON)
        #[arg(short, long)]
        input: String,

        /// Emit the primitive sequence as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Search {
            input,
            restarts,
            seed,
            concurrent,
            timeout_ms,
            max_qubits,
            json,
        } => {
            search::execute(
                &input,
                restarts,
                seed,
                concurrent,
                timeout_ms,
                max_qubits,
                json,
            )
            .await
        }

        Commands::Decompose { input, json } => decompose::execute(&input, json),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
