//! Search command implementation.

use std::time::Duration;

use anyhow::Result;
use console::style;

use qpeak_engine_statevector::StatevectorEngine;
use qpeak_ir::{CircuitProgram, Diagnostic};
use qpeak_oracle::ContractionEngine;
use qpeak_search::{run_peak_search, PeakResult, SearchOptions};

use super::common::{load_program, print_diagnostics};

/// Execute the search command.
pub async fn execute(
    input: &str,
    restarts: u32,
    seed: u64,
    concurrent: bool,
    timeout_ms: Option<u64>,
    max_qubits: u32,
    json: bool,
) -> Result<()> {
    if !json {
        println!(
            "{} Searching for the peak of {}",
            style("→").cyan().bold(),
            style(input).green()
        );
    }

    let (program, model_diagnostics) = load_program(input)?;
    if !json {
        println!(
            "  Loaded: {} qubits, {} operations",
            program.num_qubits(),
            program.len()
        );
    }

    let options = SearchOptions {
        restarts,
        rng_seed: seed,
        concurrent_neighbors: concurrent,
        query_timeout: timeout_ms.map(Duration::from_millis),
    };

    let engine = StatevectorEngine::with_max_qubits(max_qubits);
    let result = search_with_diagnostics(engine, &program, &options, model_diagnostics).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_diagnostics(&result.diagnostics);
    println!(
        "{} Peak: {} with probability {:.6}",
        style("✓").green().bold(),
        style(&result.bitstring).green().bold(),
        result.probability
    );
    println!(
        "  {} passes, {} oracle queries",
        result.passes, result.queries
    );
    Ok(())
}

/// Run the search and fold the model's record diagnostics into the result,
/// ahead of the decomposition diagnostics, so the result always carries the
/// complete ordered list.
async fn search_with_diagnostics<E: ContractionEngine>(
    engine: E,
    program: &CircuitProgram,
    options: &SearchOptions,
    model_diagnostics: Vec<Diagnostic>,
) -> Result<PeakResult> {
    let mut result = run_peak_search(engine, program, options).await?;
    let mut diagnostics = model_diagnostics;
    diagnostics.append(&mut result.diagnostics);
    result.diagnostics = diagnostics;
    Ok(result)
}
