//! Shared helpers for CLI commands.

use anyhow::{Context, Result};
use console::style;
use serde::Deserialize;

use qpeak_ir::{CircuitProgram, Diagnostic, RawOperation};

/// On-disk circuit format: register size plus the ordered operation records.
#[derive(Deserialize)]
struct ProgramFile {
    num_qubits: usize,
    #[serde(default)]
    operations: Vec<RawOperation>,
}

/// Load a circuit from a JSON file.
///
/// Malformed records are skipped, not fatal; they come back as diagnostics
/// so the caller can warn about them.
pub fn load_program(path: &str) -> Result<(CircuitProgram, Vec<Diagnostic>)> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read circuit file '{path}'"))?;
    let file: ProgramFile = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse circuit file '{path}'"))?;
    anyhow::ensure!(file.num_qubits > 0, "circuit must have at least one qubit");

    Ok(CircuitProgram::from_records(file.num_qubits, file.operations))
}

/// Print diagnostics as warnings.
pub fn print_diagnostics(diagnostics: &[Diagnostic]) {
    for d in diagnostics {
        eprintln!("{} {}", style("Warning:").yellow().bold(), d);
    }
}
