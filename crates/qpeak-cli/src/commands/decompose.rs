//! Decompose command implementation.

use anyhow::Result;
use console::style;

use super::common::{load_program, print_diagnostics};

/// Execute the decompose command.
pub fn execute(input: &str, json: bool) -> Result<()> {
    let (program, model_diagnostics) = load_program(input)?;
    print_diagnostics(&model_diagnostics);

    let (primitives, diagnostics) = qpeak_decompose::decompose(&program);
    print_diagnostics(&diagnostics);

    if json {
        println!("{}", serde_json::to_string_pretty(&primitives)?);
        return Ok(());
    }

    println!(
        "{} {} primitives on {} qubits",
        style("→").cyan().bold(),
        primitives.len(),
        primitives.num_qubits()
    );
    for op in primitives.ops() {
        println!("  {op}");
    }
    Ok(())
}
