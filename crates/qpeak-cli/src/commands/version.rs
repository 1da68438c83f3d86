//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - peak-bitstring search for peaked quantum circuits",
        style("qpeak").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qpeak-ir                   Circuit model and bitstrings");
    println!("  qpeak-decompose            Gate decomposition into primitives");
    println!("  qpeak-oracle               Amplitude oracle adapter");
    println!("  qpeak-search               Greedy bit-flip peak search");
    println!("  qpeak-engine-statevector   In-process contraction engine");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
