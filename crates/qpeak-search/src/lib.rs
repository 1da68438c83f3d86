//! Greedy peak search over a quantum circuit's output distribution.
//!
//! Locates the most probable measurement outcome of a circuit without
//! materializing the exponential probability vector: the circuit is
//! decomposed into primitives, bound to a contraction engine once, and then
//! climbed by single-bit-flip moves from the all-zero bitstring, querying
//! one amplitude at a time.
//!
//! # Example
//!
//! ```no_run
//! use qpeak_ir::{CircuitProgram, RawOperation};
//! use qpeak_search::{run_peak_search, SearchOptions};
//!
//! # async fn demo(
//! #     engine: impl qpeak_oracle::ContractionEngine,
//! # ) -> Result<(), Box<dyn std::error::Error>> {
//! let program = CircuitProgram::new(2, vec![RawOperation::gate("x", vec![0])])?;
//! let result = run_peak_search(engine, &program, &SearchOptions::default()).await?;
//! println!("{} with p = {}", result.bitstring, result.probability);
//! # Ok(())
//! # }
//! ```

mod climb;
mod error;
mod search;

pub use error::{SearchError, SearchResult};
pub use search::{run_peak_search, PeakResult, SearchOptions};
