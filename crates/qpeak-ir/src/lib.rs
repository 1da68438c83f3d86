//! qpeak circuit model
//!
//! Core data structures for the peak-search pipeline. A circuit arrives from
//! an external front-end as a flat, ordered list of operation records; this
//! crate validates those records into a [`CircuitProgram`], and defines the
//! [`PrimitiveProgram`] form the contraction engine consumes after
//! decomposition, together with the [`Bitstring`] value type the searcher
//! climbs over.
//!
//! # Core Components
//!
//! - **Ids**: [`QubitId`], [`ClbitId`] for addressing qubits and classical bits
//! - **Records**: [`RawOperation`] (externally supplied, serde-friendly) and
//!   the validated [`Operation`]
//! - **Programs**: [`CircuitProgram`] (arbitrary operator names, execution
//!   order significant) and [`PrimitiveProgram`] (closed [`PrimitiveGate`]
//!   vocabulary only)
//! - **Search domain**: [`Bitstring`], one bit per qubit, index `i` ↔ qubit `i`
//! - **Diagnostics**: [`Diagnostic`] records collected across the pipeline
//!
//! # Example
//!
//! ```rust
//! use qpeak_ir::{CircuitProgram, RawOperation};
//!
//! let records = vec![
//!     RawOperation::gate("h", [0]),
//!     RawOperation::gate("cx", [0, 1]),
//! ];
//! let (program, diagnostics) = CircuitProgram::from_records(2, records);
//! assert_eq!(program.num_qubits(), 2);
//! assert_eq!(program.operations().len(), 2);
//! assert!(diagnostics.is_empty());
//! ```

pub mod bitstring;
pub mod diagnostic;
pub mod error;
pub mod op;
pub mod primitive;
pub mod program;

pub use bitstring::Bitstring;
pub use diagnostic::{Diagnostic, MalformedKind};
pub use error::{IrResult, ModelError};
pub use op::{ClbitId, Operation, QubitId, RawOperation};
pub use primitive::{PrimitiveGate, PrimitiveOp, PrimitiveProgram};
pub use program::CircuitProgram;
