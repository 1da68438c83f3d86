//! Error types for the oracle crate.

use std::time::Duration;
use thiserror::Error;

use qpeak_ir::QubitId;

/// Errors from the contraction engine or the oracle adapter.
///
/// Unlike the per-operation diagnostics collected during decomposition,
/// every variant here is fatal to the current operation (construction or
/// query) and is surfaced to the caller, never swallowed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OracleError {
    /// The engine session could not be created.
    #[error("Contraction engine init failed: {0}")]
    BackendInit(String),

    /// The engine rejected a primitive at network-build time.
    #[error("Engine rejected primitive '{gate}' on {qubits:?}")]
    UnsupportedGate {
        /// Primitive gate name.
        gate: String,
        /// Qubit operands.
        qubits: Vec<QubitId>,
    },

    /// An amplitude query failed inside the engine.
    #[error("Amplitude query failed: {0}")]
    Query(String),

    /// An amplitude query exceeded the configured time budget.
    #[error("Amplitude query exceeded budget of {budget:?}")]
    Timeout {
        /// The budget that was exceeded.
        budget: Duration,
    },

    /// Query issued after the session was released.
    #[error("Session already closed")]
    SessionClosed,

    /// Candidate bitstring length does not match the network's register.
    #[error("Bitstring length {got} does not match {expected}-qubit network")]
    BitstringLength {
        /// Supplied length.
        got: usize,
        /// Register size the network was built for.
        expected: usize,
    },
}

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;
