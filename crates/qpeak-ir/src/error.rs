//! Error types for the model crate.

use crate::op::QubitId;
use thiserror::Error;

/// Errors from strict program construction.
///
/// The best-effort path ([`CircuitProgram::from_records`](crate::CircuitProgram::from_records))
/// never returns these; it records a [`Diagnostic`](crate::Diagnostic) and
/// drops the offending operation instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// Circuit must act on at least one qubit.
    #[error("Circuit must have at least one qubit")]
    EmptyRegister,

    /// Qubit index outside `[0, num_qubits)`.
    #[error("Qubit {qubit} out of range for {num_qubits}-qubit circuit (gate: {gate_name})")]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Register size.
        num_qubits: usize,
        /// Operator name for context.
        gate_name: String,
    },

    /// Qubit listed twice in one operation.
    #[error("Duplicate qubit {qubit} in operation (gate: {gate_name})")]
    DuplicateQubit {
        /// The duplicated qubit.
        qubit: QubitId,
        /// Operator name for context.
        gate_name: String,
    },

    /// Operation acts on zero or more than two qubits.
    #[error("Operation '{gate_name}' acts on {got} qubits, expected 1 or 2")]
    QubitCountInvalid {
        /// Operator name.
        gate_name: String,
        /// Number of qubits supplied.
        got: usize,
    },
}

/// Result type for model operations.
pub type IrResult<T> = Result<T, ModelError>;
