//! Pipeline diagnostics.
//!
//! Per-operation problems are "fatal to that operation's inclusion" but
//! never to the pipeline: the operation is skipped, a record is kept, and
//! processing continues. Callers that need strict correctness inspect the
//! returned diagnostics and abort themselves.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::op::QubitId;

/// Why an operation record failed model validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MalformedKind {
    /// A qubit index was outside `[0, num_qubits)`.
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
    },
    /// A qubit index appeared twice within the operation.
    DuplicateQubit {
        /// The duplicated qubit.
        qubit: QubitId,
    },
    /// The operation acts on an unsupported number of qubits.
    QubitCountInvalid {
        /// Number of qubits supplied.
        got: usize,
        /// Number of qubits the operator takes, when known.
        expected: Option<usize>,
    },
}

impl fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedKind::QubitOutOfRange { qubit } => write!(f, "qubit {qubit} out of range"),
            MalformedKind::DuplicateQubit { qubit } => write!(f, "duplicate qubit {qubit}"),
            MalformedKind::QubitCountInvalid { got, expected } => match expected {
                Some(e) => write!(f, "acts on {got} qubits, operator takes {e}"),
                None => write!(f, "acts on {got} qubits, expected 1 or 2"),
            },
        }
    }
}

/// A per-operation diagnostic accumulated during model construction or
/// decomposition. Ordered by the position of the offending operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Diagnostic {
    /// The record violated a model invariant and was excluded.
    MalformedOperation {
        /// Operator name.
        name: String,
        /// Qubit indices as supplied (pre-validation, so plain integers).
        qubits: Vec<u32>,
        /// What was wrong.
        kind: MalformedKind,
    },
    /// The operator is not decomposable into the primitive set; the
    /// operation was skipped and the rest of the circuit proceeded.
    UnsupportedGate {
        /// Operator name.
        name: String,
        /// Qubit operands.
        qubits: Vec<QubitId>,
        /// Literal parameters, for the caller's post-mortem.
        params: Vec<f64>,
    },
}

impl Diagnostic {
    /// Check if this is an `UnsupportedGate` diagnostic.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Diagnostic::UnsupportedGate { .. })
    }

    /// Check if this is a `MalformedOperation` diagnostic.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Diagnostic::MalformedOperation { .. })
    }

    /// Operator name the diagnostic refers to.
    pub fn gate_name(&self) -> &str {
        match self {
            Diagnostic::MalformedOperation { name, .. }
            | Diagnostic::UnsupportedGate { name, .. } => name,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MalformedOperation { name, kind, .. } => {
                write!(f, "malformed operation '{name}': {kind}")
            }
            Diagnostic::UnsupportedGate { name, qubits, .. } => {
                write!(f, "unsupported gate '{name}' on")?;
                for q in qubits {
                    write!(f, " {q}")?;
                }
                Ok(())
            }
        }
    }
}
