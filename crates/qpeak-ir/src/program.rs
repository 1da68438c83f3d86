//! The validated circuit program.

use serde::{Deserialize, Serialize};

use crate::diagnostic::{Diagnostic, MalformedKind};
use crate::error::{IrResult, ModelError};
use crate::op::{ClbitId, Operation, QubitId, RawOperation};

/// An ordered sequence of validated operations over a fixed qubit register.
///
/// Immutable once constructed; the operation ordering is execution order and
/// semantically significant. Unsupported operator *names* are accepted here
/// (the model has no opinion about vocabulary) and rejected only at
/// decomposition time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitProgram {
    num_qubits: usize,
    operations: Vec<Operation>,
}

impl CircuitProgram {
    /// Strict construction: the first invalid record fails the whole build.
    ///
    /// Intended for programmatic callers (tests, builders). Front-end input
    /// should go through [`from_records`](Self::from_records), which follows
    /// the report-and-continue policy instead.
    pub fn new(num_qubits: usize, records: Vec<RawOperation>) -> IrResult<Self> {
        if num_qubits == 0 {
            return Err(ModelError::EmptyRegister);
        }
        let mut operations = Vec::with_capacity(records.len());
        for record in records {
            match validate(num_qubits, record) {
                Ok(op) => operations.push(op),
                Err((record, kind)) => return Err(strict_error(num_qubits, &record, kind)),
            }
        }
        Ok(Self {
            num_qubits,
            operations,
        })
    }

    /// Best-effort construction from externally supplied records.
    ///
    /// A malformed record is fatal only to that operation's inclusion: it is
    /// excluded, a [`Diagnostic::MalformedOperation`] is appended, and the
    /// remaining records are still processed. An empty diagnostics list
    /// means every record validated cleanly.
    ///
    /// # Panics
    ///
    /// Panics if `num_qubits` is zero — a zero-qubit register has no
    /// meaningful best-effort interpretation.
    pub fn from_records(
        num_qubits: usize,
        records: Vec<RawOperation>,
    ) -> (Self, Vec<Diagnostic>) {
        assert!(num_qubits > 0, "circuit must have at least one qubit");
        let mut operations = Vec::with_capacity(records.len());
        let mut diagnostics = Vec::new();
        for record in records {
            match validate(num_qubits, record) {
                Ok(op) => operations.push(op),
                Err((record, kind)) => diagnostics.push(Diagnostic::MalformedOperation {
                    name: record.name,
                    qubits: record.qubits,
                    kind,
                }),
            }
        }
        (
            Self {
                num_qubits,
                operations,
            },
            diagnostics,
        )
    }

    /// Register size.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The operations in execution order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check if the program has no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// Validate one record against the register. On failure the record is handed
/// back so the caller can build either an error or a diagnostic from it.
fn validate(
    num_qubits: usize,
    record: RawOperation,
) -> Result<Operation, (RawOperation, MalformedKind)> {
    let arity = record.qubits.len();
    if arity == 0 || arity > 2 {
        return Err((
            record,
            MalformedKind::QubitCountInvalid {
                got: arity,
                expected: None,
            },
        ));
    }
    for (i, &q) in record.qubits.iter().enumerate() {
        if q as usize >= num_qubits {
            return Err((
                record,
                MalformedKind::QubitOutOfRange { qubit: QubitId(q) },
            ));
        }
        if record.qubits[..i].contains(&q) {
            return Err((record, MalformedKind::DuplicateQubit { qubit: QubitId(q) }));
        }
    }
    Ok(Operation {
        name: record.name,
        qubits: record.qubits.iter().map(|&q| QubitId(q)).collect(),
        params: record.params,
        clbits: record.clbits.iter().map(|&c| ClbitId(c)).collect(),
    })
}

fn strict_error(num_qubits: usize, record: &RawOperation, kind: MalformedKind) -> ModelError {
    match kind {
        MalformedKind::QubitOutOfRange { qubit } => ModelError::QubitOutOfRange {
            qubit,
            num_qubits,
            gate_name: record.name.clone(),
        },
        MalformedKind::DuplicateQubit { qubit } => ModelError::DuplicateQubit {
            qubit,
            gate_name: record.name.clone(),
        },
        MalformedKind::QubitCountInvalid { got, .. } => ModelError::QubitCountInvalid {
            gate_name: record.name.clone(),
            got,
        },
    }
}
