//! Operation records and bit identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a qubit within a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QubitId(pub u32);

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

/// Unique identifier for a classical bit within a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClbitId(pub u32);

impl fmt::Display for ClbitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

impl From<u32> for ClbitId {
    fn from(id: u32) -> Self {
        ClbitId(id)
    }
}

/// An operation record as supplied by the external circuit front-end.
///
/// Nothing about this record is trusted: qubit indices may be out of range
/// or duplicated, the operator name may be unknown, and parameters may be
/// missing. Validation happens when the record is folded into a
/// [`CircuitProgram`](crate::CircuitProgram); unknown operator *names* are
/// deliberately accepted there and rejected only at decomposition time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawOperation {
    /// Operator name (primitive or composite identifier).
    pub name: String,
    /// Qubit indices the operator acts on, in operand order.
    pub qubits: Vec<u32>,
    /// Continuous parameters (angles), exactly as literally specified.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<f64>,
    /// Classical bit indices (measurement operations only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clbits: Vec<u32>,
}

impl RawOperation {
    /// Create a parameterless gate record.
    pub fn gate(name: impl Into<String>, qubits: impl IntoIterator<Item = u32>) -> Self {
        Self {
            name: name.into(),
            qubits: qubits.into_iter().collect(),
            params: vec![],
            clbits: vec![],
        }
    }

    /// Create a parametrized gate record.
    pub fn parametrized(
        name: impl Into<String>,
        qubits: impl IntoIterator<Item = u32>,
        params: impl IntoIterator<Item = f64>,
    ) -> Self {
        Self {
            name: name.into(),
            qubits: qubits.into_iter().collect(),
            params: params.into_iter().collect(),
            clbits: vec![],
        }
    }

    /// Create a measurement record.
    pub fn measure(qubit: u32, clbit: u32) -> Self {
        Self {
            name: "measure".into(),
            qubits: vec![qubit],
            params: vec![],
            clbits: vec![clbit],
        }
    }
}

/// A validated operation inside a [`CircuitProgram`](crate::CircuitProgram).
///
/// Invariants (enforced at program construction): qubit indices are within
/// `[0, num_qubits)` and unique within the operation, and the operation acts
/// on one or two qubits. Parameters are kept exactly as supplied — default
/// substitution is the decomposer's job, so "what was literally specified"
/// stays distinguishable from "what was inferred".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Operator name.
    pub name: String,
    /// Validated qubit operands.
    pub qubits: Vec<QubitId>,
    /// Literal parameters (possibly empty even for parametrized operators).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<f64>,
    /// Classical bit operands (measurements only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clbits: Vec<ClbitId>,
}

impl Operation {
    /// Get the operator name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of qubit operands.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Check if this is a measurement operation.
    pub fn is_measure(&self) -> bool {
        self.name == "measure"
    }

    /// Check if this is a barrier.
    pub fn is_barrier(&self) -> bool {
        self.name == "barrier"
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.params.is_empty() {
            write!(f, "(")?;
            for (i, p) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{p}")?;
            }
            write!(f, ")")?;
        }
        for q in &self.qubits {
            write!(f, " {q}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_operation_builders() {
        let h = RawOperation::gate("h", [0]);
        assert_eq!(h.name, "h");
        assert_eq!(h.qubits, vec![0]);
        assert!(h.params.is_empty());

        let rz = RawOperation::parametrized("rz", [2], [0.5]);
        assert_eq!(rz.params, vec![0.5]);

        let m = RawOperation::measure(1, 1);
        assert_eq!(m.clbits, vec![1]);
    }

    #[test]
    fn test_raw_operation_json_defaults() {
        // params/clbits may be omitted in the serialized record form.
        let op: RawOperation = serde_json::from_str(r#"{"name":"cx","qubits":[0,1]}"#).unwrap();
        assert_eq!(op.name, "cx");
        assert!(op.params.is_empty());
        assert!(op.clbits.is_empty());
    }

    #[test]
    fn test_operation_display() {
        let op = Operation {
            name: "rz".into(),
            qubits: vec![QubitId(3)],
            params: vec![1.5],
            clbits: vec![],
        };
        assert_eq!(format!("{op}"), "rz(1.5) q3");
    }

    #[test]
    fn test_qubit_display() {
        assert_eq!(format!("{}", QubitId(7)), "q7");
        assert_eq!(format!("{}", ClbitId(2)), "c2");
    }
}
