//! The primitive gate vocabulary the contraction engine accepts.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::op::QubitId;

/// A gate from the contraction backend's native vocabulary.
///
/// This is a deliberately closed enumeration: the primitive set is small and
/// fixed (the single-qubit Pauli/Clifford gates, rotations about the Z and X
/// axes, swap, and the controlled-Pauli gates), so exhaustive matching is
/// preferable to a string-keyed registry. Everything else must be
/// decomposed into these by `qpeak-decompose` before the engine sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PrimitiveGate {
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,
    /// Rotation about the X axis.
    Rx(f64),
    /// Rotation about the Z axis.
    Rz(f64),
    /// SWAP gate.
    Swap,
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Y gate.
    CY,
    /// Controlled-Z gate.
    CZ,
}

impl PrimitiveGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveGate::I => "id",
            PrimitiveGate::X => "x",
            PrimitiveGate::Y => "y",
            PrimitiveGate::Z => "z",
            PrimitiveGate::H => "h",
            PrimitiveGate::S => "s",
            PrimitiveGate::Sdg => "sdg",
            PrimitiveGate::T => "t",
            PrimitiveGate::Tdg => "tdg",
            PrimitiveGate::Rx(_) => "rx",
            PrimitiveGate::Rz(_) => "rz",
            PrimitiveGate::Swap => "swap",
            PrimitiveGate::CX => "cx",
            PrimitiveGate::CY => "cy",
            PrimitiveGate::CZ => "cz",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        match self {
            PrimitiveGate::I
            | PrimitiveGate::X
            | PrimitiveGate::Y
            | PrimitiveGate::Z
            | PrimitiveGate::H
            | PrimitiveGate::S
            | PrimitiveGate::Sdg
            | PrimitiveGate::T
            | PrimitiveGate::Tdg
            | PrimitiveGate::Rx(_)
            | PrimitiveGate::Rz(_) => 1,

            PrimitiveGate::Swap | PrimitiveGate::CX | PrimitiveGate::CY | PrimitiveGate::CZ => 2,
        }
    }

    /// Get parameters of this gate.
    pub fn params(&self) -> Vec<f64> {
        match self {
            PrimitiveGate::Rx(theta) | PrimitiveGate::Rz(theta) => vec![*theta],
            _ => vec![],
        }
    }
}

/// A primitive gate bound to its qubit operands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveOp {
    /// The gate.
    pub gate: PrimitiveGate,
    /// Qubit operands, length = `gate.num_qubits()`.
    pub qubits: Vec<QubitId>,
}

impl PrimitiveOp {
    /// Create a single-qubit primitive.
    pub fn single(gate: PrimitiveGate, qubit: QubitId) -> Self {
        debug_assert_eq!(gate.num_qubits(), 1);
        Self {
            gate,
            qubits: vec![qubit],
        }
    }

    /// Create a two-qubit primitive.
    pub fn two(gate: PrimitiveGate, q0: QubitId, q1: QubitId) -> Self {
        debug_assert_eq!(gate.num_qubits(), 2);
        Self {
            gate,
            qubits: vec![q0, q1],
        }
    }
}

impl fmt::Display for PrimitiveOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.gate.name())?;
        let params = self.gate.params();
        if !params.is_empty() {
            write!(f, "(")?;
            for (i, p) in params.iter().enumerate() {
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

/// A circuit whose every operation is drawn from the primitive set.
///
/// Produced once per [`CircuitProgram`](crate::CircuitProgram) by the
/// decomposer; immutable for the lifetime of one search. Ordering is
/// execution order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveProgram {
    num_qubits: usize,
    ops: Vec<PrimitiveOp>,
}

impl PrimitiveProgram {
    /// Assemble a primitive program.
    pub fn new(num_qubits: usize, ops: Vec<PrimitiveOp>) -> Self {
        Self { num_qubits, ops }
    }

    /// Register size.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The primitive operations in execution order.
    pub fn ops(&self) -> &[PrimitiveOp] {
        &self.ops
    }

    /// Number of primitive operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the program has no operations.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
