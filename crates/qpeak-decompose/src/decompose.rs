//! Per-gate rewrite into the primitive set.

use tracing::debug;

use qpeak_ir::{
    CircuitProgram, Diagnostic, MalformedKind, Operation, PrimitiveGate, PrimitiveOp,
    PrimitiveProgram,
};

/// Decompose a circuit into the primitive gate set.
///
/// Stateless and deterministic, one gate at a time. Returns the primitive
/// program plus the ordered list of diagnostics for operations that could
/// not be included. An empty diagnostics list means a clean decomposition.
pub fn decompose(program: &CircuitProgram) -> (PrimitiveProgram, Vec<Diagnostic>) {
    let mut ops = Vec::with_capacity(program.len());
    let mut diagnostics = Vec::new();

    for op in program.operations() {
        match rewrite(op) {
            Rewrite::Primitives(replacement) => ops.extend(replacement),
            Rewrite::Dropped => {}
            Rewrite::Failed(diag) => {
                debug!(gate = op.name(), "skipping operation: {diag}");
                diagnostics.push(diag);
            }
        }
    }

    (PrimitiveProgram::new(program.num_qubits(), ops), diagnostics)
}

enum Rewrite {
    /// Zero or more primitives replacing the operation.
    Primitives(Vec<PrimitiveOp>),
    /// The operation has no effect on the amplitude network.
    Dropped,
    /// The operation cannot be included; carry the diagnostic.
    Failed(Diagnostic),
}

/// Angle for rotation slot `i`, defaulting to `0.0` (identity rotation)
/// when the front-end supplied fewer parameters. An explicit, testable
/// default — never an error.
fn angle(op: &Operation, i: usize) -> f64 {
    op.params.get(i).copied().unwrap_or(0.0)
}

fn rewrite(op: &Operation) -> Rewrite {
    // Closed match over the known operator set; everything unrecognized
    // falls through to the UnsupportedGate branch.
    let (gate, arity): (Option<PrimitiveGate>, usize) = match op.name() {
        "id" => (Some(PrimitiveGate::I), 1),
        "x" => (Some(PrimitiveGate::X), 1),
        "y" => (Some(PrimitiveGate::Y), 1),
        "z" => (Some(PrimitiveGate::Z), 1),
        "h" => (Some(PrimitiveGate::H), 1),
        "s" => (Some(PrimitiveGate::S), 1),
        "sdg" => (Some(PrimitiveGate::Sdg), 1),
        "t" => (Some(PrimitiveGate::T), 1),
        "tdg" => (Some(PrimitiveGate::Tdg), 1),
        "rx" => (Some(PrimitiveGate::Rx(angle(op, 0))), 1),
        "rz" => (Some(PrimitiveGate::Rz(angle(op, 0))), 1),
        "swap" => (Some(PrimitiveGate::Swap), 2),
        "cx" => (Some(PrimitiveGate::CX), 2),
        "cy" => (Some(PrimitiveGate::CY), 2),
        "cz" => (Some(PrimitiveGate::CZ), 2),

        // u(φ, θ, λ) = Rz(φ)·Rx(θ)·Rz(λ) up to global phase.
        // Execution order: rz(λ) first, then rx(θ), then rz(φ).
        "u" | "u3" => {
            if op.num_qubits() != 1 {
                return Rewrite::Failed(arity_mismatch(op, 1));
            }
            let q = op.qubits[0];
            let (phi, theta, lambda) = (angle(op, 0), angle(op, 1), angle(op, 2));
            return Rewrite::Primitives(vec![
                PrimitiveOp::single(PrimitiveGate::Rz(lambda), q),
                PrimitiveOp::single(PrimitiveGate::Rx(theta), q),
                PrimitiveOp::single(PrimitiveGate::Rz(phi), q),
            ]);
        }

        // Measurements and barriers do not alter the amplitude network.
        "measure" | "barrier" => return Rewrite::Dropped,

        _ => (None, 0),
    };

    match gate {
        Some(_) if op.num_qubits() != arity => Rewrite::Failed(arity_mismatch(op, arity)),
        Some(gate) if arity == 1 => {
            Rewrite::Primitives(vec![PrimitiveOp::single(gate, op.qubits[0])])
        }
        Some(gate) => Rewrite::Primitives(vec![PrimitiveOp::two(
            gate,
            op.qubits[0],
            op.qubits[1],
        )]),
        None => Rewrite::Failed(Diagnostic::UnsupportedGate {
            name: op.name().to_string(),
            qubits: op.qubits.clone(),
            params: op.params.clone(),
        }),
    }
}

fn arity_mismatch(op: &Operation, expected: usize) -> Diagnostic {
    Diagnostic::MalformedOperation {
        name: op.name().to_string(),
        qubits: op.qubits.iter().map(|q| q.0).collect(),
        kind: MalformedKind::QubitCountInvalid {
            got: op.num_qubits(),
            expected: Some(expected),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qpeak_ir::RawOperation;
    use std::f64::consts::PI;

    fn program(records: Vec<RawOperation>) -> CircuitProgram {
        CircuitProgram::new(3, records).unwrap()
    }

    #[test]
    fn test_primitives_pass_through() {
        let (prim, diags) = decompose(&program(vec![
            RawOperation::gate("h", [0]),
            RawOperation::gate("cx", [0, 1]),
            RawOperation::gate("swap", [1, 2]),
        ]));
        assert!(diags.is_empty());
        assert_eq!(prim.len(), 3);
        assert_eq!(prim.ops()[0].gate, PrimitiveGate::H);
        assert_eq!(prim.ops()[1].gate, PrimitiveGate::CX);
        assert_eq!(prim.ops()[2].gate, PrimitiveGate::Swap);
    }

    #[test]
    fn test_rotation_literal_parameter() {
        let (prim, diags) =
            decompose(&program(vec![RawOperation::parametrized("rz", [0], [PI])]));
        assert!(diags.is_empty());
        assert_eq!(prim.ops()[0].gate, PrimitiveGate::Rz(PI));
    }

    #[test]
    fn test_rotation_missing_parameter_defaults_to_zero() {
        // An absent angle means identity rotation, never MalformedOperation.
        let (prim, diags) = decompose(&program(vec![RawOperation::gate("rx", [1])]));
        assert!(diags.is_empty());
        assert_eq!(prim.ops()[0].gate, PrimitiveGate::Rx(0.0));
    }

    #[test]
    fn test_u_splits_into_three_rotations() {
        let (prim, diags) = decompose(&program(vec![RawOperation::parametrized(
            "u",
            [0],
            [0.1, 0.2, 0.3],
        )]));
        assert!(diags.is_empty());
        // Execution order: rz(λ), rx(θ), rz(φ).
        assert_eq!(prim.ops()[0].gate, PrimitiveGate::Rz(0.3));
        assert_eq!(prim.ops()[1].gate, PrimitiveGate::Rx(0.2));
        assert_eq!(prim.ops()[2].gate, PrimitiveGate::Rz(0.1));
    }

    #[test]
    fn test_u_with_no_parameters_is_three_identity_rotations() {
        let (prim, diags) = decompose(&program(vec![RawOperation::gate("u", [0])]));
        assert!(diags.is_empty());
        assert_eq!(prim.len(), 3);
        assert!(prim.ops().iter().all(|op| matches!(
            op.gate,
            PrimitiveGate::Rz(a) | PrimitiveGate::Rx(a) if a == 0.0
        )));
    }

    #[test]
    fn test_unsupported_gate_is_skipped_with_diagnostic() {
        let (prim, diags) = decompose(&program(vec![
            RawOperation::gate("h", [0]),
            RawOperation::parametrized("rzz", [0, 1], [0.5]),
            RawOperation::gate("x", [2]),
        ]));
        assert_eq!(prim.len(), 2);
        assert_eq!(diags.len(), 1);
        match &diags[0] {
            Diagnostic::UnsupportedGate {
                name,
                qubits,
                params,
            } => {
                assert_eq!(name, "rzz");
                assert_eq!(qubits.len(), 2);
                assert_eq!(params, &vec![0.5]);
            }
            other => panic!("expected UnsupportedGate, got {other:?}"),
        }
    }

    #[test]
    fn test_measure_and_barrier_dropped_silently() {
        let (prim, diags) = decompose(&program(vec![
            RawOperation::gate("x", [0]),
            RawOperation::measure(0, 0),
            RawOperation::gate("barrier", [0]),
        ]));
        assert!(diags.is_empty());
        assert_eq!(prim.len(), 1);
    }

    #[test]
    fn test_known_gate_wrong_arity() {
        // "cx" on one qubit passes model validation (arity 1 is legal there)
        // but the decomposer knows cx takes two operands.
        let (prim, diags) = decompose(&program(vec![RawOperation::gate("cx", [0])]));
        assert!(prim.is_empty());
        assert_eq!(diags.len(), 1);
        assert!(diags[0].is_malformed());
    }

    #[test]
    fn test_order_preserved_across_skips() {
        let (prim, diags) = decompose(&program(vec![
            RawOperation::gate("x", [0]),
            RawOperation::gate("mystery", [1]),
            RawOperation::parametrized("u", [2], [0.1, 0.2, 0.3]),
            RawOperation::gate("cz", [0, 1]),
        ]));
        assert_eq!(diags.len(), 1);
        let names: Vec<_> = prim.ops().iter().map(|op| op.gate.name()).collect();
        assert_eq!(names, vec!["x", "rz", "rx", "rz", "cz"]);
    }
}
