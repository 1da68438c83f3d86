//! 2x2 unitary utilities for verifying single-qubit decompositions.

use num_complex::Complex64;
use std::f64::consts::PI;

use qpeak_ir::PrimitiveGate;

/// Tolerance for floating point comparisons.
const EPSILON: f64 = 1e-10;

/// A 2x2 unitary matrix in row-major order.
#[derive(Debug, Clone, Copy)]
pub struct Unitary2x2 {
    /// The matrix elements in row-major order: [[a, b], [c, d]].
    pub data: [Complex64; 4],
}

impl Unitary2x2 {
    /// Create a new 2x2 matrix.
    pub fn new(a: Complex64, b: Complex64, c: Complex64, d: Complex64) -> Self {
        Self { data: [a, b, c, d] }
    }

    /// The identity matrix.
    pub fn identity() -> Self {
        Self::new(
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 0.0),
        )
    }

    /// An RX rotation matrix.
    pub fn rx(theta: f64) -> Self {
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        Self::new(
            Complex64::new(c, 0.0),
            Complex64::new(0.0, -s),
            Complex64::new(0.0, -s),
            Complex64::new(c, 0.0),
        )
    }

    /// An RZ rotation matrix.
    pub fn rz(theta: f64) -> Self {
        Self::new(
            Complex64::from_polar(1.0, -theta / 2.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::from_polar(1.0, theta / 2.0),
        )
    }

    /// The general gate `u(φ, θ, λ) = Rz(φ)·Rx(θ)·Rz(λ)`, written out in
    /// closed form so decomposition tests compare against an independent
    /// expansion rather than the same matrix products they verify:
    ///
    /// ```text
    ///  [ cos(θ/2)·e^{-i(φ+λ)/2}     -i·sin(θ/2)·e^{-i(φ-λ)/2} ]
    ///  [ -i·sin(θ/2)·e^{ i(φ-λ)/2}   cos(θ/2)·e^{ i(φ+λ)/2}   ]
    /// ```
    pub fn u(phi: f64, theta: f64, lambda: f64) -> Self {
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        let minus_i = Complex64::new(0.0, -1.0);
        Self::new(
            c * Complex64::from_polar(1.0, -(phi + lambda) / 2.0),
            minus_i * s * Complex64::from_polar(1.0, -(phi - lambda) / 2.0),
            minus_i * s * Complex64::from_polar(1.0, (phi - lambda) / 2.0),
            c * Complex64::from_polar(1.0, (phi + lambda) / 2.0),
        )
    }

    /// Matrix of a single-qubit primitive gate.
    ///
    /// # Panics
    ///
    /// Panics if the gate is a two-qubit primitive.
    pub fn primitive(gate: &PrimitiveGate) -> Self {
        let one = Complex64::new(1.0, 0.0);
        let zero = Complex64::new(0.0, 0.0);
        match gate {
            PrimitiveGate::I => Self::identity(),
            PrimitiveGate::X => Self::new(zero, one, one, zero),
            PrimitiveGate::Y => Self::new(
                zero,
                Complex64::new(0.0, -1.0),
                Complex64::new(0.0, 1.0),
                zero,
            ),
            PrimitiveGate::Z => Self::new(one, zero, zero, -one),
            PrimitiveGate::H => {
                let s = Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0);
                Self::new(s, s, s, -s)
            }
            PrimitiveGate::S => Self::new(one, zero, zero, Complex64::new(0.0, 1.0)),
            PrimitiveGate::Sdg => Self::new(one, zero, zero, Complex64::new(0.0, -1.0)),
            PrimitiveGate::T => Self::new(one, zero, zero, Complex64::from_polar(1.0, PI / 4.0)),
            PrimitiveGate::Tdg => {
                Self::new(one, zero, zero, Complex64::from_polar(1.0, -PI / 4.0))
            }
            PrimitiveGate::Rx(theta) => Self::rx(*theta),
            PrimitiveGate::Rz(theta) => Self::rz(*theta),
            other => panic!("not a single-qubit primitive: {}", other.name()),
        }
    }

    /// Conjugate transpose.
    pub fn dagger(&self) -> Self {
        let [a, b, c, d] = self.data;
        Self::new(a.conj(), c.conj(), b.conj(), d.conj())
    }

    /// Check equality with `other` up to an unobservable global phase.
    pub fn equals_up_to_phase(&self, other: &Self) -> bool {
        // If self = phase · other, then self† · other = conj(phase) · I.
        let product = self.dagger() * *other;
        let [a, b, c, d] = product.data;
        b.norm() < EPSILON
            && c.norm() < EPSILON
            && (a - d).norm() < EPSILON
            && (a.norm() - 1.0).abs() < EPSILON
    }
}

impl std::ops::Mul for Unitary2x2 {
    type Output = Unitary2x2;

    fn mul(self, rhs: Unitary2x2) -> Unitary2x2 {
        let [a1, b1, c1, d1] = self.data;
        let [a2, b2, c2, d2] = rhs.data;
        Unitary2x2::new(
            a1 * a2 + b1 * c2,
            a1 * b2 + b1 * d2,
            c1 * a2 + d1 * c2,
            c1 * b2 + d1 * d2,
        )
    }
}
