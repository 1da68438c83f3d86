//! qpeak gate decomposition
//!
//! Rewrites every operation of a [`CircuitProgram`](qpeak_ir::CircuitProgram)
//! into the primitive gate set the contraction engine accepts, preserving
//! the net unitary effect and the original execution order.
//!
//! The policy is deliberately best-effort: an operator that cannot be
//! decomposed produces a non-fatal [`Diagnostic`](qpeak_ir::Diagnostic) and
//! is skipped; the rest of the circuit still decomposes. Callers that need
//! strict correctness inspect the returned diagnostics and abort themselves.
//!
//! # Rules
//!
//! | Input | Output |
//! |-------|--------|
//! | primitive name (`x`, `h`, `cz`, …) | passes through, typed |
//! | `rx(θ)` / `rz(θ)` | passes through; missing angle defaults to `0.0` |
//! | `u(φ, θ, λ)` | `rz(λ) → rx(θ) → rz(φ)` (ZXZ Euler split) |
//! | `measure` / `barrier` | dropped (no effect on the amplitude network) |
//! | anything else | skipped + `UnsupportedGate` diagnostic |

mod decompose;
pub mod unitary;

pub use decompose::decompose;
pub use unitary::Unitary2x2;
