//! In-process statevector contraction engine.
//!
//! This engine computes amplitudes exactly by dense statevector evolution.
//! It is the reference [`ContractionEngine`](qpeak_oracle::ContractionEngine)
//! implementation: small registers only (2^n amplitudes in memory), but
//! deterministic and dependency-free, which makes it the natural backend for
//! tests and for searches over circuits of up to ~20 qubits.

mod engine;
mod statevector;

pub use engine::StatevectorEngine;
pub use statevector::Statevector;
