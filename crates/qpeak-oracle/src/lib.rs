//! qpeak amplitude oracle
//!
//! The seam between the search pipeline and the tensor-network contraction
//! engine. The engine is an injected capability — a trait exposing
//! `open_session` / `add_primitive` / `query_amplitude` / `close_session` —
//! so the [`AmplitudeOracle`] adapter can be exercised against a trivial
//! in-process reference engine without the real backend.
//!
//! # Lifecycle
//!
//! ```text
//!   open_session(n) ──→ add_primitive()* ──→ query_amplitude()* ──→ close_session()
//!      (build once)      (program order)        (many, read-only)     (exactly once)
//! ```
//!
//! The network is built once per [`PrimitiveProgram`](qpeak_ir::PrimitiveProgram)
//! and reused across arbitrarily many queries — that amortization is the
//! entire reason the adapter exists as a stateful object rather than a pure
//! function. Queries are independent, order-insensitive, and bit-identical
//! on repetition; the session is released exactly once, on explicit
//! [`close`](AmplitudeOracle::close) or on drop (including the error path).

pub mod adapter;
pub mod engine;
pub mod error;

pub use adapter::AmplitudeOracle;
pub use engine::{ContractionEngine, SessionId};
pub use error::{OracleError, OracleResult};
