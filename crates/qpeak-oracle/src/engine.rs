//! Contraction engine trait.

use std::fmt;

use async_trait::async_trait;
use num_complex::Complex64;

use qpeak_ir::{Bitstring, PrimitiveOp};

use crate::error::OracleResult;

/// Opaque handle for one engine session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(pub String);

impl SessionId {
    /// Create a session id from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trait for tensor-network contraction engines.
///
/// Implementations own the network representation; the oracle adapter owns
/// the session lifecycle. The split keeps the expensive backend swappable:
/// production engines wrap an external contraction service, while tests use
/// the in-process statevector engine.
///
/// # Contract
///
/// - `open_session` MUST register the qubit count; every subsequent call
///   refers to that fixed register.
/// - `add_primitive` is only called between `open_session` and the first
///   `query_amplitude`; implementations MAY assume the network is fixed once
///   queries begin.
/// - `query_amplitude` MUST be side-effect-free against the built network:
///   repeated queries for the same bitstring return bit-identical
///   amplitudes, and independent queries may be issued concurrently.
/// - `close_session` MUST be idempotent-safe for unknown ids (the adapter
///   guarantees it is called at most once per session, but a crashed peer
///   may hand back a stale handle).
#[async_trait]
pub trait ContractionEngine: Send + Sync {
    /// Name of this engine, for logs and error context.
    fn name(&self) -> &str;

    /// Open a session for a register of `num_qubits` qubits.
    fn open_session(&self, num_qubits: usize) -> OracleResult<SessionId>;

    /// Append one primitive operation to the session's network description.
    fn add_primitive(&self, session: &SessionId, op: &PrimitiveOp) -> OracleResult<()>;

    /// Amplitude of one computational-basis bitstring against the built
    /// network. Potentially long-running; the adapter applies any time
    /// budget around this call.
    async fn query_amplitude(
        &self,
        session: &SessionId,
        bits: &Bitstring,
    ) -> OracleResult<Complex64>;

    /// Release the session and any engine-side resources.
    fn close_session(&self, session: &SessionId);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_display() {
        let id = SessionId::new("abc-123");
        assert_eq!(format!("{id}"), "abc-123");
    }
}
