//! The statevector-backed contraction engine.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use num_complex::Complex64;
use rustc_hash::FxHashMap;
use tracing::debug;
use uuid::Uuid;

use qpeak_ir::{Bitstring, PrimitiveOp};
use qpeak_oracle::{ContractionEngine, OracleError, OracleResult, SessionId};

/// One open session: its evolving state.
struct Session {
    state: crate::Statevector,
}

/// In-process contraction engine that simulates the network exactly by
/// dense statevector evolution.
///
/// Gates are applied eagerly as they arrive, so by the time the first
/// amplitude query lands, the final state is already materialized and
/// queries are O(1) lookups. Memory is 2^n amplitudes, hence `max_qubits`.
pub struct StatevectorEngine {
    sessions: Arc<Mutex<FxHashMap<String, Session>>>,
    /// Maximum register size (statevector is 2^n complex numbers).
    max_qubits: u32,
}

impl StatevectorEngine {
    /// Create an engine with the default 20-qubit cap.
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(FxHashMap::default())),
            max_qubits: 20,
        }
    }

    /// Create an engine with a specific qubit cap.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(FxHashMap::default())),
            max_qubits,
        }
    }
}

impl Default for StatevectorEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContractionEngine for StatevectorEngine {
    fn name(&self) -> &str {
        "statevector"
    }

    fn open_session(&self, num_qubits: usize) -> OracleResult<SessionId> {
        if num_qubits > self.max_qubits as usize {
            return Err(OracleError::BackendInit(format!(
                "register of {} qubits exceeds the statevector cap of {}",
                num_qubits, self.max_qubits
            )));
        }

        let id = Uuid::new_v4().to_string();
        let mut sessions = self
            .sessions
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        sessions.insert(
            id.clone(),
            Session {
                state: crate::Statevector::new(num_qubits),
            },
        );
        debug!(session = %id, num_qubits, "opened statevector session");
        Ok(SessionId::new(id))
    }

    fn add_primitive(&self, session: &SessionId, op: &PrimitiveOp) -> OracleResult<()> {
        let mut sessions = self
            .sessions
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let entry = sessions
            .get_mut(&session.0)
            .ok_or(OracleError::SessionClosed)?;

        for q in &op.qubits {
            if q.0 as usize >= entry.state.num_qubits() {
                return Err(OracleError::Query(format!(
                    "gate {} addresses {} outside the {}-qubit register",
                    op.gate.name(),
                    q,
                    entry.state.num_qubits()
                )));
            }
        }
        entry.state.apply(op);
        Ok(())
    }

    async fn query_amplitude(
        &self,
        session: &SessionId,
        bits: &Bitstring,
    ) -> OracleResult<Complex64> {
        let sessions = self
            .sessions
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let entry = sessions
            .get(&session.0)
            .ok_or(OracleError::SessionClosed)?;
        Ok(entry.state.amplitude(bits.to_index()))
    }

    fn close_session(&self, session: &SessionId) {
        let mut sessions = self
            .sessions
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if sessions.remove(&session.0).is_some() {
            debug!(session = %session, "closed statevector session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qpeak_ir::{PrimitiveGate, QubitId};

    #[tokio::test]
    async fn test_session_lifecycle() {
        let engine = StatevectorEngine::new();
        let session = engine.open_session(2).unwrap();

        engine
            .add_primitive(
                &session,
                &PrimitiveOp::single(PrimitiveGate::X, QubitId(0)),
            )
            .unwrap();

        let amp = engine
            .query_amplitude(&session, &Bitstring::from_index(1, 2))
            .await
            .unwrap();
        assert!((amp.re - 1.0).abs() < 1e-12);

        engine.close_session(&session);
        let err = engine
            .query_amplitude(&session, &Bitstring::zeros(2))
            .await
            .unwrap_err();
        assert!(matches!(err, OracleError::SessionClosed));
    }

    #[tokio::test]
    async fn test_qubit_cap() {
        let engine = StatevectorEngine::with_max_qubits(4);
        let err = engine.open_session(5).unwrap_err();
        assert!(matches!(err, OracleError::BackendInit(_)));
    }

    #[tokio::test]
    async fn test_out_of_range_gate_rejected() {
        let engine = StatevectorEngine::new();
        let session = engine.open_session(1).unwrap();
        let err = engine
            .add_primitive(
                &session,
                &PrimitiveOp::single(PrimitiveGate::H, QubitId(3)),
            )
            .unwrap_err();
        assert!(matches!(err, OracleError::Query(_)));
    }

    #[tokio::test]
    async fn test_independent_sessions() {
        let engine = StatevectorEngine::new();
        let a = engine.open_session(1).unwrap();
        let b = engine.open_session(1).unwrap();

        engine
            .add_primitive(&a, &PrimitiveOp::single(PrimitiveGate::X, QubitId(0)))
            .unwrap();

        let amp_a = engine
            .query_amplitude(&a, &Bitstring::from_index(1, 1))
            .await
            .unwrap();
        let amp_b = engine
            .query_amplitude(&b, &Bitstring::from_index(1, 1))
            .await
            .unwrap();
        assert!((amp_a.re - 1.0).abs() < 1e-12);
        assert!(amp_b.norm() < 1e-12);
    }

    #[tokio::test]
    async fn test_close_unknown_session_is_safe() {
        let engine = StatevectorEngine::new();
        engine.close_session(&SessionId::new("no-such-session"));
    }
}
