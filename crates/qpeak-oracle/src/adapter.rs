//! The amplitude oracle adapter.

use std::time::Duration;

use futures::future::try_join_all;
use tracing::{debug, instrument};

use qpeak_ir::{Bitstring, PrimitiveProgram};

use crate::engine::{ContractionEngine, SessionId};
use crate::error::{OracleError, OracleResult};

/// Owns exactly one engine session bound to one
/// [`PrimitiveProgram`](qpeak_ir::PrimitiveProgram) and exposes the pure
/// query `probability(bitstring)`.
///
/// Construction opens the session and registers every primitive in program
/// order; afterwards the network is read-only and queries may be issued in
/// any order, concurrently, with identical results. The session is released
/// exactly once — on [`close`](Self::close) or when the oracle is dropped,
/// whichever comes first.
pub struct AmplitudeOracle<E: ContractionEngine> {
    engine: E,
    /// `None` after release; the take-once guard against double close.
    session: Option<SessionId>,
    num_qubits: usize,
    timeout: Option<Duration>,
}

impl<E: ContractionEngine> AmplitudeOracle<E> {
    /// Build the network once: open a session and add every primitive.
    ///
    /// Fails with [`OracleError::BackendInit`] if the engine cannot be
    /// reached and with [`OracleError::UnsupportedGate`] if the engine
    /// rejects a primitive the decomposer emitted. On failure the partial
    /// session is released before returning.
    #[instrument(skip(engine, program), fields(engine = engine.name(), ops = program.len()))]
    pub fn build(engine: E, program: &PrimitiveProgram) -> OracleResult<Self> {
        let session = engine.open_session(program.num_qubits())?;
        debug!(session = %session, "opened contraction session");

        for op in program.ops() {
            if let Err(err) = engine.add_primitive(&session, op) {
                engine.close_session(&session);
                return Err(err);
            }
        }
        debug!("network built: {} primitives", program.len());

        Ok(Self {
            engine,
            session: Some(session),
            num_qubits: program.num_qubits(),
            timeout: None,
        })
    }

    /// Bound each amplitude query by a time budget; an overrun surfaces as
    /// [`OracleError::Timeout`] instead of hanging the searcher.
    #[must_use]
    pub fn with_timeout(mut self, budget: Duration) -> Self {
        self.timeout = Some(budget);
        self
    }

    /// Register size of the bound network.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Probability of measuring `bits`: `|amplitude|²` against the fixed
    /// network. Deterministic — repeated queries return identical values.
    pub async fn probability(&self, bits: &Bitstring) -> OracleResult<f64> {
        let session = self.session.as_ref().ok_or(OracleError::SessionClosed)?;
        if bits.len() != self.num_qubits {
            return Err(OracleError::BitstringLength {
                got: bits.len(),
                expected: self.num_qubits,
            });
        }

        let amplitude = match self.timeout {
            Some(budget) => tokio::time::timeout(budget, self.engine.query_amplitude(session, bits))
                .await
                .map_err(|_| OracleError::Timeout { budget })??,
            None => self.engine.query_amplitude(session, bits).await?,
        };
        Ok(amplitude.norm_sqr())
    }

    /// Evaluate several candidates concurrently.
    ///
    /// Queries are commutative and side-effect-free against the read-only
    /// network, so this returns exactly what sequential evaluation would,
    /// in input order — only wall-clock time changes.
    pub async fn probabilities(&self, candidates: &[Bitstring]) -> OracleResult<Vec<f64>> {
        try_join_all(candidates.iter().map(|bits| self.probability(bits))).await
    }

    /// Release the session explicitly.
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(session) = self.session.take() {
            debug!(session = %session, "closing contraction session");
            self.engine.close_session(&session);
        }
    }
}

impl<E: ContractionEngine> Drop for AmplitudeOracle<E> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use num_complex::Complex64;
    use qpeak_ir::{PrimitiveGate, PrimitiveOp, QubitId};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Minimal fake engine: amplitude 1 on a single favored index, else 0.
    /// Counts session closes so release-exactly-once is observable.
    struct FakeEngine {
        favored: usize,
        opens: AtomicUsize,
        closes: Arc<AtomicUsize>,
        reject_gates: bool,
        delay: Option<Duration>,
    }

    impl FakeEngine {
        fn new(favored: usize) -> Self {
            Self {
                favored,
                opens: AtomicUsize::new(0),
                closes: Arc::new(AtomicUsize::new(0)),
                reject_gates: false,
                delay: None,
            }
        }
    }

    #[async_trait]
    impl ContractionEngine for FakeEngine {
        fn name(&self) -> &str {
            "fake"
        }

        fn open_session(&self, _num_qubits: usize) -> OracleResult<SessionId> {
            let n = self.opens.fetch_add(1, Ordering::SeqCst);
            Ok(SessionId::new(format!("fake-{n}")))
        }

        fn add_primitive(&self, _session: &SessionId, op: &PrimitiveOp) -> OracleResult<()> {
            if self.reject_gates {
                return Err(OracleError::UnsupportedGate {
                    gate: op.gate.name().to_string(),
                    qubits: op.qubits.clone(),
                });
            }
            Ok(())
        }

        async fn query_amplitude(
            &self,
            _session: &SessionId,
            bits: &Bitstring,
        ) -> OracleResult<Complex64> {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            Ok(if bits.to_index() == self.favored {
                Complex64::new(1.0, 0.0)
            } else {
                Complex64::new(0.0, 0.0)
            })
        }

        fn close_session(&self, _session: &SessionId) {
            self.closes.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn two_qubit_program() -> PrimitiveProgram {
        PrimitiveProgram::new(2, vec![PrimitiveOp::single(PrimitiveGate::X, QubitId(0))])
    }

    #[tokio::test]
    async fn test_probability_and_determinism() {
        let oracle = AmplitudeOracle::build(FakeEngine::new(1), &two_qubit_program()).unwrap();

        let favored = Bitstring::from_index(1, 2);
        let p1 = oracle.probability(&favored).await.unwrap();
        let p2 = oracle.probability(&favored).await.unwrap();
        assert_eq!(p1.to_bits(), p2.to_bits());
        assert!((p1 - 1.0).abs() < 1e-12);

        let other = Bitstring::from_index(2, 2);
        assert!(oracle.probability(&other).await.unwrap() < 1e-12);
    }

    #[tokio::test]
    async fn test_batch_matches_sequential() {
        let oracle = AmplitudeOracle::build(FakeEngine::new(3), &two_qubit_program()).unwrap();
        let candidates: Vec<_> = (0..4).map(|i| Bitstring::from_index(i, 2)).collect();

        let batch = oracle.probabilities(&candidates).await.unwrap();
        for (bits, &p) in candidates.iter().zip(&batch) {
            let sequential = oracle.probability(bits).await.unwrap();
            assert_eq!(p.to_bits(), sequential.to_bits());
        }
    }

    #[tokio::test]
    async fn test_session_released_exactly_once() {
        let engine = FakeEngine::new(0);
        let closes = engine.closes.clone();

        let oracle = AmplitudeOracle::build(engine, &two_qubit_program()).unwrap();
        oracle.close();
        assert_eq!(closes.load(Ordering::SeqCst), 1);
        // close() consumed the oracle, so Drop has already run too — still 1.
    }

    #[tokio::test]
    async fn test_session_released_on_drop() {
        let engine = FakeEngine::new(0);
        let closes = engine.closes.clone();
        {
            let _oracle = AmplitudeOracle::build(engine, &two_qubit_program()).unwrap();
        }
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_rejected_primitive_releases_partial_session() {
        let mut engine = FakeEngine::new(0);
        engine.reject_gates = true;
        let closes = engine.closes.clone();

        match AmplitudeOracle::build(engine, &two_qubit_program()) {
            Err(err) => assert!(matches!(err, OracleError::UnsupportedGate { .. })),
            Ok(_) => panic!("build must fail when the engine rejects a primitive"),
        }
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_query_timeout() {
        let mut engine = FakeEngine::new(0);
        engine.delay = Some(Duration::from_millis(200));

        let oracle = AmplitudeOracle::build(engine, &two_qubit_program())
            .unwrap()
            .with_timeout(Duration::from_millis(10));

        let err = oracle
            .probability(&Bitstring::zeros(2))
            .await
            .unwrap_err();
        assert!(matches!(err, OracleError::Timeout { .. }));
    }

    #[tokio::test]
    async fn test_bitstring_length_checked() {
        let oracle = AmplitudeOracle::build(FakeEngine::new(0), &two_qubit_program()).unwrap();
        let err = oracle
            .probability(&Bitstring::zeros(3))
            .await
            .unwrap_err();
        assert!(matches!(err, OracleError::BitstringLength { got: 3, expected: 2 }));
    }
}
