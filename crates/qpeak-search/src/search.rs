//! Top-level peak search: decompose, bind the oracle, climb.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, instrument};

use qpeak_decompose::decompose;
use qpeak_ir::{Bitstring, CircuitProgram, Diagnostic};
use qpeak_oracle::{AmplitudeOracle, ContractionEngine};

use crate::climb::climb;
use crate::error::SearchResult;

/// Tuning knobs for one peak search.
///
/// The defaults reproduce the faithful baseline: a single climb seeded from
/// the all-zero bitstring, sequential neighbor evaluation, no query budget.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Additional climbs from random seeds after the all-zero climb. The
    /// best local maximum across all climbs wins; ties keep the earliest
    /// climb's answer, so `restarts = 0` is exactly the baseline.
    pub restarts: u32,
    /// Seed for the restart RNG. Fixed default so reruns are reproducible.
    pub rng_seed: u64,
    /// Evaluate all remaining single-flip neighbors of a candidate in one
    /// concurrent batch instead of one query at a time. Same answer, less
    /// wall-clock time against a slow engine.
    pub concurrent_neighbors: bool,
    /// Per-query time budget; an overrun aborts the run.
    pub query_timeout: Option<Duration>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            restarts: 0,
            rng_seed: 0,
            concurrent_neighbors: false,
            query_timeout: None,
        }
    }
}

/// The externally observable outcome of a peak search.
#[derive(Debug, Clone, Serialize)]
pub struct PeakResult {
    /// The best local maximum found.
    pub bitstring: Bitstring,
    /// Its probability under the circuit's output distribution.
    pub probability: f64,
    /// Ordered decomposition diagnostics. The caller decides whether any of
    /// these invalidates the result.
    pub diagnostics: Vec<Diagnostic>,
    /// Total passes across all climbs.
    pub passes: u64,
    /// Total oracle queries across all climbs.
    pub queries: u64,
}

/// Run a full peak search over `program` against `engine`.
///
/// Decomposes the circuit into primitives, builds the contraction network
/// once, then climbs from the all-zero seed (plus any configured restarts).
/// The engine session is released before returning, on both paths.
#[instrument(skip_all, fields(num_qubits = program.num_qubits(), ops = program.len()))]
pub async fn run_peak_search<E: ContractionEngine>(
    engine: E,
    program: &CircuitProgram,
    options: &SearchOptions,
) -> SearchResult<PeakResult> {
    let (primitives, diagnostics) = decompose(program);
    debug!(
        primitives = primitives.len(),
        diagnostics = diagnostics.len(),
        "decomposed circuit"
    );

    let mut oracle = AmplitudeOracle::build(engine, &primitives)?;
    if let Some(budget) = options.query_timeout {
        oracle = oracle.with_timeout(budget);
    }

    let num_qubits = program.num_qubits();
    let mut rng = StdRng::seed_from_u64(options.rng_seed);

    let mut best = climb(&oracle, Bitstring::zeros(num_qubits), options.concurrent_neighbors).await?;
    let mut passes = best.passes;
    let mut queries = best.queries;

    for restart in 0..options.restarts {
        let seed = Bitstring::from_bits((0..num_qubits).map(|_| rng.gen_bool(0.5)).collect());
        debug!(restart, seed = %seed, "restart climb");
        let outcome = climb(&oracle, seed, options.concurrent_neighbors).await?;
        passes += outcome.passes;
        queries += outcome.queries;
        if outcome.probability > best.probability {
            best = outcome;
        }
    }

    oracle.close();
    Ok(PeakResult {
        bitstring: best.bitstring,
        probability: best.probability,
        diagnostics,
        passes,
        queries,
    })
}
