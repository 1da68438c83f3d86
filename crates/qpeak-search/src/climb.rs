//! Bit-flip hill climbing against a fixed amplitude oracle.

use tracing::debug;

use qpeak_ir::Bitstring;
use qpeak_oracle::{AmplitudeOracle, ContractionEngine};

use crate::error::SearchResult;

/// One completed climb: the local maximum it settled on, plus counters.
pub(crate) struct Climb {
    pub bitstring: Bitstring,
    pub probability: f64,
    pub passes: u64,
    pub queries: u64,
}

/// Greedy first-improvement hill climbing from `seed`.
///
/// Each pass scans qubit indices in increasing order; flipping bit `i` of
/// the *latest accepted* candidate is accepted iff it strictly increases the
/// probability. A pass that accepts nothing ends the climb. Strict `>`
/// acceptance guarantees termination (the probability increases on every
/// accepted flip) and keeps the search stable on plateaus: a uniform
/// two-outcome distribution returns the seed rather than oscillating.
///
/// With `concurrent` set, the remaining flips of the current candidate are
/// evaluated in one batch and the lowest improving index is committed —
/// the accept sequence is identical to the sequential scan, only wall-clock
/// time changes.
pub(crate) async fn climb<E: ContractionEngine>(
    oracle: &AmplitudeOracle<E>,
    seed: Bitstring,
    concurrent: bool,
) -> SearchResult<Climb> {
    let n = seed.len();
    let mut candidate = seed;
    let mut best = oracle.probability(&candidate).await?;
    let mut queries: u64 = 1;
    let mut passes: u64 = 0;

    loop {
        passes += 1;
        let mut improved = false;
        let mut i = 0;

        while i < n {
            if concurrent {
                let mut neighbors: Vec<_> = (i..n).map(|j| candidate.with_flipped(j)).collect();
                let probs = oracle.probabilities(&neighbors).await?;
                queries += neighbors.len() as u64;

                match probs.iter().position(|&p| p > best) {
                    Some(offset) => {
                        candidate = neighbors.swap_remove(offset);
                        best = probs[offset];
                        improved = true;
                        i += offset + 1;
                    }
                    None => i = n,
                }
            } else {
                let neighbor = candidate.with_flipped(i);
                let p = oracle.probability(&neighbor).await?;
                queries += 1;
                if p > best {
                    candidate = neighbor;
                    best = p;
                    improved = true;
                }
                i += 1;
            }
        }

        if !improved {
            break;
        }
    }

    debug!(
        peak = %candidate,
        probability = best,
        passes,
        queries,
        "climb settled on local maximum"
    );
    Ok(Climb {
        bitstring: candidate,
        probability: best,
        passes,
        queries,
    })
}
