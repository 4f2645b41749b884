/// Sequential Elimination Selector - Oracle-Guided Pruning
///
/// Shrinks the candidate pool test-by-test: for each test input, the oracle
/// computes the expected outcome and every candidate whose outcome differs
/// is dropped. Tests the oracle itself cannot evaluate are skipped as weak
/// evidence. Processing stops the moment the pool reaches one survivor or
/// fewer, since no further evidence can separate the remainder.
///
/// **Degradation Rules:**
/// - No canonical solution → the pool is returned unchanged (the algorithm
///   is undefined without ground truth)
/// - Oracle inconclusive on every test → the pool is returned unfiltered;
///   an unevaluable oracle silently disables pruning rather than erroring
use codesift_common::types::Candidate;
use tracing::debug;

use crate::executor::{execute_pool, Executor};
use crate::oracle::Oracle;

/// Prune `pool` against `tests`, keeping only candidates that agree with
/// the canonical solution on every usable test.
///
/// Survivors keep their pool order, and the working set never grows.
pub async fn select<E: Executor>(
    executor: &E,
    pool: &[Candidate],
    tests: &[String],
    canonical: Option<&Candidate>,
) -> Vec<Candidate> {
    let Some(canonical) = canonical else {
        debug!("no canonical solution supplied; returning pool unchanged");
        return pool.to_vec();
    };

    let oracle = Oracle::new(executor, canonical);
    let mut working: Vec<Candidate> = pool.to_vec();

    for test_input in tests {
        let expected = oracle.evaluate(test_input).await;
        if expected.is_undefined() {
            debug!(test_input = %test_input, "oracle inconclusive; skipping test");
            continue;
        }

        let outcomes = execute_pool(executor, &working, test_input).await;
        let before = working.len();
        working = working
            .into_iter()
            .zip(outcomes)
            .filter(|(_, outcome)| *outcome == expected)
            .map(|(candidate, _)| candidate)
            .collect();

        debug!(
            test_input = %test_input,
            expected = %expected,
            kept = working.len(),
            dropped = before - working.len(),
            "applied oracle filter"
        );

        if working.len() <= 1 {
            break;
        }
    }

    working
}
