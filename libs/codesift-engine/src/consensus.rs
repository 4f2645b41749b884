/// Consensus Selector - Majority Scoring Without Ground Truth
///
/// Scores each candidate by how often its outcome matches the per-test
/// majority outcome, then keeps every candidate with the maximum score.
///
/// **Degradation Rules:**
/// - Empty pool or empty test list → the pool is returned unchanged
/// - A test whose majority outcome is `UNDEFINED` is skipped; a majority
///   of failures is not a usable signal
/// - Maximum score of zero → the pool is returned unfiltered; absence of
///   evidence must not be mistaken for evidence of total disagreement
use codesift_common::types::{Candidate, ExecutionOutcome, UNDEFINED};
use tracing::debug;

use crate::executor::{execute_pool, Executor};

/// Tie-break rule applied when several outcomes share the top frequency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// First-seen outcome among the equally frequent ones wins. This is
    /// the reference behaviour, inherited from its counting structure.
    #[default]
    FirstSeen,
    /// Lexicographically smallest rendering wins; independent of pool
    /// order.
    Lexicographic,
}

/// Select the top-scoring candidates using the default first-seen
/// tie-break.
pub async fn select<E: Executor>(
    executor: &E,
    pool: &[Candidate],
    tests: &[String],
) -> Vec<Candidate> {
    select_with(executor, pool, tests, TieBreak::default()).await
}

/// Select the top-scoring candidates with an explicit tie-break rule.
///
/// Survivors keep their pool order and are a non-empty subset of the pool
/// unless the pool itself was empty.
pub async fn select_with<E: Executor>(
    executor: &E,
    pool: &[Candidate],
    tests: &[String],
    tie_break: TieBreak,
) -> Vec<Candidate> {
    if pool.is_empty() || tests.is_empty() {
        return pool.to_vec();
    }

    let scores = score_pool(executor, pool, tests, tie_break).await;
    let max = scores.iter().copied().max().unwrap_or(0);
    if max == 0 {
        debug!("no usable majority on any test; returning pool unfiltered");
        return pool.to_vec();
    }

    pool.iter()
        .zip(&scores)
        .filter(|(_, score)| **score == max)
        .map(|(candidate, _)| candidate.clone())
        .collect()
}

/// Score table for the pool: one point per test on which a candidate's
/// outcome equals that test's majority outcome. Every score is bounded by
/// `tests.len()`.
pub async fn score_pool<E: Executor>(
    executor: &E,
    pool: &[Candidate],
    tests: &[String],
    tie_break: TieBreak,
) -> Vec<usize> {
    let mut scores = vec![0usize; pool.len()];

    for test_input in tests {
        let outcomes = execute_pool(executor, pool, test_input).await;
        let Some(majority) = majority_outcome(&outcomes, tie_break) else {
            continue;
        };
        if majority == UNDEFINED {
            debug!(test_input = %test_input, "majority outcome is a failure; skipping test");
            continue;
        }

        for (score, outcome) in scores.iter_mut().zip(&outcomes) {
            if outcome.consensus_key() == majority {
                *score += 1;
            }
        }
    }

    scores
}

/// Tally distinct outcomes across one test, in first-seen order, and keep
/// the counts for the split computations. Failures collapse to the bare
/// sentinel before counting.
pub(crate) fn tally_outcomes(outcomes: &[ExecutionOutcome]) -> Vec<(&str, usize)> {
    let mut tally: Vec<(&str, usize)> = Vec::new();
    for outcome in outcomes {
        let key = outcome.consensus_key();
        match tally.iter_mut().find(|(seen, _)| *seen == key) {
            Some((_, count)) => *count += 1,
            None => tally.push((key, 1)),
        }
    }
    tally
}

fn majority_outcome(outcomes: &[ExecutionOutcome], tie_break: TieBreak) -> Option<&str> {
    let tally = tally_outcomes(outcomes);

    // First-seen order is tracked explicitly in the tally, so a strict
    // comparison keeps the earliest of the equally frequent outcomes.
    let mut best: Option<(&str, usize)> = None;
    for &(key, count) in &tally {
        let better = match best {
            None => true,
            Some((best_key, best_count)) => {
                count > best_count
                    || (count == best_count
                        && tie_break == TieBreak::Lexicographic
                        && key < best_key)
            }
        };
        if better {
            best = Some((key, count));
        }
    }
    best.map(|(key, _)| key)
}
