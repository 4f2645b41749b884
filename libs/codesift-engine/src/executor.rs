/// Execution Seam - Abstraction Between Sandbox and Selectors
///
/// **Why This Exists:**
/// Enables swappable execution backends without touching selection logic.
/// Production uses the process-isolating `Sandbox`; algorithm tests use a
/// scripted in-memory table.
use std::future::Future;

use codesift_common::types::{Candidate, ExecutionOutcome};
use futures_util::stream::{self, StreamExt};

/// Swappable execution backend.
pub trait Executor {
    /// Run one candidate against one test input.
    ///
    /// Never fails: every failure mode collapses into the `UNDEFINED`
    /// outcome rather than an error.
    fn execute(
        &self,
        candidate: &Candidate,
        test_input: &str,
    ) -> impl Future<Output = ExecutionOutcome> + Send;

    /// Width of the bounded worker pool used by [`execute_pool`].
    fn parallelism(&self) -> usize {
        1
    }
}

/// Execute every candidate in the pool against a single test input.
///
/// Outcomes come back in pool order, and all of them are collected before
/// the caller makes any filtering or tallying decision. Each call is
/// independent, so calls are fanned out through a bounded worker pool of
/// `executor.parallelism()` concurrent invocations; width 1 reproduces the
/// fully sequential reference behaviour.
pub async fn execute_pool<E: Executor>(
    executor: &E,
    pool: &[Candidate],
    test_input: &str,
) -> Vec<ExecutionOutcome> {
    let width = executor.parallelism().max(1);
    stream::iter(
        pool.iter()
            .map(|candidate| executor.execute(candidate, test_input)),
    )
    .buffered(width)
    .collect()
    .await
}
