/// Oracle - Ground Truth from the Canonical Solution
///
/// Wraps the trusted canonical candidate and computes the expected outcome
/// for a test input by executing it through the same sandbox primitive the
/// pool goes through. No state beyond the borrowed canonical source;
/// repeated calls with the same input are idempotent modulo the executor's
/// own determinism.
use codesift_common::types::{Candidate, ExecutionOutcome};

use crate::executor::Executor;

pub struct Oracle<'a, E> {
    executor: &'a E,
    canonical: &'a Candidate,
}

impl<'a, E: Executor> Oracle<'a, E> {
    pub fn new(executor: &'a E, canonical: &'a Candidate) -> Self {
        Self { executor, canonical }
    }

    /// Expected outcome for a test input; `UNDEFINED` when the canonical
    /// solution itself cannot be evaluated on it.
    pub async fn evaluate(&self, test_input: &str) -> ExecutionOutcome {
        self.executor.execute(self.canonical, test_input).await
    }
}
