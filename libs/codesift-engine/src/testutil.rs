/// Scripted executor for algorithm tests: a fixed table of
/// (candidate, test input) → rendered outcome, with `UNDEFINED` for every
/// pair left unscripted. Counts executions so tests can assert on early
/// termination and skip behaviour.
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use codesift_common::types::{Candidate, ExecutionOutcome};

use crate::executor::Executor;

pub(crate) struct TableExecutor {
    rows: HashMap<(String, String), String>,
    parallelism: usize,
    calls: AtomicUsize,
}

impl TableExecutor {
    pub(crate) fn new() -> Self {
        Self {
            rows: HashMap::new(),
            parallelism: 1,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn with_row(mut self, candidate: &Candidate, test_input: &str, output: &str) -> Self {
        self.rows.insert(
            (candidate.source().to_string(), test_input.to_string()),
            output.to_string(),
        );
        self
    }

    pub(crate) fn with_parallelism(mut self, parallelism: usize) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Total number of execute calls made so far.
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Executor for TableExecutor {
    async fn execute(&self, candidate: &Candidate, test_input: &str) -> ExecutionOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self
            .rows
            .get(&(candidate.source().to_string(), test_input.to_string()))
        {
            Some(output) => ExecutionOutcome::new(output.clone()),
            None => ExecutionOutcome::undefined(),
        }
    }

    fn parallelism(&self) -> usize {
        self.parallelism
    }
}
