use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sentinel marking every execution failure mode: missing entry routine,
/// raised exception, timeout, abnormal process exit. Legitimate return
/// values for the types in scope never render as this string.
pub const UNDEFINED: &str = "UNDEFINED";

/// One generated program purporting to solve a task.
///
/// Identity is the exact source text; pools are ordered and never
/// deduplicated, so two candidates with the same text are the same
/// candidate for membership checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Candidate {
    source: String,
}

impl Candidate {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Canonical textual rendering of an entry routine's return value, or the
/// `UNDEFINED` sentinel, possibly followed by diagnostic text describing
/// the failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExecutionOutcome(String);

impl ExecutionOutcome {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The bare failure sentinel, with no diagnostic suffix.
    pub fn undefined() -> Self {
        Self(UNDEFINED.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the rendering carries the failure sentinel.
    pub fn is_undefined(&self) -> bool {
        self.0.contains(UNDEFINED)
    }

    /// Key used when tallying outcomes across a pool: every failure
    /// collapses to the bare sentinel so that two failures with different
    /// diagnostics count as the same outcome.
    pub fn consensus_key(&self) -> &str {
        if self.is_undefined() {
            UNDEFINED
        } else {
            &self.0
        }
    }
}

impl std::fmt::Display for ExecutionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One problem's worth of cached material: candidates from the generation
/// model, tests from the test-proposal collaborator, and optionally the
/// trusted canonical solution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemRecord {
    #[serde(default)]
    pub prompt: String,
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub canonical: Option<Candidate>,
    #[serde(default)]
    pub tests: Vec<String>,
}

/// Per-problem comparison of the two selection strategies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemReport {
    pub task_id: String,
    pub initial_pool: usize,
    pub elimination_survivors: usize,
    pub consensus_survivors: usize,
    /// Whether the canonical solution survived each strategy; `None` when
    /// it was not injected into the pool.
    pub elimination_kept_canonical: Option<bool>,
    pub consensus_kept_canonical: Option<bool>,
}

/// Full evaluation run across a set of problems.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub problems: Vec<ProblemReport>,
}

impl RunReport {
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            problems: Vec::new(),
        }
    }
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}
