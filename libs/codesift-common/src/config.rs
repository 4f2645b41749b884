// Configuration objects shared by the engine and its collaborators
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Execution sandbox settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SandboxConfig {
    /// Interpreter used to run synthesized candidate programs.
    #[serde(default = "default_interpreter")]
    pub interpreter: String,
    /// Wall-clock limit per sandbox call, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Width of the bounded worker pool for sandbox calls; 1 is fully
    /// sequential.
    #[serde(default = "default_parallelism")]
    pub parallelism: usize,
}

fn default_interpreter() -> String {
    "python3".to_string()
}

fn default_timeout_ms() -> u64 {
    2000
}

fn default_parallelism() -> usize {
    1
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            timeout_ms: default_timeout_ms(),
            parallelism: default_parallelism(),
        }
    }
}

/// Settings for the external test-proposal collaborator (the model that
/// produces discriminating test inputs). The engine itself holds no model
/// client state; this object is handed to the collaborator's constructor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestProposalConfig {
    pub endpoint: String,
    #[serde(default)]
    pub credential: String,
    pub model_identifier: String,
    /// Number of test inputs requested per problem.
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
}

fn default_sample_count() -> usize {
    5
}

impl TestProposalConfig {
    /// Load collaborator settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("test proposal config not found: {}", path.display());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))
    }
}
