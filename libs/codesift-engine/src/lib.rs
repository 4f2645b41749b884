/// Candidate Execution & Selection Engine
///
/// **Core Responsibility:**
/// Narrow a pool of generated candidate programs down to the ones most
/// likely correct, using a small set of test inputs.
///
/// **Layering (leaves first):**
/// - `locator` finds the entry routine inside a candidate's source
/// - `sandbox` runs one candidate against one test input in isolation
/// - `oracle` computes expected outputs from the canonical solution
/// - `elimination` prunes the pool test-by-test against the oracle
/// - `consensus` scores candidates by agreement with the per-test majority
/// - `ranking` scores test inputs by how evenly they split the pool
///
/// **Critical Architectural Boundary:**
/// The selection algorithms know WHAT outcome each (candidate, test) pair
/// produced, never HOW execution happened. They are written against the
/// `Executor` seam so the sandbox backend stays swappable.
pub mod consensus;
pub mod elimination;
pub mod executor;
pub mod locator;
pub mod oracle;
pub mod ranking;
pub mod sandbox;

#[cfg(test)]
pub(crate) mod testutil;

pub use executor::{execute_pool, Executor};
pub use oracle::Oracle;
pub use sandbox::Sandbox;
